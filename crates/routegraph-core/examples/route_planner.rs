//! Small route-planning demo over a handful of cities.
//!
//! Run with logging enabled to watch the relaxation at work:
//!
//! ```sh
//! RUST_LOG=routegraph_core=debug cargo run --example route_planner
//! ```

use anyhow::Result;
use routegraph_core::{Edge, Graph, Node};
use serde_json::json;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut graph = Graph::new();

    let berlin = Node::new("BER")
        .with_title("Berlin")
        .with_metadata_value("population", json!(3_700_000));
    let prague = Node::new("PRG").with_title("Prague");
    let vienna = Node::new("VIE").with_title("Vienna");
    let munich = Node::new("MUC").with_title("Munich");

    graph.add_bidirectional_edge(Edge::new("EC 178", 4.0), berlin.clone(), prague.clone())?;
    graph.add_bidirectional_edge(Edge::new("RJ 73", 4.0), prague, vienna.clone())?;
    graph.add_bidirectional_edge(Edge::new("ICE 501", 4.5), berlin, munich.clone())?;
    graph.add_bidirectional_edge(Edge::new("RJ 63", 4.0), munich, vienna)?;

    println!(
        "network: {} stations, {} directed connections",
        graph.node_count(),
        graph.edge_count()
    );

    match graph.shortest_route("BER", "VIE") {
        Some(route) => {
            println!("cheapest route: {route}");
            println!("total travel time: {}h", route.total_weight());
        }
        None => println!("Vienna is unreachable from Berlin"),
    }

    Ok(())
}
