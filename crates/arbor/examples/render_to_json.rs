//! Example: Laying out a JSON document and printing the graph
//!
//! This example demonstrates the full pipeline: parse JSON text, lay it
//! out as a tree of positioned nodes and edges, and print the renderer
//! document to stdout.

use arbor::{
    GraphBuilder, LeafPolicy,
    config::{AppConfig, LayoutConfig, StyleConfig},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let source = r#"
    {
        "service": "billing",
        "replicas": 3,
        "endpoints": [
            {"path": "/invoices", "public": true},
            {"path": "/internal/metrics", "public": false}
        ],
        "owner": {"team": "payments", "oncall": "payments-primary"}
    }
    "#;

    // Group primitive siblings into one leaf per container to keep the
    // graph compact; use the spacing defaults.
    let config = AppConfig::new(
        LayoutConfig::new(200.0, 150.0, LeafPolicy::Grouped, None),
        StyleConfig::default(),
    );

    let builder = GraphBuilder::new(config);

    let value = builder.parse(source)?;
    let graph = builder.build(&value)?;

    println!("Laid out {} nodes and {} edges:\n", graph.node_count(), graph.edge_count());
    for node in graph.nodes() {
        println!(
            "  [{}] {:<40} at ({}, {})",
            node.id(),
            node.label(),
            node.position().x(),
            node.position().y(),
        );
    }

    println!("\nRenderer document:\n{}", builder.render_json(&graph)?);

    Ok(())
}
