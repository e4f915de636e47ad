//! CLI logic for the Arbor layout tool.
//!
//! This module contains the core CLI logic for the Arbor layout tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use arbor::{ArborError, GraphBuilder};

/// Run the Arbor CLI application
///
/// This function processes the input file through the Arbor pipeline
/// and writes the resulting graph document to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `ArborError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors
/// - Layout errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), ArborError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing JSON document"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Read input file
    let source = fs::read_to_string(&args.input)?;

    // Process document using GraphBuilder API
    let builder = GraphBuilder::new(app_config);
    let value = builder.parse(&source)?;
    let graph = builder.build(&value)?;
    let document = builder.render_json(&graph)?;

    // Write output file
    fs::write(&args.output, document)?;

    info!(output_file = args.output; "Graph document exported successfully");

    Ok(())
}
