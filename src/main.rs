use std::process;

use clap::Parser;

use bannerstamp::banner::{LabelFont, LABEL_SIZE_PX};
use bannerstamp::cli::{self, Args};
use bannerstamp::pipeline;

fn main() {
    // Initialize logging subsystem
    bannerstamp::logging::init_subscriber().expect("Failed to initialize logging subsystem");

    // Parse command-line arguments
    let args = Args::parse();

    // Resolve preset/custom flags into one concrete banner specification
    let spec = cli::resolve_spec(&args).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    // Parse the embedded font once; it is reused for every image
    let font = LabelFont::embedded(LABEL_SIZE_PX).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    if let Err(e) = pipeline::ensure_output_dir(&args.output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    tracing::info!(
        label = %spec.label,
        placement = spec.placement.as_str(),
        banner_height = spec.banner_height,
        output_dir = %args.output.display(),
        "Banner specification resolved"
    );

    if let Some(file) = &args.file {
        match pipeline::process_file(file, &spec, &font, &args.output) {
            Ok(output) => {
                tracing::info!(
                    input = %file.display(),
                    output = %output.display(),
                    "File classified successfully"
                );
                println!("File classified successfully: {}", file.display());
            }
            Err(e) => {
                eprintln!("Error processing file '{}': {}", file.display(), e);
                process::exit(1);
            }
        }
    }

    if let Some(dir) = &args.dir {
        match pipeline::process_directory(dir, &spec, &font, &args.output) {
            Ok(summary) => {
                tracing::info!(
                    processed = summary.succeeded,
                    "All images in directory classified successfully"
                );
                println!(
                    "All images in directory classified successfully: {}",
                    dir.display()
                );
            }
            Err(e) => {
                eprintln!("Error processing directory '{}': {}", dir.display(), e);
                process::exit(1);
            }
        }
    }
}
