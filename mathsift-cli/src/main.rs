//! Command-line interface for mathsift
//! This binary extracts the mathematical expressions from a document into a
//! plain-text list, converting the document to LaTeX first when needed.
//!
//! Usage:
//!   mathsift `<path>` [--from `<format>`] [--output `<path>` | --write]   - Extract expressions
//!   mathsift --list-formats                                               - List supported input formats

use clap::{Arg, ArgAction, Command};
use mathsift_config::{Loader, MathsiftConfig};
use mathsift_convert::{ConvertError, ExtractionSpec, FormatRegistry};
use std::path::{Path, PathBuf};

fn main() {
    let matches = Command::new("mathsift")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extract the mathematical expressions from a document into plain text")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("Path to the input document")
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("from")
                .long("from")
                .short('f')
                .help("Input format name (default: inferred from the file extension)"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Write the result to this file instead of stdout"),
        )
        .arg(
            Arg::new("write")
                .long("write")
                .short('w')
                .help("Write the result next to the input, with the configured extension")
                .action(ArgAction::SetTrue)
                .conflicts_with("output"),
        )
        .arg(
            Arg::new("emit")
                .long("emit")
                .help("Output shape: 'text' (blank-line separated) or 'json' (array of expressions)")
                .default_value("text"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("pandoc")
                .long("pandoc")
                .help("Converter executable to use (overrides configuration)"),
        )
        .arg(
            Arg::new("keep-intermediate")
                .long("keep-intermediate")
                .help("Keep the intermediate conversion directory for inspection")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List supported input formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let config = load_config(&matches);

    let input = matches
        .get_one::<String>("input")
        .expect("input is required unless listing formats");
    let emit = matches.get_one::<String>("emit").expect("emit has a default");
    handle_extract_command(&matches, &config, Path::new(input), emit);
}

/// Layer configuration sources: embedded defaults, then the user file, then
/// per-flag overrides.
fn load_config(matches: &clap::ArgMatches) -> MathsiftConfig {
    let mut loader = match matches.get_one::<String>("config") {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new().with_optional_file("mathsift.toml"),
    };

    if let Some(executable) = matches.get_one::<String>("pandoc") {
        loader = loader
            .set_override("converter.executable", executable.as_str())
            .unwrap_or_else(|e| {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            });
    }
    if matches.get_flag("keep-intermediate") {
        loader = loader
            .set_override("converter.keep_intermediate", true)
            .unwrap_or_else(|e| {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            });
    }

    loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    })
}

/// Handle the extract command
fn handle_extract_command(
    matches: &clap::ArgMatches,
    config: &MathsiftConfig,
    input: &Path,
    emit: &str,
) {
    let output_path = resolve_output_path(matches, config, input);

    let mut spec = ExtractionSpec::new(input).with_options(config.converter.to_options());
    if let Some(format) = matches.get_one::<String>("from") {
        spec = spec.with_format(format);
    }
    // In json mode the artifact is produced here, not by the pipeline.
    if emit == "text" {
        if let Some(path) = &output_path {
            spec = spec.with_output_path(path);
        }
    }

    let result = mathsift_convert::run_extraction(spec).unwrap_or_else(|e| {
        report_error(&e);
        std::process::exit(1);
    });

    if let Some(dir) = &result.intermediate_dir {
        eprintln!("Intermediate files kept in {}", dir.display());
    }

    match emit {
        "text" => {
            if let mathsift_convert::Artifact::InMemory(text) = &result.artifact {
                print!("{}", text);
            }
        }
        "json" => {
            let json = serde_json::to_string_pretty(&result.expressions).unwrap_or_else(|e| {
                eprintln!("Error formatting expressions: {}", e);
                std::process::exit(1);
            });
            match &output_path {
                Some(path) => {
                    std::fs::write(path, json).unwrap_or_else(|e| {
                        eprintln!("Error writing '{}': {}", path.display(), e);
                        std::process::exit(1);
                    });
                }
                None => println!("{}", json),
            }
        }
        other => {
            eprintln!("Emit '{}' not supported", other);
            eprintln!("Available emit shapes: text, json");
            std::process::exit(1);
        }
    }
}

/// Explicit --output wins; --write derives a sibling of the input using the
/// configured extension; neither means stdout.
fn resolve_output_path(
    matches: &clap::ArgMatches,
    config: &MathsiftConfig,
    input: &Path,
) -> Option<PathBuf> {
    if let Some(path) = matches.get_one::<String>("output") {
        return Some(PathBuf::from(path));
    }
    if matches.get_flag("write") {
        return Some(input.with_extension(&config.output.extension));
    }
    None
}

fn report_error(err: &ConvertError) {
    eprintln!("Extraction error: {}", err);
    if matches!(err, ConvertError::FormatNotFound(_)) {
        let registry = FormatRegistry::with_defaults();
        eprintln!("\nAvailable formats:");
        for name in registry.list_formats() {
            let format = registry.get(&name).expect("listed format");
            eprintln!("  {} - {}", name, format.description());
        }
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Supported input formats:\n");

    for name in registry.list_formats() {
        let format = registry.get(&name).expect("listed format");
        println!("  {} ({})", name, format.file_extensions().join(", "));
        println!("    {}", format.description());
        println!();
    }
}
