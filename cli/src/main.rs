//! pdftoc CLI - PDF outline extraction tool

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pdftoc::{
    batch, extract_file_with_options, merge_adjacent, render, ExtractOptions, FontProfile,
    JsonFormat, PdfParser,
};

#[derive(Parser)]
#[command(name = "pdftoc")]
#[command(version)]
#[command(about = "Extract a title and H1-H3 outline from PDF documents", long_about = None)]
struct Cli {
    /// Input PDF file
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output JSON file (stdout if not specified)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Output compact JSON
    #[arg(long)]
    compact: bool,

    /// Join consecutive same-level headings on the same page
    #[arg(long)]
    merge_adjacent: bool,

    /// Only accept bold spans as headings
    #[arg(long)]
    bold_only: bool,

    /// Font size class tolerance in points
    #[arg(long, value_name = "PT")]
    epsilon: Option<f32>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a directory of PDFs into a directory of JSON files
    Batch {
        /// Input directory
        #[arg(value_name = "INPUT_DIR")]
        input_dir: PathBuf,

        /// Output directory
        #[arg(value_name = "OUTPUT_DIR")]
        output_dir: PathBuf,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Only accept bold spans as headings
        #[arg(long)]
        bold_only: bool,

        /// Font size class tolerance in points
        #[arg(long, value_name = "PT")]
        epsilon: Option<f32>,
    },

    /// Show document metadata and the computed font profile
    Info {
        /// Input PDF file
        #[arg(value_name = "INPUT")]
        input: PathBuf,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Batch {
            input_dir,
            output_dir,
            compact,
            bold_only,
            epsilon,
        }) => cmd_batch(
            &input_dir,
            &output_dir,
            build_options(bold_only, epsilon),
            json_format(compact),
        ),
        Some(Commands::Info { input }) => cmd_info(&input),
        None => {
            if let Some(input) = cli.input {
                cmd_extract(
                    &input,
                    cli.output.as_deref(),
                    build_options(cli.bold_only, cli.epsilon),
                    json_format(cli.compact),
                    cli.merge_adjacent,
                )
            } else {
                println!("{}", "Usage: pdftoc <INPUT.pdf> [OUTPUT.json]".yellow());
                println!("       pdftoc --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn build_options(bold_only: bool, epsilon: Option<f32>) -> ExtractOptions {
    let mut options = ExtractOptions::new();
    if bold_only {
        options = options.bold_headings_only();
    }
    if let Some(e) = epsilon {
        options = options.with_epsilon(e);
    }
    options
}

fn json_format(compact: bool) -> JsonFormat {
    if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    }
}

fn cmd_extract(
    input: &Path,
    output: Option<&Path>,
    options: ExtractOptions,
    format: JsonFormat,
    merge: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut doc = extract_file_with_options(input, options)?;
    if merge {
        doc.outline = merge_adjacent(doc.outline);
    }

    let json = render::to_json(&doc, format)?;

    match output {
        Some(path) => {
            fs::write(path, &json)?;
            println!(
                "{} {} ({} headings)",
                "Saved to".green(),
                path.display(),
                doc.outline.len()
            );
        }
        None => println!("{}", json),
    }

    Ok(())
}

fn cmd_batch(
    input_dir: &Path,
    output_dir: &Path,
    options: ExtractOptions,
    format: JsonFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("Processing {}...", input_dir.display()));

    let report = batch::process_dir(input_dir, output_dir, &options, format)?;
    pb.finish_and_clear();

    if report.is_empty() {
        println!(
            "{} {}",
            "No PDF files found in".yellow(),
            input_dir.display()
        );
        return Ok(());
    }

    println!("{}", "Batch summary:".green().bold());
    for entry in &report.entries {
        let name = entry.input.file_name().unwrap_or_default().to_string_lossy();
        match &entry.error {
            None => println!(
                "  {} {} ({:.2}s)",
                "ok".green(),
                name,
                entry.elapsed.as_secs_f32()
            ),
            Some(err) => println!("  {} {}: {}", "failed".red(), name, err),
        }
    }
    println!(
        "{} succeeded, {} failed, {:.2}s total",
        report.succeeded(),
        report.failed(),
        report.total_elapsed().as_secs_f32()
    );

    if report.succeeded() == 0 {
        return Err(format!("all {} documents failed", report.failed()).into());
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let parser = PdfParser::open(input)?;
    let metadata = parser.metadata();

    let options = ExtractOptions::default();
    let spans = parser.collect_spans(&options)?;
    let profile = FontProfile::build(&spans, options.epsilon);

    println!("{}", "Document".green().bold());
    println!("  {:<10} {}", "Version:", metadata.pdf_version);
    println!("  {:<10} {}", "Pages:", metadata.page_count);
    if let Some(title) = &metadata.title {
        println!("  {:<10} {}", "Title:", title);
    }
    if let Some(author) = &metadata.author {
        println!("  {:<10} {}", "Author:", author);
    }
    if let Some(producer) = &metadata.producer {
        println!("  {:<10} {}", "Producer:", producer);
    }
    if let Some(created) = &metadata.created {
        println!("  {:<10} {}", "Created:", created.to_rfc3339());
    }
    if let Some(modified) = &metadata.modified {
        println!("  {:<10} {}", "Modified:", modified.to_rfc3339());
    }

    println!();
    println!("{}", "Font profile".green().bold());
    println!("  {:<10} {}", "Spans:", spans.len());
    match profile.body_size {
        Some(size) => println!("  {:<10} {:.1}pt", "Body:", size),
        None => println!("  {:<10} -", "Body:"),
    }
    if let Some(size) = profile.title_size {
        println!("  {:<10} {:.1}pt (excluded)", "Title:", size);
    }
    for (label, threshold) in [("H1:", profile.h1), ("H2:", profile.h2), ("H3:", profile.h3)] {
        match threshold {
            Some(size) => println!("  {:<10} {:.1}pt", label, size),
            None => println!("  {:<10} unassigned", label),
        }
    }

    Ok(())
}
