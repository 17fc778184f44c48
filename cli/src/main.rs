//! reflow CLI - re-flow PDF-extracted text into budget-bounded paragraphs

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use reflow::export;
use reflow::{Document, Outline, ReflowOptions, ReflowPipeline, Section, DEFAULT_BUFFER};

#[derive(Parser)]
#[command(name = "reflow")]
#[command(version)]
#[command(about = "Re-flow PDF-extracted text into budget-bounded markdown paragraphs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Re-flow one text file into paragraphs
    Flow {
        /// Input text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Maximum characters per paragraph (0-2000)
        #[arg(long, default_value_t = 200)]
        max_chars: usize,

        /// Lookahead window for the numeric-citation guard
        #[arg(long, default_value_t = DEFAULT_BUFFER)]
        buffer: usize,

        /// Comma-separated abbreviation exceptions (default: "Fig,et al")
        #[arg(long)]
        exceptions: Option<String>,
    },

    /// Re-flow each "## " section of a markdown file and export document.md
    #[command(alias = "doc")]
    Document {
        /// Input markdown file with ## section headings
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (document.md in the current directory if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Maximum characters per paragraph (0-2000)
        #[arg(long, default_value_t = 200)]
        max_chars: usize,

        /// Comma-separated abbreviation exceptions (default: "Fig,et al")
        #[arg(long)]
        exceptions: Option<String>,

        /// Process sections sequentially instead of in parallel
        #[arg(long)]
        sequential: bool,

        /// Write JSON next to the markdown output
        #[arg(long)]
        json: bool,
    },

    /// Print the cleaned, deduplicated outline of a markdown file
    Outline {
        /// Input markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Flow {
            input,
            output,
            max_chars,
            buffer,
            exceptions,
        } => cmd_flow(
            &input,
            output.as_deref(),
            max_chars,
            buffer,
            exceptions.as_deref(),
        ),
        Commands::Document {
            input,
            output,
            max_chars,
            exceptions,
            sequential,
            json,
        } => cmd_document(
            &input,
            output.as_deref(),
            max_chars,
            exceptions.as_deref(),
            sequential,
            json,
        ),
        Commands::Outline { input } => cmd_outline(&input),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn build_options(max_chars: usize, buffer: usize, exceptions: Option<&str>) -> ReflowOptions {
    let mut options = ReflowOptions::new()
        .with_max_chars(max_chars)
        .with_buffer(buffer);
    if let Some(list) = exceptions {
        options = options.with_exceptions(split_exceptions(list));
    }
    options
}

fn split_exceptions(list: &str) -> Vec<String> {
    list.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn cmd_flow(
    input: &Path,
    output: Option<&Path>,
    max_chars: usize,
    buffer: usize,
    exceptions: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = fs::read_to_string(input)?;
    let pipeline = ReflowPipeline::new(build_options(max_chars, buffer, exceptions));
    let flowed = pipeline.process(&text);

    match output {
        Some(path) => {
            fs::write(path, &flowed)?;
            println!("{} {}", "Wrote".green(), path.display());
        }
        None => println!("{}", flowed),
    }
    Ok(())
}

fn cmd_document(
    input: &Path,
    output: Option<&Path>,
    max_chars: usize,
    exceptions: Option<&str>,
    sequential: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let markdown = fs::read_to_string(input)?;
    let mut doc = parse_sections(&markdown)?;

    let mut options = build_options(max_chars, DEFAULT_BUFFER, exceptions);
    options = if sequential {
        options.sequential()
    } else {
        options.parallel()
    };
    ReflowPipeline::new(options).process_document(&mut doc);

    let out_path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(export::EXPORT_FILE_NAME));
    export::write_markdown(&doc, &out_path)?;
    println!(
        "{} {} ({} sections)",
        "Wrote".green(),
        out_path.display(),
        doc.section_count()
    );

    if json {
        let json_path = out_path.with_extension("json");
        fs::write(&json_path, export::to_json(&doc, true)?)?;
        println!("{} {}", "Wrote".green(), json_path.display());
    }
    Ok(())
}

fn cmd_outline(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let markdown = fs::read_to_string(input)?;
    let outline = Outline::from_markdown(&markdown);

    if outline.is_empty() {
        println!("{}", "No headings found".yellow());
        return Ok(());
    }
    for (i, label) in outline.labels().iter().enumerate() {
        println!("{:>3}. {}", i + 1, label);
    }
    Ok(())
}

/// Split a markdown file into a document: text before the first `## `
/// heading becomes the abstract, each heading opens a section.
fn parse_sections(markdown: &str) -> Result<Document, reflow::Error> {
    let mut doc = Document::new();
    let mut label: Option<String> = None;
    let mut body = String::new();

    for line in markdown.lines() {
        if let Some(heading) = line.strip_prefix("## ") {
            match label.take() {
                Some(l) => doc.add_section(Section::new(l, body.trim()))?,
                None => doc.abstract_body = body.trim().to_string(),
            }
            label = Some(reflow::clean_label(heading.trim()));
            body = String::new();
        } else {
            body.push_str(line);
            body.push('\n');
        }
    }
    match label {
        Some(l) => doc.add_section(Section::new(l, body.trim()))?,
        None => doc.abstract_body = body.trim().to_string(),
    }
    log::debug!("parsed {} sections from input", doc.section_count());
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_exceptions() {
        assert_eq!(split_exceptions("Fig,et al"), vec!["Fig", "et al"]);
        assert_eq!(split_exceptions(" Eq , , Sec "), vec!["Eq", "Sec"]);
        assert!(split_exceptions("").is_empty());
    }

    #[test]
    fn test_parse_sections() {
        let md = "Abstract text up front.\n\n## 1. Introduction\nIntro body.\n\n## Methods\nMethods body.\n";
        let doc = parse_sections(md).unwrap();
        assert_eq!(doc.abstract_body, "Abstract text up front.");
        assert_eq!(doc.section_count(), 2);
        assert_eq!(doc.sections[0].label, "Introduction");
        assert_eq!(doc.sections[1].body, "Methods body.");
    }

    #[test]
    fn test_parse_sections_duplicate_label() {
        let md = "## Results\na\n## Results\nb\n";
        assert!(parse_sections(md).is_err());
    }

    #[test]
    fn test_parse_sections_no_headings() {
        let doc = parse_sections("just prose, no headings").unwrap();
        assert_eq!(doc.abstract_body, "just prose, no headings");
        assert_eq!(doc.section_count(), 0);
    }
}
