//! Command-line interface for the converter.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use console::style;

use crate::config::{ConvertOptions, LeafMode, DEFAULT_DISPLAY_NAME_ATTRIBUTE};
use crate::converter::TreeConverter;
use crate::error::Result;
use crate::output::{render, write_output, OutputFormat};
use crate::strategy::{create_default_registry, AttributeStrategy, StrategyRegistry};

/// Convert O-Calc PPLX project files into nested key-value structures.
#[derive(Parser)]
#[command(name = "pplx-converter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Input file and folding options shared by all commands.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Project file to read
    pub file: PathBuf,

    /// Attribute used as the display name of elements
    #[arg(long, default_value = DEFAULT_DISPLAY_NAME_ATTRIBUTE)]
    pub name_attribute: String,

    /// Extra tag to fold with the attributes strategy (repeatable)
    #[arg(short = 'a', long = "attributes-tag")]
    pub attributes_tags: Vec<String>,

    /// Shape of elements without children
    #[arg(long, value_enum, default_value_t)]
    pub leaf_mode: LeafMode,
}

impl InputArgs {
    fn registry(&self) -> StrategyRegistry {
        let mut registry = create_default_registry(&self.name_attribute);
        for tag in &self.attributes_tags {
            registry.register(
                tag.as_str(),
                AttributeStrategy::with_key_attribute(self.name_attribute.as_str()),
            );
        }
        registry
    }

    fn options(&self) -> ConvertOptions {
        ConvertOptions::new()
            .with_name_attribute(self.name_attribute.as_str())
            .with_leaf_mode(self.leaf_mode)
    }

    fn open(&self) -> Result<TreeConverter> {
        Ok(TreeConverter::open(&self.file, self.registry())?.with_options(self.options()))
    }
}

/// Output destination and format.
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,

    /// Emit single-line JSON
    #[arg(long)]
    pub compact: bool,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert the whole document.
    Convert {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Extract single values by path, e.g. `/PPLX/Pole[P1]/Height=height`.
    Extract {
        #[command(flatten)]
        input: InputArgs,

        /// Path expressions, optionally followed by `=KEY`
        #[arg(required = true)]
        paths: Vec<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Navigate to an element and list its children.
    Browse {
        #[command(flatten)]
        input: InputArgs,

        /// Child specs (`tag`, `tag[name]`, `tag#N` for the N-th match, `..` for parent)
        steps: Vec<String>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert { input, output } => convert_command(&input, &output),
        Commands::Extract {
            input,
            paths,
            output,
        } => extract_command(&input, &paths, &output),
        Commands::Browse { input, steps } => browse_command(&input, &steps),
    }
}

/// Execute the convert command.
fn convert_command(input: &InputArgs, output: &OutputArgs) -> Result<()> {
    let converter = input.open()?;
    let converted = converter.convert();
    emit(&render(&converted, output.format, !output.compact)?, output.output.as_deref())
}

/// Execute the extract command.
fn extract_command(input: &InputArgs, paths: &[String], output: &OutputArgs) -> Result<()> {
    let mut converter = input.open()?;
    for expression in paths {
        let (path, key) = split_extraction(expression);
        converter.add_to_data(path, key)?;
    }
    emit(
        &render(converter.data(), output.format, !output.compact)?,
        output.output.as_deref(),
    )
}

/// Execute the browse command.
fn browse_command(input: &InputArgs, steps: &[String]) -> Result<()> {
    let mut converter = input.open()?;
    for step in steps {
        if step == ".." {
            converter.go_to_parent()?;
        } else {
            let (spec, occurrence) = split_occurrence(step);
            converter.go_to_child(spec, occurrence)?;
        }
    }

    println!(
        "{} {}",
        style("Current Element:").bold(),
        style(converter.current_info()).cyan()
    );
    println!(
        "{} {}",
        style("Current Path:").bold(),
        converter.current_path()
    );
    for (i, info) in converter.child_info().iter().enumerate() {
        println!("  {} {info}", style(format!("{}.", i + 1)).dim());
    }
    Ok(())
}

fn emit(content: &str, output: Option<&Path>) -> Result<()> {
    write_output(content, output)?;
    if let Some(path) = output {
        println!("{} {}", style("Saved to:").green().bold(), path.display());
    }
    Ok(())
}

/// Split `PATH=KEY` into path and key.
///
/// Only an `=` after the last `]` separates the key, so display names may
/// contain `=`.
fn split_extraction(expression: &str) -> (&str, Option<&str>) {
    let search_from = expression.rfind(']').map_or(0, |i| i + 1);
    match expression[search_from..].rfind('=') {
        Some(offset) => {
            let at = search_from + offset;
            (&expression[..at], Some(&expression[at + 1..]))
        }
        None => (expression, None),
    }
}

/// Split `SPEC#N` into spec and occurrence; a missing or invalid `#N` means 0.
fn split_occurrence(step: &str) -> (&str, usize) {
    step.rsplit_once('#')
        .and_then(|(spec, n)| n.parse().ok().map(|n| (spec, n)))
        .unwrap_or((step, 0))
}
