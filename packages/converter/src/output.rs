//! Rendering converted structures as JSON or YAML.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use clap::ValueEnum;
use serde::Serialize;

use crate::error::Result;

/// Serialization format for output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

/// Render a value in the given format.
///
/// `pretty` only affects JSON; YAML is always block style. Output always
/// ends with a newline.
pub fn render<T: Serialize + ?Sized>(value: &T, format: OutputFormat, pretty: bool) -> Result<String> {
    let mut content = match format {
        OutputFormat::Json if pretty => serde_json::to_string_pretty(value)?,
        OutputFormat::Json => serde_json::to_string(value)?,
        OutputFormat::Yaml => serde_yaml_ng::to_string(value)?,
    };
    if !content.ends_with('\n') {
        content.push('\n');
    }
    Ok(content)
}

/// Write rendered output to a file, or to stdout when no path is given.
pub fn write_output(content: &str, output_file: Option<&Path>) -> Result<()> {
    match output_file {
        Some(path) => save_output(content, path),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}

/// Write rendered output to a file.
///
/// Writes to a temp file next to the target, syncs, then renames, so a crash
/// never leaves a half-written output file behind.
pub fn save_output(content: &str, output_file: &Path) -> Result<()> {
    let file_name = output_file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let temp_file = output_file.with_file_name(format!(".{file_name}.tmp"));

    {
        let mut file = File::create(&temp_file)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if output_file.exists() {
        fs::remove_file(output_file)?;
    }

    fs::rename(&temp_file, output_file)?;
    tracing::debug!(path = %output_file.display(), "Saved output");
    Ok(())
}
