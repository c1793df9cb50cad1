//! `zip` / `unzip` command handlers.

use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use osmkit_download::{LoggedFile, OpenMode};
use serde_json::Value;

/// Wrap the JSON document read from `input` into an envelope.
pub fn execute_zip(input: Option<&Path>, output: Option<&Path>) -> Result<()> {
    let text = read_input(input)?;
    write_output(output, &zip_text(&text)?)
}

/// Unwrap the envelope read from `input`.
pub fn execute_unzip(input: Option<&Path>, output: Option<&Path>, lenient: bool) -> Result<()> {
    let text = read_input(input)?;
    write_output(output, &unzip_text(&text, lenient)?)
}

fn zip_text(text: &str) -> Result<String> {
    let value: Value = serde_json::from_str(text).context("Input is not valid JSON")?;
    let envelope = osmkit_zipjson::zip(&value)?;
    Ok(serde_json::to_string_pretty(&envelope)?)
}

fn unzip_text(text: &str, lenient: bool) -> Result<String> {
    let value: Value = serde_json::from_str(text).context("Input is not valid JSON")?;
    let unzipped = osmkit_zipjson::unzip_with(value, !lenient)?;
    Ok(serde_json::to_string_pretty(&unzipped)?)
}

fn read_input(input: Option<&Path>) -> Result<String> {
    if let Some(path) = input {
        return Ok(LoggedFile::open(path)?.read_text()?);
    }

    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read stdin")?;
    Ok(text)
}

fn write_output(output: Option<&Path>, text: &str) -> Result<()> {
    if let Some(path) = output {
        let mut file = LoggedFile::create(path, OpenMode::WriteText)?;
        writeln!(file, "{text}")
            .and_then(|()| file.flush())
            .with_context(|| format!("Failed to write {}", path.display()))?;
    } else {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{text}")?;
        stdout.flush()?;
    }
    Ok(())
}
