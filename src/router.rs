//! The argument router for batch mode.
//!
//! Batch invocations interleave tokens this tool consumes with tokens destined for the
//! external transcriber, so the `batch` subcommand captures its argument stream raw and
//! this module performs the known/unknown split.

use std::fs;
use std::path::PathBuf;

use crate::{Error, Result};

/// A validated batch request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRequest {
    /// Absolute path of the directory to process.
    pub input_dir: PathBuf,

    /// Skip-list tokens gathered from `-s/--skip_files`.
    pub skip_files: Vec<String>,

    /// Everything this tool did not recognize, in the order given.
    pub forwarded: Vec<String>,
}

/// Split a raw batch token stream into a [`BatchRequest`].
///
/// Recognized tokens:
/// - `--input_dir <dir>` / `--input_dir=<dir>` — required; must name an existing
///   directory, resolved to an absolute path
/// - `-s <name>...` / `--skip_files <name>...` / `--skip_files=<name>` — each
///   space-form occurrence consumes following tokens until the next flag, and
///   repeated occurrences extend the list
/// - `-o <dir>` / `--output_dir <dir>` / `--output_dir=<dir>` — consumed and
///   discarded; the driver always pins the output directory per file
///
/// Everything else is forwarded to the external transcriber unchanged.
pub fn route_batch(raw: &[String]) -> Result<BatchRequest> {
    let mut input_dir: Option<String> = None;
    let mut skip_files: Vec<String> = Vec::new();
    let mut forwarded: Vec<String> = Vec::new();

    let mut tokens = raw.iter().peekable();
    while let Some(token) = tokens.next() {
        match token.as_str() {
            "--input_dir" => {
                let value = tokens.next().ok_or_else(|| Error::MissingValue {
                    flag: token.clone(),
                })?;
                input_dir = Some(value.clone());
            }
            "-s" | "--skip_files" => {
                let before = skip_files.len();
                while let Some(next) = tokens.peek() {
                    if next.starts_with('-') {
                        break;
                    }
                    skip_files.push((*next).clone());
                    tokens.next();
                }
                if skip_files.len() == before {
                    return Err(Error::MissingValue {
                        flag: token.clone(),
                    });
                }
            }
            "-o" | "--output_dir" => {
                // Swallow the value so it is not mistaken for a forwarding argument.
                tokens.next().ok_or_else(|| Error::MissingValue {
                    flag: token.clone(),
                })?;
            }
            _ => {
                if let Some(value) = token.strip_prefix("--input_dir=") {
                    input_dir = Some(value.to_string());
                } else if let Some(value) = token.strip_prefix("--skip_files=") {
                    skip_files.push(value.to_string());
                } else if token.strip_prefix("--output_dir=").is_some() {
                    // Discarded, same as the space form.
                } else {
                    forwarded.push(token.clone());
                }
            }
        }
    }

    let input_dir = input_dir.ok_or(Error::MissingInputDir)?;
    let input_dir = validate_input_dir(input_dir)?;

    Ok(BatchRequest {
        input_dir,
        skip_files,
        forwarded,
    })
}

/// Require an existing directory and resolve it to an absolute path.
fn validate_input_dir(raw: String) -> Result<PathBuf> {
    let path = PathBuf::from(&raw);
    if !path.is_dir() {
        return Err(Error::NotADirectory { path });
    }
    Ok(fs::canonicalize(path)?)
}
