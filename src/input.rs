//! Input source selection and output format handling for the command line.

use crate::config::NormalizeConfig;
use crate::error::{HtmlCanonError, Result};
use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Where the HTML comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Literal(String),
    Stdin,
}

impl InputSource {
    /// Pick exactly one source: a file path wins over a literal string,
    /// which wins over piped standard input.
    pub fn choose(
        file: Option<PathBuf>,
        html: Option<String>,
        stdin_is_piped: bool,
    ) -> Result<Self> {
        if let Some(path) = file.filter(|p| !p.as_os_str().is_empty()) {
            Ok(InputSource::File(path))
        } else if let Some(html) = html.filter(|h| !h.is_empty()) {
            Ok(InputSource::Literal(html))
        } else if stdin_is_piped {
            Ok(InputSource::Stdin)
        } else {
            Err(HtmlCanonError::NoInput)
        }
    }

    pub fn read(self) -> Result<String> {
        match self {
            InputSource::File(path) => read_file(&path),
            InputSource::Literal(html) => Ok(html),
            InputSource::Stdin => read_piped(std::io::stdin().lock()),
        }
    }
}

/// Read piped input. A stream with no content, such as `/dev/null`, counts
/// as no input at all.
pub fn read_piped<R: Read>(mut reader: R) -> Result<String> {
    let mut buf = String::new();
    reader
        .read_to_string(&mut buf)
        .map_err(HtmlCanonError::ReadStdin)?;
    if buf.trim().is_empty() {
        return Err(HtmlCanonError::NoInput);
    }
    Ok(buf)
}

pub fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| HtmlCanonError::ReadInput {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a JSON normalization config. Missing fields take their defaults.
pub fn load_config(path: &Path) -> Result<NormalizeConfig> {
    let raw = read_file(path)?;
    serde_json::from_str(&raw).map_err(|source| HtmlCanonError::Config {
        path: path.to_path_buf(),
        source,
    })
}

/// Rendering used for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Tree,
}

impl FromStr for OutputFormat {
    type Err = HtmlCanonError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "json" => Ok(OutputFormat::Json),
            "tree" => Ok(OutputFormat::Tree),
            other => Err(HtmlCanonError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => f.write_str("json"),
            OutputFormat::Tree => f.write_str("tree"),
        }
    }
}
