use crate::error::LoadError;
use std::fmt;
use std::path::PathBuf;

/// Fixed relative location of the inventory document.
pub const DEFAULT_SOURCE: &str = "data/inventory.json";

/// Where the inventory document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Http(String),
}

impl DataSource {
    /// `http://` and `https://` locations are fetched over the network,
    /// everything else is a filesystem path.
    #[must_use]
    pub fn parse(location: &str) -> Self {
        let trimmed = location.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Http(trimmed.to_string())
        } else {
            Self::File(PathBuf::from(trimmed))
        }
    }

    /// Reads the raw document text. Blocks until the read completes.
    pub fn read_to_string(&self) -> Result<String, LoadError> {
        match self {
            Self::File(path) => {
                std::fs::read_to_string(path).map_err(|source| LoadError::FileRead {
                    path: path.clone(),
                    source,
                })
            }
            Self::Http(url) => reqwest::blocking::get(url.as_str())
                .and_then(reqwest::blocking::Response::error_for_status)
                .and_then(reqwest::blocking::Response::text)
                .map_err(|source| LoadError::Http {
                    url: url.clone(),
                    source,
                }),
        }
    }
}

impl Default for DataSource {
    fn default() -> Self {
        Self::parse(DEFAULT_SOURCE)
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Http(url) => f.write_str(url),
        }
    }
}
