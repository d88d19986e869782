//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around raw values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::path::{Path, PathBuf};

/// Where a fixture document is read from.
///
/// Sources starting with `http://` or `https://` are fetched over HTTP;
/// anything else is treated as a filesystem path.
///
/// # Example
///
/// ```rust
/// use catalog_admin::FixtureSource;
///
/// let remote = FixtureSource::new("https://cdn.example.com/json/products.json").unwrap();
/// assert!(remote.is_remote());
/// assert_eq!(remote.host_name(), Some("cdn.example.com"));
///
/// let local = FixtureSource::new("public/json/products.json").unwrap();
/// assert!(!local.is_remote());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FixtureSource {
    /// An HTTP(S) URL.
    Url {
        /// The full URL.
        url: String,
        /// Byte offset where the host starts.
        host_start: usize,
        /// Byte offset where the host ends.
        host_end: usize,
    },
    /// A filesystem path.
    File(PathBuf),
}

impl FixtureSource {
    /// Creates a new validated fixture source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyFixtureSource`] for blank input and
    /// [`ConfigError::InvalidFixtureUrl`] for an http(s) URL without a host.
    pub fn new(source: impl Into<String>) -> Result<Self, ConfigError> {
        let source = source.into();
        let source = source.trim().to_string();

        if source.is_empty() {
            return Err(ConfigError::EmptyFixtureSource);
        }

        let lowered = source.to_ascii_lowercase();
        let scheme_len = if lowered.starts_with("https://") {
            8
        } else if lowered.starts_with("http://") {
            7
        } else {
            return Ok(Self::File(PathBuf::from(source)));
        };

        // Host ends at port, path, query, or end of string
        let remainder = &source[scheme_len..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(source.len(), |i| scheme_len + i);

        if host_end == scheme_len {
            return Err(ConfigError::InvalidFixtureUrl { url: source });
        }

        Ok(Self::Url {
            url: source,
            host_start: scheme_len,
            host_end,
        })
    }

    /// Creates a file source from a path without string validation.
    #[must_use]
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }

    /// Returns `true` when the fixture is fetched over HTTP.
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(self, Self::Url { .. })
    }

    /// Returns the host name for URL sources.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        match self {
            Self::Url {
                url,
                host_start,
                host_end,
            } => Some(&url[*host_start..*host_end]),
            Self::File(_) => None,
        }
    }
}

impl fmt::Display for FixtureSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url { url, .. } => f.write_str(url),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl Serialize for FixtureSource {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for FixtureSource {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// Number of rows shown per page of the product list.
///
/// # Example
///
/// ```rust
/// use catalog_admin::PageSize;
///
/// assert_eq!(PageSize::default().get(), 3);
/// assert!(PageSize::new(0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PageSize(usize);

impl PageSize {
    /// Rows per page when nothing else is configured.
    pub const DEFAULT: usize = 3;

    /// Creates a new validated page size.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPageSize`] if `size` is zero.
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        if size == 0 {
            return Err(ConfigError::InvalidPageSize { size });
        }
        Ok(Self(size))
    }

    /// Returns the page size.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}
