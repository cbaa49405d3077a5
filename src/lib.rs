//! The sitemapgen library streams sitemap, sitemap index and robots.txt documents
//! to arbitrary async sinks, splitting large URL sets across multiple sitemaps.

pub mod constants;
pub mod elements;
pub mod entry;
pub mod error;
pub mod extensions;
pub mod generate;
pub mod index;
pub mod parse;
pub mod robots;
pub mod sitemap;
pub mod storage;
pub mod writers;

use std::fmt;

/// Enum representing the output format of a sitemap.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SiteMapFormat {
    /// `<urlset>` XML document
    #[default]
    Xml,
    /// One location per CRLF-terminated line
    Text,
}

impl SiteMapFormat {
    /// File extension used for generated partitions.
    pub fn extension(self) -> &'static str {
        match self {
            SiteMapFormat::Xml => "xml",
            SiteMapFormat::Text => "txt",
        }
    }
}

impl std::str::FromStr for SiteMapFormat {
    type Err = SiteMapError;

    fn from_str(input: &str) -> std::result::Result<Self, Self::Err> {
        match input {
            "xml" => Ok(SiteMapFormat::Xml),
            "text" => Ok(SiteMapFormat::Text),
            _ => Err(SiteMapError::UnsupportedFormat(input.to_owned())),
        }
    }
}

/// Lifecycle of a sitemap or sitemap index session.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SessionState {
    #[default]
    Uninitialized,
    Open,
    Closed,
}

impl fmt::Display for SessionState {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Uninitialized => write!(formatter, "uninitialized"),
            SessionState::Open => write!(formatter, "open"),
            SessionState::Closed => write!(formatter, "closed"),
        }
    }
}

impl SessionState {
    /// Fails with [`SiteMapError::InvalidState`] unless the session is in `expected`.
    ///
    /// # Errors
    ///
    /// Returns an error if the current state differs from `expected`.
    pub(crate) fn require(self, expected: SessionState, operation: &'static str) -> error::Result<()> {
        if self == expected {
            Ok(())
        } else {
            Err(SiteMapError::InvalidState {
                operation,
                state: self,
            })
        }
    }
}

pub use entry::{ChangeFreq, SiteMapEntry, SiteMapIndexEntry};
pub use error::{Result, SiteMapError};
pub use extensions::{NamespaceInfo, SitemapExtension};
pub use generate::{GenerateOptions, GenerateSummary, generate};
pub use index::{GeneratedSiteMap, SiteMapFactory, SiteMapIndex, SiteMapIndexOptions};
pub use robots::{Robots, RobotsEntry, render_robots_txt};
pub use sitemap::{SiteMap, SiteMapOptions};
pub use storage::TemporaryFileManager;
