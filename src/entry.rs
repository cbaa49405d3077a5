//! Records accepted by sitemaps and sitemap indexes.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Deserialize;

use crate::error::{Result, SiteMapError};

/// How frequently the page is likely to change.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            ChangeFreq::Always => "always",
            ChangeFreq::Hourly => "hourly",
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
            ChangeFreq::Yearly => "yearly",
            ChangeFreq::Never => "never",
        };
        formatter.write_str(value)
    }
}

/// One `<url>` of a sitemap.
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct SiteMapEntry {
    /// URL of the page.
    pub loc: String,
    /// Date of last modification in W3C Datetime format.
    #[serde(default)]
    pub lastmod: Option<String>,
    #[serde(default)]
    pub changefreq: Option<ChangeFreq>,
    /// Priority of this URL relative to other URLs on the site, `0.0..=1.0`.
    #[serde(default)]
    pub priority: Option<f64>,
}

impl SiteMapEntry {
    pub fn new(loc: impl Into<String>) -> Self {
        Self {
            loc: loc.into(),
            lastmod: None,
            changefreq: None,
            priority: None,
        }
    }

    pub fn with_lastmod(mut self, lastmod: impl Into<String>) -> Self {
        self.lastmod = Some(lastmod.into());
        self
    }

    /// Sets `lastmod` from a timestamp, rendered as a W3C datetime.
    pub fn with_lastmod_date(self, lastmod: DateTime<Utc>) -> Self {
        self.with_lastmod(lastmod.to_rfc3339_opts(SecondsFormat::Secs, true))
    }

    pub fn with_changefreq(mut self, changefreq: ChangeFreq) -> Self {
        self.changefreq = Some(changefreq);
        self
    }

    /// Sets the priority of the entry.
    ///
    /// # Errors
    ///
    /// Returns [`SiteMapError::InvalidPriority`] if `priority` is outside `0.0..=1.0`.
    pub fn with_priority(mut self, priority: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&priority) {
            return Err(SiteMapError::InvalidPriority(priority));
        }
        self.priority = Some(priority);
        Ok(self)
    }

    /// Checks the invariants that deserialization cannot express.
    ///
    /// # Errors
    ///
    /// Returns an error if `loc` is empty or the priority is out of range.
    pub fn validate(&self) -> Result<()> {
        if self.loc.is_empty() {
            return Err(SiteMapError::InvalidEntry("loc must not be empty".to_owned()));
        }
        match self.priority {
            Some(priority) if !(0.0..=1.0).contains(&priority) => {
                Err(SiteMapError::InvalidPriority(priority))
            }
            _ => Ok(()),
        }
    }
}

/// Reference to one sitemap inside a sitemap index.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SiteMapIndexEntry {
    /// Location of the sitemap.
    pub loc: String,
    /// Time the sitemap file was modified, not the pages listed in it.
    pub lastmod: Option<String>,
}

impl SiteMapIndexEntry {
    pub fn new(loc: impl Into<String>, lastmod: Option<String>) -> Self {
        Self {
            loc: loc.into(),
            lastmod,
        }
    }
}
