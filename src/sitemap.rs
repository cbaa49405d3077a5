//! The sitemap module renders a single sitemap document into an async sink.

use log::debug;
use tokio::io::AsyncWrite;

use crate::constants::DEFAULT_BASE_URL;
use crate::entry::SiteMapEntry;
use crate::error::{Result, SiteMapError};
use crate::extensions::{NamespaceInfo, SitemapExtension};
use crate::writers::SiteMapWriter;
use crate::{SessionState, SiteMapFormat};

/// Options for one sitemap document.
#[derive(Clone, Debug)]
pub struct SiteMapOptions {
    pub format: SiteMapFormat,
    /// Every entry location must start with this string.
    pub base_url: String,
    extensions: Vec<NamespaceInfo>,
}

impl Default for SiteMapOptions {
    fn default() -> Self {
        Self {
            format: SiteMapFormat::default(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            extensions: Vec::new(),
        }
    }
}

impl SiteMapOptions {
    pub fn with_format(mut self, format: SiteMapFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Declares the namespace of `extension`. Declaring a namespace twice is a no-op.
    pub fn with_extension(mut self, extension: &dyn SitemapExtension) -> Self {
        let info = extension.namespace_info();
        if !self
            .extensions
            .iter()
            .any(|declared| declared.namespace == info.namespace)
        {
            self.extensions.push(info);
        }
        self
    }

    /// Declared extension namespaces, in declaration order.
    pub fn extensions(&self) -> &[NamespaceInfo] {
        &self.extensions
    }
}

/// A single sitemap document.
///
/// A `SiteMap` is used once: `initialize`, any number of `add`, then `done`.
/// The sink is owned by the sitemap until [`SiteMap::into_inner`] hands it back.
pub struct SiteMap<W> {
    base_url: String,
    writer: SiteMapWriter<W>,
    entries: usize,
    state: SessionState,
}

impl<W: AsyncWrite + Unpin + Send> SiteMap<W> {
    pub fn new(sink: W, options: SiteMapOptions) -> Self {
        Self {
            writer: SiteMapWriter::new(options.format, sink, options.extensions),
            base_url: options.base_url,
            entries: 0,
            state: SessionState::Uninitialized,
        }
    }

    /// Writes the opening framing of the document.
    ///
    /// # Errors
    ///
    /// Returns an error if the sitemap was already initialized or writing fails.
    pub async fn initialize(&mut self) -> Result<()> {
        self.state.require(SessionState::Uninitialized, "initialize")?;
        self.writer.initialize().await?;
        self.entries = 0;
        self.state = SessionState::Open;
        Ok(())
    }

    /// Adds one entry with the given extensions attached.
    ///
    /// The base URL check is a plain string prefix test; no URL normalization happens.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// * The sitemap is not open
    /// * `entry.loc` does not start with the base URL
    /// * An extension was not declared in [`SiteMapOptions`]
    /// * Writing to the sink fails
    pub async fn add(
        &mut self,
        entry: &SiteMapEntry,
        extensions: &[&dyn SitemapExtension],
    ) -> Result<()> {
        self.state.require(SessionState::Open, "add an entry")?;
        if !entry.loc.starts_with(&self.base_url) {
            return Err(SiteMapError::OutOfBaseUrl {
                loc: entry.loc.clone(),
                base_url: self.base_url.clone(),
            });
        }

        self.writer.add_entry(entry, extensions).await?;
        self.entries += 1;
        Ok(())
    }

    /// Writes the closing framing and flushes the sink.
    ///
    /// # Errors
    ///
    /// Returns an error if the sitemap is not open or writing fails.
    pub async fn done(&mut self) -> Result<()> {
        self.state.require(SessionState::Open, "close the sitemap")?;
        self.writer.done().await?;
        self.state = SessionState::Closed;
        debug!(
            "Closed sitemap with {} entries, {} bytes",
            self.entries,
            self.writer.length()
        );
        Ok(())
    }

    pub fn number_of_entries(&self) -> usize {
        self.entries
    }

    /// Size in bytes of the finished document if it were closed now.
    pub fn length(&self) -> usize {
        self.writer.length()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Gives the sink back, typically after [`SiteMap::done`].
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}
