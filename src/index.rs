//! The index module spans an unbounded stream of entries across size and count
//! bounded sitemaps, and records every sitemap it opens in a sitemap index.
//!
//! Sitemaps are created lazily through a caller supplied [`SiteMapFactory`], which
//! decides where each sitemap is written and how it is named. The index only writes
//! to a sitemap between the factory's `generate` and `done` calls, and calls both
//! exactly once for every sitemap it opens.

use async_trait::async_trait;
use log::{debug, info, warn};
use tokio::io::AsyncWrite;

use crate::SessionState;
use crate::constants::{DEFAULT_ENTRIES_LIMIT, DEFAULT_SIZE_LIMIT};
use crate::entry::{SiteMapEntry, SiteMapIndexEntry};
use crate::error::{Result, SiteMapError};
use crate::extensions::SitemapExtension;
use crate::sitemap::SiteMap;
use crate::writers::SiteMapIndexXmlWriter;

/// A sitemap created by a [`SiteMapFactory`] together with its index record data.
pub struct GeneratedSiteMap<S> {
    /// Zero-based position of the sitemap in the index.
    pub index: usize,
    pub site_map: SiteMap<S>,
    /// Value written to `<loc>` in the index.
    pub file_name: String,
    /// Value written to `<lastmod>` in the index.
    pub last_modified: Option<String>,
}

impl<S> GeneratedSiteMap<S> {
    pub fn new(index: usize, site_map: SiteMap<S>, file_name: impl Into<String>) -> Self {
        Self {
            index,
            site_map,
            file_name: file_name.into(),
            last_modified: None,
        }
    }

    pub fn with_last_modified(mut self, last_modified: impl Into<String>) -> Self {
        self.last_modified = Some(last_modified.into());
        self
    }

    fn index_entry(&self) -> SiteMapIndexEntry {
        SiteMapIndexEntry::new(self.file_name.clone(), self.last_modified.clone())
    }
}

/// Creates and finalizes the sitemaps of a [`SiteMapIndex`].
#[async_trait]
pub trait SiteMapFactory: Send {
    type Sink: AsyncWrite + Unpin + Send;

    /// Creates the sitemap at position `index`.
    ///
    /// The returned sitemap may already be initialized; if it is not, the index
    /// initializes it.
    async fn generate(&mut self, index: usize) -> Result<GeneratedSiteMap<Self::Sink>>;

    /// Receives a sitemap after its closing framing was written.
    ///
    /// If the index fails to open a sitemap after `generate` returned it, the sitemap
    /// is handed back here unfinished before the error is returned.
    /// Closing or persisting the underlying sink is up to the factory.
    async fn done(&mut self, site_map: GeneratedSiteMap<Self::Sink>) -> Result<()>;
}

/// Limits and factory of a [`SiteMapIndex`].
pub struct SiteMapIndexOptions<F> {
    /// A sitemap is closed once it holds this many entries.
    pub entries_limit: usize,
    /// A sitemap is closed once its finished size reaches this many bytes.
    pub size_limit: usize,
    factory: Option<F>,
}

impl<F> Default for SiteMapIndexOptions<F> {
    fn default() -> Self {
        Self {
            entries_limit: DEFAULT_ENTRIES_LIMIT,
            size_limit: DEFAULT_SIZE_LIMIT,
            factory: None,
        }
    }
}

impl<F: SiteMapFactory> SiteMapIndexOptions<F> {
    pub fn new(factory: F) -> Self {
        Self::default().with_factory(factory)
    }

    pub fn with_factory(mut self, factory: F) -> Self {
        self.factory = Some(factory);
        self
    }

    pub fn with_entries_limit(mut self, entries_limit: usize) -> Self {
        self.entries_limit = entries_limit;
        self
    }

    pub fn with_size_limit(mut self, size_limit: usize) -> Self {
        self.size_limit = size_limit;
        self
    }

    /// Creates an index writing to `sink`.
    ///
    /// # Errors
    ///
    /// Returns [`SiteMapError::Configuration`] if no factory was supplied or a limit is zero.
    pub fn build<W: AsyncWrite + Unpin + Send>(self, sink: W) -> Result<SiteMapIndex<W, F>> {
        let factory = self.factory.ok_or_else(|| {
            SiteMapError::Configuration("a sitemap factory must be provided".to_owned())
        })?;
        if self.entries_limit == 0 {
            return Err(SiteMapError::Configuration(
                "entries limit must be greater than zero".to_owned(),
            ));
        }
        if self.size_limit == 0 {
            return Err(SiteMapError::Configuration(
                "size limit must be greater than zero".to_owned(),
            ));
        }

        Ok(SiteMapIndex {
            writer: SiteMapIndexXmlWriter::new(sink),
            factory,
            entries_limit: self.entries_limit,
            size_limit: self.size_limit,
            next_index: 0,
            current: None,
            state: SessionState::Uninitialized,
        })
    }
}

/// Sitemap index spreading entries across as many sitemaps as the limits require.
///
/// At most one sitemap is open at a time. Limits are checked after each entry is
/// written, so every `add` lands in some sitemap and a sitemap may exceed the size
/// limit by at most one entry.
pub struct SiteMapIndex<W, F: SiteMapFactory> {
    writer: SiteMapIndexXmlWriter<W>,
    factory: F,
    entries_limit: usize,
    size_limit: usize,
    next_index: usize,
    current: Option<GeneratedSiteMap<F::Sink>>,
    state: SessionState,
}

impl<W: AsyncWrite + Unpin + Send, F: SiteMapFactory> SiteMapIndex<W, F> {
    /// Writes the opening framing of the index. No sitemap is opened yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the index was already initialized or writing fails.
    pub async fn initialize(&mut self) -> Result<()> {
        self.state.require(SessionState::Uninitialized, "initialize")?;
        self.writer.initialize().await?;
        self.state = SessionState::Open;
        Ok(())
    }

    /// Appends a `<sitemap>` record without going through the factory.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is not open or writing fails.
    pub async fn add_site_map(&mut self, entry: &SiteMapIndexEntry) -> Result<()> {
        self.state.require(SessionState::Open, "add a sitemap")?;
        self.writer.add_site_map(entry).await
    }

    /// Adds one entry to the current sitemap, opening a new one first if needed.
    ///
    /// The index record of a new sitemap is written when it is opened, before its
    /// first entry. If the entry is rejected, the sitemap stays open for the next one.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// * The index is not open
    /// * The factory fails to create or finalize a sitemap
    /// * The sitemap rejects the entry
    /// * Writing to any sink fails
    pub async fn add(
        &mut self,
        entry: &SiteMapEntry,
        extensions: &[&dyn SitemapExtension],
    ) -> Result<()> {
        self.state.require(SessionState::Open, "add an entry")?;

        let mut partition = match self.current.take() {
            Some(partition) => partition,
            None => self.open_partition().await?,
        };

        if let Err(error) = partition.site_map.add(entry, extensions).await {
            self.current = Some(partition);
            return Err(error);
        }

        if self.is_full(&partition.site_map) {
            self.close_partition(partition).await
        } else {
            self.current = Some(partition);
            Ok(())
        }
    }

    /// Closes the open sitemap, if any, then closes the index.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is not open, the factory fails to finalize the
    /// sitemap, or writing fails.
    pub async fn done(&mut self) -> Result<()> {
        self.state.require(SessionState::Open, "close the index")?;
        if let Some(partition) = self.current.take() {
            self.close_partition(partition).await?;
        }

        self.writer.done().await?;
        self.state = SessionState::Closed;
        info!("Closed sitemap index with {} sitemaps", self.next_index);
        Ok(())
    }

    /// Number of sitemaps opened so far.
    pub fn number_of_site_maps(&self) -> usize {
        self.next_index
    }

    pub fn has_open_site_map(&self) -> bool {
        self.current.is_some()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Gives back the index sink and the factory.
    pub fn into_parts(self) -> (W, F) {
        (self.writer.into_inner(), self.factory)
    }

    fn is_full(&self, site_map: &SiteMap<F::Sink>) -> bool {
        site_map.number_of_entries() >= self.entries_limit || site_map.length() >= self.size_limit
    }

    async fn open_partition(&mut self) -> Result<GeneratedSiteMap<F::Sink>> {
        let index = self.next_index;
        self.next_index += 1;

        let mut partition = self.factory.generate(index).await?;
        if let Err(error) = self.register_partition(&mut partition).await {
            if let Err(done_error) = self.factory.done(partition).await {
                warn!("Unable to hand back sitemap {index}: {done_error}");
            }
            return Err(error);
        }

        debug!("Opened sitemap {index} as {}", partition.file_name);
        Ok(partition)
    }

    async fn register_partition(&mut self, partition: &mut GeneratedSiteMap<F::Sink>) -> Result<()> {
        if partition.site_map.state() == SessionState::Uninitialized {
            partition.site_map.initialize().await?;
        }
        self.writer.add_site_map(&partition.index_entry()).await
    }

    async fn close_partition(&mut self, mut partition: GeneratedSiteMap<F::Sink>) -> Result<()> {
        partition.site_map.done().await?;
        debug!(
            "Closing sitemap {} with {} entries, {} bytes",
            partition.file_name,
            partition.site_map.number_of_entries(),
            partition.site_map.length()
        );
        self.factory.done(partition).await
    }
}
