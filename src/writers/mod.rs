//! Stream writers rendering sitemaps and sitemap indexes into async sinks.

pub mod index;
pub mod text;
pub mod xml;

use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::SiteMapFormat;
use crate::entry::SiteMapEntry;
use crate::error::Result;
use crate::extensions::{NamespaceInfo, SitemapExtension};

pub use index::SiteMapIndexXmlWriter;
pub use text::TextSiteMapWriter;
pub use xml::XmlSiteMapWriter;

/// Sink wrapper counting the bytes successfully written through it.
pub(crate) struct CountingSink<W> {
    sink: W,
    written: usize,
}

impl<W: AsyncWrite + Unpin + Send> CountingSink<W> {
    pub(crate) fn new(sink: W) -> Self {
        Self { sink, written: 0 }
    }

    pub(crate) fn reset(&mut self) {
        self.written = 0;
    }

    pub(crate) fn written(&self) -> usize {
        self.written
    }

    pub(crate) async fn write(&mut self, chunk: &str) -> Result<()> {
        self.sink.write_all(chunk.as_bytes()).await?;
        self.written += chunk.len();
        Ok(())
    }

    pub(crate) async fn flush(&mut self) -> Result<()> {
        self.sink.flush().await?;
        Ok(())
    }

    pub(crate) fn into_inner(self) -> W {
        self.sink
    }
}

/// Sitemap writer for one of the supported output formats.
pub enum SiteMapWriter<W> {
    Xml(XmlSiteMapWriter<W>),
    Text(TextSiteMapWriter<W>),
}

impl<W: AsyncWrite + Unpin + Send> SiteMapWriter<W> {
    /// Writer for `format`. Text sitemaps ignore `declared` extensions.
    pub fn new(format: SiteMapFormat, sink: W, declared: Vec<NamespaceInfo>) -> Self {
        match format {
            SiteMapFormat::Xml => SiteMapWriter::Xml(XmlSiteMapWriter::new(sink, declared)),
            SiteMapFormat::Text => SiteMapWriter::Text(TextSiteMapWriter::new(sink)),
        }
    }

    /// Writes the opening framing and resets the byte counter.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the sink fails.
    pub async fn initialize(&mut self) -> Result<()> {
        match self {
            SiteMapWriter::Xml(writer) => writer.initialize().await,
            SiteMapWriter::Text(writer) => writer.initialize(),
        }
    }

    /// Renders and writes one entry.
    ///
    /// # Errors
    ///
    /// Returns an error if an extension was not declared or writing fails.
    pub async fn add_entry(
        &mut self,
        entry: &SiteMapEntry,
        extensions: &[&dyn SitemapExtension],
    ) -> Result<()> {
        match self {
            SiteMapWriter::Xml(writer) => writer.add_entry(entry, extensions).await,
            SiteMapWriter::Text(writer) => writer.add_entry(entry).await,
        }
    }

    /// Writes the closing framing and flushes the sink.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to or flushing the sink fails.
    pub async fn done(&mut self) -> Result<()> {
        match self {
            SiteMapWriter::Xml(writer) => writer.done().await,
            SiteMapWriter::Text(writer) => writer.done().await,
        }
    }

    /// Size of the finished document if it were closed now.
    pub fn length(&self) -> usize {
        match self {
            SiteMapWriter::Xml(writer) => writer.length(),
            SiteMapWriter::Text(writer) => writer.length(),
        }
    }

    pub fn into_inner(self) -> W {
        match self {
            SiteMapWriter::Xml(writer) => writer.into_inner(),
            SiteMapWriter::Text(writer) => writer.into_inner(),
        }
    }
}
