use tokio::io::AsyncWrite;

use crate::constants::TEXT_LINE_ENDING;
use crate::entry::SiteMapEntry;
use crate::error::Result;
use crate::writers::CountingSink;

/// Renders a plain text sitemap: one location per CRLF-terminated line.
///
/// Only `loc` is written; other fields and extensions have no text representation.
pub struct TextSiteMapWriter<W> {
    sink: CountingSink<W>,
}

impl<W: AsyncWrite + Unpin + Send> TextSiteMapWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink: CountingSink::new(sink),
        }
    }

    /// Resets the byte counter. Text sitemaps have no opening framing.
    ///
    /// # Errors
    ///
    /// Never fails, kept fallible to match the XML writer.
    #[allow(clippy::unnecessary_wraps)]
    pub fn initialize(&mut self) -> Result<()> {
        self.sink.reset();
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if writing to the sink fails.
    pub async fn add_entry(&mut self, entry: &SiteMapEntry) -> Result<()> {
        self.sink
            .write(&format!("{}{TEXT_LINE_ENDING}", entry.loc))
            .await
    }

    /// Flushes the sink. Text sitemaps have no closing framing.
    ///
    /// # Errors
    ///
    /// Returns an error if flushing the sink fails.
    pub async fn done(&mut self) -> Result<()> {
        self.sink.flush().await
    }

    pub fn length(&self) -> usize {
        self.sink.written()
    }

    pub fn into_inner(self) -> W {
        self.sink.into_inner()
    }
}
