use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::constants::{SITEMAP_NAMESPACE, SITEMAPINDEX_CLOSE, XML_HEADER};
use crate::elements::escaped_element;
use crate::entry::SiteMapIndexEntry;
use crate::error::Result;

/// Renders a `<sitemapindex>` document.
pub struct SiteMapIndexXmlWriter<W> {
    sink: W,
}

impl<W: AsyncWrite + Unpin + Send> SiteMapIndexXmlWriter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Writes the XML declaration and the `<sitemapindex>` opening tag.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the sink fails.
    pub async fn initialize(&mut self) -> Result<()> {
        let opening = format!(r#"{XML_HEADER}<sitemapindex xmlns="{SITEMAP_NAMESPACE}">"#);
        self.sink.write_all(opening.as_bytes()).await?;
        Ok(())
    }

    /// Writes one `<sitemap>` record.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the sink fails.
    pub async fn add_site_map(&mut self, entry: &SiteMapIndexEntry) -> Result<()> {
        let mut record = String::from("<sitemap>");
        record.push_str(&escaped_element("loc", &entry.loc));
        if let Some(lastmod) = &entry.lastmod {
            record.push_str(&escaped_element("lastmod", lastmod));
        }
        record.push_str("</sitemap>");

        self.sink.write_all(record.as_bytes()).await?;
        Ok(())
    }

    /// Writes `</sitemapindex>` and flushes the sink.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to or flushing the sink fails.
    pub async fn done(&mut self) -> Result<()> {
        self.sink.write_all(SITEMAPINDEX_CLOSE.as_bytes()).await?;
        self.sink.flush().await?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}
