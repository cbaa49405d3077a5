use log::trace;
use once_cell::sync::Lazy;
use tokio::io::AsyncWrite;

use crate::constants::{SITEMAP_NAMESPACE, URLSET_CLOSE, XML_HEADER};
use crate::elements::{ElementWriters, element, escaped_element};
use crate::entry::SiteMapEntry;
use crate::error::{Result, SiteMapError};
use crate::extensions::{NamespaceInfo, SitemapExtension};
use crate::writers::CountingSink;

static SITEMAP_ELEMENT_WRITERS: Lazy<ElementWriters<SiteMapEntry>> = Lazy::new(|| {
    ElementWriters::<SiteMapEntry>::new()
        .with("loc", 0, |entry| Some(escaped_element("loc", &entry.loc)))
        .with("lastmod", 1, |entry| {
            entry.lastmod.as_deref().map(|v| escaped_element("lastmod", v))
        })
        .with("changefreq", 2, |entry| {
            entry.changefreq.map(|v| element("changefreq", v))
        })
        .with("priority", 3, |entry| entry.priority.map(|v| element("priority", v)))
});

/// Renders a `<urlset>` document.
pub struct XmlSiteMapWriter<W> {
    sink: CountingSink<W>,
    declared: Vec<NamespaceInfo>,
    closed: bool,
}

impl<W: AsyncWrite + Unpin + Send> XmlSiteMapWriter<W> {
    pub fn new(sink: W, declared: Vec<NamespaceInfo>) -> Self {
        Self {
            sink: CountingSink::new(sink),
            declared,
            closed: false,
        }
    }

    /// Writes the XML declaration and the `<urlset>` opening tag.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the sink fails.
    pub async fn initialize(&mut self) -> Result<()> {
        self.sink.reset();
        self.closed = false;

        let mut opening = format!(r#"{XML_HEADER}<urlset xmlns="{SITEMAP_NAMESPACE}""#);
        for info in &self.declared {
            opening.push_str(&info.attribute());
        }
        opening.push('>');

        self.sink.write(&opening).await
    }

    /// Writes one `<url>` element, extensions in the order given.
    ///
    /// Nothing is written when an extension is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`SiteMapError::ExtensionNotDeclared`] if an extension namespace was not
    /// declared at construction, or an IO error if writing fails.
    pub async fn add_entry(
        &mut self,
        entry: &SiteMapEntry,
        extensions: &[&dyn SitemapExtension],
    ) -> Result<()> {
        for extension in extensions {
            let info = extension.namespace_info();
            if !self.is_declared(&info) {
                return Err(SiteMapError::ExtensionNotDeclared {
                    prefix: info.prefix.to_owned(),
                    namespace: info.namespace.to_owned(),
                });
            }
        }

        let mut url = String::from("<url>");
        url.push_str(&SITEMAP_ELEMENT_WRITERS.render(entry));
        for extension in extensions {
            url.push_str(&extension.render());
        }
        url.push_str("</url>");

        trace!("Writing {} bytes for {}", url.len(), entry.loc);
        self.sink.write(&url).await
    }

    /// Writes `</urlset>` and flushes the sink.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to or flushing the sink fails.
    pub async fn done(&mut self) -> Result<()> {
        self.sink.write(URLSET_CLOSE).await?;
        self.closed = true;
        self.sink.flush().await
    }

    /// Bytes written, plus the closing tag while the document is still open.
    pub fn length(&self) -> usize {
        if self.closed {
            self.sink.written()
        } else {
            self.sink.written() + URLSET_CLOSE.len()
        }
    }

    pub fn into_inner(self) -> W {
        self.sink.into_inner()
    }

    fn is_declared(&self, info: &NamespaceInfo) -> bool {
        self.declared
            .iter()
            .any(|declared| declared.namespace == info.namespace)
    }
}
