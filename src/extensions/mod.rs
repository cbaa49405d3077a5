//! Sitemap namespace extensions.
//!
//! An extension contributes a namespace declaration on `<urlset>` and a fragment
//! inside each `<url>` it is attached to. Extensions attached to an entry must have
//! been declared, by namespace, when the sitemap was initialized.

pub mod image;
pub mod news;
pub mod video;

pub use image::{GoogleImage, GoogleImageExtension};
pub use news::{GoogleNews, GoogleNewsExtension, GoogleNewsPublication};
pub use video::{
    GoogleVideo, GoogleVideoExtension, GoogleVideoPlatform, GoogleVideoPlatforms, GoogleVideoPrice,
    GoogleVideoRelationship, GoogleVideoRestriction, GoogleVideoUploader,
};

/// Prefix and namespace URI declared on `<urlset>` as `xmlns:<prefix>="<namespace>"`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NamespaceInfo {
    pub prefix: &'static str,
    pub namespace: &'static str,
}

impl NamespaceInfo {
    pub fn attribute(&self) -> String {
        format!(r#" xmlns:{}="{}""#, self.prefix, self.namespace)
    }
}

/// Capability attaching extra, namespaced data to a sitemap entry.
pub trait SitemapExtension: Send + Sync {
    fn namespace_info(&self) -> NamespaceInfo;

    /// XML fragment placed inside `<url>`, empty when the extension carries no data.
    fn render(&self) -> String;
}

/// Wraps `contents` in `<tag>` unless it is empty.
pub(crate) fn wrap(tag: &str, contents: String) -> String {
    if contents.is_empty() {
        contents
    } else {
        format!("<{tag}>{contents}</{tag}>")
    }
}
