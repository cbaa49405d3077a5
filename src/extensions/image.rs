//! Google Image sitemap extension (`image:image`).

use once_cell::sync::Lazy;

use crate::constants::GOOGLE_IMAGE_NAMESPACE;
use crate::elements::{ElementWriters, escaped_element};
use crate::extensions::{NamespaceInfo, SitemapExtension, wrap};

/// One image on the page.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct GoogleImage {
    pub loc: String,
    pub caption: Option<String>,
    pub geo_location: Option<String>,
    pub title: Option<String>,
    /// URL of the image license.
    pub license: Option<String>,
}

static IMAGE_ELEMENT_WRITERS: Lazy<ElementWriters<GoogleImage>> = Lazy::new(|| {
    ElementWriters::<GoogleImage>::new()
        .with("loc", 0, |image| Some(escaped_element("image:loc", &image.loc)))
        .with("caption", 1, |image| {
            image.caption.as_deref().map(|v| escaped_element("image:caption", v))
        })
        .with("geo_location", 2, |image| {
            image
                .geo_location
                .as_deref()
                .map(|v| escaped_element("image:geo_location", v))
        })
        .with("title", 3, |image| {
            image.title.as_deref().map(|v| escaped_element("image:title", v))
        })
        .with("license", 4, |image| {
            image.license.as_deref().map(|v| escaped_element("image:license", v))
        })
});

/// Without an image this only declares the namespace.
#[derive(Clone, Debug, Default)]
pub struct GoogleImageExtension {
    image: Option<GoogleImage>,
}

impl GoogleImageExtension {
    pub fn new(image: GoogleImage) -> Self {
        Self { image: Some(image) }
    }
}

impl SitemapExtension for GoogleImageExtension {
    fn namespace_info(&self) -> NamespaceInfo {
        NamespaceInfo {
            prefix: "image",
            namespace: GOOGLE_IMAGE_NAMESPACE,
        }
    }

    fn render(&self) -> String {
        match &self.image {
            Some(image) => wrap("image:image", IMAGE_ELEMENT_WRITERS.render(image)),
            None => String::new(),
        }
    }
}
