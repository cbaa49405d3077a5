//! Google News sitemap extension (`news:news`).

use once_cell::sync::Lazy;

use crate::constants::GOOGLE_NEWS_NAMESPACE;
use crate::elements::{ElementWriters, element, escaped_element};
use crate::extensions::{NamespaceInfo, SitemapExtension, wrap};

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct GoogleNewsPublication {
    pub name: String,
    /// ISO 639 language code.
    pub language: String,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct GoogleNews {
    pub publication: GoogleNewsPublication,
    pub publication_date: String,
    pub title: String,
}

// All three share one order slot, so they render in registration order.
static NEWS_ELEMENT_WRITERS: Lazy<ElementWriters<GoogleNews>> = Lazy::new(|| {
    ElementWriters::<GoogleNews>::new()
        .with("publication", 0, |news| {
            Some(format!(
                "<news:publication>{}{}</news:publication>",
                escaped_element("news:name", &news.publication.name),
                escaped_element("news:language", &news.publication.language),
            ))
        })
        .with("publication_date", 0, |news| {
            Some(element("news:publication_date", &news.publication_date))
        })
        .with("title", 0, |news| Some(escaped_element("news:title", &news.title)))
});

#[derive(Clone, Debug, Default)]
pub struct GoogleNewsExtension {
    news: Option<GoogleNews>,
}

impl GoogleNewsExtension {
    pub fn new(news: GoogleNews) -> Self {
        Self { news: Some(news) }
    }
}

impl SitemapExtension for GoogleNewsExtension {
    fn namespace_info(&self) -> NamespaceInfo {
        NamespaceInfo {
            prefix: "news",
            namespace: GOOGLE_NEWS_NAMESPACE,
        }
    }

    fn render(&self) -> String {
        match &self.news {
            Some(news) => wrap("news:news", NEWS_ELEMENT_WRITERS.render(news)),
            None => String::new(),
        }
    }
}
