#![allow(dead_code)]

use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use async_trait::async_trait;
use sitemap::reader::{SiteMapEntity, SiteMapReader};
use sitemapgen::{
    GeneratedSiteMap, Result, SiteMap, SiteMapEntry, SiteMapFactory, SiteMapIndex,
    SiteMapIndexOptions, SiteMapOptions,
};
use tokio::io::AsyncWrite;

pub const URLSET_OPEN: &str = r#"<?xml version="1.0" encoding="UTF-8"?><urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#;

pub const INDEX_OPEN: &str = r#"<?xml version="1.0" encoding="UTF-8"?><sitemapindex xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#;

/// Generates one test per entry, asserting the `<url>` element it renders to.
#[macro_export]
macro_rules! assert_rendered_urls {
    (
        $(
            $test_name:ident : entry => $entry:expr, url => $url:expr
        ),+ $(,)?
    ) => {
        $(
            #[tokio::test]
            async fn $test_name() {
                let entry: sitemapgen::SiteMapEntry = $entry;
                let rendered = render_single_entry(&entry).await;

                assert_that(&rendered).is_equal_to(format!("{}{}</urlset>", URLSET_OPEN, $url));
            }
        )+
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Event {
    Opened(usize),
    Closed(usize),
}

/// Factory keeping every sitemap in memory and recording when it was opened and closed.
pub struct MemoryFactory {
    pub options: SiteMapOptions,
    pub location_prefix: String,
    pub initialize_in_factory: bool,
    pub events: Vec<Event>,
    pub finished: Vec<(String, String)>,
}

impl Default for MemoryFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryFactory {
    pub fn new() -> Self {
        Self {
            options: SiteMapOptions::default(),
            location_prefix: String::new(),
            initialize_in_factory: true,
            events: Vec::new(),
            finished: Vec::new(),
        }
    }

    pub fn with_location_prefix(mut self, prefix: &str) -> Self {
        self.location_prefix = prefix.to_owned();
        self
    }

    pub fn with_options(mut self, options: SiteMapOptions) -> Self {
        self.options = options;
        self
    }

    pub fn leaving_initialization_to_index(mut self) -> Self {
        self.initialize_in_factory = false;
        self
    }
}

#[async_trait]
impl SiteMapFactory for MemoryFactory {
    type Sink = Vec<u8>;

    async fn generate(&mut self, index: usize) -> Result<GeneratedSiteMap<Vec<u8>>> {
        self.events.push(Event::Opened(index));
        let mut site_map = SiteMap::new(Vec::new(), self.options.clone());
        if self.initialize_in_factory {
            site_map.initialize().await?;
        }

        Ok(GeneratedSiteMap::new(
            index,
            site_map,
            format!("{}sitemap-{index}.xml", self.location_prefix),
        )
        .with_last_modified("2021-01-01"))
    }

    async fn done(&mut self, generated: GeneratedSiteMap<Vec<u8>>) -> Result<()> {
        self.events.push(Event::Closed(generated.index));
        let name = generated.file_name.clone();
        let bytes = generated.site_map.into_inner();
        self.finished
            .push((name, String::from_utf8(bytes).expect("sitemap is UTF-8")));
        Ok(())
    }
}

pub async fn initialized_index(
    factory: MemoryFactory,
    entries_limit: usize,
    size_limit: usize,
) -> SiteMapIndex<Vec<u8>, MemoryFactory> {
    let mut index = SiteMapIndexOptions::new(factory)
        .with_entries_limit(entries_limit)
        .with_size_limit(size_limit)
        .build(Vec::new())
        .expect("valid index options");
    index.initialize().await.expect("index initializes");
    index
}

pub fn index_record(name: &str) -> String {
    format!("<sitemap><loc>{name}</loc><lastmod>2021-01-01</lastmod></sitemap>")
}

pub async fn render_single_entry(entry: &SiteMapEntry) -> String {
    let mut site_map = SiteMap::new(Vec::new(), SiteMapOptions::default());
    site_map.initialize().await.expect("sitemap initializes");
    site_map.add(entry, &[]).await.expect("entry is accepted");
    site_map.done().await.expect("sitemap closes");
    String::from_utf8(site_map.into_inner()).expect("sitemap is UTF-8")
}

pub fn count_urls(document: &str) -> usize {
    SiteMapReader::new(document.as_bytes())
        .filter(|entity| matches!(entity, SiteMapEntity::Url(_)))
        .count()
}

pub fn count_site_maps(document: &str) -> usize {
    SiteMapReader::new(document.as_bytes())
        .filter(|entity| matches!(entity, SiteMapEntity::SiteMap(_)))
        .count()
}

/// Sink accepting a fixed number of writes, failing every write after that.
pub struct FailingSink {
    writes_left: usize,
}

impl FailingSink {
    pub fn after(writes: usize) -> Self {
        Self {
            writes_left: writes,
        }
    }
}

impl AsyncWrite for FailingSink {
    fn poll_write(
        mut self: Pin<&mut Self>,
        _context: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        if self.writes_left == 0 {
            return Poll::Ready(Err(io::Error::other("sink is closed")));
        }
        self.writes_left -= 1;
        Poll::Ready(Ok(buf.len()))
    }

    fn poll_flush(self: Pin<&mut Self>, _context: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn poll_shutdown(self: Pin<&mut Self>, _context: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }
}
