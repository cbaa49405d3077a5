pub const XML_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

pub(crate) const URLSET_CLOSE: &str = "</urlset>";

pub(crate) const SITEMAPINDEX_CLOSE: &str = "</sitemapindex>";

pub(crate) const TEXT_LINE_ENDING: &str = "\r\n";

/// Entries per sitemap before a new partition is started.
pub const DEFAULT_ENTRIES_LIMIT: usize = 45_000;

/// Bytes per sitemap before a new partition is started.
pub const DEFAULT_SIZE_LIMIT: usize = 45 * 1024 * 1024;

pub const DEFAULT_BASE_URL: &str = "http://www.example.com/";

pub const DEFAULT_INDEX_NAME: &str = "sitemap.xml";

pub const GOOGLE_IMAGE_NAMESPACE: &str = "http://www.google.com/schemas/sitemap-image/1.1";

pub const GOOGLE_NEWS_NAMESPACE: &str = "http://www.google.com/schemas/sitemap-news/0.9";

pub const GOOGLE_VIDEO_NAMESPACE: &str = "http://www.google.com/schemas/sitemap-video/1.1";
