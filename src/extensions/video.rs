//! Google Video sitemap extension (`video:video`).

use std::fmt;

use once_cell::sync::Lazy;

use crate::constants::GOOGLE_VIDEO_NAMESPACE;
use crate::elements::{ElementWriters, element, escape, escaped_element};
use crate::extensions::{NamespaceInfo, SitemapExtension, wrap};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GoogleVideoRelationship {
    Allow,
    Deny,
}

impl fmt::Display for GoogleVideoRelationship {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoogleVideoRelationship::Allow => formatter.write_str("allow"),
            GoogleVideoRelationship::Deny => formatter.write_str("deny"),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GoogleVideoPlatforms {
    Web,
    Mobile,
    Tv,
}

impl fmt::Display for GoogleVideoPlatforms {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoogleVideoPlatforms::Web => formatter.write_str("web"),
            GoogleVideoPlatforms::Mobile => formatter.write_str("mobile"),
            GoogleVideoPlatforms::Tv => formatter.write_str("tv"),
        }
    }
}

/// Countries where the video may or may not be played, ISO 3166 codes.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct GoogleVideoRestriction {
    pub relationship: GoogleVideoRelationship,
    pub countries: Vec<String>,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct GoogleVideoPlatform {
    pub relationship: GoogleVideoRelationship,
    pub platforms: Vec<GoogleVideoPlatforms>,
}

#[derive(Clone, PartialEq, Debug)]
pub struct GoogleVideoPrice {
    pub price: f64,
    /// ISO 4217 currency code.
    pub currency: String,
    /// `rent` or `own`.
    pub kind: Option<String>,
    /// `hd` or `sd`.
    pub resolution: Option<String>,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct GoogleVideoUploader {
    pub name: String,
    pub info: Option<String>,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct GoogleVideo {
    pub thumbnail_loc: String,
    pub title: String,
    pub description: String,
    pub content_loc: String,
    pub player_loc: String,
    /// Seconds.
    pub duration: Option<u32>,
    pub expiration_date: Option<String>,
    pub rating: Option<f64>,
    pub view_count: Option<u64>,
    pub publication_date: Option<String>,
    pub family_friendly: Option<bool>,
    pub restriction: Option<GoogleVideoRestriction>,
    pub platform: Option<GoogleVideoPlatform>,
    pub price: Vec<GoogleVideoPrice>,
    pub requires_subscription: Option<bool>,
    pub uploader: Option<GoogleVideoUploader>,
    pub live: Option<bool>,
    pub tag: Vec<String>,
    pub category: Option<String>,
    pub gallery_loc: Option<String>,
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

fn render_price(price: &GoogleVideoPrice) -> String {
    let mut attributes = String::new();
    if let Some(resolution) = &price.resolution {
        attributes.push_str(&format!(r#" resolution="{}""#, escape(resolution)));
    }
    attributes.push_str(&format!(r#" currency="{}""#, escape(&price.currency)));
    if let Some(kind) = &price.kind {
        attributes.push_str(&format!(r#" type="{}""#, escape(kind)));
    }
    format!("<video:price{attributes}>{}</video:price>", price.price)
}

fn render_list<T: fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn non_empty(rendered: String) -> Option<String> {
    (!rendered.is_empty()).then_some(rendered)
}

static VIDEO_ELEMENT_WRITERS: Lazy<ElementWriters<GoogleVideo>> = Lazy::new(|| {
    ElementWriters::<GoogleVideo>::new()
        .with("thumbnail_loc", 0, |v| {
            Some(escaped_element("video:thumbnail_loc", &v.thumbnail_loc))
        })
        .with("title", 1, |v| Some(escaped_element("video:title", &v.title)))
        .with("description", 2, |v| {
            Some(escaped_element("video:description", &v.description))
        })
        .with("content_loc", 3, |v| {
            Some(escaped_element("video:content_loc", &v.content_loc))
        })
        .with("player_loc", 4, |v| {
            Some(escaped_element("video:player_loc", &v.player_loc))
        })
        .with("duration", 5, |v| v.duration.map(|d| element("video:duration", d)))
        .with("expiration_date", 6, |v| {
            v.expiration_date
                .as_deref()
                .map(|d| escaped_element("video:expiration_date", d))
        })
        .with("rating", 7, |v| v.rating.map(|r| element("video:rating", r)))
        .with("view_count", 9, |v| {
            v.view_count.map(|c| element("video:view_count", c))
        })
        .with("publication_date", 10, |v| {
            v.publication_date
                .as_deref()
                .map(|d| escaped_element("video:publication_date", d))
        })
        .with("tag", 11, |v| {
            non_empty(
                v.tag
                    .iter()
                    .map(|tag| escaped_element("video:tag", tag))
                    .collect(),
            )
        })
        .with("category", 12, |v| {
            v.category
                .as_deref()
                .map(|c| escaped_element("video:category", c))
        })
        .with("family_friendly", 13, |v| {
            v.family_friendly
                .map(|f| element("video:family_friendly", yes_no(f)))
        })
        .with("restriction", 14, |v| {
            v.restriction.as_ref().map(|r| {
                format!(
                    r#"<video:restriction relationship="{}">{}</video:restriction>"#,
                    r.relationship,
                    escape(&r.countries.join(" "))
                )
            })
        })
        .with("gallery_loc", 15, |v| {
            v.gallery_loc
                .as_deref()
                .map(|g| escaped_element("video:gallery_loc", g))
        })
        .with("price", 16, |v| {
            non_empty(v.price.iter().map(render_price).collect())
        })
        .with("requires_subscription", 17, |v| {
            v.requires_subscription
                .map(|r| element("video:requires_subscription", yes_no(r)))
        })
        .with("uploader", 18, |v| {
            v.uploader.as_ref().map(|u| match &u.info {
                Some(info) => format!(
                    r#"<video:uploader info="{}">{}</video:uploader>"#,
                    escape(info),
                    escape(&u.name)
                ),
                None => escaped_element("video:uploader", &u.name),
            })
        })
        .with("platform", 20, |v| {
            v.platform.as_ref().map(|p| {
                format!(
                    r#"<video:platform relationship="{}">{}</video:platform>"#,
                    p.relationship,
                    render_list(&p.platforms)
                )
            })
        })
        .with("live", 21, |v| v.live.map(|l| element("video:live", yes_no(l))))
});

#[derive(Clone, Debug, Default)]
pub struct GoogleVideoExtension {
    video: Option<GoogleVideo>,
}

impl GoogleVideoExtension {
    pub fn new(video: GoogleVideo) -> Self {
        Self { video: Some(video) }
    }
}

impl SitemapExtension for GoogleVideoExtension {
    fn namespace_info(&self) -> NamespaceInfo {
        NamespaceInfo {
            prefix: "video",
            namespace: GOOGLE_VIDEO_NAMESPACE,
        }
    }

    fn render(&self) -> String {
        match &self.video {
            Some(video) => wrap("video:video", VIDEO_ELEMENT_WRITERS.render(video)),
            None => String::new(),
        }
    }
}
