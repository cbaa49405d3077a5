//! The robots module renders `robots.txt` content.

use crate::error::{Result, SiteMapError};

const LINE_ENDING: &str = "\r\n";

/// One user agent group of a robots.txt file.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct RobotsEntry {
    /// Comment lines written above the group, without the leading `#`.
    pub comments: Vec<String>,
    /// Crawler the rules apply to, `*` for all. Must not be empty.
    pub user_agent: String,
    pub disallow: Vec<String>,
    pub allow: Vec<String>,
    /// Seconds between requests, omitted when zero.
    pub crawl_delay: Option<u32>,
    pub host: Vec<String>,
    pub sitemaps: Vec<String>,
}

impl RobotsEntry {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            ..Default::default()
        }
    }
}

/// A complete robots.txt file.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Robots {
    /// Header comment lines, without the leading `#`.
    pub comments: Vec<String>,
    pub entries: Vec<RobotsEntry>,
}

fn push_line(output: &mut String, line: &str) {
    output.push_str(line);
    output.push_str(LINE_ENDING);
}

fn push_directives(output: &mut String, directive: &str, values: &[String]) {
    for value in values {
        push_line(output, &format!("{directive}: {value}"));
    }
}

/// Renders `settings` with CRLF line endings.
///
/// # Errors
///
/// Returns [`SiteMapError::MissingUserAgent`] if a group has an empty user agent.
pub fn render_robots_txt(settings: &Robots) -> Result<String> {
    let mut output = String::new();

    if !settings.comments.is_empty() {
        for comment in &settings.comments {
            push_line(&mut output, &format!("#{comment}"));
        }
        output.push_str(LINE_ENDING);
    }

    for (group, entry) in settings.entries.iter().enumerate() {
        if entry.user_agent.is_empty() {
            return Err(SiteMapError::MissingUserAgent { group });
        }

        for comment in &entry.comments {
            push_line(&mut output, &format!("#{comment}"));
        }
        push_line(&mut output, &format!("user-agent: {}", entry.user_agent));
        if let Some(delay) = entry.crawl_delay.filter(|delay| *delay > 0) {
            push_line(&mut output, &format!("crawl-delay: {delay}"));
        }
        push_directives(&mut output, "allow", &entry.allow);
        push_directives(&mut output, "disallow", &entry.disallow);
        push_directives(&mut output, "host", &entry.host);
        push_directives(&mut output, "sitemap", &entry.sitemaps);
        output.push_str(LINE_ENDING);
    }

    Ok(output)
}
