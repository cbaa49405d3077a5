use sitemapgen::{Robots, RobotsEntry, SiteMapError, render_robots_txt};
use spectral::prelude::*;

#[test]
fn renders_a_single_group() {
    let robots = Robots {
        comments: vec!["Test Robots.txt".to_owned()],
        entries: vec![RobotsEntry {
            comments: vec!["All User Agents".to_owned()],
            crawl_delay: Some(1),
            sitemaps: vec!["http://localhost.com/sitemap.xml".to_owned()],
            ..RobotsEntry::new("*")
        }],
    };

    let rendered = render_robots_txt(&robots).expect("robots.txt renders");

    assert_that(&rendered).is_equal_to(
        "#Test Robots.txt\r\n\r\n#All User Agents\r\nuser-agent: *\r\ncrawl-delay: 1\r\nsitemap: http://localhost.com/sitemap.xml\r\n\r\n"
            .to_owned(),
    );
}

#[test]
fn renders_groups_in_order() {
    let robots = Robots {
        comments: vec!["Test Robots.txt".to_owned()],
        entries: vec![
            RobotsEntry {
                comments: vec!["First".to_owned()],
                crawl_delay: Some(1),
                allow: vec!["/".to_owned()],
                host: vec!["localhost".to_owned()],
                sitemaps: vec!["http://localhost.com/sitemap1.xml".to_owned()],
                ..RobotsEntry::new("first")
            },
            RobotsEntry {
                comments: vec!["Second".to_owned()],
                crawl_delay: Some(2),
                disallow: vec!["/backoffice".to_owned()],
                sitemaps: vec!["http://localhost.com/sitemap2.xml".to_owned()],
                ..RobotsEntry::new("second")
            },
        ],
    };

    let rendered = render_robots_txt(&robots).expect("robots.txt renders");

    assert_that(&rendered).is_equal_to(
        concat!(
            "#Test Robots.txt\r\n\r\n",
            "#First\r\nuser-agent: first\r\ncrawl-delay: 1\r\nallow: /\r\nhost: localhost\r\n",
            "sitemap: http://localhost.com/sitemap1.xml\r\n\r\n",
            "#Second\r\nuser-agent: second\r\ncrawl-delay: 2\r\ndisallow: /backoffice\r\n",
            "sitemap: http://localhost.com/sitemap2.xml\r\n\r\n",
        )
        .to_owned(),
    );
}

#[test]
fn zero_crawl_delay_and_missing_header_are_omitted() {
    let robots = Robots {
        comments: Vec::new(),
        entries: vec![RobotsEntry {
            crawl_delay: Some(0),
            disallow: vec!["/private".to_owned()],
            ..RobotsEntry::new("bot")
        }],
    };

    let rendered = render_robots_txt(&robots).expect("robots.txt renders");

    assert_that(&rendered)
        .is_equal_to("user-agent: bot\r\ndisallow: /private\r\n\r\n".to_owned());
}

#[test]
fn empty_user_agent_is_rejected() {
    let robots = Robots {
        comments: Vec::new(),
        entries: vec![RobotsEntry::new("*"), RobotsEntry::default()],
    };

    let result = render_robots_txt(&robots);

    assert_that(&matches!(
        result,
        Err(SiteMapError::MissingUserAgent { group: 1 })
    ))
    .is_true();
}
