use crate::entry::SiteMapEntry;
use crate::error::Result;

/// Parses one line of entry input.
///
/// A line starting with `{` is a JSON object with the fields of [`SiteMapEntry`];
/// any other line is taken as the location itself. Blank lines and lines starting
/// with `#` carry no entry.
///
/// # Arguments
///
/// * `line` - A single line of input, with or without its line ending
///
/// # Returns
///
/// `Ok(None)` for blank and comment lines, the parsed entry otherwise.
///
/// # Errors
///
/// This function will return an error if:
///
/// - The JSON object is malformed or misses `loc`.
/// - The priority is outside `0.0..=1.0`.
pub fn parse_entry_line(line: &str) -> Result<Option<SiteMapEntry>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let entry = if line.starts_with('{') {
        serde_json::from_str::<SiteMapEntry>(line)?
    } else {
        SiteMapEntry::new(line)
    };
    entry.validate()?;

    Ok(Some(entry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::ChangeFreq;
    use crate::error::SiteMapError;
    use spectral::prelude::*;

    #[test]
    fn blank_and_comment_lines_carry_no_entry() {
        assert_that(&parse_entry_line("   ").ok()).is_equal_to(Some(None));
        assert_that(&parse_entry_line("# comment").ok()).is_equal_to(Some(None));
    }

    #[test]
    fn plain_line_is_a_location() {
        let entry = parse_entry_line(" http://www.example.com/a.html\r\n").ok().flatten();

        assert_that(&entry).is_equal_to(Some(SiteMapEntry::new("http://www.example.com/a.html")));
    }

    #[test]
    fn json_line_sets_optional_fields() {
        let entry = parse_entry_line(
            r#"{"loc": "http://www.example.com/", "lastmod": "2022-01-01", "changefreq": "weekly"}"#,
        )
        .ok()
        .flatten();

        assert_that(&entry).is_equal_to(Some(
            SiteMapEntry::new("http://www.example.com/")
                .with_lastmod("2022-01-01")
                .with_changefreq(ChangeFreq::Weekly),
        ));
    }

    #[test]
    fn json_without_location_is_rejected() {
        let result = parse_entry_line(r#"{"priority": 0.5}"#);

        assert_that(&matches!(result, Err(SiteMapError::Json(_)))).is_true();
    }

    #[test]
    fn empty_location_is_rejected() {
        let result = parse_entry_line(r#"{"loc": ""}"#);

        assert_that(&matches!(result, Err(SiteMapError::InvalidEntry(_)))).is_true();
    }
}
