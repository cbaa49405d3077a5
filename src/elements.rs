//! Ordered element writer tables used to render the child elements of a record.
//!
//! A table maps element names to a render function and an `order`. Rendering a
//! record emits the output of every writer whose field is present on the record,
//! sorted ascending by `order`. Writers with equal `order` keep the order in which
//! they were registered.

use std::borrow::Cow;

/// Renders one element of `T`, or `None` when the field is absent on the record.
pub type RenderFn<T> = fn(&T) -> Option<String>;

pub struct ElementWriter<T> {
    pub name: &'static str,
    pub order: u32,
    render: RenderFn<T>,
}

/// Table of element writers kept sorted by `order`.
pub struct ElementWriters<T> {
    writers: Vec<ElementWriter<T>>,
}

impl<T> Default for ElementWriters<T> {
    fn default() -> Self {
        Self {
            writers: Vec::new(),
        }
    }
}

impl<T> ElementWriters<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a writer for `name`.
    pub fn with(mut self, name: &'static str, order: u32, render: RenderFn<T>) -> Self {
        let position = self.writers.partition_point(|writer| writer.order <= order);
        self.writers.insert(
            position,
            ElementWriter {
                name,
                order,
                render,
            },
        );
        self
    }

    /// Element names in render order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.writers.iter().map(|writer| writer.name)
    }

    /// Concatenates the rendered elements present on `entry`.
    pub fn render(&self, entry: &T) -> String {
        self.writers
            .iter()
            .filter_map(|writer| (writer.render)(entry))
            .collect()
    }
}

/// Escapes `&`, `<`, `>`, `'` and `"` for use in XML text and attribute values.
pub fn escape(value: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(value)
}

/// `<tag>value</tag>` with `value` written verbatim.
pub fn element(tag: &str, value: impl std::fmt::Display) -> String {
    format!("<{tag}>{value}</{tag}>")
}

/// `<tag>value</tag>` with `value` XML-escaped.
pub fn escaped_element(tag: &str, value: &str) -> String {
    element(tag, escape(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Record {
        first: Option<&'static str>,
        second: Option<&'static str>,
        third: Option<&'static str>,
    }

    fn writers() -> ElementWriters<Record> {
        ElementWriters::<Record>::new()
            .with("third", 2, |record| record.third.map(|v| element("c", v)))
            .with("first", 0, |record| record.first.map(|v| element("a", v)))
            .with("second", 1, |record| record.second.map(|v| element("b", v)))
    }

    #[test]
    fn renders_present_fields_in_order() {
        let record = Record {
            first: Some("1"),
            second: None,
            third: Some("3"),
        };

        assert_eq!(writers().render(&record), "<a>1</a><c>3</c>");
    }

    #[test]
    fn equal_order_keeps_registration_order() {
        let table = ElementWriters::<Record>::new()
            .with("late", 0, |_| Some("x".to_owned()))
            .with("later", 0, |_| Some("y".to_owned()))
            .with("first", 0, |_| Some("z".to_owned()));

        assert_eq!(
            table.names().collect::<Vec<_>>(),
            vec!["late", "later", "first"]
        );
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escaped_element("loc", "http://a.com/?a=1&b=<2>"),
            "<loc>http://a.com/?a=1&amp;b=&lt;2&gt;</loc>"
        );
    }
}
