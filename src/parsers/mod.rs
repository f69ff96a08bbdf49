pub mod detail;
pub mod listing;


use scraper::{ElementRef, Selector};

/// Compiles one of the fixed selectors used by the parsers
pub(crate) fn css(selector: &'static str) -> Selector {
    Selector::parse(selector).expect("static selector must be valid CSS")
}

/// Returns the first descendant of `element` matching `selector`
pub(crate) fn first<'a>(element: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    element.select(selector).next()
}

/// All text under `element` concatenated and trimmed, `None` when blank
pub(crate) fn trimmed_text(element: ElementRef<'_>) -> Option<String> {
    non_empty(element.text().collect::<String>().trim())
}

/// Trimmed value of an attribute, `None` when absent or blank
pub(crate) fn trimmed_attr(element: ElementRef<'_>, name: &str) -> Option<String> {
    element.value().attr(name).and_then(|v| non_empty(v.trim()))
}

/// Every text node under `element` trimmed, blanks dropped, joined with `separator`
pub(crate) fn joined_text(element: ElementRef<'_>, separator: &str) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
