use crate::parsers::{css, joined_text};
use crate::results::ListingDetail;
use scraper::{Html, Selector};
use std::sync::LazyLock;

/// Element whose presence means a listing page has rendered its description
pub const READY_MARKER: &str = ".description__text";

static JOB_DESCRIPTION: LazyLock<Selector> = LazyLock::new(|| css("div.description__text"));
static COMPANY_DESCRIPTION: LazyLock<Selector> =
    LazyLock::new(|| css("div.show-more-less-html__markup"));

/// Parses a listing page into its job and company descriptions.
///
/// Each description is the element's text nodes, trimmed and newline-joined.
/// Either is empty when its element is missing.
pub fn parse(html: &str) -> ListingDetail {
    let doc = Html::parse_document(html);

    let text_of = |selector: &Selector| {
        doc.select(selector)
            .next()
            .map(|el| joined_text(el, "\n"))
            .unwrap_or_default()
    };

    ListingDetail {
        job_description: text_of(&*JOB_DESCRIPTION),
        company_description: text_of(&*COMPANY_DESCRIPTION),
    }
}
