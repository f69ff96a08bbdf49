use crate::parsers::{css, first, trimmed_attr, trimmed_text};
use crate::results::ListingSummary;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

static CARD: LazyLock<Selector> = LazyLock::new(|| css("div.base-card"));
static FULL_LINK: LazyLock<Selector> = LazyLock::new(|| css("a.base-card__full-link"));
static TITLE: LazyLock<Selector> = LazyLock::new(|| css("span.sr-only"));
static COMPANY_LINK: LazyLock<Selector> =
    LazyLock::new(|| css("h4.base-search-card__subtitle a"));
static LOCATION: LazyLock<Selector> = LazyLock::new(|| css("span.job-search-card__location"));
static BENEFIT: LazyLock<Selector> = LazyLock::new(|| css("span.job-posting-benefits__text"));
static POSTED: LazyLock<Selector> = LazyLock::new(|| {
    css("time.job-search-card__listdate, time.job-search-card__listdate--new")
});

/// Share of missing summary fields above which the page is assumed to have changed shape
pub const DRIFT_THRESHOLD: f64 = 0.5;

/// Summaries read from a results page, plus how many card fields were absent
#[derive(Debug, Default)]
pub struct ListingPage {
    pub summaries: Vec<ListingSummary>,
    pub missing_fields: usize,
}

impl ListingPage {
    /// Fraction of card fields that came back empty
    pub fn missing_ratio(&self) -> f64 {
        let total = self.summaries.len() * CardFields::COUNT;
        if total == 0 {
            return 0.0;
        }
        self.missing_fields as f64 / total as f64
    }

    pub fn looks_drifted(&self) -> bool {
        self.missing_ratio() > DRIFT_THRESHOLD
    }
}

/// Fields of one card as found in the markup
#[derive(Debug, Default)]
struct CardFields {
    job_url: Option<String>,
    title: Option<String>,
    company_name: Option<String>,
    company_url: Option<String>,
    location: Option<String>,
    benefit: Option<String>,
    posted: Option<String>,
}

impl CardFields {
    const COUNT: usize = 7;

    fn read(card: ElementRef<'_>) -> Self {
        let link = first(card, &FULL_LINK);
        let company = first(card, &COMPANY_LINK);

        Self {
            job_url: link.and_then(|a| trimmed_attr(a, "href")),
            title: link
                .and_then(|a| first(a, &TITLE))
                .and_then(trimmed_text),
            company_name: company.and_then(trimmed_text),
            company_url: company.and_then(|a| trimmed_attr(a, "href")),
            location: first(card, &LOCATION).and_then(trimmed_text),
            benefit: first(card, &BENEFIT).and_then(trimmed_text),
            posted: first(card, &POSTED).and_then(trimmed_text),
        }
    }

    fn missing(&self) -> usize {
        [
            &self.job_url,
            &self.title,
            &self.company_name,
            &self.company_url,
            &self.location,
            &self.benefit,
            &self.posted,
        ]
        .iter()
        .filter(|f| f.is_none())
        .count()
    }

    fn into_summary(self, region: &str) -> ListingSummary {
        ListingSummary {
            region: region.to_string(),
            title: self.title.unwrap_or_default(),
            company_name: self.company_name.unwrap_or_default(),
            company_url: self.company_url.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            benefit: self.benefit.unwrap_or_default(),
            posted: self.posted.unwrap_or_default(),
            job_url: self.job_url.unwrap_or_default(),
        }
    }
}

/// Reads every listing card on a results page, in document order.
///
/// Never fails: a card missing any of its sub-elements still yields a summary
/// with the corresponding fields left empty.
pub fn parse(html: &str, region: &str) -> ListingPage {
    let doc = Html::parse_document(html);
    let mut page = ListingPage::default();

    for card in doc.select(&CARD) {
        let fields = CardFields::read(card);
        page.missing_fields += fields.missing();
        page.summaries.push(fields.into_summary(region));
    }

    ::log::debug!(
        "Listing parser found {} cards ({} missing fields)",
        page.summaries.len(),
        page.missing_fields
    );
    if page.looks_drifted() {
        ::log::warn!(
            "{:.0}% of listing fields were empty for {}; the results page layout may have changed",
            page.missing_ratio() * 100.0,
            region
        );
    }

    page
}
