use crate::config::{DatePosted, ExperienceLevel, SearchConfig, WorkplaceType};
use url::form_urlencoded;

/// Base address of the job search results page
pub const SEARCH_BASE_URL: &str = "https://www.linkedin.com/jobs/search/";

/// Everything needed to address one region's search results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParameters {
    pub keyword: String,
    pub region: String,
    pub experience_levels: Vec<ExperienceLevel>,
    pub workplace_types: Vec<WorkplaceType>,
    pub date_posted: DatePosted,
}

impl SearchParameters {
    /// Parameters for one region of a configured run
    pub fn for_region(config: &SearchConfig, region: &str) -> Self {
        Self {
            keyword: config.keyword.clone(),
            region: region.to_string(),
            experience_levels: config.experience_levels.clone(),
            workplace_types: config.workplace_types.clone(),
            date_posted: config.date_posted,
        }
    }

    pub fn url(&self) -> String {
        build_search_url(
            &self.keyword,
            &self.region,
            &self.experience_levels,
            &self.workplace_types,
            self.date_posted,
        )
    }
}

/// Builds the search results address for the given filters.
///
/// Empty filter lists and `DatePosted::Any` leave their query component out
/// entirely.
pub fn build_search_url(
    keyword: &str,
    region: &str,
    experience_levels: &[ExperienceLevel],
    workplace_types: &[WorkplaceType],
    date_posted: DatePosted,
) -> String {
    let mut url = format!(
        "{}?keywords={}&location={}",
        SEARCH_BASE_URL,
        encode(keyword),
        encode(region)
    );

    if !experience_levels.is_empty() {
        url.push_str("&f_E=");
        url.push_str(&join_codes(experience_levels.iter().map(|e| e.code())));
    }
    if !workplace_types.is_empty() {
        url.push_str("&f_WT=");
        url.push_str(&join_codes(workplace_types.iter().map(|w| w.code())));
    }
    if let Some(seconds) = date_posted.seconds() {
        url.push_str(&format!("&f_TPR=r{}", seconds));
    }

    url.push_str("&position=1&pageNum=0");
    url
}

fn encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

fn join_codes(codes: impl Iterator<Item = u8>) -> String {
    codes.map(|c| c.to_string()).collect::<Vec<_>>().join(",")
}
