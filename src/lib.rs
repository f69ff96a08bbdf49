//! Scrapes job search results with a WebDriver-controlled browser.
//!
//! A run builds the search address for each configured region, scrolls the
//! results page until it stops growing, reads every listing card, visits each
//! listing for its full description, and hands the merged records to the CSV
//! and email sinks in [`output`].

pub mod browser;
pub mod config;
pub mod error;
pub mod output;
pub mod parsers;
pub mod pipeline;
pub mod results;
pub mod search;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::{DatePosted, ExperienceLevel, SearchConfig, WorkplaceType};
pub use results::{JobRecord, ListingDetail, ListingSummary};
pub use search::{SearchParameters, build_search_url};
