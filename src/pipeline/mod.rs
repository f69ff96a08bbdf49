#[cfg(test)]
mod tests;

use crate::browser::{BrowserSession, fetch_detail, scroll_to_end};
use crate::config::SearchConfig;
use crate::parsers::listing;
use crate::results::JobRecord;
use crate::search::SearchParameters;
use std::future::Future;

/// Records gathered by a run, and whether it was cut short
#[derive(Debug, Default)]
pub struct RunOutcome {
    pub records: Vec<JobRecord>,
    pub interrupted: bool,
}

/// Runs the whole search with `session`, then closes it.
///
/// The session is closed whether the regions all complete or `shutdown`
/// resolves first. Records gathered before an interruption are kept.
pub async fn run<S, F>(mut session: S, config: &SearchConfig, shutdown: F) -> RunOutcome
where
    S: BrowserSession,
    F: Future<Output = ()>,
{
    let mut records = Vec::new();

    let interrupted = tokio::select! {
        biased;
        _ = shutdown => true,
        _ = collect_jobs(&mut session, config, &mut records) => false,
    };
    if interrupted {
        ::log::warn!(
            "Interrupted; keeping the {} jobs collected so far",
            records.len()
        );
    }

    if let Err(e) = session.close().await {
        ::log::warn!("Failed to close the browser session: {}", e);
    }

    RunOutcome {
        records,
        interrupted,
    }
}

/// Scrapes every configured region in order, appending to `records`
pub async fn collect_jobs<S: BrowserSession>(
    session: &mut S,
    config: &SearchConfig,
    records: &mut Vec<JobRecord>,
) {
    for region in &config.regions {
        let found = scrape_region(session, config, region, records).await;
        ::log::info!("Collected {} jobs for {}", found, region);
    }
}

/// Loads one region's results, grows the page, and fetches each listing.
///
/// Returns how many records were appended. A results page that cannot be
/// loaded or read is skipped.
pub async fn scrape_region<S: BrowserSession>(
    session: &mut S,
    config: &SearchConfig,
    region: &str,
    records: &mut Vec<JobRecord>,
) -> usize {
    let url = SearchParameters::for_region(config, region).url();
    ::log::info!("Scraping jobs for {}", region);
    ::log::info!("URL: {}", url);

    if let Err(e) = session.goto(&url).await {
        ::log::error!("Failed to open results for {}: {}", region, e);
        return 0;
    }

    let outcome = scroll_to_end(session, &config.scroll_options()).await;
    ::log::debug!("Pagination for {} ended with {:?}", region, outcome);

    let html = match session.source().await {
        Ok(html) => html,
        Err(e) => {
            ::log::error!("Failed to read results for {}: {}", region, e);
            return 0;
        }
    };

    let page = listing::parse(&html, region);
    let total = page.summaries.len();
    ::log::info!("Found {} listings for {}", total, region);

    let detail_options = config.detail_options();
    for (idx, summary) in page.summaries.into_iter().enumerate() {
        ::log::info!("({}/{}) Fetching job: {}", idx + 1, total, summary.title);
        let detail = fetch_detail(session, &summary.job_url, &detail_options).await;
        records.push(JobRecord::new(summary, detail));
    }

    total
}
