use crate::browser::BrowserSession;
use crate::config::DetailOptions;
use crate::error::BrowserError;
use crate::parsers::detail::{self, READY_MARKER};
use crate::results::ListingDetail;

/// Fetches the job and company descriptions from a listing's own page.
///
/// An empty `job_url` returns empty descriptions without touching the browser.
/// Navigation, wait and source failures are logged and also yield empty
/// descriptions.
pub async fn fetch_detail<S: BrowserSession>(
    session: &mut S,
    job_url: &str,
    options: &DetailOptions,
) -> ListingDetail {
    if job_url.is_empty() {
        return ListingDetail::default();
    }

    match try_fetch(session, job_url, options).await {
        Ok(detail) => detail,
        Err(e) => {
            ::log::warn!("Failed to fetch job detail {}: {}", job_url, e);
            ListingDetail::default()
        }
    }
}

async fn try_fetch<S: BrowserSession>(
    session: &mut S,
    job_url: &str,
    options: &DetailOptions,
) -> Result<ListingDetail, BrowserError> {
    session.goto(job_url).await?;
    tokio::time::sleep(options.pause).await;
    session
        .wait_for_element(READY_MARKER, options.wait_timeout)
        .await?;

    let html = session.source().await?;
    Ok(detail::parse(&html))
}
