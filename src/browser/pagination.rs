use crate::browser::BrowserSession;
use crate::config::ScrollOptions;
use crate::error::BrowserError;

/// The results page's "See more jobs" button
pub const SHOW_MORE_BUTTON: &str = ".infinite-scroller__show-more-button";

/// How a pagination run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollOutcome {
    /// The page stopped growing after `rounds` rounds of growth
    Converged { rounds: usize },
    /// The page was still growing when the attempt ceiling was hit
    CeilingReached,
    /// A browser command failed after `rounds` rounds of growth
    Aborted { rounds: usize },
}

/// Grows an infinite-scroll page until its height stops changing.
///
/// Each round scrolls to the bottom, pauses, clicks the "load more" control if
/// it becomes clickable, and re-measures the document. A single measurement
/// covers both growth signals, so the page counts as grown if either the scroll
/// or the click added content. Always returns after at most
/// `options.max_attempts` rounds of growth.
pub async fn scroll_to_end<S: BrowserSession>(
    session: &mut S,
    options: &ScrollOptions,
) -> ScrollOutcome {
    let mut last_height = match session.document_height().await {
        Ok(height) => height,
        Err(e) => {
            ::log::warn!("Could not measure the results page: {}", e);
            return ScrollOutcome::Aborted { rounds: 0 };
        }
    };

    let mut attempts = 0;
    while attempts < options.max_attempts {
        let new_height = match grow_once(session, options).await {
            Ok(height) => height,
            Err(e) => {
                ::log::warn!("Stopped scrolling after {} rounds: {}", attempts, e);
                return ScrollOutcome::Aborted { rounds: attempts };
            }
        };

        if new_height == last_height {
            ::log::debug!("Page height settled at {} after {} rounds", new_height, attempts);
            return ScrollOutcome::Converged { rounds: attempts };
        }

        ::log::debug!("Page grew from {} to {}", last_height, new_height);
        last_height = new_height;
        attempts += 1;
    }

    ::log::info!(
        "Reached the limit of {} scroll attempts; continuing with the listings loaded so far",
        options.max_attempts
    );
    ScrollOutcome::CeilingReached
}

async fn grow_once<S: BrowserSession>(
    session: &mut S,
    options: &ScrollOptions,
) -> Result<u64, BrowserError> {
    session.scroll_to_bottom().await?;
    tokio::time::sleep(options.pause).await;

    match session
        .click_when_clickable(SHOW_MORE_BUTTON, options.wait_timeout)
        .await
    {
        Ok(true) => {
            ::log::debug!("Clicked the show-more button");
            tokio::time::sleep(options.pause).await;
        }
        Ok(false) => {}
        Err(e) => ::log::debug!("Show-more button not usable: {}", e),
    }

    session.document_height().await
}
