use crate::error::BrowserError;
use std::time::Duration;

/// The browser commands the scraping pipeline relies on.
///
/// A session drives a single page. Callers hold it by `&mut` so only one
/// navigation can be in flight at a time.
#[allow(async_fn_in_trait)]
pub trait BrowserSession {
    /// Navigate the page to `url`
    async fn goto(&mut self, url: &str) -> Result<(), BrowserError>;

    /// Markup of the page as currently rendered
    async fn source(&mut self) -> Result<String, BrowserError>;

    /// Scroll the window to the bottom of the document
    async fn scroll_to_bottom(&mut self) -> Result<(), BrowserError>;

    /// Current scroll height of the document body
    async fn document_height(&mut self) -> Result<u64, BrowserError>;

    /// Click the first element matching `selector` once it is visible and
    /// enabled. Returns `Ok(false)` when that does not happen within `timeout`.
    async fn click_when_clickable(
        &mut self,
        selector: &str,
        timeout: Duration,
    ) -> Result<bool, BrowserError>;

    /// Wait until an element matching `selector` is present
    async fn wait_for_element(
        &mut self,
        selector: &str,
        timeout: Duration,
    ) -> Result<(), BrowserError>;

    /// End the session and release the browser
    async fn close(self) -> Result<(), BrowserError>
    where
        Self: Sized;
}
