pub mod detail;
pub mod pagination;
pub mod session;
pub mod webdriver;

#[cfg(test)]
pub(crate) mod fake;

pub use detail::fetch_detail;
pub use pagination::{ScrollOutcome, scroll_to_end};
pub use session::BrowserSession;
pub use webdriver::{SessionOptions, WebDriverSession};
