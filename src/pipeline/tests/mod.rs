
use crate::config::{DatePosted, SearchConfig};

/// A config with every pause and wait set to zero
pub(crate) fn instant_config(regions: &[&str]) -> SearchConfig {
    let mut config = SearchConfig::new("data scientist", regions);
    config.date_posted = DatePosted::PastDay;
    config.scroll_pause_secs = 0;
    config.detail_pause_secs = 0;
    config.wait_timeout_secs = 0;
    config
}
