use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// Recency filter applied to the search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatePosted {
    /// No recency restriction
    #[default]
    #[serde(rename = "any")]
    Any,
    /// Past 24 hours
    #[serde(rename = "24h")]
    PastDay,
    /// Past week
    #[serde(rename = "week")]
    PastWeek,
    /// Past month
    #[serde(rename = "month")]
    PastMonth,
}

impl DatePosted {
    /// Keyword used in config files, CLI flags and output filenames
    pub fn as_str(&self) -> &'static str {
        match self {
            DatePosted::Any => "any",
            DatePosted::PastDay => "24h",
            DatePosted::PastWeek => "week",
            DatePosted::PastMonth => "month",
        }
    }

    /// Size of the recency window in seconds, `None` when unrestricted
    pub fn seconds(&self) -> Option<u64> {
        match self {
            DatePosted::Any => None,
            DatePosted::PastDay => Some(86_400),
            DatePosted::PastWeek => Some(604_800),
            DatePosted::PastMonth => Some(2_592_000),
        }
    }
}

impl FromStr for DatePosted {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "any" => Ok(DatePosted::Any),
            "24h" => Ok(DatePosted::PastDay),
            "week" => Ok(DatePosted::PastWeek),
            "month" => Ok(DatePosted::PastMonth),
            other => Err(ConfigError::InvalidCode {
                kind: "date posted",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for DatePosted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Experience level filter, encoded as the numeric codes 1 to 6
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ExperienceLevel {
    Internship = 1,
    EntryLevel = 2,
    Associate = 3,
    MidSenior = 4,
    Director = 5,
    Executive = 6,
}

impl ExperienceLevel {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl FromStr for ExperienceLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(ExperienceLevel::Internship),
            "2" => Ok(ExperienceLevel::EntryLevel),
            "3" => Ok(ExperienceLevel::Associate),
            "4" => Ok(ExperienceLevel::MidSenior),
            "5" => Ok(ExperienceLevel::Director),
            "6" => Ok(ExperienceLevel::Executive),
            other => Err(ConfigError::InvalidCode {
                kind: "experience level",
                value: other.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for ExperienceLevel {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ExperienceLevel> for String {
    fn from(level: ExperienceLevel) -> Self {
        level.code().to_string()
    }
}

/// Workplace type filter, encoded as the numeric codes 1 to 3
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum WorkplaceType {
    OnSite = 1,
    Remote = 2,
    Hybrid = 3,
}

impl WorkplaceType {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl FromStr for WorkplaceType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(WorkplaceType::OnSite),
            "2" => Ok(WorkplaceType::Remote),
            "3" => Ok(WorkplaceType::Hybrid),
            other => Err(ConfigError::InvalidCode {
                kind: "workplace type",
                value: other.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for WorkplaceType {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WorkplaceType> for String {
    fn from(kind: WorkplaceType) -> Self {
        kind.code().to_string()
    }
}

/// Configuration for a search run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Job title or keyword to search for
    #[serde(default)]
    pub keyword: String,

    /// Regions to search, processed in order
    #[serde(default)]
    pub regions: Vec<String>,

    /// Recency filter
    #[serde(default)]
    pub date_posted: DatePosted,

    /// Experience levels to include (empty means all)
    #[serde(default)]
    pub experience_levels: Vec<ExperienceLevel>,

    /// Workplace types to include (empty means all)
    #[serde(default)]
    pub workplace_types: Vec<WorkplaceType>,

    /// Upper bound on scroll rounds per results page
    #[serde(default = "default_max_scroll_attempts")]
    pub max_scroll_attempts: usize,

    /// Seconds to wait after each scroll or "load more" click
    #[serde(default = "default_scroll_pause_secs")]
    pub scroll_pause_secs: u64,

    /// Seconds to wait after opening a listing page
    #[serde(default = "default_detail_pause_secs")]
    pub detail_pause_secs: u64,

    /// Seconds to wait for an element before giving up on it
    #[serde(default = "default_wait_timeout_secs")]
    pub wait_timeout_secs: u64,

    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Run the browser without a window
    #[serde(default)]
    pub headless: bool,

    /// Directory the results file is written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

/// Timing used by the pagination driver
#[derive(Debug, Clone, Copy)]
pub struct ScrollOptions {
    pub max_attempts: usize,
    pub pause: Duration,
    pub wait_timeout: Duration,
}

/// Timing used by the detail fetcher
#[derive(Debug, Clone, Copy)]
pub struct DetailOptions {
    pub pause: Duration,
    pub wait_timeout: Duration,
}

fn default_max_scroll_attempts() -> usize {
    200
}

fn default_scroll_pause_secs() -> u64 {
    5
}

fn default_detail_pause_secs() -> u64 {
    2
}

fn default_wait_timeout_secs() -> u64 {
    5
}

fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            keyword: String::new(),
            regions: Vec::new(),
            date_posted: DatePosted::default(),
            experience_levels: Vec::new(),
            workplace_types: Vec::new(),
            max_scroll_attempts: default_max_scroll_attempts(),
            scroll_pause_secs: default_scroll_pause_secs(),
            detail_pause_secs: default_detail_pause_secs(),
            wait_timeout_secs: default_wait_timeout_secs(),
            webdriver_url: default_webdriver_url(),
            headless: false,
            output_dir: default_output_dir(),
        }
    }
}

impl SearchConfig {
    /// Create a new configuration with default values
    pub fn new(keyword: &str, regions: &[&str]) -> Self {
        Self {
            keyword: keyword.to_string(),
            regions: regions.iter().map(|r| r.to_string()).collect(),
            ..Self::default()
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let mut contents = String::new();
        File::open(path)
            .and_then(|mut file| file.read_to_string(&mut contents))
            .map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Checks the values a run cannot start without
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.keyword.trim().is_empty() {
            return Err(ConfigError::Missing("keyword"));
        }
        if self.regions.is_empty() || self.regions.iter().any(|r| r.trim().is_empty()) {
            return Err(ConfigError::Missing("regions"));
        }
        if self.max_scroll_attempts == 0 {
            return Err(ConfigError::Missing("max_scroll_attempts"));
        }
        Ok(())
    }

    pub fn scroll_options(&self) -> ScrollOptions {
        ScrollOptions {
            max_attempts: self.max_scroll_attempts,
            pause: Duration::from_secs(self.scroll_pause_secs),
            wait_timeout: Duration::from_secs(self.wait_timeout_secs),
        }
    }

    pub fn detail_options(&self) -> DetailOptions {
        DetailOptions {
            pause: Duration::from_secs(self.detail_pause_secs),
            wait_timeout: Duration::from_secs(self.wait_timeout_secs),
        }
    }
}

/// Loads a local `.env` file into the process environment.
///
/// A missing file is fine; a malformed or unreadable one is returned.
pub fn load_env_file() -> Result<(), dotenvy::Error> {
    tolerate_missing(dotenvy::dotenv())
}

fn tolerate_missing<T>(result: Result<T, dotenvy::Error>) -> Result<(), dotenvy::Error> {
    match result {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_minimal_json() {
        let config =
            SearchConfig::from_json(r#"{"keyword": "data scientist", "regions": ["India"]}"#)
                .unwrap();

        assert_eq!(config.keyword, "data scientist");
        assert_eq!(config.regions, vec!["India"]);
        assert_eq!(config.date_posted, DatePosted::Any);
        assert!(config.experience_levels.is_empty());
        assert!(config.workplace_types.is_empty());
        assert_eq!(config.max_scroll_attempts, 200);
        assert_eq!(config.scroll_pause_secs, 5);
        assert_eq!(config.detail_pause_secs, 2);
        assert_eq!(config.wait_timeout_secs, 5);
        assert_eq!(config.webdriver_url, "http://localhost:4444");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_filter_codes_from_json() {
        let config = SearchConfig::from_json(
            r#"{
                "keyword": "rust",
                "regions": ["Berlin"],
                "date_posted": "week",
                "experience_levels": ["2", "4"],
                "workplace_types": ["2", "3"]
            }"#,
        )
        .unwrap();

        assert_eq!(config.date_posted, DatePosted::PastWeek);
        assert_eq!(
            config.experience_levels,
            vec![ExperienceLevel::EntryLevel, ExperienceLevel::MidSenior]
        );
        assert_eq!(
            config.workplace_types,
            vec![WorkplaceType::Remote, WorkplaceType::Hybrid]
        );
    }

    #[test]
    fn test_invalid_codes_are_rejected() {
        assert!(SearchConfig::from_json(r#"{"experience_levels": ["7"]}"#).is_err());
        assert!(SearchConfig::from_json(r#"{"workplace_types": ["0"]}"#).is_err());
        assert!(SearchConfig::from_json(r#"{"date_posted": "year"}"#).is_err());
        assert!("yesterday".parse::<DatePosted>().is_err());
        assert!("4".parse::<WorkplaceType>().is_err());
    }

    #[test]
    fn test_codes_serialize_as_strings() {
        let config = SearchConfig {
            experience_levels: vec![ExperienceLevel::Executive],
            workplace_types: vec![WorkplaceType::OnSite],
            date_posted: DatePosted::PastDay,
            ..SearchConfig::new("rust", &["Oslo"])
        };
        let json = serde_json::to_value(&config).unwrap();

        assert_eq!(json["experience_levels"], serde_json::json!(["6"]));
        assert_eq!(json["workplace_types"], serde_json::json!(["1"]));
        assert_eq!(json["date_posted"], "24h");
    }

    #[test]
    fn test_validate() {
        assert!(matches!(
            SearchConfig::new("", &["India"]).validate(),
            Err(ConfigError::Missing("keyword"))
        ));
        assert!(matches!(
            SearchConfig::new("rust", &[]).validate(),
            Err(ConfigError::Missing("regions"))
        ));

        let mut config = SearchConfig::new("rust", &["India"]);
        config.max_scroll_attempts = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_blank_region_rejected() {
        assert!(matches!(
            SearchConfig::new("rust", &["India", "  "]).validate(),
            Err(ConfigError::Missing("regions"))
        ));
        assert!(SearchConfig::new("rust", &["India", "Oslo"]).validate().is_ok());
    }

    #[test]
    fn test_example_config_file() {
        let config = SearchConfig::from_json(include_str!("../search.example.json")).unwrap();
        assert_eq!(config.date_posted, DatePosted::PastDay);
        assert_eq!(
            config.workplace_types,
            vec![WorkplaceType::Remote, WorkplaceType::Hybrid]
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            SearchConfig::from_file("does/not/exist.json"),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn test_recency_windows() {
        assert_eq!(DatePosted::Any.seconds(), None);
        assert_eq!(DatePosted::PastDay.seconds(), Some(86_400));
        assert_eq!(DatePosted::PastWeek.seconds(), Some(604_800));
        assert_eq!(DatePosted::PastMonth.seconds(), Some(2_592_000));
    }

    #[test]
    fn test_missing_env_file_is_ignored() {
        let missing = std::env::temp_dir().join("job-yield-no-such-dir").join(".env");
        assert!(tolerate_missing(dotenvy::from_path(&missing)).is_ok());
    }

    #[test]
    fn test_malformed_env_file_is_reported() {
        let parse_error = dotenvy::Error::LineParse("SENDER EMAIL".to_string(), 6);
        assert!(matches!(
            tolerate_missing::<()>(Err(parse_error)),
            Err(dotenvy::Error::LineParse(..))
        ));
    }
}
