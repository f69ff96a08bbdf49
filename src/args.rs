use clap::Parser;
use job_yield::config::{DatePosted, ExperienceLevel, SearchConfig, WorkplaceType};
use job_yield::error::ConfigError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "job-yield")]
#[command(about = "Scrapes job search results into a CSV file and emails a digest")]
#[command(version)]
pub struct Args {
    /// JSON search configuration file; flags below override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Job title or keyword to search for
    #[arg(short, long)]
    pub keyword: Option<String>,

    /// Region to search (repeat for several)
    #[arg(short, long = "region")]
    pub regions: Vec<String>,

    /// Recency filter (any, 24h, week, month)
    #[arg(short, long)]
    pub date_posted: Option<DatePosted>,

    /// Experience level code: 1 internship, 2 entry, 3 associate, 4 mid-senior,
    /// 5 director, 6 executive (repeat for several)
    #[arg(short, long = "experience")]
    pub experience_levels: Vec<ExperienceLevel>,

    /// Workplace type code: 1 on-site, 2 remote, 3 hybrid (repeat for several)
    #[arg(short, long = "workplace")]
    pub workplace_types: Vec<WorkplaceType>,

    /// Maximum scroll rounds per results page
    #[arg(long)]
    pub max_scroll_attempts: Option<usize>,

    /// Directory for the results file
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// WebDriver server address (also read from WEBDRIVER_URL)
    #[arg(long)]
    pub webdriver_url: Option<String>,

    /// Run Chrome without a window
    #[arg(long)]
    pub headless: bool,

    /// Do not send the digest email
    #[arg(long)]
    pub no_email: bool,
}

impl Args {
    /// Builds the run configuration: file (or defaults), then `WEBDRIVER_URL`,
    /// then command-line flags
    pub fn to_config(&self) -> Result<SearchConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => SearchConfig::from_file(path)?,
            None => SearchConfig::default(),
        };

        if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
            if !webdriver_url.is_empty() {
                config.webdriver_url = webdriver_url;
            }
        }

        if let Some(keyword) = &self.keyword {
            config.keyword = keyword.clone();
        }
        if !self.regions.is_empty() {
            config.regions = self.regions.clone();
        }
        if let Some(date_posted) = self.date_posted {
            config.date_posted = date_posted;
        }
        if !self.experience_levels.is_empty() {
            config.experience_levels = self.experience_levels.clone();
        }
        if !self.workplace_types.is_empty() {
            config.workplace_types = self.workplace_types.clone();
        }
        if let Some(max) = self.max_scroll_attempts {
            config.max_scroll_attempts = max;
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(url) = &self.webdriver_url {
            config.webdriver_url = url.clone();
        }
        if self.headless {
            config.headless = true;
        }

        config.validate()?;
        Ok(config)
    }
}
