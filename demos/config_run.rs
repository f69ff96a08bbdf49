use clap::Parser;
use job_yield::browser::{SessionOptions, WebDriverSession};
use job_yield::output::file::save_results;
use job_yield::{SearchConfig, SearchParameters, pipeline, utils};
use std::error::Error;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to search configuration file
    #[arg(short, long, default_value = "search.example.json")]
    config: String,

    /// Only search this region
    #[arg(short, long)]
    region: Option<String>,

    /// Override the scroll attempt ceiling
    #[arg(short, long)]
    max_scroll_attempts: Option<usize>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = Args::parse();

    let mut config = SearchConfig::from_file(&args.config)?;
    if let Some(region) = args.region {
        config.regions = vec![region];
    }
    if let Some(max) = args.max_scroll_attempts {
        config.max_scroll_attempts = max;
    }
    config.validate()?;

    println!("Loaded search configuration from {}:", args.config);
    println!("  Keyword: {}", config.keyword);
    println!("  Date posted: {}", config.date_posted);
    println!("  WebDriver URL: {}", config.webdriver_url);
    for region in &config.regions {
        println!(
            "  {}: {}",
            region,
            SearchParameters::for_region(&config, region).url()
        );
    }

    let session = WebDriverSession::connect(&SessionOptions {
        webdriver_url: config.webdriver_url.clone(),
        headless: config.headless,
    })
    .await?;

    let outcome = pipeline::run(session, &config, async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await;

    println!(
        "Collected {} jobs{}",
        outcome.records.len(),
        if outcome.interrupted {
            " before interruption"
        } else {
            ""
        }
    );
    for record in outcome.records.iter().take(5) {
        println!("  [{}] {} at {}", record.region, record.job_title, record.company_name);
    }

    let file_name = utils::results_file_name(&config);
    match save_results(&config.output_dir, &file_name, &outcome.records)? {
        Some(path) => println!("Results written to {}", path.display()),
        None => println!("No jobs found; nothing written"),
    }

    Ok(())
}
