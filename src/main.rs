use clap::Parser;
use job_yield::browser::{SessionOptions, WebDriverSession};
use job_yield::output::{EmailSettings, SendDigest, SmtpMailer, publish};
use job_yield::{config, pipeline, utils};
use std::error::Error;

mod args;
use args::Args;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    // Secrets may live in a local .env file
    let env_file = config::load_env_file();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(e) = env_file {
        ::log::warn!("Ignoring .env file: {}", e);
    }

    let args = Args::parse();
    let config = args.to_config()?;

    let mailer = if args.no_email {
        None
    } else {
        match EmailSettings::from_env() {
            Ok(settings) => {
                let mailer = SmtpMailer::new(settings);
                ::log::info!("Digest will be emailed to {}", mailer.receiver());
                Some(mailer)
            }
            Err(e) => {
                ::log::warn!("Email digest disabled: {}", e);
                None
            }
        }
    };

    ::log::info!(
        "Searching for \"{}\" in {} region(s) via WebDriver at {}",
        config.keyword,
        config.regions.len(),
        config.webdriver_url
    );

    let session = WebDriverSession::connect(&SessionOptions {
        webdriver_url: config.webdriver_url.clone(),
        headless: config.headless,
    })
    .await?;

    let start_time = std::time::Instant::now();
    let shutdown = async {
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    };
    let outcome = pipeline::run(session, &config, shutdown).await;

    ::log::info!(
        "Collected {} jobs in {:.2} seconds",
        outcome.records.len(),
        start_time.elapsed().as_secs_f64()
    );

    let file_name = utils::results_file_name(&config);
    let output_dir = config.output_dir.clone();
    let records = outcome.records;
    let publication = tokio::task::spawn_blocking(move || {
        publish(
            &records,
            &output_dir,
            &file_name,
            mailer.as_ref().map(|m| m as &dyn SendDigest),
        )
    })
    .await?;

    ::log::debug!("Run finished: {:?}", publication);
    Ok(())
}
