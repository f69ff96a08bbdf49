use crate::browser::BrowserSession;
use crate::error::BrowserError;
use fantoccini::error::CmdError;
use fantoccini::{Client, ClientBuilder, Locator};
use serde_json::{Map, Value, json};
use std::time::{Duration, Instant};

/// Interval between clickability checks on an element that is present
const CLICK_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Local WebDriver addresses tried when the configured one refuses a session
const FALLBACK_URLS: [&str; 2] = [
    "http://localhost:9515", // ChromeDriver default
    "http://127.0.0.1:4444",
];

/// How the Chrome session is started
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub webdriver_url: String,
    pub headless: bool,
}

impl SessionOptions {
    fn capabilities(&self) -> Map<String, Value> {
        let mut args = vec!["--start-maximized", "--incognito"];
        if self.headless {
            args.push("--headless=new");
        }

        let mut caps = Map::new();
        caps.insert("browserName".to_string(), json!("chrome"));
        caps.insert("goog:chromeOptions".to_string(), json!({ "args": args }));
        caps
    }
}

/// A browser session backed by a WebDriver server
pub struct WebDriverSession {
    client: Client,
}

impl WebDriverSession {
    /// Opens a new Chrome session.
    ///
    /// Tries the configured WebDriver address first, then the common local
    /// defaults. Fails only when none of them accept a session.
    pub async fn connect(options: &SessionOptions) -> Result<Self, BrowserError> {
        let caps = options.capabilities();

        let first_error = match try_connect(&options.webdriver_url, &caps).await {
            Ok(client) => return Ok(Self { client }),
            Err(e) => e,
        };
        ::log::warn!("{}", first_error);

        for url in FALLBACK_URLS.iter() {
            if *url == options.webdriver_url {
                continue;
            }

            ::log::info!("Trying fallback WebDriver URL: {}", url);
            if let Ok(client) = try_connect(url, &caps).await {
                return Ok(Self { client });
            }
        }

        ::log::error!(
            "Make sure a WebDriver server is running or set the WEBDRIVER_URL environment variable"
        );
        Err(first_error)
    }
}

async fn try_connect(url: &str, caps: &Map<String, Value>) -> Result<Client, BrowserError> {
    let mut builder = ClientBuilder::native();
    builder.capabilities(caps.clone());

    match builder.connect(url).await {
        Ok(client) => {
            ::log::debug!("Connected to WebDriver at {}", url);
            Ok(client)
        }
        Err(e) => Err(BrowserError::Connect {
            url: url.to_string(),
            reason: e.to_string(),
        }),
    }
}

impl BrowserSession for WebDriverSession {
    async fn goto(&mut self, url: &str) -> Result<(), BrowserError> {
        self.client.goto(url).await?;
        Ok(())
    }

    async fn source(&mut self) -> Result<String, BrowserError> {
        Ok(self.client.source().await?)
    }

    async fn scroll_to_bottom(&mut self) -> Result<(), BrowserError> {
        self.client
            .execute("window.scrollTo(0, document.body.scrollHeight);", vec![])
            .await?;
        Ok(())
    }

    async fn document_height(&mut self) -> Result<u64, BrowserError> {
        let value = self
            .client
            .execute("return document.body.scrollHeight", vec![])
            .await?;

        value
            .as_u64()
            .or_else(|| value.as_f64().map(|h| h as u64))
            .ok_or_else(|| BrowserError::Script(value.to_string()))
    }

    async fn click_when_clickable(
        &mut self,
        selector: &str,
        timeout: Duration,
    ) -> Result<bool, BrowserError> {
        let deadline = Instant::now() + timeout;

        let element = match self
            .client
            .wait()
            .at_most(timeout)
            .for_element(Locator::Css(selector))
            .await
        {
            Ok(element) => element,
            Err(CmdError::WaitTimeout) => return Ok(false),
            Err(e) => return Err(e.into()),
        };

        loop {
            if element.is_displayed().await? && element.is_enabled().await? {
                element.click().await?;
                return Ok(true);
            }
            if Instant::now() >= deadline {
                return Ok(false);
            }
            tokio::time::sleep(CLICK_POLL_INTERVAL).await;
        }
    }

    async fn wait_for_element(
        &mut self,
        selector: &str,
        timeout: Duration,
    ) -> Result<(), BrowserError> {
        match self
            .client
            .wait()
            .at_most(timeout)
            .for_element(Locator::Css(selector))
            .await
        {
            Ok(_) => Ok(()),
            Err(CmdError::WaitTimeout) => Err(BrowserError::Timeout(selector.to_string())),
            Err(e) => Err(e.into()),
        }
    }

    async fn close(self) -> Result<(), BrowserError> {
        self.client.close().await?;
        Ok(())
    }
}
