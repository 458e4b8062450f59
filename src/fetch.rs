//! Data loader for the two recipe feeds.
//!
//! Both feeds are fetched concurrently and tolerated independently: a network
//! error, non-2xx status, or JSON decode failure on one feed leaves that
//! collection absent without aborting the other. No retry, no backoff.

use crate::events::AppEvent;
use crate::recipe::FeedDocument;
use std::time::Duration;
use tokio::sync::mpsc;

/// Fixed feed location. Not configurable at runtime.
pub const FEED_BASE_URL: &str = "https://raw.githubusercontent.com/savsr/FoodInspo/main/data";

pub const INSPIRATION_FEED: &str = "inspiration.json";
pub const LIBRARY_FEED: &str = "library.json";

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Unexpected response: {0}")]
    InvalidResponse(String),
}

/// Result of one joint load. Each collection is independently `None` on
/// failure; `errors` carries the diagnostic strings for the error log.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub inspiration: Option<FeedDocument>,
    pub library: Option<FeedDocument>,
    pub errors: Vec<String>,
}

#[derive(Clone)]
pub struct FeedClient {
    client: reqwest::Client,
    base_url: String,
}

impl FeedClient {
    pub fn new(request_timeout_ms: u64) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(request_timeout_ms))
            .build()?;
        Ok(Self {
            client,
            base_url: FEED_BASE_URL.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch both feeds concurrently and fold the per-feed outcomes. Always
    /// resolves; never returns an error.
    pub async fn load_feeds(&self) -> LoadOutcome {
        let (inspiration, library) = tokio::join!(
            self.fetch_feed(INSPIRATION_FEED),
            self.fetch_feed(LIBRARY_FEED)
        );

        let mut outcome = LoadOutcome::default();
        match inspiration {
            Ok(doc) => outcome.inspiration = Some(doc),
            Err(err) => outcome
                .errors
                .push(format!("{} fetch failed: {}", INSPIRATION_FEED, err)),
        }
        match library {
            Ok(doc) => outcome.library = Some(doc),
            Err(err) => outcome
                .errors
                .push(format!("{} fetch failed: {}", LIBRARY_FEED, err)),
        }
        outcome
    }

    async fn fetch_feed(&self, name: &str) -> Result<FeedDocument, FetchError> {
        let url = format!("{}/{}", self.base_url, name);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(response.json::<FeedDocument>().await?)
        } else {
            Err(FetchError::InvalidResponse(format!(
                "HTTP {}",
                status.as_u16()
            )))
        }
    }
}

/// Kick off one load on a background task; completion arrives as a single
/// `FeedsLoaded` event once both fetches have settled.
pub fn spawn_load(client: FeedClient, sender: mpsc::Sender<AppEvent>) {
    tokio::spawn(async move {
        let outcome = client.load_feeds().await;
        let _ = sender.send(AppEvent::FeedsLoaded(Box::new(outcome))).await;
    });
}
