//! Joke fetching over plain HTTP, one worker thread per request.

use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use super::Fetcher;
use crate::errors::FetchError;
use crate::events::AppEvent;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Deserialize)]
struct JokeBody {
    data: JokeData,
}

#[derive(Deserialize)]
struct JokeData {
    content: String,
}

/// Fetches `GET http://<endpoint>/joke` on a short-lived thread per request.
pub struct JokeClient {
    client: reqwest::blocking::Client,
    url: String,
    events: Sender<AppEvent>,
}

impl JokeClient {
    pub fn new(endpoint: &str, events: Sender<AppEvent>) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "falling back to default http client");
                reqwest::blocking::Client::new()
            });
        Self {
            client,
            url: joke_url(endpoint),
            events,
        }
    }
}

impl Fetcher for JokeClient {
    fn fetch_joke(&self) {
        let client = self.client.clone();
        let url = self.url.clone();
        let events = self.events.clone();
        thread::spawn(move || {
            debug!(%url, "fetching joke");
            let result = request_joke(&client, &url);
            if let Err(err) = &result {
                warn!(error = %err, "joke fetch failed");
            }
            let _ = events.send(AppEvent::Joke(result));
        });
    }
}

pub(crate) fn joke_url(endpoint: &str) -> String {
    let endpoint = endpoint.trim().trim_end_matches('/');
    let host = endpoint
        .strip_prefix("ws://")
        .or_else(|| endpoint.strip_prefix("wss://"))
        .or_else(|| endpoint.strip_prefix("http://"))
        .or_else(|| endpoint.strip_prefix("https://"))
        .unwrap_or(endpoint);
    format!("http://{host}/joke")
}

fn request_joke(client: &reqwest::blocking::Client, url: &str) -> Result<String, FetchError> {
    let response = client.get(url).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }
    let text = response.text()?;
    parse_joke(&text)
}

/// Extract the joke text from `{ "data": { "content": "..." } }`.
pub(crate) fn parse_joke(body: &str) -> Result<String, FetchError> {
    let body: JokeBody =
        serde_json::from_str(body).map_err(|err| FetchError::Malformed(err.to_string()))?;
    Ok(body.data.content.trim().to_string())
}
