use std::time::Duration;

use serde_json::Value;
use url::Url;

/// What came back from a bounded feed request.
///
/// Feed trouble is data, not an error to propagate: the caller's fallback
/// branch consumes this synchronously and the animation loop never sees it.
#[derive(Debug)]
pub enum FeedOutcome<T> {
    /// The payload, untouched.
    Fetched(T),
    /// The deadline elapsed before the service answered.
    TimedOut,
    /// Anything else: bad URL, transport failure, HTTP error status,
    /// unparseable body.
    Failed(String),
}

impl<T> FeedOutcome<T> {
    /// Map the payload, keeping the failure variants.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FeedOutcome<U> {
        match self {
            FeedOutcome::Fetched(value) => FeedOutcome::Fetched(f(value)),
            FeedOutcome::TimedOut => FeedOutcome::TimedOut,
            FeedOutcome::Failed(reason) => FeedOutcome::Failed(reason),
        }
    }
}

/// GET a JSON document with a hard deadline (blocking).
///
/// The payload is passed through verbatim: no validation, no retry, no
/// caching. One request, one outcome.
pub fn fetch_json(url_str: &str, deadline: Duration) -> FeedOutcome<Value> {
    let parsed = match Url::parse(url_str) {
        Ok(url) => url,
        Err(e) => return FeedOutcome::Failed(format!("invalid URL: {e}")),
    };

    let client = match reqwest::blocking::Client::builder()
        .user_agent("orrery/0.1")
        .timeout(deadline)
        .build()
    {
        Ok(client) => client,
        Err(e) => return FeedOutcome::Failed(format!("client error: {e}")),
    };

    let response = match client.get(parsed.as_str()).send() {
        Ok(response) => response,
        Err(e) if e.is_timeout() => return FeedOutcome::TimedOut,
        Err(e) => return FeedOutcome::Failed(format!("request failed: {e}")),
    };

    let status = response.status();
    if !status.is_success() {
        return FeedOutcome::Failed(format!("HTTP {status}"));
    }

    match response.json::<Value>() {
        Ok(value) => FeedOutcome::Fetched(value),
        Err(e) if e.is_timeout() => FeedOutcome::TimedOut,
        Err(e) => FeedOutcome::Failed(format!("failed to read body: {e}")),
    }
}
