//! NASA Near-Earth Object feed: direct JSON passthrough for the
//! "objects near us this week" panel.

use std::time::Duration;

use serde_json::Value;
use url::Url;

use crate::fetch::{fetch_json, FeedOutcome};

pub const NEO_ENDPOINT: &str = "https://api.nasa.gov/neo/rest/v1/feed";

/// Fetch the current NEO feed page, untouched.
pub fn fetch_neo(api_key: &str, deadline: Duration) -> FeedOutcome<Value> {
    let url = match Url::parse_with_params(NEO_ENDPOINT, &[("api_key", api_key)]) {
        Ok(url) => url,
        Err(e) => return FeedOutcome::Failed(format!("invalid URL: {e}")),
    };
    fetch_json(url.as_str(), deadline)
}

/// Number of objects the feed reports, straight from `element_count`.
pub fn element_count(payload: &Value) -> u64 {
    payload
        .get("element_count")
        .and_then(Value::as_u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn element_count_is_passed_through() {
        let payload = json!({ "element_count": 17 });
        assert_eq!(element_count(&payload), 17);
    }

    #[test]
    fn missing_count_reads_zero() {
        assert_eq!(element_count(&json!({})), 0);
    }
}
