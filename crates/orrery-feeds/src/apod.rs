//! NASA Astronomy Picture of the Day: direct JSON passthrough for the
//! "today in the sky" panel.

use std::time::Duration;

use serde_json::Value;
use url::Url;

use crate::fetch::{fetch_json, FeedOutcome};

pub const APOD_ENDPOINT: &str = "https://api.nasa.gov/planetary/apod";

/// Fetch today's APOD entry. The payload is returned exactly as the
/// service sent it; the panel layer picks the fields it wants.
pub fn fetch_apod(api_key: &str, deadline: Duration) -> FeedOutcome<Value> {
    let url = match Url::parse_with_params(APOD_ENDPOINT, &[("api_key", api_key)]) {
        Ok(url) => url,
        Err(e) => return FeedOutcome::Failed(format!("invalid URL: {e}")),
    };
    fetch_json(url.as_str(), deadline)
}

/// One-line panel text for an APOD payload.
pub fn panel_line(payload: &Value) -> String {
    let title = payload
        .get("title")
        .and_then(Value::as_str)
        .unwrap_or("(untitled)");
    let date = payload.get("date").and_then(Value::as_str).unwrap_or("?");
    format!("{date} — {title}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn panel_line_reads_title_and_date() {
        let payload = json!({ "date": "2026-08-05", "title": "The Crab Nebula" });
        assert_eq!(panel_line(&payload), "2026-08-05 — The Crab Nebula");
    }

    #[test]
    fn panel_line_survives_missing_fields() {
        let payload = json!({});
        assert_eq!(panel_line(&payload), "? — (untitled)");
    }
}
