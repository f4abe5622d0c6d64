pub mod apod;
pub mod fetch;
pub mod horizon;
pub mod local;
pub mod neo;
pub mod status;
pub mod stellarium;
pub mod worker;

pub use fetch::{fetch_json, FeedOutcome};
pub use local::fallback_dataset;
pub use status::{FeedStatus, StatusCell};
pub use worker::{spawn_dataset_feed, FeedHandle};
