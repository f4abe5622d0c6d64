//! Mocked "ORIZON" ephemerides feed.
//!
//! Stands in for the real service the page could not reliably reach: a
//! canned JSON document shaped exactly like a live response, pushed through
//! the same parsing path a live feed would use. Positions are snapshot
//! state vectors, so planets enter the scene at ephemeris-like phases
//! instead of random ones.

use std::time::Duration;

use orrery_engine::Dataset;

use crate::fetch::FeedOutcome;

const MOCK_PAYLOAD: &str = r#"{
    "bodies": [
        { "name": "mercury", "display_name": "Mercury", "radius": 0.5,
          "orbital_radius": 6.0, "angular_speed": 0.040,
          "position": [4.1, 0.0, -4.38], "color": [0.60, 0.55, 0.50] },
        { "name": "venus", "display_name": "Venus", "radius": 0.9,
          "orbital_radius": 8.5, "angular_speed": 0.030,
          "position": [-7.9, 0.0, 3.14], "color": [0.90, 0.75, 0.40] },
        { "name": "earth", "display_name": "Earth", "radius": 1.0,
          "orbital_radius": 11.0, "angular_speed": 0.024,
          "position": [0.6, 0.0, 10.98], "color": [0.20, 0.40, 0.80] },
        { "name": "mars", "display_name": "Mars", "radius": 0.7,
          "orbital_radius": 14.0, "angular_speed": 0.019,
          "position": [-11.3, 0.0, -8.26], "color": [0.80, 0.30, 0.15] },
        { "name": "jupiter", "display_name": "Jupiter", "radius": 2.6,
          "orbital_radius": 24.0, "angular_speed": 0.011,
          "position": [20.9, 0.0, 11.8], "color": [0.80, 0.70, 0.50] },
        { "name": "saturn", "display_name": "Saturn", "radius": 2.2,
          "orbital_radius": 30.0, "angular_speed": 0.008, "has_ring": true,
          "position": [-29.2, 0.0, 6.9], "color": [0.85, 0.75, 0.50] }
    ],
    "asteroid_belt": {
        "inner_radius": 16.5,
        "outer_radius": 20.5,
        "min_speed": 0.004,
        "max_speed": 0.012
    }
}"#;

/// "Fetch" the mocked dataset. The deadline is accepted for interface
/// parity with the live feeds; the mock always answers immediately.
pub fn fetch_mock(_deadline: Duration) -> FeedOutcome<Dataset> {
    match Dataset::from_json(MOCK_PAYLOAD) {
        Ok(dataset) => FeedOutcome::Fetched(dataset),
        Err(e) => FeedOutcome::Failed(format!("mock payload unreadable: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_payload_parses() {
        match fetch_mock(Duration::from_secs(5)) {
            FeedOutcome::Fetched(dataset) => {
                assert_eq!(dataset.bodies.len(), 6);
                assert!(dataset.asteroid_belt.is_some());
                let saturn = dataset.bodies.iter().find(|b| b.name == "saturn").unwrap();
                assert!(saturn.has_ring);
                assert!(saturn.position.is_some());
            }
            other => panic!("expected Fetched, got {other:?}"),
        }
    }

    #[test]
    fn mock_positions_sit_on_their_orbits() {
        let FeedOutcome::Fetched(dataset) = fetch_mock(Duration::from_secs(5)) else {
            panic!("mock must parse");
        };
        for body in &dataset.bodies {
            let [x, _, z] = body.position.unwrap();
            let r = (x * x + z * z).sqrt();
            let want = body.orbital_radius.unwrap();
            assert!(
                (r - want).abs() < 0.15,
                "{}: snapshot radius {r} vs orbit {want}",
                body.name
            );
        }
    }
}
