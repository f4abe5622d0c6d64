use serde::{Deserialize, Serialize};

/// A named collection of body descriptors used to (re)build the registry.
/// Sourced from the fixed local table or an external feed; loaded from JSON
/// at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    /// Planet descriptors, in presentation order.
    pub bodies: Vec<BodyDescriptor>,
    /// Optional asteroid belt parameters.
    #[serde(default)]
    pub asteroid_belt: Option<BeltConfig>,
}

impl Dataset {
    /// An empty dataset. Building from it yields only the central star.
    pub fn empty() -> Self {
        Self {
            bodies: Vec::new(),
            asteroid_belt: None,
        }
    }

    /// Parse a dataset from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Describes one planet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyDescriptor {
    /// Stable key; becomes the body id.
    pub name: String,
    /// Human-readable name for UI panels (defaults to `name`).
    #[serde(default)]
    pub display_name: Option<String>,
    /// Rendered radius in scene units.
    pub radius: f32,
    /// Distance from the origin. Required for a planet; validated by the
    /// builder rather than the parser so a bad feed row reports which body
    /// it came from.
    #[serde(default)]
    pub orbital_radius: Option<f32>,
    /// Radians per animation step.
    #[serde(default)]
    pub angular_speed: f32,
    /// Whether to attach a decorative ring.
    #[serde(default)]
    pub has_ring: bool,
    /// Explicit starting position. When present, the starting phase is
    /// derived from it and its height is kept.
    #[serde(default)]
    pub position: Option<[f32; 3]>,
    /// RGB color in [0, 1].
    #[serde(default)]
    pub color: Option<[f32; 3]>,
}

/// Asteroid belt parameters. Defaults: 50 rocks, 10% hazard markers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeltConfig {
    #[serde(default = "default_belt_count")]
    pub count: usize,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    #[serde(default = "default_hazard_chance")]
    pub hazard_chance: f32,
    /// Maximum vertical offset, sampled symmetrically per rock.
    #[serde(default = "default_y_jitter")]
    pub y_jitter: f32,
}

fn default_belt_count() -> usize {
    50
}

fn default_hazard_chance() -> f32 {
    0.1
}

fn default_y_jitter() -> f32 {
    1.2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_dataset() {
        let json = r#"{
            "bodies": [
                { "name": "earth", "radius": 1.2, "orbital_radius": 16.0, "angular_speed": 0.01 }
            ]
        }"#;
        let dataset = Dataset::from_json(json).unwrap();
        assert_eq!(dataset.bodies.len(), 1);
        let earth = &dataset.bodies[0];
        assert_eq!(earth.name, "earth");
        assert_eq!(earth.orbital_radius, Some(16.0));
        assert!(!earth.has_ring);
        assert!(dataset.asteroid_belt.is_none());
    }

    #[test]
    fn parse_belt_defaults() {
        let json = r#"{
            "bodies": [],
            "asteroid_belt": {
                "inner_radius": 24.0,
                "outer_radius": 32.0,
                "min_speed": 0.004,
                "max_speed": 0.012
            }
        }"#;
        let dataset = Dataset::from_json(json).unwrap();
        let belt = dataset.asteroid_belt.unwrap();
        assert_eq!(belt.count, 50);
        assert!((belt.hazard_chance - 0.1).abs() < 1e-6);
    }

    #[test]
    fn missing_orbital_radius_still_parses() {
        // Validation is the builder's job; the parser stays permissive.
        let json = r#"{ "bodies": [ { "name": "mystery", "radius": 1.0 } ] }"#;
        let dataset = Dataset::from_json(json).unwrap();
        assert_eq!(dataset.bodies[0].orbital_radius, None);
    }
}
