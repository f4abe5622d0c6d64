//! Fixed local fallback table: the system the page shows when every feed
//! is offline. Visual sizes and spacing are exaggerated for readability
//! (to-scale planets would be sub-pixel).

use orrery_engine::{BeltConfig, BodyDescriptor, Dataset};

struct PlanetRow {
    name: &'static str,
    display: &'static str,
    radius: f32,
    orbital_radius: f32,
    angular_speed: f32,
    has_ring: bool,
    color: [f32; 3],
}

const PLANETS: [PlanetRow; 8] = [
    PlanetRow { name: "mercury", display: "Mercury", radius: 0.5,  orbital_radius: 6.0,  angular_speed: 0.040, has_ring: false, color: [0.60, 0.55, 0.50] },
    PlanetRow { name: "venus",   display: "Venus",   radius: 0.9,  orbital_radius: 8.5,  angular_speed: 0.030, has_ring: false, color: [0.90, 0.75, 0.40] },
    PlanetRow { name: "earth",   display: "Earth",   radius: 1.0,  orbital_radius: 11.0, angular_speed: 0.024, has_ring: false, color: [0.20, 0.40, 0.80] },
    PlanetRow { name: "mars",    display: "Mars",    radius: 0.7,  orbital_radius: 14.0, angular_speed: 0.019, has_ring: false, color: [0.80, 0.30, 0.15] },
    PlanetRow { name: "jupiter", display: "Jupiter", radius: 2.6,  orbital_radius: 24.0, angular_speed: 0.011, has_ring: false, color: [0.80, 0.70, 0.50] },
    PlanetRow { name: "saturn",  display: "Saturn",  radius: 2.2,  orbital_radius: 30.0, angular_speed: 0.008, has_ring: true,  color: [0.85, 0.75, 0.50] },
    PlanetRow { name: "uranus",  display: "Uranus",  radius: 1.6,  orbital_radius: 36.0, angular_speed: 0.006, has_ring: false, color: [0.50, 0.75, 0.85] },
    PlanetRow { name: "neptune", display: "Neptune", radius: 1.55, orbital_radius: 41.0, angular_speed: 0.005, has_ring: false, color: [0.25, 0.35, 0.80] },
];

/// The main belt sits between Mars and Jupiter.
const BELT: BeltConfig = BeltConfig {
    count: 50,
    inner_radius: 16.5,
    outer_radius: 20.5,
    min_speed: 0.004,
    max_speed: 0.012,
    hazard_chance: 0.1,
    y_jitter: 1.2,
};

/// Build the hand-authored fallback dataset.
pub fn fallback_dataset() -> Dataset {
    Dataset {
        bodies: PLANETS
            .iter()
            .map(|row| BodyDescriptor {
                name: row.name.to_string(),
                display_name: Some(row.display.to_string()),
                radius: row.radius,
                orbital_radius: Some(row.orbital_radius),
                angular_speed: row.angular_speed,
                has_ring: row.has_ring,
                position: None,
                color: Some(row.color),
            })
            .collect(),
        asteroid_belt: Some(BELT.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_engine::{Registry, Rng, SimConfig};

    #[test]
    fn table_has_the_eight_planets() {
        let dataset = fallback_dataset();
        assert_eq!(dataset.bodies.len(), 8);
        assert!(dataset.asteroid_belt.is_some());
    }

    #[test]
    fn saturn_is_the_only_ringed_planet() {
        let dataset = fallback_dataset();
        let ringed: Vec<&str> = dataset
            .bodies
            .iter()
            .filter(|b| b.has_ring)
            .map(|b| b.name.as_str())
            .collect();
        assert_eq!(ringed, vec!["saturn"]);
    }

    #[test]
    fn orbits_are_ordered_outward() {
        let dataset = fallback_dataset();
        let radii: Vec<f32> = dataset
            .bodies
            .iter()
            .map(|b| b.orbital_radius.unwrap())
            .collect();
        assert!(radii.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn fallback_builds_cleanly() {
        let config = SimConfig::default();
        let mut registry = Registry::new();
        let mut rng = Rng::new(config.seed);
        orrery_engine::build(&mut registry, &fallback_dataset(), &mut rng, config.orbit_samples)
            .unwrap();
        // 1 star + 8 planets + 8 guides + 1 ring + 50 asteroids
        assert_eq!(registry.len(), 68);
    }
}
