//! System builder: turns a dataset into a fully populated registry.
//!
//! The rebuild is all-or-nothing: every body is staged and validated before
//! the registry is touched, so the scene is either the complete new system
//! or (on a rejected dataset) empty. Never half-populated.

use glam::Vec3;

use crate::api::dataset::{BeltConfig, BodyDescriptor, Dataset};
use crate::components::body::{Body, BodyKind};
use crate::components::visuals::{BodyColor, Visuals};
use crate::core::registry::Registry;
use crate::core::rng::Rng;
use crate::error::{EngineError, EngineResult};
use crate::systems::orbit;

/// Id of the implicit central star. Datasets list planets only; the star
/// is always present.
pub const STAR_ID: &str = "sun";

const STAR_RADIUS: f32 = 4.0;
const STAR_COLOR: BodyColor = BodyColor { r: 1.0, g: 0.9, b: 0.5 };
const STAR_EMISSIVE: f32 = 3.5;
const STAR_SHININESS: f32 = 8.0;

const GUIDE_COLOR: BodyColor = BodyColor { r: 0.35, g: 0.35, b: 0.4 };
/// Ring discs render wider than their planet.
const RING_RADIUS_FACTOR: f32 = 2.2;
const RING_ALPHA_TINT: f32 = 0.85;

const HAZARD_COLOR: BodyColor = BodyColor { r: 0.9, g: 0.3, b: 0.2 };

/// Rebuild the registry from `dataset`.
///
/// On success the registry holds exactly the new system. On a validation
/// failure it is left cleared and the error describes the offending
/// descriptor.
pub fn build(
    registry: &mut Registry,
    dataset: &Dataset,
    rng: &mut Rng,
    orbit_samples: usize,
) -> EngineResult<()> {
    let staged = match stage(dataset, rng, orbit_samples) {
        Ok(staged) => staged,
        Err(err) => {
            registry.clear();
            return Err(err);
        }
    };

    registry.clear();
    let count = staged.len();
    for body in staged {
        registry.upsert(body);
    }
    log::debug!("system rebuilt: {count} bodies from {} descriptors", dataset.bodies.len());
    Ok(())
}

/// Validate and assemble the full body list without touching the registry.
fn stage(dataset: &Dataset, rng: &mut Rng, orbit_samples: usize) -> EngineResult<Vec<Body>> {
    let mut staged: Vec<Body> = Vec::with_capacity(dataset.bodies.len() * 3 + 1);
    staged.push(star());

    for desc in &dataset.bodies {
        if staged.iter().any(|b| b.id == desc.name) {
            return Err(EngineError::invalid_dataset(
                &desc.name,
                "duplicate or reserved body name",
            ));
        }

        let planet = planet_body(desc, rng)?;
        let radius = planet.orbital_radius;
        let planet_pos = planet.position;
        staged.push(planet);

        if radius > 0.0 {
            let path = orbit::orbit_path(radius, orbit_samples)?;
            staged.push(
                Body::new(format!("{}:orbit", desc.name), BodyKind::OrbitGuide)
                    .with_path(path)
                    .with_visuals(Visuals::new(0.0, GUIDE_COLOR)),
            );
        }

        // Rings are inserted after their parent so the stepper sees the
        // parent's position already updated when it mirrors.
        if desc.has_ring {
            staged.push(ring_body(desc, planet_pos));
        }
    }

    if let Some(belt) = &dataset.asteroid_belt {
        stage_belt(&mut staged, belt, rng)?;
    }

    Ok(staged)
}

fn star() -> Body {
    Body::new(STAR_ID, BodyKind::Star).with_visuals(
        Visuals::new(STAR_RADIUS, STAR_COLOR)
            .with_emissive(STAR_EMISSIVE)
            .with_shininess(STAR_SHININESS),
    )
}

fn planet_body(desc: &BodyDescriptor, rng: &mut Rng) -> EngineResult<Body> {
    let radius = desc
        .orbital_radius
        .ok_or_else(|| EngineError::invalid_dataset(&desc.name, "missing orbital radius"))?;
    if !radius.is_finite() || radius < 0.0 {
        return Err(EngineError::invalid_dataset(
            &desc.name,
            format!("orbital radius {radius} must be finite and non-negative"),
        ));
    }
    if !desc.angular_speed.is_finite() {
        return Err(EngineError::invalid_dataset(
            &desc.name,
            "angular speed must be finite",
        ));
    }

    let color = desc
        .color
        .map(|[r, g, b]| BodyColor::new(r, g, b))
        .unwrap_or_default();
    let label = desc.display_name.clone().unwrap_or_else(|| desc.name.clone());

    let body = Body::new(desc.name.clone(), BodyKind::Planet)
        .with_label(label)
        .with_visuals(Visuals::new(desc.radius, color));

    // An explicit feed position seeds the starting phase and height;
    // otherwise the phase is random in [0, 2π).
    Ok(match desc.position {
        Some([x, y, z]) => body
            .with_height(y)
            .with_orbit(radius, desc.angular_speed, z.atan2(x)),
        None => body.with_orbit(radius, desc.angular_speed, rng.angle()),
    })
}

fn ring_body(desc: &BodyDescriptor, parent_pos: Vec3) -> Body {
    let color = desc
        .color
        .map(|[r, g, b]| BodyColor::new(r * RING_ALPHA_TINT, g * RING_ALPHA_TINT, b * RING_ALPHA_TINT))
        .unwrap_or_default();
    Body::new(format!("{}:ring", desc.name), BodyKind::Ring)
        .with_parent(desc.name.clone())
        .with_position(parent_pos)
        .with_visuals(Visuals::new(desc.radius * RING_RADIUS_FACTOR, color))
}

fn stage_belt(staged: &mut Vec<Body>, belt: &BeltConfig, rng: &mut Rng) -> EngineResult<()> {
    if belt.inner_radius <= 0.0 || belt.outer_radius < belt.inner_radius {
        return Err(EngineError::invalid_dataset(
            "asteroid_belt",
            format!(
                "band [{}, {}] must be positive and ordered",
                belt.inner_radius, belt.outer_radius
            ),
        ));
    }
    if belt.max_speed < belt.min_speed {
        return Err(EngineError::invalid_dataset(
            "asteroid_belt",
            "max speed below min speed",
        ));
    }

    staged.reserve(belt.count);
    for i in 0..belt.count {
        let radius = rng.range(belt.inner_radius, belt.outer_radius);
        let speed = rng.range(belt.min_speed, belt.max_speed);
        let height = rng.range(-belt.y_jitter, belt.y_jitter);
        let hazard = rng.chance(belt.hazard_chance);

        let grey = rng.range(0.3, 0.6);
        // Hazard changes the draw only; orbit parameters are sampled the
        // same way either path.
        let color = if hazard {
            HAZARD_COLOR
        } else {
            BodyColor::new(grey, grey * 0.95, grey * 0.9)
        };
        let size = rng.range(0.2, 0.5);

        staged.push(
            Body::new(format!("asteroid:{i}"), BodyKind::AsteroidBelt)
                .with_visuals(Visuals::new(size, color).with_shininess(8.0).with_hazard(hazard))
                .with_height(height)
                .with_orbit(radius, speed, rng.angle()),
        );
    }
    Ok(())
}
