//! Animation stepper: advances every orbiting body by one step.

use crate::components::body::BodyKind;
use crate::core::registry::Registry;

/// Advance the system by one animation step, in registry order.
///
/// Planets and belt asteroids get `angle += angular_speed` and an exact
/// re-derivation of `x`/`z` from `(orbital_radius, angle)`, so the radius
/// never drifts; `y` is left alone. Rings copy their parent planet's
/// position, which the builder guarantees was updated earlier in the same
/// pass. Stars and orbit guides are never mutated.
///
/// Pure in-memory mutation, no I/O. Speed is radians per call, so the
/// perceived rate follows whatever clock drives this.
pub fn step(registry: &mut Registry) {
    let bodies = registry.bodies_mut();
    for i in 0..bodies.len() {
        if bodies[i].kind.orbits() {
            let body = &mut bodies[i];
            body.angle += body.angular_speed;
            body.position.x = body.orbital_radius * body.angle.cos();
            body.position.z = body.orbital_radius * body.angle.sin();
            continue;
        }

        if bodies[i].kind == BodyKind::Ring {
            // Weak back-reference: resolve the parent by id each step.
            // Parents precede rings, so the prefix search finds the
            // already-updated position.
            let parent_pos = match &bodies[i].parent {
                Some(pid) => bodies[..i].iter().find(|b| b.id == *pid).map(|b| b.position),
                None => None,
            };
            if let Some(pos) = parent_pos {
                bodies[i].position = pos;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::body::Body;
    use glam::Vec3;
    use std::f32::consts::TAU;

    #[test]
    fn angle_advances_linearly() {
        let mut registry = Registry::new();
        registry.upsert(Body::new("earth", BodyKind::Planet).with_orbit(8.0, 0.02, 1.0));

        for _ in 0..250 {
            step(&mut registry);
        }

        let earth = registry.get("earth").unwrap();
        let expected = (1.0 + 250.0 * 0.02) % TAU;
        assert!((earth.angle.rem_euclid(TAU) - expected).abs() < 1e-3);
    }

    #[test]
    fn radius_never_drifts() {
        let mut registry = Registry::new();
        registry.upsert(Body::new("earth", BodyKind::Planet).with_orbit(8.0, 0.02, 0.3));
        registry.upsert(Body::new("rock", BodyKind::AsteroidBelt).with_orbit(27.5, 0.007, 4.2));

        for _ in 0..1000 {
            step(&mut registry);
            for body in registry.iter().filter(|b| b.kind.orbits()) {
                let r2 = body.position.x.powi(2) + body.position.z.powi(2);
                let want = body.orbital_radius.powi(2);
                assert!(
                    (r2 - want).abs() < want * 1e-4 + 1e-4,
                    "{}: r² drifted to {r2}",
                    body.id
                );
            }
        }
    }

    #[test]
    fn height_is_never_touched() {
        let mut registry = Registry::new();
        registry.upsert(
            Body::new("rock", BodyKind::AsteroidBelt)
                .with_height(1.1)
                .with_orbit(26.0, 0.01, 0.0),
        );
        for _ in 0..100 {
            step(&mut registry);
        }
        assert!((registry.get("rock").unwrap().position.y - 1.1).abs() < 1e-6);
    }

    #[test]
    fn ring_mirrors_parent_every_step() {
        let mut registry = Registry::new();
        registry.upsert(Body::new("saturn", BodyKind::Planet).with_orbit(30.0, 0.01, 0.0));
        registry.upsert(
            Body::new("saturn:ring", BodyKind::Ring)
                .with_parent("saturn")
                .with_position(Vec3::new(30.0, 0.0, 0.0)),
        );

        for _ in 0..50 {
            step(&mut registry);
            let parent = registry.get("saturn").unwrap().position;
            let ring = registry.get("saturn:ring").unwrap().position;
            assert_eq!(parent, ring);
        }
    }

    #[test]
    fn orphaned_ring_stays_put() {
        let mut registry = Registry::new();
        registry.upsert(
            Body::new("ghost:ring", BodyKind::Ring)
                .with_parent("ghost")
                .with_position(Vec3::new(5.0, 0.0, 0.0)),
        );
        step(&mut registry);
        assert_eq!(
            registry.get("ghost:ring").unwrap().position,
            Vec3::new(5.0, 0.0, 0.0)
        );
    }

    #[test]
    fn static_bodies_are_untouched() {
        let mut registry = Registry::new();
        registry.upsert(Body::new("sun", BodyKind::Star));
        registry.upsert(
            Body::new("earth:orbit", BodyKind::OrbitGuide).with_position(Vec3::new(1.0, 2.0, 3.0)),
        );

        for _ in 0..10 {
            step(&mut registry);
        }

        assert_eq!(registry.get("sun").unwrap().position, Vec3::ZERO);
        assert_eq!(registry.get("sun").unwrap().angle, 0.0);
        assert_eq!(
            registry.get("earth:orbit").unwrap().position,
            Vec3::new(1.0, 2.0, 3.0)
        );
    }
}
