use glam::Vec3;

use crate::components::visuals::Visuals;

/// Variant tag deciding whether a body participates in orbital motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    /// The central star. Static at the origin.
    Star,
    /// A planet on a circular orbit around the origin.
    Planet,
    /// A decorative ring mirroring its parent planet's position.
    Ring,
    /// One member of the asteroid belt. Moves like a planet.
    AsteroidBelt,
    /// A static closed polyline marking a planet's orbit.
    OrbitGuide,
}

impl BodyKind {
    /// Whether the stepper advances this body's orbital angle.
    pub fn orbits(self) -> bool {
        matches!(self, BodyKind::Planet | BodyKind::AsteroidBelt)
    }

    /// Numeric code for the render snapshot protocol.
    pub fn render_code(self) -> f32 {
        match self {
            BodyKind::Star => 0.0,
            BodyKind::Planet => 1.0,
            BodyKind::Ring => 2.0,
            BodyKind::AsteroidBelt => 3.0,
            BodyKind::OrbitGuide => 4.0,
        }
    }
}

/// Fat body record: a single struct with optional per-kind extras.
/// Plain data, no subclass hierarchy: `kind` is the variant tag.
#[derive(Debug, Clone)]
pub struct Body {
    /// Unique identifier, stable for the body's lifetime.
    pub id: String,
    /// Display name for UI panels.
    pub label: String,
    pub kind: BodyKind,
    /// Distance from the origin in the orbital plane. 0 for the star.
    pub orbital_radius: f32,
    /// Radians added per animation step. 0 for static bodies.
    pub angular_speed: f32,
    /// Current orbital phase. Grows unbounded; positions only depend on it
    /// mod 2π.
    pub angle: f32,
    /// Derived world position. `y` is constant per body and never updated
    /// by the stepper.
    pub position: Vec3,
    /// Ring bodies hold their parent planet's id, resolved by lookup each
    /// step rather than a stored reference, so rebuilds can replace the
    /// parent freely.
    pub parent: Option<String>,
    /// Orbit guides carry their closed polyline.
    pub path: Option<Vec<Vec3>>,
    pub visuals: Visuals,
}

impl Body {
    /// Create a new body at the origin.
    pub fn new(id: impl Into<String>, kind: BodyKind) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
            kind,
            orbital_radius: 0.0,
            angular_speed: 0.0,
            angle: 0.0,
            position: Vec3::ZERO,
            parent: None,
            path: None,
            visuals: Visuals::default(),
        }
    }

    // -- Builder pattern --

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set orbital radius and speed, and derive the position for the given
    /// starting phase.
    pub fn with_orbit(mut self, radius: f32, speed: f32, angle: f32) -> Self {
        self.orbital_radius = radius;
        self.angular_speed = speed;
        self.angle = angle;
        self.position = Vec3::new(radius * angle.cos(), self.position.y, radius * angle.sin());
        self
    }

    /// Set the constant vertical offset (asteroid jitter), re-deriving the
    /// position.
    pub fn with_height(mut self, y: f32) -> Self {
        self.position.y = y;
        self
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_path(mut self, path: Vec<Vec3>) -> Self {
        self.path = Some(path);
        self
    }

    pub fn with_visuals(mut self, visuals: Visuals) -> Self {
        self.visuals = visuals;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_orbit_derives_position() {
        let body = Body::new("earth", BodyKind::Planet).with_orbit(10.0, 0.01, 0.0);
        assert!((body.position.x - 10.0).abs() < 1e-6);
        assert!(body.position.z.abs() < 1e-6);
    }

    #[test]
    fn with_height_survives_with_orbit() {
        let body = Body::new("rock", BodyKind::AsteroidBelt)
            .with_height(1.5)
            .with_orbit(28.0, 0.005, 1.0);
        assert!((body.position.y - 1.5).abs() < 1e-6);
    }

    #[test]
    fn label_defaults_to_id() {
        let body = Body::new("venus", BodyKind::Planet);
        assert_eq!(body.label, "venus");
    }

    #[test]
    fn kind_orbits() {
        assert!(BodyKind::Planet.orbits());
        assert!(BodyKind::AsteroidBelt.orbits());
        assert!(!BodyKind::Star.orbits());
        assert!(!BodyKind::Ring.orbits());
        assert!(!BodyKind::OrbitGuide.orbits());
    }
}
