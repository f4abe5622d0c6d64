use glam::Vec3;

/// Named camera presets for the page's section views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKey {
    /// Whole system from above and behind.
    OverviewSystem,
    /// Close pass over the decorative torus section.
    FractalTorus,
    /// Near Earth's orbit, low over the plane.
    EarthOrbit,
    /// Hovering over the asteroid band.
    AsteroidField,
    /// Far pull-back for the exoplanet panels.
    Exoplanets,
}

impl ViewKey {
    /// Parse a view name as used by the page anchors. Unknown names give
    /// `None`; callers treat that as a no-op rather than an error.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "overview" => Some(Self::OverviewSystem),
            "fractal-torus" => Some(Self::FractalTorus),
            "earth-orbit" => Some(Self::EarthOrbit),
            "asteroid-field" => Some(Self::AsteroidField),
            "exoplanets" => Some(Self::Exoplanets),
            _ => None,
        }
    }

    /// Fixed eye position for this view.
    fn eye(self) -> Vec3 {
        match self {
            Self::OverviewSystem => Vec3::new(0.0, 60.0, 140.0),
            Self::FractalTorus => Vec3::new(24.0, 18.0, 36.0),
            Self::EarthOrbit => Vec3::new(16.0, 6.0, 22.0),
            Self::AsteroidField => Vec3::new(0.0, 34.0, 58.0),
            Self::Exoplanets => Vec3::new(90.0, 48.0, 180.0),
        }
    }
}

/// Free-floating look-at camera. The simulation only ever moves it through
/// view presets; the registry is untouched by camera changes.
pub struct Camera {
    /// Eye position in world space.
    pub position: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            position: ViewKey::OverviewSystem.eye(),
            target: Vec3::ZERO,
        }
    }

    /// Jump to a named preset.
    pub fn apply_view(&mut self, key: ViewKey) {
        self.position = key.eye();
        self.target = Vec3::ZERO;
    }

    /// Jump to a preset by page-anchor name. Unknown names do nothing.
    pub fn apply_view_by_name(&mut self, name: &str) {
        if let Some(key) = ViewKey::from_name(name) {
            self.apply_view(key);
        }
    }

    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_view_moves_the_eye() {
        let mut camera = Camera::new();
        camera.apply_view(ViewKey::AsteroidField);
        assert_eq!(camera.position, Vec3::new(0.0, 34.0, 58.0));
        assert_eq!(camera.target, Vec3::ZERO);
    }

    #[test]
    fn unknown_view_name_is_a_no_op() {
        let mut camera = Camera::new();
        camera.apply_view(ViewKey::EarthOrbit);
        let before = camera.position;
        camera.apply_view_by_name("kuiper-belt");
        assert_eq!(camera.position, before);
    }

    #[test]
    fn known_view_names_parse() {
        assert_eq!(ViewKey::from_name("overview"), Some(ViewKey::OverviewSystem));
        assert_eq!(ViewKey::from_name("fractal-torus"), Some(ViewKey::FractalTorus));
        assert_eq!(ViewKey::from_name("earth-orbit"), Some(ViewKey::EarthOrbit));
        assert_eq!(ViewKey::from_name("asteroid-field"), Some(ViewKey::AsteroidField));
        assert_eq!(ViewKey::from_name("exoplanets"), Some(ViewKey::Exoplanets));
    }

    #[test]
    fn look_at_only_moves_the_target() {
        let mut camera = Camera::new();
        let eye = camera.position;
        camera.look_at(Vec3::new(8.0, 0.0, 0.0));
        assert_eq!(camera.position, eye);
        assert_eq!(camera.target, Vec3::new(8.0, 0.0, 0.0));
    }
}
