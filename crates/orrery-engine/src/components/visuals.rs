/// RGB color for a rendered body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl BodyColor {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

impl Default for BodyColor {
    fn default() -> Self {
        Self { r: 0.7, g: 0.7, b: 0.75 }
    }
}

/// Visual attributes of a body. Opaque to the simulation core: the builder
/// copies these through from the dataset and the stepper never touches them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visuals {
    /// Rendered radius in scene units.
    pub radius: f32,
    pub color: BodyColor,
    /// HDR glow multiplier (the sun is the only body that wants this).
    pub emissive: f32,
    /// Phong specular exponent.
    pub shininess: f32,
    /// Hazard marker for belt asteroids. Tints the draw, never the motion.
    pub hazard: bool,
}

impl Default for Visuals {
    fn default() -> Self {
        Self {
            radius: 1.0,
            color: BodyColor::default(),
            emissive: 0.0,
            shininess: 16.0,
            hazard: false,
        }
    }
}

impl Visuals {
    pub fn new(radius: f32, color: BodyColor) -> Self {
        Self {
            radius,
            color,
            ..Default::default()
        }
    }

    pub fn with_emissive(mut self, emissive: f32) -> Self {
        self.emissive = emissive;
        self
    }

    pub fn with_shininess(mut self, shininess: f32) -> Self {
        self.shininess = shininess;
        self
    }

    pub fn with_hazard(mut self, hazard: bool) -> Self {
        self.hazard = hazard;
        self
    }
}
