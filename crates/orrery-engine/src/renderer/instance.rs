use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Per-body render data handed to the external renderer each frame.
/// Fixed stride: 12 floats = 48 bytes, so the buffer can be read as a flat
/// float array by a renderer living across an FFI or worker boundary.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct RenderInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Rendered radius in scene units.
    pub radius: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    /// HDR glow multiplier.
    pub emissive: f32,
    /// Phong specular exponent.
    pub shininess: f32,
    /// Body kind code (see `BodyKind::render_code`).
    pub kind: f32,
    /// 1.0 for hazard-flagged asteroids.
    pub hazard: f32,
    pub _pad: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 12;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// A closed polyline for one orbit guide.
#[derive(Debug, Clone)]
pub struct GuidePath {
    pub points: Vec<Vec3>,
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// Snapshot of everything the renderer needs for one frame: sphere-like
/// bodies as instances, orbit guides as stroked paths. Rebuilt each frame
/// in registry order so draw order stays stable.
pub struct RenderBuffer {
    pub instances: Vec<RenderInstance>,
    pub guides: Vec<GuidePath>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(128),
            guides: Vec::with_capacity(16),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
        self.guides.clear();
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for flat-buffer reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_instance_is_12_floats() {
        assert_eq!(std::mem::size_of::<RenderInstance>(), 48);
        assert_eq!(RenderInstance::FLOATS, 12);
    }

    #[test]
    fn clear_resets_both_lists() {
        let mut buffer = RenderBuffer::new();
        buffer.instances.push(RenderInstance::default());
        buffer.guides.push(GuidePath {
            points: vec![Vec3::ZERO],
            r: 1.0,
            g: 1.0,
            b: 1.0,
        });
        buffer.clear();
        assert_eq!(buffer.instance_count(), 0);
        assert!(buffer.guides.is_empty());
    }
}
