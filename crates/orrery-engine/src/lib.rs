pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod error;

// Re-export key types at crate root for convenience
pub use crate::api::dataset::{BeltConfig, BodyDescriptor, Dataset};
pub use crate::api::sim::{SimConfig, Simulation};
pub use crate::components::body::{Body, BodyKind};
pub use crate::components::visuals::{BodyColor, Visuals};
pub use crate::core::registry::Registry;
pub use crate::core::rng::Rng;
pub use crate::core::time::FrameClock;
pub use crate::error::{EngineError, EngineResult};
pub use crate::renderer::camera::{Camera, ViewKey};
pub use crate::renderer::instance::{GuidePath, RenderBuffer, RenderInstance};
pub use crate::systems::builder::{build, STAR_ID};
pub use crate::systems::orbit::orbit_path;
pub use crate::systems::render::build_render_buffer;
pub use crate::systems::stepper::step;
