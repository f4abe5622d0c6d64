use crossbeam_channel::{Receiver, TryRecvError};

use crate::api::dataset::Dataset;
use crate::core::registry::Registry;
use crate::core::rng::Rng;
use crate::error::EngineResult;
use crate::renderer::camera::{Camera, ViewKey};
use crate::renderer::instance::RenderBuffer;
use crate::systems::{builder, render, stepper};

/// Configuration for the simulation, provided by the host.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed. The same seed and dataset reproduce the same layout.
    pub seed: u64,
    /// Sample count for orbit guide polylines.
    pub orbit_samples: usize,
    /// Ticks per second for hosts driving the loop with a `FrameClock`.
    pub tick_hz: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            orbit_samples: 96,
            tick_hz: 60.0,
        }
    }
}

/// The explicitly constructed simulation context: registry, camera, seeded
/// RNG, and an optional attached dataset feed.
///
/// Single-writer by construction: a feed worker only ever hands datasets
/// over the channel, and `tick` performs the rebuild and the step
/// back-to-back on the owning thread, so no reader can observe a
/// half-rebuilt registry.
pub struct Simulation {
    pub registry: Registry,
    pub camera: Camera,
    rng: Rng,
    config: SimConfig,
    datasets: Option<Receiver<Dataset>>,
}

impl Simulation {
    pub fn new(config: SimConfig) -> Self {
        Self {
            registry: Registry::new(),
            camera: Camera::new(),
            rng: Rng::new(config.seed),
            config,
            datasets: None,
        }
    }

    /// Attach the receiving end of a dataset feed. A bounded(1) channel
    /// gives the single-slot handoff: at most one pending rebuild, applied
    /// at the start of the next tick.
    pub fn attach_feed(&mut self, datasets: Receiver<Dataset>) {
        self.datasets = Some(datasets);
    }

    /// Rebuild the scene from a dataset now. All-or-nothing: on a rejected
    /// dataset the registry is left empty and the error is returned.
    pub fn rebuild(&mut self, dataset: &Dataset) -> EngineResult<()> {
        builder::build(
            &mut self.registry,
            dataset,
            &mut self.rng,
            self.config.orbit_samples,
        )
    }

    /// Advance one step without looking at the feed.
    pub fn step(&mut self) {
        stepper::step(&mut self.registry);
    }

    /// One logical tick: apply at most one pending dataset, then step.
    ///
    /// A rejected dataset is logged and leaves the scene empty until the
    /// next one arrives; it never stops the loop.
    pub fn tick(&mut self) {
        if let Some(pending) = self.take_pending() {
            if let Err(err) = self.rebuild(&pending) {
                log::warn!("dataset rejected: {err}");
            }
        }
        self.step();
    }

    fn take_pending(&mut self) -> Option<Dataset> {
        let rx = self.datasets.as_ref()?;
        match rx.try_recv() {
            Ok(dataset) => Some(dataset),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                log::debug!("dataset feed closed");
                self.datasets = None;
                None
            }
        }
    }

    /// Snapshot the scene for the external renderer.
    pub fn snapshot(&self, buffer: &mut RenderBuffer) {
        render::build_render_buffer(&self.registry, buffer);
    }

    /// Move the camera to a named preset. Registry state is unaffected.
    pub fn apply_view(&mut self, key: ViewKey) {
        self.camera.apply_view(key);
    }
}
