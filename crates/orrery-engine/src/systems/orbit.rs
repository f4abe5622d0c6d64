//! Orbit path generator. Pure math, no scene dependencies.

use std::f32::consts::TAU;

use glam::Vec3;

use crate::error::{EngineError, EngineResult};

/// Minimum number of samples for a closed path.
pub const MIN_SAMPLES: usize = 3;

/// Sample a closed circular path of `samples` segments at `radius` in the
/// orbital (XZ) plane. Returns `samples + 1` points; the last point is a
/// verbatim copy of the first so consumers get an exactly closed loop.
///
/// Deterministic and side-effect free. Rejects degenerate inputs with
/// `InvalidArgument`.
pub fn orbit_path(radius: f32, samples: usize) -> EngineResult<Vec<Vec3>> {
    if samples < MIN_SAMPLES {
        return Err(EngineError::invalid_argument(format!(
            "orbit path needs at least {MIN_SAMPLES} samples, got {samples}"
        )));
    }
    if !radius.is_finite() || radius < 0.0 {
        return Err(EngineError::invalid_argument(format!(
            "orbit path radius must be finite and non-negative, got {radius}"
        )));
    }

    let mut points = Vec::with_capacity(samples + 1);
    for i in 0..samples {
        let theta = TAU * i as f32 / samples as f32;
        points.push(Vec3::new(radius * theta.cos(), 0.0, radius * theta.sin()));
    }
    points.push(points[0]);
    Ok(points)
}
