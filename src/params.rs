//! Physical and grid constants, the stability bound and the recurrence coefficients.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{WaveError, WaveResult};

/// Smallest admissible number of nodes per axis.
pub const MIN_GRID_COUNTS: usize = 4;

/// Upper bound on the time step for which the explicit scheme does not grow.
///
/// `dt_max = (μ + sqrt(μ² + 32 (c/h)²)) / (8 (c/h)²)`
///
/// - `grid_interval`: space step `h`
/// - `phase_velocity`: `c`
/// - `viscosity`: `μ`
///
/// The result is `NaN` when both `c` and `μ` vanish, so no time step passes
/// the `time_step < dt_max` test in that case.
pub fn stability_limit(grid_interval: f64, phase_velocity: f64, viscosity: f64) -> f64 {
    let k2 = (phase_velocity / grid_interval).powi(2);
    (viscosity + (viscosity * viscosity + 32. * k2).sqrt()) / (8. * k2)
}

/// Constants of the damped wave problem on an `N × N` grid.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WaveParameters {
    /// Nodes per axis, `N`.
    pub grid_counts: usize,
    /// Space step `h`.
    pub grid_interval: f64,
    /// Phase velocity `c`.
    pub phase_velocity: f64,
    /// Viscosity `μ`.
    pub viscosity: f64,
    /// Time step `dt`.
    pub time_step: f64,
}

impl WaveParameters {
    pub fn stability_limit(&self) -> f64 {
        stability_limit(self.grid_interval, self.phase_velocity, self.viscosity)
    }

    /// Checks everything except the shape of the initial field.
    pub fn validate(&self) -> WaveResult<()> {
        if self.grid_counts < MIN_GRID_COUNTS {
            return Err(WaveError::invalid("grid_counts",
                                          format!("{} is out of range (at least {} required)",
                                                  self.grid_counts,
                                                  MIN_GRID_COUNTS)));
        }
        if !(self.grid_interval > 0.) {
            return Err(WaveError::invalid("grid_interval",
                                          format!("{} is out of range (must be positive)",
                                                  self.grid_interval)));
        }
        let dt_max = self.stability_limit();
        if !(self.time_step < dt_max) {
            return Err(WaveError::invalid("time_step",
                                          format!("{} is too large (stability limit {})",
                                                  self.time_step,
                                                  dt_max)));
        }
        Ok(())
    }
}

/// Coefficients of the three level recurrence
///
/// `w = c1 v + c2 u + c3 (sum of the four neighbours of v)`
///
/// where `u`, `v`, `w` are the fields at steps `n - 1`, `n`, `n + 1`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Coefficients {
    pub c1: f64,
    pub c2: f64,
    pub c3: f64,
}

impl Coefficients {
    pub fn new(params: &WaveParameters) -> Self {
        let WaveParameters { grid_interval: h, phase_velocity: c, viscosity: mu, time_step: dt, .. } =
            *params;
        let r2 = (c * dt / h).powi(2);
        let denom = mu * dt + 2.;
        Coefficients {
            c1: 4. * (1. - 2. * r2) / denom,
            c2: (mu * dt - 2.) / denom,
            c3: 2. * r2 / denom,
        }
    }
}
