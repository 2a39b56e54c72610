//! Finite difference method for the damped wave equation with zero Dirichlet boundary data.
//!
//! Solves `z_tt + μ z_t = c² Δz` on an `N × N` grid with space step `h` by the explicit three
//! level scheme
//!
//! ```text
//! z[n+1] = c1 z[n] + c2 z[n-1] + c3 (sum of the four neighbours of z[n])
//! ```
//!
//! which is stable for `dt < (μ + sqrt(μ² + 32 (c/h)²)) / (8 (c/h)²)`.
//!
//! ```
//! use fdm_damped_wave::WaveFieldSolver;
//! use ndarray::Array2;
//!
//! let mut z0 = Array2::zeros((5, 5));
//! z0[(2, 2)] = 1.;
//! let mut solver = WaveFieldSolver::new(5, 1., z0.view(), 1., 0., 0.5).unwrap();
//! let frames = solver.batch_step(4).unwrap();
//! assert_eq!(frames.len(), 4);
//! assert_eq!(solver.elapsed_time(), 1.5);
//! ```
pub mod error;
pub mod kernel;
pub mod params;
pub mod solver;

pub use error::{WaveError, WaveResult};
pub use kernel::damped_wave_step;
pub use params::{stability_limit, Coefficients, WaveParameters, MIN_GRID_COUNTS};
pub use solver::{Snapshots, WaveFieldSolver};
