//! Time stepping state machine around `damped_wave_step`.
use std::mem;

use log::{debug, trace, warn};
use ndarray::{Array1, Array2, Array3, ArrayView2, Axis};

use crate::error::{WaveError, WaveResult};
use crate::kernel::damped_wave_step;
use crate::params::{Coefficients, WaveParameters};

/// Explicit leapfrog solver of the damped wave equation on a square grid with fixed edges.
///
/// The solver owns three row-major buffers: the fields at the previous and the current step,
/// and a scratch buffer the next step is written into before the three are rotated. None of
/// them is ever handed out; every accessor returns a fresh copy.
#[derive(Debug, Clone)]
pub struct WaveFieldSolver {
    params: WaveParameters,
    coefficients: Coefficients,
    initial: Array2<f64>,
    previous: Vec<f64>,
    current: Vec<f64>,
    next: Vec<f64>,
    elapsed_time: f64,
    steps: u64,
}

impl WaveFieldSolver {
    /// Validates the parameters, precomputes the recurrence coefficients and resets the state
    /// to `initial_field`.
    ///
    /// Fails with `WaveError::InvalidParameter` if `grid_counts < 4`, `grid_interval <= 0`,
    /// `time_step` is not below the stability limit, or `initial_field` is not
    /// `grid_counts × grid_counts`.
    pub fn new(grid_counts: usize,
               grid_interval: f64,
               initial_field: ArrayView2<f64>,
               phase_velocity: f64,
               viscosity: f64,
               time_step: f64)
               -> WaveResult<Self> {
        let params = WaveParameters {
            grid_counts,
            grid_interval,
            phase_velocity,
            viscosity,
            time_step,
        };
        Self::with_parameters(params, initial_field)
    }

    pub fn with_parameters(params: WaveParameters, initial_field: ArrayView2<f64>) -> WaveResult<Self> {
        params.validate()?;
        let n = params.grid_counts;
        if initial_field.dim() != (n, n) {
            return Err(WaveError::invalid("initial_field",
                                          format!("invalid shape {:?}, expected {:?}",
                                                  initial_field.dim(),
                                                  (n, n))));
        }

        let coefficients = Coefficients::new(&params);
        debug!("wave solver: {:?}, stability limit {}, {:?}",
               params,
               params.stability_limit(),
               coefficients);
        if has_nonzero_edge(&initial_field) {
            warn!("initial field is non-zero on the boundary; the edge is cleared by the first step");
        }

        let mut solver = WaveFieldSolver {
            params,
            coefficients,
            initial: initial_field.to_owned(),
            previous: Vec::new(),
            current: Vec::new(),
            next: vec![0.; n * n],
            elapsed_time: 0.,
            steps: 0,
        };
        solver.reset();
        Ok(solver)
    }

    /// Restores the initial field on both time levels and sets the clock to `0`.
    pub fn reset(&mut self) {
        // `iter` walks in logical order whatever the memory layout of `initial`
        self.previous = self.initial.iter().cloned().collect();
        self.current = self.previous.clone();
        self.elapsed_time = 0.;
        self.steps = 0;
    }

    /// Advances the state by exactly one `time_step`.
    pub fn step(&mut self) {
        damped_wave_step(&self.previous,
                         &self.current,
                         &mut self.next,
                         self.params.grid_counts,
                         &self.coefficients);
        // previous <- current, current <- next, and the old previous becomes scratch
        mem::swap(&mut self.previous, &mut self.current);
        mem::swap(&mut self.current, &mut self.next);
        self.elapsed_time += self.params.time_step;
        self.steps += 1;
    }

    /// Records `n` frames: the state at call time followed by the states after each of `n - 1`
    /// further steps.
    ///
    /// Fails with `WaveError::InvalidParameter` for `n < 1`, before touching the state.
    pub fn batch_step(&mut self, n: usize) -> WaveResult<Snapshots> {
        if n < 1 {
            return Err(WaveError::invalid("n", "must be a positive integer"));
        }
        let g = self.params.grid_counts;
        trace!("batch of {} frames from t = {}", n, self.elapsed_time);

        let mut fields = Array3::zeros((n, g, g));
        let mut times = Array1::zeros(n);
        for (k, mut frame) in fields.axis_iter_mut(Axis(0)).enumerate() {
            if k > 0 {
                self.step();
            }
            for (dst, &src) in frame.iter_mut().zip(&self.current) {
                *dst = src;
            }
            times[k] = self.elapsed_time;
        }
        Ok(Snapshots { fields, times })
    }

    pub fn grid_counts(&self) -> usize {
        self.params.grid_counts
    }

    pub fn grid_interval(&self) -> f64 {
        self.params.grid_interval
    }

    pub fn phase_velocity(&self) -> f64 {
        self.params.phase_velocity
    }

    pub fn viscosity(&self) -> f64 {
        self.params.viscosity
    }

    pub fn time_step(&self) -> f64 {
        self.params.time_step
    }

    pub fn elapsed_time(&self) -> f64 {
        self.elapsed_time
    }

    /// Steps taken since construction or the last `reset`.
    pub fn step_count(&self) -> u64 {
        self.steps
    }

    pub fn parameters(&self) -> &WaveParameters {
        &self.params
    }

    pub fn coefficients(&self) -> Coefficients {
        self.coefficients
    }

    pub fn stability_limit(&self) -> f64 {
        self.params.stability_limit()
    }

    /// Copy of the field the solver was constructed with.
    pub fn initial_field(&self) -> Array2<f64> {
        self.initial.clone()
    }

    /// Copy of the field at `elapsed_time`.
    pub fn current_field(&self) -> Array2<f64> {
        let n = self.params.grid_counts;
        let current = &self.current;
        Array2::from_shape_fn((n, n), |(i, j)| current[i * n + j])
    }
}

fn has_nonzero_edge(z: &ArrayView2<f64>) -> bool {
    let (ny, nx) = z.dim();
    z.indexed_iter()
        .any(|((i, j), &x)| (i == 0 || j == 0 || i == ny - 1 || j == nx - 1) && x != 0.)
}

/// Frames recorded by `WaveFieldSolver::batch_step`.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshots {
    fields: Array3<f64>,
    times: Array1<f64>,
}

impl Snapshots {
    /// Fields stacked along the first axis, shape `(frames, N, N)`.
    pub fn fields(&self) -> &Array3<f64> {
        &self.fields
    }

    pub fn times(&self) -> &Array1<f64> {
        &self.times
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Field of frame `k`.
    ///
    /// Panics if `k >= self.len()`.
    pub fn field(&self, k: usize) -> ArrayView2<f64> {
        self.fields.index_axis(Axis(0), k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, ArrayView2<'_, f64>)> + '_ {
        self.times.iter().cloned().zip(self.fields.axis_iter(Axis(0)))
    }

    pub fn into_parts(self) -> (Array3<f64>, Array1<f64>) {
        (self.fields, self.times)
    }
}
