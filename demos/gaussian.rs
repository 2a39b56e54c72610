//! Gaussian dent relaxing in a damped square membrane.
//!
//! Prints one line per frame instead of rendering the surface.
use fdm_damped_wave::{WaveFieldSolver, WaveResult};
use ndarray::{Array1, Array2};

// grid
const N: usize = 129;
const L: f64 = 16.;

// medium
const C: f64 = 4.;
const MU: f64 = 0.25;

const DT: f64 = 1. / 64.;
const FRAMES: usize = 256;

fn main() -> WaveResult<()> {
    env_logger::init();

    let h = L / (N - 1) as f64;
    let x = Array1::linspace(0., L, N) - L / 2.;
    let z0 = Array2::from_shape_fn((N, N), |(i, j)| {
        let r2 = x[j] * x[j] + x[i] * x[i];
        -1.25 * (-2. * r2).exp()
    });

    let mut solver = WaveFieldSolver::new(N, h, z0.view(), C, MU, DT)?;
    println!("h = {}, dt = {} (limit {})", h, DT, solver.stability_limit());

    let frames = solver.batch_step(FRAMES)?;
    for (t, z) in frames.iter() {
        let peak = z.iter().fold(0f64, |m, x| m.max(x.abs()));
        println!("t = {:7.4}  max|z| = {:.5}  z(0, 0) = {:+.5}", t, peak, z[(N / 2, N / 2)]);
    }
    Ok(())
}
