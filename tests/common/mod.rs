//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use ndarray::{Array2, ArrayView2};
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Zero field with a unit value at the centre node.
pub fn pulse(n: usize) -> Array2<f64> {
    let mut z = Array2::zeros((n, n));
    z[(n / 2, n / 2)] = 1.;
    z
}

/// Random interior values in `[-1, 1)`, zero on the boundary.
pub fn random_interior(n: usize, seed: u64) -> Array2<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut z = Array2::random_using((n, n), Uniform::new(-1., 1.), &mut rng);
    clear_edges(&mut z);
    z
}

pub fn clear_edges(z: &mut Array2<f64>) {
    let (ny, nx) = z.dim();
    for ((i, j), x) in z.indexed_iter_mut() {
        if i == 0 || j == 0 || i == ny - 1 || j == nx - 1 {
            *x = 0.;
        }
    }
}

pub fn edge_values(z: ArrayView2<f64>) -> Vec<f64> {
    let (ny, nx) = z.dim();
    z.indexed_iter()
        .filter(|&((i, j), _)| i == 0 || j == 0 || i == ny - 1 || j == nx - 1)
        .map(|(_, &x)| x)
        .collect()
}

pub fn l2_norm(z: ArrayView2<f64>) -> f64 {
    z.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Assert that two fields agree elementwise within `tolerance`.
pub fn assert_fields_close(a: ArrayView2<f64>, b: ArrayView2<f64>, tolerance: f64, message: &str) {
    assert_eq!(a.dim(), b.dim(), "{}: dimension mismatch", message);
    for ((idx, &x), &y) in a.indexed_iter().zip(b.iter()) {
        assert!((x - y).abs() <= tolerance,
                "{}: element {:?} differs, {} vs {} (tolerance {})",
                message,
                idx,
                x,
                y,
                tolerance);
    }
}
