//! Stencil step of the damped wave equation with zero Dirichlet boundary data.
use crate::params::Coefficients;

/// Performs one step of the finite difference scheme for the damped wave equation
/// `z_tt + μ z_t = c² Δz` with the boundary held at zero.
///
/// The discretization is the standard central 2nd order difference in both space and time,
/// with the damping term centred at step `n`.
///
/// - `u`: value at step `n - 1`
/// - `v`: value at step `n`
/// - `w`: computed value at step `n + 1`, boundary rows and columns are overwritten with `0`
/// - `n`: nodes per axis so that memory layout for `u`, `v` and `w` is `[[f64 ; n]; n]`
/// - `co`: recurrence coefficients, see `Coefficients`
///
/// Panics if any of `u`, `v`, `w` is not `n * n` long.
pub fn damped_wave_step(u: &[f64], v: &[f64], w: &mut [f64], n: usize, co: &Coefficients) {
    let len = n * n;
    assert_eq!(u.len(), len);
    assert_eq!(v.len(), len);
    assert_eq!(w.len(), len);
    if n == 0 {
        return;
    }

    let Coefficients { c1, c2, c3 } = *co;

    // fixed edges
    for x in &mut w[..n] {
        *x = 0.;
    }
    for x in &mut w[n * (n - 1)..] {
        *x = 0.;
    }

    for i in 1..n.saturating_sub(1) {
        let s0 = n * (i - 1);
        let s1 = n * i;
        let s2 = n * (i + 1);

        w[s1] = 0.;
        w[s1 + n - 1] = 0.;

        let (top, mid, bot) = (&v[s0..s0 + n], &v[s1..s1 + n], &v[s2..s2 + n]);
        let prev = &u[s1..s1 + n];
        let out = &mut w[s1..s1 + n];
        for j in 1..n - 1 {
            out[j] = c1 * mid[j] + c2 * prev[j] + c3 * (top[j] + bot[j] + mid[j - 1] + mid[j + 1]);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use ndarray::Array2;
    use ndarray_rand::rand_distr::Uniform;
    use ndarray_rand::RandomExt;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Reference implementation.
    fn damped_wave_step_reference(u: &Array2<f64>, v: &Array2<f64>, co: &Coefficients) -> Array2<f64> {
        let (ny, nx) = v.dim();
        let mut w = Array2::zeros((ny, nx));
        for i in 1..ny - 1 {
            for j in 1..nx - 1 {
                let lap = v[(i - 1, j)] + v[(i + 1, j)] + v[(i, j - 1)] + v[(i, j + 1)];
                w[(i, j)] = co.c1 * v[(i, j)] + co.c2 * u[(i, j)] + co.c3 * lap;
            }
        }
        w
    }

    fn test_dim(n: usize) {
        let co = Coefficients { c1: 1.3, c2: -0.9, c3: 0.21 };
        let mut rng = StdRng::seed_from_u64(n as u64);
        let u = Array2::random_using((n, n), Uniform::new(-1., 1.), &mut rng);
        let v = Array2::random_using((n, n), Uniform::new(-1., 1.), &mut rng);
        let w_ref = damped_wave_step_reference(&u, &v, &co);

        // garbage in the output buffer must not leak through the boundary
        let mut w = Array2::from_elem((n, n), 7.);
        damped_wave_step(u.as_slice().unwrap(),
                         v.as_slice().unwrap(),
                         w.as_slice_mut().unwrap(),
                         n,
                         &co);

        let d = &w - &w_ref;
        let err = (&d * &d).sum();
        if err > 1e-20 {
            println!("{}\n", w);
            println!("{}\n", w_ref);
            panic!("Error too big: {}", err);
        }
    }

    #[test]
    fn test_equal() {
        test_dim(1);
        test_dim(2);
        test_dim(3);
        test_dim(4);
        test_dim(5);
        test_dim(20);
        test_dim(257);
    }

    #[test]
    #[should_panic]
    fn wrong_length() {
        let co = Coefficients { c1: 0., c2: 0., c3: 0. };
        let mut w = vec![0.; 16];
        damped_wave_step(&[0.; 16], &[0.; 15], &mut w, 4, &co);
    }
}
