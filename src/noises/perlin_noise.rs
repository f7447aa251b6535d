use super::{
    helpers::{fade, grad1d, grad2d, lerp},
    noise::Noise,
    permutation::{lattice_index, perm},
};

/// One-dimensional gradient noise over the fixed permutation table.
pub struct Perlin1d;

/// Two-dimensional gradient noise over the fixed permutation table.
pub struct Perlin2d;

impl Noise for Perlin1d {
    type Point = f64;

    #[inline]
    fn sample(x: f64) -> f64 {
        noise1d(x)
    }

    #[inline]
    fn scale(x: f64, frequency: f64) -> f64 {
        x * frequency
    }
}

impl Noise for Perlin2d {
    type Point = (f64, f64);

    #[inline]
    fn sample((x, y): (f64, f64)) -> f64 {
        noise2d(x, y)
    }

    #[inline]
    fn scale((x, y): (f64, f64), frequency: f64) -> (f64, f64) {
        (x * frequency, y * frequency)
    }
}

/// Samples 1D noise at `x`.
///
/// The result is exactly 0.5 at integer `x` and always lies in `[0, 1]`.
/// Repeats every 256 units.
pub fn noise1d(x: f64) -> f64 {
    let xi = lattice_index(x);
    let xf = x - x.floor();

    let u = fade(xf);

    0.5 + lerp(u, grad1d(perm(xi), xf), grad1d(perm(xi + 1), xf - 1.0))
}

/// Samples 2D noise at `(x, y)`.
///
/// Centred on 0.5 and exactly 0.5 on every lattice point. The output is not
/// clamped and can reach roughly `[-0.5, 1.5]` near cell centres.
pub fn noise2d(x: f64, y: f64) -> f64 {
    let xi = lattice_index(x);
    let yi = lattice_index(y);

    let xf = x - x.floor();
    let yf = y - y.floor();

    let u = fade(xf);
    let v = fade(yf);

    let a = (perm(xi) as usize + yi) & 255;
    let b = (perm(xi + 1) as usize + yi) & 255;

    let x1 = lerp(u, grad2d(perm(a), xf, yf), grad2d(perm(b), xf - 1.0, yf));
    let x2 = lerp(
        u,
        grad2d(perm(a + 1), xf, yf - 1.0),
        grad2d(perm(b + 1), xf - 1.0, yf - 1.0),
    );

    0.5 + lerp(v, x1, x2)
}
