//! Deterministic 1D and 2D gradient noise with fractal (fBm) sums.
//!
//! Every function is pure and reads only the fixed [`PERMUTATION`] table, so
//! the same input always yields the same bits on every thread and platform.
//!
//! ```
//! use fixed_perlin::{FbmSettings, fbm2d, noise1d};
//!
//! assert_eq!(noise1d(3.0), 0.5);
//! let height = fbm2d(1.5, 2.25, 1.0, 1.0, 4.0, 0.5, 2.0);
//! assert_eq!(height, FbmSettings::new(1.0, 1.0, 4.0, 0.5, 2.0).sample2d(1.5, 2.25));
//! ```

use wasm_bindgen::prelude::*;

pub mod bindings;
pub mod log;
mod macros;
pub mod noises;

pub use noises::{
    fbm::{FbmSettings, fbm, fbm1d, fbm2d},
    helpers::{fade, grad1d, grad2d, lerp},
    noise::Noise,
    perlin_noise::{Perlin1d, Perlin2d, noise1d, noise2d},
    permutation::PERMUTATION,
};

#[wasm_bindgen(start)]
fn start() {
    console_log!("fixed_perlin ready ({} permutation entries)", PERMUTATION.len());
}
