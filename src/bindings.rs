//! JavaScript entry points. Values are identical to the Rust API.

use wasm_bindgen::prelude::*;

use crate::noises::{
    fbm::{fbm1d, fbm2d},
    helpers::lerp,
    perlin_noise::{noise1d, noise2d},
};

crate::export_noise!(
    lerp(t, a, b),
    noise1d(x),
    noise2d(x, y),
    fbm1d(x, amplitude, frequency, octaves, persistence, lacunarity),
    fbm2d(x, y, amplitude, frequency, octaves, persistence, lacunarity),
);
