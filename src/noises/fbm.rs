use wasm_bindgen::prelude::*;

use super::{
    noise::Noise,
    perlin_noise::{Perlin1d, Perlin2d},
};

/// Octave parameters for a fractal sum.
///
/// `octaves` is kept as a float to match the JavaScript surface. The sum runs
/// while the octave counter is below it, so `2.5` sums three octaves and zero,
/// negative or NaN counts sum none.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FbmSettings {
    pub amplitude: f64,
    pub frequency: f64,
    pub octaves: f64,
    /// Amplitude multiplier applied after each octave.
    pub persistence: f64,
    /// Frequency multiplier applied after each octave.
    pub lacunarity: f64,
}

impl Default for FbmSettings {
    fn default() -> Self {
        Self {
            amplitude: 1.0,
            frequency: 1.0,
            octaves: 1.0,
            persistence: 0.5,
            lacunarity: 2.0,
        }
    }
}

#[wasm_bindgen]
impl FbmSettings {
    #[wasm_bindgen(constructor)]
    pub fn new(
        amplitude: f64,
        frequency: f64,
        octaves: f64,
        persistence: f64,
        lacunarity: f64,
    ) -> Self {
        Self {
            amplitude,
            frequency,
            octaves,
            persistence,
            lacunarity,
        }
    }

    /// Number of octaves the sum will evaluate. Saturates at `u32::MAX`.
    #[wasm_bindgen(js_name = octaveCount)]
    pub fn octave_count(&self) -> u32 {
        self.octaves.ceil() as u32
    }

    #[wasm_bindgen(js_name = sample1d)]
    pub fn sample1d(&self, x: f64) -> f64 {
        fbm::<Perlin1d>(x, self)
    }

    #[wasm_bindgen(js_name = sample2d)]
    pub fn sample2d(&self, x: f64, y: f64) -> f64 {
        fbm::<Perlin2d>((x, y), self)
    }
}

/// Sums octaves of `N` at `point`. The result is not normalised; keep
/// `amplitude` and `persistence` small enough for the range you need.
pub fn fbm<N: Noise>(point: N::Point, settings: &FbmSettings) -> f64 {
    let mut value = 0.0;
    let mut amplitude = settings.amplitude;
    let mut frequency = settings.frequency;

    for _ in 0..settings.octave_count() {
        value += N::sample(N::scale(point, frequency)) * amplitude;
        amplitude *= settings.persistence;
        frequency *= settings.lacunarity;
    }

    value
}

/// Fractal sum of [`noise1d`](super::perlin_noise::noise1d) octaves at `x`.
pub fn fbm1d(
    x: f64,
    amplitude: f64,
    frequency: f64,
    octaves: f64,
    persistence: f64,
    lacunarity: f64,
) -> f64 {
    let settings = FbmSettings::new(amplitude, frequency, octaves, persistence, lacunarity);
    fbm::<Perlin1d>(x, &settings)
}

/// Fractal sum of [`noise2d`](super::perlin_noise::noise2d) octaves; both axes share `frequency`.
#[allow(clippy::too_many_arguments)]
pub fn fbm2d(
    x: f64,
    y: f64,
    amplitude: f64,
    frequency: f64,
    octaves: f64,
    persistence: f64,
    lacunarity: f64,
) -> f64 {
    let settings = FbmSettings::new(amplitude, frequency, octaves, persistence, lacunarity);
    fbm::<Perlin2d>((x, y), &settings)
}
