pub mod fbm;
pub mod helpers;
pub mod noise;
pub mod perlin_noise;
pub mod permutation;
