use fixed_perlin::{FbmSettings, noise2d};
use rayon::prelude::*;

const SIZE: usize = 128;

fn point(i: usize) -> (f64, f64) {
    let x = (i % SIZE) as f64 / 9.5 - 6.0;
    let y = (i / SIZE) as f64 / 9.5 - 6.0;
    (x, y)
}

#[test]
fn parallel_grid_matches_serial_grid() {
    let settings = FbmSettings::new(1.0, 0.75, 5.0, 0.5, 2.0);

    let serial: Vec<u64> = (0..SIZE * SIZE)
        .map(|i| {
            let (x, y) = point(i);
            settings.sample2d(x, y).to_bits()
        })
        .collect();

    let parallel: Vec<u64> = (0..SIZE * SIZE)
        .into_par_iter()
        .map(|i| {
            let (x, y) = point(i);
            settings.sample2d(x, y).to_bits()
        })
        .collect();

    assert_eq!(serial, parallel);
}

#[test]
fn threads_agree_on_lattice_samples() {
    let sums: Vec<f64> = (0..64)
        .into_par_iter()
        .map(|_| (0..SIZE).map(|i| noise2d(i as f64 * 0.37, i as f64 * 0.61)).sum::<f64>())
        .collect();

    assert!(sums.windows(2).all(|w| w[0].to_bits() == w[1].to_bits()));
}
