/// A lattice noise field that can be layered into fractal sums.
pub trait Noise {
    type Point: Copy;

    fn sample(point: Self::Point) -> f64;

    /// Scales every axis of `point` by the same `frequency`.
    fn scale(point: Self::Point, frequency: f64) -> Self::Point;
}
