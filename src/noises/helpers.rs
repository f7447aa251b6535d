/// Linear interpolation from `a` to `b`; `t` outside `[0, 1]` extrapolates.
#[inline]
pub const fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}

/// Quintic smoothstep `6t^5 - 15t^4 + 10t^3`. First and second derivatives
/// vanish at 0 and 1, so neighbouring cells join without creases.
#[inline]
pub const fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Returns `x` for even `hash`, `-x` for odd.
#[inline]
pub const fn grad1d(hash: u8, x: f64) -> f64 {
    if hash & 1 == 0 { x } else { -x }
}

/// Four diagonal gradients: bit 0 flips `x`, bit 1 flips `y`.
#[inline]
pub const fn grad2d(hash: u8, x: f64, y: f64) -> f64 {
    let xx = if hash & 1 == 0 { x } else { -x };
    let yy = if hash & 2 == 0 { y } else { -y };
    xx + yy
}
