/// Ken Perlin's reference permutation of 0..=255, with entry 0 repeated at
/// index 256 so that `PERMUTATION[i + 1]` stays in bounds for any `i <= 255`.
pub static PERMUTATION: [u8; 257] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225, 140, 36, 103, 30, 69,
    142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148, 247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219,
    203, 117, 35, 11, 32, 57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122, 60, 211, 133, 230,
    220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54, 65, 25, 63, 161, 1, 216, 80, 73, 209, 76,
    132, 187, 208, 89, 18, 169, 200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173,
    186, 3, 64, 52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212, 207, 206,
    59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213, 119, 248, 152, 2, 44, 154, 163,
    70, 221, 153, 101, 155, 167, 43, 172, 9, 129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232,
    178, 185, 112, 104, 218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162,
    241, 81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157, 184, 84, 204,
    176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93, 222, 114, 67, 29, 24, 72, 243, 141,
    128, 195, 78, 66, 215, 61, 156, 180, 151,
];

const _: () = assert!(PERMUTATION[256] == PERMUTATION[0]);

/// Lattice cell index of `coord`, wrapped into `0..=255`.
#[inline]
pub fn lattice_index(coord: f64) -> usize {
    coord.floor().rem_euclid(256.0) as usize
}

#[inline]
pub fn perm(i: usize) -> u8 {
    PERMUTATION[i]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_256_entries_are_a_permutation() {
        let mut seen = [false; 256];
        for &p in &PERMUTATION[..256] {
            assert!(!seen[p as usize], "value {p} appears twice");
            seen[p as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn last_entry_wraps_to_first() {
        assert_eq!(PERMUTATION.len(), 257);
        assert_eq!(PERMUTATION[256], PERMUTATION[0]);
        assert_eq!(PERMUTATION[0], 151);
        assert_eq!(PERMUTATION[255], 180);
    }

    #[test]
    fn lattice_index_wraps_negative_and_large_coordinates() {
        assert_eq!(lattice_index(0.0), 0);
        assert_eq!(lattice_index(0.999), 0);
        assert_eq!(lattice_index(255.5), 255);
        assert_eq!(lattice_index(256.0), 0);
        assert_eq!(lattice_index(-0.25), 255);
        assert_eq!(lattice_index(-256.0), 0);
        assert_eq!(lattice_index(1e12 + 3.0), (1_000_000_000_003_i64 & 255) as usize);
    }

    #[test]
    fn lattice_index_is_exact_beyond_integer_range() {
        // 1e20 is a multiple of 256 and does not fit in an i64
        assert_eq!(lattice_index(1e20), 0);
        assert_eq!(lattice_index(-1e20), 0);
        assert_eq!(lattice_index(2f64.powi(70) + 2f64.powi(19)), 0);
        assert_eq!(lattice_index(-(2f64.powi(62) + 2f64.powi(10) * 3.0)), 0);
    }
}
