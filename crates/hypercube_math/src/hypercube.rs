//! Hypercube bit-pattern helpers
//!
//! A vertex of the d-dimensional unit hypercube is a d-bit integer: bit `i`
//! set means coordinate `i` is 1, otherwise 0. Bit 0 is X, bit 1 is Y,
//! bit 2 is Z and bit 3 is W. Two vertices share an edge exactly when their
//! patterns differ in one bit.

use crate::Vec4;

/// Highest dimension that fits in 4-space
pub const MAX_DIMENSION: u32 = 4;

/// Number of vertices of the d-cube (`2^d`)
#[inline]
pub const fn vertex_count(dimension: u32) -> usize {
    1usize << dimension
}

/// Number of edges of the d-cube (`d * 2^(d-1)`)
#[inline]
pub const fn edge_count(dimension: u32) -> usize {
    if dimension == 0 {
        0
    } else {
        dimension as usize * (1usize << (dimension - 1))
    }
}

/// Popcount of the pattern, mod 2
#[inline]
pub const fn parity(value: u32) -> u32 {
    value.count_ones() % 2
}

/// Number of differing bits
#[inline]
pub const fn hamming_distance(a: u32, b: u32) -> u32 {
    (a ^ b).count_ones()
}

/// Corner coordinates of a pattern; bits above W are ignored
pub fn unit_coordinates(value: u32) -> Vec4 {
    let bit = |i: u32| if value & (1 << i) != 0 { 1.0 } else { 0.0 };
    Vec4::new(bit(0), bit(1), bit(2), bit(3))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let expected = [(0, 1, 0), (1, 2, 1), (2, 4, 4), (3, 8, 12), (4, 16, 32)];
        for (d, vertices, edges) in expected {
            assert_eq!(vertex_count(d), vertices, "vertices of {}-cube", d);
            assert_eq!(edge_count(d), edges, "edges of {}-cube", d);
        }
    }

    #[test]
    fn test_parity() {
        assert_eq!(parity(0b0000), 0);
        assert_eq!(parity(0b0001), 1);
        assert_eq!(parity(0b0011), 0);
        assert_eq!(parity(0b0111), 1);
        assert_eq!(parity(0b1111), 0);
    }

    #[test]
    fn test_hamming_distance() {
        assert_eq!(hamming_distance(0, 1), 1);
        assert_eq!(hamming_distance(0b0101, 0b0100), 1);
        assert_eq!(hamming_distance(0, 0b1111), 4);
        assert_eq!(hamming_distance(6, 6), 0);
    }

    #[test]
    fn test_unit_coordinates() {
        assert_eq!(unit_coordinates(0), Vec4::ZERO);
        assert_eq!(unit_coordinates(0b0001), Vec4::X);
        assert_eq!(unit_coordinates(0b1000), Vec4::W);
        assert_eq!(unit_coordinates(0b0110), Vec4::new(0.0, 1.0, 1.0, 0.0));
        assert_eq!(unit_coordinates(0b1111), Vec4::new(1.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn test_flipping_one_bit_flips_parity() {
        for value in 0..16u32 {
            for bit in 0..MAX_DIMENSION {
                let neighbor = value ^ (1 << bit);
                assert_ne!(parity(value), parity(neighbor));
                assert_eq!(hamming_distance(value, neighbor), 1);
            }
        }
    }
}
