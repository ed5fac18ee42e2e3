//! Four-in-a-row masks, generated from the grid geometry at compile time.

use super::board::{COLS, ROWS};

/// Number of distinct four-in-a-row alignments on a 7x6 grid.
pub const WIN_PATTERN_COUNT: usize = 69;

/// Every cell set.
pub const FULL_BOARD: u64 = (1u64 << (ROWS * COLS) as u32) - 1;

/// All alignments as bitmasks over `row * COLS + col`.
pub const WIN_PATTERNS: [u64; WIN_PATTERN_COUNT] = generate();

// (row step, col step): horizontal, vertical, down-right, down-left
const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

const fn generate() -> [u64; WIN_PATTERN_COUNT] {
    let mut patterns = [0u64; WIN_PATTERN_COUNT];
    let mut n = 0;
    let mut d = 0;
    while d < DIRECTIONS.len() {
        let (dr, dc) = DIRECTIONS[d];
        let mut row = 0;
        while row < ROWS as i32 {
            let mut col = 0;
            while col < COLS as i32 {
                let end_row = row + 3 * dr;
                let end_col = col + 3 * dc;
                if end_row >= 0 && end_row < ROWS as i32 && end_col >= 0 && end_col < COLS as i32 {
                    let mut mask = 0u64;
                    let mut i = 0;
                    while i < 4 {
                        let bit = (row + i * dr) * COLS as i32 + (col + i * dc);
                        mask |= 1u64 << bit as u32;
                        i += 1;
                    }
                    patterns[n] = mask;
                    n += 1;
                }
                col += 1;
            }
            row += 1;
        }
        d += 1;
    }
    assert!(n == WIN_PATTERN_COUNT);
    patterns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::cell_mask;
    use std::collections::HashSet;

    // Hand-enumerated table the generator has to reproduce.
    const REFERENCE: [u64; WIN_PATTERN_COUNT] = [
        16843009, 15, 2113665, 33686018, 30, 4227330,
        67372036, 60, 8454660, 134744072, 120, 16909320,
        33818640, 67637280, 135274560, 2155905152, 1920,
        270549120, 4311810304, 3840, 541098240, 8623620608,
        7680, 1082196480, 17247241216, 15360, 2164392960,
        4328785920, 8657571840, 17315143680, 275955859456,
        245760, 34630287360, 551911718912, 491520, 69260574720,
        1103823437824, 983040, 138521149440, 2207646875648,
        1966080, 277042298880, 554084597760, 1108169195520,
        2216338391040, 2130440, 31457280, 4260880, 62914560,
        8521760, 125829120, 17043520, 251658240, 272696320,
        4026531840, 545392640, 8053063680, 1090785280, 16106127360,
        2181570560, 32212254720, 34905128960, 515396075520,
        69810257920, 1030792151040, 139620515840, 2061584302080,
        279241031680, 4123168604160,
    ];

    #[test]
    fn test_pattern_count_and_uniqueness() {
        let unique: HashSet<u64> = WIN_PATTERNS.iter().copied().collect();
        assert_eq!(unique.len(), WIN_PATTERN_COUNT);
    }

    #[test]
    fn test_every_pattern_has_four_cells_on_grid() {
        for &p in &WIN_PATTERNS {
            assert_eq!(p.count_ones(), 4, "pattern {p:#x}");
            assert_eq!(p & !FULL_BOARD, 0, "pattern {p:#x} leaves the grid");
        }
    }

    #[test]
    fn test_matches_reference_table() {
        let generated: HashSet<u64> = WIN_PATTERNS.iter().copied().collect();
        let reference: HashSet<u64> = REFERENCE.iter().copied().collect();
        assert_eq!(generated, reference);
    }

    #[test]
    fn test_orientation_counts() {
        // Shapes anchored at the lowest set bit: row, column, down-right, down-left.
        let shapes: [(u64, usize); 4] = [
            (0b1111, 24),
            (cell_mask(0, 0) | cell_mask(1, 0) | cell_mask(2, 0) | cell_mask(3, 0), 21),
            (cell_mask(0, 0) | cell_mask(1, 1) | cell_mask(2, 2) | cell_mask(3, 3), 12),
            (cell_mask(0, 3) | cell_mask(1, 2) | cell_mask(2, 1) | cell_mask(3, 0), 12),
        ];
        for (shape, expected) in shapes {
            let shape = shape >> shape.trailing_zeros();
            let count = WIN_PATTERNS
                .iter()
                .filter(|&&p| p == shape << p.trailing_zeros())
                .count();
            assert_eq!(count, expected, "shape {shape:#x}");
        }
    }

    #[test]
    fn test_full_board_has_42_cells() {
        assert_eq!(FULL_BOARD.count_ones(), 42);
        assert_eq!(FULL_BOARD, 4398046511103);
    }
}
