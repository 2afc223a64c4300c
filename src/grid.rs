// --- File: grid.rs ---
use crate::constants::{CELL_COUNT, COLS, ROWS};
use crate::patterns;
use rand::Rng;

/// Moore neighbourhood offsets as (row, col).
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The Game of Life rule: survival on 2 or 3 neighbours, birth on exactly 3.
#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2) | (_, 3))
}

#[inline]
pub fn index(row: usize, col: usize) -> usize {
    row * COLS + col
}

/// Maps signed coordinates onto the grid, rejecting anything outside it.
#[inline]
fn checked_position(row: i32, col: i32) -> Option<(usize, usize)> {
    let row = usize::try_from(row).ok().filter(|&r| r < ROWS)?;
    let col = usize::try_from(col).ok().filter(|&c| c < COLS)?;
    Some((row, col))
}

fn count_neighbors(cells: &[u8], row: usize, col: usize) -> u8 {
    NEIGHBOR_OFFSETS
        .iter()
        .filter_map(|&(dr, dc)| {
            let r = row.checked_add_signed(dr).filter(|&r| r < ROWS)?;
            let c = col.checked_add_signed(dc).filter(|&c| c < COLS)?;
            Some(cells[index(r, c)])
        })
        .sum()
}

/// A bounded ROWS x COLS grid of cells, double buffered.
///
/// `buffers[current]` is the live generation. The other buffer is scratch
/// space that only [`Grid::step`] writes to; a step finishes writing it
/// completely before `current` flips, so readers never see a partial
/// generation.
#[derive(Debug, Clone)]
pub struct Grid {
    buffers: [Vec<u8>; 2],
    current: usize,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    pub fn new() -> Self {
        Self {
            buffers: [vec![0; CELL_COUNT], vec![0; CELL_COUNT]],
            current: 0,
        }
    }

    /// The live generation, row-major.
    #[inline]
    pub fn cells(&self) -> &[u8] {
        &self.buffers[self.current]
    }

    #[inline]
    fn cells_mut(&mut self) -> &mut [u8] {
        &mut self.buffers[self.current]
    }

    #[inline]
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.cells()[index(row, col)] != 0
    }

    pub fn live_count(&self) -> usize {
        self.cells().iter().filter(|&&cell| cell != 0).count()
    }

    /// Live cells among the 8 neighbours of (row, col). Cells beyond the
    /// grid edge count as dead.
    pub fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        count_neighbors(self.cells(), row, col)
    }

    /// Advances one generation.
    pub fn step(&mut self) {
        let [first, second] = &mut self.buffers;
        let (current, scratch) = if self.current == 0 {
            (&*first, second)
        } else {
            (&*second, first)
        };

        for (row, scratch_row) in scratch.chunks_exact_mut(COLS).enumerate() {
            for (col, next) in scratch_row.iter_mut().enumerate() {
                let alive = current[index(row, col)] != 0;
                let neighbors = count_neighbors(current, row, col);
                *next = u8::from(next_state(alive, neighbors));
            }
        }

        self.current ^= 1;
    }

    /// Sets each cell alive with `probability`, independently.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, probability: f64) {
        for cell in self.cells_mut() {
            *cell = u8::from(rng.r#gen::<f64>() < probability);
        }
    }

    pub fn clear(&mut self) {
        self.cells_mut().fill(0);
    }

    /// Flips the cell at (row, col). Returns `false` without touching the
    /// grid when the position is out of bounds.
    pub fn toggle_cell(&mut self, row: i32, col: i32) -> bool {
        let Some((row, col)) = checked_position(row, col) else {
            return false;
        };
        self.cells_mut()[index(row, col)] ^= 1;
        true
    }

    /// Clears the grid and places the named pattern at its centre.
    ///
    /// Unknown names and the `"none"` sentinel leave the grid untouched and
    /// return `false`.
    pub fn apply_pattern(&mut self, name: &str) -> bool {
        let Some(pattern) = patterns::find(name) else {
            return false;
        };

        self.clear();
        let cells = self.cells_mut();
        for (row, col) in pattern.placement() {
            if let Some((row, col)) = checked_position(row, col) {
                cells[index(row, col)] = 1;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn grid_with(cells: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new();
        for &(row, col) in cells {
            grid.toggle_cell(row as i32, col as i32);
        }
        grid
    }

    fn live_cells(grid: &Grid) -> Vec<(usize, usize)> {
        (0..ROWS)
            .flat_map(|row| (0..COLS).map(move |col| (row, col)))
            .filter(|&(row, col)| grid.is_alive(row, col))
            .collect()
    }

    #[test]
    fn rules_match_conway_life() {
        assert!(next_state(true, 2));
        assert!(next_state(true, 3));
        assert!(next_state(false, 3));

        assert!(!next_state(true, 0));
        assert!(!next_state(true, 1));
        assert!(!next_state(true, 4));
        assert!(!next_state(true, 8));
        assert!(!next_state(false, 2));
        assert!(!next_state(false, 4));
    }

    #[test]
    fn empty_grid_stays_empty() {
        let mut grid = Grid::new();
        grid.step();

        assert_eq!(grid.live_count(), 0);
        assert_eq!(grid.cells().len(), ROWS * COLS);
    }

    #[test]
    fn clear_then_step_is_all_dead() {
        let mut grid = Grid::new();
        grid.randomize(&mut StdRng::seed_from_u64(7), 0.5);
        grid.clear();
        grid.step();

        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn blinker_oscillates() {
        let mut grid = grid_with(&[(10, 9), (10, 10), (10, 11)]);

        grid.step();
        assert_eq!(live_cells(&grid), vec![(9, 10), (10, 10), (11, 10)]);

        grid.step();
        assert_eq!(live_cells(&grid), vec![(10, 9), (10, 10), (10, 11)]);
    }

    #[test]
    fn block_is_stable() {
        let block = [(50, 50), (50, 51), (51, 50), (51, 51)];
        let mut grid = grid_with(&block);
        grid.step();

        assert_eq!(live_cells(&grid), block.to_vec());
    }

    #[test]
    fn corner_block_does_not_wrap() {
        let block = [(0, 0), (0, 1), (1, 0), (1, 1)];
        let mut grid = grid_with(&block);

        assert_eq!(grid.live_neighbors(0, 0), 3);
        assert_eq!(grid.live_neighbors(ROWS - 1, COLS - 1), 0);
        assert_eq!(grid.live_neighbors(ROWS - 1, 0), 0);

        grid.step();
        assert_eq!(live_cells(&grid), block.to_vec());
    }

    #[test]
    fn edge_blinker_loses_cells_off_grid() {
        // Along the top edge the blinker's birth at row -1 never happens
        let mut grid = grid_with(&[(0, 9), (0, 10), (0, 11)]);
        grid.step();
        assert_eq!(live_cells(&grid), vec![(0, 10), (1, 10)]);

        grid.step();
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn step_reads_only_the_previous_generation() {
        // Writing (4, 5) alive in place would give (5, 4) a second
        // neighbour and keep it alive.
        let mut grid = grid_with(&[(5, 4), (5, 5), (5, 6)]);
        grid.step();

        assert!(grid.is_alive(4, 5));
        assert!(grid.is_alive(6, 5));
        assert!(!grid.is_alive(5, 4));
        assert_eq!(grid.live_count(), 3);
    }

    #[test]
    fn toggle_twice_restores_cell() {
        let mut grid = Grid::new();

        assert!(grid.toggle_cell(3, 4));
        assert!(grid.is_alive(3, 4));
        assert!(grid.toggle_cell(3, 4));
        assert!(!grid.is_alive(3, 4));
    }

    #[test]
    fn toggle_out_of_bounds_is_ignored() {
        let mut grid = Grid::new();

        assert!(!grid.toggle_cell(-1, 0));
        assert!(!grid.toggle_cell(0, -1));
        assert!(!grid.toggle_cell(ROWS as i32, 0));
        assert!(!grid.toggle_cell(0, COLS as i32));
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn randomize_extremes() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut grid = Grid::new();

        grid.randomize(&mut rng, 0.0);
        assert_eq!(grid.live_count(), 0);

        grid.randomize(&mut rng, 1.0);
        assert_eq!(grid.live_count(), ROWS * COLS);
    }

    #[test]
    fn randomize_fills_about_a_fifth() {
        let mut grid = Grid::new();
        grid.randomize(&mut StdRng::seed_from_u64(42), 0.2);

        let live = grid.live_count();
        // 40_000 draws at p = 0.2: mean 8_000, standard deviation 80
        assert!((7_500..8_500).contains(&live), "live = {live}");
        assert!(grid.cells().iter().all(|&cell| cell <= 1));
    }

    #[test]
    fn glider_is_centred() {
        let mut grid = Grid::new();

        assert!(grid.apply_pattern("glider"));
        assert_eq!(
            live_cells(&grid),
            vec![(98, 99), (99, 100), (100, 98), (100, 99), (100, 100)]
        );
    }

    #[test]
    fn glider_keeps_population_and_moves() {
        let mut grid = Grid::new();
        grid.apply_pattern("glider");
        let start = live_cells(&grid);

        grid.step();
        assert_eq!(grid.live_count(), 5);

        for _ in 0..3 {
            grid.step();
        }
        // Four generations move a glider one cell down and one right
        let moved: Vec<_> = start.iter().map(|&(r, c)| (r + 1, c + 1)).collect();
        assert_eq!(live_cells(&grid), moved);
    }

    #[test]
    fn apply_pattern_replaces_existing_cells() {
        let mut grid = grid_with(&[(0, 0), (199, 199)]);
        grid.apply_pattern("glider");

        assert!(!grid.is_alive(0, 0));
        assert!(!grid.is_alive(199, 199));
        assert_eq!(grid.live_count(), 5);
    }

    #[test]
    fn unknown_pattern_is_a_no_op() {
        let mut grid = grid_with(&[(1, 1)]);

        assert!(!grid.apply_pattern("none"));
        assert!(!grid.apply_pattern("not-a-pattern"));
        assert_eq!(live_cells(&grid), vec![(1, 1)]);
    }

    #[test]
    fn every_pattern_is_placed_in_full() {
        for pattern in patterns::PATTERNS {
            let mut grid = Grid::new();
            grid.apply_pattern(pattern.name);
            assert_eq!(grid.live_count(), pattern.cells().len(), "{}", pattern.name);
        }
    }

    proptest! {
        #[test]
        fn interior_cell_follows_rule(
            row in 1..ROWS - 1,
            col in 1..COLS - 1,
            alive: bool,
            mask: u8
        ) {
            let mut grid = Grid::new();
            if alive {
                grid.toggle_cell(row as i32, col as i32);
            }
            for (bit, &(dr, dc)) in NEIGHBOR_OFFSETS.iter().enumerate() {
                if mask & (1 << bit) != 0 {
                    grid.toggle_cell(row as i32 + dr as i32, col as i32 + dc as i32);
                }
            }
            let neighbors = mask.count_ones() as u8;
            prop_assert_eq!(grid.live_neighbors(row, col), neighbors);

            grid.step();
            prop_assert_eq!(grid.is_alive(row, col), next_state(alive, neighbors));
        }

        #[test]
        fn toggle_twice_is_identity(row in -3i32..203, col in -3i32..203, seed: u64) {
            let mut grid = Grid::new();
            grid.randomize(&mut StdRng::seed_from_u64(seed), 0.2);
            let before = grid.cells().to_vec();

            grid.toggle_cell(row, col);
            grid.toggle_cell(row, col);
            prop_assert_eq!(grid.cells(), &before[..]);
        }

        #[test]
        fn operations_preserve_shape(seed: u64, steps in 0usize..4, row: i32, col: i32) {
            let mut grid = Grid::new();
            grid.randomize(&mut StdRng::seed_from_u64(seed), 0.3);
            grid.toggle_cell(row, col);
            for _ in 0..steps {
                grid.step();
            }

            prop_assert_eq!(grid.cells().len(), ROWS * COLS);
            prop_assert!(grid.cells().iter().all(|&cell| cell <= 1));
        }
    }
}
