// --- File: patterns.rs ---
use crate::constants::{COLS, ROWS};

/// Name that selects no pattern at all.
pub const NONE: &str = "none";

/// Columns left empty at each end of the generated horizontal line.
const HLINE_INSET: i32 = 3;

/// The live cells of a pattern, as (row, col) offsets.
#[derive(Debug, Clone, Copy)]
pub enum Shape {
    Cells(&'static [(i32, i32)]),
    /// A single row spanning the grid width, minus `inset` columns at each end.
    HorizontalLine { inset: i32 },
}

#[derive(Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub label: &'static str,
    pub shape: Shape,
}

/// Inclusive bounds of a set of (row, col) offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_row: i32,
    pub min_col: i32,
    pub max_row: i32,
    pub max_col: i32,
}

impl BoundingBox {
    pub fn of(cells: &[(i32, i32)]) -> Option<Self> {
        let (&(first_row, first_col), rest) = cells.split_first()?;
        let mut bounds = Self {
            min_row: first_row,
            min_col: first_col,
            max_row: first_row,
            max_col: first_col,
        };
        for &(row, col) in rest {
            bounds.min_row = bounds.min_row.min(row);
            bounds.min_col = bounds.min_col.min(col);
            bounds.max_row = bounds.max_row.max(row);
            bounds.max_col = bounds.max_col.max(col);
        }
        Some(bounds)
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.max_row - self.min_row + 1
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.max_col - self.min_col + 1
    }

    /// Offset that centres this box on a `rows` x `cols` grid.
    ///
    /// Per axis: `floor((grid - extent) / 2) - min`. Boxes larger than the
    /// grid get a negative origin and lose their out-of-range cells on placement.
    pub fn centering_offset(&self, rows: i32, cols: i32) -> (i32, i32) {
        (
            (rows - self.height()).div_euclid(2) - self.min_row,
            (cols - self.width()).div_euclid(2) - self.min_col,
        )
    }
}

impl Pattern {
    pub fn cells(&self) -> Vec<(i32, i32)> {
        match self.shape {
            Shape::Cells(cells) => cells.to_vec(),
            Shape::HorizontalLine { inset } => {
                (inset..COLS as i32 - inset).map(|col| (0, col)).collect()
            }
        }
    }

    /// Grid positions of this pattern centred on the grid. Positions may lie
    /// outside the grid; the caller drops those.
    pub fn placement(&self) -> Vec<(i32, i32)> {
        let cells = self.cells();
        let Some(bounds) = BoundingBox::of(&cells) else {
            return Vec::new();
        };
        let (row_offset, col_offset) = bounds.centering_offset(ROWS as i32, COLS as i32);
        cells
            .into_iter()
            .map(|(row, col)| (row + row_offset, col + col_offset))
            .collect()
    }
}

/// Looks up a pattern by name. The `"none"` sentinel and unknown names yield `None`.
pub fn find(name: &str) -> Option<&'static Pattern> {
    if name == NONE {
        return None;
    }
    PATTERNS.iter().find(|pattern| pattern.name == name)
}

#[rustfmt::skip]
pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "glider",
        label: "Glider",
        shape: Shape::Cells(&[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]),
    },
    Pattern {
        name: "tumbler",
        label: "Tumbler",
        shape: Shape::Cells(&[
            (0, 2), (0, 3), (0, 6), (0, 7),
            (1, 0), (1, 1), (1, 3), (1, 4), (1, 5), (1, 7), (1, 8), (1, 9),
            (2, 0), (2, 1), (2, 3), (2, 4), (2, 5), (2, 7), (2, 8), (2, 9),
            (3, 2), (3, 3), (3, 6), (3, 7),
        ]),
    },
    Pattern {
        name: "galaxy",
        label: "Galaxy",
        shape: Shape::Cells(&[
            (0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 7), (0, 8),
            (1, 0), (1, 1), (1, 2), (1, 3), (1, 4), (1, 5), (1, 7), (1, 8),
            (2, 7), (2, 8),
            (3, 0), (3, 1), (3, 7), (3, 8),
            (4, 0), (4, 1), (4, 7), (4, 8),
            (5, 0), (5, 1), (5, 7), (5, 8),
            (6, 0), (6, 1),
            (7, 0), (7, 1), (7, 3), (7, 4), (7, 5), (7, 6), (7, 7), (7, 8),
            (8, 0), (8, 1), (8, 3), (8, 4), (8, 5), (8, 6), (8, 7), (8, 8),
        ]),
    },
    Pattern {
        name: "chuchu",
        label: "Choo-choo train",
        shape: Shape::Cells(&[
            (0, 3),
            (1, 4),
            (2, 0), (2, 4),
            (3, 1), (3, 2), (3, 3), (3, 4),
            (7, 0),
            (8, 1), (8, 2),
            (9, 2),
            (10, 2),
            (11, 1),
            (14, 3),
            (15, 4),
            (16, 0), (16, 4),
            (17, 1), (17, 2), (17, 3), (17, 4),
        ]),
    },
    Pattern {
        name: "hwss",
        label: "Heavyweight spaceship",
        shape: Shape::Cells(&[
            (0, 2), (0, 3),
            (1, 0), (1, 5),
            (2, 6),
            (3, 0), (3, 6),
            (4, 1), (4, 2), (4, 3), (4, 4), (4, 5), (4, 6),
        ]),
    },
    Pattern {
        name: "switch",
        label: "Switch engine",
        shape: Shape::Cells(&[
            (0, 1), (0, 3),
            (1, 0),
            (2, 1), (2, 4),
            (3, 3), (3, 4), (3, 5),
        ]),
    },
    Pattern {
        name: "gosper",
        label: "Gosper glider gun",
        shape: Shape::Cells(&[
            (5, 1), (5, 2), (6, 1), (6, 2),
            (3, 13), (3, 14), (4, 12), (4, 16), (5, 11), (5, 17), (6, 11), (6, 15),
            (6, 17), (6, 18), (7, 11), (7, 17), (8, 12), (8, 16), (9, 13), (9, 14),
            (1, 25), (2, 23), (2, 25), (3, 21), (3, 22), (4, 21), (4, 22), (5, 21),
            (5, 22), (6, 23), (6, 25), (7, 25),
            (3, 35), (3, 36), (4, 35), (4, 36),
        ]),
    },
    Pattern {
        name: "hline",
        label: "Horizontal line",
        shape: Shape::HorizontalLine { inset: HLINE_INSET },
    },
];
