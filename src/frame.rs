// --- File: frame.rs ---
use crate::constants::{
    BYTES_PER_PIXEL, CELL_SIZE, COLS, DEAD_COLOR, FRAME_HEIGHT, FRAME_WIDTH, LIVE_COLOR, ROWS,
};
use crate::grid::Grid;

/// An RGBA8 image of the whole grid, one CELL_SIZE x CELL_SIZE block per cell.
#[derive(Debug, Clone)]
pub struct Frame {
    pixels: Vec<u8>,
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

impl Frame {
    const ROW_BYTES: usize = FRAME_WIDTH as usize * BYTES_PER_PIXEL;

    pub fn new() -> Self {
        let mut frame = Self {
            pixels: vec![0; Self::ROW_BYTES * FRAME_HEIGHT as usize],
        };
        frame.fill(DEAD_COLOR);
        frame
    }

    /// Renders `grid` into a new frame.
    pub fn from_grid(grid: &Grid) -> Self {
        let mut frame = Self::new();
        frame.render(grid);
        frame
    }

    #[inline]
    pub fn width(&self) -> u32 {
        FRAME_WIDTH
    }

    #[inline]
    pub fn height(&self) -> u32 {
        FRAME_HEIGHT
    }

    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// The RGBA value at pixel (x, y).
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let start = y as usize * Self::ROW_BYTES + x as usize * BYTES_PER_PIXEL;
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.pixels[start..start + BYTES_PER_PIXEL]);
        rgba
    }

    fn fill(&mut self, color: [u8; 4]) {
        for pixel in self.pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel.copy_from_slice(&color);
        }
    }

    /// Overwrites the whole frame with the current generation of `grid`.
    pub fn render(&mut self, grid: &Grid) {
        self.fill(DEAD_COLOR);

        for row in 0..ROWS {
            for col in (0..COLS).filter(|&col| grid.is_alive(row, col)) {
                let x0 = col * CELL_SIZE;
                let y0 = row * CELL_SIZE;
                for y in y0..y0 + CELL_SIZE {
                    let start = y * Self::ROW_BYTES + x0 * BYTES_PER_PIXEL;
                    let block = &mut self.pixels[start..start + CELL_SIZE * BYTES_PER_PIXEL];
                    for pixel in block.chunks_exact_mut(BYTES_PER_PIXEL) {
                        pixel.copy_from_slice(&LIVE_COLOR);
                    }
                }
            }
        }
    }
}
