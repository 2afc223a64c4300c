// --- Grid Dimensions ---
pub const ROWS: usize = 200;
pub const COLS: usize = 200;
pub const CELL_COUNT: usize = ROWS * COLS;

// --- Raster Output ---
pub const CELL_SIZE: usize = 4; // 200 * 4 = 800 px
pub const FRAME_WIDTH: u32 = (COLS * CELL_SIZE) as u32;
pub const FRAME_HEIGHT: u32 = (ROWS * CELL_SIZE) as u32;
pub const BYTES_PER_PIXEL: usize = 4;
pub const LIVE_COLOR: [u8; 4] = [0, 0, 0, 255];
pub const DEAD_COLOR: [u8; 4] = [255, 255, 255, 255];
// Only visible while the surface is being reconfigured
pub const BACKGROUND_COLOR: wgpu::Color = wgpu::Color::WHITE;

// --- Run Loop ---
pub const INITIAL_GENERATIONS_PER_SECOND: u32 = 10;
pub const MIN_GENERATIONS_PER_SECOND: u32 = 1;
pub const MAX_GENERATIONS_PER_SECOND: u32 = 60;
pub const SPEED_ADJUST_STEP: u32 = 1;

// --- Randomize ---
pub const RANDOM_FILL_PROBABILITY: f64 = 0.2;

pub const WINDOW_TITLE: &str = "Life Canvas";
