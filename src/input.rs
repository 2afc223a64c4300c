// --- File: input.rs ---
use crate::constants::{CELL_SIZE, FRAME_HEIGHT, FRAME_WIDTH};
use crate::patterns::{self, PATTERNS};
use glam::Vec2;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::keyboard::KeyCode;

/// A user action on the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ToggleRunning,
    Step,
    Clear,
    Randomize,
    ApplyPattern(&'static str),
    SpeedUp,
    SpeedDown,
}

const DIGIT_KEYS: [KeyCode; 10] = [
    KeyCode::Digit0,
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
    KeyCode::Digit9,
];

/// Digit 0 selects the `"none"` sentinel, digits 1.. select `PATTERNS` in order.
fn pattern_for_digit(digit: usize) -> Option<&'static str> {
    match digit {
        0 => Some(patterns::NONE),
        n => PATTERNS.get(n - 1).map(|pattern| pattern.name),
    }
}

pub fn command_for_key(key: KeyCode) -> Option<Command> {
    let command = match key {
        KeyCode::Space => Command::ToggleRunning,
        KeyCode::ArrowRight => Command::Step,
        KeyCode::ArrowUp => Command::SpeedUp,
        KeyCode::ArrowDown => Command::SpeedDown,
        KeyCode::KeyC => Command::Clear,
        KeyCode::KeyR => Command::Randomize,
        key => {
            let digit = DIGIT_KEYS.iter().position(|&k| k == key)?;
            Command::ApplyPattern(pattern_for_digit(digit)?)
        }
    };
    Some(command)
}

/// Maps a cursor position on a surface of `surface` size to a (row, col).
///
/// The frame is stretched over the whole surface, so the position is scaled
/// back to frame pixels first. The result may lie outside the grid when the
/// cursor is outside the surface; `None` only for a zero-sized surface.
pub fn cell_at(position: PhysicalPosition<f64>, surface: PhysicalSize<u32>) -> Option<(i32, i32)> {
    if surface.width == 0 || surface.height == 0 {
        return None;
    }
    let scale = Vec2::new(
        FRAME_WIDTH as f32 / surface.width as f32,
        FRAME_HEIGHT as f32 / surface.height as f32,
    );
    let pixel = (Vec2::new(position.x as f32, position.y as f32) * scale).floor();
    let cell = (pixel / CELL_SIZE as f32).floor();
    Some((cell.y as i32, cell.x as i32))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f64, y: f64, width: u32, height: u32) -> Option<(i32, i32)> {
        cell_at(PhysicalPosition::new(x, y), PhysicalSize::new(width, height))
    }

    #[test]
    fn keyboard_shortcuts() {
        assert_eq!(command_for_key(KeyCode::Space), Some(Command::ToggleRunning));
        assert_eq!(command_for_key(KeyCode::ArrowRight), Some(Command::Step));
        assert_eq!(command_for_key(KeyCode::KeyC), Some(Command::Clear));
        assert_eq!(command_for_key(KeyCode::KeyR), Some(Command::Randomize));
        assert_eq!(command_for_key(KeyCode::ArrowLeft), None);
        assert_eq!(command_for_key(KeyCode::KeyQ), None);
    }

    #[test]
    fn digits_select_patterns() {
        assert_eq!(
            command_for_key(KeyCode::Digit0),
            Some(Command::ApplyPattern("none"))
        );
        assert_eq!(
            command_for_key(KeyCode::Digit1),
            Some(Command::ApplyPattern("glider"))
        );
        assert_eq!(
            command_for_key(KeyCode::Digit8),
            Some(Command::ApplyPattern("hline"))
        );
        assert_eq!(command_for_key(KeyCode::Digit9), None);
    }

    #[test]
    fn matching_surface_divides_by_cell_size() {
        assert_eq!(at(0.0, 0.0, 800, 800), Some((0, 0)));
        assert_eq!(at(13.5, 9.0, 800, 800), Some((2, 3)));
        assert_eq!(at(799.9, 799.9, 800, 800), Some((199, 199)));
    }

    #[test]
    fn larger_surface_is_scaled_down() {
        // 1600x400 surface: x halves, y doubles
        assert_eq!(at(800.0, 100.0, 1600, 400), Some((50, 100)));
    }

    #[test]
    fn outside_positions_fall_off_the_grid() {
        assert_eq!(at(-1.0, 10.0, 800, 800), Some((2, -1)));
        assert_eq!(at(10.0, 800.0, 800, 800), Some((200, 2)));
    }

    #[test]
    fn zero_sized_surface_maps_nothing() {
        assert_eq!(at(1.0, 1.0, 0, 800), None);
    }
}
