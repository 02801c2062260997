//! Drawing interface the game entities render through.

use super::grid::Position;

/// An RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const BACKGROUND_COLOR: Rgb = Rgb(0, 0, 0);
pub const BORDER_COLOR: Rgb = Rgb(93, 216, 228);
pub const APPLE_COLOR: Rgb = Rgb(255, 0, 0);
pub const SNAKE_COLOR: Rgb = Rgb(0, 255, 0);

/// A surface made of grid cells
pub trait Canvas {
    /// Paint one cell
    fn draw_cell(&mut self, position: Position, fill: Rgb, border: Rgb);

    /// Erase one cell back to the background
    fn clear_cell(&mut self, position: Position);

    /// Erase the whole surface
    fn clear(&mut self);
}

/// Something that knows how to paint itself onto a [`Canvas`]
pub trait Renderable {
    fn draw(&self, canvas: &mut dyn Canvas);
}
