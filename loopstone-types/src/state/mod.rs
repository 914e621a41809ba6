pub mod editor;
pub mod grid;
pub mod music;
pub mod palette;

pub use editor::*;
pub use grid::*;
pub use music::*;
pub use palette::*;
