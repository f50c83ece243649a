pub mod constants;
pub mod events;
pub mod grid;
pub mod input;
pub mod render;
pub mod tracker;

pub use events::*;
pub use grid::*;
pub use input::*;
pub use render::*;
pub use tracker::*;
