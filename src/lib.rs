//! **snake_maze** carves perfect mazes, walks an escape track through them and drives a snake
//! sliding along that track.

pub mod animation;
pub mod cells;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod grid_dimensions;
pub mod grid_displays;
pub mod maze;
pub mod pathing;
pub mod renderers;
pub mod units;

pub use crate::animation::step_animation;
pub use crate::generators::build_maze;
pub use crate::pathing::find_track as find_path;
