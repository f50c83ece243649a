// Shared interaction tuning constants used by the grid and the pointer tracker.

// Grid layout
pub const GRID_SIZE: usize = 11; // cells per row and per column
pub const CELL_EFFECT_RADIUS: f32 = 4.0; // proximity radius, in cell widths
pub const MAX_SCALE: f32 = 4.0; // scale of a cell directly under the pointer

// Cell opacities
pub const SELECTED_OPACITY: f32 = 0.8;
pub const AXIS_OPACITY: f32 = 0.6; // cells sharing the selected row or column
pub const DIM_OPACITY: f32 = 0.2;

// Cell transition durations (seconds)
pub const CELL_SCALE_DURATION: f32 = 0.1;
pub const CELL_OPACITY_DURATION: f32 = 0.2;
pub const SELECTED_FADE_DURATION: f32 = 0.1;

// Follower
pub const FOLLOWER_PRESS_SCALE: f32 = 1.5;
pub const FOLLOWER_REST_SCALE: f32 = 1.0;
pub const FOLLOWER_SCALE_DURATION: f32 = 0.2;

// Ripple
pub const RIPPLE_END_SCALE: f32 = 2.5;
pub const RIPPLE_END_OPACITY: f32 = 0.0;
pub const RIPPLE_DURATION: f32 = 0.75;
