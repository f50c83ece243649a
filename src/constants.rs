/// DOM hooks and presentation strings for the web front end.
///
/// Class names must match the page stylesheet.
// Elements
pub const GRID_ELEMENT_ID: &str = "grid";
pub const FOLLOWER_CLASS: &str = "cursor";
pub const RIPPLE_CLASS: &str = "ripple";
pub const CELL_CLASS: &str = "cell";
pub const CENTER_CLASS: &str = "center";
pub const CELL_INDEX_ATTR: &str = "data-index";

// Glow around the selected cell (box-shadow)
pub const GLOW_ON: &str = "0 0 5px 1px rgb(255, 255, 255)";
pub const GLOW_OFF: &str = "0 0 5px 1px rgba(255, 255, 255, 0)";

// Transition easing for every tween
pub const EASING: &str = "ease-out";

// Follower and ripples are centered on the pointer
pub const CENTERING_TRANSFORM: &str = "translate(-50%, -50%)";

pub const LOG_LEVEL: log::Level = log::Level::Info;
