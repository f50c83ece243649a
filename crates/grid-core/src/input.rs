use glam::Vec2;
use smallvec::SmallVec;

/// Viewport-space pointer position in CSS pixels.
pub type PointerPosition = Vec2;

/// Touch point lists are almost always one or two entries long.
pub type TouchList = SmallVec<[PointerPosition; 2]>;

/// Platform-neutral snapshot of a single press/move/release event.
#[derive(Clone, Debug, PartialEq)]
pub enum InputSample {
    Mouse {
        x: f32,
        y: f32,
    },
    Touch {
        /// Touches still in contact with the surface.
        touches: TouchList,
        /// Touches that changed in this event (the lifted ones on touchend).
        changed: TouchList,
    },
}

impl InputSample {
    #[inline]
    pub fn mouse(x: f32, y: f32) -> Self {
        Self::Mouse { x, y }
    }

    pub fn touch(touches: &[PointerPosition], changed: &[PointerPosition]) -> Self {
        Self::Touch {
            touches: touches.iter().copied().collect(),
            changed: changed.iter().copied().collect(),
        }
    }
}

/// Decode the position an event refers to.
///
/// Touch events prefer the first active touch and fall back to the first
/// changed touch, so a `touchend` still reports where the finger lifted.
/// Returns `None` when a touch event carries no touch data at all; callers
/// ignore such events.
#[inline]
pub fn event_position(sample: &InputSample) -> Option<PointerPosition> {
    match sample {
        InputSample::Mouse { x, y } => Some(Vec2::new(*x, *y)),
        InputSample::Touch { touches, changed } => {
            touches.first().or_else(|| changed.first()).copied()
        }
    }
}

/// Bounding box of the grid container in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GridRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl GridRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Grid-relative position (origin at the top-left corner).
    #[inline]
    pub fn to_local(&self, pos: PointerPosition) -> Vec2 {
        Vec2::new(pos.x - self.left, pos.y - self.top)
    }

    /// Edge length of one cell; the grid is assumed square.
    #[inline]
    pub fn cell_size(&self, grid_size: usize) -> f32 {
        self.width / grid_size.max(1) as f32
    }
}
