//! Rendering capability consumed by the tracker and the grid.
//!
//! The core never touches a concrete surface. A platform front end implements
//! [`Renderer`] on top of whatever it draws with (the web front end uses DOM
//! elements and CSS transitions) and the core drives it through element
//! handles it does not inspect.

use crate::input::{GridRect, PointerPosition};
use thiserror::Error;

/// What a renderer element stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementKind {
    /// Indicator that follows the pointer.
    Follower,
    /// Transient press feedback.
    Ripple,
    /// One grid cell. `index` is the row-major slot in the cell store and is
    /// the only link the renderer keeps back to the cell.
    Cell {
        index: usize,
        col: usize,
        row: usize,
        center: bool,
    },
}

/// Animatable style property with its end value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StyleProp {
    Opacity(f32),
    Scale(f32),
    /// Highlight ring shown around the selected cell.
    Glow(bool),
}

/// What happens to the element once its animation finishes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OnComplete {
    #[default]
    Keep,
    Remove,
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create {kind:?} element: {message}")]
    CreateElement { kind: ElementKind, message: String },
    #[error("grid container `{0}` not found")]
    MissingContainer(String),
}

pub trait Renderer {
    type Element: Clone;

    fn create_element(&mut self, kind: ElementKind) -> Result<Self::Element, RenderError>;

    /// Detach an element. Called again for an element the renderer already
    /// removed on completion, which must be a no-op.
    fn remove_element(&mut self, element: &Self::Element);

    /// Move an element immediately (not animated).
    fn set_position(&mut self, element: &Self::Element, pos: PointerPosition);

    /// Tween `props` toward their end values over `duration` seconds.
    ///
    /// A later call on the same element overrides any in-flight tween of the
    /// same property. A zero duration applies the values at once.
    fn animate(
        &mut self,
        element: &Self::Element,
        props: &[StyleProp],
        duration: f32,
        on_complete: OnComplete,
    );

    /// Current bounding box of the grid container.
    fn grid_rect(&self) -> GridRect;

    #[inline]
    fn set_opacity(&mut self, element: &Self::Element, opacity: f32, duration: f32) {
        self.animate(element, &[StyleProp::Opacity(opacity)], duration, OnComplete::Keep);
    }

    #[inline]
    fn set_scale(&mut self, element: &Self::Element, scale: f32, duration: f32) {
        self.animate(element, &[StyleProp::Scale(scale)], duration, OnComplete::Keep);
    }
}
