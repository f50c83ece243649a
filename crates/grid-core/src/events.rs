//! Event routing for the tracker and the grid.
//!
//! Every listener the front end installs comes from [`BINDINGS`], and every
//! dispatched event goes through [`App::dispatch`], so the whole interaction
//! state machine can be read in one place.

use crate::constants::GRID_SIZE;
use crate::grid::{GridError, InteractiveGrid};
use crate::input::InputSample;
use crate::render::Renderer;
use crate::tracker::PointerTracker;
use instant::Instant;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Press,
    Move,
    Release,
    Leave,
    DragStart,
}

impl EventKind {
    /// DOM event names that map onto this kind.
    pub fn dom_names(self) -> &'static [&'static str] {
        match self {
            EventKind::Press => &["mousedown", "touchstart"],
            EventKind::Move => &["mousemove", "touchmove"],
            EventKind::Release => &["mouseup", "touchend"],
            EventKind::Leave => &["mouseleave"],
            EventKind::DragStart => &["dragstart"],
        }
    }
}

/// Where a listener is attached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scope {
    Document,
    Grid,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Handler {
    TrackerMove,
    TrackerPress,
    TrackerRelease,
    SuppressDrag,
    GridPress,
    GridMove,
    GridRelease,
    GridLeave,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Binding {
    pub scope: Scope,
    pub kind: EventKind,
    pub handler: Handler,
}

const fn bind(scope: Scope, kind: EventKind, handler: Handler) -> Binding {
    Binding {
        scope,
        kind,
        handler,
    }
}

pub const BINDINGS: &[Binding] = &[
    bind(Scope::Document, EventKind::Move, Handler::TrackerMove),
    bind(Scope::Document, EventKind::Press, Handler::TrackerPress),
    bind(Scope::Document, EventKind::Release, Handler::TrackerRelease),
    bind(Scope::Document, EventKind::DragStart, Handler::SuppressDrag),
    bind(Scope::Grid, EventKind::Press, Handler::GridPress),
    bind(Scope::Grid, EventKind::Move, Handler::GridMove),
    bind(Scope::Document, EventKind::Release, Handler::GridRelease),
    bind(Scope::Grid, EventKind::Leave, Handler::GridLeave),
];

/// Renderer, pointer tracker and grid wired together.
pub struct App<R: Renderer> {
    renderer: R,
    tracker: PointerTracker<R::Element>,
    grid: InteractiveGrid<R::Element>,
}

impl<R: Renderer> App<R> {
    /// Set up the follower and build a grid of the default size.
    pub fn new(renderer: R) -> Result<Self, GridError> {
        Self::with_grid_size(renderer, GRID_SIZE)
    }

    pub fn with_grid_size(mut renderer: R, size: usize) -> Result<Self, GridError> {
        let mut tracker = PointerTracker::new();
        tracker.setup(&mut renderer)?;
        let grid = InteractiveGrid::create(&mut renderer, size)?;
        log::info!("[app] grid {}x{} ready", size, size);
        Ok(Self {
            renderer,
            tracker,
            grid,
        })
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn tracker(&self) -> &PointerTracker<R::Element> {
        &self.tracker
    }

    pub fn grid(&self) -> &InteractiveGrid<R::Element> {
        &self.grid
    }

    /// Run one handler. Returns `true` when the platform's default action
    /// for the event should be prevented.
    pub fn dispatch(&mut self, handler: Handler, sample: &InputSample, now: Instant) -> bool {
        let r = &mut self.renderer;
        match handler {
            Handler::TrackerMove => self.tracker.update_position(r, sample, now),
            Handler::TrackerPress => {
                if let Err(e) = self.tracker.create_ripple_effect(r, sample, now) {
                    log::warn!("[tracker] ripple skipped: {}", e);
                }
            }
            Handler::TrackerRelease => self.tracker.release(r),
            Handler::SuppressDrag => return true,
            Handler::GridPress => self.grid.press(r, sample),
            Handler::GridMove => self.grid.pointer_move(r, sample),
            Handler::GridRelease => self.grid.release(r, sample),
            Handler::GridLeave => self.grid.leave(r),
        }
        false
    }
}
