use crate::constants::{
    AXIS_OPACITY, CELL_EFFECT_RADIUS, CELL_OPACITY_DURATION, CELL_SCALE_DURATION, DIM_OPACITY,
    MAX_SCALE, SELECTED_FADE_DURATION, SELECTED_OPACITY,
};
use crate::input::{event_position, InputSample};
use crate::render::{ElementKind, OnComplete, RenderError, Renderer, StyleProp};
use glam::Vec2;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("grid size must be at least 1")]
    EmptyGrid,
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Position of one cell in the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub col: usize,
    pub row: usize,
}

/// Whether the pointer is currently held down over the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Idle,
    Active,
}

/// Center of a cell in grid-local pixels.
#[inline]
pub fn cell_center(cell: Cell, cell_size: f32) -> Vec2 {
    Vec2::new(
        (cell.col as f32 + 0.5) * cell_size,
        (cell.row as f32 + 0.5) * cell_size,
    )
}

/// Scale for a cell whose center is `distance` pixels from the pointer.
///
/// Interpolates linearly from `MAX_SCALE` at the pointer down to 1 at
/// `CELL_EFFECT_RADIUS` cell widths; anything farther stays at 1.
#[inline]
pub fn proximity_scale(distance: f32, cell_size: f32) -> f32 {
    let radius = CELL_EFFECT_RADIUS * cell_size;
    if radius <= 0.0 || distance > radius {
        return 1.0;
    }
    1.0 + (MAX_SCALE - 1.0) * (1.0 - distance / radius)
}

/// Index of the cell whose center is closest to `local`.
///
/// Ties go to the earliest cell in `cells`. Returns `None` only for an empty
/// slice.
#[inline]
pub fn nearest_cell(cells: &[Cell], local: Vec2, cell_size: f32) -> Option<usize> {
    let mut best = None::<(usize, f32)>;
    for (i, c) in cells.iter().enumerate() {
        let d = cell_center(*c, cell_size).distance(local);
        match best {
            Some((_, bd)) if d >= bd => {}
            _ => best = Some((i, d)),
        }
    }
    best.map(|(i, _)| i)
}

/// Square grid of cells with one selected cell and press-and-drag emphasis.
///
/// Cells live in a row-major store (`index = row * size + col`) alongside the
/// renderer element drawn for each of them.
#[derive(Debug)]
pub struct InteractiveGrid<E> {
    size: usize,
    cells: Vec<Cell>,
    elements: Vec<E>,
    selected: usize,
    session: Session,
}

impl<E: Clone> InteractiveGrid<E> {
    /// Build a `size` x `size` grid with the center cell selected and draw
    /// its resting appearance.
    pub fn create<R>(renderer: &mut R, size: usize) -> Result<Self, GridError>
    where
        R: Renderer<Element = E>,
    {
        if size == 0 {
            return Err(GridError::EmptyGrid);
        }
        let mid = size / 2;
        let center = mid * size + mid;

        let mut cells = Vec::with_capacity(size * size);
        let mut elements = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                let index = cells.len();
                elements.push(renderer.create_element(ElementKind::Cell {
                    index,
                    col,
                    row,
                    center: index == center,
                })?);
                cells.push(Cell { col, row });
            }
        }

        let grid = Self {
            size,
            cells,
            elements,
            selected: center,
            session: Session::Idle,
        };
        grid.apply_resting(renderer, false);
        Ok(grid)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn elements(&self) -> &[E] {
        &self.elements
    }

    pub fn session(&self) -> Session {
        self.session
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_cell(&self) -> Cell {
        self.cells[self.selected]
    }

    pub fn is_selected(&self, index: usize) -> bool {
        index == self.selected
    }

    #[inline]
    pub fn index_of(&self, col: usize, row: usize) -> Option<usize> {
        (col < self.size && row < self.size).then_some(row * self.size + col)
    }

    /// True when the cell shares a row or column with the selected cell.
    pub fn is_axis(&self, index: usize) -> bool {
        let sel = self.selected_cell();
        self.cells
            .get(index)
            .map(|c| c.col == sel.col || c.row == sel.row)
            .unwrap_or(false)
    }

    pub fn press<R>(&mut self, renderer: &mut R, sample: &InputSample)
    where
        R: Renderer<Element = E>,
    {
        self.session = Session::Active;
        self.handle_interaction_effect(renderer, sample);
    }

    pub fn pointer_move<R>(&mut self, renderer: &mut R, sample: &InputSample)
    where
        R: Renderer<Element = E>,
    {
        if self.session == Session::Active {
            self.handle_interaction_effect(renderer, sample);
        }
    }

    /// Commit the selection if a press was in progress, then settle.
    pub fn release<R>(&mut self, renderer: &mut R, sample: &InputSample)
    where
        R: Renderer<Element = E>,
    {
        if self.session == Session::Active {
            self.change_selected_cell(renderer, sample);
        }
        self.session = Session::Idle;
        self.reset_cells(renderer);
    }

    /// Pointer left the grid: drop the press without committing.
    pub fn leave<R>(&mut self, renderer: &mut R)
    where
        R: Renderer<Element = E>,
    {
        self.session = Session::Idle;
        self.reset_cells(renderer);
    }

    /// Scale non-selected cells up by their closeness to the pointer and dim
    /// everything else.
    pub fn handle_interaction_effect<R>(&self, renderer: &mut R, sample: &InputSample)
    where
        R: Renderer<Element = E>,
    {
        let Some(pos) = event_position(sample) else {
            log::trace!("[grid] interaction without position ignored");
            return;
        };

        renderer.animate(
            &self.elements[self.selected],
            &[StyleProp::Opacity(AXIS_OPACITY), StyleProp::Glow(false)],
            SELECTED_FADE_DURATION,
            OnComplete::Keep,
        );

        let rect = renderer.grid_rect();
        let cell_size = rect.cell_size(self.size);
        let local = rect.to_local(pos);

        for (i, cell) in self.cells.iter().enumerate() {
            if i == self.selected {
                continue;
            }
            let el = &self.elements[i];
            renderer.set_opacity(el, DIM_OPACITY, CELL_OPACITY_DURATION);
            let distance = cell_center(*cell, cell_size).distance(local);
            renderer.set_scale(el, proximity_scale(distance, cell_size), CELL_SCALE_DURATION);
        }
    }

    /// Select the cell nearest to the event position. Returns the new
    /// selection, or `None` when the event had no position.
    pub fn change_selected_cell<R>(&mut self, renderer: &R, sample: &InputSample) -> Option<usize>
    where
        R: Renderer<Element = E>,
    {
        let pos = event_position(sample)?;
        let rect = renderer.grid_rect();
        let local = rect.to_local(pos);
        let next = nearest_cell(&self.cells, local, rect.cell_size(self.size))?;

        let prev = self.cells[self.selected];
        self.selected = next;
        let cur = self.cells[next];
        log::debug!(
            "[grid] selection ({}, {}) -> ({}, {})",
            prev.col,
            prev.row,
            cur.col,
            cur.row
        );
        Some(next)
    }

    pub fn reset_cells<R>(&self, renderer: &mut R)
    where
        R: Renderer<Element = E>,
    {
        self.apply_resting(renderer, true);
    }

    /// Resting look: every cell at scale 1, the selected cell lit, its row and
    /// column at the axis baseline, the rest dimmed. Only the selected cell
    /// keeps a glow.
    fn apply_resting<R>(&self, renderer: &mut R, animated: bool)
    where
        R: Renderer<Element = E>,
    {
        let (scale_duration, selected_duration, opacity_duration) = if animated {
            (CELL_SCALE_DURATION, SELECTED_FADE_DURATION, CELL_OPACITY_DURATION)
        } else {
            (0.0, 0.0, 0.0)
        };

        for el in &self.elements {
            renderer.set_scale(el, 1.0, scale_duration);
        }

        renderer.animate(
            &self.elements[self.selected],
            &[StyleProp::Opacity(SELECTED_OPACITY), StyleProp::Glow(true)],
            selected_duration,
            OnComplete::Keep,
        );

        for (i, el) in self.elements.iter().enumerate() {
            if i == self.selected {
                continue;
            }
            let opacity = if self.is_axis(i) {
                AXIS_OPACITY
            } else {
                DIM_OPACITY
            };
            renderer.animate(
                el,
                &[StyleProp::Opacity(opacity), StyleProp::Glow(false)],
                opacity_duration,
                OnComplete::Keep,
            );
        }
    }
}
