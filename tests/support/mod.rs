// Recording renderer shared by the host-side tests.
// It applies every tween instantly so tests can inspect end states.

#![allow(dead_code)]
use glam::Vec2;
use grid_core::{
    ElementKind, GridRect, OnComplete, PointerPosition, RenderError, Renderer, StyleProp,
};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Visual {
    pub opacity: Option<f32>,
    pub scale: Option<f32>,
    pub glow: Option<bool>,
    pub position: Option<Vec2>,
    pub removal_scheduled: bool,
    pub removed: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnimateCall {
    pub element: usize,
    pub props: Vec<StyleProp>,
    pub duration: f32,
    pub on_complete: OnComplete,
}

#[derive(Default)]
pub struct RecordingRenderer {
    pub rect: GridRect,
    pub kinds: Vec<ElementKind>,
    pub visuals: Vec<Visual>,
    pub animations: Vec<AnimateCall>,
    pub fail_ripples: bool,
}

impl RecordingRenderer {
    pub fn new(rect: GridRect) -> Self {
        Self {
            rect,
            ..Default::default()
        }
    }

    /// 110px square grid at (10, 20): 10px cells for an 11x11 grid.
    pub fn standard() -> Self {
        Self::new(GridRect::new(10.0, 20.0, 110.0, 110.0))
    }

    /// Viewport position of a cell's center.
    pub fn cell_point(&self, col: usize, row: usize, grid_size: usize) -> Vec2 {
        let size = self.rect.cell_size(grid_size);
        Vec2::new(
            self.rect.left + (col as f32 + 0.5) * size,
            self.rect.top + (row as f32 + 0.5) * size,
        )
    }

    pub fn elements_of(&self, kind: ElementKind) -> Vec<usize> {
        self.kinds
            .iter()
            .enumerate()
            .filter(|(_, k)| **k == kind)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn clear_animations(&mut self) {
        self.animations.clear();
    }
}

impl Renderer for RecordingRenderer {
    type Element = usize;

    fn create_element(&mut self, kind: ElementKind) -> Result<usize, RenderError> {
        if self.fail_ripples && kind == ElementKind::Ripple {
            return Err(RenderError::CreateElement {
                kind,
                message: "ripples disabled".to_string(),
            });
        }
        self.kinds.push(kind);
        self.visuals.push(Visual::default());
        Ok(self.kinds.len() - 1)
    }

    fn remove_element(&mut self, element: &usize) {
        self.visuals[*element].removed = true;
    }

    fn set_position(&mut self, element: &usize, pos: PointerPosition) {
        self.visuals[*element].position = Some(pos);
    }

    fn animate(
        &mut self,
        element: &usize,
        props: &[StyleProp],
        duration: f32,
        on_complete: OnComplete,
    ) {
        let v = &mut self.visuals[*element];
        for p in props {
            match *p {
                StyleProp::Opacity(o) => v.opacity = Some(o),
                StyleProp::Scale(s) => v.scale = Some(s),
                StyleProp::Glow(g) => v.glow = Some(g),
            }
        }
        if on_complete == OnComplete::Remove {
            v.removal_scheduled = true;
        }
        self.animations.push(AnimateCall {
            element: *element,
            props: props.to_vec(),
            duration,
            on_complete,
        });
    }

    fn grid_rect(&self) -> GridRect {
        self.rect
    }
}

pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}
