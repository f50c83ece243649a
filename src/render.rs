//! DOM implementation of the core `Renderer`.
//!
//! Tweens are CSS transitions: each animate call rewrites the element's
//! `transition` list with per-property durations and then sets the end
//! values, so a later call on the same property simply retargets it.

use crate::constants::*;
use crate::dom;
use fnv::FnvHashMap;
use grid_core::{
    ElementKind, GridRect, OnComplete, PointerPosition, RenderError, Renderer, StyleProp,
};
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone, Debug)]
pub struct DomElement {
    id: u32,
    el: web::HtmlElement,
}

#[derive(Clone, Copy, Debug, Default)]
struct Tween<T> {
    value: T,
    duration: f32,
}

/// Last written value and duration per property, kept so one property can be
/// retargeted without clobbering the transitions of the others.
#[derive(Clone, Debug, Default)]
struct ElementStyle {
    centered: bool,
    fresh: bool,
    opacity: Option<Tween<f32>>,
    scale: Option<Tween<f32>>,
    glow: Option<Tween<bool>>,
}

impl ElementStyle {
    fn apply(&mut self, props: &[StyleProp], duration: f32) {
        for p in props {
            match *p {
                StyleProp::Opacity(value) => self.opacity = Some(Tween { value, duration }),
                StyleProp::Scale(value) => self.scale = Some(Tween { value, duration }),
                StyleProp::Glow(value) => self.glow = Some(Tween { value, duration }),
            }
        }
    }

    fn transition(&self) -> String {
        let mut parts = Vec::with_capacity(3);
        if let Some(t) = self.opacity {
            parts.push(format!("opacity {}s {}", t.duration, EASING));
        }
        if let Some(t) = self.scale {
            parts.push(format!("transform {}s {}", t.duration, EASING));
        }
        if let Some(t) = self.glow {
            parts.push(format!("box-shadow {}s {}", t.duration, EASING));
        }
        parts.join(", ")
    }

    fn transform(&self) -> Option<String> {
        let scale = self.scale?.value;
        Some(if self.centered {
            format!("{} scale({})", CENTERING_TRANSFORM, scale)
        } else {
            format!("scale({})", scale)
        })
    }
}

#[inline]
fn describe(e: impl std::fmt::Debug) -> String {
    format!("{:?}", e)
}

pub struct DomRenderer {
    document: web::Document,
    body: web::HtmlElement,
    grid: web::HtmlElement,
    styles: FnvHashMap<u32, ElementStyle>,
    next_id: u32,
}

impl DomRenderer {
    pub fn new(document: web::Document, grid: web::HtmlElement) -> Result<Self, RenderError> {
        let body = document
            .body()
            .ok_or_else(|| RenderError::MissingContainer("body".to_string()))?;
        Ok(Self {
            document,
            body,
            grid,
            styles: FnvHashMap::default(),
            next_id: 0,
        })
    }

    fn build(&self, kind: ElementKind) -> Result<web::HtmlElement, String> {
        let el = self
            .document
            .create_element("div")
            .map_err(describe)?
            .dyn_into::<web::HtmlElement>()
            .map_err(describe)?;
        let classes = el.class_list();
        let parent = match kind {
            ElementKind::Follower => {
                classes.add_1(FOLLOWER_CLASS).map_err(describe)?;
                &self.body
            }
            ElementKind::Ripple => {
                classes.add_1(RIPPLE_CLASS).map_err(describe)?;
                &self.body
            }
            ElementKind::Cell { index, center, .. } => {
                classes.add_1(CELL_CLASS).map_err(describe)?;
                if center {
                    classes.add_1(CENTER_CLASS).map_err(describe)?;
                }
                el.set_attribute(CELL_INDEX_ATTR, &index.to_string())
                    .map_err(describe)?;
                &self.grid
            }
        };
        parent.append_child(&el).map_err(describe)?;
        Ok(el)
    }
}

impl Renderer for DomRenderer {
    type Element = DomElement;

    fn create_element(&mut self, kind: ElementKind) -> Result<DomElement, RenderError> {
        let el = self
            .build(kind)
            .map_err(|message| RenderError::CreateElement { kind, message })?;
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.styles.insert(
            id,
            ElementStyle {
                centered: matches!(kind, ElementKind::Follower | ElementKind::Ripple),
                fresh: true,
                ..Default::default()
            },
        );
        Ok(DomElement { id, el })
    }

    fn remove_element(&mut self, element: &DomElement) {
        self.styles.remove(&element.id);
        element.el.remove();
    }

    fn set_position(&mut self, element: &DomElement, pos: PointerPosition) {
        let style = element.el.style();
        _ = style.set_property("left", &format!("{}px", pos.x));
        _ = style.set_property("top", &format!("{}px", pos.y));
    }

    fn animate(
        &mut self,
        element: &DomElement,
        props: &[StyleProp],
        duration: f32,
        on_complete: OnComplete,
    ) {
        let Some(state) = self.styles.get_mut(&element.id) else {
            return;
        };
        if state.fresh {
            // Flush the initial computed style so the first tween animates
            // instead of jumping to its end value.
            _ = element.el.offset_width();
            state.fresh = false;
        }
        state.apply(props, duration);

        let style = element.el.style();
        _ = style.set_property("transition", &state.transition());
        if let Some(t) = state.opacity {
            _ = style.set_property("opacity", &t.value.to_string());
        }
        if let Some(transform) = state.transform() {
            _ = style.set_property("transform", &transform);
        }
        if let Some(t) = state.glow {
            _ = style.set_property("box-shadow", if t.value { GLOW_ON } else { GLOW_OFF });
        }

        if on_complete == OnComplete::Remove {
            self.styles.remove(&element.id);
            let el = element.el.clone();
            dom::set_timeout_once((duration * 1000.0).round() as i32, move || el.remove());
        }
    }

    fn grid_rect(&self) -> GridRect {
        let rect = self.grid.get_bounding_client_rect();
        GridRect::new(
            rect.left() as f32,
            rect.top() as f32,
            rect.width() as f32,
            rect.height() as f32,
        )
    }
}
