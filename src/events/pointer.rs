use glam::Vec2;
use grid_core::{InputSample, TouchList};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn touch_positions(list: &web::TouchList) -> TouchList {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|t| Vec2::new(t.client_x() as f32, t.client_y() as f32))
        .collect()
}

/// Convert a DOM mouse or touch event into a core input sample.
///
/// Touch events are recognised by their `touches` property rather than by
/// `instanceof TouchEvent`, which is undefined on some desktop browsers.
pub fn decode(ev: &web::Event) -> Option<InputSample> {
    if let Some(m) = ev.dyn_ref::<web::MouseEvent>() {
        return Some(InputSample::mouse(m.client_x() as f32, m.client_y() as f32));
    }
    if js_sys::Reflect::has(ev, &JsValue::from_str("touches")).unwrap_or(false) {
        let t = ev.unchecked_ref::<web::TouchEvent>();
        return Some(InputSample::Touch {
            touches: touch_positions(&t.touches()),
            changed: touch_positions(&t.changed_touches()),
        });
    }
    None
}
