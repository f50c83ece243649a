use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn html_element_by_id(
    document: &web::Document,
    id: &str,
) -> anyhow::Result<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow!("#{} is not an HtmlElement: {:?}", id, e))
}

/// Lay the container out as `size` equal columns and rows.
pub fn set_grid_template(grid: &web::HtmlElement, size: usize) {
    let style = grid.style();
    let tracks = format!("repeat({}, 1fr)", size);
    _ = style.set_property("grid-template-columns", &tracks);
    _ = style.set_property("grid-template-rows", &tracks);
}

/// Run `f` once after `delay_ms`. The callback is handed to JS and freed
/// after it fires.
pub fn set_timeout_once(delay_ms: i32, f: impl FnOnce() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let cb = wasm_bindgen::closure::Closure::once_into_js(f);
    if let Err(e) = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms)
    {
        log::error!("setTimeout failed: {:?}", e);
    }
}
