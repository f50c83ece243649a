#![cfg(target_arch = "wasm32")]
use crate::constants::{GRID_ELEMENT_ID, LOG_LEVEL};
use grid_core::constants::GRID_SIZE;
use grid_core::App;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod events;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(LOG_LEVEL).ok();
    log::info!("pointer-grid-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    // Listeners are global; installing them twice would double every effect.
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let grid = dom::html_element_by_id(&document, GRID_ELEMENT_ID)?;
    dom::set_grid_template(&grid, GRID_SIZE);

    let renderer = render::DomRenderer::new(document.clone(), grid.clone())?;
    let app = Rc::new(RefCell::new(App::new(renderer)?));
    events::wire_bindings(&app, &document, &grid);
    Ok(())
}
