pub mod pointer;

use crate::render::DomRenderer;
use grid_core::{App, Handler, Scope, BINDINGS};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedApp = Rc<RefCell<App<DomRenderer>>>;

/// Install one listener per DOM event name for every entry of the binding
/// table.
pub fn wire_bindings(app: &SharedApp, document: &web::Document, grid: &web::HtmlElement) {
    for binding in BINDINGS {
        let target: &web::EventTarget = match binding.scope {
            Scope::Document => document.as_ref(),
            Scope::Grid => grid.as_ref(),
        };
        for name in binding.kind.dom_names() {
            wire_listener(target, name, binding.handler, app.clone());
        }
    }
}

fn wire_listener(target: &web::EventTarget, name: &str, handler: Handler, app: SharedApp) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        let Some(sample) = pointer::decode(&ev) else {
            log::trace!("[events] {:?}: unsupported event {}", handler, ev.type_());
            return;
        };
        let prevent = app.borrow_mut().dispatch(handler, &sample, Instant::now());
        if prevent {
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);

    if let Err(e) =
        target.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
    {
        log::error!("[events] failed to listen for {}: {:?}", name, e);
    }
    closure.forget();
}
