pub mod pointer;

use crate::canvas::CanvasSurface;
use crate::charts::Charts;
use crate::dom;
use globe_core::Globe;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

pub use pointer::wire_pointer_handlers;

/// Everything an event handler may touch.
#[derive(Clone)]
pub struct Wiring {
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub globe: Rc<RefCell<Globe>>,
    pub surface: Rc<RefCell<CanvasSurface>>,
    pub charts: Charts,
    pub running: Rc<Cell<bool>>,
}

/// Fit canvas and projection to the current layout, repaint, redraw charts.
pub fn rescale(w: &Wiring) {
    let (width, height) = dom::sync_canvas_size(&w.canvas);
    let mut globe = w.globe.borrow_mut();
    let used = globe.resize(width, height);
    log::info!("[resize] {:.0}x{:.0}", used.0, used.1);
    globe.render(instant::now(), &mut *w.surface.borrow_mut());
    drop(globe);
    w.charts.redraw();
}

pub fn wire_resize(w: &Wiring) {
    let Some(window) = web::window() else {
        return;
    };
    let w = w.clone();
    dom::listen(&window, "resize", move |_: web::Event| {
        if w.running.get() {
            rescale(&w);
        }
    });
}
