use crate::canvas::CanvasSurface;
use crate::overlay;
use globe_core::Globe;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub globe: Rc<RefCell<Globe>>,
    pub surface: Rc<RefCell<CanvasSurface>>,
    pub document: web::Document,
    pub running: Rc<Cell<bool>>,
    pub label_highlighted: bool,
}

impl FrameContext {
    pub fn frame(&mut self, now_ms: f64) {
        let report = {
            let mut surface = self.surface.borrow_mut();
            self.globe.borrow_mut().frame(now_ms, &mut *surface)
        };
        let Some(report) = report else {
            return;
        };
        if report.hover_highlighted && !self.label_highlighted {
            overlay::highlight_label(&self.document);
        }
        self.label_highlighted = report.hover_highlighted;
    }
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Drive `frame_ctx` from requestAnimationFrame until its `running` flag is
/// cleared.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Tick = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !frame_ctx.borrow().running.get() {
            log::info!("[frame] loop stopped");
            return;
        }
        frame_ctx.borrow_mut().frame(instant::now());
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Tick) {
    let Some(w) = web::window() else {
        return;
    };
    let cb = tick.borrow();
    let Some(cb) = cb.as_ref() else {
        return;
    };
    if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
        log::error!("[frame] requestAnimationFrame failed: {:?}", e);
    }
}
