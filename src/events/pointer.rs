use super::Wiring;
use crate::dom;
use crate::input;
use crate::overlay;
use glam::DVec2;
use globe_core::ScreenPoint;
use web_sys as web;

pub fn wire_pointer_handlers(w: &Wiring) {
    // pointer events keep flowing during touch drags
    dom::set_style(&w.canvas, "touch-action", "none");
    wire_pointerdown(w);
    wire_pointermove(w);
    wire_pointerup(w);
    wire_click(w);
}

fn canvas_point(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> ScreenPoint {
    let rect = canvas.get_bounding_client_rect();
    let p = input::client_to_canvas(
        DVec2::new(ev.client_x() as f64, ev.client_y() as f64),
        DVec2::new(rect.left(), rect.top()),
        DVec2::new(rect.width(), rect.height()),
        DVec2::new(canvas.width() as f64, canvas.height() as f64),
    );
    ScreenPoint::new(p.x, p.y)
}

fn wire_pointerdown(w: &Wiring) {
    let w = w.clone();
    let target = w.canvas.clone();
    dom::listen(&target, "pointerdown", move |ev: web::PointerEvent| {
        if !w.running.get() {
            return;
        }
        let at = canvas_point(&ev, &w.canvas);
        w.globe.borrow_mut().pointer_down(at, instant::now());
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    });
}

fn wire_pointermove(w: &Wiring) {
    let w = w.clone();
    let target = w.canvas.clone();
    dom::listen(&target, "pointermove", move |ev: web::PointerEvent| {
        if !w.running.get() {
            return;
        }
        let at = canvas_point(&ev, &w.canvas);
        let mut globe = w.globe.borrow_mut();
        globe.pointer_drag(at);
        if let Some(change) = globe.hover_at(at) {
            overlay::set_country_label(&w.document, &change.label);
        }
    });
}

fn wire_pointerup(w: &Wiring) {
    let target = w.canvas.clone();
    for event in ["pointerup", "pointercancel"] {
        let w = w.clone();
        dom::listen(&target, event, move |ev: web::PointerEvent| {
            if !w.running.get() {
                return;
            }
            w.globe.borrow_mut().pointer_up(instant::now());
            _ = w.canvas.release_pointer_capture(ev.pointer_id());
        });
    }
}

fn wire_click(w: &Wiring) {
    let w = w.clone();
    let target = w.canvas.clone();
    dom::listen(&target, "click", move |_: web::MouseEvent| {
        if w.running.get() {
            w.globe.borrow_mut().click(instant::now());
        }
    });
}
