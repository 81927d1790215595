use crate::constants::VIEWPORT_FALLBACK_RATIO;
use crate::input;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Attach a listener for the lifetime of the page.
pub fn listen<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("[dom] could not listen for {}: {:?}", event, e);
    }
    closure.forget();
}

/// Match the canvas backing store to its CSS box and return the size used.
/// A canvas without layout falls back to a share of the viewport height.
pub fn sync_canvas_size(canvas: &web::HtmlCanvasElement) -> (f64, f64) {
    let viewport_h = window_document()
        .and_then(|d| d.document_element())
        .map(|el| el.client_height() as f64)
        .unwrap_or(0.0);
    let w = input::canvas_extent(canvas.offset_width() as f64, viewport_h, VIEWPORT_FALLBACK_RATIO);
    let h = input::canvas_extent(canvas.offset_height() as f64, viewport_h, VIEWPORT_FALLBACK_RATIO);
    canvas.set_width(w.max(1.0) as u32);
    canvas.set_height(h.max(1.0) as u32);
    (w, h)
}

pub fn set_style(el: &web::Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        if let Err(e) = html.style().set_property(property, value) {
            log::warn!("[dom] style {}={} failed: {:?}", property, value, e);
        }
    }
}

pub fn create_element(document: &web::Document, tag: &str) -> anyhow::Result<web::Element> {
    document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create <{}>: {:?}", tag, e))
}

pub fn append(parent: &web::Element, child: &web::Element) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!("append_child: {:?}", e))
}
