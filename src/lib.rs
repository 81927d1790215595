#![cfg(target_arch = "wasm32")]
use crate::canvas::CanvasSurface;
use crate::constants::{CANVAS_ID, CONFIG_ATTRIBUTE};
use globe_core::{Globe, GlobeConfig};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod canvas;
mod charts;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod net;
mod overlay;

/// A running globe on the page. Its listeners and frame loop stay registered
/// but go inert once [`GlobeApp::shutdown`] has been called.
pub struct GlobeApp {
    globe: Rc<RefCell<Globe>>,
    running: Rc<Cell<bool>>,
}

impl GlobeApp {
    pub fn shutdown(&self) {
        if self.running.replace(false) {
            self.globe.borrow_mut().stop();
            log::info!("[app] globe stopped");
        }
    }
}

thread_local! {
    static APP: RefCell<Option<GlobeApp>> = const { RefCell::new(None) };
}

/// Install `app` as the current globe, stopping the previous one first.
fn replace_app(app: GlobeApp) {
    APP.with(|slot| {
        if let Some(prev) = slot.borrow_mut().replace(app) {
            prev.shutdown();
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("globe-web starting");
    spawn_init();
    Ok(())
}

/// Tear down the current globe and build a new one from fresh data.
#[wasm_bindgen]
pub fn reload() {
    spawn_init();
}

/// Stop the current globe without replacing it.
#[wasm_bindgen]
pub fn shutdown() {
    APP.with(|slot| {
        if let Some(app) = slot.borrow_mut().take() {
            app.shutdown();
        }
    });
}

fn spawn_init() {
    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
}

fn read_config(canvas: &web::HtmlCanvasElement) -> GlobeConfig {
    let Some(json) = canvas.get_attribute(CONFIG_ATTRIBUTE) else {
        return GlobeConfig::default();
    };
    GlobeConfig::from_json(&json).unwrap_or_else(|e| {
        log::warn!("[config] ignoring {}: {}", CONFIG_ATTRIBUTE, e);
        GlobeConfig::default()
    })
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let surface = Rc::new(RefCell::new(CanvasSurface::from_canvas(&canvas)?));
    let config = read_config(&canvas);

    // first paint needs the geometry and names; the destination may default
    let world = net::fetch_world().await?;
    let names = net::fetch_names().await?;
    let destination = net::fetch_destination_name().await;

    let bar_color = config.colors.origin;
    let globe = Rc::new(RefCell::new(Globe::new(config, world, names, &destination)));
    let running = Rc::new(Cell::new(true));
    replace_app(GlobeApp {
        globe: globe.clone(),
        running: running.clone(),
    });

    if let Err(e) = overlay::setup_info_panel(&document) {
        log::warn!("[overlay] info panel: {:?}", e);
    }
    let charts = charts::Charts::new(document.clone(), bar_color);
    charts.load();

    let wiring = events::Wiring {
        canvas,
        document: document.clone(),
        globe: globe.clone(),
        surface: surface.clone(),
        charts,
        running: running.clone(),
    };
    events::wire_pointer_handlers(&wiring);
    events::wire_resize(&wiring);
    events::rescale(&wiring);

    globe.borrow_mut().start(instant::now());
    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext {
        globe: globe.clone(),
        surface,
        document: document.clone(),
        running,
        label_highlighted: false,
    })));

    overlay::set_destination_card(&document, globe.borrow().destination_name());
    Ok(())
}
