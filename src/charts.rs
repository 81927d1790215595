//! Spreadsheet-fed chart panels. Values are fetched once and cached so a
//! resize only redraws.

use crate::canvas::CanvasSurface;
use crate::constants::PROGRESS_BAR_ID;
use crate::dom;
use crate::net;
use globe_core::charts::{
    draw_donut, draw_progress_bar, BarLayout, ChartPanel, DonutLayout, DONUT_FALLBACK_SIZE,
    PANELS, PROGRESS_SHEET,
};
use globe_core::Rgb;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[derive(Clone, Copy, Debug, Default)]
struct ChartValues {
    panels: [f64; PANELS.len()],
    progress: f64,
}

#[derive(Clone)]
pub struct Charts {
    document: web::Document,
    bar_color: Rgb,
    values: Rc<RefCell<Option<ChartValues>>>,
}

impl Charts {
    pub fn new(document: web::Document, bar_color: Rgb) -> Self {
        Self {
            document,
            bar_color,
            values: Rc::new(RefCell::new(None)),
        }
    }

    /// Fetch every sheet in the background, then draw.
    pub fn load(&self) {
        let charts = self.clone();
        spawn_local(async move {
            let mut values = ChartValues::default();
            for (slot, panel) in values.panels.iter_mut().zip(PANELS.iter()) {
                *slot = net::fetch_percentage(panel.sheet).await;
            }
            values.progress = net::fetch_percentage(PROGRESS_SHEET).await;
            log::info!("[charts] loaded {:?}", values);
            *charts.values.borrow_mut() = Some(values);
            charts.redraw();
        });
    }

    /// Redraw from cached values; a no-op until the first load completes.
    pub fn redraw(&self) {
        let Some(values) = *self.values.borrow() else {
            return;
        };
        for (panel, &pct) in PANELS.iter().zip(values.panels.iter()) {
            if let Err(e) = self.draw_panel(panel, pct) {
                log::warn!("[charts] {} not drawn: {:?}", panel.container_id, e);
            }
        }
        if let Err(e) = self.draw_bar(values.progress) {
            log::warn!("[charts] progress bar not drawn: {:?}", e);
        }
    }

    fn draw_panel(&self, panel: &ChartPanel, pct: f64) -> anyhow::Result<()> {
        let Some(container) = self.document.get_element_by_id(panel.container_id) else {
            return Ok(());
        };
        container.set_inner_html("");
        let rect = container.get_bounding_client_rect();
        let Some(layout) = DonutLayout::fit(rect.width(), rect.height()) else {
            let min = format!("{DONUT_FALLBACK_SIZE}px");
            dom::set_style(&container, "min-width", &min);
            dom::set_style(&container, "min-height", &min);
            return Ok(());
        };
        let mut surface = CanvasSurface::append_to(&self.document, &container, layout.size, layout.size)?;
        draw_donut(&mut surface, &layout, pct, panel.color);
        Ok(())
    }

    fn draw_bar(&self, pct: f64) -> anyhow::Result<()> {
        let Some(container) = self.document.get_element_by_id(PROGRESS_BAR_ID) else {
            return Ok(());
        };
        container.set_inner_html("");
        let width = container
            .dyn_ref::<web::HtmlElement>()
            .map(|el| el.offset_width() as f64)
            .unwrap_or(0.0);
        let layout = BarLayout::fit(width);
        let mut surface = CanvasSurface::append_to(&self.document, &container, layout.width, layout.height)?;
        draw_progress_bar(&mut surface, &layout, pct, self.bar_color);
        Ok(())
    }
}
