//! One-shot startup fetches.

use crate::constants::{COUNTRY_NAMES_URL, DESTINATION_SHEET, SPREADSHEET_ID, WORLD_URL};
use globe_core::constants::DEFAULT_DESTINATION;
use globe_core::sheet::{cell_a2_url, parse_destination, parse_percentage, sheet_csv_url};
use globe_core::{NameTable, World};
use gloo_net::http::Request;

pub async fn fetch_text(url: &str) -> anyhow::Result<String> {
    let resp = Request::get(url)
        .send()
        .await
        .map_err(|e| anyhow::anyhow!("GET {}: {}", url, e))?;
    if !resp.ok() {
        anyhow::bail!("GET {} returned HTTP {}", url, resp.status());
    }
    resp.text()
        .await
        .map_err(|e| anyhow::anyhow!("reading {}: {}", url, e))
}

pub async fn fetch_world() -> anyhow::Result<World> {
    let json = fetch_text(WORLD_URL).await?;
    let world = World::from_topojson(&json)?;
    log::info!(
        "[load] world: {} countries, {} land polygons",
        world.countries.len(),
        world.land.len()
    );
    Ok(world)
}

pub async fn fetch_names() -> anyhow::Result<NameTable> {
    let tsv = fetch_text(COUNTRY_NAMES_URL).await?;
    let names = NameTable::from_tsv(&tsv)?;
    log::info!("[load] {} country names", names.len());
    Ok(names)
}

/// Uppercased destination name. Never fails: errors fall back to the default.
pub async fn fetch_destination_name() -> String {
    match fetch_text(&sheet_csv_url(SPREADSHEET_ID, DESTINATION_SHEET)).await {
        Ok(csv) => parse_destination(&csv),
        Err(e) => {
            log::error!("[load] destination fetch failed: {:?}", e);
            DEFAULT_DESTINATION.to_string()
        }
    }
}

/// Percentage held in cell A2 of `sheet`, 0 on any failure.
pub async fn fetch_percentage(sheet: &str) -> f64 {
    match fetch_text(&cell_a2_url(SPREADSHEET_ID, sheet)).await {
        Ok(csv) => parse_percentage(&csv, sheet),
        Err(e) => {
            log::error!("[charts] fetch of sheet {} failed: {:?}", sheet, e);
            0.0
        }
    }
}
