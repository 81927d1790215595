//! Page ids, remote data locations and layout fallbacks.

// Elements the page provides
pub const CANVAS_ID: &str = "globe";
pub const COUNTRY_LABEL_ID: &str = "countryLabel";
pub const DESTINATION_CARD_ID: &str = "destination-card";
pub const DESTINATION_NAME_SELECTOR: &str = ".destination-name-content";
pub const INFO_PANEL_ID: &str = "panel-bottom";
pub const PROGRESS_BAR_ID: &str = "progress-bar-container";

/// Canvas attribute holding an optional JSON `GlobeConfig` override.
pub const CONFIG_ATTRIBUTE: &str = "data-config";

// Remote data
pub const WORLD_URL: &str = "https://unpkg.com/world-atlas@2.0.2/countries-110m.json";
pub const COUNTRY_NAMES_URL: &str = "https://gist.githubusercontent.com/mbostock/4090846/raw/07e73f3c2d21558489604a0bc434b3a5cf41a867/world-country-names.tsv";
pub const SPREADSHEET_ID: &str = "1quphFwoVMjelWgxaF9jQi2qrAlHBir4Kc0LRUZRtaoY";
pub const DESTINATION_SHEET: &str = "DESTINO";

// Info panel image, pinned to the bottom-right corner
pub const INFO_IMAGE_URL: &str =
    "https://static.wixstatic.com/media/a6967f_034c4bb41e814fc7b03969408024e9a1~mv2.png";
pub const INFO_IMAGE_ALT: &str = "Image Multiwasher";
pub const INFO_IMAGE_CLASS: &str = "info-image-container";

/// Share of the viewport height used when the canvas has no CSS size.
pub const VIEWPORT_FALLBACK_RATIO: f64 = 0.6;

/// Label color while a non-route country is highlighted.
pub const LABEL_HIGHLIGHT_COLOR: &str = "white";
