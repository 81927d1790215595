// Shared tuning constants for the globe widget. `GlobeConfig::default()` reads
// its values from here; the rest are fixed parts of the visual design.

// Rotation
pub const DEGREES_PER_SECOND: f64 = 20.0; // auto-rotation rate
pub const DRAG_SENSITIVITY: f64 = 0.25; // degrees per pointer pixel

// Ripples
pub const RIPPLE_MAX_RADIUS: f64 = 20.0; // px at the end of a ripple's life
pub const RIPPLE_DURATION_MS: f64 = 2000.0;
pub const RIPPLE_INTERVAL_MS: f64 = 800.0; // per emitter
pub const RIPPLE_LINE_WIDTH: f64 = 2.0;

// Route arc
pub const ARC_LINE_WIDTH: f64 = 1.5;
pub const ARC_DASH: [f64; 2] = [4.0, 6.0]; // dash length, gap
pub const DASH_SPEED_PX_PER_MS: f64 = 0.02; // marching-ants speed
pub const DESTINATION_MARKER_RADIUS: f64 = 4.0;

// Path generation
pub const MAX_SEGMENT_DEGREES: f64 = 2.0; // great-circle densification step

// Viewport
pub const FALLBACK_VIEW_SIZE: f64 = 480.0; // used when the canvas reports 0 px

// Projection defaults before the first resize (same as d3-geo)
pub const DEFAULT_SCALE: f64 = 249.5;
pub const DEFAULT_TRANSLATE: [f64; 2] = [480.0, 250.0];

// Selection
pub const ORIGIN_COUNTRY: &str = "Portugal";
pub const FALLBACK_COUNTRY: &str = "Brazil";
pub const DEFAULT_DESTINATION: &str = "BRAZIL";
pub const FALLBACK_SUFFIX: &str = " (Fallback)";

// Display-name overrides applied on top of the country-name table
pub const NAME_OVERRIDES: &[(i32, &str)] = &[(275, "Palestine")];
