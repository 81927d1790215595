//! Widget configuration.
//!
//! Every field has a default matching the fixed visual design, so a page can
//! override only what it needs (the web frontend reads a JSON object from the
//! canvas `data-config` attribute).

use crate::constants::*;
use crate::error::GlobeError;
use serde::Deserialize;
use std::fmt;

/// An opaque sRGB color, parsed from `#rgb`, `#rrggbb` or a small set of CSS
/// names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return match hex.len() {
                3 => {
                    let mut c = [0u8; 3];
                    for (i, ch) in hex.chars().enumerate() {
                        let v = ch.to_digit(16)? as u8;
                        c[i] = v * 17;
                    }
                    Some(Self::new(c[0], c[1], c[2]))
                }
                6 => Some(Self::new(
                    u8::from_str_radix(hex.get(0..2)?, 16).ok()?,
                    u8::from_str_radix(hex.get(2..4)?, 16).ok()?,
                    u8::from_str_radix(hex.get(4..6)?, 16).ok()?,
                )),
                _ => None,
            };
        }
        match s.to_ascii_lowercase().as_str() {
            "white" => Some(Self::new(255, 255, 255)),
            "black" => Some(Self::new(0, 0, 0)),
            "cyan" | "aqua" => Some(Self::new(0, 255, 255)),
            "red" => Some(Self::new(255, 0, 0)),
            "blue" => Some(Self::new(0, 0, 255)),
            _ => None,
        }
    }

    /// CSS `rgba(...)` string with the given alpha.
    pub fn with_alpha(&self, alpha: f64) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, alpha)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Rgb {
    type Error = GlobeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or(GlobeError::Color(value))
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub water: Rgb,
    pub land: Rgb,
    pub origin: Rgb,
    pub destination: Rgb,
    pub hover: Rgb,
    pub arc: Rgb,
    pub origin_ripple: Rgb,
    pub destination_ripple: Rgb,
    pub destination_point: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        const CYAN: Rgb = Rgb::new(0, 255, 255);
        Self {
            water: Rgb::new(0x11, 0x11, 0x11),
            land: Rgb::new(0x42, 0x44, 0x47),
            origin: Rgb::new(0x4b, 0x8c, 0xf2),
            destination: Rgb::new(255, 255, 255),
            hover: Rgb::new(0xee, 0xee, 0xee),
            arc: CYAN,
            origin_ripple: Rgb::new(0x4b, 0x8c, 0xf2),
            destination_ripple: CYAN,
            destination_point: CYAN,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct RippleConfig {
    pub max_radius: f64,
    pub duration_ms: f64,
    pub interval_ms: f64,
    pub line_width: f64,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            max_radius: RIPPLE_MAX_RADIUS,
            duration_ms: RIPPLE_DURATION_MS,
            interval_ms: RIPPLE_INTERVAL_MS,
            line_width: RIPPLE_LINE_WIDTH,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct GlobeConfig {
    pub degrees_per_second: f64,
    pub drag_sensitivity: f64,
    pub arc_line_width: f64,
    pub arc_dash: [f64; 2],
    pub dash_speed: f64,
    pub marker_radius: f64,
    pub colors: Palette,
    pub ripple: RippleConfig,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            degrees_per_second: DEGREES_PER_SECOND,
            drag_sensitivity: DRAG_SENSITIVITY,
            arc_line_width: ARC_LINE_WIDTH,
            arc_dash: ARC_DASH,
            dash_speed: DASH_SPEED_PX_PER_MS,
            marker_radius: DESTINATION_MARKER_RADIUS,
            colors: Palette::default(),
            ripple: RippleConfig::default(),
        }
    }
}

impl GlobeConfig {
    /// Parse a partial JSON override; absent fields keep their defaults.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[inline]
    pub fn degrees_per_ms(&self) -> f64 {
        self.degrees_per_second / 1000.0
    }

    #[inline]
    pub fn dash_period(&self) -> f64 {
        self.arc_dash[0] + self.arc_dash[1]
    }
}
