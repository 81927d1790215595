pub mod charts;
pub mod clock;
pub mod config;
pub mod constants;
pub mod error;
pub mod geo;
pub mod globe;
pub mod hit;
pub mod input;
pub mod names;
pub mod path;
pub mod projection;
pub mod render;
pub mod ripple;
pub mod selection;
pub mod sheet;
pub mod surface;
pub mod topo;

pub use config::{GlobeConfig, Palette, RippleConfig, Rgb};
pub use error::{GlobeError, Result};
pub use geo::{LonLat, Polygon, Ring};
pub use globe::Globe;
pub use hit::HoverChange;
pub use input::InputState;
pub use names::NameTable;
pub use projection::{Projection, ScreenPoint};
pub use render::FrameReport;
pub use selection::{RouteArc, Selection};
pub use surface::Surface;
pub use topo::{Country, World};
