//! The globe context: projection, selection, interaction state, ripples and
//! the two clocks, owned in one place and driven by the frontend's callbacks.

use crate::clock::{FrameTimer, IntervalTimer};
use crate::config::GlobeConfig;
use crate::constants::DEFAULT_TRANSLATE;
use crate::hit::{country_at, HoverChange, HoverTracker};
use crate::input::{ClockCommand, InputController, InputState};
use crate::names::NameTable;
use crate::projection::{Projection, ScreenPoint};
use crate::render::{render_frame, FrameReport, Scene};
use crate::ripple::{RippleColor, RippleEngine};
use crate::selection::Selection;
use crate::surface::Surface;
use crate::topo::World;

pub struct Globe {
    config: GlobeConfig,
    projection: Projection,
    world: World,
    names: NameTable,
    selection: Selection,
    input: InputController,
    hover: HoverTracker,
    ripples: RippleEngine,
    rotation_clock: FrameTimer,
    render_clock: FrameTimer,
    origin_emitter: IntervalTimer,
    destination_emitter: IntervalTimer,
    dash_offset: f64,
    view_size: (f64, f64),
}

impl Globe {
    /// Resolve the route and center the view on its midpoint. Clocks stay
    /// stopped until [`Globe::start`].
    pub fn new(config: GlobeConfig, world: World, names: NameTable, destination: &str) -> Self {
        let selection = Selection::resolve(&world.countries, &names, destination);
        let mut projection = Projection::new();
        if let Some(arc) = selection.arc {
            let mid = arc.midpoint();
            projection.set_rotation(-mid.lon, -mid.lat, 0.0);
        }
        log::info!(
            "[globe] origin={:?} destination={:?} ({})",
            selection.origin,
            selection.destination,
            selection.destination_name
        );
        Self {
            input: InputController::new(config.drag_sensitivity),
            ripples: RippleEngine::new(&config.ripple),
            origin_emitter: IntervalTimer::new(config.ripple.interval_ms),
            destination_emitter: IntervalTimer::new(config.ripple.interval_ms),
            config,
            projection,
            world,
            names,
            selection,
            hover: HoverTracker::default(),
            rotation_clock: FrameTimer::new(),
            render_clock: FrameTimer::new(),
            dash_offset: 0.0,
            view_size: (DEFAULT_TRANSLATE[0] * 2.0, DEFAULT_TRANSLATE[1] * 2.0),
        }
    }

    pub fn config(&self) -> &GlobeConfig {
        &self.config
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn projection_mut(&mut self) -> &mut Projection {
        &mut self.projection
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn destination_name(&self) -> &str {
        &self.selection.destination_name
    }

    pub fn input_state(&self) -> InputState {
        self.input.state()
    }

    pub fn ripples(&self) -> &RippleEngine {
        &self.ripples
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hover.current()
    }

    pub fn dash_offset(&self) -> f64 {
        self.dash_offset
    }

    pub fn view_size(&self) -> (f64, f64) {
        self.view_size
    }

    pub fn is_running(&self) -> bool {
        self.render_clock.is_running()
    }

    /// Start the render tick and arm the ripple emitters. Auto-rotation waits
    /// for the first click.
    pub fn start(&mut self, now_ms: f64) {
        self.render_clock.start(now_ms);
        if self.selection.arc.is_some() {
            self.origin_emitter.arm(now_ms);
            self.destination_emitter.arm(now_ms);
        }
        if self.input.is_auto_rotating() {
            self.rotation_clock.start(now_ms);
        }
    }

    /// Stop every clock and emitter.
    pub fn stop(&mut self) {
        self.render_clock.stop();
        self.rotation_clock.stop();
        self.origin_emitter.disarm();
        self.destination_emitter.disarm();
    }

    pub fn resize(&mut self, width: f64, height: f64) -> (f64, f64) {
        self.view_size = self.projection.rescale(width, height);
        self.view_size
    }

    /// Click-to-start. Returns true if this click started auto-rotation.
    pub fn click(&mut self, now_ms: f64) -> bool {
        let cmd = self.input.click();
        self.apply(cmd, now_ms);
        cmd == ClockCommand::Start
    }

    pub fn pointer_down(&mut self, at: ScreenPoint, now_ms: f64) {
        let cmd = self.input.drag_start(at);
        self.apply(cmd, now_ms);
    }

    /// Rotate by the drag delta. Returns whether a drag is in progress.
    pub fn pointer_drag(&mut self, at: ScreenPoint) -> bool {
        match self.input.drag_move(at) {
            Some((d_lon, d_lat)) => {
                self.projection.rotate(d_lon, d_lat);
                true
            }
            None => false,
        }
    }

    pub fn pointer_up(&mut self, now_ms: f64) {
        let cmd = self.input.drag_end();
        self.apply(cmd, now_ms);
    }

    /// Update the hovered country from a pointer position; `Some` when the
    /// selection changed.
    pub fn hover_at(&mut self, at: ScreenPoint) -> Option<HoverChange> {
        let found = country_at(&self.projection, &self.world.countries, at);
        self.set_hover(found)
    }

    pub fn clear_hover(&mut self) -> Option<HoverChange> {
        self.set_hover(None)
    }

    fn set_hover(&mut self, found: Option<usize>) -> Option<HoverChange> {
        if !self.hover.update(found) {
            return None;
        }
        let label = found
            .and_then(|i| self.world.countries.get(i))
            .map(|c| self.names.label(c.id).to_string())
            .unwrap_or_default();
        Some(HoverChange {
            country: found,
            label,
        })
    }

    /// Advance the rotation clock and the ripple emitters to `now_ms`.
    pub fn advance(&mut self, now_ms: f64) {
        if let Some(elapsed) = self.rotation_clock.tick(now_ms) {
            if self.input.is_auto_rotating() {
                self.projection
                    .rotate(elapsed * self.config.degrees_per_ms(), 0.0);
            }
        }
        let Some(arc) = self.selection.arc else {
            return;
        };
        if self.origin_emitter.poll(now_ms) && self.projection.is_visible(arc.from) {
            self.ripples.emit(arc.from, RippleColor::Origin, now_ms);
        }
        if self.destination_emitter.poll(now_ms) && self.projection.is_visible(arc.to) {
            self.ripples.emit(arc.to, RippleColor::Destination, now_ms);
        }
    }

    /// One animation frame: advance clocks, then draw if the render tick is
    /// running. `None` means nothing was drawn.
    pub fn frame(&mut self, now_ms: f64, surface: &mut impl Surface) -> Option<FrameReport> {
        self.advance(now_ms);
        let elapsed = self.render_clock.tick(now_ms)?;
        self.dash_offset = (self.dash_offset + elapsed * self.config.dash_speed)
            .rem_euclid(self.config.dash_period().max(f64::EPSILON));
        Some(self.render(now_ms, surface))
    }

    /// Draw immediately without advancing any clock (hover or resize repaint).
    pub fn render(&mut self, now_ms: f64, surface: &mut impl Surface) -> FrameReport {
        let scene = Scene {
            config: &self.config,
            projection: &self.projection,
            world: &self.world,
            selection: &self.selection,
            hover: self.hover.current(),
            dash_offset: self.dash_offset,
            view_size: self.view_size,
        };
        render_frame(surface, &scene, &mut self.ripples, now_ms)
    }

    fn apply(&mut self, cmd: ClockCommand, now_ms: f64) {
        match cmd {
            ClockCommand::Start => self.rotation_clock.start(now_ms),
            ClockCommand::Stop => self.rotation_clock.stop(),
            ClockCommand::Keep => {}
        }
    }
}
