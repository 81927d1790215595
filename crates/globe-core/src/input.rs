//! Pointer gestures to rotation: the drag / auto-rotate state machine.

use crate::projection::ScreenPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputState {
    #[default]
    Idle,
    AutoRotating,
    /// `resume` remembers whether auto-rotation was active before the drag.
    Dragging { resume: bool },
}

/// What the owner of the rotation clock has to do after an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockCommand {
    Start,
    Stop,
    Keep,
}

#[derive(Debug, Clone)]
pub struct InputController {
    state: InputState,
    sensitivity: f64,
    last_pointer: Option<ScreenPoint>,
    // pointer moved during the current/last gesture; such a release is no click
    moved: bool,
    start_armed: bool,
}

impl InputController {
    pub fn new(sensitivity: f64) -> Self {
        Self {
            state: InputState::Idle,
            sensitivity,
            last_pointer: None,
            moved: false,
            start_armed: true,
        }
    }

    pub fn state(&self) -> InputState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, InputState::Dragging { .. })
    }

    pub fn is_auto_rotating(&self) -> bool {
        self.state == InputState::AutoRotating
    }

    /// Whether the one-time click-to-start affordance is still live.
    pub fn start_armed(&self) -> bool {
        self.start_armed
    }

    /// Click on the canvas: the first one starts auto-rotation, later ones do
    /// nothing. A click that ends a moving drag is ignored.
    pub fn click(&mut self) -> ClockCommand {
        if !self.start_armed || self.moved || self.state != InputState::Idle {
            return ClockCommand::Keep;
        }
        self.start_armed = false;
        self.state = InputState::AutoRotating;
        log::info!("[input] auto-rotation started by click");
        ClockCommand::Start
    }

    pub fn drag_start(&mut self, at: ScreenPoint) -> ClockCommand {
        let resume = match self.state {
            InputState::AutoRotating => true,
            InputState::Idle => false,
            InputState::Dragging { resume } => resume,
        };
        self.state = InputState::Dragging { resume };
        self.last_pointer = Some(at);
        self.moved = false;
        if resume {
            ClockCommand::Stop
        } else {
            ClockCommand::Keep
        }
    }

    /// Rotation delta `(d_lon, d_lat)` for a pointer move, `None` when not
    /// dragging. Horizontal motion adds, vertical motion subtracts.
    pub fn drag_move(&mut self, at: ScreenPoint) -> Option<(f64, f64)> {
        if !self.is_dragging() {
            return None;
        }
        let last = self.last_pointer.replace(at)?;
        let dx = (at.x - last.x) * self.sensitivity;
        let dy = (at.y - last.y) * self.sensitivity;
        if dx != 0.0 || dy != 0.0 {
            self.moved = true;
        }
        Some((dx, -dy))
    }

    pub fn drag_end(&mut self) -> ClockCommand {
        let InputState::Dragging { resume } = self.state else {
            return ClockCommand::Keep;
        };
        self.last_pointer = None;
        if resume {
            self.state = InputState::AutoRotating;
            ClockCommand::Start
        } else {
            self.state = InputState::Idle;
            ClockCommand::Keep
        }
    }
}
