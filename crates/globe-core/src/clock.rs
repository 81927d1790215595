//! Frame-driven timers. Time is passed in as milliseconds so the same code
//! runs under requestAnimationFrame and in host tests.

/// Repeating per-frame task that reports the time since its previous tick.
#[derive(Debug, Clone, Default)]
pub struct FrameTimer {
    last_ms: Option<f64>,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.last_ms.is_some()
    }

    /// (Re)start counting from `now_ms`; time before it is never reported.
    pub fn start(&mut self, now_ms: f64) {
        self.last_ms = Some(now_ms);
    }

    pub fn stop(&mut self) {
        self.last_ms = None;
    }

    /// Milliseconds since the previous tick, or `None` while stopped.
    pub fn tick(&mut self, now_ms: f64) -> Option<f64> {
        let last = self.last_ms.as_mut()?;
        let elapsed = (now_ms - *last).max(0.0);
        *last = now_ms;
        Some(elapsed)
    }
}

/// `setInterval` equivalent polled once per frame.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    interval_ms: f64,
    next_due_ms: Option<f64>,
}

impl IntervalTimer {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms: interval_ms.max(1.0),
            next_due_ms: None,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.next_due_ms.is_some()
    }

    /// First firing happens one interval after `now_ms`.
    pub fn arm(&mut self, now_ms: f64) {
        self.next_due_ms = Some(now_ms + self.interval_ms);
    }

    pub fn disarm(&mut self) {
        self.next_due_ms = None;
    }

    /// Fires at most once per call. A timer that fell far behind (hidden tab)
    /// reschedules from `now_ms` instead of bursting.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        let Some(due) = self.next_due_ms.as_mut() else {
            return false;
        };
        if now_ms < *due {
            return false;
        }
        *due += self.interval_ms;
        if *due <= now_ms {
            *due = now_ms + self.interval_ms;
        }
        true
    }
}
