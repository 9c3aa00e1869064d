//! Stroke timing utilities

/// Rate limiter for continuous brush strokes.
///
/// The external gesture layer reports elapsed time once per tick while a
/// stroke is held down; the terrain is only touched when at least
/// `step_of_draw` seconds have accumulated since the last application.
/// Beginning a stroke seeds the accumulator at the full step so the first
/// tick always paints.
#[derive(Debug, Clone)]
pub struct StrokeTimer {
    step: f32,
    accumulated: f32,
    active: bool,
}

impl StrokeTimer {
    /// Create a timer with the given step (seconds between applications)
    pub fn new(step: f32) -> Self {
        Self {
            step,
            accumulated: 0.0,
            active: false,
        }
    }

    /// Change the step without disturbing an in-progress stroke
    pub fn set_step(&mut self, step: f32) {
        self.step = step;
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// Begin a stroke; the next tick is immediately ready
    pub fn begin_stroke(&mut self) {
        self.active = true;
        self.accumulated = self.step;
    }

    /// End a stroke and reset the accumulator
    pub fn end_stroke(&mut self) {
        self.active = false;
        self.accumulated = 0.0;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Accumulate elapsed time for this tick
    pub fn tick(&mut self, delta: f32) {
        if self.active {
            self.accumulated += delta;
        }
    }

    /// Whether enough time has accumulated to paint
    pub fn ready(&self) -> bool {
        self.active && self.accumulated >= self.step
    }

    /// Consume the accumulated time if ready; returns whether to paint now
    pub fn try_consume(&mut self) -> bool {
        if self.ready() {
            self.accumulated = 0.0;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_paints_immediately() {
        let mut timer = StrokeTimer::new(0.1);
        timer.begin_stroke();
        assert!(timer.try_consume());
        // Immediately after consuming, not ready again
        assert!(!timer.try_consume());
    }

    #[test]
    fn test_accumulates_across_ticks() {
        let mut timer = StrokeTimer::new(0.1);
        timer.begin_stroke();
        assert!(timer.try_consume());

        timer.tick(0.04);
        assert!(!timer.try_consume());
        timer.tick(0.04);
        assert!(!timer.try_consume());
        timer.tick(0.04);
        assert!(timer.try_consume());
    }

    #[test]
    fn test_inactive_never_ready() {
        let mut timer = StrokeTimer::new(0.1);
        timer.tick(10.0);
        assert!(!timer.ready());
        assert!(!timer.try_consume());
    }

    #[test]
    fn test_end_stroke_resets() {
        let mut timer = StrokeTimer::new(0.1);
        timer.begin_stroke();
        timer.tick(1.0);
        timer.end_stroke();
        assert!(!timer.ready());
        timer.begin_stroke();
        assert!(timer.ready());
    }
}
