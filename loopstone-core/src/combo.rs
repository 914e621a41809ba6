//! Modifier-combo disambiguation.
//!
//! A modifier press opens a window; a qualifying rotation inside the window
//! turns the gesture into a combo, otherwise the window elapses and the
//! plain-modifier action (navigate back) fires exactly once. The timer is an
//! explicit countdown advanced by the delta injected into each tick, so the
//! timeout is unit-testable and independent of any wall clock.

/// Default combo window, milliseconds.
pub const DEFAULT_COMBO_WINDOW_MS: f64 = 350.0;

#[derive(Debug, Clone, Copy, PartialEq)]
enum WindowState {
    Idle,
    Awaiting { remaining_ms: f64 },
}

/// One combo window. At most one is open at a time; re-arming restarts the
/// countdown rather than stacking.
#[derive(Debug, Clone, PartialEq)]
pub struct ComboWindow {
    state: WindowState,
    window_ms: f64,
}

impl ComboWindow {
    pub fn new(window_ms: f64) -> Self {
        Self {
            state: WindowState::Idle,
            window_ms,
        }
    }

    /// Open the window, or restart the countdown if one is already open.
    pub fn arm(&mut self) {
        self.state = WindowState::Awaiting {
            remaining_ms: self.window_ms,
        };
    }

    /// Advance the countdown by the elapsed tick delta. Returns true on the
    /// single tick where the window elapses unconsumed; the caller fires the
    /// plain-modifier action then.
    pub fn advance(&mut self, dt_ms: f64) -> bool {
        match self.state {
            WindowState::Idle => false,
            WindowState::Awaiting { remaining_ms } => {
                let remaining = remaining_ms - dt_ms;
                if remaining <= 0.0 {
                    self.state = WindowState::Idle;
                    true
                } else {
                    self.state = WindowState::Awaiting {
                        remaining_ms: remaining,
                    };
                    false
                }
            }
        }
    }

    /// Close an open window because its qualifying event arrived. Returns
    /// whether a window was open; closing and reporting are one step, so the
    /// plain action can never fire for a consumed press.
    pub fn consume(&mut self) -> bool {
        match self.state {
            WindowState::Idle => false,
            WindowState::Awaiting { .. } => {
                self.state = WindowState::Idle;
                true
            }
        }
    }

    pub fn is_armed(&self) -> bool {
        matches!(self.state, WindowState::Awaiting { .. })
    }
}

impl Default for ComboWindow {
    fn default() -> Self {
        Self::new(DEFAULT_COMBO_WINDOW_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_window_never_fires() {
        let mut combo = ComboWindow::default();
        for _ in 0..100 {
            assert!(!combo.advance(16.0));
        }
    }

    #[test]
    fn unconsumed_window_fires_exactly_once() {
        let mut combo = ComboWindow::default();
        combo.arm();
        let mut fired = 0;
        for _ in 0..100 {
            if combo.advance(16.0) {
                fired += 1;
            }
        }
        assert_eq!(fired, 1);
        assert!(!combo.is_armed());
    }

    #[test]
    fn consume_before_deadline_cancels_plain_action() {
        let mut combo = ComboWindow::default();
        combo.arm();
        assert!(!combo.advance(100.0));
        assert!(combo.consume());
        for _ in 0..100 {
            assert!(!combo.advance(16.0));
        }
    }

    #[test]
    fn consume_without_window_reports_false() {
        let mut combo = ComboWindow::default();
        assert!(!combo.consume());
    }

    #[test]
    fn rearm_restarts_the_countdown() {
        let mut combo = ComboWindow::new(350.0);
        combo.arm();
        assert!(!combo.advance(300.0));
        combo.arm();
        // 300 ms into the new window: still open
        assert!(!combo.advance(300.0));
        assert!(combo.is_armed());
        assert!(combo.advance(100.0));
    }

    #[test]
    fn elapses_at_exact_deadline() {
        let mut combo = ComboWindow::new(350.0);
        combo.arm();
        assert!(combo.advance(350.0));
    }

    #[test]
    fn timing_is_delta_driven_not_tick_counted() {
        // same wall time, different tick rates, same outcome
        for dt in [1.0, 16.0, 50.0] {
            let mut combo = ComboWindow::new(350.0);
            combo.arm();
            let mut elapsed = 0.0;
            let mut fired = false;
            while elapsed < 1000.0 {
                fired |= combo.advance(dt);
                elapsed += dt;
            }
            assert!(fired, "window never fired at dt={}", dt);
        }
    }
}
