//! The per-tick entry point for one editing session.

use loopstone_types::action::{InputFrame, TickResult};
use loopstone_types::state::editor::EditorState;
use loopstone_types::state::palette::DEFAULT_TEMPLATE_TICKS;
use loopstone_types::TemplateId;

use crate::combo::ComboWindow;
use crate::config::Config;
use crate::dispatch;

/// One editing session: the state machine, its data model, and the combo
/// window. Single-threaded and single-writer; the host drives it with one
/// `tick` call per frame and reads `state()` for rendering. A renderer on
/// another thread must copy the state out per tick.
#[derive(Debug, Clone)]
pub struct Session {
    state: EditorState,
    combo: ComboWindow,
}

impl Session {
    /// Session with built-in defaults (tempo 120, key C, 4 bars).
    pub fn new() -> Self {
        Self {
            state: EditorState::default(),
            combo: ComboWindow::default(),
        }
    }

    /// Session with defaults and combo window taken from config.
    pub fn with_config(config: &Config) -> Self {
        let defaults = config.defaults();
        Self {
            state: EditorState::new(defaults.tempo, defaults.key, defaults.bars),
            combo: ComboWindow::new(config.combo_window_ms()),
        }
    }

    /// Resume an existing editor state (host hand-off between scenes).
    pub fn with_state(state: EditorState) -> Self {
        Self {
            state,
            combo: ComboWindow::default(),
        }
    }

    /// Read access for the renderer: mode, cursors, and the full data model.
    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// Hand a freshly crafted sound to the editor: append it to the palette
    /// and select it.
    pub fn ingest_template(&mut self, name: impl Into<String>, length_ticks: u32) -> TemplateId {
        let id = self.state.palette.ingest(name, length_ticks);
        log::debug!(target: "session", "ingested template {} ({} ticks)", id,
            self.state.palette.selected().map(|t| t.length).unwrap_or(0));
        id
    }

    /// `ingest_template` with the demo default length.
    pub fn ingest_template_default(&mut self, name: impl Into<String>) -> TemplateId {
        self.ingest_template(name, DEFAULT_TEMPLATE_TICKS)
    }

    /// Advance one tick: observe the combo timeout, then apply this tick's
    /// input to the active mode. Returns the intents collected for the host.
    ///
    /// `dt_ms` is the wall-clock delta since the previous tick; the combo
    /// deadline is only as precise as the host's tick rate.
    pub fn tick(&mut self, dt_ms: f64, input: &InputFrame) -> TickResult {
        let mut result = TickResult::none();

        if self.combo.advance(dt_ms) {
            log::debug!(target: "session", "combo window elapsed in {}", self.state.mode.name());
            dispatch::navigate_back(&mut self.state);
        }

        if !input.is_empty() {
            result.merge(dispatch::dispatch_input(&mut self.state, input, &mut self.combo));
        }

        result
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
