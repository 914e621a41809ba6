//! Per-mode input handling — the single entry point for state mutation.
//!
//! Each tick the session feeds the input frame to the handler of the active
//! mode. Handlers mutate `EditorState` directly and return a `TickResult`
//! with any intents for the host. Every input is either a defined transition
//! or a silent no-op; nothing here can fail.

mod bar_nav;
mod layer_nav;
mod loop_adjust;
mod sample_adjust;
mod sample_nav;

use loopstone_types::action::{InputFrame, TickResult};
use loopstone_types::state::editor::{EditorState, Mode};

use crate::combo::ComboWindow;

/// Apply one tick's input to the active mode.
pub(crate) fn dispatch_input(
    state: &mut EditorState,
    input: &InputFrame,
    combo: &mut ComboWindow,
) -> TickResult {
    match state.mode {
        Mode::LoopAdjust { focus, adjusting } => {
            loop_adjust::handle(state, input, focus, adjusting)
        }
        Mode::BarNav => bar_nav::handle(state, input),
        Mode::LayerNav => layer_nav::handle(state, input),
        Mode::SampleNav => sample_nav::handle(state, input, combo),
        Mode::SampleAdjust { focus, adjusting } => {
            sample_adjust::handle(state, input, combo, focus, adjusting)
        }
    }
}

/// The plain-modifier action: go up one level in the drill-down hierarchy.
/// Absorbed silently at the top level.
pub(crate) fn navigate_back(state: &mut EditorState) {
    match state.mode {
        Mode::LoopAdjust { .. } => {}
        Mode::BarNav => {
            state.mode = Mode::top();
        }
        Mode::LayerNav => {
            state.mode = Mode::BarNav;
        }
        Mode::SampleNav => {
            state.mode = Mode::LayerNav;
        }
        Mode::SampleAdjust { .. } => {
            state.selected_start = None;
            state.mode = Mode::SampleNav;
        }
    }
}
