use loopstone_types::action::{EditorIntent, InputFrame, TickResult};
use loopstone_types::state::editor::{EditorState, Mode};

use super::navigate_back;

/// Layer Nav: a cursor over the current bar's layers plus one extra slot,
/// the append affordance. Confirm targets a layer for sample editing;
/// long-press deletes the focused layer (never the append slot).
pub(super) fn handle(state: &mut EditorState, input: &InputFrame) -> TickResult {
    let mut result = TickResult::none();

    if let Some(rotation) = input.rotation() {
        state.cycle_layer_cursor(rotation.delta());
    }

    if input.confirm_click {
        if state.on_append_slot() {
            if state.grid.add_layer() {
                state.current_layer = state.grid.layer_count() - 1;
                state.mode = Mode::SampleNav;
            }
            // at the layer cap the confirm is absorbed
        } else {
            state.current_layer = state.layer_cursor;
            state.mode = Mode::SampleNav;
        }
    }

    if input.modifier_click {
        navigate_back(state);
    }

    if input.reset_long_press && !state.on_append_slot() {
        let removed = state.layer_cursor;
        if state.grid.remove_layer(removed) {
            log::debug!(target: "dispatch", "deleted layer {}", removed);
            state.clamp_cursors();
        }
    }

    if input.preview_click {
        result.push(EditorIntent::PreviewToggle);
    }

    result
}
