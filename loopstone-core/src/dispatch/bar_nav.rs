use loopstone_types::action::{EditorIntent, InputFrame, TickResult};
use loopstone_types::state::editor::{EditorState, Mode};

use super::navigate_back;

/// Bar Nav: pick the bar to work in. The long-press gesture clears the
/// current bar across all layers without leaving the mode.
pub(super) fn handle(state: &mut EditorState, input: &InputFrame) -> TickResult {
    let mut result = TickResult::none();

    if let Some(rotation) = input.rotation() {
        state.cycle_bar(rotation.delta());
    }

    if input.confirm_click {
        state.mode = Mode::LayerNav;
    }

    if input.modifier_click {
        navigate_back(state);
    }

    if input.reset_long_press {
        log::debug!(target: "dispatch", "resetting bar {}", state.current_bar);
        state.grid.reset_bar(state.current_bar);
    }

    if input.preview_click {
        result.push(EditorIntent::PreviewToggle);
    }

    result
}
