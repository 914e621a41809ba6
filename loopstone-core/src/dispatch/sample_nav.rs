use loopstone_types::action::{EditorIntent, InputFrame, TickResult};
use loopstone_types::state::editor::{EditorState, Mode, SampleFocus};

use crate::combo::ComboWindow;

/// Sample Nav: a fine-tick cursor over the current (bar, layer). Plain
/// rotation snaps to the coarse sixteenth grid; rotation inside the combo
/// window moves by single fine ticks and cancels the pending back action.
/// Confirm on a placement's start tick selects it for adjustment; on any
/// other tick it places the selected template, overwriting whatever the
/// new range overlaps (including a placement's tail).
pub(super) fn handle(
    state: &mut EditorState,
    input: &InputFrame,
    combo: &mut ComboWindow,
) -> TickResult {
    let mut result = TickResult::none();

    if input.modifier_click {
        // back fires from the session loop if this window elapses unconsumed
        combo.arm();
    }

    if let Some(rotation) = input.rotation() {
        if combo.consume() {
            state.move_tick(rotation.delta());
        } else {
            state.move_tick_coarse(rotation.delta());
        }
    }

    if input.confirm_click {
        let (bar, layer, tick) = (state.current_bar, state.current_layer, state.tick_cursor);
        // selection only from the start tick; mid-range confirms place over
        let hit_start = state
            .grid
            .find_at(bar, layer, tick)
            .map(|p| p.start)
            .filter(|start| *start == tick);
        if let Some(start) = hit_start {
            state.selected_start = Some(start);
            state.mode = Mode::SampleAdjust {
                focus: SampleFocus::Toggle,
                adjusting: false,
            };
        } else if let Some(template) = state.palette.selected() {
            // empty palette or zero usable length reject silently
            let (id, len) = (template.id, template.length);
            state.grid.place(bar, layer, tick, id, len);
        }
    }

    if input.preview_click {
        result.push(EditorIntent::PreviewLayer {
            bar: state.current_bar,
            layer: state.current_layer,
        });
    }

    result
}
