use loopstone_types::action::{EditorIntent, InputFrame, TickResult};
use loopstone_types::export::LoopSnapshot;
use loopstone_types::state::editor::{EditorState, LoopFocus, Mode};

/// Loop Adjust: the top level. Focus cycles over the loop fields plus the
/// drill-down and hand-off affordances; Adjust edits one field in place.
/// There is no level above, so the modifier gesture is absorbed here.
pub(super) fn handle(
    state: &mut EditorState,
    input: &InputFrame,
    focus: LoopFocus,
    adjusting: bool,
) -> TickResult {
    let mut result = TickResult::none();

    if input.preview_click {
        result.push(EditorIntent::PreviewToggle);
    }

    if adjusting {
        if let Some(rotation) = input.rotation() {
            let delta = rotation.delta();
            match focus {
                LoopFocus::Tempo => state.adjust_tempo(delta),
                LoopFocus::Key => state.cycle_key(delta),
                LoopFocus::BarCount => state.adjust_bar_count(delta),
                // Loop and Next never enter Adjust
                LoopFocus::Loop | LoopFocus::Next => {}
            }
        }
        if input.confirm_click {
            // confirm keeps the value; there is no cancel path
            state.mode = Mode::LoopAdjust {
                focus,
                adjusting: false,
            };
        }
        return result;
    }

    let mut focus = focus;
    if let Some(rotation) = input.rotation() {
        focus = focus.cycled(rotation.delta());
        state.mode = Mode::LoopAdjust {
            focus,
            adjusting: false,
        };
    }

    if input.confirm_click {
        match focus {
            LoopFocus::Loop => {
                state.mode = Mode::BarNav;
            }
            LoopFocus::Tempo | LoopFocus::Key | LoopFocus::BarCount => {
                state.mode = Mode::LoopAdjust {
                    focus,
                    adjusting: true,
                };
            }
            LoopFocus::Next => {
                log::debug!(target: "dispatch", "loop complete: {} bars, {} layers",
                    state.grid.bar_count(), state.grid.layer_count());
                result.push(EditorIntent::SessionComplete(LoopSnapshot::capture(state)));
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn confirm() -> InputFrame {
        InputFrame {
            confirm_click: true,
            ..Default::default()
        }
    }

    fn cw() -> InputFrame {
        InputFrame {
            rotate_cw: true,
            ..Default::default()
        }
    }

    #[test]
    fn confirm_on_loop_drills_into_bar_nav() {
        let mut state = EditorState::default();
        handle(&mut state, &confirm(), LoopFocus::Loop, false);
        assert_eq!(state.mode, Mode::BarNav);
    }

    #[test]
    fn confirm_on_field_enters_adjust() {
        let mut state = EditorState::default();
        handle(&mut state, &confirm(), LoopFocus::Tempo, false);
        assert_eq!(
            state.mode,
            Mode::LoopAdjust {
                focus: LoopFocus::Tempo,
                adjusting: true,
            }
        );
    }

    #[test]
    fn adjust_rotation_edits_tempo() {
        let mut state = EditorState::default();
        state.mode = Mode::LoopAdjust {
            focus: LoopFocus::Tempo,
            adjusting: true,
        };
        handle(&mut state, &cw(), LoopFocus::Tempo, true);
        assert_eq!(state.tempo, 121);
    }

    #[test]
    fn adjust_confirm_keeps_value() {
        let mut state = EditorState::default();
        handle(&mut state, &cw(), LoopFocus::Tempo, true);
        handle(&mut state, &confirm(), LoopFocus::Tempo, true);
        assert_eq!(state.tempo, 121);
        assert_eq!(
            state.mode,
            Mode::LoopAdjust {
                focus: LoopFocus::Tempo,
                adjusting: false,
            }
        );
    }

    #[test]
    fn bar_count_adjust_resizes_grid() {
        let mut state = EditorState::default();
        handle(&mut state, &cw(), LoopFocus::BarCount, true);
        assert_eq!(state.grid.bar_count(), 5);
    }

    #[test]
    fn confirm_on_next_emits_snapshot_and_stays() {
        let mut state = EditorState::default();
        state.mode = Mode::LoopAdjust {
            focus: LoopFocus::Next,
            adjusting: false,
        };
        let result = handle(&mut state, &confirm(), LoopFocus::Next, false);
        assert_eq!(result.intents.len(), 1);
        match &result.intents[0] {
            EditorIntent::SessionComplete(snapshot) => {
                assert_eq!(snapshot.tempo, 120);
                assert_eq!(snapshot.bar_count, 4);
            }
            other => panic!("unexpected intent {:?}", other),
        }
        assert_eq!(
            state.mode,
            Mode::LoopAdjust {
                focus: LoopFocus::Next,
                adjusting: false,
            }
        );
    }

    #[test]
    fn preview_click_toggles_loop_preview() {
        let mut state = EditorState::default();
        let frame = InputFrame {
            preview_click: true,
            ..Default::default()
        };
        let result = handle(&mut state, &frame, LoopFocus::Loop, false);
        assert_eq!(result.intents, vec![EditorIntent::PreviewToggle]);
    }
}
