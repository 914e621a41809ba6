use loopstone_types::action::{EditorIntent, InputFrame, TickResult};
use loopstone_types::state::editor::{EditorState, Mode, SampleFocus};
use loopstone_types::state::music::{chromatic_step, next_in_scale};

use crate::combo::ComboWindow;

/// Sample Adjust: edit the selected placement. Focus cycles over the items
/// allowed by the melody flag; Adjust edits the focused value. In Pitch
/// Adjust a plain rotation steps along the scale while a combo rotation
/// steps chromatically, consuming the window so the pending back never fires.
pub(super) fn handle(
    state: &mut EditorState,
    input: &InputFrame,
    combo: &mut ComboWindow,
    focus: SampleFocus,
    adjusting: bool,
) -> TickResult {
    let mut result = TickResult::none();

    if state.selected_placement().is_none() {
        // the selection was invalidated under us; fall back to navigation
        state.selected_start = None;
        state.mode = Mode::SampleNav;
        return result;
    }

    if input.modifier_click {
        combo.arm();
    }

    if input.reset_long_press {
        if let Some(placement) = state.selected_placement_mut() {
            placement.reset_params();
        }
        state.mode = Mode::SampleAdjust {
            focus: SampleFocus::Toggle,
            adjusting: false,
        };
        return result;
    }

    if input.preview_click {
        if let Some(start) = state.selected_start {
            result.push(EditorIntent::PreviewPlacement {
                bar: state.current_bar,
                layer: state.current_layer,
                start,
            });
        }
    }

    if let Some(rotation) = input.rotation() {
        let delta = rotation.delta();
        // a rotation inside the window is always the combo's second half
        // here, whatever the sub-mode; consuming it cancels the pending back
        let comboed = combo.consume();
        if adjusting {
            let key = state.key;
            if let Some(placement) = state.selected_placement_mut() {
                match focus {
                    SampleFocus::Gain => placement.adjust_gain(delta * 2),
                    SampleFocus::Pitch => {
                        if placement.melody {
                            let pitch = if comboed {
                                chromatic_step(placement.pitch, delta as i8)
                            } else {
                                next_in_scale(placement.pitch, delta as i8, key)
                            };
                            placement.set_pitch(pitch);
                        }
                    }
                    SampleFocus::Toggle => {}
                }
            }
        } else {
            let melody = state.selected_placement().map(|p| p.melody).unwrap_or(true);
            state.mode = Mode::SampleAdjust {
                focus: focus.cycled(delta, melody),
                adjusting: false,
            };
        }
    }

    if input.confirm_click {
        if adjusting {
            state.mode = Mode::SampleAdjust {
                focus,
                adjusting: false,
            };
        } else {
            match current_focus(state) {
                SampleFocus::Toggle => {
                    if let Some(placement) = state.selected_placement_mut() {
                        placement.melody = !placement.melody;
                    }
                }
                item @ (SampleFocus::Pitch | SampleFocus::Gain) => {
                    state.mode = Mode::SampleAdjust {
                        focus: item,
                        adjusting: true,
                    };
                }
            }
        }
    }

    // a melody flip may have excluded Pitch from the focus set
    if let Mode::SampleAdjust { focus, adjusting } = state.mode {
        let melody = state.selected_placement().map(|p| p.melody).unwrap_or(true);
        state.mode = Mode::SampleAdjust {
            focus: focus.clamped(melody),
            adjusting,
        };
    }

    result
}

/// Focus as currently recorded in the mode (rotation this tick may have
/// moved it before confirm is processed).
fn current_focus(state: &EditorState) -> SampleFocus {
    match state.mode {
        Mode::SampleAdjust { focus, .. } => focus,
        _ => SampleFocus::Toggle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loopstone_types::TemplateId;

    fn with_selected_placement() -> EditorState {
        let mut state = EditorState::default();
        state.palette.ingest("Stone 0", 4);
        state.grid.place(0, 0, 0, TemplateId::new(0), 4);
        state.selected_start = Some(0);
        state.mode = Mode::SampleAdjust {
            focus: SampleFocus::Toggle,
            adjusting: false,
        };
        state
    }

    fn cw() -> InputFrame {
        InputFrame {
            rotate_cw: true,
            ..Default::default()
        }
    }

    fn confirm() -> InputFrame {
        InputFrame {
            confirm_click: true,
            ..Default::default()
        }
    }

    fn run(state: &mut EditorState, input: &InputFrame, combo: &mut ComboWindow) -> TickResult {
        match state.mode {
            Mode::SampleAdjust { focus, adjusting } => {
                handle(state, input, combo, focus, adjusting)
            }
            other => panic!("not in sample adjust: {:?}", other),
        }
    }

    #[test]
    fn confirm_on_toggle_flips_melody_in_place() {
        let mut state = with_selected_placement();
        let mut combo = ComboWindow::default();
        run(&mut state, &confirm(), &mut combo);
        assert!(!state.selected_placement().unwrap().melody);
        assert_eq!(
            state.mode,
            Mode::SampleAdjust {
                focus: SampleFocus::Toggle,
                adjusting: false,
            }
        );
    }

    #[test]
    fn rotation_cycles_focus_by_melody_flag() {
        let mut state = with_selected_placement();
        let mut combo = ComboWindow::default();
        run(&mut state, &cw(), &mut combo);
        assert_eq!(
            state.mode,
            Mode::SampleAdjust {
                focus: SampleFocus::Pitch,
                adjusting: false,
            }
        );
        // flip to rhythm: pitch is no longer focusable
        state.selected_placement_mut().unwrap().melody = false;
        state.mode = Mode::SampleAdjust {
            focus: SampleFocus::Toggle,
            adjusting: false,
        };
        run(&mut state, &cw(), &mut combo);
        assert_eq!(
            state.mode,
            Mode::SampleAdjust {
                focus: SampleFocus::Gain,
                adjusting: false,
            }
        );
    }

    #[test]
    fn melody_off_clamps_focus_away_from_pitch() {
        let mut state = with_selected_placement();
        state.mode = Mode::SampleAdjust {
            focus: SampleFocus::Pitch,
            adjusting: false,
        };
        state.selected_placement_mut().unwrap().melody = false;
        let mut combo = ComboWindow::default();
        run(&mut state, &InputFrame::default(), &mut combo);
        assert_eq!(
            state.mode,
            Mode::SampleAdjust {
                focus: SampleFocus::Gain,
                adjusting: false,
            }
        );
    }

    #[test]
    fn gain_adjust_steps_by_two() {
        let mut state = with_selected_placement();
        state.mode = Mode::SampleAdjust {
            focus: SampleFocus::Gain,
            adjusting: true,
        };
        let mut combo = ComboWindow::default();
        run(&mut state, &cw(), &mut combo);
        assert_eq!(state.selected_placement().unwrap().gain, 102);
    }

    #[test]
    fn pitch_adjust_steps_in_scale() {
        let mut state = with_selected_placement();
        state.mode = Mode::SampleAdjust {
            focus: SampleFocus::Pitch,
            adjusting: true,
        };
        let mut combo = ComboWindow::default();
        run(&mut state, &cw(), &mut combo);
        // key C, pitch 0: next scale degree up is 2
        assert_eq!(state.selected_placement().unwrap().pitch, 2);
    }

    #[test]
    fn combo_rotation_steps_chromatically_and_cancels_back() {
        let mut state = with_selected_placement();
        state.selected_placement_mut().unwrap().pitch = 2;
        state.mode = Mode::SampleAdjust {
            focus: SampleFocus::Pitch,
            adjusting: true,
        };
        let mut combo = ComboWindow::default();
        combo.arm();
        run(&mut state, &cw(), &mut combo);
        assert_eq!(state.selected_placement().unwrap().pitch, 3);
        assert!(!combo.is_armed());
    }

    #[test]
    fn pitch_rotation_ignored_in_rhythm_mode() {
        let mut state = with_selected_placement();
        state.selected_placement_mut().unwrap().melody = false;
        state.mode = Mode::SampleAdjust {
            focus: SampleFocus::Pitch,
            adjusting: true,
        };
        let mut combo = ComboWindow::default();
        run(&mut state, &cw(), &mut combo);
        assert_eq!(state.selected_placement().unwrap().pitch, 0);
    }

    #[test]
    fn long_press_resets_params_and_focus() {
        let mut state = with_selected_placement();
        {
            let placement = state.selected_placement_mut().unwrap();
            placement.pitch = 5;
            placement.gain = 40;
            placement.melody = false;
        }
        state.mode = Mode::SampleAdjust {
            focus: SampleFocus::Gain,
            adjusting: true,
        };
        let mut combo = ComboWindow::default();
        let frame = InputFrame {
            reset_long_press: true,
            ..Default::default()
        };
        run(&mut state, &frame, &mut combo);
        let placement = state.selected_placement().unwrap();
        assert!(placement.melody);
        assert_eq!(placement.pitch, 0);
        assert_eq!(placement.gain, 100);
        assert_eq!(
            state.mode,
            Mode::SampleAdjust {
                focus: SampleFocus::Toggle,
                adjusting: false,
            }
        );
    }

    #[test]
    fn dead_selection_falls_back_to_sample_nav() {
        let mut state = with_selected_placement();
        state.grid.reset_bar(0);
        let mut combo = ComboWindow::default();
        run(&mut state, &InputFrame::default(), &mut combo);
        assert_eq!(state.mode, Mode::SampleNav);
        assert!(state.selected_start.is_none());
    }

    #[test]
    fn preview_click_previews_the_placement() {
        let mut state = with_selected_placement();
        let mut combo = ComboWindow::default();
        let frame = InputFrame {
            preview_click: true,
            ..Default::default()
        };
        let result = run(&mut state, &frame, &mut combo);
        assert_eq!(
            result.intents,
            vec![EditorIntent::PreviewPlacement {
                bar: 0,
                layer: 0,
                start: 0,
            }]
        );
    }
}
