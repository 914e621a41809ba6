//! Per-tick input contract and the intents the editor hands back to its host.

use serde::{Deserialize, Serialize};

use crate::export::LoopSnapshot;

/// Rotary encoder direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rotation {
    Cw,
    Ccw,
}

impl Rotation {
    /// Signed unit step: +1 clockwise, -1 counter-clockwise.
    pub fn delta(self) -> i32 {
        match self {
            Rotation::Cw => 1,
            Rotation::Ccw => -1,
        }
    }
}

/// Edge-triggered logical events observed this tick, already debounced by
/// the input source. A field is true for at most one tick per physical
/// activation; the default frame is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputFrame {
    /// Push-button click: the combo modifier / back gesture.
    pub modifier_click: bool,
    /// Rotary-button click: confirm / drill deeper.
    pub confirm_click: bool,
    pub rotate_cw: bool,
    pub rotate_ccw: bool,
    /// Push-button double click: preview.
    pub preview_click: bool,
    /// Push-button long press (~600 ms, detected upstream): reset.
    pub reset_long_press: bool,
}

impl InputFrame {
    /// The rotation seen this tick, CW winning if both edges fire at once.
    pub fn rotation(&self) -> Option<Rotation> {
        if self.rotate_cw {
            Some(Rotation::Cw)
        } else if self.rotate_ccw {
            Some(Rotation::Ccw)
        } else {
            None
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Intent emitted toward the host. The core never navigates scenes or plays
/// audio itself; it only reports what the user asked for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EditorIntent {
    /// The user confirmed "Next": the loop is done. Carries the full export.
    SessionComplete(LoopSnapshot),
    /// Toggle whole-loop preview playback.
    PreviewToggle,
    /// Preview one layer of one bar.
    PreviewLayer { bar: usize, layer: usize },
    /// Preview a single placed sample.
    PreviewPlacement { bar: usize, layer: usize, start: u32 },
}

/// Result of one processing tick: the intents collected while applying this
/// tick's input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickResult {
    pub intents: Vec<EditorIntent>,
}

impl TickResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_intent(intent: EditorIntent) -> Self {
        Self {
            intents: vec![intent],
        }
    }

    pub fn push(&mut self, intent: EditorIntent) {
        self.intents.push(intent);
    }

    pub fn merge(&mut self, other: TickResult) {
        self.intents.extend(other.intents);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_frame_is_empty() {
        let frame = InputFrame::default();
        assert!(frame.is_empty());
        assert!(frame.rotation().is_none());
    }

    #[test]
    fn rotation_prefers_cw_on_conflict() {
        let frame = InputFrame {
            rotate_cw: true,
            rotate_ccw: true,
            ..Default::default()
        };
        assert_eq!(frame.rotation(), Some(Rotation::Cw));
    }

    #[test]
    fn rotation_deltas_are_unit_steps() {
        assert_eq!(Rotation::Cw.delta(), 1);
        assert_eq!(Rotation::Ccw.delta(), -1);
    }

    #[test]
    fn tick_result_merge_keeps_order() {
        let mut a = TickResult::with_intent(EditorIntent::PreviewToggle);
        let b = TickResult::with_intent(EditorIntent::PreviewLayer { bar: 0, layer: 1 });
        a.merge(b);
        assert_eq!(a.intents.len(), 2);
        assert_eq!(a.intents[0], EditorIntent::PreviewToggle);
    }
}
