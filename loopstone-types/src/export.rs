//! Session-complete export snapshot.
//!
//! This is the sole boundary artifact the editor produces; how the host
//! serializes or stores it is the host's business.

use serde::{Deserialize, Serialize};

use crate::state::editor::EditorState;
use crate::state::music::Key;

/// One placement, flattened for export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementExport {
    pub start: u32,
    pub length: u32,
    pub melody: bool,
    pub pitch: i8,
    pub gain: u16,
    pub template_name: String,
}

/// Structured snapshot of the full loop, indexed `grid[bar][layer]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoopSnapshot {
    pub tempo: u16,
    pub key: Key,
    pub bar_count: usize,
    pub layer_count: usize,
    pub grid: Vec<Vec<Vec<PlacementExport>>>,
}

impl LoopSnapshot {
    /// Flatten the current editor state into an export snapshot. Template
    /// handles are resolved to palette names; a handle the palette no longer
    /// knows (cannot happen with an append-only palette) exports as "".
    pub fn capture(state: &EditorState) -> Self {
        let grid = state
            .grid
            .bars()
            .iter()
            .map(|bar| {
                bar.slots
                    .iter()
                    .map(|slot| {
                        slot.iter()
                            .map(|p| PlacementExport {
                                start: p.start,
                                length: p.length,
                                melody: p.melody,
                                pitch: p.pitch,
                                gain: p.gain,
                                template_name: state
                                    .palette
                                    .name_of(p.template)
                                    .unwrap_or_default()
                                    .to_string(),
                            })
                            .collect()
                    })
                    .collect()
            })
            .collect();
        Self {
            tempo: state.tempo,
            key: state.key,
            bar_count: state.grid.bar_count(),
            layer_count: state.grid.layer_count(),
            grid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TemplateId;

    #[test]
    fn capture_matches_grid_shape() {
        let mut state = EditorState::default();
        state.grid.add_layer();
        let snapshot = LoopSnapshot::capture(&state);
        assert_eq!(snapshot.bar_count, 4);
        assert_eq!(snapshot.layer_count, 2);
        assert_eq!(snapshot.grid.len(), 4);
        assert!(snapshot.grid.iter().all(|bar| bar.len() == 2));
    }

    #[test]
    fn capture_resolves_template_names() {
        let mut state = EditorState::default();
        state.palette.ingest("Stone 0", 4);
        state.grid.place(1, 0, 6, TemplateId::new(0), 4);
        let snapshot = LoopSnapshot::capture(&state);
        let exported = &snapshot.grid[1][0][0];
        assert_eq!(exported.start, 6);
        assert_eq!(exported.length, 4);
        assert_eq!(exported.template_name, "Stone 0");
        assert!(exported.melody);
        assert_eq!(exported.pitch, 0);
        assert_eq!(exported.gain, 100);
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let mut state = EditorState::default();
        state.palette.ingest("Stone 0", 4);
        state.grid.place(0, 0, 0, TemplateId::new(0), 4);
        let snapshot = LoopSnapshot::capture(&state);
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: LoopSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
