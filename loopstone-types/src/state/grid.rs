//! The bars × layers × placements grid and its mutation operations.

use serde::{Deserialize, Serialize};

use crate::TemplateId;

use super::music::{PITCH_MAX, PITCH_MIN};

/// Coarse grid cells per bar (sixteenth notes).
pub const GRID_STEPS: u32 = 16;
/// Fine ticks per bar (thirty-second notes); always an integer multiple of
/// the coarse grid.
pub const FINE_STEPS: u32 = 32;
/// Fine ticks per coarse cell.
pub const TICKS_PER_CELL: u32 = FINE_STEPS / GRID_STEPS;

pub const MIN_BARS: usize = 1;
pub const MAX_BARS: usize = 16;
pub const MIN_LAYERS: usize = 1;
pub const MAX_LAYERS: usize = 8;

pub const MIN_TEMPO: u16 = 40;
pub const MAX_TEMPO: u16 = 220;

pub const DEFAULT_GAIN: u16 = 100;
pub const MAX_GAIN: u16 = 200;

/// One sample reference positioned at a tick range within a bar/layer slot.
///
/// The template handle is shared read-only palette data; the placement owns
/// only its timing and per-instance parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub start: u32,
    pub length: u32,
    pub template: TemplateId,
    /// Melody placements follow the pitch offset; rhythm placements ignore it.
    pub melody: bool,
    /// Semitone offset, [-24, 24]. Meaningful only when `melody` is true.
    pub pitch: i8,
    /// Gain percentage, 0..=200.
    pub gain: u16,
}

impl Placement {
    pub fn new(start: u32, length: u32, template: TemplateId) -> Self {
        Self {
            start,
            length,
            template,
            melody: true,
            pitch: 0,
            gain: DEFAULT_GAIN,
        }
    }

    /// Half-open tick range occupied by this placement.
    pub fn range(&self) -> (u32, u32) {
        (self.start, self.start + self.length)
    }

    pub fn contains(&self, tick: u32) -> bool {
        self.start <= tick && tick < self.start + self.length
    }

    /// Restore the editable parameters to their defaults.
    pub fn reset_params(&mut self) {
        self.melody = true;
        self.pitch = 0;
        self.gain = DEFAULT_GAIN;
    }

    pub fn adjust_gain(&mut self, delta: i32) {
        let gain = (self.gain as i32 + delta).clamp(0, MAX_GAIN as i32);
        self.gain = gain as u16;
    }

    pub fn set_pitch(&mut self, pitch: i8) {
        self.pitch = pitch.clamp(PITCH_MIN, PITCH_MAX);
    }
}

/// Display metadata for one layer. Layers are renamed sequentially whenever
/// one is deleted, so the name always matches the slot index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerInfo {
    pub name: String,
}

impl LayerInfo {
    fn numbered(index: usize) -> Self {
        Self {
            name: format!("Layer {}", index),
        }
    }
}

/// One measure: a placement list per layer, kept start-ordered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub slots: Vec<Vec<Placement>>,
}

impl Bar {
    fn empty(layer_count: usize) -> Self {
        Self {
            slots: vec![Vec::new(); layer_count],
        }
    }
}

/// The full bars × layers grid.
///
/// Every bar always carries exactly `layers.len()` slots; layer add/remove
/// touches every bar in the same call so no partial shape is observable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoopGrid {
    layers: Vec<LayerInfo>,
    bars: Vec<Bar>,
}

impl LoopGrid {
    pub fn new(bar_count: usize, layer_count: usize) -> Self {
        let bar_count = bar_count.clamp(MIN_BARS, MAX_BARS);
        let layer_count = layer_count.clamp(MIN_LAYERS, MAX_LAYERS);
        Self {
            layers: (0..layer_count).map(LayerInfo::numbered).collect(),
            bars: (0..bar_count).map(|_| Bar::empty(layer_count)).collect(),
        }
    }

    pub fn bar_count(&self) -> usize {
        self.bars.len()
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn layers(&self) -> &[LayerInfo] {
        &self.layers
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// The placement list of one (bar, layer) slot.
    pub fn slot(&self, bar: usize, layer: usize) -> Option<&[Placement]> {
        self.bars
            .get(bar)
            .and_then(|b| b.slots.get(layer))
            .map(Vec::as_slice)
    }

    /// Place the given template at `start`, clipping to the bar end and
    /// overwriting anything the clipped range overlaps. Returns false when
    /// the clipped length is zero or the slot does not exist.
    pub fn place(
        &mut self,
        bar: usize,
        layer: usize,
        start: u32,
        template: TemplateId,
        template_len: u32,
    ) -> bool {
        if start >= FINE_STEPS {
            return false;
        }
        let end = FINE_STEPS.min(start + template_len);
        if end <= start {
            return false;
        }
        let Some(slot) = self.bars.get_mut(bar).and_then(|b| b.slots.get_mut(layer)) else {
            return false;
        };
        // last write wins: drop every placement intersecting [start, end)
        slot.retain(|p| {
            let (s, e) = p.range();
            s.max(start) >= e.min(end)
        });
        let pos = slot.partition_point(|p| p.start < start);
        slot.insert(pos, Placement::new(start, end - start, template));
        true
    }

    /// The placement whose range contains `tick`, if any.
    pub fn find_at(&self, bar: usize, layer: usize, tick: u32) -> Option<&Placement> {
        self.slot(bar, layer)?.iter().find(|p| p.contains(tick))
    }

    pub fn find_at_mut(&mut self, bar: usize, layer: usize, tick: u32) -> Option<&mut Placement> {
        self.bars
            .get_mut(bar)?
            .slots
            .get_mut(layer)?
            .iter_mut()
            .find(|p| p.contains(tick))
    }

    /// Remove the placement containing `tick`. Returns whether one existed.
    pub fn remove_at(&mut self, bar: usize, layer: usize, tick: u32) -> bool {
        let Some(slot) = self.bars.get_mut(bar).and_then(|b| b.slots.get_mut(layer)) else {
            return false;
        };
        let before = slot.len();
        slot.retain(|p| !p.contains(tick));
        slot.len() != before
    }

    /// Clear every layer of one bar.
    pub fn reset_bar(&mut self, bar: usize) {
        if let Some(b) = self.bars.get_mut(bar) {
            for slot in &mut b.slots {
                slot.clear();
            }
        }
    }

    /// Append an empty layer to every bar. No-op at the layer cap.
    pub fn add_layer(&mut self) -> bool {
        if self.layers.len() >= MAX_LAYERS {
            return false;
        }
        self.layers.push(LayerInfo::numbered(self.layers.len()));
        for bar in &mut self.bars {
            bar.slots.push(Vec::new());
        }
        true
    }

    /// Remove one layer from every bar and renumber the rest. The last
    /// remaining layer is never removed.
    pub fn remove_layer(&mut self, index: usize) -> bool {
        if index >= self.layers.len() || self.layers.len() <= MIN_LAYERS {
            return false;
        }
        self.layers.remove(index);
        for bar in &mut self.bars {
            bar.slots.remove(index);
        }
        for (i, info) in self.layers.iter_mut().enumerate() {
            *info = LayerInfo::numbered(i);
        }
        true
    }

    /// Grow with empty bars or truncate to `bar_count`, clamped to the legal
    /// range. Existing bar content is preserved where it survives.
    pub fn resize(&mut self, bar_count: usize) {
        let bar_count = bar_count.clamp(MIN_BARS, MAX_BARS);
        let layer_count = self.layers.len();
        if bar_count > self.bars.len() {
            self.bars
                .resize_with(bar_count, || Bar::empty(layer_count));
        } else {
            self.bars.truncate(bar_count);
        }
    }
}

impl Default for LoopGrid {
    fn default() -> Self {
        Self::new(4, 1)
    }
}
