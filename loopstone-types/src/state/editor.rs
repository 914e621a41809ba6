//! Editor session state: the drill-down mode, cursors, and the data model
//! they range over.

use serde::{Deserialize, Serialize};

use super::grid::{
    LoopGrid, Placement, FINE_STEPS, MAX_BARS, MAX_TEMPO, MIN_BARS, MIN_TEMPO, TICKS_PER_CELL,
};
use super::music::Key;
use super::palette::Palette;

/// Focusable item in Loop Adjust.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoopFocus {
    /// Drill into the bar list.
    Loop,
    Tempo,
    Key,
    BarCount,
    /// Hand the finished loop to the host.
    Next,
}

impl LoopFocus {
    pub const ORDER: [LoopFocus; 5] = [
        LoopFocus::Loop,
        LoopFocus::Tempo,
        LoopFocus::Key,
        LoopFocus::BarCount,
        LoopFocus::Next,
    ];

    pub fn cycled(self, delta: i32) -> LoopFocus {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        let len = Self::ORDER.len() as i32;
        Self::ORDER[(idx as i32 + delta).rem_euclid(len) as usize]
    }

    pub fn label(self) -> &'static str {
        match self {
            LoopFocus::Loop => "Loop",
            LoopFocus::Tempo => "Tempo",
            LoopFocus::Key => "Key",
            LoopFocus::BarCount => "Bars",
            LoopFocus::Next => "Next",
        }
    }
}

/// Focusable item in Sample Adjust. Pitch is only offered while the selected
/// placement is in melody mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SampleFocus {
    Toggle,
    Pitch,
    Gain,
}

impl SampleFocus {
    const MELODY_ORDER: [SampleFocus; 3] = [SampleFocus::Toggle, SampleFocus::Pitch, SampleFocus::Gain];
    const RHYTHM_ORDER: [SampleFocus; 2] = [SampleFocus::Toggle, SampleFocus::Gain];

    /// Focus moved by `delta` over the set allowed for the given melody flag,
    /// wrapping. A focus excluded from the set clamps to Gain first.
    pub fn cycled(self, delta: i32, melody: bool) -> SampleFocus {
        let order: &[SampleFocus] = if melody {
            &Self::MELODY_ORDER
        } else {
            &Self::RHYTHM_ORDER
        };
        let current = self.clamped(melody);
        let idx = order.iter().position(|f| *f == current).unwrap_or(0);
        let len = order.len() as i32;
        order[(idx as i32 + delta).rem_euclid(len) as usize]
    }

    /// The nearest allowed focus for the given melody flag.
    pub fn clamped(self, melody: bool) -> SampleFocus {
        if self == SampleFocus::Pitch && !melody {
            SampleFocus::Gain
        } else {
            self
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SampleFocus::Toggle => "Melody/Rhythm",
            SampleFocus::Pitch => "Pitch",
            SampleFocus::Gain => "Gain",
        }
    }
}

/// The five drill-down modes. Exactly one is active; the two Adjust-capable
/// modes carry their focus and sub-mode inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    LoopAdjust { focus: LoopFocus, adjusting: bool },
    BarNav,
    LayerNav,
    SampleNav,
    SampleAdjust { focus: SampleFocus, adjusting: bool },
}

impl Mode {
    /// The top-level mode with focus on the loop itself.
    pub fn top() -> Mode {
        Mode::LoopAdjust {
            focus: LoopFocus::Loop,
            adjusting: false,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Mode::LoopAdjust { .. } => "Loop Adjust",
            Mode::BarNav => "Bar Nav",
            Mode::LayerNav => "Layer Nav",
            Mode::SampleNav => "Sample Nav",
            Mode::SampleAdjust { .. } => "Sample Adjust",
        }
    }
}

/// The whole editing session model: loop attributes, the grid, the palette,
/// the active mode, and every cursor.
///
/// Mutation happens only through the tick-driven dispatch path; a renderer on
/// another thread must treat this as per-tick snapshot data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorState {
    pub tempo: u16,
    pub key: Key,
    pub grid: LoopGrid,
    pub palette: Palette,
    pub mode: Mode,
    /// Bar under the cursor in Bar Nav and below.
    pub current_bar: usize,
    /// Layer Nav cursor over `layer_count + 1` slots; the last slot is the
    /// append affordance.
    pub layer_cursor: usize,
    /// Layer targeted by sample editing.
    pub current_layer: usize,
    /// Fine-grid cursor in Sample Nav, 0..FINE_STEPS.
    pub tick_cursor: u32,
    /// Start tick of the placement selected for Sample Adjust, within
    /// (current_bar, current_layer).
    pub selected_start: Option<u32>,
}

impl EditorState {
    pub fn new(tempo: u16, key: Key, bar_count: usize) -> Self {
        Self {
            tempo: tempo.clamp(MIN_TEMPO, MAX_TEMPO),
            key,
            grid: LoopGrid::new(bar_count, 1),
            palette: Palette::default(),
            mode: Mode::top(),
            current_bar: 0,
            layer_cursor: 0,
            current_layer: 0,
            tick_cursor: 0,
            selected_start: None,
        }
    }

    pub fn adjust_tempo(&mut self, delta: i32) {
        let tempo = (self.tempo as i32 + delta).clamp(MIN_TEMPO as i32, MAX_TEMPO as i32);
        self.tempo = tempo as u16;
    }

    pub fn cycle_key(&mut self, delta: i32) {
        self.key = self.key.cycled(delta);
    }

    /// Change the bar count by `delta`, resizing the grid and clamping the
    /// bar cursor in the same operation.
    pub fn adjust_bar_count(&mut self, delta: i32) {
        let target = (self.grid.bar_count() as i32 + delta).clamp(MIN_BARS as i32, MAX_BARS as i32);
        self.grid.resize(target as usize);
        self.clamp_cursors();
    }

    /// Move the bar cursor cyclically over the bar list.
    pub fn cycle_bar(&mut self, delta: i32) {
        let len = self.grid.bar_count() as i32;
        self.current_bar = (self.current_bar as i32 + delta).rem_euclid(len) as usize;
    }

    /// Move the layer cursor cyclically over the layers plus the append slot.
    pub fn cycle_layer_cursor(&mut self, delta: i32) {
        let len = self.grid.layer_count() as i32 + 1;
        self.layer_cursor = (self.layer_cursor as i32 + delta).rem_euclid(len) as usize;
    }

    /// Whether the layer cursor sits on the append affordance.
    pub fn on_append_slot(&self) -> bool {
        self.layer_cursor == self.grid.layer_count()
    }

    /// Move the fine-tick cursor by `delta` ticks, wrapping over the bar.
    pub fn move_tick(&mut self, delta: i32) {
        self.tick_cursor = (self.tick_cursor as i32 + delta).rem_euclid(FINE_STEPS as i32) as u32;
    }

    /// Snap the fine-tick cursor movement to the coarse grid.
    pub fn move_tick_coarse(&mut self, direction: i32) {
        self.move_tick(direction * TICKS_PER_CELL as i32);
    }

    pub fn selected_placement(&self) -> Option<&Placement> {
        let start = self.selected_start?;
        self.grid.find_at(self.current_bar, self.current_layer, start)
    }

    pub fn selected_placement_mut(&mut self) -> Option<&mut Placement> {
        let start = self.selected_start?;
        self.grid
            .find_at_mut(self.current_bar, self.current_layer, start)
    }

    /// Pull every cursor back into the valid range of its backing collection.
    /// Called by every operation that shrinks one of them; the state machine
    /// never carries a dangling index across a tick boundary.
    pub fn clamp_cursors(&mut self) {
        let bars = self.grid.bar_count();
        let layers = self.grid.layer_count();
        self.current_bar = self.current_bar.min(bars - 1);
        self.layer_cursor = self.layer_cursor.min(layers);
        self.current_layer = self.current_layer.min(layers - 1);
        if self.tick_cursor >= FINE_STEPS {
            self.tick_cursor = FINE_STEPS - 1;
        }
        if self.selected_start.is_some() && self.selected_placement().is_none() {
            self.selected_start = None;
        }
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(120, Key::C, 4)
    }
}
