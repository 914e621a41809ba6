use serde::{Deserialize, Serialize};

use crate::TemplateId;

/// Demo tick length used when a freshly crafted sound arrives without one
/// (an eighth note on the fine grid).
pub const DEFAULT_TEMPLATE_TICKS: u32 = 4;

/// An immutable handle to externally crafted audio, plus its length on the
/// fine tick grid. The core never touches the audio itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleTemplate {
    pub id: TemplateId,
    pub name: String,
    pub length: u32,
}

/// The ordered, append-only list of templates offered for placement.
/// Ingesting a new template selects it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    templates: Vec<SampleTemplate>,
    selected: usize,
}

impl Palette {
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn templates(&self) -> &[SampleTemplate] {
        &self.templates
    }

    /// Append a template and select it. Returns the assigned id.
    pub fn ingest(&mut self, name: impl Into<String>, length: u32) -> TemplateId {
        let id = TemplateId::new(self.templates.len() as u32);
        self.templates.push(SampleTemplate {
            id,
            name: name.into(),
            length: length.max(1),
        });
        self.selected = self.templates.len() - 1;
        id
    }

    /// The currently selected template, if any exist.
    pub fn selected(&self) -> Option<&SampleTemplate> {
        self.templates.get(self.selected)
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Move the selection by `delta`, wrapping over the palette.
    pub fn cycle_selected(&mut self, delta: i32) {
        if self.templates.is_empty() {
            return;
        }
        let len = self.templates.len() as i32;
        self.selected = (self.selected as i32 + delta).rem_euclid(len) as usize;
    }

    pub fn name_of(&self, id: TemplateId) -> Option<&str> {
        self.templates
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.name.as_str())
    }
}
