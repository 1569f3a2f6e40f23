//! Render instructions produced by the controller and the surface that
//! consumes them.

use crate::highlight::Highlight;

/// One entry of the rendered result list.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListItem {
    pub word: String,
    pub highlight: Highlight,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Definition {
    pub title: String,
    pub body: String,
}

/// A single change to apply to the UI, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "effect", content = "value", rename_all = "snake_case")
)]
pub enum Effect {
    SetInputValue(String),
    RenderList(Vec<ListItem>),
    ClearList,
    /// Move the selection marker; `None` removes it from every item
    MarkSelected(Option<usize>),
    ShowDefinition(Definition),
    ClearDefinition,
}

/// UI callbacks the host provides.
pub trait Surface {
    fn set_input_value(&mut self, value: &str);
    fn render_list(&mut self, items: &[ListItem]);
    fn clear_list(&mut self);
    fn mark_selected(&mut self, index: Option<usize>);
    fn show_definition(&mut self, definition: &Definition);
    fn clear_definition(&mut self);
}

impl Effect {
    pub fn apply_to<S: Surface + ?Sized>(&self, surface: &mut S) {
        match self {
            Effect::SetInputValue(value) => surface.set_input_value(value),
            Effect::RenderList(items) => surface.render_list(items),
            Effect::ClearList => surface.clear_list(),
            Effect::MarkSelected(index) => surface.mark_selected(*index),
            Effect::ShowDefinition(definition) => surface.show_definition(definition),
            Effect::ClearDefinition => surface.clear_definition(),
        }
    }
}

/// Result of dispatching one event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Outcome {
    pub effects: Vec<Effect>,
    /// The host must suppress the triggering key's default action
    pub prevent_default: bool,
}

impl Outcome {
    /// Nothing happened and the key keeps its default behavior.
    pub fn inert() -> Self {
        Self::default()
    }

    pub fn is_inert(&self) -> bool {
        self.effects.is_empty() && !self.prevent_default
    }

    pub fn apply_to<S: Surface + ?Sized>(&self, surface: &mut S) {
        for effect in &self.effects {
            effect.apply_to(surface);
        }
    }
}
