//! Host-side render state and the frame written after each message.

use crate::config::RenderConfig;
use crate::utils::input_field::InputField;
use crate::utils::markup::render_highlight;

use serde::Serialize;
use wordfind_core::{Definition, ListItem, Surface};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameInput {
    pub value: String,
    pub cursor: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameItem {
    pub word: String,
    pub markup: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub ready: bool,
    pub input: FrameInput,
    pub items: Vec<FrameItem>,
    pub definition: Option<Definition>,
    pub default_prevented: bool,
    pub submitted: bool,
}

/// What the user currently sees. Mutated only through [`Surface`] and the
/// input field's own default actions.
#[derive(Debug, Default)]
pub struct Screen {
    pub input: InputField,
    pub items: Vec<FrameItem>,
    pub definition: Option<Definition>,
    render: RenderConfig,
}

impl Screen {
    pub fn new(render: RenderConfig) -> Self {
        Self {
            render,
            ..Default::default()
        }
    }

    pub fn frame(&self, ready: bool, default_prevented: bool, submitted: bool) -> Frame {
        Frame {
            ready,
            input: FrameInput {
                value: self.input.value(),
                cursor: self.input.cursor(),
            },
            items: self.items.clone(),
            definition: self.definition.clone(),
            default_prevented,
            submitted,
        }
    }
}

impl Surface for Screen {
    fn set_input_value(&mut self, value: &str) {
        self.input.set_value(value);
    }

    fn render_list(&mut self, items: &[ListItem]) {
        self.items = items
            .iter()
            .map(|item| FrameItem {
                word: item.word.clone(),
                markup: render_highlight(&item.highlight, &self.render),
                selected: item.selected,
            })
            .collect();
    }

    fn clear_list(&mut self) {
        self.items.clear();
    }

    fn mark_selected(&mut self, index: Option<usize>) {
        for (ix, item) in self.items.iter_mut().enumerate() {
            item.selected = Some(ix) == index;
        }
    }

    fn show_definition(&mut self, definition: &Definition) {
        self.definition = Some(definition.clone());
    }

    fn clear_definition(&mut self) {
        self.definition = None;
    }
}
