//! Search and selection state machine.
//!
//! The controller owns the query, the result list, the selection index and
//! the displayed definition. Every event is handled synchronously by
//! [`Controller::dispatch`], which mutates that state and returns the render
//! instructions for the host.

use crate::dictionary::Dictionary;
use crate::effect::{Definition, Effect, ListItem, Outcome};
use crate::error::Error;
use crate::event::{Direction, Event};
use crate::highlight::highlight_match;
use crate::matcher::{normalize_query, prefix_matches};

/// Coarse state of the interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Phase {
    /// No query
    Idle,
    /// Query present; the list may still be empty
    Listing,
    ShowingDefinition,
}

/// Read-only snapshot for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub ready: bool,
    pub phase: Phase,
    pub query: String,
    pub input_value: String,
    pub items: Vec<ListItem>,
    pub definition: Option<Definition>,
}

#[derive(Debug, Default)]
pub struct Controller {
    dictionary: Option<Dictionary>,
    query: String,
    input_value: String,
    results: Vec<String>,
    selection: Option<usize>,
    definition: Option<Definition>,
}

impl Controller {
    /// A controller waiting for its dictionary. Events are ignored until
    /// [`Controller::attach_dictionary`] succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dictionary(dictionary: Dictionary) -> Self {
        Self {
            dictionary: Some(dictionary),
            ..Default::default()
        }
    }

    /// Enable search. Only the first dictionary is accepted.
    pub fn attach_dictionary(&mut self, dictionary: Dictionary) -> Result<(), Error> {
        if let Some(existing) = &self.dictionary {
            return Err(Error::AlreadyLoaded(existing.len()));
        }
        self.dictionary = Some(dictionary);
        Ok(())
    }

    pub fn is_ready(&self) -> bool {
        self.dictionary.is_some()
    }

    pub fn dispatch(&mut self, event: Event) -> Outcome {
        if !self.is_ready() {
            return Outcome::inert();
        }
        match event {
            Event::QueryChanged(text) => self.on_query_changed(&text),
            Event::NavigatePressed(direction) => self.on_move_selection(direction),
            Event::CommitPressed => self.on_commit(),
            Event::ItemActivated(word) => self.on_pick(&word),
        }
    }

    fn on_query_changed(&mut self, raw: &str) -> Outcome {
        self.input_value = raw.to_owned();
        self.query = normalize_query(raw).to_owned();
        // Typing always hides the definition, whatever the new query is.
        self.definition = None;

        if self.query.is_empty() {
            self.results.clear();
            self.selection = None;
            return Outcome {
                effects: vec![Effect::ClearList, Effect::ClearDefinition],
                prevent_default: false,
            };
        }

        self.results = match &self.dictionary {
            Some(dictionary) => prefix_matches(dictionary, &self.query),
            None => Vec::new(),
        };
        self.selection = if self.results.is_empty() { None } else { Some(0) };

        Outcome {
            effects: vec![Effect::ClearDefinition, Effect::RenderList(self.items())],
            prevent_default: false,
        }
    }

    fn on_move_selection(&mut self, direction: Direction) -> Outcome {
        let mut outcome = Outcome {
            effects: Vec::new(),
            prevent_default: true,
        };
        if self.results.is_empty() {
            return outcome;
        }
        let last = self.results.len() - 1;
        let next = match (self.selection, direction) {
            (None, Direction::Next) => Some(0),
            (Some(ix), Direction::Next) if ix < last => Some(ix + 1),
            (Some(ix), Direction::Previous) if ix > 0 => Some(ix - 1),
            _ => None,
        };
        if let Some(ix) = next {
            self.selection = Some(ix);
            outcome.effects.push(Effect::MarkSelected(Some(ix)));
        }
        outcome
    }

    fn on_commit(&mut self) -> Outcome {
        let mut outcome = Outcome {
            effects: Vec::new(),
            prevent_default: true,
        };
        if let Some(word) = self.selected_word().map(str::to_owned) {
            self.input_value = word.clone();
            outcome.effects.push(Effect::SetInputValue(word.clone()));
            outcome.effects.extend(self.show_definition(&word));
        }
        outcome
    }

    fn on_pick(&mut self, word: &str) -> Outcome {
        self.input_value = word.to_owned();
        let mut effects = vec![Effect::SetInputValue(word.to_owned())];
        effects.extend(self.show_definition(word));

        // On a miss the list stays up, so the picked item takes the marker.
        if self.definition.is_none()
            && let Some(ix) = self.results.iter().position(|w| w == word)
            && self.selection != Some(ix)
        {
            self.selection = Some(ix);
            effects.push(Effect::MarkSelected(Some(ix)));
        }
        Outcome {
            effects,
            prevent_default: false,
        }
    }

    /// Show the definition for `word` and hide the list, or clear the
    /// definition on a miss (leaving the list as it is).
    fn show_definition(&mut self, word: &str) -> Vec<Effect> {
        let body = self
            .dictionary
            .as_ref()
            .and_then(|dictionary| dictionary.get(word))
            .map(str::to_owned);
        match body {
            Some(body) => {
                let definition = Definition {
                    title: word.to_owned(),
                    body,
                };
                self.definition = Some(definition.clone());
                self.results.clear();
                self.selection = None;
                vec![Effect::ShowDefinition(definition), Effect::ClearList]
            }
            None => {
                self.definition = None;
                vec![Effect::ClearDefinition]
            }
        }
    }

    fn items(&self) -> Vec<ListItem> {
        self.results
            .iter()
            .enumerate()
            .map(|(ix, word)| ListItem {
                word: word.clone(),
                highlight: highlight_match(word, &self.query),
                selected: self.selection == Some(ix),
            })
            .collect()
    }

    pub fn phase(&self) -> Phase {
        if self.definition.is_some() {
            Phase::ShowingDefinition
        } else if self.query.is_empty() {
            Phase::Idle
        } else {
            Phase::Listing
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn input_value(&self) -> &str {
        &self.input_value
    }

    pub fn results(&self) -> &[String] {
        &self.results
    }

    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    pub fn selected_word(&self) -> Option<&str> {
        self.selection
            .and_then(|ix| self.results.get(ix))
            .map(String::as_str)
    }

    pub fn definition(&self) -> Option<&Definition> {
        self.definition.as_ref()
    }

    pub fn view(&self) -> View {
        View {
            ready: self.is_ready(),
            phase: self.phase(),
            query: self.query.clone(),
            input_value: self.input_value.clone(),
            items: self.items(),
            definition: self.definition.clone(),
        }
    }
}
