//! Incremental prefix search over a word → definition table.
//!
//! [`Controller`] couples the query, the filtered result list, the selection
//! marker and the definition pane. It performs no I/O: hosts feed it
//! [`Event`]s and apply the returned [`Effect`]s to their own [`Surface`].

pub mod controller;
pub mod dictionary;
pub mod effect;
pub mod error;
pub mod event;
pub mod highlight;
pub mod matcher;

pub use controller::{Controller, Phase, View};
pub use dictionary::Dictionary;
pub use effect::{Definition, Effect, ListItem, Outcome, Surface};
pub use error::Error;
pub use event::{Direction, Event};
pub use highlight::{Highlight, highlight_match};
