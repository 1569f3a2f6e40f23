//! Translation from host key names to controller events and to the default
//! action the text control performs when a key is not consumed.

use crate::config::KeyConfig;
use crate::utils::input_field::CursorMove;

use wordfind_core::{Direction, Event};

/// What a key does to the text control if nobody suppresses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultAction {
    Cursor(CursorMove),
    Submit,
    Nothing,
}

/// Default action of the physical key, independent of any binding.
pub fn default_action(key: &str) -> DefaultAction {
    match key {
        "ArrowUp" | "Home" => DefaultAction::Cursor(CursorMove::Start),
        "ArrowDown" | "End" => DefaultAction::Cursor(CursorMove::End),
        "ArrowLeft" => DefaultAction::Cursor(CursorMove::Left),
        "ArrowRight" => DefaultAction::Cursor(CursorMove::Right),
        "Enter" => DefaultAction::Submit,
        _ => DefaultAction::Nothing,
    }
}

/// Controller event bound to `key`, if any. Names compare case-sensitively,
/// the way hosts report them.
pub fn bound_event(key: &str, keys: &KeyConfig) -> Option<Event> {
    if key == keys.confirm {
        Some(Event::CommitPressed)
    } else if key == keys.next {
        Some(Event::NavigatePressed(Direction::Next))
    } else if key == keys.previous {
        Some(Event::NavigatePressed(Direction::Previous))
    } else {
        None
    }
}
