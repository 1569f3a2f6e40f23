/// Direction for keyboard navigation through the rendered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Direction {
    Next,
    Previous,
}

/// Everything the controller reacts to.
///
/// The host translates platform input (keystrokes, clicks) into these; the
/// controller never sees raw key codes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", content = "value", rename_all = "snake_case")
)]
pub enum Event {
    /// The input control's raw value changed
    QueryChanged(String),
    NavigatePressed(Direction),
    CommitPressed,
    /// A rendered item was activated directly (e.g. clicked)
    ItemActivated(String),
}
