use serde::Deserialize;

/// One line of host input.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostMessage {
    /// The control's whole value changed
    Input { value: String },
    /// Text typed at the cursor
    Insert { text: String },
    Backspace,
    Delete,
    Key { key: String },
    /// Pointer activation of the rendered item at `index`
    Click { index: usize },
    Exit,
}

impl HostMessage {
    pub fn parse(line: &str) -> serde_json::Result<Self> {
        serde_json::from_str(line)
    }
}
