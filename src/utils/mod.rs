#[macro_use]
pub mod logging;

pub mod host;
pub mod input_field;
pub mod keymap;
pub mod markup;
