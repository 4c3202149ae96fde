mod input;

pub use input::{read_keyboard_line, read_line, InputError, MenuInput, MoveInput};
