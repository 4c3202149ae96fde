use std::io::{self, BufRead};

use crate::input_handler::{read_keyboard_line, read_line, InputError, MenuInput, MoveInput};

/// Where the game loop gets its answers from.
pub trait InputSource {
    fn get_menu_input(&mut self) -> Result<MenuInput, InputError>;
    fn get_move(&mut self) -> Result<MoveInput, InputError>;
}

/// Reads answers one line at a time, from stdin or any other buffered reader.
pub struct HumanInput<R> {
    reader: R,
}

impl HumanInput<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> HumanInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> InputSource for HumanInput<R> {
    fn get_menu_input(&mut self) -> Result<MenuInput, InputError> {
        read_line(&mut self.reader)?.parse()
    }

    fn get_move(&mut self) -> Result<MoveInput, InputError> {
        read_line(&mut self.reader)?.parse()
    }
}

/// Reads answers from key events, for the terminal UI.
pub struct KeyboardInput;

impl InputSource for KeyboardInput {
    fn get_menu_input(&mut self) -> Result<MenuInput, InputError> {
        read_keyboard_line()?.parse()
    }

    fn get_move(&mut self) -> Result<MoveInput, InputError> {
        read_keyboard_line()?.parse()
    }
}
