//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{play::PlayArgs, tui::TuiArgs};

#[derive(StructOpt)]
#[structopt(
    name = "hanoi",
    about = "The Tower of Hanoi puzzle, played in the terminal. Move every disk from the left peg to the right peg, one at a time, never putting a larger disk on a smaller one."
)]
pub enum Hanoi {
    #[structopt(
        name = "play",
        about = "Play in a plain terminal. The screen is redrawn as text after every move. Pegs are chosen by typing L, M or R. Start right away with `--disks` (3-8), otherwise you are asked for the number of disks."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "tui",
        about = "Play in a full-screen terminal UI with colored disks. Disk colors can be customized in a `hanoi_colors.toml` file in the current directory. Start right away with `--disks` (3-8)."
    )]
    Tui(TuiArgs),
}

impl crate::cli::commands::Command for Hanoi {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Play(cmd),
            Tui(cmd),
        }
    }
}
