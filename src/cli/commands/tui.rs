//! TUI command - solve the puzzle in a full-screen terminal UI.

use hanoi::game::input_source::KeyboardInput;
use hanoi::game::renderer::TuiRenderer;
use structopt::StructOpt;

use super::util::{create_config, parse_disk_count_arg, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct TuiArgs {
    #[structopt(short, long, parse(try_from_str = parse_disk_count_arg))]
    pub disks: Option<u8>,
}

impl Command for TuiArgs {
    fn execute(self) {
        let config = create_config(self.disks);

        match TuiRenderer::new() {
            Ok(renderer) => run_game_loop(KeyboardInput, renderer, config),
            Err(e) => {
                eprintln!("Failed to initialize TUI: {}", e);
                std::process::exit(1);
            }
        }
    }
}
