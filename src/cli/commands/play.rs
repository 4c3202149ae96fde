//! Play command - solve the puzzle in a plain terminal.

use hanoi::game::input_source::HumanInput;
use hanoi::game::renderer::SimpleRenderer;
use structopt::StructOpt;

use super::util::{create_config, parse_disk_count_arg, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short, long, parse(try_from_str = parse_disk_count_arg))]
    pub disks: Option<u8>,
    #[structopt(long = "no-clear", help = "Print each frame below the last one")]
    pub no_clear: bool,
}

impl Command for PlayArgs {
    fn execute(self) {
        let config = create_config(self.disks);
        let renderer = if self.no_clear {
            SimpleRenderer::scrolling()
        } else {
            SimpleRenderer::new()
        };
        run_game_loop(HumanInput::stdin(), renderer, config);
    }
}
