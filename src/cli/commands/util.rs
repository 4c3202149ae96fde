//! Shared utilities for CLI commands.

use hanoi::game::controller::{parse_disk_count, GameError};
use hanoi::game::input_source::InputSource;
use hanoi::game::r#loop::{GameConfig, GameLoop};
use hanoi::game::renderer::GameRenderer;

pub(crate) fn run_game_loop<I, R>(input_source: I, renderer: R, config: GameConfig)
where
    I: InputSource,
    R: GameRenderer,
{
    let result = {
        let mut game = GameLoop::new(input_source, renderer, config);
        game.run()
    };

    // The renderer is dropped by now, so the terminal is back to normal
    match result {
        Ok(summary) => match summary.solved.len() {
            0 => println!("\nGoodbye!"),
            n => println!("\nGoodbye! You solved {} puzzle(s).", n),
        },
        Err(error) => {
            eprintln!("\nerror: {}", error);
            std::process::exit(1);
        }
    }
}

pub(crate) fn create_config(initial_disk_count: Option<u8>) -> GameConfig {
    GameConfig { initial_disk_count }
}

pub(crate) fn parse_disk_count_arg(input: &str) -> Result<u8, GameError> {
    parse_disk_count(input)
}
