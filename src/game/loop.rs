use log::debug;

use crate::board::peg::Peg;
use crate::game::controller::{parse_disk_count, GameError, MoveOutcome, Phase, PuzzleController};
use crate::game::input_source::InputSource;
use crate::game::renderer::{GameRenderer, GameView};
use crate::input_handler::{InputError, MenuInput, MoveInput};

pub const DISK_COUNT_PROMPT: &str = "Choose the number of disks (3-8):";
pub const SOURCE_PROMPT: &str = "Select the source peg (L/M/R):";

/// Settings chosen on the command line.
#[derive(Clone, Debug, Default)]
pub struct GameConfig {
    /// Skips the disk count prompt for the first game.
    pub initial_disk_count: Option<u8>,
}

/// What happened over one run of the loop.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// The final move of every solved game, in order.
    pub solved: Vec<MoveOutcome>,
}

pub struct GameLoop<I: InputSource, R: GameRenderer> {
    controller: PuzzleController,
    input: I,
    renderer: R,
    config: GameConfig,
    message: Option<String>,
}

impl<I: InputSource, R: GameRenderer> GameLoop<I, R> {
    pub fn new(input: I, renderer: R, config: GameConfig) -> Self {
        Self {
            controller: PuzzleController::new(),
            input,
            renderer,
            config,
            message: None,
        }
    }

    pub fn controller(&self) -> &PuzzleController {
        &self.controller
    }

    /// Plays games until the player quits or input runs out.
    pub fn run(&mut self) -> Result<SessionSummary, InputError> {
        let mut summary = SessionSummary::default();

        if let Some(disk_count) = self.config.initial_disk_count.take() {
            let started = self.controller.start_game(disk_count);
            self.report(started.map(|_| None));
        }

        loop {
            let keep_going = match self.controller.phase() {
                Phase::Playing => self.play_turn(&mut summary)?,
                Phase::SelectingDiskCount | Phase::Won => self.choose_disk_count()?,
            };

            if !keep_going {
                debug!("leaving after {} solved games", summary.solved.len());
                return Ok(summary);
            }
        }
    }

    fn render(&mut self, prompt: &str) -> Result<(), InputError> {
        let view = GameView::new(&self.controller, self.message.as_deref(), prompt);
        self.renderer
            .render(&view)
            .map_err(|error| InputError::IOError {
                error: error.to_string(),
            })
    }

    fn choose_disk_count(&mut self) -> Result<bool, InputError> {
        self.render(DISK_COUNT_PROMPT)?;

        let input = match read_answer(self.input.get_menu_input())? {
            Answer::Given(input) => input,
            Answer::Invalid(error) => return Ok(self.show_invalid(error)),
            Answer::Left => return Ok(false),
        };

        match input {
            MenuInput::Exit => return Ok(false),
            MenuInput::StartGame { disk_count } => {
                let started = parse_disk_count(&disk_count)
                    .and_then(|disk_count| self.controller.start_game(disk_count));
                self.report(started.map(|_| None));
            }
        }

        Ok(true)
    }

    fn play_turn(&mut self, summary: &mut SessionSummary) -> Result<bool, InputError> {
        let prompt = match self.controller.pending_source() {
            Some(source) => format!("Move the top disk of {} to (L/M/R):", source),
            None => SOURCE_PROMPT.to_string(),
        };
        self.render(&prompt)?;

        let input = match read_answer(self.input.get_move())? {
            Answer::Given(input) => input,
            Answer::Invalid(error) => return Ok(self.show_invalid(error)),
            Answer::Left => return Ok(false),
        };

        match input {
            MoveInput::Exit => return Ok(false),
            MoveInput::Reset => {
                self.controller.reset();
                self.message = Some("Game reset.".to_string());
            }
            MoveInput::Select { peg } => match self.controller.pending_source() {
                None => {
                    let selected = self.controller.select_source(&peg);
                    let message = selected.map(|source| Some(format!("Source selected: {}", source)));
                    self.report(message);
                }
                // Naming the pending source again drops it
                Some(source) if peg.parse::<Peg>() == Ok(source) => {
                    let cleared = self.controller.clear_source();
                    self.report(cleared.map(|_| Some("Source cleared.".to_string())));
                }
                Some(_) => {
                    let moved = self.controller.select_destination_and_move(&peg);
                    self.finish_move(moved, summary);
                }
            },
            MoveInput::Move { from, to } => {
                let moved = self
                    .controller
                    .select_source(&from)
                    .and_then(|_| self.controller.select_destination_and_move(&to));
                self.finish_move(moved, summary);
            }
        }

        Ok(true)
    }

    fn finish_move(&mut self, moved: Result<MoveOutcome, GameError>, summary: &mut SessionSummary) {
        let outcome = match moved {
            Ok(outcome) => outcome,
            Err(GameError::IllegalMove { from, to }) => {
                self.message = Some(format!(
                    "error: {} (enter {} again to pick another source)",
                    GameError::IllegalMove { from, to },
                    from.code()
                ));
                return;
            }
            Err(error) => return self.report(Err(error)),
        };

        self.message = Some(match outcome.phase() {
            Phase::Won => {
                summary.solved.push(outcome);
                format!(
                    "You completed the puzzle in {} moves! (minimum {})",
                    outcome.move_count, outcome.optimal_move_count
                )
            }
            _ => format!(
                "Moved disk {} from {} to {}.",
                outcome.disk, outcome.from, outcome.to
            ),
        });
    }

    /// Shows the error of a rejected operation, or the success message if any.
    fn report(&mut self, result: Result<Option<String>, GameError>) {
        self.message = match result {
            Ok(message) => message,
            Err(error) => {
                debug!("rejected: {}", error);
                Some(format!("error: {}", error))
            }
        };
    }

    fn show_invalid(&mut self, error: InputError) -> bool {
        debug!("{}", error);
        self.message = Some(format!("error: {}", error));
        true
    }
}

enum Answer<T> {
    Given(T),
    Invalid(InputError),
    Left,
}

/// Only I/O failures end the loop with an error.
fn read_answer<T>(result: Result<T, InputError>) -> Result<Answer<T>, InputError> {
    match result {
        Ok(input) => Ok(Answer::Given(input)),
        Err(InputError::UserExit) => Ok(Answer::Left),
        Err(error @ InputError::InvalidInput { .. }) => Ok(Answer::Invalid(error)),
        Err(error) => Err(error),
    }
}
