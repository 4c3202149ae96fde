use std::ops::RangeInclusive;
use std::str::FromStr;

use log::{debug, info};
use thiserror::Error;
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use crate::board::error::BoardError;
use crate::board::peg::Peg;
use crate::board::peg_stack::Disk;
use crate::board::{Board, Snapshot};

pub const DISK_COUNT_RANGE: RangeInclusive<u8> = 3..=8;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid disk count {input:?}, please enter a number between 3 and 8")]
    InvalidDiskCount { input: String },
    #[error("invalid peg {input:?}, use L, M or R")]
    InvalidPegSelection { input: String },
    #[error("cannot move a disk from {from} to {to}")]
    IllegalMove { from: Peg, to: Peg },
    #[error("select a source peg first")]
    NoSourceSelected,
    #[error("no game in progress, choose a disk count first")]
    NotPlaying,
    #[error("board error: {error}")]
    BoardError { error: BoardError },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    SelectingDiskCount,
    Playing,
    /// Only observable through `MoveOutcome::won`, the controller resets as
    /// soon as a game is won.
    Won,
}

/// The result of an accepted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub disk: Disk,
    pub from: Peg,
    pub to: Peg,
    pub move_count: u32,
    pub optimal_move_count: u32,
    pub won: bool,
}

impl MoveOutcome {
    pub fn phase(&self) -> Phase {
        if self.won {
            Phase::Won
        } else {
            Phase::Playing
        }
    }
}

/// State of a game in progress.
#[derive(Clone, Debug)]
struct GameState {
    board: Board,
    user_move_count: u32,
    optimal_move_count: u32,
    pending_source: Option<Peg>,
}

impl GameState {
    fn new(disk_count: u8) -> Self {
        Self {
            board: Board::starting_position(disk_count),
            user_move_count: 0,
            optimal_move_count: optimal_move_count(disk_count),
            pending_source: None,
        }
    }
}

/// 2^n - 1, the fewest moves that solve a tower of `disk_count` disks.
/// Saturates at `u32::MAX` for towers of 32 disks or more.
pub fn optimal_move_count(disk_count: u8) -> u32 {
    1u32.checked_shl(u32::from(disk_count))
        .map_or(u32::MAX, |power| power - 1)
}

/// Parses user text into a disk count, rejecting anything that is not an
/// integer in `DISK_COUNT_RANGE`.
pub fn parse_disk_count(input: &str) -> Result<u8, GameError> {
    let invalid = || GameError::InvalidDiskCount {
        input: input.trim().to_string(),
    };
    let disk_count = input.trim().parse::<u8>().map_err(|_| invalid())?;
    if !DISK_COUNT_RANGE.contains(&disk_count) {
        return Err(invalid());
    }
    Ok(disk_count)
}

fn resolve_peg(input: &str) -> Result<Peg, GameError> {
    Peg::from_str(input).map_err(|_| GameError::InvalidPegSelection {
        input: input.trim().to_string(),
    })
}

/// Drives a single player's games: choosing a disk count, selecting source and
/// destination pegs, and detecting a win. Reset happens in place.
#[derive(Clone, Debug, Default)]
pub struct PuzzleController {
    game: Option<GameState>,
}

impl PuzzleController {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg_attr(feature = "instrumentation", instrument(skip_all))]
    pub fn start_game(&mut self, disk_count: u8) -> Result<(), GameError> {
        if !DISK_COUNT_RANGE.contains(&disk_count) {
            debug!("rejected disk count {}", disk_count);
            return Err(GameError::InvalidDiskCount {
                input: disk_count.to_string(),
            });
        }

        let game = GameState::new(disk_count);
        info!(
            "starting game with {} disks (minimum {} moves)",
            disk_count, game.optimal_move_count
        );
        self.game = Some(game);
        Ok(())
    }

    /// Remembers `input` as the source of the next move and returns the
    /// resolved peg. An unrecognised peg leaves any previous selection intact.
    #[cfg_attr(feature = "instrumentation", instrument(skip_all))]
    pub fn select_source(&mut self, input: &str) -> Result<Peg, GameError> {
        let game = self.game.as_mut().ok_or(GameError::NotPlaying)?;
        let peg = resolve_peg(input)?;
        debug!("selected source peg {}", peg);
        game.pending_source = Some(peg);
        Ok(peg)
    }

    /// Moves the top disk of the pending source onto the peg named by `input`.
    /// On any rejection the stacks and the pending source are left as they
    /// were, so the player can try another destination.
    #[cfg_attr(feature = "instrumentation", instrument(skip_all))]
    pub fn select_destination_and_move(&mut self, input: &str) -> Result<MoveOutcome, GameError> {
        let game = self.game.as_mut().ok_or(GameError::NotPlaying)?;
        let from = game.pending_source.ok_or(GameError::NoSourceSelected)?;
        let to = resolve_peg(input)?;

        if !game.board.is_legal_move(from, to) {
            debug!("rejected move {} -> {}", from, to);
            return Err(GameError::IllegalMove { from, to });
        }

        let disk = game
            .board
            .apply_move(from, to)
            .map_err(|error| GameError::BoardError { error })?;
        game.user_move_count += 1;
        game.pending_source = None;

        let outcome = MoveOutcome {
            disk,
            from,
            to,
            move_count: game.user_move_count,
            optimal_move_count: game.optimal_move_count,
            won: game.board.is_complete(),
        };
        debug!(
            "moved disk {} from {} to {} (move {})",
            disk, from, to, outcome.move_count
        );

        if outcome.won {
            info!(
                "puzzle solved in {} moves (minimum {})",
                outcome.move_count, outcome.optimal_move_count
            );
            self.reset();
        }

        Ok(outcome)
    }

    /// Drops the pending source, returning it if there was one.
    pub fn clear_source(&mut self) -> Result<Option<Peg>, GameError> {
        let game = self.game.as_mut().ok_or(GameError::NotPlaying)?;
        let cleared = game.pending_source.take();
        if let Some(peg) = cleared {
            debug!("cleared source peg {}", peg);
        }
        Ok(cleared)
    }

    pub fn reset(&mut self) {
        if self.game.take().is_some() {
            debug!("game reset");
        }
    }

    pub fn phase(&self) -> Phase {
        match self.game {
            Some(_) => Phase::Playing,
            None => Phase::SelectingDiskCount,
        }
    }

    pub fn board(&self) -> Option<&Board> {
        self.game.as_ref().map(|game| &game.board)
    }

    pub fn snapshot(&self) -> Option<Snapshot> {
        self.board().map(Board::snapshot)
    }

    pub fn disk_count(&self) -> Option<u8> {
        self.board().map(Board::disk_count)
    }

    pub fn user_move_count(&self) -> u32 {
        self.game.as_ref().map_or(0, |game| game.user_move_count)
    }

    pub fn optimal_move_count(&self) -> Option<u32> {
        self.game.as_ref().map(|game| game.optimal_move_count)
    }

    pub fn pending_source(&self) -> Option<Peg> {
        self.game.as_ref().and_then(|game| game.pending_source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THREE_DISK_SOLUTION: [(&str, &str); 7] = [
        ("L", "R"),
        ("L", "M"),
        ("R", "M"),
        ("L", "R"),
        ("M", "L"),
        ("M", "R"),
        ("L", "R"),
    ];

    fn playing(disk_count: u8) -> PuzzleController {
        let mut controller = PuzzleController::new();
        controller.start_game(disk_count).unwrap();
        controller
    }

    fn play(controller: &mut PuzzleController, from: &str, to: &str) -> MoveOutcome {
        controller.select_source(from).unwrap();
        controller.select_destination_and_move(to).unwrap()
    }

    #[test]
    fn test_new_controller_is_selecting_disk_count() {
        let controller = PuzzleController::new();
        assert_eq!(controller.phase(), Phase::SelectingDiskCount);
        assert_eq!(controller.snapshot(), None);
        assert_eq!(controller.pending_source(), None);
    }

    #[test]
    fn test_start_game_accepts_three_through_eight() {
        for disk_count in 3..=8u8 {
            let controller = playing(disk_count);
            assert_eq!(controller.phase(), Phase::Playing);
            assert_eq!(controller.disk_count(), Some(disk_count));
            assert_eq!(controller.user_move_count(), 0);
            assert_eq!(controller.pending_source(), None);

            let snapshot = controller.snapshot().unwrap();
            let non_empty: Vec<Peg> = snapshot
                .iter()
                .filter(|(_, disks)| !disks.is_empty())
                .map(|(peg, _)| peg)
                .collect();
            assert_eq!(non_empty, vec![Peg::Left]);
            let expected: Vec<Disk> = (1..=disk_count).rev().collect();
            assert_eq!(snapshot.get(Peg::Left), expected.as_slice());
        }
    }

    #[test]
    fn test_start_game_rejects_out_of_range_counts() {
        let mut controller = PuzzleController::new();
        for disk_count in [0u8, 1, 2, 9, 64, 255] {
            assert_eq!(
                controller.start_game(disk_count),
                Err(GameError::InvalidDiskCount {
                    input: disk_count.to_string()
                })
            );
            assert_eq!(controller.phase(), Phase::SelectingDiskCount);
        }
    }

    #[test]
    fn test_parse_disk_count() {
        assert_eq!(parse_disk_count("3"), Ok(3));
        assert_eq!(parse_disk_count(" 8\n"), Ok(8));
        for input in ["2", "9", "abc", "", "-4", "3.5", "1000"] {
            assert!(
                matches!(
                    parse_disk_count(input),
                    Err(GameError::InvalidDiskCount { .. })
                ),
                "{:?} should be rejected",
                input
            );
        }
    }

    #[test]
    fn test_optimal_move_count_is_two_to_the_n_minus_one() {
        for disk_count in 3..=8u8 {
            let controller = playing(disk_count);
            let expected = 2u32.pow(u32::from(disk_count)) - 1;
            assert_eq!(controller.optimal_move_count(), Some(expected));
        }
        assert_eq!(optimal_move_count(3), 7);
        assert_eq!(optimal_move_count(8), 255);
    }

    #[test]
    fn test_optimal_move_count_saturates_for_huge_towers() {
        assert_eq!(optimal_move_count(31), 2u32.pow(31) - 1);
        assert_eq!(optimal_move_count(32), u32::MAX);
        assert_eq!(optimal_move_count(255), u32::MAX);
    }

    #[test]
    fn test_select_source_is_case_insensitive() {
        let mut controller = playing(3);
        assert_eq!(controller.select_source("l"), Ok(Peg::Left));
        assert_eq!(controller.select_source("M"), Ok(Peg::Middle));
        assert_eq!(controller.pending_source(), Some(Peg::Middle));
    }

    #[test]
    fn test_invalid_source_keeps_previous_selection() {
        let mut controller = playing(3);
        controller.select_source("L").unwrap();
        assert_eq!(
            controller.select_source("x"),
            Err(GameError::InvalidPegSelection {
                input: "x".to_string()
            })
        );
        assert_eq!(controller.pending_source(), Some(Peg::Left));
    }

    #[test]
    fn test_selecting_an_empty_source_is_allowed() {
        let mut controller = playing(3);
        assert_eq!(controller.select_source("R"), Ok(Peg::Right));
    }

    #[test]
    fn test_destination_without_source_is_rejected() {
        let mut controller = playing(3);
        let before = controller.snapshot();
        assert_eq!(
            controller.select_destination_and_move("R"),
            Err(GameError::NoSourceSelected)
        );
        assert_eq!(controller.snapshot(), before);
        assert_eq!(controller.user_move_count(), 0);
    }

    #[test]
    fn test_clear_source_allows_picking_another_peg() {
        let mut controller = playing(3);
        controller.select_source("M").unwrap();
        assert_eq!(controller.clear_source(), Ok(Some(Peg::Middle)));
        assert_eq!(controller.pending_source(), None);
        assert_eq!(
            controller.select_destination_and_move("R"),
            Err(GameError::NoSourceSelected)
        );
        assert_eq!(controller.clear_source(), Ok(None));
        assert_eq!(PuzzleController::new().clear_source(), Err(GameError::NotPlaying));
    }

    #[test]
    fn test_selection_outside_a_game_is_rejected() {
        let mut controller = PuzzleController::new();
        assert_eq!(controller.select_source("L"), Err(GameError::NotPlaying));
        assert_eq!(
            controller.select_destination_and_move("R"),
            Err(GameError::NotPlaying)
        );
    }

    #[test]
    fn test_invalid_destination_keeps_source() {
        let mut controller = playing(3);
        controller.select_source("L").unwrap();
        assert_eq!(
            controller.select_destination_and_move("Q"),
            Err(GameError::InvalidPegSelection {
                input: "Q".to_string()
            })
        );
        assert_eq!(controller.pending_source(), Some(Peg::Left));
        assert_eq!(controller.user_move_count(), 0);
    }

    #[test]
    fn test_same_peg_is_an_illegal_move() {
        let mut controller = playing(3);
        controller.select_source("L").unwrap();
        assert_eq!(
            controller.select_destination_and_move("L"),
            Err(GameError::IllegalMove {
                from: Peg::Left,
                to: Peg::Left
            })
        );

        // also with an empty peg
        controller.select_source("M").unwrap();
        assert_eq!(
            controller.select_destination_and_move("m"),
            Err(GameError::IllegalMove {
                from: Peg::Middle,
                to: Peg::Middle
            })
        );
    }

    #[test]
    fn test_move_from_empty_peg_is_illegal_and_keeps_source() {
        let mut controller = playing(3);
        let before = controller.snapshot();
        controller.select_source("M").unwrap();
        assert_eq!(
            controller.select_destination_and_move("R"),
            Err(GameError::IllegalMove {
                from: Peg::Middle,
                to: Peg::Right
            })
        );
        assert_eq!(controller.pending_source(), Some(Peg::Middle));
        assert_eq!(controller.snapshot(), before);
        assert_eq!(controller.user_move_count(), 0);
    }

    #[test]
    fn test_larger_onto_smaller_is_rejected_without_changes() {
        let mut controller = playing(3);
        play(&mut controller, "L", "R");
        let before = controller.snapshot();

        controller.select_source("L").unwrap();
        assert_eq!(
            controller.select_destination_and_move("R"),
            Err(GameError::IllegalMove {
                from: Peg::Left,
                to: Peg::Right
            })
        );
        assert_eq!(controller.snapshot(), before);
        assert_eq!(controller.user_move_count(), 1);

        // retry with another destination without reselecting
        let outcome = controller.select_destination_and_move("M").unwrap();
        assert_eq!(outcome.disk, 2);
        assert_eq!(outcome.move_count, 2);
    }

    #[test]
    fn test_legal_move_updates_stacks_and_clears_source() {
        let mut controller = playing(4);
        let outcome = play(&mut controller, "L", "M");
        assert_eq!(
            outcome,
            MoveOutcome {
                disk: 1,
                from: Peg::Left,
                to: Peg::Middle,
                move_count: 1,
                optimal_move_count: 15,
                won: false,
            }
        );
        assert_eq!(controller.pending_source(), None);

        let snapshot = controller.snapshot().unwrap();
        assert_eq!(snapshot.get(Peg::Left), &[4, 3, 2]);
        assert_eq!(snapshot.get(Peg::Middle), &[1]);
        assert!(snapshot.get(Peg::Right).is_empty());
    }

    #[test]
    fn test_three_disk_game_is_won_in_seven_moves() {
        let mut controller = playing(3);
        let mut outcomes = Vec::new();
        for (from, to) in THREE_DISK_SOLUTION {
            outcomes.push(play(&mut controller, from, to));
        }

        let last = outcomes.last().unwrap();
        assert!(last.won);
        assert_eq!(last.move_count, 7);
        assert!(outcomes[..6].iter().all(|outcome| !outcome.won));

        // the controller resets itself after a win
        assert_eq!(controller.phase(), Phase::SelectingDiskCount);
        assert_eq!(controller.snapshot(), None);
        assert_eq!(controller.user_move_count(), 0);
    }

    #[test]
    fn test_win_reports_moves_actually_made() {
        let mut controller = playing(3);
        // wander the smallest disk before solving
        play(&mut controller, "L", "M");
        play(&mut controller, "M", "L");
        let mut last = None;
        for (from, to) in THREE_DISK_SOLUTION {
            last = Some(play(&mut controller, from, to));
        }
        let last = last.unwrap();
        assert!(last.won);
        assert_eq!(last.move_count, 9);
        assert_eq!(last.optimal_move_count, 7);
    }

    #[test]
    fn test_full_tower_on_middle_peg_does_not_win() {
        let mut controller = playing(3);
        let moves = [
            ("L", "M"),
            ("L", "R"),
            ("M", "R"),
            ("L", "M"),
            ("R", "L"),
            ("R", "M"),
            ("L", "M"),
        ];
        for (from, to) in moves {
            assert!(!play(&mut controller, from, to).won);
        }
        assert_eq!(controller.phase(), Phase::Playing);
        assert_eq!(controller.snapshot().unwrap().get(Peg::Middle), &[3, 2, 1]);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut controller = PuzzleController::new();
        controller.reset();
        assert_eq!(controller.phase(), Phase::SelectingDiskCount);

        controller.start_game(5).unwrap();
        controller.select_source("L").unwrap();
        controller.reset();
        controller.reset();
        assert_eq!(controller.phase(), Phase::SelectingDiskCount);
        assert_eq!(controller.pending_source(), None);
        assert_eq!(controller.optimal_move_count(), None);
    }

    #[test]
    fn test_start_game_replaces_game_in_progress() {
        let mut controller = playing(3);
        play(&mut controller, "L", "R");
        controller.start_game(4).unwrap();
        assert_eq!(controller.user_move_count(), 0);
        assert_eq!(controller.snapshot().unwrap().get(Peg::Left), &[4, 3, 2, 1]);
    }
}
