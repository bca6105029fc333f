//! Terminal presentation of the game.
//!
//! Everything here is I/O around the core: reading moves, printing boards.
//! Readers and writers are generic so the loops run against buffers in
//! tests.

use crate::config::AppConfig;
use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use strictly_minimax::{
    Board, GameHandle, GameStatus, Player, SearchResult, SessionManager, minimax, rules,
};
use tracing::{debug, info, instrument};

/// Outcome of one line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Quit,
    Reset,
    Move(usize, usize),
    Unknown,
}

fn parse_command(line: &str) -> Command {
    match line.trim().to_lowercase().as_str() {
        "q" | "quit" | "exit" => Command::Quit,
        "r" | "reset" | "new" => Command::Reset,
        other => match strictly_minimax::Position::parse(other) {
            Some(pos) => Command::Move(pos.row(), pos.col()),
            None => match parse_coords(other) {
                Some((row, col)) => Command::Move(row, col),
                None => Command::Unknown,
            },
        },
    }
}

// Out-of-range pairs still reach the core, which ignores them.
fn parse_coords(s: &str) -> Option<(usize, usize)> {
    let mut parts = s
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    parts.next().is_none().then_some((row, col))
}

fn evaluation_label(score: i32) -> &'static str {
    match score {
        s if s > 0 => "machine wins with best play",
        s if s < 0 => "you win with best play",
        _ => "draw with best play",
    }
}

/// Interactive game loop over `input` and `output`.
///
/// Runs until the player quits or input ends. Returns the status of the
/// game at that point.
#[instrument(skip_all)]
pub fn play<R: BufRead, W: Write>(
    sessions: &SessionManager,
    config: &AppConfig,
    input: R,
    mut output: W,
) -> Result<GameStatus> {
    let handle = sessions.new_game()?;
    info!(%handle, "Starting interactive game");

    writeln!(output, "You are X. Enter \"row col\" (0-2), a square 0-8 or a name like \"center\".")?;
    writeln!(output, "Type \"reset\" for a new game or \"quit\" to leave.\n")?;
    render(sessions, handle, &mut output)?;

    let mut lines = input.lines();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            debug!("Input closed");
            break;
        };
        let line = line.context("Failed to read input")?;

        match parse_command(&line) {
            Command::Quit => break,
            Command::Reset => {
                sessions.reset_game(handle)?;
                writeln!(output, "New game.")?;
                render(sessions, handle, &mut output)?;
            }
            Command::Unknown => {
                writeln!(output, "Could not read {:?} as a move.", line.trim())?;
            }
            Command::Move(row, col) => {
                let before = sessions.current_board(handle)?;
                let status = sessions.apply_human_move(handle, row, col)?;
                let after = sessions.current_board(handle)?;
                if after == before {
                    writeln!(output, "That move is not available.")?;
                    continue;
                }

                render(sessions, handle, &mut output)?;
                if *config.show_scores() && !status.is_over() {
                    let score = minimax(&after, after.empty_count(), Player::Human).score;
                    writeln!(output, "Evaluation: {} ({})", score, evaluation_label(score))?;
                }
                if status.is_over() {
                    writeln!(output, "{}. Type \"reset\" to play again.", status)?;
                }
            }
        }
    }

    let status = sessions.status(handle)?;
    sessions.end_game(handle)?;
    Ok(status)
}

fn render<W: Write>(sessions: &SessionManager, handle: GameHandle, output: &mut W) -> Result<()> {
    let board = sessions.current_board(handle)?;
    writeln!(output, "{}\n", board)?;
    Ok(())
}

/// Machine's reply for a position with the machine to move.
///
/// # Errors
///
/// Fails when the text is not a board, when it is not the machine's turn
/// (the human must have exactly one more mark), or when the game is over.
#[instrument]
pub fn best_move(text: &str) -> Result<SearchResult> {
    let board: Board = text.parse().context("Invalid board")?;
    let human = board.count(Player::Human);
    let machine = board.count(Player::Machine);
    if human != machine + 1 {
        bail!(
            "Machine is not to move: X has {} marks, O has {}",
            human,
            machine
        );
    }
    if rules::status(&board).is_over() {
        bail!("Game is already over: {}", rules::status(&board));
    }
    Ok(minimax(&board, board.empty_count(), Player::Machine))
}

/// Plays minimax against itself from the empty board.
#[instrument(skip_all)]
pub fn self_play<W: Write>(mut output: W) -> Result<GameStatus> {
    let mut board = Board::new();
    let mut to_move = Player::Human;

    while !rules::status(&board).is_over() {
        let result = minimax(&board, board.empty_count(), to_move);
        let Some(pos) = result.best else {
            bail!("No move found on an open board");
        };
        if !board.set_move(pos, to_move) {
            bail!("Search chose occupied square {}", pos);
        }
        writeln!(output, "{} plays {}", to_move, pos)?;
        to_move = to_move.opponent();
    }

    let status = rules::status(&board);
    writeln!(output, "\n{}\n\n{}", board, status)?;
    Ok(status)
}
