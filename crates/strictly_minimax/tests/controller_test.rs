//! Turn orchestration scenarios.

use strictly_minimax::{
    Board, Engine, Game, GameStatus, MoveError, Phase, Player, Position, Turn, rules,
};

fn seeded() -> Game {
    Game::with_engine(Engine::seeded(2024))
}

#[test]
fn test_immediate_human_win_skips_machine() {
    // X X . / O O . / . . .
    let board: Board = "XX.OO....".parse().unwrap();
    let mut game = Game::from_board(board, Engine::seeded(0)).unwrap();

    let status = game.apply_human_move(0, 2);

    assert_eq!(status, GameStatus::HumanWin);
    assert_eq!(game.phase(), Phase::GameOver);
    assert_eq!(
        game.history(),
        &[Turn::new(Player::Human, Position::TopRight)]
    );
    assert_eq!(game.board().count(Player::Machine), 2);
}

#[test]
fn test_occupied_square_is_ignored() {
    let mut game = seeded();
    game.apply_human_move(0, 0);
    let board_before = *game.board();
    let status_before = game.status();

    assert_eq!(game.apply_human_move(0, 0), status_before);
    assert_eq!(*game.board(), board_before);
    assert_eq!(game.history().len(), 2);
}

#[test]
fn test_out_of_range_is_ignored() {
    let mut game = seeded();
    assert_eq!(game.apply_human_move(0, 5), GameStatus::InProgress);
    assert_eq!(game.apply_human_move(9, 9), GameStatus::InProgress);
    assert_eq!(*game.board(), Board::new());
}

#[test]
fn test_moves_after_game_over_are_ignored() {
    let board: Board = "XX.OO....".parse().unwrap();
    let mut game = Game::from_board(board, Engine::seeded(0)).unwrap();
    game.apply_human_move(0, 2);
    let finished = *game.board();

    assert_eq!(game.try_human_move(2, 2), Err(MoveError::GameOver));
    assert_eq!(game.apply_human_move(2, 2), GameStatus::HumanWin);
    assert_eq!(*game.board(), finished);
}

#[test]
fn test_empty_cells_shrink_with_each_mark() {
    let mut game = seeded();
    let mut marks = 0;
    for pos in Position::ALL {
        if game.status().is_over() {
            break;
        }
        if game.board().is_empty(pos) {
            game.apply_human_move(pos.row(), pos.col());
            let added = game.history().len() - marks;
            assert!(added == 1 || added == 2);
            marks = game.history().len();
            assert_eq!(game.board().empty_cells().len(), 9 - marks);
        }
    }
    assert!(game.status().is_over());
    assert_ne!(game.status(), GameStatus::HumanWin);
}

#[test]
fn test_machine_takes_win_when_offered() {
    // X . . / O O . / X . .  human ignores the threat at (1,2)
    let board: Board = "X..OO.X..".parse().unwrap();
    let mut game = Game::from_board(board, Engine::seeded(0)).unwrap();
    let status = game.apply_human_move(0, 1);
    assert_eq!(status, GameStatus::MachineWin);
    assert_eq!(
        game.board().get(Position::MiddleRight),
        strictly_minimax::Square::Occupied(Player::Machine)
    );
}

#[test]
fn test_full_board_without_line_is_draw() {
    let board: Board = "XOXXOOOXX".parse().unwrap();
    assert_eq!(rules::status(&board), GameStatus::Draw);
    assert!(board.empty_cells().is_empty());
}

#[test]
fn test_reset_restores_empty_game() {
    let board: Board = "XX.OO....".parse().unwrap();
    let mut game = Game::from_board(board, Engine::seeded(0)).unwrap();
    game.apply_human_move(0, 2);
    game.reset();

    assert_eq!(*game.board(), Board::new());
    assert_eq!(*game.start(), Board::new());
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.phase(), Phase::AwaitingHumanMove);
}

#[test]
fn test_from_board_rejects_human_line() {
    // Human already won with equal counts: unreachable with the human to move.
    let board: Board = "XXXOOO...".parse().unwrap();
    assert!(matches!(
        Game::from_board(board, Engine::seeded(0)),
        Err(MoveError::InvalidPosition(_))
    ));
}
