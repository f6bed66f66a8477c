//! Full sessions driven through the app the way the event loop drives it.

use strictly_tictactoe::{GameStatus, Player, Position, find_best_move};
use strictly_tictactoe_tui::{App, GameMode, InputCommand};

/// Lets the AI move if it is its turn, as the event loop does.
fn settle(app: &mut App) {
    while app.is_ai_turn() {
        let ai = *app.ai_player();
        let pos = find_best_move(app.game().board(), ai, ai.opponent()).unwrap();
        app.apply_ai_move(pos).unwrap();
    }
}

#[test]
fn test_human_cannot_beat_ai_with_greedy_play() {
    let mut app = App::new(GameMode::VsAi, Player::O);

    for _ in 0..3 {
        while !app.game().is_over() {
            let pos = app.game().valid_moves()[0];
            app.handle(InputCommand::Place(pos));
            settle(&mut app);
        }
        assert_ne!(app.game().status(), GameStatus::Won(Player::X));
        app.handle(InputCommand::Select);
    }

    assert_eq!(app.scoreboard().total(), 3);
    assert_eq!(app.scoreboard().wins(Player::X), 0);
}

#[test]
fn test_ai_opens_as_x() {
    let mut app = App::new(GameMode::VsAi, Player::X);
    settle(&mut app);
    assert_eq!(app.game().history().len(), 1);
    let opening = app.game().history()[0].position;
    assert!(opening.is_corner() || opening == Position::Center);
    assert_eq!(app.status_text(), "Player O's Turn");
}

#[test]
fn test_keys_ignored_while_dialog_open() {
    let mut app = App::new(GameMode::TwoPlayer, Player::O);
    for pos in [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::TopCenter,
        Position::Center,
        Position::TopRight,
    ] {
        app.handle(InputCommand::Place(pos));
    }
    assert!(app.game().is_over());

    let board = *app.game().board();
    app.handle(InputCommand::Place(Position::BottomRight));
    assert_eq!(app.game().board(), &board);
    assert!(*app.show_result());
}
