//! End-to-end match scenarios through the public session API.

use noughts_engine::{
    Difficulty, GameStatus, Mark, MatchConfig, MatchSession, MinimaxStrategy, Mode, MoveError,
    RandomStrategy, Strategy,
};

fn two_player() -> MatchSession {
    MatchSession::new(MatchConfig::new(
        Mode::TwoPlayer,
        Difficulty::Easy,
        "Ada",
        "Bob",
    ))
}

#[test]
fn test_row_zero_win_reports_line_and_winner() {
    // [X, X, _, O, O, _, _, _, _] with X to move at 2.
    let mut session = two_player();
    session.start();
    for index in [0, 3, 1, 4] {
        session.submit_move(index).unwrap();
    }
    let outcome = session.submit_move(2).unwrap();
    assert_eq!(outcome.status, GameStatus::Won(Mark::X));
    assert_eq!(outcome.winning_line, Some([0, 1, 2]));
    assert_eq!(
        outcome.moves.last().map(|m| (m.index, m.mark)),
        Some((2, Mark::X))
    );
}

#[test]
fn test_full_board_without_line_is_a_draw() {
    let mut session = two_player();
    session.start();
    let mut last = None;
    for index in [0, 1, 2, 3, 4, 6, 5, 8, 7] {
        last = Some(session.submit_move(index).unwrap());
    }
    let outcome = last.unwrap();
    assert_eq!(outcome.status, GameStatus::Draw);
    assert_eq!(outcome.winning_line, None);
    assert_eq!(session.status(), GameStatus::Draw);
}

#[test]
fn test_double_submission_for_same_side_is_rejected() {
    let mut session = two_player();
    session.start();
    session.submit_move_for(Mark::X, 0).unwrap();
    assert_eq!(
        session.submit_move_for(Mark::X, 4),
        Err(MoveError::NotYourTurn(Mark::X))
    );
    // The board is untouched by the rejected submission.
    assert_eq!(session.board().available_moves().count(), 8);
}

#[test]
fn test_occupied_and_out_of_range_rejections() {
    let mut session = two_player();
    session.start();
    session.submit_move(0).unwrap();
    assert_eq!(session.submit_move(0), Err(MoveError::CellOccupied(0)));
    assert_eq!(session.submit_move(9), Err(MoveError::InvalidIndex(9)));
    assert_eq!(session.to_move(), Mark::O);
}

#[test]
fn test_vs_computer_hard_never_beaten_by_random_human() {
    for seed in 0..30 {
        let config = MatchConfig::new(Mode::VsComputer, Difficulty::Hard, "Ada", "");
        let mut session = MatchSession::with_strategy(config, Box::new(MinimaxStrategy::new()));
        session.start();
        let mut human = RandomStrategy::seeded(seed);
        loop {
            if session.status() != GameStatus::InProgress {
                break;
            }
            let index = human
                .select_move(session.board(), Mark::X, Mark::O)
                .unwrap();
            session.submit_move(index).unwrap();
        }
        assert_ne!(
            session.status(),
            GameStatus::Won(Mark::X),
            "random human beat minimax with seed {seed}"
        );
    }
}

#[test]
fn test_vs_computer_outcome_carries_the_reply() {
    let config = MatchConfig::new(Mode::VsComputer, Difficulty::Medium, "Ada", "");
    let mut session = MatchSession::new(config);
    session.start();
    let outcome = session.submit_move(4).unwrap();
    assert_eq!(outcome.moves[0].mark, Mark::X);
    assert_eq!(outcome.moves[1].mark, Mark::O);
    assert_ne!(outcome.moves[0].index, outcome.moves[1].index);
    assert_eq!(session.to_move(), Mark::X);
}

#[test]
fn test_play_again_reuses_configuration() {
    let mut session = two_player();
    session.start();
    for index in [0, 3, 1, 4, 2] {
        session.submit_move(index).unwrap();
    }
    assert_eq!(session.status(), GameStatus::Won(Mark::X));

    session.start();
    assert_eq!(session.status(), GameStatus::InProgress);
    assert_eq!(session.config().player1_name(), "Ada");
    assert_eq!(session.status_line(), "Ada's turn (X)");
}
