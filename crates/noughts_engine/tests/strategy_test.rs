//! Self-play properties for the strategy tiers.

use noughts_engine::{
    Board, GameStatus, HeuristicStrategy, Mark, MinimaxStrategy, RandomStrategy, Strategy,
    has_line, status,
};

/// Plays one full game between two strategies; `first` plays X.
fn play_out<'a>(first: &'a mut dyn Strategy, second: &'a mut dyn Strategy) -> GameStatus {
    let mut board = Board::new();
    let mut mark = Mark::X;
    loop {
        let current = status(&board);
        if current != GameStatus::InProgress {
            return current;
        }
        let strategy = match mark {
            Mark::X => &mut *first,
            Mark::O => &mut *second,
        };
        let index = strategy
            .select_move(&board, mark, mark.opponent())
            .expect("in-progress board has a move");
        board.place(index, mark).unwrap();
        mark = mark.opponent();
    }
}

#[test]
fn test_minimax_moving_second_never_loses_to_random() {
    for seed in 0..100 {
        let mut random = RandomStrategy::seeded(seed);
        let mut minimax = MinimaxStrategy::new();
        let result = play_out(&mut random, &mut minimax);
        assert_ne!(
            result,
            GameStatus::Won(Mark::X),
            "minimax lost as O against seed {seed}"
        );
    }
}

#[test]
fn test_minimax_moving_first_never_loses_to_random() {
    for seed in 0..100 {
        let mut minimax = MinimaxStrategy::new();
        let mut random = RandomStrategy::seeded(seed);
        let result = play_out(&mut minimax, &mut random);
        assert_ne!(
            result,
            GameStatus::Won(Mark::O),
            "minimax lost as X against seed {seed}"
        );
    }
}

#[test]
fn test_minimax_never_loses_to_heuristic() {
    for seed in 0..20 {
        let mut heuristic = HeuristicStrategy::seeded(seed);
        let mut minimax = MinimaxStrategy::new();
        let result = play_out(&mut heuristic, &mut minimax);
        assert_ne!(result, GameStatus::Won(Mark::X), "seed {seed}");
    }
}

#[test]
fn test_minimax_self_play_is_a_draw() {
    let mut a = MinimaxStrategy::new();
    let mut b = MinimaxStrategy::new();
    assert_eq!(play_out(&mut a, &mut b), GameStatus::Draw);
}

/// Cells that would complete a line for `mark` if played now.
fn threats(board: &Board, mark: Mark) -> Vec<usize> {
    board
        .available_moves()
        .filter(|&index| {
            let mut scratch = board.clone();
            scratch.place(index, mark).unwrap();
            has_line(&scratch, mark)
        })
        .collect()
}

#[test]
fn test_heuristic_wins_or_answers_every_single_threat() {
    // Random play can only beat the heuristic through a double threat;
    // a single open threat must always be taken (as a win) or blocked.
    for seed in 0..50 {
        let mut random = RandomStrategy::seeded(seed);
        let mut heuristic = HeuristicStrategy::seeded(seed + 1);
        let mut board = Board::new();
        loop {
            if status(&board) != GameStatus::InProgress {
                break;
            }
            let x = random.select_move(&board, Mark::X, Mark::O).unwrap();
            board.place(x, Mark::X).unwrap();
            if status(&board) != GameStatus::InProgress {
                break;
            }

            let own_threats = threats(&board, Mark::O);
            let opponent_threats = threats(&board, Mark::X);
            let o = heuristic.select_move(&board, Mark::O, Mark::X).unwrap();
            board.place(o, Mark::O).unwrap();

            if !own_threats.is_empty() {
                assert_eq!(status(&board), GameStatus::Won(Mark::O), "seed {seed}");
            } else if opponent_threats.len() == 1 {
                assert_eq!(o, opponent_threats[0], "seed {seed}");
            }
        }
    }
}
