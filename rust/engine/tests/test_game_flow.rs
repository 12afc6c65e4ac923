use std::fs;

use yahtzee_engine::errors::GameError;
use yahtzee_engine::game::{Game, GameSettings};
use yahtzee_engine::logger::{GameLogger, TurnRecord};
use yahtzee_engine::rules::Rule;
use yahtzee_engine::turn::{RerollSelection, TurnPhase};

fn play_out(game: &mut Game) {
    while !game.is_over() {
        game.roll().expect("roll");
        game.reroll(RerollSelection::Dice(vec![1, 2])).expect("reroll");
        if game.phase() == TurnPhase::AwaitingRerollChoice {
            game.reroll(RerollSelection::All).expect("reroll all");
        }
        assert_eq!(game.phase(), TurnPhase::AwaitingScoring);
        // score from the last open rule backwards
        let next = *game.board().unscored_indices().last().unwrap() + 1;
        game.score(next).expect("score");
    }
}

#[test]
fn game_ends_after_one_turn_per_rule() {
    let mut game = Game::new_with_seed(7).unwrap();
    play_out(&mut game);
    assert_eq!(game.turns_played(), game.board().rule_count());
    assert_eq!(game.roll(), Err(GameError::GameOver));
    assert_eq!(game.reroll(RerollSelection::Keep), Err(GameError::GameOver));
    assert_eq!(game.score(1), Err(GameError::GameOver));
}

#[test]
fn history_matches_board() {
    let mut game = Game::new_with_seed(11).unwrap();
    play_out(&mut game);
    let history = game.history();
    assert_eq!(history.first().map(|r| r.rule.as_str()), Some("Chance"));
    assert_eq!(history.last().map(|r| r.rule.as_str()), Some("Aces"));
    assert_eq!(history.last().map(|r| r.total), Some(game.total_points()));
    for rec in history {
        assert_eq!(rec.rolls.len(), 3);
        let rule = game
            .board()
            .rules()
            .iter()
            .find(|r| r.name() == rec.rule)
            .unwrap();
        assert_eq!(rule.points(rec.final_faces()), rec.points);
    }
}

#[test]
fn same_seed_replays_same_game() {
    let mut a = Game::new_with_seed(314).unwrap();
    let mut b = Game::new_with_seed(314).unwrap();
    play_out(&mut a);
    play_out(&mut b);
    assert_eq!(a.history(), b.history());
}

#[test]
fn custom_rule_table() {
    let settings = GameSettings {
        dice: 4,
        sides: 8,
        rules: vec![Rule::exact("Octo", &[8, 8, 8, 1], 80), Rule::chance()],
        ..GameSettings::default()
    };
    let mut game = Game::new(settings).unwrap();
    game.roll().unwrap();
    game.hand_mut().set_faces(&[8, 1, 8, 8]).unwrap();
    game.reroll(RerollSelection::Keep).unwrap();
    assert_eq!(game.score(1), Ok(80));
    game.roll().unwrap();
    game.reroll(RerollSelection::Keep).unwrap();
    let sum = game.hand().sum();
    assert_eq!(game.score(2), Ok(sum));
    assert!(game.is_over());
    assert_eq!(game.total_points(), 80 + sum);
}

#[test]
fn turn_records_are_written_as_jsonl() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logs").join("game.jsonl");
    let mut logger = GameLogger::create(&path).expect("create logger");

    let mut game = Game::new_with_seed(5).unwrap();
    game.set_game_id(logger.next_id());
    play_out(&mut game);
    for rec in game.history() {
        logger.write(rec).expect("write");
    }

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 14);
    assert!(!contents.contains('\r'));
    let first: TurnRecord = serde_json::from_str(lines[0]).unwrap();
    assert!(first.game_id.ends_with("-000001"));
    assert_eq!(first.turn, 1);
    assert_eq!(first.seed, Some(5));
    assert!(first.ts.is_some());
}

#[test]
fn preset_timestamp_is_preserved() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ts.jsonl");
    let mut logger = GameLogger::create(&path).unwrap();
    let rec = TurnRecord {
        game_id: "20250101-000001".into(),
        turn: 1,
        rolls: vec![vec![1, 1, 2, 3, 5]],
        rule: "FibonYahtzee".into(),
        points: 100,
        total: 100,
        seed: None,
        ts: Some("2025-01-01T00:00:00Z".into()),
    };
    logger.write(&rec).unwrap();
    let back: TurnRecord =
        serde_json::from_str(fs::read_to_string(&path).unwrap().trim()).unwrap();
    assert_eq!(back, rec);
}
