use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use tic_tac_toe::game::{Board, GameController, Outcome, Player, Scores};
use tic_tac_toe::storage::{FileStore, KeyValueStore, MemoryStore};

fn scratch_file(name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    std::env::temp_dir()
        .join(format!("tic_tac_toe_scenarios_{}_{}", std::process::id(), nanos))
        .join(name)
}

fn play<S: KeyValueStore>(controller: &mut GameController<S>, cells: &[usize]) {
    for &cell in cells {
        controller.apply_move(cell);
    }
}

#[test]
fn x_wins_down_the_first_column() {
    let mut controller = GameController::new(MemoryStore::default());
    assert_eq!(controller.scores().x, 0);

    play(&mut controller, &[0, 1, 3, 4, 6]);

    assert_eq!(controller.outcome(), Some(Outcome::Win(Player::X)));
    assert_eq!(controller.winning_line(), Some([0, 3, 6]));
    assert_eq!(controller.scores().x, 1);
}

#[test]
fn full_board_without_a_line_is_a_draw() {
    let mut controller = GameController::new(MemoryStore::default());

    play(&mut controller, &[0, 1, 2, 3, 5, 4]);
    assert_eq!(controller.outcome(), None);
    play(&mut controller, &[6, 8, 7]);

    assert!(controller.board().is_full());
    assert_eq!(controller.outcome(), Some(Outcome::Draw));
    assert_eq!(controller.scores().draws, 1);
}

#[test]
fn reset_after_decided_game_keeps_persisted_scores() {
    let mut controller = GameController::new(MemoryStore::default());
    play(&mut controller, &[0, 1, 3, 4, 6]);
    let stored_before = Scores::try_load(controller.store()).unwrap();

    controller.reset();

    assert_eq!(*controller.board(), Board::new());
    assert_eq!(controller.outcome(), None);
    assert_eq!(controller.current_turn(), Player::X);
    assert_eq!(Scores::try_load(controller.store()).unwrap(), stored_before);
}

#[test]
fn scores_carry_over_between_sessions() {
    let path = scratch_file("scores.json");

    {
        let mut first = GameController::new(FileStore::new(&path));
        play(&mut first, &[0, 1, 3, 4, 6]);
        first.reset();
        play(&mut first, &[0, 1, 2, 3, 5, 4, 6, 8, 7]);
    }

    let second = GameController::new(FileStore::new(&path));
    assert_eq!(*second.scores(), Scores { x: 1, o: 0, draws: 1 });

    let _ = fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn corrupt_scores_file_starts_fresh_and_recovers() {
    let path = scratch_file("scores.json");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "not json at all").unwrap();

    let mut controller = GameController::new(FileStore::new(&path));
    assert_eq!(*controller.scores(), Scores::default());

    play(&mut controller, &[1, 0, 4, 3, 8, 6]);
    assert_eq!(controller.outcome(), Some(Outcome::Win(Player::O)));

    let reopened = GameController::new(FileStore::new(&path));
    assert_eq!(*reopened.scores(), Scores { x: 0, o: 1, draws: 0 });

    let _ = fs::remove_dir_all(path.parent().unwrap());
}
