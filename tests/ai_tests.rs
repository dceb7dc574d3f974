use broadside::{
    Board, Coordinate, Orientation, Phase, ShotResult, TargetingError, TargetingStrategy,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn at(row: usize, col: usize) -> Coordinate {
    Coordinate::new(row, col).unwrap()
}

fn shoot(strategy: &mut TargetingStrategy, board: &mut Board) -> (Coordinate, ShotResult) {
    let outcome = strategy.take_shot(board).unwrap();
    (outcome.coordinate, outcome.result)
}

#[test]
fn test_hunt_probes_down_before_right() {
    let mut board = Board::new();
    board.place(2, Orientation::Horizontal, at(0, 0)).unwrap();
    board.place(2, Orientation::Horizontal, at(9, 8)).unwrap();
    let mut ai = TargetingStrategy::unshuffled();

    assert_eq!(ai.phase(), Phase::Scanning);
    assert_eq!(shoot(&mut ai, &mut board), (at(0, 0), ShotResult::Hit));
    assert_eq!(ai.phase(), Phase::Hunting);
    assert_eq!(shoot(&mut ai, &mut board), (at(1, 0), ShotResult::Miss));
    assert_eq!(shoot(&mut ai, &mut board), (at(0, 1), ShotResult::HitAndSunk(2)));
    assert_eq!(ai.phase(), Phase::Scanning);
    assert_eq!(shoot(&mut ai, &mut board), (at(0, 2), ShotResult::Miss));
}

#[test]
fn test_hunt_walks_through_pending_hits() {
    let mut board = Board::new();
    board.place(3, Orientation::Vertical, at(0, 0)).unwrap();
    board.place(2, Orientation::Horizontal, at(9, 8)).unwrap();
    let mut ai = TargetingStrategy::unshuffled();

    assert_eq!(shoot(&mut ai, &mut board), (at(0, 0), ShotResult::Hit));
    assert_eq!(shoot(&mut ai, &mut board), (at(1, 0), ShotResult::Hit));
    assert_eq!(ai.pending().count(), 2);
    assert_eq!(shoot(&mut ai, &mut board), (at(2, 0), ShotResult::HitAndSunk(3)));
    assert_eq!(ai.pending().count(), 0);
}

#[test]
fn test_probe_order_up_down_left_right() {
    let mut board = Board::new();
    board.place(2, Orientation::Horizontal, at(5, 5)).unwrap();
    let mut ai = TargetingStrategy::from_scan_order(vec![at(5, 5)], vec![]);

    let shots: Vec<_> = (0..5).map(|_| shoot(&mut ai, &mut board)).collect();
    assert_eq!(
        shots,
        vec![
            (at(5, 5), ShotResult::Hit),
            (at(4, 5), ShotResult::Miss),
            (at(6, 5), ShotResult::Miss),
            (at(5, 4), ShotResult::Miss),
            (at(5, 6), ShotResult::HitAndSunk(2)),
        ]
    );
    assert!(ai.has_won());
    assert_eq!(ai.phase(), Phase::Won);
    assert_eq!(ai.take_shot(&mut board).unwrap_err(), TargetingError::AlreadyWon);
}

#[test]
fn test_sinking_keeps_hits_on_other_ships() {
    let mut board = Board::new();
    board.place(2, Orientation::Horizontal, at(5, 4)).unwrap();
    board.place(2, Orientation::Horizontal, at(6, 5)).unwrap();
    let mut ai = TargetingStrategy::from_scan_order(vec![at(5, 5)], vec![]);

    assert_eq!(shoot(&mut ai, &mut board), (at(5, 5), ShotResult::Hit));
    assert_eq!(shoot(&mut ai, &mut board), (at(4, 5), ShotResult::Miss));
    assert_eq!(shoot(&mut ai, &mut board), (at(6, 5), ShotResult::Hit));
    assert_eq!(shoot(&mut ai, &mut board), (at(7, 5), ShotResult::Miss));
    assert_eq!(shoot(&mut ai, &mut board), (at(5, 4), ShotResult::HitAndSunk(2)));

    // Only the sunk ship's cells leave the queue.
    assert_eq!(ai.pending().copied().collect::<Vec<_>>(), vec![at(6, 5)]);
    assert_eq!(ai.phase(), Phase::Hunting);

    assert_eq!(shoot(&mut ai, &mut board), (at(6, 4), ShotResult::Miss));
    assert_eq!(shoot(&mut ai, &mut board), (at(6, 6), ShotResult::HitAndSunk(2)));
    assert!(ai.has_won());
}

#[test]
fn test_hunt_extends_along_axis() {
    let mut board = Board::new();
    board.place(4, Orientation::Horizontal, at(5, 3)).unwrap();
    let mut ai = TargetingStrategy::from_scan_order(vec![at(5, 5)], vec![]);

    let cells: Vec<Coordinate> = (0..7).map(|_| shoot(&mut ai, &mut board).0).collect();
    assert_eq!(
        cells,
        vec![at(5, 5), at(4, 5), at(6, 5), at(5, 4), at(5, 3), at(5, 2), at(5, 6)]
    );
    assert!(ai.has_won());
}

#[test]
fn test_falls_back_to_secondary_list() {
    let mut board = Board::new();
    board.place(2, Orientation::Horizontal, at(3, 3)).unwrap();
    let mut ai = TargetingStrategy::from_scan_order(vec![at(0, 0)], vec![at(3, 4)]);

    assert_eq!(shoot(&mut ai, &mut board), (at(0, 0), ShotResult::Miss));
    assert_eq!(shoot(&mut ai, &mut board), (at(3, 4), ShotResult::Hit));
}

#[test]
fn test_no_moves_left() {
    let mut board = Board::new();
    board.place(2, Orientation::Horizontal, at(0, 0)).unwrap();
    for cell in Coordinate::all() {
        board.fire(cell);
    }
    let mut ai = TargetingStrategy::unshuffled();
    assert_eq!(ai.take_shot(&mut board).unwrap_err(), TargetingError::NoMovesLeft);
}

#[test]
fn test_probe_exhausted_is_reported() {
    let mut board = Board::new();
    board.place(2, Orientation::Horizontal, at(0, 0)).unwrap();
    board.place(2, Orientation::Horizontal, at(9, 8)).unwrap();
    let mut ai = TargetingStrategy::unshuffled();
    assert_eq!(shoot(&mut ai, &mut board), (at(0, 0), ShotResult::Hit));

    // Fire around the pending hit behind the strategy's back.
    board.fire(at(0, 1));
    board.fire(at(1, 0));
    assert_eq!(
        ai.take_shot(&mut board).unwrap_err(),
        TargetingError::ProbeExhausted { origin: at(0, 0) }
    );
}

#[test]
fn test_sinks_tightly_packed_fleet() {
    let mut board = Board::new();
    let layout = [
        (5, Orientation::Vertical, 5, 5),
        (4, Orientation::Horizontal, 9, 6),
        (4, Orientation::Vertical, 3, 0),
        (3, Orientation::Horizontal, 1, 5),
        (3, Orientation::Horizontal, 2, 5),
        (3, Orientation::Horizontal, 3, 5),
        (2, Orientation::Horizontal, 6, 8),
        (2, Orientation::Horizontal, 2, 1),
        (2, Orientation::Vertical, 8, 0),
        (2, Orientation::Vertical, 8, 1),
    ];
    for (length, orientation, row, col) in layout {
        board.place(length, orientation, at(row, col)).unwrap();
    }
    assert!(board.fleet_complete());

    for seed in 0..50 {
        let mut target = board.clone();
        let mut ai = TargetingStrategy::new(&mut SmallRng::seed_from_u64(seed));
        let mut shots = 0;
        while !ai.has_won() {
            let outcome = ai.take_shot(&mut target).unwrap();
            assert_ne!(outcome.result, ShotResult::AlreadyShot);
            shots += 1;
            assert!(shots <= 100, "seed {} took too many shots", seed);
        }
        assert!(target.all_sunk());
    }
}
