use broadside::{Board, GuessOutcome, BOARD_SIZE, NUM_SHIPS, SHIPS, TOTAL_SHIP_CELLS};
use proptest::prelude::*;
use rand::seq::SliceRandom;
use rand::{rngs::SmallRng, Rng, SeedableRng};

const N: usize = BOARD_SIZE as usize;

/// Generate five non-overlapping placement records, one per class, with
/// random positions, orientations, and endpoint order.
fn random_fleet(seed: u64) -> Vec<String> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut occupied = [[false; N]; N];
    let mut records = Vec::new();
    for class in SHIPS {
        let len = class.length();
        loop {
            let horizontal: bool = rng.random();
            let (x1, y1) = if horizontal {
                (rng.random_range(0..=N - len), rng.random_range(0..N))
            } else {
                (rng.random_range(0..N), rng.random_range(0..=N - len))
            };
            let cells: Vec<(usize, usize)> = (0..len)
                .map(|i| if horizontal { (x1 + i, y1) } else { (x1, y1 + i) })
                .collect();
            if cells.iter().any(|&(x, y)| occupied[x][y]) {
                continue;
            }
            for &(x, y) in &cells {
                occupied[x][y] = true;
            }
            let (x2, y2) = *cells.last().unwrap();
            let record = if rng.random() {
                format!("{} {} {} {} {}", class.code(), x1, y1, x2, y2)
            } else {
                format!("{} {} {} {} {}", class.code(), x2, y2, x1, y1)
            };
            records.push(record);
            break;
        }
    }
    records
}

/// Swap the two endpoints of a placement record.
fn reverse_record(record: &str) -> String {
    let fields: Vec<&str> = record.split_whitespace().collect();
    format!(
        "{} {} {} {} {}",
        fields[0], fields[3], fields[4], fields[1], fields[2]
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn fleet_spans_are_disjoint_and_cover_17_cells(seed in any::<u64>()) {
        let board = Board::from_placements(random_fleet(seed)).unwrap();
        prop_assert_eq!(board.ships().len(), NUM_SHIPS);
        // disjoint spans of the right lengths union to exactly 17 cells
        let total: usize = board.ships().iter().map(|s| s.cells().len()).sum();
        prop_assert_eq!(total, TOTAL_SHIP_CELLS);
        prop_assert_eq!(board.ship_map().count_ones(), TOTAL_SHIP_CELLS);
        for ship in board.ships() {
            prop_assert_eq!(ship.cells().len(), ship.class().length());
        }
    }

    #[test]
    fn endpoint_order_is_irrelevant(seed in any::<u64>()) {
        let fleet = random_fleet(seed);
        let reversed: Vec<String> = fleet.iter().map(|r| reverse_record(r)).collect();
        let a = Board::from_placements(&fleet).unwrap();
        let b = Board::from_placements(&reversed).unwrap();
        prop_assert_eq!(a.ship_map(), b.ship_map());
        for (s1, s2) in a.ships().iter().zip(b.ships()) {
            prop_assert_eq!(s1.cells(), s2.cells());
            prop_assert_eq!(s1.orientation(), s2.orientation());
        }
    }

    #[test]
    fn sinking_in_any_order_sinks_on_last_cell(
        seed in any::<u64>(),
        ship_index in 0..NUM_SHIPS,
    ) {
        let mut rng = SmallRng::seed_from_u64(seed ^ 0x5eed);
        let mut board = Board::from_placements(random_fleet(seed)).unwrap();
        let mut cells = board.ships()[ship_index].cells().to_vec();
        cells.shuffle(&mut rng);
        let code = board.ships()[ship_index].class().code();
        for (i, (x, y)) in cells.iter().enumerate() {
            let outcome = board.guess(*x as i32, *y as i32);
            if i + 1 < cells.len() {
                prop_assert_eq!(outcome, GuessOutcome::Hit);
            } else {
                prop_assert_eq!(outcome, GuessOutcome::Sunk(code));
            }
        }
    }

    #[test]
    fn second_guess_always_repeats(
        seed in any::<u64>(),
        x in 0..N as i32,
        y in 0..N as i32,
    ) {
        let mut board = Board::from_placements(random_fleet(seed)).unwrap();
        let first = board.guess(x, y);
        let sunk_after_first = board.sunk_count();
        let second = board.guess(x, y);
        match first {
            GuessOutcome::Miss => prop_assert_eq!(second, GuessOutcome::MissAgain),
            GuessOutcome::Hit | GuessOutcome::Sunk(_) => {
                prop_assert_eq!(second, GuessOutcome::HitAgain)
            }
            other => prop_assert!(false, "unexpected first outcome {:?}", other),
        }
        // the repeat never advances sinking
        prop_assert_eq!(board.sunk_count(), sunk_after_first);
    }
}
