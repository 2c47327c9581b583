use broadside::{run, Game, GameError, GuessOutcome};

const FLEET: [&str; 5] = [
    "A 0 0 0 4",
    "B 2 0 2 3",
    "D 4 0 4 2",
    "P 6 0 6 1",
    "S 8 0 8 2",
];

fn replay(guesses: &[&str]) -> Result<Vec<String>, GameError> {
    let mut lines = Vec::new();
    run(FLEET, guesses.iter().copied(), |outcome| {
        lines.push(outcome.to_string())
    })?;
    Ok(lines)
}

#[test]
fn test_carrier_sink_scenario() {
    let lines = replay(&["0 0", "0 0", "0 1", "0 2", "0 3", "0 4"]).unwrap();
    assert_eq!(
        lines,
        vec!["hit", "hit (again)", "hit", "hit", "hit", "A sunk"]
    );
}

#[test]
fn test_output_vocabulary() {
    let lines = replay(&["10 5", "9 9", "9 9", "6 0", "6 0", "6 1"]).unwrap();
    assert_eq!(
        lines,
        vec![
            "illegal guess",
            "miss",
            "miss (again)",
            "hit",
            "hit (again)",
            "P sunk"
        ]
    );
}

#[test]
fn test_game_over_stops_the_run() {
    // every ship cell once, then guesses that must never be processed
    let mut guesses: Vec<String> = Vec::new();
    for record in FLEET {
        let mut fields = record.split_whitespace();
        let _code = fields.next().unwrap();
        let coords: Vec<i32> = fields.map(|t| t.parse().unwrap()).collect();
        for y in coords[1]..=coords[3] {
            guesses.push(format!("{} {}", coords[0], y));
        }
    }
    let extra_at = guesses.len();
    guesses.push("9 9".into());
    guesses.push("9 9".into());

    let mut lines = Vec::new();
    run(FLEET, guesses, |outcome| lines.push(outcome)).unwrap();

    // one outcome per ship cell plus the terminal line, nothing after
    assert_eq!(lines.len(), extra_at + 1);
    assert_eq!(lines[extra_at - 1], GuessOutcome::Sunk('S'));
    assert_eq!(lines[extra_at], GuessOutcome::AllSunk);
    assert_eq!(lines.iter().filter(|o| matches!(o, GuessOutcome::Sunk(_))).count(), 5);
}

#[test]
fn test_fleet_error_aborts_before_guesses() {
    let err = run(["A 0 0 0 3"], ["0 0"], |_| panic!("no outcomes expected"))
        .unwrap_err();
    assert_eq!(err, GameError::IncorrectSize("A 0 0 0 3".into()));
}

#[test]
fn test_malformed_guess_is_fatal() {
    let err = replay(&["0 0", "zero one"]).unwrap_err();
    assert_eq!(err, GameError::MalformedGuess("zero one".into()));

    let err = replay(&["3"]).unwrap_err();
    assert_eq!(err, GameError::MalformedGuess("3".into()));
}

#[test]
fn test_surplus_guess_tokens_ignored() {
    let lines = replay(&["9 9 extra tokens"]).unwrap();
    assert_eq!(lines, vec!["miss"]);
}

#[test]
fn test_blank_lines_skipped() {
    let mut lines = Vec::new();
    run(
        ["A 0 0 0 4", "", "B 2 0 2 3", "D 4 0 4 2", "P 6 0 6 1", "S 8 0 8 2"],
        ["", "9 9", "  "],
        |outcome| lines.push(outcome),
    )
    .unwrap();
    assert_eq!(lines, vec![GuessOutcome::Miss]);
}

#[test]
fn test_game_resolve_and_is_over() {
    let mut game = Game::from_placements(FLEET).unwrap();
    assert!(!game.is_over());
    assert_eq!(game.resolve(" 0 0 ").unwrap(), GuessOutcome::Hit);

    for (x, y) in game
        .board()
        .ships()
        .iter()
        .flat_map(|s| s.cells().to_vec())
        .collect::<Vec<_>>()
    {
        game.resolve(&format!("{} {}", x, y)).unwrap();
    }
    assert!(game.is_over());
    assert!(game.board().all_sunk());
}
