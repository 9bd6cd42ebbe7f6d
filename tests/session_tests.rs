//! Whole-session tests.
//!
//! These drive complete games through the same loop the binary uses,
//! with scripted input and captured output:
//! - Each terminal phase is reachable
//! - Rejected input is reported and re-prompted
//! - Counters follow each game's rule

use std::io::Cursor;

use console_games::games::bank::BALANCE_CENTS;
use console_games::games::hangman::WRONG_GUESSES;
use console_games::{
    Bank, BankConfig, ErrorKind, Feedback, Game, GameKind, GameRng, GameState, GamesConfig,
    Hangman, HangmanConfig, NumberGuess, Outcome, Phase, RockPaperScissors, Rules, Session,
    SlotConfig, SlotMachine,
};

fn run<G: Rules>(rules: &G, state: GameState, script: &str) -> (GameState, String) {
    let mut output = Vec::new();
    let state = Session::new(rules, state)
        .run(Cursor::new(script.as_bytes()), &mut output)
        .expect("in-memory I/O cannot fail");
    (state, String::from_utf8(output).expect("output is UTF-8"))
}

/// Hangman played to a win, with every kind of rejected input along the way.
#[test]
fn test_hangman_win_with_rejections() {
    let game = Hangman::default();
    let state = game.deal("otter", GameRng::new(1));

    let (state, output) = run(&game, state, "t\nT\n42\nxy\nz\no\ne\nr\n");

    assert_eq!(state.phase(), Phase::Won);
    assert_eq!(state.public.counter(WRONG_GUESSES), 1);
    // t, z, o, e, r accepted; T, 42, xy rejected
    assert_eq!(state.public.round, 5);
    assert!(output.contains("t is already guessed"));
    assert!(output.contains("Invalid input: enter a single letter"));
    assert!(output.contains("o t t e r"));
    assert!(output.contains("YOU WIN"));
}

#[test]
fn test_hangman_loss() {
    let game = Hangman::new(HangmanConfig::default().with_words(["ox"]));
    let state = game.setup(GameRng::new(3));
    assert_eq!(state.word(), Some("ox"));

    let (state, output) = run(&game, state, "a\nb\nc\nd\ne\nf\ng\n");

    assert_eq!(state.phase(), Phase::Lost);
    assert_eq!(state.public.counter(WRONG_GUESSES), 6);
    assert_eq!(state.public.round, 6);
    assert!(output.contains("The answer is: ox"));
    assert!(output.contains("YOU LOST"));
}

#[test]
fn test_number_guess_script() {
    let game = NumberGuess::default();
    let state = game.deal(7, GameRng::new(1));

    let (state, output) = run(&game, state, "5\n9\n7\n");

    let feedback: Vec<_> = state.public.log.iter().map(|r| r.feedback.clone()).collect();
    assert_eq!(
        feedback,
        vec![Feedback::TooLow, Feedback::TooHigh, Feedback::Correct]
    );
    assert_eq!(NumberGuess::attempts(&state), 3);
    assert_eq!(state.phase(), Phase::Won);

    let low = output.find("Too Low").unwrap();
    let high = output.find("Too High").unwrap();
    let correct = output.find("Correct").unwrap();
    assert!(low < high && high < correct);
}

#[test]
fn test_number_guess_out_of_range_reprompts() {
    let game = NumberGuess::default();
    let state = game.deal(2, GameRng::new(1));

    let (state, output) = run(&game, state, "11\n0\nq\n");

    assert_eq!(state.phase(), Phase::Quit);
    assert_eq!(NumberGuess::attempts(&state), 0);
    assert!(output.contains("guess must be between 1 and 10, got 11"));
    assert!(output.contains("The correct answer was 2"));
}

#[test]
fn test_slots_until_broke_or_quit() {
    let game = SlotMachine::default();
    let state = game.setup(GameRng::new(2024));

    // Bet everything repeatedly; either the balance hits zero or we cash out.
    let script = "100\n".repeat(50) + "q\n";
    let mut session = Session::new(&game, state);
    for line in script.lines() {
        if session.state().is_terminal() {
            break;
        }
        let balance = SlotMachine::balance(session.state());
        let bet = line.parse::<i64>().map(|b| b.min(balance)).ok();
        let input = bet.map_or_else(|| line.to_string(), |b| b.to_string());

        match session.submit(&input) {
            Ok(Outcome::Win { delta }) | Ok(Outcome::Lose { delta }) => {
                assert_eq!(SlotMachine::balance(session.state()), balance + delta);
            }
            Ok(_) => {}
            Err(err) => panic!("unexpected rejection: {err}"),
        }
    }

    let state = session.into_state();
    assert!(state.is_terminal());
    assert!(SlotMachine::balance(&state) >= 0);
    if state.phase() == Phase::Lost {
        assert_eq!(SlotMachine::balance(&state), 0);
    }
}

#[test]
fn test_slots_rejections_leave_balance() {
    let game = SlotMachine::default();
    let state = game.setup(GameRng::new(1));

    let (state, output) = run(&game, state, "abc\n0\n101\nq\n");

    assert_eq!(state.phase(), Phase::Quit);
    assert_eq!(SlotMachine::balance(&state), 100);
    assert!(output.contains("Please enter a valid amount"));
    assert!(output.contains("Bet amount must be greater than 0"));
    assert!(output.contains("Bet amount can not be greater than balance"));
    assert!(output.contains("Game over: your balance is Ksh 100"));
}

#[test]
fn test_rps_session() {
    let game = RockPaperScissors::default();
    let state = game.setup(GameRng::new(8));

    let (state, output) = run(&game, state, "rock\npaper\nlizard\nscissors\nq\n");

    assert_eq!(state.phase(), Phase::Quit);
    // three throws + quit
    assert_eq!(state.public.round, 4);
    assert!(output.contains("Incorrect option"));

    let wins = state
        .public
        .log
        .iter()
        .filter(|r| matches!(r.outcome, Outcome::Win { .. }))
        .count() as i64;
    let losses = state
        .public
        .log
        .iter()
        .filter(|r| matches!(r.outcome, Outcome::Lose { .. }))
        .count() as i64;
    assert_eq!(RockPaperScissors::score(&state), wins * 5);
    assert_eq!(RockPaperScissors::computer_score(&state), losses * 5);
    assert!(output.trim_end().ends_with("Bye"));
}

#[test]
fn test_bank_session() {
    let game = Bank::new(BankConfig::default());
    let state = game.setup(GameRng::new(1));

    let (state, output) = run(
        &game,
        state,
        "deposit 100.50\nwithdraw 200\n3 0.50\nbalance\n7\n4\n",
    );

    assert_eq!(state.phase(), Phase::Quit);
    assert_eq!(state.public.counter(BALANCE_CENTS), 10_000);
    assert!(output.contains("Insufficient funds: your balance is Ksh 100.50"));
    assert!(output.contains("Your balance is Ksh 100.00"));
    assert!(output.contains("You have entered an invalid choice"));
    assert!(output.contains("Thank you, have a nice day"));
}

/// Filling the account to the last cent, then trying to go past it.
#[test]
fn test_bank_full_account() {
    let game = Bank::default();
    let state = game.setup(GameRng::new(1));

    let (state, output) = run(
        &game,
        state,
        "deposit 92233720368547758.07\ndeposit 1\n2 0.01\ndeposit 99999999999999999999\nbalance\nq\n",
    );

    assert_eq!(state.phase(), Phase::Quit);
    assert_eq!(state.public.counter(BALANCE_CENTS), i64::MAX);
    assert_eq!(
        output.matches("Deposit too large: at most Ksh 0.00 can be added").count(),
        2
    );
    assert!(output.contains("99999999999999999999 is too large an amount"));
    assert!(output.contains("Final balance Ksh 92233720368547758.07"));
}

#[test]
fn test_slots_huge_balance_all_in() {
    let game = SlotMachine::new(SlotConfig::default().with_balance(SlotConfig::MAX_BALANCE));
    let mut session = Session::start(&game, GameRng::new(9));

    let cap = SlotConfig::MAX_BALANCE as i64;
    while !session.state().is_terminal() {
        let balance = SlotMachine::balance(session.state());
        let max = SlotMachine::max_bet(balance);
        assert!(max >= 1);

        // Go all in up to the starting balance; cash out once far ahead.
        let input = if balance > cap * 1000 {
            "q".to_string()
        } else {
            max.min(cap).to_string()
        };
        if let Ok(Outcome::Win { delta } | Outcome::Lose { delta }) = session.submit(&input) {
            assert_eq!(SlotMachine::balance(session.state()), balance + delta);
        }
    }

    let state = session.into_state();
    assert!(SlotMachine::balance(&state) >= 0);
}

/// Every game, picked at runtime, reaches a terminal phase on end of input.
#[test]
fn test_every_game_quits_on_eof() {
    let config = GamesConfig::default();

    for kind in GameKind::ALL {
        let game = Game::from_config(kind, &config);
        let state = game.setup(GameRng::new(42));

        let (state, output) = run(&game, state, "");

        assert_eq!(state.phase(), Phase::Quit, "{kind}");
        assert_eq!(state.public.round, 1, "{kind}");
        assert!(!output.is_empty(), "{kind}");
    }
}

/// Same seed, same script, same session.
#[test]
fn test_seeded_sessions_replay() {
    let config = GamesConfig::default();
    let game = Game::from_config(GameKind::Slots, &config);

    let (a, out_a) = run(&game, game.setup(GameRng::new(77)), "5\n5\n5\nq\n");
    let (b, out_b) = run(&game, game.setup(GameRng::new(77)), "5\n5\n5\nq\n");

    assert_eq!(a.public.log, b.public.log);
    assert_eq!(out_a, out_b);
}

#[test]
fn test_rejections_are_classified() {
    let game = Hangman::default();
    let state = game.deal("otter", GameRng::new(1));
    let mut session = Session::new(&game, state);

    session.submit("o").unwrap();

    assert_eq!(session.submit("o").unwrap_err().kind(), ErrorKind::Duplicate);
    assert_eq!(session.submit("oo").unwrap_err().kind(), ErrorKind::InvalidFormat);
    assert_eq!(session.state().public.round, 1);
}
