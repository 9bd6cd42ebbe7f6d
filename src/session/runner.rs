//! The game loop: prompt, read, validate, evaluate, report, repeat.

use std::io::{self, BufRead, Write};

use tracing::{debug, info, trace};

use crate::core::{GameRng, GameState, InputError, Move, Phase};
use crate::rules::{Outcome, Rules};

/// One play session: a set of rules and the state it owns.
///
/// `submit` plays a single round without any I/O; `run` drives the whole
/// session over a reader and a writer.
///
/// ## Example
///
/// ```
/// use console_games::core::{GameRng, Phase};
/// use console_games::games::NumberGuess;
/// use console_games::session::Session;
///
/// let game = NumberGuess::default();
/// let mut session = Session::new(&game, game.deal(7, GameRng::new(1)));
///
/// assert!(session.submit("seven").is_err());
/// session.submit("5").unwrap();
/// session.submit("7").unwrap();
/// assert_eq!(session.phase(), Phase::Won);
/// ```
pub struct Session<'a, G: Rules> {
    rules: &'a G,
    state: GameState,
}

impl<'a, G: Rules> Session<'a, G> {
    /// Start a session from an existing state.
    pub fn new(rules: &'a G, state: GameState) -> Self {
        Self { rules, state }
    }

    /// Start a fresh session dealt by the rules.
    pub fn start(rules: &'a G, rng: GameRng) -> Self {
        let state = rules.setup(rng);
        Self::new(rules, state)
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Consume the session, keeping the final state.
    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Play one line of input.
    ///
    /// Rejected input leaves the state untouched and is returned as the
    /// error, ready to be reported and re-prompted.
    pub fn submit(&mut self, line: &str) -> Result<Outcome, InputError> {
        match self.rules.validate(&self.state, line) {
            Ok(mv) => Ok(self.apply(&mv)),
            Err(err) => {
                trace!(game = %self.rules.kind(), kind = %err.kind(), "rejected input");
                Err(err)
            }
        }
    }

    /// Apply an already validated move.
    pub fn apply(&mut self, mv: &Move) -> Outcome {
        let (next, outcome) = self.rules.evaluate(&self.state, mv);
        self.state = next;
        debug!(
            game = %self.rules.kind(),
            round = self.state.public.round,
            ?mv,
            ?outcome,
            phase = %self.state.phase(),
            "evaluated round"
        );
        outcome
    }

    /// Run until a terminal phase, reading one line per round.
    ///
    /// End of input counts as quitting. Only I/O failures are returned as
    /// errors; bad input is reported and asked for again.
    pub fn run<R: BufRead, W: Write>(mut self, mut input: R, mut output: W) -> io::Result<GameState> {
        info!(
            game = %self.rules.kind(),
            seed = self.state.rng.seed(),
            "session started"
        );

        write_block(&mut output, &self.rules.intro(&self.state))?;

        let mut line = String::new();
        while !self.state.is_terminal() {
            write!(output, "{}", self.rules.prompt(&self.state))?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                self.apply(&Move::Quit);
                break;
            }

            let text = match self.submit(&line) {
                Ok(outcome) => self.rules.report(&self.state, &outcome),
                Err(err) => self.rules.report_error(&self.state, &err),
            };
            write_block(&mut output, &text)?;
        }

        write_block(&mut output, &self.rules.summary(&self.state))?;
        output.flush()?;

        info!(
            game = %self.rules.kind(),
            phase = %self.state.phase(),
            rounds = self.state.public.round,
            "session ended"
        );
        Ok(self.state)
    }
}

fn write_block<W: Write>(output: &mut W, text: &str) -> io::Result<()> {
    if text.is_empty() {
        return Ok(());
    }
    writeln!(output, "{text}")
}
