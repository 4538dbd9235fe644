//! Line-based console session.
//!
//! Reads human moves from any [`BufRead`] and writes the board and the
//! engine's events to any [`Write`], so a session can be driven by stdin or
//! by a test.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};
use unbeatable_tictactoe::{GameEngine, GameEvent, Outcome, Position, Seat};

/// Console front end for a [`GameEngine`].
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given input and output.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Runs games until the human quits or input ends.
    #[instrument(skip_all)]
    pub fn run(&mut self, engine: &mut GameEngine) -> Result<()> {
        writeln!(self.output, "{}", engine.human().info())?;
        writeln!(self.output, "{}", engine.computer().info())?;
        engine.reset_game().context("Failed to start game")?;

        loop {
            for event in engine.drain_events() {
                self.render(engine, event)?;
            }

            if engine.is_terminal() {
                writeln!(self.output, "{}", engine.board().display())?;
                if !self.play_again()? {
                    break;
                }
                engine.reset_game().context("Failed to start game")?;
                continue;
            }

            writeln!(self.output, "{}\n", engine.board().display())?;
            write!(self.output, "Your move (row,col, 1-9 or a name; q quits): ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                break;
            };
            if line.eq_ignore_ascii_case("q") {
                break;
            }

            let position = match line.parse::<Position>() {
                Ok(position) => position,
                Err(err) => {
                    writeln!(self.output, "{}", err)?;
                    continue;
                }
            };
            if let Err(err) = engine.validate_move(Seat::Human, position) {
                writeln!(self.output, "{}", err)?;
                continue;
            }

            engine
                .play_human_move(position)
                .context("Computer failed to reply")?;
        }

        info!("Session ended");
        writeln!(self.output, "Bye.")?;
        Ok(())
    }

    fn render(&mut self, engine: &GameEngine, event: GameEvent) -> Result<()> {
        debug!(?event, "Rendering event");
        match event {
            GameEvent::GameStarted { starting } => match starting {
                Seat::Human => writeln!(self.output, "You start.")?,
                Seat::Computer => {
                    writeln!(self.output, "{} starts.", engine.computer().name())?
                }
            },
            GameEvent::MoveApplied {
                seat: Seat::Computer,
                position,
                mark,
            } => {
                let (row, col) = position.coords();
                writeln!(
                    self.output,
                    "{} plays {} at {} ({},{}).",
                    engine.computer().name(),
                    mark,
                    position,
                    row,
                    col
                )?;
            }
            GameEvent::GameEnded(Outcome::Won(seat)) => {
                writeln!(self.output, "{} won!", engine.player(seat).name())?
            }
            GameEvent::GameEnded(Outcome::Tied) => writeln!(self.output, "Oh. It's a tie!")?,
            GameEvent::MoveApplied { .. } | GameEvent::TurnStarted(_) => {}
        }
        Ok(())
    }

    fn play_again(&mut self) -> Result<bool> {
        write!(self.output, "Play again? [y/N] ")?;
        self.output.flush()?;
        let answer = self.read_line()?;
        Ok(matches!(answer.as_deref(), Some("y" | "Y" | "yes")))
    }

    /// Next trimmed input line, or `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            Ok(None)
        } else {
            Ok(Some(line.trim().to_string()))
        }
    }
}
