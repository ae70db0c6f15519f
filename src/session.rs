use crate::{
    timer::Timer,
    util::{Clock, MonotonicClock},
};

use anyhow::{bail, Context, Result};
use log::{debug, info};

use std::{
    io::{BufRead, Write},
    str::FromStr,
};

const HELP: &str = "commands: start, stop, reset, elapsed, state, help, quit";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    Start,
    Stop,
    Reset,
    Elapsed,
    State,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let cmd = match s.trim().to_ascii_lowercase().as_str() {
            "start" => Command::Start,
            "stop" => Command::Stop,
            "reset" => Command::Reset,
            "elapsed" => Command::Elapsed,
            "state" => Command::State,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => bail!("Unknown command: {}", s.trim()),
        };

        Ok(cmd)
    }
}

enum Response {
    Output(String),
    Quit,
}

/// Line driven front end for a [`Timer`].
pub struct Session<C = MonotonicClock> {
    timer: Timer<C>,
}

impl Session {
    pub fn new() -> Session {
        Session::with_clock(MonotonicClock)
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

impl<C: Clock> Session<C> {
    pub fn with_clock(clock: C) -> Session<C> {
        Session {
            timer: Timer::with_clock(clock),
        }
    }

    pub fn timer(&self) -> &Timer<C> {
        &self.timer
    }

    /// Runs until `quit` or end of input. Timer misuse and unknown commands are
    /// reported on `err` and do not end the session.
    pub fn run<R, W, E>(&mut self, input: R, mut out: W, mut err: E) -> Result<()>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        for line in input.lines() {
            let line = line.context("Failed to read command")?;
            if line.trim().is_empty() {
                continue;
            }

            match self.handle_line(&line) {
                Ok(Response::Output(s)) => {
                    writeln!(out, "{}", s).context("Failed to write response")?;
                }
                Ok(Response::Quit) => break,
                Err(e) => {
                    debug!("Command {:?} rejected: {}", line.trim(), e);
                    writeln!(err, "error: {}", e).context("Failed to write error")?;
                }
            }
        }

        out.flush().context("Failed to flush output")?;
        info!("Session finished in state {}", self.timer.state());
        Ok(())
    }

    fn handle_line(&mut self, line: &str) -> Result<Response> {
        let output = match line.parse::<Command>()? {
            Command::Start => {
                self.timer.start()?;
                let wall = chrono::Local::now().format("%H:%M:%S%.3f");
                format!("{} (started at {})", self.timer.state(), wall)
            }
            Command::Stop => {
                let elapsed = self.timer.stop()?.elapsed_millis()?;
                format!("{} ({:.3} ms)", self.timer.state(), elapsed)
            }
            Command::Reset => self.timer.reset().state().to_string(),
            Command::Elapsed => format!("{:.3} ms", self.timer.elapsed_millis()?),
            Command::State => self.timer.state().to_string(),
            Command::Help => HELP.to_string(),
            Command::Quit => return Ok(Response::Quit),
        };

        Ok(Response::Output(output))
    }
}
