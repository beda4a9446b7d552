//! Line-oriented command loop driving a [`RuntimeHandle`].
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Result;
use game_content::{LevelGenerator, LevelLoader};
use game_core::Action;
use runtime::{RuntimeError, RuntimeHandle, Speed};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::campaign::Campaign;
use crate::render::render;

const HELP: &str = "\
commands:
  f | forward          step forward
  l | turnLeft         turn left
  r | turnRight        turn right
  b | collect_blue     pick up a blue gem
  c | collect_red      pick up a red gem
  state                print the board
  reset                restart the current maze
  speed <0-100>        set the speed
  generate [seed]      play a random maze
  load <file>          play a level file
  save <file>          write the current maze to a file
  next                 skip to the next campaign level
  quit";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Act(Action),
    State,
    Reset,
    Speed(Speed),
    Generate(Option<u64>),
    Load(PathBuf),
    Save(PathBuf),
    Next,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err("empty command".into());
        };
        let arg = words.next();

        let command = match head {
            "f" => Command::Act(Action::Forward),
            "l" => Command::Act(Action::TurnLeft),
            "r" => Command::Act(Action::TurnRight),
            "b" => Command::Act(Action::CollectBlue),
            "c" => Command::Act(Action::CollectRed),
            "state" | "s" => Command::State,
            "reset" => Command::Reset,
            "speed" => {
                let percent = arg
                    .and_then(|value| value.parse::<u32>().ok())
                    .ok_or("usage: speed <0-100>")?;
                Command::Speed(Speed::new(percent))
            }
            "generate" => match arg {
                Some(seed) => Command::Generate(Some(
                    seed.parse().map_err(|_| format!("invalid seed '{seed}'"))?,
                )),
                None => Command::Generate(None),
            },
            "load" => Command::Load(arg.ok_or("usage: load <file>")?.into()),
            "save" => Command::Save(arg.ok_or("usage: save <file>")?.into()),
            "next" => Command::Next,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => Command::Act(
                Action::from_str(other).map_err(|_| format!("unknown command '{other}'"))?,
            ),
        };
        Ok(command)
    }
}

pub struct Repl {
    handle: RuntimeHandle,
    campaign: Option<Campaign>,
}

impl Repl {
    pub fn new(handle: RuntimeHandle, campaign: Option<Campaign>) -> Self {
        Self { handle, campaign }
    }

    /// Reads commands from stdin until `quit` or end of input.
    pub async fn run(mut self) -> Result<()> {
        println!("{}", render(&self.handle.query_state().await?));
        println!("type 'help' for commands");

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => {
                    if let Err(error) = self.execute(command).await {
                        println!("{}", describe_error(&error));
                    }
                }
                Err(message) => println!("{message}"),
            }
        }
        Ok(())
    }

    async fn execute(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Act(action) => {
                let reply = self.handle.apply_action(action).await?;
                println!("{}", render(&reply.snapshot));
                if reply.outcome.reached_exit {
                    self.advance_campaign().await?;
                }
            }
            Command::State => {
                println!("{}", render(&self.handle.query_state().await?));
            }
            Command::Reset => {
                println!("{}", render(&self.handle.restart().await?));
            }
            Command::Speed(speed) => {
                self.handle.set_speed(speed).await?;
                println!("speed set to {speed}");
            }
            Command::Generate(seed) => {
                let seed = seed.unwrap_or_else(rand::random);
                let config = LevelGenerator::from_seed(seed).generate(format!("generated #{seed}"));
                println!("{}", render(&self.handle.reset(config).await?));
            }
            Command::Load(path) => {
                let config = LevelLoader::load(&path)?;
                println!("{}", render(&self.handle.reset(config).await?));
            }
            Command::Save(path) => {
                let config = self.handle.current_config().await?;
                LevelLoader::save(&path, &config)?;
                println!("saved {} level(s) to {}", config.levels.len(), path.display());
            }
            Command::Next => self.advance_campaign().await?,
            Command::Help => println!("{HELP}"),
            Command::Quit => {}
        }
        Ok(())
    }

    async fn advance_campaign(&mut self) -> Result<()> {
        let Some(campaign) = self.campaign.as_mut() else {
            return Ok(());
        };
        let config = campaign.advance()?;
        println!("level {} of {}", campaign.index() + 1, campaign.len());
        println!("{}", render(&self.handle.reset(config).await?));
        Ok(())
    }
}

/// Formats a failed command, tagging runtime failures with their stable code.
fn describe_error(error: &anyhow::Error) -> String {
    match error.downcast_ref::<RuntimeError>() {
        Some(runtime_error) => {
            tracing::warn!(code = runtime_error.code(), "command failed: {runtime_error}");
            format!("error [{}]: {error:#}", runtime_error.code())
        }
        None => format!("error: {error:#}"),
    }
}
