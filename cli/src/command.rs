use core::str::FromStr;
use sapper_core::{Coord, Difficulty, GameError};
use thiserror::Error;

pub(crate) const HELP: &str = "\
commands:
  r X Y    reveal the cell at column X, row Y
  f X Y    cycle flag / question mark on the cell
  n        new game
  d TIER   new game at easy, normal or hard
  b        show the board
  h        this help
  q        quit";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Reveal(Coord, Coord),
    Mark(Coord, Coord),
    NewGame,
    SetDifficulty(Difficulty),
    Board,
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub(crate) enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command {0:?}, type h for help")]
    Unknown(String),
    #[error("Missing {0}")]
    Missing(&'static str),
    #[error("Bad coordinate {0:?}")]
    BadCoordinate(String),
    #[error("Unexpected extra input {0:?}")]
    Trailing(String),
    #[error(transparent)]
    Difficulty(#[from] GameError),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(CommandError::Empty)?;
        let command = match name.to_ascii_lowercase().as_str() {
            "r" | "reveal" => {
                let (x, y) = coords(&mut words)?;
                Command::Reveal(x, y)
            }
            "f" | "flag" => {
                let (x, y) = coords(&mut words)?;
                Command::Mark(x, y)
            }
            "n" | "new" => Command::NewGame,
            "d" | "difficulty" => {
                let tier = words.next().ok_or(CommandError::Missing("difficulty"))?;
                Command::SetDifficulty(tier.parse()?)
            }
            "b" | "board" => Command::Board,
            "h" | "help" | "?" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            _ => return Err(CommandError::Unknown(name.to_owned())),
        };
        match words.next() {
            Some(extra) => Err(CommandError::Trailing(extra.to_owned())),
            None => Ok(command),
        }
    }
}

fn coords<'a>(words: &mut impl Iterator<Item = &'a str>) -> Result<(Coord, Coord), CommandError> {
    let mut next = |axis: &'static str| -> Result<Coord, CommandError> {
        let word = words.next().ok_or(CommandError::Missing(axis))?;
        word.parse::<Coord>()
            .map_err(|_| CommandError::BadCoordinate(word.to_owned()))
    };
    let x = next("x")?;
    let y = next("y")?;
    Ok((x, y))
}
