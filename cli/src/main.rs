use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use sapper_core::{Difficulty, GameSession, GameStatus};
use std::io::{self, BufRead, Write};

use command::{Command, CommandError, HELP};

mod command;
mod logger;
mod theme;

/// Minesweeper in the terminal
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Board preset: easy, normal or hard
    #[arg(short, long, default_value_t = Difficulty::Easy)]
    difficulty: Difficulty,

    /// Seed for reproducible mine layouts
    #[arg(short, long)]
    seed: Option<u64>,

    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init(args.verbosity.log_level_filter())?;

    let mut session = match args.seed {
        Some(seed) => GameSession::with_seed(args.difficulty, seed),
        None => GameSession::new(args.difficulty),
    };
    log::info!("Starting {} game", session.difficulty());

    let mut out = io::stdout().lock();
    writeln!(out, "{}\n", HELP)?;
    draw(&mut out, &session)?;

    for line in io::stdin().lock().lines() {
        let command = match line?.parse::<Command>() {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(err) => {
                writeln!(out, "{}", err)?;
                continue;
            }
        };

        let status = match command {
            Command::Quit => break,
            Command::Help => {
                writeln!(out, "{}", HELP)?;
                continue;
            }
            Command::Board => {
                draw(&mut out, &session)?;
                continue;
            }
            Command::NewGame => {
                session.new_game();
                Ok(session.status())
            }
            Command::SetDifficulty(difficulty) => {
                session.set_difficulty(difficulty);
                Ok(session.status())
            }
            Command::Reveal(x, y) => session.handle_reveal(x, y),
            Command::Mark(x, y) => session.handle_flag_cycle(x, y),
        };

        match status {
            Ok(GameStatus::InProgress) if session.has_update() => draw(&mut out, &session)?,
            Ok(GameStatus::InProgress) => writeln!(out, "Nothing changed")?,
            Ok(status) => {
                draw(&mut out, &session)?;
                let message = if status == GameStatus::Won {
                    "Congratulations, you cleared the board!"
                } else {
                    "Boom! Game over."
                };
                writeln!(out, "{} Starting again.\n", message)?;
                session.new_game();
                draw(&mut out, &session)?;
            }
            Err(err) => writeln!(out, "{}", err)?,
        }
    }

    Ok(())
}

fn draw(out: &mut impl Write, session: &GameSession) -> io::Result<()> {
    write!(out, "{}", theme::render(session.visible().grid()))?;
    writeln!(
        out,
        "{} | mines left: {}",
        session.difficulty(),
        session.mines_left()
    )?;
    out.flush()
}
