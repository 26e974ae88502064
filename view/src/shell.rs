//! Line-oriented front end for the todo list.
//!
//! Each input line is one user action. After every action the error banner
//! (if any) and the list area are printed again.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use thiserror::Error;
use todo_core::{ListView, TodoId, TodoListController, Transport};
use tracing::debug;

const HELP: &str = "\
commands:
  add <title>   create a todo
  rm <id>       delete a todo
  reload        fetch the list again
  help          show this message
  quit          leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Delete(TodoId),
    Reload,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command: {0} (try `help`)")]
    Unknown(String),
    #[error("usage: rm <id>")]
    MissingId,
    #[error("not a todo id: {0}")]
    BadId(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        match word {
            "add" | "a" => Ok(Command::Add(rest.to_string())),
            "rm" | "delete" | "d" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingId);
                }
                rest.parse()
                    .map(Command::Delete)
                    .map_err(|_| CommandError::BadId(rest.to_string()))
            }
            "reload" | "ls" | "r" => Ok(Command::Reload),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Mount the view, then process commands from `input` until EOF or `quit`.
pub fn run_shell<T, R, W>(
    controller: &mut TodoListController<T>,
    input: R,
    out: &mut W,
) -> io::Result<()>
where
    T: Transport,
    R: BufRead,
    W: Write,
{
    controller.activate();
    write_screen(out, controller.state().error(), &controller.render())?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "{err}")?;
                continue;
            }
        };
        debug!(?command, "handling command");
        match command {
            Command::Add(title) => {
                controller.set_draft(title);
                if !controller.submit_create() {
                    writeln!(out, "title must not be empty")?;
                    continue;
                }
            }
            Command::Delete(id) => controller.delete(id),
            Command::Reload => controller.reload(),
            Command::Help => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            Command::Quit => break,
        }
        write_screen(out, controller.state().error(), &controller.render())?;
    }
    out.flush()
}

/// Print the error banner and the list area.
pub fn write_screen<W: Write>(out: &mut W, error: Option<&str>, view: &ListView) -> io::Result<()> {
    if let Some(message) = error {
        writeln!(out, "! {message}")?;
    }
    match view {
        ListView::Loading => writeln!(out, "Loading todos...")?,
        ListView::Empty => writeln!(out, "No todos yet. Create one with `add <title>`.")?,
        ListView::Rows(rows) => {
            for row in rows {
                writeln!(out, "#{:<4} {}", row.id, row.title)?;
                if let Some(description) = &row.description {
                    writeln!(out, "      {description}")?;
                }
                writeln!(out, "      Created: {}", row.created)?;
            }
        }
    }
    Ok(())
}
