use thiserror::Error;

/// A parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List the available commands.
    Help,
    /// Start a new worker.
    Start { name: String },
    /// Link two workers together.
    Link { first: String, second: String },
    /// Report on a single worker.
    Status { name: String },
    /// Dump the whole colony as JSON.
    State,
    /// Quit.
    Exit,
}

/// Error from parsing one input line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command {0:?} (try \"help\")")]
    UnknownCommand(String),
    #[error("{command} expects {expected}")]
    BadArguments {
        command: &'static str,
        expected: &'static str,
    },
}

/// Parse one input line. Blank lines parse to `None`. The command keyword is
/// case-insensitive; worker names are taken as typed.
pub fn parse(line: &str) -> Result<Option<Command>, ParseError> {
    let mut tokens = line.split_whitespace();
    let Some(keyword) = tokens.next() else {
        return Ok(None);
    };
    let command = match keyword.to_ascii_lowercase().as_str() {
        "help" => no_args(Command::Help, "help", &mut tokens)?,
        "state" => no_args(Command::State, "state", &mut tokens)?,
        "exit" => no_args(Command::Exit, "exit", &mut tokens)?,
        "start" => match (tokens.next(), tokens.next()) {
            (Some(name), None) => Command::Start {
                name: name.to_owned(),
            },
            _ => {
                return Err(ParseError::BadArguments {
                    command: "start",
                    expected: "one worker name",
                })
            }
        },
        "status" => match (tokens.next(), tokens.next()) {
            (Some(name), None) => Command::Status {
                name: name.to_owned(),
            },
            _ => {
                return Err(ParseError::BadArguments {
                    command: "status",
                    expected: "one worker name",
                })
            }
        },
        "link" => match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(first), Some(second), None) => Command::Link {
                first: first.to_owned(),
                second: second.to_owned(),
            },
            _ => {
                return Err(ParseError::BadArguments {
                    command: "link",
                    expected: "two worker names",
                })
            }
        },
        _ => return Err(ParseError::UnknownCommand(keyword.to_owned())),
    };
    Ok(Some(command))
}

fn no_args<'a>(
    command: Command,
    name: &'static str,
    tokens: &mut impl Iterator<Item = &'a str>,
) -> Result<Command, ParseError> {
    if tokens.next().is_some() {
        Err(ParseError::BadArguments {
            command: name,
            expected: "no arguments",
        })
    } else {
        Ok(command)
    }
}
