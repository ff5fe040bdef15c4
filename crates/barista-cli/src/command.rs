//! Command parsing: one input line -> one typed command.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Create { name: String, capacity: i64 },
    Enq { name: String, label: String },
    Run { turns: i64, quantum: i64 },
    Skip { name: String },
    Display { json: bool },
    Menu,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown command {0}")]
    UnknownCommand(String),

    #[error("usage: {0}")]
    InvalidArgs(&'static str),

    #[error("{command}: {value} is not an integer")]
    NotAnInteger {
        command: &'static str,
        value: String,
    },
}

impl ParseError {
    pub fn reason(&self) -> &'static str {
        match self {
            ParseError::UnknownCommand(_) => "unknown_command",
            ParseError::InvalidArgs(_) => "invalid_args",
            ParseError::NotAnInteger { .. } => "invalid_integer",
        }
    }
}

const CREATE_USAGE: &str = "CREATE <name> <capacity>";
const ENQ_USAGE: &str = "ENQ <name> <label...>";
const RUN_USAGE: &str = "RUN <turns> <quantum>";
const SKIP_USAGE: &str = "SKIP <name>";
const DISPLAY_USAGE: &str = "DISPLAY [json]";
const MENU_USAGE: &str = "MENU";

/// Parse one line. Blank lines and `#` comments yield `None`.
pub fn parse(line: &str) -> Result<Option<Command>, ParseError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut tokens = line.split_whitespace();
    let Some(keyword) = tokens.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = tokens.collect();

    let command = match keyword {
        "CREATE" => match args.as_slice() {
            [name, capacity] => Command::Create {
                name: name.to_string(),
                capacity: integer("CREATE", capacity)?,
            },
            _ => return Err(ParseError::InvalidArgs(CREATE_USAGE)),
        },
        "ENQ" => match args.as_slice() {
            [name, label @ ..] if !label.is_empty() => Command::Enq {
                name: name.to_string(),
                label: label.join(" "),
            },
            _ => return Err(ParseError::InvalidArgs(ENQ_USAGE)),
        },
        "RUN" => match args.as_slice() {
            [turns, quantum] => Command::Run {
                turns: integer("RUN", turns)?,
                quantum: integer("RUN", quantum)?,
            },
            _ => return Err(ParseError::InvalidArgs(RUN_USAGE)),
        },
        "SKIP" => match args.as_slice() {
            [name] => Command::Skip {
                name: name.to_string(),
            },
            _ => return Err(ParseError::InvalidArgs(SKIP_USAGE)),
        },
        "DISPLAY" => match args.as_slice() {
            [] => Command::Display { json: false },
            ["json"] => Command::Display { json: true },
            _ => return Err(ParseError::InvalidArgs(DISPLAY_USAGE)),
        },
        "MENU" => match args.as_slice() {
            [] => Command::Menu,
            _ => return Err(ParseError::InvalidArgs(MENU_USAGE)),
        },
        other => return Err(ParseError::UnknownCommand(other.to_string())),
    };
    Ok(Some(command))
}

fn integer(command: &'static str, value: &str) -> Result<i64, ParseError> {
    value.parse().map_err(|_| ParseError::NotAnInteger {
        command,
        value: value.to_string(),
    })
}
