//! Command mode: a closed set of commands parsed from a typed line
//!
//! A command line is a command name followed by its arguments:
//!
//! ```text
//! move_to_next_line
//! bound 0 10
//! select 0 3 5 5
//! insert_before TODO:\s
//! show selection
//! ```
//!
//! Names are looked up in [`COMMANDS`]; there is no expression evaluation.

use crate::editable::{EditError, Input, Interval, OperatorKind, Selection, Selector, TextBuffer};
use crate::model::Session;

// ============================================================================
// Command Types
// ============================================================================

/// Something command mode can do to a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the selection through a selector
    ApplySelector(Selector),
    /// Build and immediately commit an operation
    ApplyOperator(OperatorKind, Input),
    /// Replace the selection with explicit intervals
    Select(Vec<Interval>),
    /// Report part of the session state
    Show(Query),
}

/// What `show` reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    Selection,
    Text,
    Length,
    /// Label of the first selected position
    Label,
    /// Names of all commands
    Commands,
}

impl Query {
    pub const ALL: [(&'static str, Query); 5] = [
        ("selection", Query::Selection),
        ("text", Query::Text),
        ("len", Query::Length),
        ("label", Query::Label),
        ("commands", Query::Commands),
    ];

    pub fn by_name(name: &str) -> Option<Query> {
        Self::ALL
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, query)| *query)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Empty command line
    Empty,
    UnknownCommand(String),
    InvalidArguments { command: &'static str, usage: &'static str },
    Edit(EditError),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::Empty => write!(f, "No command given"),
            CommandError::UnknownCommand(name) => write!(f, "Unknown command: {}", name),
            CommandError::InvalidArguments { command, usage } => {
                write!(f, "Invalid arguments for {}, usage: {}", command, usage)
            }
            CommandError::Edit(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<EditError> for CommandError {
    fn from(e: EditError) -> Self {
        CommandError::Edit(e)
    }
}

// ============================================================================
// Command Registry
// ============================================================================

/// How a command's arguments become a [`Command`]
#[derive(Clone, Copy)]
pub enum ArgParser {
    /// No arguments
    Selector(Selector),
    /// The rest of the line is the text to insert
    Operator(OperatorKind),
    Custom(fn(&str) -> Option<Command>),
}

/// A command definition
#[derive(Clone, Copy)]
pub struct CommandDef {
    pub name: &'static str,
    pub usage: &'static str,
    pub parser: ArgParser,
}

impl std::fmt::Debug for CommandDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandDef")
            .field("name", &self.name)
            .field("usage", &self.usage)
            .finish()
    }
}

/// Static registry of all available commands
pub static COMMANDS: &[CommandDef] = &[
    CommandDef {
        name: "move_to_next_char",
        usage: "move_to_next_char",
        parser: ArgParser::Selector(Selector::NextChar),
    },
    CommandDef {
        name: "move_to_previous_char",
        usage: "move_to_previous_char",
        parser: ArgParser::Selector(Selector::PreviousChar),
    },
    CommandDef {
        name: "move_to_next_line",
        usage: "move_to_next_line",
        parser: ArgParser::Selector(Selector::NextLine),
    },
    CommandDef {
        name: "move_to_previous_line",
        usage: "move_to_previous_line",
        parser: ArgParser::Selector(Selector::PreviousLine),
    },
    CommandDef {
        name: "complement",
        usage: "complement",
        parser: ArgParser::Selector(Selector::Complement),
    },
    CommandDef {
        name: "everything",
        usage: "everything",
        parser: ArgParser::Selector(Selector::Everything),
    },
    CommandDef {
        name: "bound",
        usage: "bound LO HI",
        parser: ArgParser::Custom(parse_bound),
    },
    CommandDef {
        name: "select",
        usage: "select BEGIN END [BEGIN END ...]",
        parser: ArgParser::Custom(parse_select),
    },
    CommandDef {
        name: "insert_before",
        usage: "insert_before TEXT",
        parser: ArgParser::Operator(OperatorKind::InsertBefore),
    },
    CommandDef {
        name: "insert_after",
        usage: "insert_after TEXT",
        parser: ArgParser::Operator(OperatorKind::InsertAfter),
    },
    CommandDef {
        name: "insert_in_place",
        usage: "insert_in_place TEXT",
        parser: ArgParser::Operator(OperatorKind::Replace),
    },
    CommandDef {
        name: "show",
        usage: "show selection|text|len|label|commands",
        parser: ArgParser::Custom(parse_show),
    },
];

/// Look up a command by exact name
pub fn find_command(name: &str) -> Option<&'static CommandDef> {
    COMMANDS.iter().find(|cmd| cmd.name == name)
}

/// Commands whose name starts with `prefix`
pub fn filter_commands(prefix: &str) -> Vec<&'static CommandDef> {
    COMMANDS
        .iter()
        .filter(|cmd| cmd.name.starts_with(prefix))
        .collect()
}

/// Parse a command line
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim_start();
    let (name, args) = match line.split_once(' ') {
        Some((name, args)) => (name, args),
        None => (line, ""),
    };
    if name.is_empty() {
        return Err(CommandError::Empty);
    }
    let def = find_command(name).ok_or_else(|| CommandError::UnknownCommand(name.to_string()))?;
    let invalid = CommandError::InvalidArguments {
        command: def.name,
        usage: def.usage,
    };

    match def.parser {
        ArgParser::Selector(selector) => {
            if args.trim().is_empty() {
                Ok(Command::ApplySelector(selector))
            } else {
                Err(invalid)
            }
        }
        ArgParser::Operator(kind) => Ok(Command::ApplyOperator(kind, Input::text(&unescape(args)))),
        ArgParser::Custom(parse) => parse(args).ok_or(invalid),
    }
}

fn parse_numbers(args: &str) -> Option<Vec<usize>> {
    args.split_whitespace()
        .map(|n| n.parse::<usize>().ok())
        .collect()
}

fn parse_bound(args: &str) -> Option<Command> {
    match parse_numbers(args)?.as_slice() {
        &[lo, hi] if lo <= hi => Some(Command::ApplySelector(Selector::Bound { lo, hi })),
        _ => None,
    }
}

fn parse_select(args: &str) -> Option<Command> {
    let numbers = parse_numbers(args)?;
    if numbers.is_empty() || numbers.len() % 2 != 0 {
        return None;
    }
    numbers
        .chunks(2)
        .map(|pair| Interval::try_new(pair[0], pair[1]).ok())
        .collect::<Option<Vec<_>>>()
        .map(Command::Select)
}

fn parse_show(args: &str) -> Option<Command> {
    Query::by_name(args.trim()).map(Command::Show)
}

/// `\n`, `\t`, `\s` (space) and `\\` escapes in inserted text
fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('s') => out.push(' '),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

// ============================================================================
// Execution
// ============================================================================

impl Command {
    /// Run against `session`. Returns a message for the status line, if any.
    ///
    /// On error the session is left untouched.
    pub fn execute(&self, session: &mut Session) -> Result<Option<String>, CommandError> {
        tracing::debug!(command = ?self, "executing command");
        match self {
            Command::ApplySelector(selector) => {
                session.apply_selector(*selector)?;
                Ok(None)
            }
            Command::ApplyOperator(kind, input) => {
                let operation = kind.operate(&session.buffer, &session.selection, input);
                session.apply_operation(&operation);
                Ok(None)
            }
            Command::Select(intervals) => {
                let selection = Selection::try_new(intervals.clone())?;
                session.set_selection(selection)?;
                Ok(None)
            }
            Command::Show(query) => Ok(Some(show(session, *query))),
        }
    }
}

fn show(session: &Session, query: Query) -> String {
    match query {
        Query::Selection => session.selection.to_string(),
        Query::Text => session.text(),
        Query::Length => session.buffer.len_chars().to_string(),
        Query::Label => {
            let position = session.selection.primary().begin;
            session
                .labeling
                .get(position)
                .map_or("none", |label| label.name())
                .to_string()
        }
        Query::Commands => COMMANDS
            .iter()
            .map(|cmd| cmd.name)
            .collect::<Vec<_>>()
            .join(" "),
    }
}
