pub mod command_parser;
pub mod manual;

use std::str::FromStr;

use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

use crate::core::context::AppContext;
use crate::core::terminal::TermSize;
use crate::core::types::{Direction, Platform};
use crate::cursor;
use crate::errors::{Error, Result};
use crate::extensions::string::ToEscaped;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "kebab-case")]
pub enum CommandName {
    Show,
    Hide,
    Save,
    Restore,
    Current,
    MoveTo,
    Move,
    #[strum(serialize = "up", serialize = "cursor-up", to_string = "up")]
    Up,
    #[strum(serialize = "down", serialize = "cursor-down", to_string = "down")]
    Down,
    #[strum(serialize = "backward", serialize = "cursor-backward", to_string = "backward")]
    Backward,
    #[strum(serialize = "forward", serialize = "cursor-forward", to_string = "forward")]
    Forward,
    Column,
    Row,
    NextLine,
    PrevLine,
    ClearChar,
    ClearLine,
    ClearLineBefore,
    ClearLineAfter,
    #[strum(serialize = "clear-lines", serialize = "clear-rows", to_string = "clear-lines")]
    ClearLines,
    ClearScreenDown,
    ClearScreenUp,
    ClearScreen,
    Config,
    Help,
}

impl CommandName {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s.trim()).map_err(|_| {
            Error::unknown(format!(
                "'{}'. Run 'tty-cursor help' for the list of commands.",
                s.trim()
            ))
        })
    }
}

/// One cursor operation with its arguments, ready to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sequence {
    Show,
    Hide,
    Save,
    Restore,
    Current,
    MoveTo {
        row: Option<u32>,
        column: Option<u32>,
    },
    Move {
        dx: i32,
        dy: i32,
    },
    Up(Option<u32>),
    Down(Option<u32>),
    Backward(Option<u32>),
    Forward(Option<u32>),
    Column(Option<u32>),
    Row(Option<u32>),
    NextLine,
    PrevLine,
    ClearChar(Option<u32>),
    ClearLine,
    ClearLineBefore,
    ClearLineAfter,
    /// `count: None` clears as many lines as the terminal has rows.
    ClearLines {
        count: Option<u32>,
        direction: Direction,
    },
    ClearScreenDown,
    ClearScreenUp,
    ClearScreen,
}

impl Sequence {
    pub fn render(&self, platform: Platform, term: &TermSize) -> Result<String> {
        let seq = match *self {
            Sequence::Show => cursor::show(),
            Sequence::Hide => cursor::hide(),
            Sequence::Save => cursor::save(platform),
            Sequence::Restore => cursor::restore(platform),
            Sequence::Current => cursor::current(),
            Sequence::MoveTo { row, column } => cursor::move_to(row, column)?,
            Sequence::Move { dx, dy } => cursor::move_by(dx, dy),
            Sequence::Up(n) => cursor::up(n),
            Sequence::Down(n) => cursor::down(n),
            Sequence::Backward(n) => cursor::backward(n),
            Sequence::Forward(n) => cursor::forward(n),
            Sequence::Column(n) => cursor::column(n),
            Sequence::Row(n) => cursor::row(n),
            Sequence::NextLine => cursor::next_line(),
            Sequence::PrevLine => cursor::prev_line(),
            Sequence::ClearChar(n) => cursor::clear_char(n),
            Sequence::ClearLine => cursor::clear_line(),
            Sequence::ClearLineBefore => cursor::clear_line_before(),
            Sequence::ClearLineAfter => cursor::clear_line_after(),
            Sequence::ClearLines { count, direction } => {
                let count = count.unwrap_or_else(|| u32::from(term.rows()));
                cursor::clear_lines(count, direction)
            }
            Sequence::ClearScreenDown => cursor::clear_screen_down(),
            Sequence::ClearScreenUp => cursor::clear_screen_up(),
            Sequence::ClearScreen => cursor::clear_screen(),
        };
        Ok(seq)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Emit(Sequence),
    ShowConfig,
    SetConfig { key: String, value: String },
    Help,
}

impl Command {
    /// Run the command and return the text destined for stdout.
    pub fn execute(&self, ctx: &mut AppContext) -> Result<String> {
        match self {
            Command::Emit(seq) => {
                let rendered = seq.render(ctx.platform(), &ctx.term)?;
                ctx.logger.emitted(&format!("{seq:?}"), &rendered);
                if ctx.escaped {
                    Ok(format!("{}\n", rendered.to_escaped()))
                } else {
                    Ok(rendered)
                }
            }
            Command::ShowConfig => {
                let mut out = String::new();
                for (key, description, value) in ctx.config.rows().iter() {
                    out.push_str(&format!("{key} = {value}    # {description}\n"));
                }
                Ok(out)
            }
            Command::SetConfig { key, value } => {
                let (old, new) = ctx.config.set(key, value)?;
                let key = key.trim().to_uppercase();
                ctx.logger.config_changed(&key, &old, &new, ctx.config.path());
                Ok(format!("{key} changed: {old} -> {new}\n"))
            }
            Command::Help => Ok(format!("{}\n", manual::usage())),
        }
    }
}
