use crate::command::{Command, CommandName, Sequence};
use crate::core::types::Direction;
use crate::errors::{Error, Result, require_parse};

/// Largest `clear-lines` count accepted on the command line, the most rows a
/// terminal can report.
pub const MAX_CLEAR_LINES: u32 = u16::MAX as u32;

/// Turns command-line words into a [`Command`].
#[derive(Debug, Default, Clone)]
pub struct CommandParser;

impl CommandParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse<S: AsRef<str>>(&self, words: &[S]) -> Result<Command> {
        let Some((first, rest)) = words.split_first() else {
            return Ok(Command::Help);
        };
        let name = CommandName::try_from(first.as_ref())?;
        let args: Vec<&str> = rest.iter().map(|w| w.as_ref().trim()).collect();

        let seq = match name {
            CommandName::Config => return Self::parse_config(&args),
            CommandName::Help => {
                Self::expect_at_most(name, &args, 0)?;
                return Ok(Command::Help);
            }
            CommandName::Show => Self::bare(name, &args, Sequence::Show)?,
            CommandName::Hide => Self::bare(name, &args, Sequence::Hide)?,
            CommandName::Save => Self::bare(name, &args, Sequence::Save)?,
            CommandName::Restore => Self::bare(name, &args, Sequence::Restore)?,
            CommandName::Current => Self::bare(name, &args, Sequence::Current)?,
            CommandName::MoveTo => {
                Self::expect_at_most(name, &args, 2)?;
                let row = args.first().map(|s| Self::count(name, s)).transpose()?;
                let column = args.get(1).map(|s| Self::count(name, s)).transpose()?;
                Sequence::MoveTo { row, column }
            }
            CommandName::Move => {
                Self::expect_at_most(name, &args, 2)?;
                let dx = require_parse(args.first(), format!("{name} requires DX and DY"))?;
                let dy = require_parse(args.get(1), format!("{name} requires DX and DY"))?;
                Sequence::Move {
                    dx: Self::offset(name, dx)?,
                    dy: Self::offset(name, dy)?,
                }
            }
            CommandName::Up => Sequence::Up(Self::optional_count(name, &args)?),
            CommandName::Down => Sequence::Down(Self::optional_count(name, &args)?),
            CommandName::Backward => Sequence::Backward(Self::optional_count(name, &args)?),
            CommandName::Forward => Sequence::Forward(Self::optional_count(name, &args)?),
            CommandName::Column => Sequence::Column(Self::optional_count(name, &args)?),
            CommandName::Row => Sequence::Row(Self::optional_count(name, &args)?),
            CommandName::NextLine => Self::bare(name, &args, Sequence::NextLine)?,
            CommandName::PrevLine => Self::bare(name, &args, Sequence::PrevLine)?,
            CommandName::ClearChar => Sequence::ClearChar(Self::optional_count(name, &args)?),
            CommandName::ClearLine => Self::bare(name, &args, Sequence::ClearLine)?,
            CommandName::ClearLineBefore => Self::bare(name, &args, Sequence::ClearLineBefore)?,
            CommandName::ClearLineAfter => Self::bare(name, &args, Sequence::ClearLineAfter)?,
            CommandName::ClearLines => Self::parse_clear_lines(&args)?,
            CommandName::ClearScreenDown => Self::bare(name, &args, Sequence::ClearScreenDown)?,
            CommandName::ClearScreenUp => Self::bare(name, &args, Sequence::ClearScreenUp)?,
            CommandName::ClearScreen => Self::bare(name, &args, Sequence::ClearScreen)?,
        };
        Ok(Command::Emit(seq))
    }

    fn parse_config(args: &[&str]) -> Result<Command> {
        match args {
            [] => Ok(Command::ShowConfig),
            ["set", key, value] => Ok(Command::SetConfig {
                key: key.to_string(),
                value: value.to_string(),
            }),
            ["set", ..] => Err(Error::parse("Usage: config set KEY VALUE")),
            [other, ..] => Err(Error::parse(format!(
                "Unsupported config action: '{other}'. Valid actions: set"
            ))),
        }
    }

    /// `clear-lines [N] [up|down]`; a lone direction keeps the default count.
    fn parse_clear_lines(args: &[&str]) -> Result<Sequence> {
        let name = CommandName::ClearLines;
        Self::expect_at_most(name, args, 2)?;
        let (count, direction) = match args {
            [] => (None, Direction::default()),
            [one] => match one.parse::<u32>() {
                Ok(n) => (Some(n), Direction::default()),
                Err(_) => (None, Direction::try_from(one)?),
            },
            [n, dir, ..] => (Some(Self::count(name, n)?), Direction::try_from(dir)?),
        };
        if let Some(n) = count.filter(|&n| n > MAX_CLEAR_LINES) {
            return Err(Error::invalid_argument(format!(
                "{name}: {n} exceeds the maximum of {MAX_CLEAR_LINES} lines"
            )));
        }
        Ok(Sequence::ClearLines { count, direction })
    }

    fn bare(name: CommandName, args: &[&str], seq: Sequence) -> Result<Sequence> {
        Self::expect_at_most(name, args, 0)?;
        Ok(seq)
    }

    fn optional_count(name: CommandName, args: &[&str]) -> Result<Option<u32>> {
        Self::expect_at_most(name, args, 1)?;
        args.first().map(|s| Self::count(name, s)).transpose()
    }

    fn expect_at_most(name: CommandName, args: &[&str], max: usize) -> Result<()> {
        if args.len() > max {
            return Err(Error::parse(format!(
                "{name} takes at most {max} argument(s), got {}",
                args.len()
            )));
        }
        Ok(())
    }

    fn count(name: CommandName, s: &str) -> Result<u32> {
        s.parse::<u32>().map_err(|_| {
            Error::parse(format!(
                "{name}: '{s}' is not a non-negative whole number"
            ))
        })
    }

    fn offset(name: CommandName, s: &str) -> Result<i32> {
        s.parse::<i32>()
            .map_err(|_| Error::parse(format!("{name}: '{s}' is not a whole number")))
    }
}
