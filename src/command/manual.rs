use once_cell::sync::Lazy;
use strum::IntoEnumIterator;

use crate::command::CommandName;

impl CommandName {
    pub fn synopsis(&self) -> &'static str {
        match self {
            CommandName::Show => "show",
            CommandName::Hide => "hide",
            CommandName::Save => "save",
            CommandName::Restore => "restore",
            CommandName::Current => "current",
            CommandName::MoveTo => "move-to [ROW COLUMN]",
            CommandName::Move => "move DX DY",
            CommandName::Up => "up [N]",
            CommandName::Down => "down [N]",
            CommandName::Backward => "backward [N]",
            CommandName::Forward => "forward [N]",
            CommandName::Column => "column [N]",
            CommandName::Row => "row [N]",
            CommandName::NextLine => "next-line",
            CommandName::PrevLine => "prev-line",
            CommandName::ClearChar => "clear-char [N]",
            CommandName::ClearLine => "clear-line",
            CommandName::ClearLineBefore => "clear-line-before",
            CommandName::ClearLineAfter => "clear-line-after",
            CommandName::ClearLines => "clear-lines [N] [up|down]",
            CommandName::ClearScreenDown => "clear-screen-down",
            CommandName::ClearScreenUp => "clear-screen-up",
            CommandName::ClearScreen => "clear-screen",
            CommandName::Config => "config [set KEY VALUE]",
            CommandName::Help => "help",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            CommandName::Show => "Make the cursor visible",
            CommandName::Hide => "Hide the cursor",
            CommandName::Save => "Save the cursor position",
            CommandName::Restore => "Restore the saved cursor position",
            CommandName::Current => "Ask the terminal to report the cursor position",
            CommandName::MoveTo => "Move to a 0-based position, or home without arguments",
            CommandName::Move => "Move relative to the cursor (+DX right, +DY up)",
            CommandName::Up => "Move up N lines (default 1)",
            CommandName::Down => "Move down N lines (default 1)",
            CommandName::Backward => "Move left N columns (default 1)",
            CommandName::Forward => "Move right N columns (default 1)",
            CommandName::Column => "Move to column N of the current line (default 1)",
            CommandName::Row => "Move to row N of the current column (default 1)",
            CommandName::NextLine => "Move to the start of the next line",
            CommandName::PrevLine => "Move to the start of the previous line",
            CommandName::ClearChar => "Erase N characters from the cursor",
            CommandName::ClearLine => "Erase the line and return to column 1",
            CommandName::ClearLineBefore => "Erase from line start to the cursor",
            CommandName::ClearLineAfter => "Erase from the cursor to line end",
            CommandName::ClearLines => "Erase N lines (default: terminal height), stepping up",
            CommandName::ClearScreenDown => "Erase from the cursor to the bottom of the screen",
            CommandName::ClearScreenUp => "Erase from the top of the screen to the cursor",
            CommandName::ClearScreen => "Erase the entire screen",
            CommandName::Config => "List settings, or change one",
            CommandName::Help => "Show this help",
        }
    }
}

static USAGE: Lazy<String> = Lazy::new(|| {
    let width = CommandName::iter()
        .map(|c| c.synopsis().len())
        .max()
        .unwrap_or(0);
    let mut out = String::from(
        "Usage: tty-cursor [--config PATH] [--logs DIR] [--escaped] <command> [args]\n\nCommands:\n",
    );
    for name in CommandName::iter() {
        out.push_str(&format!(
            "  {:<width$}  {}\n",
            name.synopsis(),
            name.summary()
        ));
    }
    out.push_str("\nAliases: cursor-up, cursor-down, cursor-backward, cursor-forward, clear-rows");
    out
});

/// Help text listing every command.
pub fn usage() -> &'static str {
    &USAGE
}
