//! Cursor control sequences: visibility, positioning and erasing.
//!
//! Every builder is a pure function returning the exact sequence a VT100
//! compatible terminal expects. Nothing here writes to a terminal except
//! [`invisible`] and friends.

pub mod ascii;
mod invisible;

pub use invisible::{HiddenCursor, invisible, invisible_stdout, try_invisible};

use crate::core::types::{Direction, Platform};
use crate::cursor::ascii::CSI;
use crate::errors::{Error, Result};

/// Make the cursor visible (DECTCEM set).
pub const SHOW: &str = crate::csi!("?25h");
/// Make the cursor invisible (DECTCEM reset).
pub const HIDE: &str = crate::csi!("?25l");
/// Device status report: ask the terminal for the cursor position.
pub const CURRENT: &str = crate::csi!("6n");
/// Move the cursor to the top-left corner.
pub const HOME: &str = crate::csi!("H");
/// Down one line, then column 1.
pub const NEXT_LINE: &str = crate::csi2!("E", "1G");
/// Up one line, then column 1.
pub const PREV_LINE: &str = crate::csi2!("A", "1G");
/// Erase the whole line, then column 1.
pub const CLEAR_LINE: &str = crate::csi2!("2K", "1G");
/// Erase from the start of the line to the cursor.
pub const CLEAR_LINE_BEFORE: &str = crate::csi!("0K");
/// Erase from the cursor to the end of the line.
pub const CLEAR_LINE_AFTER: &str = crate::csi!("1K");
/// Erase from the cursor to the bottom of the screen.
pub const CLEAR_SCREEN_DOWN: &str = crate::csi!("J");
/// Erase from the top of the screen to the cursor.
pub const CLEAR_SCREEN_UP: &str = crate::csi!("1J");
/// Erase the entire screen.
pub const CLEAR_SCREEN: &str = crate::csi!("2J");

const SAVE_ANSI: &str = crate::esc!("7");
const RESTORE_ANSI: &str = crate::esc!("8");
const SAVE_WINDOWS: &str = crate::csi!("s");
const RESTORE_WINDOWS: &str = crate::csi!("u");

const DEFAULT_COUNT: u32 = 1;

pub use self::backward as cursor_backward;
pub use self::clear_lines as clear_rows;
pub use self::down as cursor_down;
pub use self::forward as cursor_forward;
pub use self::up as cursor_up;

fn counted(n: Option<u32>, letter: char) -> String {
    format!("{CSI}{}{letter}", n.unwrap_or(DEFAULT_COUNT))
}

pub fn show() -> String {
    SHOW.to_string()
}

pub fn hide() -> String {
    HIDE.to_string()
}

/// Save the cursor position using the convention of `platform`.
pub fn save(platform: Platform) -> String {
    match platform {
        Platform::Windows => SAVE_WINDOWS.to_string(),
        Platform::Ansi => SAVE_ANSI.to_string(),
    }
}

/// Restore a position stored by [`save`].
pub fn restore(platform: Platform) -> String {
    match platform {
        Platform::Windows => RESTORE_WINDOWS.to_string(),
        Platform::Ansi => RESTORE_ANSI.to_string(),
    }
}

/// Request a cursor position report. Reading the reply is up to the caller.
pub fn current() -> String {
    CURRENT.to_string()
}

/// Absolute move using 0-based coordinates.
///
/// Both coordinates or neither: with neither the cursor goes home, with
/// only one of them the call fails with [`Error::InvalidArgument`].
pub fn move_to(row: Option<u32>, column: Option<u32>) -> Result<String> {
    match (row, column) {
        (None, None) => Ok(HOME.to_string()),
        (Some(row), Some(column)) => Ok(move_to_position(row, column)),
        (Some(_), None) => Err(Error::invalid_argument(
            "move_to needs a column when a row is given",
        )),
        (None, Some(_)) => Err(Error::invalid_argument(
            "move_to needs a row when a column is given",
        )),
    }
}

/// Absolute move using 0-based coordinates. The wire format is 1-based and
/// puts the column first.
pub fn move_to_position(row: u32, column: u32) -> String {
    format!("{CSI}{};{}H", u64::from(column) + 1, u64::from(row) + 1)
}

/// Relative move. Positive `dx` goes right, positive `dy` goes up; a zero
/// component emits nothing.
pub fn move_by(dx: i32, dy: i32) -> String {
    let horizontal = match dx {
        0 => String::new(),
        dx if dx < 0 => backward(Some(dx.unsigned_abs())),
        dx => forward(Some(dx.unsigned_abs())),
    };
    let vertical = match dy {
        0 => String::new(),
        dy if dy < 0 => down(Some(dy.unsigned_abs())),
        dy => up(Some(dy.unsigned_abs())),
    };
    horizontal + &vertical
}

pub fn up(n: Option<u32>) -> String {
    counted(n, 'A')
}

pub fn down(n: Option<u32>) -> String {
    counted(n, 'B')
}

pub fn backward(n: Option<u32>) -> String {
    counted(n, 'D')
}

pub fn forward(n: Option<u32>) -> String {
    counted(n, 'C')
}

/// Move to the nth (1-based) column of the current line.
pub fn column(n: Option<u32>) -> String {
    counted(n, 'G')
}

/// Move to the nth (1-based) row of the current column.
pub fn row(n: Option<u32>) -> String {
    counted(n, 'd')
}

pub fn next_line() -> String {
    NEXT_LINE.to_string()
}

pub fn prev_line() -> String {
    PREV_LINE.to_string()
}

/// Erase `n` characters from the cursor. Without a count the parameter is
/// left out entirely and the terminal erases one character.
pub fn clear_char(n: Option<u32>) -> String {
    match n {
        Some(n) => format!("{CSI}{n}X"),
        None => crate::csi!("X").to_string(),
    }
}

pub fn clear_line() -> String {
    CLEAR_LINE.to_string()
}

pub fn clear_line_before() -> String {
    CLEAR_LINE_BEFORE.to_string()
}

pub fn clear_line_after() -> String {
    CLEAR_LINE_AFTER.to_string()
}

/// Clear `n` lines, stepping one line in `direction` between them. The
/// last cleared line is not followed by a move.
pub fn clear_lines(n: u32, direction: Direction) -> String {
    let step = match direction {
        Direction::Up => up(None),
        Direction::Down => down(None),
    };
    let mut out = String::new();
    for i in 0..n {
        out.push_str(CLEAR_LINE);
        if i + 1 < n {
            out.push_str(&step);
        }
    }
    out
}

pub fn clear_screen_down() -> String {
    CLEAR_SCREEN_DOWN.to_string()
}

pub fn clear_screen_up() -> String {
    CLEAR_SCREEN_UP.to_string()
}

pub fn clear_screen() -> String {
    CLEAR_SCREEN.to_string()
}
