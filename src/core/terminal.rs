use terminal_size::{Height, terminal_size};

/// Rows assumed when stdout is not attached to a terminal.
pub const FALLBACK_ROWS: u16 = 24;

#[derive(Debug, Default, Clone)]
pub struct TermSize;

impl TermSize {
    /// Best-effort terminal height (defaults to [`FALLBACK_ROWS`]).
    pub fn rows(&self) -> u16 {
        match terminal_size() {
            Some((_, Height(h))) if h > 0 => h,
            _ => FALLBACK_ROWS,
        }
    }
}
