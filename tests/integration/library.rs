use tty_cursor::core::types::{Direction, Platform};
use tty_cursor::cursor::{self, invisible};

#[test]
fn public_builders_match_reference_table() {
    let table = [
        (cursor::show(), "\x1B[?25h"),
        (cursor::hide(), "\x1B[?25l"),
        (cursor::save(Platform::Ansi), "\x1B7"),
        (cursor::save(Platform::Windows), "\x1B[s"),
        (cursor::restore(Platform::Ansi), "\x1B8"),
        (cursor::restore(Platform::Windows), "\x1B[u"),
        (cursor::current(), "\x1B[6n"),
        (cursor::up(Some(1)), "\x1B[1A"),
        (cursor::down(Some(5)), "\x1B[5B"),
        (cursor::backward(Some(5)), "\x1B[5D"),
        (cursor::forward(None), "\x1B[1C"),
        (cursor::column(None), "\x1B[1G"),
        (cursor::row(Some(50)), "\x1B[50d"),
        (cursor::next_line(), "\x1B[E\x1B[1G"),
        (cursor::prev_line(), "\x1B[A\x1B[1G"),
        (cursor::clear_char(None), "\x1B[X"),
        (cursor::clear_char(Some(5)), "\x1B[5X"),
        (cursor::clear_line(), "\x1B[2K\x1B[1G"),
        (cursor::clear_line_before(), "\x1B[0K"),
        (cursor::clear_line_after(), "\x1B[1K"),
        (cursor::clear_screen_down(), "\x1B[J"),
        (cursor::clear_screen_up(), "\x1B[1J"),
        (cursor::clear_screen(), "\x1B[2J"),
        (cursor::move_to(None, None).unwrap(), "\x1B[H"),
        (cursor::move_to(Some(2), Some(3)).unwrap(), "\x1B[4;3H"),
        (cursor::move_by(0, 0), ""),
        (cursor::move_by(2, 3), "\x1B[2C\x1B[3A"),
    ];
    for (actual, expected) in table {
        assert_eq!(actual, expected);
    }
}

#[test]
fn constants_match_builders() {
    assert_eq!(cursor::SHOW, cursor::show());
    assert_eq!(cursor::HOME, cursor::move_to(None, None).unwrap());
    assert_eq!(cursor::CLEAR_LINE, cursor::clear_lines(1, Direction::Up));
}

#[test]
fn invisible_output_always_ends_with_show() {
    let mut out = Vec::new();
    let result: Result<(), String> = invisible(&mut out, |_| Err("failed".to_string())).unwrap();
    assert!(result.is_err());
    assert!(out.starts_with(cursor::HIDE.as_bytes()));
    assert!(out.ends_with(cursor::SHOW.as_bytes()));
}

#[test]
fn invisible_redraw_is_framed_by_hide_and_show() {
    let mut out = Vec::new();
    invisible(&mut out, |stream| {
        stream.extend_from_slice(cursor::clear_line().as_bytes());
        stream.extend_from_slice(b"50%");
    })
    .unwrap();
    let expected = [cursor::HIDE, cursor::CLEAR_LINE, "50%", cursor::SHOW].concat();
    assert_eq!(out, expected.as_bytes());
}
