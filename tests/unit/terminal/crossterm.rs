use super::*;

fn output(term: &CrosstermTerminal<Vec<u8>>) -> String {
    String::from_utf8_lossy(term.get_ref()).into_owned()
}

#[test]
fn write_cursor_moves_then_prints() {
    let mut term = CrosstermTerminal::with_size(Vec::new(), 80, 24);
    term.write_cursor(2, 5, '中').unwrap();
    // MoveTo is 1-based on the wire.
    assert_eq!(output(&term), "\x1b[3;6H中");
}

#[test]
fn negative_coordinates_are_not_emitted() {
    let mut term = CrosstermTerminal::with_size(Vec::new(), 80, 24);
    term.write_cursor(-1, 0, 'x').unwrap();
    term.write_cursor(0, -3, 'x').unwrap();
    assert!(term.get_ref().is_empty());
}

#[test]
fn move_cursor_clamps_to_the_origin() {
    let mut term = CrosstermTerminal::with_size(Vec::new(), 80, 24);
    term.move_cursor(-4, -1).unwrap();
    assert_eq!(output(&term), "\x1b[1;1H");
}

#[test]
fn fixed_size_is_reported() {
    let term = CrosstermTerminal::with_size(Vec::new(), 120, 40);
    assert_eq!(term.width(), 120);
    assert_eq!(term.height(), 40);
}

#[test]
fn into_inner_returns_everything_queued() {
    let mut term = CrosstermTerminal::with_size(Vec::new(), 80, 24);
    term.write_cursor(0, 0, 'a').unwrap();
    term.flush().unwrap();
    assert_eq!(term.into_inner(), b"\x1b[1;1Ha".to_vec());
}
