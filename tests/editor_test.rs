mod common;
use aloha::mach::Runtime;
use common::*;

#[test]
fn test_lines_fill_from_cursor() {
    let mut r = runtime(&["a", "  b  "]);
    assert_eq!(r.cursor(), 3);
    r.enter("list");
    assert_eq!(list(&mut r), "  1 a\n  2 b\n");
}

#[test]
fn test_set() {
    let mut r = runtime(&["a"]);
    assert!(r.enter("set 5"));
    r.enter("x");
    assert_eq!(line(&r, 5), "x");
    assert_eq!(r.cursor(), 6);
}

#[test]
fn test_set_out_of_range() {
    let mut r = Runtime::default();
    r.enter("set 4");
    r.enter("set 0");
    assert_eq!(r.cursor(), 4);
    r.enter("set 127");
    assert_eq!(r.cursor(), 4);
    r.enter("set 126");
    assert_eq!(r.cursor(), 126);
}

#[test]
fn test_cursor_stops_at_last_line() {
    let mut r = Runtime::default();
    r.enter("set 126");
    r.enter("x");
    r.enter("y");
    assert_eq!(r.cursor(), 126);
    assert_eq!(line(&r, 126), "y");
}

#[test]
fn test_insert() {
    let mut r = runtime(&["a", "b", "c"]);
    r.enter("set 2");
    r.enter("insert");
    r.enter("list");
    assert_eq!(list(&mut r), "  1 a\n  3 b\n  4 c\n");
    r.enter("new");
    assert_eq!(line(&r, 2), "new");
}

#[test]
fn test_delete() {
    let mut r = runtime(&["a", "b", "c"]);
    r.enter("set 1");
    r.enter("delete");
    r.enter("list");
    assert_eq!(list(&mut r), "  1 b\n  2 c\n");
    assert_eq!(r.cursor(), 1);
}

#[test]
fn test_clear() {
    let mut r = runtime(&["a", "b"]);
    r.enter("clear");
    assert!(r.is_running());
    assert_eq!(list(&mut r), "");
    assert!(!r.is_running());
    assert_eq!(r.cursor(), 1);
    assert!(r.lines().is_blank(1));
}

#[test]
fn test_run_prints_listing_at_end() {
    let mut r = runtime(&["print 'hi", "end"]);
    r.enter("run");
    assert_eq!(list(&mut r), "  1 print 'hi\n  2 end\n");
}

#[test]
fn test_lines_ignored_while_running() {
    let mut r = runtime(&["print 'a"]);
    assert!(r.enter("run"));
    assert!(!r.enter("print 'b"));
    assert_eq!(line(&r, 1), "print 'a");
    assert_eq!(exec_n(&mut r, 5000), "a");
}

#[test]
fn test_break_from_editor_is_harmless() {
    let mut r = runtime(&["a"]);
    assert!(!r.enter("\x03"));
    assert_eq!(list(&mut r), "");
    assert_eq!(line(&r, 1), "a");
}

#[test]
fn test_received_lines_land_in_input_slot() {
    let mut r = runtime(&["input @20"]);
    r.enter("  spaced  ");
    assert_eq!(line(&r, 127), "  spaced  ");
    assert_eq!(line(&r, 2), "spaced");
    assert_eq!(exec(&mut r), "? ");
    r.enter("answer");
    assert_eq!(line(&r, 127), "answer");
    exec_n(&mut r, 5000);
    assert_eq!(line(&r, 20), "answer");
}
