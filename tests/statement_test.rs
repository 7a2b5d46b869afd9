mod common;
use aloha::hal::sim::SoftClock;
use aloha::hal::Board;
use common::*;

#[test]
fn test_print_escapes() {
    let mut r = runtime(&[r"print 'a\sb\n 'c \e[0m"]);
    assert_eq!(exec(&mut r), "a b\nc\x1b[0m");
}

#[test]
fn test_print_line_reference() {
    let mut r = runtime(&["print @3 \\s %3", "end", "hello", "world"]);
    assert_eq!(exec(&mut r), "hello world");
}

#[test]
fn test_let_and_append() {
    let mut r = runtime(&["let @20 'abc", "mov @21 @20", "apd @21 'def", "append @21 @20"]);
    exec(&mut r);
    assert_eq!(line(&r, 20), "abc");
    assert_eq!(line(&r, 21), "abcdefabc");
}

#[test]
fn test_append_is_clamped_to_row() {
    let mut r = runtime(&["let @20 'x", "for @21 6", "apd @20 @20", "next @21"]);
    exec(&mut r);
    assert_eq!(line(&r, 20).len(), 63);
}

#[test]
fn test_hlen_vlen() {
    let mut r = runtime(&["hlen @20 'hello", "vlen @21 @1", "vlen @22 @30", "end", "", "x"]);
    exec(&mut r);
    assert_eq!(line(&r, 20), "5");
    assert_eq!(line(&r, 21), "4");
    assert_eq!(line(&r, 22), "0");
}

#[test]
fn test_ptr_and_indirection() {
    let mut r = runtime(&[
        "let @20 'hello",
        "ptr @22 @21",
        "let [22 @20",
        ".var 30",
        "let :var 'bye",
        "ptr @23 .var",
    ]);
    exec(&mut r);
    assert_eq!(line(&r, 21), "hello");
    assert_eq!(line(&r, 22), "21");
    assert_eq!(line(&r, 23), "4");
    assert_eq!(line(&r, 30), "bye");
}

#[test]
fn test_push_pop_round_trip() {
    let mut r = runtime(&["push 'one", "push @10", "pop @20", "pop @21", "pop @22", "end", "", "", "", "two"]);
    exec(&mut r);
    assert_eq!(line(&r, 20), "two");
    assert_eq!(line(&r, 21), "one");
    assert_eq!(line(&r, 22), "");
    assert!(r.lines().is_blank(125));
    assert!(r.lines().is_blank(124));
}

#[test]
fn test_pop_at_floor_keeps_destination() {
    let mut r = runtime(&["let @20 'keep", "pop @20"]);
    exec(&mut r);
    assert_eq!(line(&r, 20), "keep");
}

#[test]
fn test_input_and_read() {
    let mut r = runtime(&["input @20", "read @21", "print @20 , @21"]);
    assert_eq!(exec(&mut r), "? ");
    r.enter("12");
    assert_eq!(exec_n(&mut r, 5000), "");
    r.enter("34");
    assert_eq!(exec_n(&mut r, 5000), "12,34");
}

#[test]
fn test_stime_gtime() {
    let board = Board::simulated().with_clock(SoftClock::stepped(1));
    let mut r = runtime_on(
        board,
        &[
            "stime 2024 1 2 3 4 5 0",
            "gtime @20 @21 @22 @23 @24 @25 @26 @27",
        ],
    );
    exec(&mut r);
    assert_eq!(line(&r, 20), "2024");
    assert_eq!(line(&r, 21), "1");
    assert_eq!(line(&r, 22), "2");
    assert_eq!(line(&r, 23), "2");
    assert_eq!(line(&r, 24), "3");
    assert_eq!(line(&r, 25), "4");
    assert_eq!(line(&r, 26), "5");
}

#[test]
fn test_gtime_skips_immediate_destinations() {
    let board = Board::simulated().with_clock(SoftClock::stepped(1));
    let mut r = runtime_on(board, &["stime 1999 12 31 0 0 0 0", "gtime @20 'x @22"]);
    exec(&mut r);
    assert_eq!(line(&r, 20), "1999");
    assert_eq!(line(&r, 22), "5");
    assert!(r.lines().is_blank(21));
}

#[test]
fn test_csr() {
    let mut r = runtime(&["csr 5 3"]);
    assert_eq!(exec(&mut r), "\x1b[3;5H");
}

#[test]
fn test_label_filling_slot_with_multibyte_end() {
    let label = format!(".{}é", "a".repeat(60));
    let mut r = runtime(&[label.as_str(), "print 'ok"]);
    assert_eq!(exec(&mut r), "ok");
    assert_eq!(line(&r, 1), format!(".{} ", "a".repeat(60)));
}
