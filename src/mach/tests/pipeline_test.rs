use super::*;
use crate::hal::sim::SoftClock;
use crate::mach::Stage;

#[test]
fn test_one_stage_per_cycle() {
    let mut r = runtime(&["int @5 1 + 2"]);
    r.enter("run");
    assert_eq!(r.stage(), Stage::SearchCommand);
    assert!(matches!(r.execute(1), Event::Running));
    assert_eq!(r.stage(), Stage::EnumerateSources);
    for _ in 0..3 {
        r.execute(1);
    }
    assert_eq!(r.stage(), Stage::ExecuteCommand);
    r.execute(1);
    assert_eq!(r.stage(), Stage::GoNextLine);
    assert!(r.lines().is_blank(5));
    r.execute(1);
    assert_eq!(r.lines().read(5).unwrap(), "3");
    assert_eq!(r.stage(), Stage::SearchCommand);
}

#[test]
fn test_data_lines_are_skipped() {
    let mut r = runtime(&["hello there", "", "  print 'ok"]);
    assert_eq!(run(&mut r), "ok");
}

#[test]
fn test_end_stops_the_script() {
    let mut r = runtime(&["print 'a", "end", "print 'b"]);
    assert_eq!(run(&mut r), "a");
    assert!(!r.is_running());
}

#[test]
fn test_missing_destination_suppresses_writeback() {
    let mut r = runtime(&["int", "int 'x 1 + 1", "print 'ok"]);
    assert_eq!(run(&mut r), "ok");
}

#[test]
fn test_input_suspends_until_entered() {
    let mut r = runtime(&["input @20", "read @21", "print @20 - @21"]);
    assert_eq!(run(&mut r), "? ");
    assert!(r.is_running());
    assert!(r.enter("abc"));
    assert_eq!(drain(&mut r, 5000), "");
    assert!(r.enter("def"));
    assert_eq!(drain(&mut r, 5000), "abc-def");
    assert_eq!(r.lines().read(20).unwrap(), "abc");
}

#[test]
fn test_lines_ignored_while_running() {
    let mut r = runtime(&["jmp @1"]);
    r.enter("run");
    r.execute(10);
    assert!(!r.enter("print 'x"));
    assert!(r.lines().is_blank(2));
    r.interrupt();
    assert_eq!(drain(&mut r, 100), "");
    assert!(!r.is_running());
}

#[test]
fn test_break_byte_interrupts() {
    let mut r = runtime(&["jmp @1"]);
    r.enter("run");
    r.execute(10);
    assert!(!r.enter("\x03"));
    drain(&mut r, 100);
    assert!(!r.is_running());
}

#[test]
fn test_interrupt_while_waiting_for_input() {
    let mut r = runtime(&["input @20"]);
    assert_eq!(run(&mut r), "? ");
    r.interrupt();
    assert_eq!(drain(&mut r, 100), "");
    assert!(!r.is_running());
}

#[test]
fn test_sleep_waits_on_clock() {
    let board = Board::simulated().with_clock(SoftClock::stepped(1000));
    let mut r = runtime_with(Config::default(), board, &["sleep 10", "print 'woke"]);
    r.enter("run");
    // search, enumerate, execute, then the first poll
    for _ in 0..4 {
        r.execute(1);
    }
    assert_eq!(r.stage(), Stage::GoNextLine);
    assert_eq!(drain(&mut r, 5000), "woke");
}

#[test]
fn test_termination_lists_the_script() {
    let mut r = runtime(&["print 'a"]);
    r.enter("run");
    let mut listing = None;
    loop {
        match r.execute(5000) {
            Event::List(l) => listing = Some(l.to_string()),
            Event::Stopped => break,
            _ => {}
        }
    }
    assert_eq!(listing.unwrap(), "  1 print 'a\n");
}

#[test]
fn test_clear_command_wipes_store() {
    let mut r = runtime(&["print 'a", "clear", "print 'b"]);
    assert_eq!(run(&mut r), "a");
    assert!(r.listing().is_empty());
}

#[test]
fn test_run_past_last_line_terminates() {
    let config = Config {
        lines: 6,
        ..Config::default()
    };
    let mut r = runtime_with(config, Board::simulated(), &["print 'a", "jmp @99"]);
    assert_eq!(run(&mut r), "a");
    assert!(!r.is_running());
}

#[test]
fn test_rand_is_seeded() {
    let config = Config {
        seed: Some(7),
        ..Config::default()
    };
    let mut a = runtime_with(config, Board::simulated(), &["rand @20"]);
    let mut b = runtime_with(config, Board::simulated(), &["rand @20"]);
    run(&mut a);
    run(&mut b);
    let text = a.lines().read(20).unwrap().to_string();
    assert_eq!(text.len(), 34);
    assert!(text.starts_with("0b"));
    assert_eq!(text, b.lines().read(20).unwrap());
}
