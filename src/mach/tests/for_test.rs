use super::*;

#[test]
fn test_for_runs_three_times() {
    let mut r = runtime(&[
        "let @20 0",
        "for @20 2",
        "print 'x",
        "next @20",
        "print 'done",
    ]);
    assert_eq!(run(&mut r), "xxxdone");
    assert_eq!(r.lines().read(20).unwrap(), "3");
}

#[test]
fn test_for_false_on_entry_skips_body() {
    let mut r = runtime(&["let @20 5", "for @20 2", "print 'x", "next @20", "print 'y"]);
    assert_eq!(run(&mut r), "y");
    // no increment on the skip exit
    assert_eq!(r.lines().read(20).unwrap(), "5");
}

#[test]
fn test_nested_for() {
    let mut r = runtime(&[
        "let @20 1",
        "for @20 2",
        "let @21 1",
        "for @21 2",
        r"print @20 @21 \s",
        "next @21",
        "next @20",
    ]);
    assert_eq!(run(&mut r), "11 12 21 22 ");
}

#[test]
fn test_break_out_of_for() {
    let mut r = runtime(&[
        "let @20 0",
        "for @20 9",
        "print @20",
        "ifu @20 == 2",
        "break",
        "endif",
        "next @20",
        "print 'end",
    ]);
    assert_eq!(run(&mut r), "012end");
}
