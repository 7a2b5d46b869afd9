#![allow(dead_code)]
use aloha::hal::Board;
use aloha::mach::{Config, Event, Runtime};

pub fn runtime(script: &[&str]) -> Runtime {
    let mut runtime = Runtime::default();
    load(&mut runtime, script);
    runtime
}

pub fn runtime_on(board: Board, script: &[&str]) -> Runtime {
    let mut runtime = Runtime::new(Config::default(), board).unwrap();
    load(&mut runtime, script);
    runtime
}

pub fn load(runtime: &mut Runtime, script: &[&str]) {
    for line in script {
        runtime.enter(line);
    }
}

pub fn line(runtime: &Runtime, index: usize) -> String {
    runtime.lines().read(index).unwrap().to_string()
}

/// Runs the script and collects what it printed.
pub fn exec(runtime: &mut Runtime) -> String {
    runtime.enter("run");
    exec_n(runtime, 5000)
}

pub fn exec_n(runtime: &mut Runtime, cycles: usize) -> String {
    let mut out = String::new();
    let mut stalled = false;
    loop {
        match runtime.execute(cycles) {
            Event::Stopped => break,
            Event::Input(prompt) => {
                out.push_str(&prompt);
                break;
            }
            Event::Print(text) => out.push_str(&text),
            Event::List(_) => {}
            Event::Running if stalled => {
                out.push_str("\n<still running>\n");
                break;
            }
            Event::Running => {
                stalled = true;
                continue;
            }
        }
        stalled = false;
    }
    out
}

/// The editor view printed by `list` or at the end of a run.
pub fn list(runtime: &mut Runtime) -> String {
    let mut s = String::new();
    loop {
        match runtime.execute(5000) {
            Event::List(listing) => s.push_str(&listing.to_string()),
            Event::Stopped | Event::Input(_) => break,
            _ => {}
        }
    }
    s
}
