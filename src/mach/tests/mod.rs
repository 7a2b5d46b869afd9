use crate::hal::Board;
use crate::mach::{Config, Event, Runtime};

mod for_test;
mod pipeline_test;

fn runtime(script: &[&str]) -> Runtime {
    let mut runtime = Runtime::default();
    load(&mut runtime, script);
    runtime
}

fn runtime_with(config: Config, board: Board, script: &[&str]) -> Runtime {
    let mut runtime = Runtime::new(config, board).unwrap();
    load(&mut runtime, script);
    runtime
}

fn load(runtime: &mut Runtime, script: &[&str]) {
    for (i, line) in script.iter().enumerate() {
        runtime.lines_mut().write(i + 1, line).unwrap();
    }
}

fn run(runtime: &mut Runtime) -> String {
    runtime.enter("run");
    drain(runtime, 5000)
}

fn drain(runtime: &mut Runtime, cycles: usize) -> String {
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
