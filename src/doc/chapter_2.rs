/*!
# Commands
*/

#[path = "commands/arithmetic.rs"]
#[allow(non_snake_case)]
pub mod ARITHMETIC;

#[path = "commands/logic.rs"]
#[allow(non_snake_case)]
pub mod LOGIC;

#[path = "commands/string.rs"]
#[allow(non_snake_case)]
pub mod STRING;

#[path = "commands/control.rs"]
#[allow(non_snake_case)]
pub mod CONTROL;

#[path = "commands/if.rs"]
#[allow(non_snake_case)]
pub mod IF;

#[path = "commands/loops.rs"]
#[allow(non_snake_case)]
pub mod LOOPS;

#[path = "commands/io.rs"]
#[allow(non_snake_case)]
pub mod IO;

#[path = "commands/hardware.rs"]
#[allow(non_snake_case)]
pub mod HARDWARE;

#[path = "commands/meta.rs"]
#[allow(non_snake_case)]
pub mod META;
