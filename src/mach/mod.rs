/*!
## Rust Machine Module

This Rust module runs scripts out of the line store: operand resolution,
the value domains, the command set and the staged pipeline that executes
one line at a time.

*/

mod bcd;
mod command;
mod config;
mod flow;
mod function;
mod listing;
mod operation;
mod raw;
mod resolve;
mod runtime;
mod session;
mod stack;
mod val;

#[cfg(test)]
mod tests;

pub use bcd::Bcd;
pub use command::Meta;
pub use config::Config;
pub use flow::{Flow, Pass};
pub use function::Function;
pub use listing::Listing;
pub use operation::{Flags, Operation};
pub use raw::{RawArray, RawTable};
pub use resolve::Operand;
pub use runtime::{Event, Runtime, Stage};
pub use session::Session;
pub use stack::LinkStack;
pub use val::{Domain, Val};
