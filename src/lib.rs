//! # Aloha
//!
//! A line-store script interpreter for a small ARM board. Every line of the
//! store is both an instruction and a memory cell: scripts compute by
//! rewriting lines, jump by line number or label, and drive the board's
//! GPIO, sound and EEPROM through a handful of commands.
//!
//! Begin by running the executable in a terminal. Type lines into the
//! editor, then `run`.
//! ```text
//! > print 'Hello\sWorld\n
//! > run
//! Hello World
//! ```
//!
//! The interpreter runs one pipeline stage per call so it can share a single
//! core with the timer service of the board. On the desktop the board is
//! simulated by [`hal::sim`].

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/chapter_3.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_3;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod hal;
pub mod lang;
pub mod mach;
pub mod term;
