//! Intvm, a tiny suspendable virtual machine for programs of delimited integers.
//!
//! A program is a flat sequence of signed 64-bit words that serves as both code and
//! data. The [loader] parses program text into a [Program] image; any number of
//! [VM](runtime::VM) instances can then be constructed over the same image, each owning
//! an independent copy of memory. [run](runtime::VM::run) executes instructions until
//! the program needs an input value, has produced an output value, or has halted, and
//! returns control to the caller at that point. Callers drive arbitrarily complex
//! protocols (turn-based games, simulated networks) by resuming instances in whatever
//! order they see fit.

#[cfg(feature="loader")]
pub mod loader;
#[cfg(feature="runtime")]
pub mod runtime;
mod config;
mod program;

pub use config::{Word, DEFAULT_EXTRA_MEMORY};
pub use program::Program;

/// One stop shop to parse program text and create a VM for it.
///
/// Call [run](runtime::VM::run) on the returned VM to execute the program up to its
/// next suspend point.
#[cfg(all(feature="loader", feature="runtime"))]
pub fn vm(source: &[ u8 ]) -> runtime::VM {
    let program = loader::parse(source);
    runtime::VM::new(&program)
}
