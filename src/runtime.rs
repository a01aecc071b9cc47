//! Program execution.

mod vm;

pub use self::vm::{VM, VMState};
