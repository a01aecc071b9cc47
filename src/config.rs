
/// Type representing a single memory cell. Program code and data share this representation.
pub type Word = i64;

/// Number of zero-initialized cells appended past the end of the loaded program when no
/// explicit extra memory size is given. Self-modifying programs that write further past
/// their own end must be constructed with a larger reserve.
pub const DEFAULT_EXTRA_MEMORY: usize = 16;
