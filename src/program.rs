use crate::Word;

/// A program image: the initial memory contents of a VM instance.
///
/// Programs can be created using the [loader](crate::loader) or from a raw word vector
/// and are read-only thereafter. Each [VM](crate::runtime::VM) constructed over a
/// program copies it, so instances never alias memory.
#[derive(Clone, Debug, PartialEq)]
pub struct Program {
    code: Vec<Word>,
}

impl Program {
    /// Returns the program words.
    pub fn code(self: &Self) -> &[ Word ] {
        &self.code
    }
    /// Returns the number of words in the program.
    pub fn len(self: &Self) -> usize {
        self.code.len()
    }
    /// Returns whether the program contains no words.
    pub fn is_empty(self: &Self) -> bool {
        self.code.is_empty()
    }
}

impl From<Vec<Word>> for Program {
    fn from(code: Vec<Word>) -> Program {
        Program { code }
    }
}
