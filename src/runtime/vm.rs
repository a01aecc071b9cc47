//! A virtual machine for running integer programs.

use crate::{Program, Word, DEFAULT_EXTRA_MEMORY};

/// Status of the vm, returned by each call to [run](VM::run).
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum VMState {
    /// The program requested an input value. The caller must deposit exactly one value,
    /// either via [provide_input](VM::provide_input) or by writing to the cell named by
    /// [pending_input_address](VM::pending_input_address), before resuming.
    AwaitingInput,
    /// The program produced an output value, readable via [last_output](VM::last_output).
    OutputReady,
    /// The program has halted. Halting resets pc and relative base to 0 but leaves
    /// memory mutated, so a halted instance is single-use: resuming it re-executes from
    /// address 0 over whatever state the program left behind.
    Halted,
}

/// Addressing mode of a single instruction parameter.
#[derive(Copy, Clone, Debug, PartialEq)]
enum Mode {
    /// The parameter is an absolute memory address.
    Position,
    /// The parameter is the operand itself. Invalid as a store target.
    Immediate,
    /// The parameter is an offset from the relative base register.
    Relative,
}

impl Mode {
    /// Converts one decimal digit of the instruction word to its addressing mode.
    fn from_digit(digit: Word) -> Mode {
        match digit {
            0 => Mode::Position,
            1 => Mode::Immediate,
            2 => Mode::Relative,
            digit @ _ => panic!("Invalid addressing mode {}", digit),
        }
    }
}

/// A virtual machine executing one privately owned copy of a program image.
///
/// The machine trusts its input: memory accesses are resolved without range checks
/// beyond those of the underlying container, and an unrecognized instruction aborts
/// execution. Instances constructed from the same program are fully independent.
#[derive(Clone, Debug)]
pub struct VM {
    memory        : Vec<Word>,
    pc            : usize,
    relative_base : Word,
    last_output   : Word,
    pending_input : Option<usize>,
}

/// Public VM methods.
impl VM {
    /// Creates a new VM instance over a copy of the given program, reserving
    /// [DEFAULT_EXTRA_MEMORY] zero-initialized cells past the program's end.
    pub fn new(program: &Program) -> Self {
        Self::with_extra_memory(program, DEFAULT_EXTRA_MEMORY)
    }

    /// Creates a new VM instance over a copy of the given program, reserving the given
    /// number of zero-initialized cells past the program's end for programs that write
    /// beyond their own length.
    pub fn with_extra_memory(program: &Program, extra_memory: usize) -> Self {
        let mut memory = program.code().to_vec();
        memory.resize(program.len() + extra_memory, 0);
        VM {
            memory        : memory,
            pc            : 0,
            relative_base : 0,
            last_output   : 0,
            pending_input : None,
        }
    }

    /// Executes instructions until the program suspends for input or output or halts,
    /// and returns the status. Resuming after [AwaitingInput](VMState::AwaitingInput)
    /// assumes the input cell has been filled.
    pub fn run(self: &mut Self) -> VMState {
        // resuming consumes any pending input address, filled or not
        self.pending_input = None;
        loop {
            match self.memory[self.pc] % 100 {
                1 => {
                    let value = self.fetch(1) + self.fetch(2);
                    self.store(3, value);
                    self.pc += 4;
                },
                2 => {
                    let value = self.fetch(1) * self.fetch(2);
                    self.store(3, value);
                    self.pc += 4;
                },
                3 => {
                    self.pending_input = Some(self.store_address(1));
                    self.pc += 2;
                    return VMState::AwaitingInput;
                },
                4 => {
                    self.last_output = self.fetch(1);
                    self.pc += 2;
                    return VMState::OutputReady;
                },
                5 => {
                    self.pc = if self.fetch(1) != 0 { self.fetch(2) as usize } else { self.pc + 3 };
                },
                6 => {
                    self.pc = if self.fetch(1) == 0 { self.fetch(2) as usize } else { self.pc + 3 };
                },
                7 => {
                    let value = (self.fetch(1) < self.fetch(2)) as Word;
                    self.store(3, value);
                    self.pc += 4;
                },
                8 => {
                    let value = (self.fetch(1) == self.fetch(2)) as Word;
                    self.store(3, value);
                    self.pc += 4;
                },
                9 => {
                    self.relative_base += self.fetch(1);
                    self.pc += 2;
                },
                99 => {
                    self.pc = 0;
                    self.relative_base = 0;
                    return VMState::Halted;
                },
                opcode @ _ => panic!("Unrecognized opcode {} at address {}", opcode, self.pc),
            }
        }
    }

    /// Deposits an input value at the cell requested by the last input instruction.
    pub fn provide_input(self: &mut Self, value: Word) {
        match self.pending_input.take() {
            Some(address) => self.memory[address] = value,
            None => panic!("Attempted to provide input to a vm that is not awaiting input"),
        }
    }

    /// Returns the address awaiting an input value, or None if the vm is not suspended
    /// on an input instruction.
    pub fn pending_input_address(self: &Self) -> Option<usize> {
        self.pending_input
    }

    /// Returns the most recent value produced by an output instruction.
    pub fn last_output(self: &Self) -> Word {
        self.last_output
    }

    /// Reads a memory cell directly.
    pub fn read(self: &Self, address: usize) -> Word {
        self.memory[address]
    }

    /// Writes a memory cell directly.
    pub fn write(self: &mut Self, address: usize, value: Word) {
        self.memory[address] = value;
    }
}

/// Instruction decoding.
impl VM {
    /// Returns the addressing mode of the nth instruction parameter, decoded from the
    /// nth lowest decimal digit above the two opcode digits of the instruction word.
    fn mode(self: &Self, nth: u32) -> Mode {
        Mode::from_digit(self.memory[self.pc] / (10 as Word).pow(nth + 1) % 10)
    }

    /// Resolves the nth instruction parameter to an operand value.
    fn fetch(self: &Self, nth: u32) -> Word {
        let parameter = self.memory[self.pc + nth as usize];
        match self.mode(nth) {
            Mode::Position  => self.memory[parameter as usize],
            Mode::Immediate => parameter,
            Mode::Relative  => self.memory[(self.relative_base + parameter) as usize],
        }
    }

    /// Resolves the nth instruction parameter to a store address.
    fn store_address(self: &Self, nth: u32) -> usize {
        let parameter = self.memory[self.pc + nth as usize];
        match self.mode(nth) {
            Mode::Position  => parameter as usize,
            Mode::Immediate => panic!("Immediate mode store target at address {}", self.pc),
            Mode::Relative  => (self.relative_base + parameter) as usize,
        }
    }

    /// Stores a value at the address named by the nth instruction parameter.
    fn store(self: &mut Self, nth: u32, value: Word) {
        let address = self.store_address(nth);
        self.memory[address] = value;
    }
}
