use thiserror::Error;

/// Conditions the interpreter reports to its caller instead of panicking.
///
/// None of these terminate the machine: after an error the state is exactly
/// what it was before the failing call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VmError {
    #[error("program counter {pc:#06X} is outside addressable memory")]
    AddressOutOfBounds { pc: u16 },

    #[error("program of {len} bytes does not fit in the {capacity} bytes available at the load address")]
    LoadOverflow { len: usize, capacity: usize },

    #[error("call at {pc:#06X} overflows the 16-entry call stack")]
    StackOverflow { pc: u16 },

    #[error("return at {pc:#06X} with an empty call stack")]
    StackUnderflow { pc: u16 },
}
