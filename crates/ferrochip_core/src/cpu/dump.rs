use std::fmt;

use super::{Interpreter, RunState, FRAMEBUFFER_SIZE};
use crate::instruction::Instruction;
use crate::{NUM_REGS, RAM_SIZE, SCREEN_WIDTH, STACK_SIZE, START_ADDRESS};

/// A point-in-time copy of the whole machine, printable for debugging.
///
/// Taking a copy lets a driver hand the snapshot to another thread or keep
/// it around after the interpreter has moved on.
#[derive(Clone)]
pub struct Dump {
    pub memory: Box<[u8; RAM_SIZE]>,
    pub framebuffer: Box<[u8; FRAMEBUFFER_SIZE]>,
    pub registers: [u8; NUM_REGS],
    pub stack: [u16; STACK_SIZE],
    pub index: u16,
    pub stack_pointer: u8,
    pub program_counter: u16,
    pub opcode: u16,
    pub delay_timer: u8,
    pub sound_timer: u8,
    pub sound_active: bool,
    pub state: RunState,
}

impl Interpreter {
    pub fn dump(&self) -> Dump {
        Dump {
            memory: Box::new(self.ram),
            framebuffer: Box::new(self.framebuffer),
            registers: self.v_reg,
            stack: self.stack,
            index: self.i_reg,
            stack_pointer: self.stack_pointer,
            program_counter: self.pc,
            opcode: self.opcode,
            delay_timer: self.delay_timer,
            sound_timer: self.sound_timer,
            sound_active: self.is_sound_active(),
            state: self.state,
        }
    }

    /// Log a full [`Dump`] at debug level.
    pub fn debug_dump(&self) {
        if log::log_enabled!(log::Level::Debug) {
            log::debug!("\n{}", self.dump());
        }
    }
}

impl fmt::Display for Dump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "---- Memory ----")?;
        for (row, chunk) in self.memory.chunks(32).enumerate() {
            if row * 32 == START_ADDRESS as usize {
                writeln!(f, "\t-- {START_ADDRESS:#05X} --")?;
            }
            write!(f, "{:03X}:", row * 32)?;
            for byte in chunk {
                write!(f, " {byte:02X}")?;
            }
            writeln!(f)?;
        }

        writeln!(f, "\n---- Framebuffer ----")?;
        for line in self.framebuffer.chunks(SCREEN_WIDTH) {
            let line: String = line
                .iter()
                .map(|px| if *px != 0 { '#' } else { '.' })
                .collect();
            writeln!(f, "{line}")?;
        }

        writeln!(f, "\n---- Registers ----")?;
        for (row, chunk) in self.registers.chunks(4).enumerate() {
            for (col, value) in chunk.iter().enumerate() {
                write!(f, "V{:X}={value:02X} ", row * 4 + col)?;
            }
            writeln!(f)?;
        }

        writeln!(f, "\n---- Stack ----")?;
        for (slot, addr) in self.stack.iter().enumerate() {
            let marker = if slot == self.stack_pointer as usize { " <- sp" } else { "" };
            writeln!(f, "{slot:2}: {addr:#06X}{marker}")?;
        }

        writeln!(
            f,
            "\nI: {:#06X}  SP: {}  PC: {:#06X}",
            self.index, self.stack_pointer, self.program_counter
        )?;
        writeln!(
            f,
            "Opcode: {:04X} ({})",
            self.opcode,
            Instruction::decode(self.opcode)
        )?;
        writeln!(
            f,
            "DT: {}  ST: {}{}  State: {:?}",
            self.delay_timer,
            self.sound_timer,
            if self.sound_active { " (beep)" } else { "" },
            self.state
        )
    }
}
