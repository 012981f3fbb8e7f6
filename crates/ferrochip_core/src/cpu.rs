mod dump;
mod exec;

use std::fmt;
use std::path::Path;

use anyhow::Context;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::config::VmConfig;
use crate::error::VmError;
use crate::instruction::{AluOp, Instruction, Opcode};
use crate::{
    FONTSET, FONTSET_SIZE, INSTRUCTION_SIZE, NUM_KEYS, NUM_REGS, RAM_SIZE, SCREEN_HEIGHT,
    SCREEN_WIDTH, STACK_SIZE, START_ADDRESS,
};

pub use dump::Dump;

/// Number of cells in the framebuffer.
pub const FRAMEBUFFER_SIZE: usize = SCREEN_WIDTH * SCREEN_HEIGHT;

/// Whether the machine is executing normally or parked on `Fx0A`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Running,
    /// `Fx0A` found no pressed key; the same instruction is fetched again
    /// on the next cycle.
    AwaitingKey { register: usize },
}

/// Outcome of one successful call to [`Interpreter::advance`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cycle {
    Executed(Instruction),
    /// `Fx0A` is pending: nothing changed, not even the timers.
    AwaitingKey,
    /// The word has no defined behaviour. It was treated as a no-op with the
    /// standard timer decrement and pc advance.
    Unimplemented(u16),
}

/// How an executed instruction wants the cycle to be finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    /// Decrement timers, advance pc.
    Next,
    /// Advance pc once extra, then finish like `Next`.
    Skip,
    /// Decrement timers, pc = target.
    Jump(u16),
    /// Leave everything untouched.
    Wait,
}

/// The CHIP-8 virtual machine.
///
/// All emulated state lives here and is only changed by [`Interpreter::advance`]
/// and the explicit setters. The driver writes key state between cycles and
/// reads the framebuffer after them.
///
/// # Call stack
///
/// Stack depth is not validated unless [`VmConfig::checked_stack`] is set.
/// Without it a 17th nested call overwrites the oldest return address and a
/// return with an empty stack pops a stale slot; the stack pointer wraps
/// instead of panicking.
pub struct Interpreter {
    config: VmConfig,
    /// program counter
    pc: u16,
    ram: [u8; RAM_SIZE],
    /// display, one byte per pixel holding 0 or 1
    framebuffer: [u8; FRAMEBUFFER_SIZE],
    /// V Registers
    v_reg: [u8; NUM_REGS],
    /// I Register
    i_reg: u16,
    /// next free stack slot
    stack_pointer: u8,
    stack: [u16; STACK_SIZE],
    keys: [u8; NUM_KEYS],
    delay_timer: u8,
    sound_timer: u8,
    /// last fetched instruction word, kept for introspection
    opcode: u16,
    state: RunState,
    rng: Box<dyn RngCore + Send>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::with_config(VmConfig::default())
    }
}

impl fmt::Debug for Interpreter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interpreter")
            .field("pc", &format_args!("{:#06X}", self.pc))
            .field("i", &format_args!("{:#06X}", self.i_reg))
            .field("v", &self.v_reg)
            .field("sp", &self.stack_pointer)
            .field("dt", &self.delay_timer)
            .field("st", &self.sound_timer)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: VmConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Build an interpreter that draws `Cxkk` bytes from `rng`.
    pub fn with_rng(config: VmConfig, rng: impl RngCore + Send + 'static) -> Self {
        let mut vm = Self {
            config,
            pc: START_ADDRESS,
            ram: [0; RAM_SIZE],
            framebuffer: [0; FRAMEBUFFER_SIZE],
            v_reg: [0; NUM_REGS],
            i_reg: 0,
            stack_pointer: 0,
            stack: [0; STACK_SIZE],
            keys: [0; NUM_KEYS],
            delay_timer: 0,
            sound_timer: 0,
            opcode: 0,
            state: RunState::Running,
            rng: Box::new(rng),
        };
        vm.ram[..FONTSET_SIZE].copy_from_slice(&FONTSET);
        vm
    }

    /// Return to power-on state. Configuration and random source are kept.
    pub fn reset(&mut self) {
        self.pc = START_ADDRESS;
        self.ram = [0; RAM_SIZE];
        self.framebuffer = [0; FRAMEBUFFER_SIZE];
        self.v_reg = [0; NUM_REGS];
        self.i_reg = 0;
        self.stack_pointer = 0;
        self.stack = [0; STACK_SIZE];
        self.keys = [0; NUM_KEYS];
        self.delay_timer = 0;
        self.sound_timer = 0;
        self.opcode = 0;
        self.state = RunState::Running;
        self.ram[..FONTSET_SIZE].copy_from_slice(&FONTSET);
    }

    /// Copy a program image into memory at the program counter.
    ///
    /// Nothing is copied when the image does not fit.
    pub fn load(&mut self, rom: &[u8]) -> Result<(), VmError> {
        let start = self.pc as usize;
        let capacity = RAM_SIZE.saturating_sub(start);
        if rom.len() > capacity {
            return Err(VmError::LoadOverflow {
                len: rom.len(),
                capacity,
            });
        }
        self.ram[start..start + rom.len()].copy_from_slice(rom);
        log::info!("Loaded {} byte program at {:#06X}", rom.len(), start);
        Ok(())
    }

    /// Read a ROM file and [`load`](Self::load) it.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        log::info!("Loading ROM from '{}'", path.display());
        let rom = std::fs::read(path)
            .with_context(|| format!("failed to read ROM '{}'", path.display()))?;
        self.load(&rom)
            .with_context(|| format!("failed to load ROM '{}'", path.display()))
    }

    /// Execute exactly one instruction.
    ///
    /// On `Err` the machine state is unchanged.
    pub fn advance(&mut self) -> Result<Cycle, VmError> {
        let pc = self.pc;
        let addr = pc as usize;
        if addr + 1 >= RAM_SIZE {
            return Err(VmError::AddressOutOfBounds { pc });
        }

        let opcode = Opcode::from_bytes(self.ram[addr], self.ram[addr + 1]);
        let instruction = Instruction::decode(opcode.0);
        log::trace!("{pc:#06X}: {opcode} {instruction}");

        let step = self.execute(instruction)?;
        self.opcode = opcode.0;
        self.finish(step);

        let cycle = match (step, instruction) {
            (Step::Wait, _) => Cycle::AwaitingKey,
            (
                _,
                Instruction::Unknown(_)
                | Instruction::Alu {
                    op: AluOp::Unknown(_),
                    ..
                },
            ) => {
                log::warn!("Unimplemented opcode {opcode} at {pc:#06X}");
                Cycle::Unimplemented(opcode.0)
            }
            _ => Cycle::Executed(instruction),
        };
        Ok(cycle)
    }

    /// Advance up to `cycles` times, stopping at the first error.
    pub fn run_cycles(&mut self, cycles: u32) -> Result<(), VmError> {
        for _ in 0..cycles {
            self.advance()?;
        }
        Ok(())
    }

    fn finish(&mut self, step: Step) {
        match step {
            Step::Next => {
                self.tick_timers();
                self.increment_pc();
            }
            Step::Skip => {
                self.increment_pc();
                self.tick_timers();
                self.increment_pc();
            }
            Step::Jump(target) => {
                self.pc = target;
                self.tick_timers();
            }
            Step::Wait => {}
        }
    }

    #[inline]
    fn increment_pc(&mut self) {
        self.pc = self.pc.wrapping_add(INSTRUCTION_SIZE);
    }

    fn tick_timers(&mut self) {
        self.delay_timer = self.delay_timer.saturating_sub(1);
        // Sound output is left to the frontend; only the countdown is modelled.
        self.sound_timer = self.sound_timer.saturating_sub(1);
    }

    fn push(&mut self, val: u16) -> Result<(), VmError> {
        if self.config.checked_stack && self.stack_pointer as usize >= STACK_SIZE {
            return Err(VmError::StackOverflow { pc: self.pc });
        }
        self.stack[self.stack_pointer as usize % STACK_SIZE] = val;
        self.stack_pointer = self.stack_pointer.wrapping_add(1);
        Ok(())
    }

    fn pop(&mut self) -> Result<u16, VmError> {
        if self.config.checked_stack && self.stack_pointer == 0 {
            return Err(VmError::StackUnderflow { pc: self.pc });
        }
        self.stack_pointer = self.stack_pointer.wrapping_sub(1);
        Ok(self.stack[self.stack_pointer as usize % STACK_SIZE])
    }

    /// Address `offset` bytes past the index register, wrapped into memory.
    #[inline]
    fn index_addr(&self, offset: usize) -> usize {
        (self.i_reg as usize + offset) % RAM_SIZE
    }

    #[inline]
    fn is_key_pressed(&self, key: u8) -> bool {
        self.keys.get(key as usize).is_some_and(|k| *k != 0)
    }

    pub fn set_key(&mut self, idx: usize, pressed: bool) {
        match self.keys.get_mut(idx) {
            Some(key) => *key = pressed as u8,
            None => log::warn!("Ignoring invalid key index: {idx}"),
        }
    }

    pub fn keys(&self) -> &[u8; NUM_KEYS] {
        &self.keys
    }

    pub fn config(&self) -> &VmConfig {
        &self.config
    }

    pub fn framebuffer(&self) -> &[u8; FRAMEBUFFER_SIZE] {
        &self.framebuffer
    }

    /// Pixel at `(x, y)`; coordinates wrap like sprite drawing does.
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        self.framebuffer[(y % SCREEN_HEIGHT) * SCREEN_WIDTH + x % SCREEN_WIDTH] != 0
    }

    pub fn memory(&self) -> &[u8; RAM_SIZE] {
        &self.ram
    }

    /// Copy `bytes` into memory at `addr`, wrapping at the end of memory.
    pub fn write_memory(&mut self, addr: u16, bytes: &[u8]) {
        for (offset, byte) in bytes.iter().enumerate() {
            self.ram[(addr as usize + offset) % RAM_SIZE] = *byte;
        }
    }

    pub fn registers(&self) -> &[u8; NUM_REGS] {
        &self.v_reg
    }

    pub fn register(&self, x: usize) -> u8 {
        self.v_reg[x & 0xF]
    }

    pub fn set_register(&mut self, x: usize, value: u8) {
        self.v_reg[x & 0xF] = value;
    }

    pub fn index(&self) -> u16 {
        self.i_reg
    }

    pub fn set_index(&mut self, value: u16) {
        self.i_reg = value;
    }

    pub fn program_counter(&self) -> u16 {
        self.pc
    }

    pub fn set_program_counter(&mut self, value: u16) {
        self.pc = value;
    }

    pub fn stack(&self) -> &[u16; STACK_SIZE] {
        &self.stack
    }

    pub fn stack_pointer(&self) -> u8 {
        self.stack_pointer
    }

    pub fn delay_timer(&self) -> u8 {
        self.delay_timer
    }

    pub fn sound_timer(&self) -> u8 {
        self.sound_timer
    }

    /// True while the sound timer is counting down.
    pub fn is_sound_active(&self) -> bool {
        self.sound_timer > 0
    }

    pub fn current_opcode(&self) -> u16 {
        self.opcode
    }

    pub fn state(&self) -> RunState {
        self.state
    }
}
