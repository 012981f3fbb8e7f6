pub mod app;
pub mod config;
pub mod cpu;
pub mod error;
pub mod instruction;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use app::EmulatorApp;
pub use config::VmConfig;
pub use cpu::{Cycle, Interpreter, RunState};
pub use error::VmError;
pub use instruction::{Instruction, Opcode};

/// Logical screen width in pixels.
pub const SCREEN_WIDTH: usize = 64;
/// Logical screen height in pixels.
pub const SCREEN_HEIGHT: usize = 32;
/// Default integer scaling factor for the SDL2 frontend.
pub const SCREEN_SCALE: u32 = 15;

pub const RAM_SIZE: usize = 4096;
pub const NUM_REGS: usize = 16;
pub const NUM_KEYS: usize = 16;
pub const STACK_SIZE: usize = 16;
/// Programs are loaded here and execution starts here.
pub const START_ADDRESS: u16 = 0x200;
/// Every instruction is two bytes wide.
pub const INSTRUCTION_SIZE: u16 = 2;
/// Index of the carry / borrow / collision flag register.
pub const FLAG_REG: usize = 0xF;

/// Bytes per font glyph.
pub const FONT_GLYPH_SIZE: usize = 5;
pub const FONTSET_SIZE: usize = 16 * FONT_GLYPH_SIZE;

pub const FONTSET: [u8; FONTSET_SIZE] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
