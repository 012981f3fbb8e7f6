mod alu;
mod control;
mod draw;
mod misc;

use super::{Interpreter, Step};
use crate::error::VmError;
use crate::instruction::Instruction;

impl Interpreter {
    /// Perform the effect of one decoded instruction and report how the
    /// cycle should be finished.
    ///
    /// Returns `Err` only for checked stack violations, before anything has
    /// been written.
    pub(super) fn execute(&mut self, instruction: Instruction) -> Result<Step, VmError> {
        let step = match instruction {
            // 00E0 - CLS
            Instruction::Cls => self.exec_cls(),
            // 00EE - RET
            Instruction::Ret => self.exec_ret()?,
            // 1nnn - JP addr
            Instruction::Jp(nnn) => Step::Jump(nnn),
            // 2nnn - CALL addr
            Instruction::Call(nnn) => self.exec_call(nnn)?,
            // 3xkk / 4xkk / 5xy0 / 9xy0 - SE, SNE
            Instruction::SeImm { x, kk } => Self::skip_if(self.v_reg[x] == kk),
            Instruction::SneImm { x, kk } => Self::skip_if(self.v_reg[x] != kk),
            Instruction::SeReg { x, y } => Self::skip_if(self.v_reg[x] == self.v_reg[y]),
            Instruction::SneReg { x, y } => Self::skip_if(self.v_reg[x] != self.v_reg[y]),
            // 6xkk, 7xkk, Annn, Cxkk
            Instruction::LdImm { x, kk } => self.exec_ld_imm(x, kk),
            Instruction::AddImm { x, kk } => self.exec_add_imm(x, kk),
            Instruction::LdIndex(nnn) => self.exec_ld_index(nnn),
            Instruction::Rnd { x, kk } => self.exec_rnd(x, kk),
            // 8xyN
            Instruction::Alu { op, x, y } => self.exec_alu(op, x, y),
            // Bnnn - JP V0, addr
            Instruction::JpV0(nnn) => self.exec_jp_v0(nnn),
            // Dxyn - DRW
            Instruction::Drw { x, y, n } => self.exec_drw(x, y, n),
            // Ex9E / ExA1 - SKP, SKNP
            Instruction::Skp { x } => Self::skip_if(self.is_key_pressed(self.v_reg[x])),
            Instruction::Sknp { x } => Self::skip_if(!self.is_key_pressed(self.v_reg[x])),
            // Fx07 .. Fx65
            Instruction::LdFromDelay { x } => self.exec_ld_from_delay(x),
            Instruction::WaitKey { x } => self.exec_wait_key(x),
            Instruction::LdDelay { x } => self.exec_ld_delay(x),
            Instruction::LdSound { x } => self.exec_ld_sound(x),
            Instruction::AddIndex { x } => self.exec_add_index(x),
            Instruction::LdFont { x } => self.exec_ld_font(x),
            Instruction::Bcd { x } => self.exec_bcd(x),
            Instruction::StoreRegs { x } => self.exec_store_regs(x),
            Instruction::LoadRegs { x } => self.exec_load_regs(x),
            // Reported by the caller; finishes like any other instruction.
            Instruction::Unknown(_) => Step::Next,
        };
        Ok(step)
    }
}
