use crate::cpu::{Interpreter, Step};
use crate::instruction::AluOp;
use crate::FLAG_REG;

impl Interpreter {
    pub(super) fn exec_ld_imm(&mut self, x: usize, kk: u8) -> Step {
        self.v_reg[x] = kk;
        Step::Next
    }

    /// 7xkk wraps and leaves VF alone.
    pub(super) fn exec_add_imm(&mut self, x: usize, kk: u8) -> Step {
        self.v_reg[x] = self.v_reg[x].wrapping_add(kk);
        Step::Next
    }

    pub(super) fn exec_ld_index(&mut self, nnn: u16) -> Step {
        self.i_reg = nnn;
        Step::Next
    }

    pub(super) fn exec_rnd(&mut self, x: usize, kk: u8) -> Step {
        let byte = self.rng.next_u32() as u8;
        self.v_reg[x] = byte & kk;
        Step::Next
    }

    /// 8xyN. The flag is written before the result, and every op except ADD
    /// reads its operands after that write, so aliasing VF sees the new flag.
    pub(super) fn exec_alu(&mut self, op: AluOp, x: usize, y: usize) -> Step {
        match op {
            AluOp::Ld => self.v_reg[x] = self.v_reg[y],
            AluOp::Or => self.v_reg[x] |= self.v_reg[y],
            AluOp::And => self.v_reg[x] &= self.v_reg[y],
            AluOp::Xor => self.v_reg[x] ^= self.v_reg[y],
            AluOp::Add => {
                let (val, carry) = self.v_reg[x].overflowing_add(self.v_reg[y]);
                self.v_reg[FLAG_REG] = carry as u8;
                self.v_reg[x] = val;
            }
            // Not-borrow: equal operands give VF = 0.
            AluOp::Sub => {
                self.v_reg[FLAG_REG] = (self.v_reg[x] > self.v_reg[y]) as u8;
                self.v_reg[x] = self.v_reg[x].wrapping_sub(self.v_reg[y]);
            }
            AluOp::Shr => {
                self.v_reg[FLAG_REG] = self.v_reg[x] & 0x1;
                self.v_reg[x] >>= 1;
            }
            AluOp::Subn => {
                self.v_reg[FLAG_REG] = (self.v_reg[y] > self.v_reg[x]) as u8;
                self.v_reg[x] = self.v_reg[y].wrapping_sub(self.v_reg[x]);
            }
            AluOp::Shl => {
                self.v_reg[FLAG_REG] = (self.v_reg[x] & 0x80) >> 7;
                self.v_reg[x] <<= 1;
            }
            AluOp::Unknown(_) => {}
        }
        Step::Next
    }
}
