use crate::cpu::{Interpreter, Step, FRAMEBUFFER_SIZE};
use crate::error::VmError;

impl Interpreter {
    pub(super) fn exec_cls(&mut self) -> Step {
        self.framebuffer = [0; FRAMEBUFFER_SIZE];
        Step::Next
    }

    /// Pop the caller's address. The standard advance then moves past the
    /// `CALL` that pushed it.
    pub(super) fn exec_ret(&mut self) -> Result<Step, VmError> {
        self.pc = self.pop()?;
        Ok(Step::Next)
    }

    /// Push the address of the `CALL` itself and jump.
    pub(super) fn exec_call(&mut self, nnn: u16) -> Result<Step, VmError> {
        self.push(self.pc)?;
        Ok(Step::Jump(nnn))
    }

    pub(super) fn exec_jp_v0(&mut self, nnn: u16) -> Step {
        Step::Jump(nnn + self.v_reg[0] as u16)
    }

    #[inline]
    pub(super) fn skip_if(condition: bool) -> Step {
        if condition {
            Step::Skip
        } else {
            Step::Next
        }
    }
}
