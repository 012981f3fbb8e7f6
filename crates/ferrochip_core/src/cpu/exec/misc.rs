use crate::cpu::{Interpreter, RunState, Step};
use crate::{FONT_GLYPH_SIZE, NUM_KEYS};

impl Interpreter {
    pub(super) fn exec_ld_from_delay(&mut self, x: usize) -> Step {
        self.v_reg[x] = self.delay_timer;
        Step::Next
    }

    /// Fx0A - lowest pressed key goes into Vx. With nothing pressed the
    /// instruction parks the machine and is fetched again next cycle.
    pub(super) fn exec_wait_key(&mut self, x: usize) -> Step {
        match (0..NUM_KEYS as u8).find(|key| self.is_key_pressed(*key)) {
            Some(key) => {
                self.v_reg[x] = key;
                self.state = RunState::Running;
                Step::Next
            }
            None => {
                self.state = RunState::AwaitingKey { register: x };
                Step::Wait
            }
        }
    }

    pub(super) fn exec_ld_delay(&mut self, x: usize) -> Step {
        self.delay_timer = self.v_reg[x];
        Step::Next
    }

    pub(super) fn exec_ld_sound(&mut self, x: usize) -> Step {
        self.sound_timer = self.v_reg[x];
        Step::Next
    }

    /// Fx1E - no flag is set on overflow.
    pub(super) fn exec_add_index(&mut self, x: usize) -> Step {
        self.i_reg = self.i_reg.wrapping_add(self.v_reg[x] as u16);
        Step::Next
    }

    /// Fx29 - glyphs sit at the start of memory, 5 bytes each. Values past
    /// `F` leave I untouched.
    pub(super) fn exec_ld_font(&mut self, x: usize) -> Step {
        let digit = self.v_reg[x];
        if digit < 16 {
            self.i_reg = digit as u16 * FONT_GLYPH_SIZE as u16;
        }
        Step::Next
    }

    pub(super) fn exec_bcd(&mut self, x: usize) -> Step {
        let val = self.v_reg[x];
        let digits = [val / 100, (val / 10) % 10, val % 10];
        for (offset, digit) in digits.into_iter().enumerate() {
            let addr = self.index_addr(offset);
            self.ram[addr] = digit;
        }
        Step::Next
    }

    /// Fx55 - V0..=Vx into memory at I. I itself is not changed.
    pub(super) fn exec_store_regs(&mut self, x: usize) -> Step {
        for offset in 0..=x {
            let addr = self.index_addr(offset);
            self.ram[addr] = self.v_reg[offset];
        }
        Step::Next
    }

    /// Fx65 - memory at I into V0..=Vx.
    pub(super) fn exec_load_regs(&mut self, x: usize) -> Step {
        for offset in 0..=x {
            self.v_reg[offset] = self.ram[self.index_addr(offset)];
        }
        Step::Next
    }
}
