use crate::cpu::{Interpreter, Step};
use crate::{FLAG_REG, SCREEN_HEIGHT, SCREEN_WIDTH};

impl Interpreter {
    /// Dxyn - XOR an 8-pixel-wide, `n`-row sprite from `memory[I..]` onto
    /// the screen at (Vx, Vy).
    ///
    /// Both axes wrap. VF ends as 1 iff a set sprite bit turned off a lit
    /// pixel; clear sprite bits never touch the screen or the flag.
    /// VF is cleared before the coordinates are read, so a VF operand
    /// draws at 0 on that axis.
    pub(super) fn exec_drw(&mut self, x: usize, y: usize, n: u8) -> Step {
        self.v_reg[FLAG_REG] = 0;
        let x_coord = self.v_reg[x] as usize;
        let y_coord = self.v_reg[y] as usize;

        for row in 0..n as usize {
            let pixels = self.ram[self.index_addr(row)];
            for col in 0..8 {
                if pixels & (0x80 >> col) == 0 {
                    continue;
                }
                let px = (x_coord + col) % SCREEN_WIDTH;
                let py = (y_coord + row) % SCREEN_HEIGHT;
                let cell = &mut self.framebuffer[py * SCREEN_WIDTH + px];
                *cell ^= 1;
                if *cell == 0 {
                    self.v_reg[FLAG_REG] = 1;
                }
            }
        }
        Step::Next
    }
}
