use std::fmt;

/// A raw 16-bit instruction word, big-endian in memory.
///
/// The operand fields are fixed by position, so they are available for every
/// word regardless of which family it belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Opcode(pub u16);

impl Opcode {
    #[inline]
    pub fn from_bytes(hi: u8, lo: u8) -> Self {
        Opcode(u16::from_be_bytes([hi, lo]))
    }

    /// Top nibble: the instruction family selector.
    #[inline]
    pub fn family(self) -> u8 {
        ((self.0 & 0xF000) >> 12) as u8
    }

    #[inline]
    pub fn x(self) -> usize {
        ((self.0 & 0x0F00) >> 8) as usize
    }

    #[inline]
    pub fn y(self) -> usize {
        ((self.0 & 0x00F0) >> 4) as usize
    }

    #[inline]
    pub fn n(self) -> u8 {
        (self.0 & 0x000F) as u8
    }

    #[inline]
    pub fn kk(self) -> u8 {
        (self.0 & 0x00FF) as u8
    }

    #[inline]
    pub fn nnn(self) -> u16 {
        self.0 & 0x0FFF
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04X}", self.0)
    }
}

/// Sub-operation of the `8xyN` register/register family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    Ld,
    Or,
    And,
    Xor,
    Add,
    Sub,
    Shr,
    Subn,
    Shl,
    /// Selector with no defined behaviour; executes as a no-op.
    Unknown(u8),
}

impl AluOp {
    fn decode(selector: u8) -> Self {
        match selector {
            0x0 => AluOp::Ld,
            0x1 => AluOp::Or,
            0x2 => AluOp::And,
            0x3 => AluOp::Xor,
            0x4 => AluOp::Add,
            0x5 => AluOp::Sub,
            0x6 => AluOp::Shr,
            0x7 => AluOp::Subn,
            0xE => AluOp::Shl,
            other => AluOp::Unknown(other),
        }
    }

    fn mnemonic(self) -> &'static str {
        match self {
            AluOp::Ld => "LD",
            AluOp::Or => "OR",
            AluOp::And => "AND",
            AluOp::Xor => "XOR",
            AluOp::Add => "ADD",
            AluOp::Sub => "SUB",
            AluOp::Shr => "SHR",
            AluOp::Subn => "SUBN",
            AluOp::Shl => "SHL",
            AluOp::Unknown(_) => "ALU?",
        }
    }
}

/// A decoded instruction.
///
/// Register operands are stored as indices (`0x0..=0xF`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// 00E0
    Cls,
    /// 00EE
    Ret,
    /// 1nnn
    Jp(u16),
    /// 2nnn
    Call(u16),
    /// 3xkk
    SeImm { x: usize, kk: u8 },
    /// 4xkk
    SneImm { x: usize, kk: u8 },
    /// 5xy0
    SeReg { x: usize, y: usize },
    /// 6xkk
    LdImm { x: usize, kk: u8 },
    /// 7xkk
    AddImm { x: usize, kk: u8 },
    /// 8xyN
    Alu { op: AluOp, x: usize, y: usize },
    /// 9xy0
    SneReg { x: usize, y: usize },
    /// Annn
    LdIndex(u16),
    /// Bnnn
    JpV0(u16),
    /// Cxkk
    Rnd { x: usize, kk: u8 },
    /// Dxyn
    Drw { x: usize, y: usize, n: u8 },
    /// Ex9E
    Skp { x: usize },
    /// ExA1
    Sknp { x: usize },
    /// Fx07
    LdFromDelay { x: usize },
    /// Fx0A
    WaitKey { x: usize },
    /// Fx15
    LdDelay { x: usize },
    /// Fx18
    LdSound { x: usize },
    /// Fx1E
    AddIndex { x: usize },
    /// Fx29
    LdFont { x: usize },
    /// Fx33
    Bcd { x: usize },
    /// Fx55
    StoreRegs { x: usize },
    /// Fx65
    LoadRegs { x: usize },
    /// Any word outside the base instruction table.
    Unknown(u16),
}

impl Instruction {
    /// Decode an instruction word. Decoding is total: words outside the
    /// instruction table come back as [`Instruction::Unknown`].
    pub fn decode(word: u16) -> Self {
        let op = Opcode(word);
        let (x, y) = (op.x(), op.y());
        match op.family() {
            0x0 => match word {
                0x00E0 => Instruction::Cls,
                0x00EE => Instruction::Ret,
                _ => Instruction::Unknown(word),
            },
            0x1 => Instruction::Jp(op.nnn()),
            0x2 => Instruction::Call(op.nnn()),
            0x3 => Instruction::SeImm { x, kk: op.kk() },
            0x4 => Instruction::SneImm { x, kk: op.kk() },
            // The low nibble of 5xy0 / 9xy0 is not checked.
            0x5 => Instruction::SeReg { x, y },
            0x6 => Instruction::LdImm { x, kk: op.kk() },
            0x7 => Instruction::AddImm { x, kk: op.kk() },
            0x8 => Instruction::Alu {
                op: AluOp::decode(op.n()),
                x,
                y,
            },
            0x9 => Instruction::SneReg { x, y },
            0xA => Instruction::LdIndex(op.nnn()),
            0xB => Instruction::JpV0(op.nnn()),
            0xC => Instruction::Rnd { x, kk: op.kk() },
            0xD => Instruction::Drw { x, y, n: op.n() },
            0xE => match op.kk() {
                0x9E => Instruction::Skp { x },
                0xA1 => Instruction::Sknp { x },
                _ => Instruction::Unknown(word),
            },
            0xF => match op.kk() {
                0x07 => Instruction::LdFromDelay { x },
                0x0A => Instruction::WaitKey { x },
                0x15 => Instruction::LdDelay { x },
                0x18 => Instruction::LdSound { x },
                0x1E => Instruction::AddIndex { x },
                0x29 => Instruction::LdFont { x },
                0x33 => Instruction::Bcd { x },
                0x55 => Instruction::StoreRegs { x },
                0x65 => Instruction::LoadRegs { x },
                _ => Instruction::Unknown(word),
            },
            _ => Instruction::Unknown(word),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Instruction::Cls => write!(f, "CLS"),
            Instruction::Ret => write!(f, "RET"),
            Instruction::Jp(nnn) => write!(f, "JP {nnn:#05X}"),
            Instruction::Call(nnn) => write!(f, "CALL {nnn:#05X}"),
            Instruction::SeImm { x, kk } => write!(f, "SE V{x:X}, {kk:#04X}"),
            Instruction::SneImm { x, kk } => write!(f, "SNE V{x:X}, {kk:#04X}"),
            Instruction::SeReg { x, y } => write!(f, "SE V{x:X}, V{y:X}"),
            Instruction::LdImm { x, kk } => write!(f, "LD V{x:X}, {kk:#04X}"),
            Instruction::AddImm { x, kk } => write!(f, "ADD V{x:X}, {kk:#04X}"),
            Instruction::Alu { op, x, y } => match op {
                AluOp::Shr | AluOp::Shl => write!(f, "{} V{x:X}", op.mnemonic()),
                AluOp::Unknown(sel) => write!(f, "ALU? V{x:X}, V{y:X} ({sel:X})"),
                _ => write!(f, "{} V{x:X}, V{y:X}", op.mnemonic()),
            },
            Instruction::SneReg { x, y } => write!(f, "SNE V{x:X}, V{y:X}"),
            Instruction::LdIndex(nnn) => write!(f, "LD I, {nnn:#05X}"),
            Instruction::JpV0(nnn) => write!(f, "JP V0, {nnn:#05X}"),
            Instruction::Rnd { x, kk } => write!(f, "RND V{x:X}, {kk:#04X}"),
            Instruction::Drw { x, y, n } => write!(f, "DRW V{x:X}, V{y:X}, {n}"),
            Instruction::Skp { x } => write!(f, "SKP V{x:X}"),
            Instruction::Sknp { x } => write!(f, "SKNP V{x:X}"),
            Instruction::LdFromDelay { x } => write!(f, "LD V{x:X}, DT"),
            Instruction::WaitKey { x } => write!(f, "LD V{x:X}, K"),
            Instruction::LdDelay { x } => write!(f, "LD DT, V{x:X}"),
            Instruction::LdSound { x } => write!(f, "LD ST, V{x:X}"),
            Instruction::AddIndex { x } => write!(f, "ADD I, V{x:X}"),
            Instruction::LdFont { x } => write!(f, "LD F, V{x:X}"),
            Instruction::Bcd { x } => write!(f, "LD B, V{x:X}"),
            Instruction::StoreRegs { x } => write!(f, "LD [I], V{x:X}"),
            Instruction::LoadRegs { x } => write!(f, "LD V{x:X}, [I]"),
            Instruction::Unknown(word) => write!(f, "??? {word:04X}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_come_from_fixed_positions() {
        let op = Opcode::from_bytes(0xD1, 0x2F);
        assert_eq!(op.0, 0xD12F);
        assert_eq!(op.family(), 0xD);
        assert_eq!(op.x(), 0x1);
        assert_eq!(op.y(), 0x2);
        assert_eq!(op.n(), 0xF);
        assert_eq!(op.kk(), 0x2F);
        assert_eq!(op.nnn(), 0x12F);
    }

    #[test]
    fn decodes_every_family() {
        assert_eq!(Instruction::decode(0x00E0), Instruction::Cls);
        assert_eq!(Instruction::decode(0x00EE), Instruction::Ret);
        assert_eq!(Instruction::decode(0x1ABC), Instruction::Jp(0xABC));
        assert_eq!(Instruction::decode(0x2300), Instruction::Call(0x300));
        assert_eq!(
            Instruction::decode(0x3A42),
            Instruction::SeImm { x: 0xA, kk: 0x42 }
        );
        assert_eq!(
            Instruction::decode(0x8AB4),
            Instruction::Alu {
                op: AluOp::Add,
                x: 0xA,
                y: 0xB
            }
        );
        assert_eq!(
            Instruction::decode(0xD015),
            Instruction::Drw { x: 0, y: 1, n: 5 }
        );
        assert_eq!(Instruction::decode(0x5121), Instruction::SeReg { x: 1, y: 2 });
        assert_eq!(Instruction::decode(0xE39E), Instruction::Skp { x: 3 });
        assert_eq!(Instruction::decode(0xE3A1), Instruction::Sknp { x: 3 });
        assert_eq!(Instruction::decode(0xF50A), Instruction::WaitKey { x: 5 });
        assert_eq!(Instruction::decode(0xF265), Instruction::LoadRegs { x: 2 });
    }

    #[test]
    fn words_outside_the_table_are_unknown() {
        for word in [0x0000, 0x0123, 0x00FF, 0xE100, 0xF0FF] {
            assert_eq!(Instruction::decode(word), Instruction::Unknown(word));
        }
        assert_eq!(
            Instruction::decode(0x812F),
            Instruction::Alu {
                op: AluOp::Unknown(0xF),
                x: 1,
                y: 2
            }
        );
    }

    #[test]
    fn mnemonics() {
        assert_eq!(Instruction::decode(0x6A2A).to_string(), "LD VA, 0x2A");
        assert_eq!(Instruction::decode(0xD125).to_string(), "DRW V1, V2, 5");
        assert_eq!(Instruction::decode(0x8016).to_string(), "SHR V0");
        assert_eq!(Instruction::decode(0xA2F0).to_string(), "LD I, 0x2F0");
        assert_eq!(Instruction::decode(0x0123).to_string(), "??? 0123");
    }
}
