/// Physical keys a frontend can report, independent of the windowing library.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Key {
    Num1,
    Num2,
    Num3,
    Num4,
    Q,
    W,
    E,
    R,
    A,
    S,
    D,
    F,
    Z,
    X,
    C,
    V,
    Escape,
    None,
}

impl Key {
    /// Map a key onto the 16-key hexadecimal keypad using the conventional
    /// layout:
    ///
    /// ```text
    /// 1 2 3 4        1 2 3 C
    /// Q W E R   ->   4 5 6 D
    /// A S D F        7 8 9 E
    /// Z X C V        A 0 B F
    /// ```
    pub fn to_keypad(self) -> Option<usize> {
        match self {
            Key::Num1 => Some(0x1),
            Key::Num2 => Some(0x2),
            Key::Num3 => Some(0x3),
            Key::Num4 => Some(0xC),
            Key::Q => Some(0x4),
            Key::W => Some(0x5),
            Key::E => Some(0x6),
            Key::R => Some(0xD),
            Key::A => Some(0x7),
            Key::S => Some(0x8),
            Key::D => Some(0x9),
            Key::F => Some(0xE),
            Key::Z => Some(0xA),
            Key::X => Some(0x0),
            Key::C => Some(0xB),
            Key::V => Some(0xF),
            Key::Escape | Key::None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Key;

    #[test]
    fn keypad_layout_covers_every_hex_key_once() {
        let keys = [
            Key::Num1,
            Key::Num2,
            Key::Num3,
            Key::Num4,
            Key::Q,
            Key::W,
            Key::E,
            Key::R,
            Key::A,
            Key::S,
            Key::D,
            Key::F,
            Key::Z,
            Key::X,
            Key::C,
            Key::V,
        ];
        let mut seen = [false; 16];
        for key in keys {
            let idx = key.to_keypad().unwrap();
            assert!(!seen[idx], "{key:?} maps onto an already used keypad slot");
            seen[idx] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn non_keypad_keys_map_to_nothing() {
        assert_eq!(Key::Escape.to_keypad(), None);
        assert_eq!(Key::None.to_keypad(), None);
        assert_eq!(Key::X.to_keypad(), Some(0x0));
        assert_eq!(Key::V.to_keypad(), Some(0xF));
    }
}
