use crate::cpu::Interpreter;
use crate::{VmConfig, SCREEN_HEIGHT, SCREEN_SCALE, SCREEN_WIDTH};
use ferrochip_common::{App, Color, Key};

/// Drives an [`Interpreter`] from a frontend's frame loop.
#[derive(Debug, Default)]
pub struct EmulatorApp {
    should_exit: bool,
    pub emulator: Interpreter,
}

impl EmulatorApp {
    pub fn new(config: VmConfig) -> Self {
        Self {
            should_exit: false,
            emulator: Interpreter::with_config(config),
        }
    }

    /// Write the framebuffer into an RGB24 buffer.
    pub fn render(&self, screen: &mut [u8]) {
        for (i, pixel) in self.emulator.framebuffer().iter().enumerate() {
            let color = if *pixel != 0 { Color::WHITE } else { Color::BLACK };
            color.write_rgb24(screen, i * 3);
        }
    }
}

impl App for EmulatorApp {
    fn init(&mut self) {
        log::info!("Chip8 init");
    }

    fn update(&mut self, screen: &mut [u8]) {
        for _ in 0..self.emulator.config().cycles_per_frame {
            if let Err(err) = self.emulator.advance() {
                log::error!("Cycle aborted: {err}");
                self.emulator.debug_dump();
                break;
            }
        }
        self.render(screen);
    }

    fn handle_key_event(&mut self, key: Key, is_down: bool) {
        if key == Key::Escape {
            self.should_exit = true;
            return;
        }
        if let Some(idx) = key.to_keypad() {
            self.emulator.set_key(idx, is_down);
        }
    }

    fn should_exit(&self) -> bool {
        self.should_exit
    }

    fn exit(&mut self) {
        log::info!("Chip8 exit");
    }

    fn width(&self) -> u32 {
        SCREEN_WIDTH as u32
    }

    fn height(&self) -> u32 {
        SCREEN_HEIGHT as u32
    }

    fn scale(&self) -> u32 {
        SCREEN_SCALE
    }

    fn title(&self) -> String {
        "ferrochip".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with(program: &[u8], cycles_per_frame: u32) -> EmulatorApp {
        let config = VmConfig::builder().cycles_per_frame(cycles_per_frame).build();
        let mut app = EmulatorApp::new(config);
        app.emulator.load(program).unwrap();
        app
    }

    #[test]
    fn update_runs_configured_cycles_and_renders() {
        // LD I, 0 ; DRW V0, V0, 5 ; JP 0x204
        let mut app = app_with(&[0xA0, 0x00, 0xD0, 0x05, 0x12, 0x04], 2);
        let mut screen = vec![0u8; SCREEN_WIDTH * SCREEN_HEIGHT * 3];
        app.update(&mut screen);
        assert_eq!(app.emulator.program_counter(), 0x204);
        // Top-left pixel of the "0" glyph is lit, the fifth is not.
        assert_eq!(&screen[..3], &[255, 255, 255]);
        assert_eq!(&screen[4 * 3..5 * 3], &[0, 0, 0]);
    }

    #[test]
    fn update_stops_on_error() {
        let mut app = app_with(&[], 3);
        app.emulator.set_program_counter(0x0FFF);
        let mut screen = vec![0u8; SCREEN_WIDTH * SCREEN_HEIGHT * 3];
        app.update(&mut screen);
        assert_eq!(app.emulator.program_counter(), 0x0FFF);
    }

    #[test]
    fn keys_reach_the_keypad() {
        let mut app = EmulatorApp::default();
        app.handle_key_event(Key::V, true);
        assert_eq!(app.emulator.keys()[0xF], 1);
        app.handle_key_event(Key::V, false);
        assert_eq!(app.emulator.keys()[0xF], 0);
        assert!(!app.should_exit());
        app.handle_key_event(Key::Escape, true);
        assert!(app.should_exit());
    }
}
