pub mod app;
pub mod key;

pub use app::App;
pub use key::Key;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::new_rgb(0, 0, 0);
    pub const WHITE: Color = Color::new_rgb(255, 255, 255);

    #[inline]
    pub const fn new_rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 0xff }
    }

    /// Write this colour as three RGB24 bytes at `offset`.
    #[inline]
    pub fn write_rgb24(&self, buffer: &mut [u8], offset: usize) {
        buffer[offset] = self.r;
        buffer[offset + 1] = self.g;
        buffer[offset + 2] = self.b;
    }
}
