use hsl::HSL;

/// 8-bit RGBA, what renderers get as a cell's background
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Self = Self::from_rgba(0, 0, 0, 0);

    #[inline(always)]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[inline(always)]
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// `#rrggbbaa`
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

pub trait ToColor {
    fn to_color(self) -> Color;
}

impl ToColor for HSL {
    fn to_color(self) -> Color {
        let (r, g, b) = self.to_rgb();
        Color::from_rgb(r, g, b)
    }
}

lazy_static! {
    pub static ref GRASS_COLOR: Color = HSL { h: 120., s: 0.47, l: 0.5 }.to_color();
    pub static ref DIRT_COLOR: Color = Color::from_rgb(0xba, 0x80, 0x51);
    pub static ref APPLE_BLINK_COLOR: Color = HSL { h: 0., s: 1., l: 0.5 }.to_color().with_alpha(0x70);
}
