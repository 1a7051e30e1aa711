//! Core Types für Farbwerte
//!
//! Der Farbtyp `RgbColor` und seine Konvertierungen, ohne Hardware-Dependencies

use core::fmt;
use core::str::FromStr;

use rgb::RGB8;

/// Maximaler Wert eines Farbkanals
pub const CHANNEL_MAX: u8 = u8::MAX;

/// Fehler-Typ für Farb-Operationen
///
/// Die Farb-Arithmetik selbst ist total und liefert nie einen Fehler.
/// Nur die prüfenden Varianten (`try_darken`, Hex-Parsing) geben ihn zurück.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColourError {
    /// Prozentwert außerhalb von [0, 100] (oder NaN)
    PercentOutOfRange,
    /// Kein gültiger `#RRGGBB` / `RRGGBB` String
    InvalidHex,
}

impl fmt::Display for ColourError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColourError::PercentOutOfRange => f.write_str("percent must lie within 0..=100"),
            ColourError::InvalidHex => f.write_str("expected a colour in #RRGGBB form"),
        }
    }
}

/// 8-Bit RGB Farbwert
///
/// Alle drei Kanäle liegen immer in [0, 255]. Keine Operation läuft über:
/// Über- und Unterlauf werden gesättigt, nie umgebrochen.
///
/// # Beispiele
///
/// ```
/// # use colour_core::RgbColor;
/// let orange = RgbColor::from_hex(0xFF8000);
/// assert_eq!((orange.red(), orange.green(), orange.blue()), (255, 128, 0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RgbColor {
    red: u8,
    green: u8,
    blue: u8,
}

impl RgbColor {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(CHANNEL_MAX, CHANNEL_MAX, CHANNEL_MAX);
    pub const RED: Self = Self::new(CHANNEL_MAX, 0, 0);
    pub const GREEN: Self = Self::new(0, CHANNEL_MAX, 0);
    pub const BLUE: Self = Self::new(0, 0, CHANNEL_MAX);
    pub const YELLOW: Self = Self::new(CHANNEL_MAX, CHANNEL_MAX, 0);
    pub const CYAN: Self = Self::new(0, CHANNEL_MAX, CHANNEL_MAX);
    pub const MAGENTA: Self = Self::new(CHANNEL_MAX, 0, CHANNEL_MAX);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Erstellt eine Farbe aus beliebigen Ganzzahlen
    ///
    /// Werte außerhalb von [0, 255] werden gesättigt: negativ → 0, zu groß → 255.
    ///
    /// ```
    /// # use colour_core::RgbColor;
    /// assert_eq!(RgbColor::from_components(-20, 128, 300), RgbColor::new(0, 128, 255));
    /// ```
    pub fn from_components(red: i32, green: i32, blue: i32) -> Self {
        Self {
            red: saturate(red),
            green: saturate(green),
            blue: saturate(blue),
        }
    }

    /// Erstellt eine Farbe aus einem gepackten 0xRRGGBB Wert
    ///
    /// Die obersten 8 Bits werden ignoriert.
    pub const fn from_hex(value: u32) -> Self {
        Self {
            red: ((value >> 16) & 0xFF) as u8,
            green: ((value >> 8) & 0xFF) as u8,
            blue: (value & 0xFF) as u8,
        }
    }

    pub const fn red(&self) -> u8 {
        self.red
    }

    pub const fn green(&self) -> u8 {
        self.green
    }

    pub const fn blue(&self) -> u8 {
        self.blue
    }

    pub fn set_red(&mut self, red: u8) {
        self.red = red;
    }

    pub fn set_green(&mut self, green: u8) {
        self.green = green;
    }

    pub fn set_blue(&mut self, blue: u8) {
        self.blue = blue;
    }

    /// RGB565 Format (z.B. für TFT-Displays)
    ///
    /// Schneidet die unteren Bits ab (5-6-5), ohne Rundung.
    pub const fn to_rgb565(&self) -> u16 {
        ((self.red as u16 & 0xF8) << 8)
            | ((self.green as u16 & 0xFC) << 3)
            | (self.blue as u16 >> 3)
    }

    /// RGB888 Format in den unteren 24 Bits (0xRRGGBB)
    pub const fn to_rgb888(&self) -> u32 {
        ((self.red as u32) << 16) | ((self.green as u32) << 8) | self.blue as u32
    }
}

fn saturate(value: i32) -> u8 {
    value.clamp(0, CHANNEL_MAX as i32) as u8
}

// ============================================================================
// Konvertierungen
// ============================================================================

impl From<u32> for RgbColor {
    fn from(value: u32) -> Self {
        Self::from_hex(value)
    }
}

impl From<RgbColor> for u16 {
    fn from(colour: RgbColor) -> Self {
        colour.to_rgb565()
    }
}

impl From<RgbColor> for u32 {
    fn from(colour: RgbColor) -> Self {
        colour.to_rgb888()
    }
}

impl From<RGB8> for RgbColor {
    fn from(color: RGB8) -> Self {
        Self::new(color.r, color.g, color.b)
    }
}

impl From<RgbColor> for RGB8 {
    fn from(colour: RgbColor) -> Self {
        RGB8 {
            r: colour.red,
            g: colour.green,
            b: colour.blue,
        }
    }
}

// ============================================================================
// Text-Format (#RRGGBB)
// ============================================================================

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.to_rgb888())
    }
}

impl fmt::LowerHex for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06x}", self.to_rgb888())
    }
}

impl fmt::UpperHex for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06X}", self.to_rgb888())
    }
}

impl FromStr for RgbColor {
    type Err = ColourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);

        // from_str_radix akzeptiert ein führendes '+', daher vorher prüfen
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColourError::InvalidHex);
        }

        u32::from_str_radix(digits, 16)
            .map(Self::from_hex)
            .map_err(|_| ColourError::InvalidHex)
    }
}

impl core::convert::TryFrom<&str> for RgbColor {
    type Error = ColourError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for RgbColor {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "RgbColor {{ rgb: ({}, {}, {}) }}",
            self.red,
            self.green,
            self.blue
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ColourError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            ColourError::PercentOutOfRange => defmt::write!(fmt, "Percent out of range"),
            ColourError::InvalidHex => defmt::write!(fmt, "Invalid hex colour"),
        }
    }
}
