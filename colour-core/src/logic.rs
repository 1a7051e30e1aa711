//! Pure Farb-Arithmetik
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)
//!
//! Alle Kanal-Operationen sättigen statt umzubrechen.

use core::ops::{Add, AddAssign, Sub, SubAssign};

use crate::types::{CHANNEL_MAX, ColourError, RgbColor};

impl RgbColor {
    /// Additives Mischen, in-place
    ///
    /// Pro Kanal `min(255, a + b)`. Gibt `self` zurück (verkettbar).
    pub fn blend_add(&mut self, other: RgbColor) -> &mut Self {
        *self = self.map2(other, u8::saturating_add);
        self
    }

    /// Subtraktives Mischen, in-place
    ///
    /// Pro Kanal `max(0, a - b)`. Gibt `self` zurück (verkettbar).
    pub fn blend_sub(&mut self, other: RgbColor) -> &mut Self {
        *self = self.map2(other, u8::saturating_sub);
        self
    }

    /// Skaliert alle Kanäle mit `factor / 255` (ganzzahlig, abschneidend)
    ///
    /// ```
    /// # use colour_core::RgbColor;
    /// let mut c = RgbColor::new(200, 100, 50);
    /// c.scale(128).scale(255);
    /// assert_eq!(c, RgbColor::new(100, 50, 25));
    /// ```
    pub fn scale(&mut self, factor: u8) -> &mut Self {
        *self = self.map(|channel| (channel as u16 * factor as u16 / CHANNEL_MAX as u16) as u8);
        self
    }

    /// Wie [`RgbColor::scale`], aber auf einer Kopie
    pub fn scaled(self, factor: u8) -> RgbColor {
        let mut copy = self;
        copy.scale(factor);
        copy
    }

    /// Lineare Interpolation zwischen `c1` und `c2`
    ///
    /// `fraction` wird nicht begrenzt: Werte außerhalb von [0, 1]
    /// extrapolieren, das Ergebnis sättigt dann an 0 bzw. 255.
    ///
    /// ```
    /// # use colour_core::RgbColor;
    /// let mid = RgbColor::lerp(RgbColor::BLACK, RgbColor::new(200, 100, 50), 0.5);
    /// assert_eq!(mid, RgbColor::new(100, 50, 25));
    /// ```
    pub fn lerp(c1: RgbColor, c2: RgbColor, fraction: f32) -> RgbColor {
        let channel = |a: u8, b: u8| narrow(a as f32 + fraction * (b as f32 - a as f32));
        RgbColor::new(
            channel(c1.red(), c2.red()),
            channel(c1.green(), c2.green()),
            channel(c1.blue(), c2.blue()),
        )
    }

    /// Dunkelt um `percent` Prozent ab
    ///
    /// Bei `percent > 100` wird der Faktor negativ und jeder Kanal sättigt
    /// auf 0 (Schwarz). Wer das ablehnen will, nutzt [`RgbColor::try_darken`].
    pub fn darken(self, percent: f32) -> RgbColor {
        let factor = 1.0 - percent / 100.0;
        self.map(|channel| narrow(channel as f32 * factor))
    }

    /// Wie [`RgbColor::darken`], lehnt aber Prozentwerte außerhalb von [0, 100] ab
    pub fn try_darken(self, percent: f32) -> Result<RgbColor, ColourError> {
        if !(0.0..=100.0).contains(&percent) {
            return Err(ColourError::PercentOutOfRange);
        }
        Ok(self.darken(percent))
    }

    /// Hellt um `percent` Prozent auf, begrenzt auf 255
    pub fn lighten(self, percent: f32) -> RgbColor {
        let factor = 1.0 + percent / 100.0;
        self.map(|channel| narrow((channel as f32 * factor).min(CHANNEL_MAX as f32)))
    }

    /// Komplementärfarbe: `255 - channel`
    pub fn invert(self) -> RgbColor {
        self.map(|channel| CHANNEL_MAX - channel)
    }

    /// Graustufe als ganzzahliger Mittelwert der drei Kanäle
    pub fn greyscale(self) -> RgbColor {
        let sum = self.red() as u16 + self.green() as u16 + self.blue() as u16;
        let gray = (sum / 3) as u8;
        RgbColor::new(gray, gray, gray)
    }

    fn map(self, f: impl Fn(u8) -> u8) -> RgbColor {
        RgbColor::new(f(self.red()), f(self.green()), f(self.blue()))
    }

    fn map2(self, other: RgbColor, f: impl Fn(u8, u8) -> u8) -> RgbColor {
        RgbColor::new(
            f(self.red(), other.red()),
            f(self.green(), other.green()),
            f(self.blue(), other.blue()),
        )
    }
}

/// Float → Kanal: schneidet Richtung 0 ab, sättigt an [0, 255], NaN → 0
fn narrow(value: f32) -> u8 {
    value as u8
}

// ============================================================================
// Operator-Überladungen
// ============================================================================

impl AddAssign for RgbColor {
    fn add_assign(&mut self, rhs: RgbColor) {
        self.blend_add(rhs);
    }
}

impl SubAssign for RgbColor {
    fn sub_assign(&mut self, rhs: RgbColor) {
        self.blend_sub(rhs);
    }
}

impl Add for RgbColor {
    type Output = RgbColor;

    fn add(mut self, rhs: RgbColor) -> RgbColor {
        self += rhs;
        self
    }
}

impl Sub for RgbColor {
    type Output = RgbColor;

    fn sub(mut self, rhs: RgbColor) -> RgbColor {
        self -= rhs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_saturates() {
        let sum = RgbColor::new(200, 200, 200) + RgbColor::new(100, 50, 10);
        assert_eq!(sum, RgbColor::new(255, 250, 210));
    }

    #[test]
    fn test_sub_clamps_at_zero() {
        let diff = RgbColor::new(10, 10, 10) - RgbColor::new(50, 5, 5);
        assert_eq!(diff, RgbColor::new(0, 5, 5));
    }

    #[test]
    fn test_add_assign_mutates_receiver_only() {
        let mut c = RgbColor::new(1, 2, 3);
        let other = RgbColor::new(10, 20, 30);
        c += other;
        assert_eq!(c, RgbColor::new(11, 22, 33));
        assert_eq!(other, RgbColor::new(10, 20, 30));
    }

    #[test]
    fn test_blend_chaining() {
        let mut c = RgbColor::new(100, 100, 100);
        c.blend_add(RgbColor::new(50, 0, 0))
            .blend_sub(RgbColor::new(0, 50, 0))
            .scale(255);
        assert_eq!(c, RgbColor::new(150, 50, 100));
    }

    #[test]
    fn test_scale_bounds() {
        let c = RgbColor::new(13, 128, 255);
        assert_eq!(c.scaled(255), c);
        assert_eq!(c.scaled(0), RgbColor::BLACK);
    }

    #[test]
    fn test_scale_truncates() {
        // 255 * 100 / 255 = 100, 1 * 100 / 255 = 0
        assert_eq!(RgbColor::new(255, 1, 3).scaled(100), RgbColor::new(100, 0, 1));
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = RgbColor::new(10, 200, 30);
        let b = RgbColor::new(250, 0, 31);
        assert_eq!(RgbColor::lerp(a, b, 0.0), a);
        assert_eq!(RgbColor::lerp(a, b, 1.0), b);
    }

    #[test]
    fn test_lerp_extrapolation_saturates() {
        let a = RgbColor::new(100, 100, 100);
        let b = RgbColor::new(200, 0, 100);
        assert_eq!(RgbColor::lerp(a, b, 2.0), RgbColor::new(255, 0, 100));
        assert_eq!(RgbColor::lerp(a, b, -2.0), RgbColor::new(0, 255, 100));
    }

    #[test]
    fn test_lerp_nan_is_black() {
        let c = RgbColor::lerp(RgbColor::WHITE, RgbColor::BLACK, f32::NAN);
        assert_eq!(c, RgbColor::BLACK);
    }

    #[test]
    fn test_darken() {
        let c = RgbColor::new(200, 100, 51);
        assert_eq!(c.darken(50.0), RgbColor::new(100, 50, 25));
        assert_eq!(c.darken(0.0), c);
        assert_eq!(c.darken(100.0), RgbColor::BLACK);
    }

    #[test]
    fn test_darken_over_hundred_is_black() {
        assert_eq!(RgbColor::WHITE.darken(150.0), RgbColor::BLACK);
    }

    #[test]
    fn test_try_darken_rejects_out_of_range() {
        let c = RgbColor::new(200, 100, 50);
        assert_eq!(c.try_darken(50.0), Ok(RgbColor::new(100, 50, 25)));
        assert_eq!(c.try_darken(100.1), Err(ColourError::PercentOutOfRange));
        assert_eq!(c.try_darken(-1.0), Err(ColourError::PercentOutOfRange));
        assert_eq!(c.try_darken(f32::NAN), Err(ColourError::PercentOutOfRange));
    }

    #[test]
    fn test_lighten_clamps() {
        assert_eq!(RgbColor::RED.lighten(50.0), RgbColor::RED);
        assert_eq!(
            RgbColor::new(100, 170, 200).lighten(50.0),
            RgbColor::new(150, 255, 255)
        );
    }

    #[test]
    fn test_invert() {
        assert_eq!(RgbColor::new(0, 128, 255).invert(), RgbColor::new(255, 127, 0));
    }

    #[test]
    fn test_greyscale() {
        assert_eq!(RgbColor::new(30, 60, 90).greyscale(), RgbColor::new(60, 60, 60));
        // (255 + 255 + 254) / 3 = 254.67 → 254
        assert_eq!(RgbColor::new(255, 255, 254).greyscale(), RgbColor::new(254, 254, 254));
    }
}
