//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use crate::types::RgbColor;

/// Trait für analoge Pin-Ausgabe (PWM)
///
/// Entspricht dem `analogWrite(pin, value)` Primitiv der Host-Plattform.
/// Fehlerbehandlung (falls nötig) liegt bei der Implementierung.
///
/// # Implementierungen
/// - **Production:** plattformspezifischer PWM-Treiber
/// - **Testing:** MockPinWriter (in-memory Mock)
pub trait AnalogWrite {
    /// Pin-Bezeichner der Plattform
    type Pin;

    /// Schreibt einen 8-Bit Wert auf den Pin
    fn analog_write(&mut self, pin: Self::Pin, value: u8);
}

/// Trait für Farbsensoren
///
/// Jeder `read_*` Aufruf löst eine frische Messung aus.
///
/// # Fehlerbehandlung
/// `begin()` liefert `false` wenn die Initialisierung fehlschlägt. Aufrufer
/// müssen das prüfen, bevor sie den Messwerten trauen. Es gibt keinen Retry.
pub trait ColourSensor {
    fn begin(&mut self) -> bool;
    fn read_colour(&mut self) -> RgbColor;
    /// Helligkeit (ungefilterter Kanal)
    fn read_brightness(&mut self) -> u16;
    /// Farbtemperatur in Kelvin
    fn read_colour_temperature(&mut self) -> u16;
    fn read_lux(&mut self) -> u16;
}

impl RgbColor {
    /// Schreibt die Farbe auf eine RGB-LED mit drei PWM-Pins
    ///
    /// Genau drei Aufrufe in der Reihenfolge Rot, Grün, Blau, mit den
    /// unveränderten Kanalwerten.
    ///
    /// # Beispiele
    ///
    /// ```
    /// # use colour_core::{AnalogWrite, RgbColor};
    /// struct Pwm([u8; 16]);
    ///
    /// impl AnalogWrite for Pwm {
    ///     type Pin = usize;
    ///
    ///     fn analog_write(&mut self, pin: usize, value: u8) {
    ///         self.0[pin] = value;
    ///     }
    /// }
    ///
    /// let mut pwm = Pwm([0; 16]);
    /// RgbColor::from_hex(0xFF8000).write_led(&mut pwm, 9, 10, 11);
    /// assert_eq!(&pwm.0[9..12], &[255, 128, 0]);
    /// ```
    pub fn write_led<W: AnalogWrite>(
        &self,
        writer: &mut W,
        r_pin: W::Pin,
        g_pin: W::Pin,
        b_pin: W::Pin,
    ) {
        writer.analog_write(r_pin, self.red());
        writer.analog_write(g_pin, self.green());
        writer.analog_write(b_pin, self.blue());
    }
}
