//! Sensor-Adapter
//!
//! Bildet die Rohkanäle eines Farbsensors (Rot, Grün, Blau, Clear) auf die
//! `ColourSensor` Capability ab. Register-Zugriff und die Formeln für
//! Farbtemperatur und Lux bleiben beim Hersteller-Treiber.

use crate::traits::ColourSensor;
use crate::types::{CHANNEL_MAX, RgbColor};

/// Rohwerte einer Messung (16 Bit pro Kanal)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawChannels {
    pub red: u16,
    pub green: u16,
    pub blue: u16,
    /// Ungefilterter Kanal
    pub clear: u16,
}

impl RawChannels {
    /// Farbanteil als 8-Bit Farbe, Kanäle > 255 sättigen
    pub fn to_colour(&self) -> RgbColor {
        let narrow = |value: u16| value.min(CHANNEL_MAX as u16) as u8;
        RgbColor::new(narrow(self.red), narrow(self.green), narrow(self.blue))
    }
}

/// Trait für den Hersteller-Treiber eines RGBC Farbsensors
///
/// # Implementierungen
/// - **Production:** Treiber für den konkreten Chip (z.B. TCS34725 über I2C)
/// - **Testing:** MockRawSensor (in-memory Mock)
pub trait RawColourSensor {
    /// Initialisiert den Sensor, `false` bei Fehler
    fn init(&mut self) -> bool;

    /// Liest alle vier Rohkanäle neu aus der Hardware
    fn read_raw(&mut self) -> RawChannels;

    /// Farbtemperatur in Kelvin aus einer Messung
    fn colour_temperature(&self, raw: &RawChannels) -> u16;

    /// Beleuchtungsstärke in Lux aus einer Messung
    fn lux(&self, raw: &RawChannels) -> u16;
}

/// Adapter: `RawColourSensor` → `ColourSensor`
///
/// Jeder Lesezugriff holt eine frische Messung; die letzte bleibt über
/// [`SensorAdapter::last_raw`] abrufbar.
pub struct SensorAdapter<S> {
    sensor: S,
    initialised: bool,
    last_raw: Option<RawChannels>,
}

impl<S: RawColourSensor> SensorAdapter<S> {
    pub fn new(sensor: S) -> Self {
        Self {
            sensor,
            initialised: false,
            last_raw: None,
        }
    }

    /// Ergebnis des letzten `begin()` Aufrufs
    pub fn is_initialised(&self) -> bool {
        self.initialised
    }

    pub fn last_raw(&self) -> Option<RawChannels> {
        self.last_raw
    }

    pub fn into_inner(self) -> S {
        self.sensor
    }

    fn acquire(&mut self) -> RawChannels {
        let raw = self.sensor.read_raw();

        #[cfg(feature = "defmt")]
        defmt::debug!("Sensor raw reading: {}", raw);

        self.last_raw = Some(raw);
        raw
    }
}

impl<S: RawColourSensor> ColourSensor for SensorAdapter<S> {
    fn begin(&mut self) -> bool {
        self.initialised = self.sensor.init();

        #[cfg(feature = "defmt")]
        if !self.initialised {
            defmt::warn!("Colour sensor initialisation failed");
        }

        self.initialised
    }

    fn read_colour(&mut self) -> RgbColor {
        self.acquire().to_colour()
    }

    fn read_brightness(&mut self) -> u16 {
        self.acquire().clear
    }

    fn read_colour_temperature(&mut self) -> u16 {
        let raw = self.acquire();
        self.sensor.colour_temperature(&raw)
    }

    fn read_lux(&mut self) -> u16 {
        let raw = self.acquire();
        self.sensor.lux(&raw)
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for RawChannels {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "RawChannels {{ rgbc: ({}, {}, {}, {}) }}",
            self.red,
            self.green,
            self.blue,
            self.clear
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_to_colour_saturates() {
        let raw = RawChannels {
            red: 1000,
            green: 255,
            blue: 7,
            clear: 5000,
        };
        assert_eq!(raw.to_colour(), RgbColor::new(255, 255, 7));
    }
}
