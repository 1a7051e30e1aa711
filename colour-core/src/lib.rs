//! Colour Core - Platform-agnostic Colour Type and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert den Farbtyp `RgbColor`, seine Operationen und die
//! Traits für Sensor und Pin-Ausgabe.

#![no_std]

pub mod logic;
pub mod sensor;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use sensor::{RawChannels, RawColourSensor, SensorAdapter};
pub use traits::{AnalogWrite, ColourSensor};
pub use types::{CHANNEL_MAX, ColourError, RgbColor};
