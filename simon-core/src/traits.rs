//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use rgb::RGB8;

use crate::error::HardwareFault;
use crate::types::{Channel, Level};

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedError {
    WriteFailed,
}

/// Trait für SmartLED Hardware-Zugriff
///
/// Abstrahiert den Zugriff auf RGB LEDs (WS2812/Neopixel).
///
/// # Implementierungen
/// - **Production:** RmtLedWriter (ESP32 RMT Peripheral)
/// - **Testing:** MockLedWriter (in-memory Mock)
pub trait SmartLedWriter: Send {
    /// Schreibt eine RGB-Farbe auf die LED
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn write(&mut self, color: RGB8) -> Result<(), LedError>;
}

/// Signal-Ausgänge pro Kanal
///
/// Gehört exklusiv dem [`SignalEmitter`](crate::SignalEmitter).
pub trait SignalOutputs {
    /// Schaltet den Ausgang eines Kanals an oder aus
    fn set_output(&mut self, channel: Channel, level: Level) -> Result<(), HardwareFault>;

    /// Schaltet alle Ausgänge aus und gibt die Hardware frei
    ///
    /// Muss idempotent sein: ein zweiter Aufruf ist kein Fehler.
    /// Danach schlägt `set_output` mit [`HardwareFault::Released`] fehl.
    fn release_all(&mut self) -> Result<(), HardwareFault>;
}

/// Eingänge (Taster) pro Kanal
///
/// Gehört exklusiv der [`InputSource`](crate::InputSource).
pub trait TriggerInputs {
    /// Liest den aktuellen logischen Pegel eines Kanals
    fn read_input(&mut self, channel: Channel) -> Result<Level, HardwareFault>;
}

/// Zufallsquelle für die Kanalauswahl
///
/// # Implementierungen
/// - **Production:** Hardware-RNG des ESP32
/// - **Testing:** vorgegebene Zahlenfolge
pub trait RandomSource {
    fn next_u32(&mut self) -> u32;
}

impl<T: SignalOutputs + ?Sized> SignalOutputs for &mut T {
    fn set_output(&mut self, channel: Channel, level: Level) -> Result<(), HardwareFault> {
        (**self).set_output(channel, level)
    }

    fn release_all(&mut self) -> Result<(), HardwareFault> {
        (**self).release_all()
    }
}

impl<T: TriggerInputs + ?Sized> TriggerInputs for &mut T {
    fn read_input(&mut self, channel: Channel) -> Result<Level, HardwareFault> {
        (**self).read_input(channel)
    }
}
