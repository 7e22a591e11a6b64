//! Fehler-Typen
//!
//! Kleine `Copy`-Enums ohne Allokation, damit sie auch im Firmware-Log landen können.

use core::fmt;

use crate::traits::LedError;
use crate::types::GameState;

/// Hardware-Zugriff fehlgeschlagen - beendet die Session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HardwareFault {
    /// Ausgang konnte nicht geschaltet werden
    OutputFailed,
    /// Eingang konnte nicht gelesen werden
    InputFailed,
    /// Pins wurden bereits freigegeben
    Released,
}

impl fmt::Display for HardwareFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HardwareFault::OutputFailed => f.write_str("failed to drive signal output"),
            HardwareFault::InputFailed => f.write_str("failed to read trigger input"),
            HardwareFault::Released => f.write_str("pins already released"),
        }
    }
}

impl core::error::Error for HardwareFault {}

impl From<LedError> for HardwareFault {
    fn from(_: LedError) -> Self {
        HardwareFault::OutputFailed
    }
}

/// Unbekannter Schwierigkeitsgrad angefordert
///
/// Nicht fatal: der Aufrufer fragt erneut nach.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidConfiguration;

impl fmt::Display for InvalidConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown difficulty, expected easy, medium or hard")
    }
}

impl core::error::Error for InvalidConfiguration {}

/// Fehler der Game Engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameError {
    Hardware(HardwareFault),
    /// `start()` ohne vorheriges `configure()`
    NotConfigured,
    /// Schwierigkeit ist nach Spielstart fest
    ConfigurationLocked(GameState),
    /// Session ist beendet, keine weiteren Runden
    SessionTerminated,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Hardware(fault) => write!(f, "hardware fault: {fault}"),
            GameError::NotConfigured => f.write_str("difficulty not configured"),
            GameError::ConfigurationLocked(state) => {
                write!(f, "difficulty is locked in state {state:?}")
            }
            GameError::SessionTerminated => f.write_str("session already terminated"),
        }
    }
}

impl core::error::Error for GameError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            GameError::Hardware(fault) => Some(fault),
            _ => None,
        }
    }
}

impl From<HardwareFault> for GameError {
    fn from(fault: HardwareFault) -> Self {
        GameError::Hardware(fault)
    }
}
