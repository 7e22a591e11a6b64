// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von simon-core
pub use simon_core::{Difficulty, GameError, InvalidConfiguration, SessionOutcome};

// Embassy Signal-Typen
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use crate::config::PRESET_DIFFICULTY;

// ============================================================================
// Type-Aliase
// ============================================================================

/// Abbruch-Signal: Abort Task → Game Task
///
/// CriticalSectionRawMutex, weil das Signal als `static` in main.rs liegt
/// und von zwei Tasks gemeinsam genutzt wird.
pub type AbortSignal = Signal<CriticalSectionRawMutex, ()>;

// ============================================================================
// Firmware-spezifische Hilfsfunktionen
// ============================================================================

/// Liest die zur Build-Zeit gesetzte Schwierigkeit
///
/// - `Ok(None)`: SIMON_DIFFICULTY nicht gesetzt → Auswahl per Taster
/// - `Ok(Some(_))`: gültiger Wert (`easy`/`medium`/`hard`, Groß-/Kleinschreibung egal)
/// - `Err(_)`: Wert gesetzt, aber unbekannt
pub fn preset_difficulty() -> Result<Option<Difficulty>, InvalidConfiguration> {
    PRESET_DIFFICULTY.map(Difficulty::try_from).transpose()
}
