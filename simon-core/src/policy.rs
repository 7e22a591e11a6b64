//! Schwierigkeit → Leuchtdauer und feste Spiel-Timings
//!
//! Alle Zeiten in Millisekunden.

use crate::types::Difficulty;

/// Leuchtdauer auf "leicht"
pub const EASY_HOLD_MS: u32 = 1000;
/// Leuchtdauer auf "mittel" (auch Rückfallwert)
pub const MEDIUM_HOLD_MS: u32 = 500;
/// Leuchtdauer auf "schwer"
pub const HARD_HOLD_MS: u32 = 250;

/// Pause nach jedem Signal, bevor das nächste beginnt
pub const SETTLE_PAUSE_MS: u32 = 300;
/// Entprell-Pause nach erkanntem Tastendruck
pub const DEBOUNCE_MS: u32 = 300;
/// Pause zwischen zwei Abfrage-Durchläufen aller Taster
pub const INPUT_POLL_INTERVAL_MS: u32 = 10;
/// Pause nach erfolgreicher Runde
pub const ROUND_PAUSE_MS: u32 = 1000;

/// Start-Muster: Haltezeit pro Kanal
pub const STARTUP_HOLD_MS: u32 = 500;
/// Start-Muster: Pause bevor alle ausgehen
pub const STARTUP_PAUSE_MS: u32 = 300;
/// Start-Muster: Dunkelphase vor der ersten Runde
pub const STARTUP_TRAILING_MS: u32 = 1000;

/// Fehler-Muster: Dauer jeder An- und Aus-Phase
pub const FAILURE_PHASE_MS: u32 = 300;
/// Fehler-Muster: Anzahl Blinks
pub const FAILURE_FLASHES: usize = 3;

/// Leuchtdauer für einen Schwierigkeitsgrad
///
/// ```
/// # use simon_core::{hold_duration_ms, Difficulty};
/// assert_eq!(hold_duration_ms(Difficulty::Hard), 250);
/// ```
pub const fn hold_duration_ms(level: Difficulty) -> u32 {
    match level {
        Difficulty::Easy => EASY_HOLD_MS,
        Difficulty::Medium => MEDIUM_HOLD_MS,
        Difficulty::Hard => HARD_HOLD_MS,
    }
}

/// Leuchtdauer für eine evtl. noch nicht gesetzte Schwierigkeit
///
/// Ohne Konfiguration gilt die mittlere Dauer.
pub const fn hold_duration_ms_for(level: Option<Difficulty>) -> u32 {
    match level {
        Some(level) => hold_duration_ms(level),
        None => MEDIUM_HOLD_MS,
    }
}

/// Leuchtdauer per Name (`easy`/`medium`/`hard`)
///
/// Unbekannte Namen fallen bewusst auf die mittlere Dauer zurück.
/// Für Benutzereingaben stattdessen `Difficulty::try_from` nutzen,
/// das liefert [`InvalidConfiguration`](crate::InvalidConfiguration).
pub fn hold_duration_ms_for_name(name: &str) -> u32 {
    match Difficulty::try_from(name) {
        Ok(level) => hold_duration_ms(level),
        Err(_) => MEDIUM_HOLD_MS,
    }
}
