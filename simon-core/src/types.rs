//! Core Types für das Simon-Spiel
//!
//! Datenstrukturen ohne Hardware-Dependencies

use crate::error::{HardwareFault, InvalidConfiguration};

/// Logischer Farbkanal (Signal-LED + Taster)
///
/// Es gibt genau drei Kanäle. Emitter, Eingabe und Engine nutzen
/// dieselbe, feste Menge [`CHANNELS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    Red,
    Green,
    Blue,
}

/// Alle Kanäle in fester Reihenfolge: Rot → Grün → Blau
///
/// Gleichzeitig Abfrage-Reihenfolge der Taster und Reihenfolge
/// des Start-Musters.
pub const CHANNELS: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

impl Channel {
    /// Position in [`CHANNELS`] (0..3)
    pub const fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }

    /// Anzeigename für Logs
    pub const fn name(self) -> &'static str {
        match self {
            Channel::Red => "Rot",
            Channel::Green => "Grün",
            Channel::Blue => "Blau",
        }
    }
}

/// Logischer Pegel eines Kanals
///
/// Unabhängig von der elektrischen Polarität: ein gedrückter Taster
/// mit Pull-up ist `Active`, obwohl der Pin LOW liest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Active,
    Inactive,
}

/// Schwierigkeitsgrad - bestimmt wie lange ein Signal leuchtet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Schwierigkeit per Tastendruck wählen: Rot = leicht, Grün = mittel, Blau = schwer
    pub const fn for_channel(channel: Channel) -> Self {
        match channel {
            Channel::Red => Difficulty::Easy,
            Channel::Green => Difficulty::Medium,
            Channel::Blue => Difficulty::Hard,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl core::convert::TryFrom<&str> for Difficulty {
    type Error = InvalidConfiguration;

    /// Akzeptiert `easy`, `medium` und `hard` (Groß-/Kleinschreibung egal)
    fn try_from(name: &str) -> Result<Self, Self::Error> {
        let name = name.trim();
        [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(name))
            .ok_or(InvalidConfiguration)
    }
}

/// Ergebnis einer Eingabe-Runde
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RoundResult {
    Success,
    /// Erste Abweichung an `position` (0-basiert in der Sequenz)
    Failure { position: usize },
}

/// Zustände der Game Engine
///
/// `Idle → Configuring → RoundPlayback ⇄ RoundInput → Terminated`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameState {
    Idle,
    Configuring,
    RoundPlayback,
    RoundInput,
    Terminated,
}

/// Was eine Runde an den Session-Treiber meldet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RoundOutcome {
    /// Sequenz korrekt wiederholt, nächste Runde folgt
    Continue { score: u32 },
    /// Falscher Taster - Spiel vorbei, Fehler-Muster wurde gezeigt
    GameOver { score: u32, mismatch_at: usize },
    /// Sequenz-Speicher voll, es gibt keine weitere Runde
    SequenceExhausted { score: u32 },
}

/// Wie eine Session endete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionOutcome {
    GameOver { score: u32 },
    Completed { score: u32 },
    /// Sauberer Abbruch von außen (kein Fehler)
    Interrupted { score: u32 },
    Faulted { score: u32, fault: HardwareFault },
}

impl SessionOutcome {
    pub fn score(&self) -> u32 {
        match *self {
            SessionOutcome::GameOver { score }
            | SessionOutcome::Completed { score }
            | SessionOutcome::Interrupted { score }
            | SessionOutcome::Faulted { score, .. } => score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_index_matches_order() {
        for (i, channel) in CHANNELS.iter().enumerate() {
            assert_eq!(channel.index(), i);
        }
    }

    #[test]
    fn test_difficulty_try_from_valid() {
        assert_eq!(Difficulty::try_from("easy"), Ok(Difficulty::Easy));
        assert_eq!(Difficulty::try_from(" Medium "), Ok(Difficulty::Medium));
        assert_eq!(Difficulty::try_from("HARD"), Ok(Difficulty::Hard));
    }

    #[test]
    fn test_difficulty_try_from_invalid() {
        assert_eq!(Difficulty::try_from("extreme"), Err(InvalidConfiguration));
        assert_eq!(Difficulty::try_from(""), Err(InvalidConfiguration));
    }

    #[test]
    fn test_difficulty_for_channel() {
        assert_eq!(Difficulty::for_channel(Channel::Red), Difficulty::Easy);
        assert_eq!(Difficulty::for_channel(Channel::Green), Difficulty::Medium);
        assert_eq!(Difficulty::for_channel(Channel::Blue), Difficulty::Hard);
    }

    #[test]
    fn test_default_difficulty_is_medium() {
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }
}
