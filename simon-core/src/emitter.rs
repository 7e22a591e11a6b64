//! Signal-Ausgabe: einzelne Kanäle blinken lassen plus Start- und Fehler-Muster

use embedded_hal_async::delay::DelayNs;

use crate::error::HardwareFault;
use crate::policy::{
    FAILURE_FLASHES, FAILURE_PHASE_MS, SETTLE_PAUSE_MS, STARTUP_HOLD_MS, STARTUP_PAUSE_MS,
    STARTUP_TRAILING_MS, hold_duration_ms_for,
};
use crate::traits::SignalOutputs;
use crate::types::{CHANNELS, Channel, Difficulty, Level};

/// Steuert die Signal-Ausgänge
///
/// Hält keinen Spielzustand, nur die aktive Schwierigkeit.
/// Alle Methoden blockieren den aufrufenden Task für ihre volle Dauer.
pub struct SignalEmitter<O, D> {
    outputs: O,
    delay: D,
    difficulty: Option<Difficulty>,
}

impl<O: SignalOutputs, D: DelayNs> SignalEmitter<O, D> {
    pub fn new(outputs: O, delay: D) -> Self {
        Self {
            outputs,
            delay,
            difficulty: None,
        }
    }

    /// Setzt die Schwierigkeit für alle folgenden `emit()` Aufrufe
    pub fn configure(&mut self, level: Difficulty) {
        self.difficulty = Some(level);
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    /// Aktuelle Leuchtdauer (mittel, solange nichts konfiguriert ist)
    pub fn hold_ms(&self) -> u32 {
        hold_duration_ms_for(self.difficulty)
    }

    /// Kanal an → Leuchtdauer → aus → Settle-Pause
    pub async fn emit(&mut self, channel: Channel) -> Result<(), HardwareFault> {
        let hold_ms = self.hold_ms();
        self.outputs.set_output(channel, Level::Active)?;
        self.delay.delay_ms(hold_ms).await;
        self.outputs.set_output(channel, Level::Inactive)?;
        self.delay.delay_ms(SETTLE_PAUSE_MS).await;
        Ok(())
    }

    /// Spielt eine komplette Sequenz nacheinander ab
    pub async fn play_sequence(&mut self, sequence: &[Channel]) -> Result<(), HardwareFault> {
        for &channel in sequence {
            self.emit(channel).await?;
        }
        Ok(())
    }

    /// "Bereit"-Anzeige: Kanäle nacheinander dazuschalten, dann alle aus
    pub async fn play_startup_pattern(&mut self) -> Result<(), HardwareFault> {
        for channel in CHANNELS {
            self.outputs.set_output(channel, Level::Active)?;
            self.delay.delay_ms(STARTUP_HOLD_MS).await;
        }
        self.delay.delay_ms(STARTUP_PAUSE_MS).await;
        self.set_all(Level::Inactive)?;
        self.delay.delay_ms(STARTUP_TRAILING_MS).await;
        Ok(())
    }

    /// "Game Over": alle Kanäle gemeinsam dreimal blinken
    pub async fn play_failure_pattern(&mut self) -> Result<(), HardwareFault> {
        for _ in 0..FAILURE_FLASHES {
            self.set_all(Level::Active)?;
            self.delay.delay_ms(FAILURE_PHASE_MS).await;
            self.set_all(Level::Inactive)?;
            self.delay.delay_ms(FAILURE_PHASE_MS).await;
        }
        Ok(())
    }

    /// Alles aus und Hardware freigeben (idempotent)
    pub fn release_all(&mut self) -> Result<(), HardwareFault> {
        self.outputs.release_all()
    }

    fn set_all(&mut self, level: Level) -> Result<(), HardwareFault> {
        for channel in CHANNELS {
            self.outputs.set_output(channel, level)?;
        }
        Ok(())
    }
}
