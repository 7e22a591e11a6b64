//! Taster-Eingabe

use embedded_hal_async::delay::DelayNs;

use crate::error::HardwareFault;
use crate::policy::{DEBOUNCE_MS, INPUT_POLL_INTERVAL_MS};
use crate::traits::TriggerInputs;
use crate::types::{CHANNELS, Channel, Level};

/// Wartet auf den nächsten Tastendruck
///
/// Zustandslos. Abgebrochen wird von außen, indem das Future von
/// [`await_channel`](Self::await_channel) gedroppt wird (z.B. über `select`).
pub struct InputSource<I, D> {
    inputs: I,
    delay: D,
}

impl<I: TriggerInputs, D: DelayNs> InputSource<I, D> {
    pub fn new(inputs: I, delay: D) -> Self {
        Self { inputs, delay }
    }

    /// Blockiert bis ein Kanal aktiv ist, entprellt und liefert ihn zurück
    ///
    /// Abfrage in [`CHANNELS`]-Reihenfolge, der erste aktive Kanal eines
    /// Durchlaufs gewinnt. Kein Timeout.
    ///
    /// Erkannt wird der Pegel, nicht die Flanke: ein Taster, der länger als
    /// die Entprell-Pause gehalten wird, zählt beim nächsten Aufruf erneut.
    pub async fn await_channel(&mut self) -> Result<Channel, HardwareFault> {
        loop {
            if let Some(channel) = self.poll_once()? {
                self.delay.delay_ms(DEBOUNCE_MS).await;
                return Ok(channel);
            }
            self.delay.delay_ms(INPUT_POLL_INTERVAL_MS).await;
        }
    }

    fn poll_once(&mut self) -> Result<Option<Channel>, HardwareFault> {
        for channel in CHANNELS {
            if self.inputs.read_input(channel)? == Level::Active {
                return Ok(Some(channel));
            }
        }
        Ok(None)
    }
}
