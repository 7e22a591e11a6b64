// Game Task - Simon-Spiel auf RGB LED + drei Tastern
use defmt::{error, info, warn};
use embassy_time::{Delay, Duration, Timer};
use embedded_hal_async::delay::DelayNs;
use esp_hal::gpio::Input;
use esp_hal::rng::Rng;
use esp_hal_smartled::smart_led_buffer;
use simon_core::{
    ButtonInputs, Difficulty, GameEngine, GameError, HardwareFault, InputSource, RandomSource,
    RgbLedOutputs, SessionObserver, SessionOutcome, SignalEmitter, SignalOutputs, TriggerInputs,
    run_session,
};

use crate::config::{IDLE_SLEEP_SECS, LED_BRIGHTNESS, RMT_CLOCK_MHZ};
use crate::hal::{HardwareRng, RmtLedWriter};
use crate::{AbortSignal, preset_difficulty};

/// Meldet den Spielverlauf über defmt
pub struct LogObserver;

impl SessionObserver for LogObserver {
    fn difficulty_selected(&mut self, level: Difficulty) {
        info!("Starte Spiel auf Schwierigkeit {}", level.name());
    }

    fn round_completed(&mut self, score: u32) {
        info!("Richtig! Punkte: {}", score);
    }

    fn game_over(&mut self, score: u32, mismatch_at: usize) {
        info!(
            "Game Over! Falscher Taster an Position {} - Punkte: {}",
            mismatch_at, score
        );
    }

    fn sequence_exhausted(&mut self, score: u32) {
        info!("Sequenz-Speicher voll - Spiel gewonnen mit {} Punkten", score);
    }

    fn interrupted(&mut self, score: u32) {
        info!("Spiel abgebrochen (Punkte: {})", score);
    }

    fn faulted(&mut self, score: u32, fault: HardwareFault) {
        error!("Hardware-Fehler: {} (Punkte: {})", fault, score);
    }
}

/// Game Logic - Testbare Spiel-Steuerung ohne Hardware-Abhängigkeit
///
/// Führt genau eine Session aus:
/// - Schwierigkeit aus SIMON_DIFFICULTY oder per Taster (Rot/Grün/Blau)
/// - Runden bis zum ersten Fehler
/// - BOOT-Taster bricht jederzeit ab
///
/// # Trait-basierte Abstraktion
/// Die generischen Parameter erlauben neben der echten Hardware auch Mocks.
///
/// # Parameter
/// - `engine`: Game Engine mit Ausgängen, Eingängen, Delay und RNG
/// - `abort`: Signal vom Abort-Task
pub async fn game_logic<O, I, D, R>(
    mut engine: GameEngine<O, I, D, R>,
    abort: &'static AbortSignal,
) -> Result<SessionOutcome, GameError>
where
    O: SignalOutputs,
    I: TriggerInputs,
    D: DelayNs,
    R: RandomSource,
{
    // Ungültige Voreinstellung ist kein Abbruchgrund: dann wird per Taster gewählt
    let preset = match preset_difficulty() {
        Ok(preset) => preset,
        Err(e) => {
            warn!("SIMON_DIFFICULTY ungültig ({}), bitte per Taster wählen", e);
            None
        }
    };
    if preset.is_none() {
        info!("Schwierigkeit wählen: Rot = leicht, Grün = mittel, Blau = schwer");
    }

    let mut observer = LogObserver;
    run_session(&mut engine, preset, &mut observer, abort).await
}

/// Game Task - Embassy Task für das Spiel
///
/// Dieser Task übernimmt die Hardware-Initialisierung und ruft dann
/// die testbare `game_logic()` Funktion auf.
///
/// # Parameter
/// - `gpio8`: GPIO8 Peripheral für LED-Datenleitung
/// - `rmt_peripheral`: RMT Peripheral für präzises Timing
/// - `buttons`: Taster `[rot, grün, blau]` mit Pull-up
/// - `rng`: Hardware-RNG
/// - `abort`: Signal vom Abort-Task
#[embassy_executor::task]
pub async fn game_task(
    gpio8: esp_hal::peripherals::GPIO8<'static>,
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
    buttons: [Input<'static>; 3],
    rng: Rng,
    abort: &'static AbortSignal,
) {
    // Buffer für SmartLED Daten erstellen (1 LED)
    // Macro allokiert Speicher im richtigen Format für RMT
    let mut rmt_buffer = smart_led_buffer!(1);

    // Hardware initialisieren: RmtLedWriter kapselt RMT + SmartLED
    let led = RmtLedWriter::new(gpio8, rmt_peripheral, RMT_CLOCK_MHZ, &mut rmt_buffer);

    let engine = GameEngine::new(
        SignalEmitter::new(RgbLedOutputs::new(led, LED_BRIGHTNESS), Delay),
        InputSource::new(ButtonInputs::new(buttons), Delay),
        Delay,
        HardwareRng::new(rng),
    );

    // Business Logic aufrufen (jetzt testbar!)
    match game_logic(engine, abort).await {
        Ok(outcome) => info!("Session beendet: {}", outcome),
        Err(e) => error!("Session konnte nicht laufen: {}", e),
    }

    // Neues Spiel per Reset-Taster
    loop {
        Timer::after(Duration::from_secs(IDLE_SLEEP_SECS)).await;
    }
}
