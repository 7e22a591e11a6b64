//! Session-Treiber: Schwierigkeit wählen, Runden spielen, aufräumen
//!
//! Der gesamte Spielablauf läuft gegen ein Abbruch-Signal (`select`).
//! Egal wie die Session endet, `release_all()` läuft danach genau einmal.

use embassy_futures::select::{Either, select};
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::signal::Signal;
use embedded_hal_async::delay::DelayNs;

use crate::engine::GameEngine;
use crate::error::{GameError, HardwareFault};
use crate::traits::{RandomSource, SignalOutputs, TriggerInputs};
use crate::types::{Difficulty, RoundOutcome, SessionOutcome};

/// Abbruch-Signal (z.B. vom BOOT-Taster)
pub type InterruptSignal<M> = Signal<M, ()>;

/// Anzeige-Schnittstelle für den Spielverlauf
///
/// # Implementierungen
/// - **Production:** defmt-Log in der Firmware
/// - **Testing:** Recorder in den Integrationstests
pub trait SessionObserver {
    fn difficulty_selected(&mut self, _level: Difficulty) {}

    /// Nach jeder erfolgreichen Runde mit dem neuen Punktestand
    fn round_completed(&mut self, score: u32);

    /// Finaler Punktestand nach falscher Eingabe
    fn game_over(&mut self, score: u32, mismatch_at: usize);

    fn sequence_exhausted(&mut self, _score: u32) {}

    fn interrupted(&mut self, _score: u32) {}

    fn faulted(&mut self, _score: u32, _fault: HardwareFault) {}
}

/// Spielt eine komplette Session
///
/// - `preset`: Schwierigkeit vorgeben, sonst per Tastendruck wählen
/// - `interrupt`: bricht an jedem Wartepunkt sofort ab
///
/// Hardware-Fehler enden als [`SessionOutcome::Faulted`]. `Err` gibt es nur
/// bei falscher Benutzung, z.B. einer bereits beendeten Engine.
pub async fn run_session<O, I, D, R, S, M, const N: usize>(
    engine: &mut GameEngine<O, I, D, R, N>,
    preset: Option<Difficulty>,
    observer: &mut S,
    interrupt: &InterruptSignal<M>,
) -> Result<SessionOutcome, GameError>
where
    O: SignalOutputs,
    I: TriggerInputs,
    D: DelayNs,
    R: RandomSource,
    S: SessionObserver,
    M: RawMutex,
{
    let raced = select(play(engine, preset, observer), interrupt.wait()).await;
    let result = match raced {
        Either::First(result) => result,
        Either::Second(()) => {
            let score = engine.score();
            observer.interrupted(score);
            Ok(SessionOutcome::Interrupted { score })
        }
    };

    // Freigabe-Fehler ändern das Ergebnis nicht
    let _ = engine.release_all();

    if let Ok(SessionOutcome::Faulted { score, fault }) = result {
        observer.faulted(score, fault);
    }
    result
}

async fn play<O, I, D, R, S, const N: usize>(
    engine: &mut GameEngine<O, I, D, R, N>,
    preset: Option<Difficulty>,
    observer: &mut S,
) -> Result<SessionOutcome, GameError>
where
    O: SignalOutputs,
    I: TriggerInputs,
    D: DelayNs,
    R: RandomSource,
    S: SessionObserver,
{
    match play_rounds(engine, preset, observer).await {
        Err(GameError::Hardware(fault)) => Ok(SessionOutcome::Faulted {
            score: engine.score(),
            fault,
        }),
        other => other,
    }
}

async fn play_rounds<O, I, D, R, S, const N: usize>(
    engine: &mut GameEngine<O, I, D, R, N>,
    preset: Option<Difficulty>,
    observer: &mut S,
) -> Result<SessionOutcome, GameError>
where
    O: SignalOutputs,
    I: TriggerInputs,
    D: DelayNs,
    R: RandomSource,
    S: SessionObserver,
{
    let level = match preset {
        Some(level) => level,
        None => engine.choose_difficulty().await?,
    };
    engine.configure(level)?;
    observer.difficulty_selected(level);

    engine.start().await?;

    loop {
        match engine.play_round().await? {
            RoundOutcome::Continue { score } => {
                observer.round_completed(score);
                engine.pause_between_rounds().await;
            }
            RoundOutcome::GameOver { score, mismatch_at } => {
                // Punktestand zuerst melden, ein Fehler beim Blinken ändert ihn nicht
                observer.game_over(score, mismatch_at);
                engine.play_failure_pattern().await?;
                return Ok(SessionOutcome::GameOver { score });
            }
            RoundOutcome::SequenceExhausted { score } => {
                observer.sequence_exhausted(score);
                return Ok(SessionOutcome::Completed { score });
            }
        }
    }
}
