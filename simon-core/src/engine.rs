//! Game Engine - Zustandsmaschine des Simon-Spiels
//!
//! Besitzt Sequenz und Punktestand. Jede Runde:
//! 1. Sequenz um einen zufälligen Kanal verlängern
//! 2. Komplette Sequenz abspielen (nicht nur das neue Element)
//! 3. Eingaben Schritt für Schritt prüfen, erster Fehler beendet das Spiel

use embedded_hal_async::delay::DelayNs;
use heapless::Vec;

use crate::emitter::SignalEmitter;
use crate::error::{GameError, HardwareFault};
use crate::input::InputSource;
use crate::logic::pick_channel;
use crate::policy::ROUND_PAUSE_MS;
use crate::traits::{RandomSource, SignalOutputs, TriggerInputs};
use crate::types::{Channel, Difficulty, GameState, RoundOutcome, RoundResult};

/// Maximale Sequenzlänge (heapless, kein Heap nötig)
pub const MAX_SEQUENCE_LEN: usize = 128;

pub struct GameEngine<O, I, D, R, const N: usize = MAX_SEQUENCE_LEN> {
    emitter: SignalEmitter<O, D>,
    input: InputSource<I, D>,
    rng: R,
    delay: D,
    sequence: Vec<Channel, N>,
    score: u32,
    state: GameState,
}

impl<O, I, D, R, const N: usize> GameEngine<O, I, D, R, N>
where
    O: SignalOutputs,
    I: TriggerInputs,
    D: DelayNs,
    R: RandomSource,
{
    /// Engine im Zustand `Idle`; `delay` ist nur für die Pause zwischen Runden
    pub fn new(
        emitter: SignalEmitter<O, D>,
        input: InputSource<I, D>,
        delay: D,
        rng: R,
    ) -> Self {
        Self {
            emitter,
            input,
            rng,
            delay,
            sequence: Vec::new(),
            score: 0,
            state: GameState::Idle,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn sequence(&self) -> &[Channel] {
        &self.sequence
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.emitter.difficulty()
    }

    /// Wartet auf einen Tastendruck und wählt damit die Schwierigkeit
    ///
    /// Nur vor Spielstart erlaubt (`Idle`/`Configuring`).
    pub async fn choose_difficulty(&mut self) -> Result<Difficulty, GameError> {
        self.ensure_configurable()?;
        self.state = GameState::Configuring;
        match self.input.await_channel().await {
            Ok(channel) => Ok(Difficulty::for_channel(channel)),
            Err(fault) => Err(self.abort(fault)),
        }
    }

    /// Setzt die Schwierigkeit (`Idle → Configuring`)
    pub fn configure(&mut self, level: Difficulty) -> Result<(), GameError> {
        self.ensure_configurable()?;
        self.emitter.configure(level);
        self.state = GameState::Configuring;
        Ok(())
    }

    /// Neue Session: Sequenz und Punkte zurücksetzen, Start-Muster zeigen
    pub async fn start(&mut self) -> Result<(), GameError> {
        match self.state {
            GameState::Configuring if self.emitter.difficulty().is_some() => {}
            GameState::Terminated => return Err(GameError::SessionTerminated),
            _ => return Err(GameError::NotConfigured),
        }
        self.sequence.clear();
        self.score = 0;
        if let Err(fault) = self.emitter.play_startup_pattern().await {
            return Err(self.abort(fault));
        }
        self.state = GameState::RoundPlayback;
        Ok(())
    }

    /// Eine komplette Runde: verlängern, abspielen, Eingabe prüfen
    ///
    /// Bei einem Fehler geht die Engine nach `Terminated`. Der Aufrufer meldet
    /// den Punktestand und zeigt danach
    /// [`play_failure_pattern`](Self::play_failure_pattern). Freigeben der Pins
    /// ist ebenfalls Sache des Aufrufers ([`release_all`](Self::release_all)).
    pub async fn play_round(&mut self) -> Result<RoundOutcome, GameError> {
        match self.state {
            GameState::RoundPlayback => {}
            GameState::Terminated => return Err(GameError::SessionTerminated),
            _ => return Err(GameError::NotConfigured),
        }

        let next = pick_channel(&mut self.rng);
        if self.sequence.push(next).is_err() {
            self.state = GameState::Terminated;
            return Ok(RoundOutcome::SequenceExhausted { score: self.score });
        }

        if let Err(fault) = self.emitter.play_sequence(&self.sequence).await {
            return Err(self.abort(fault));
        }

        self.state = GameState::RoundInput;
        let result = match self.read_round().await {
            Ok(result) => result,
            Err(fault) => return Err(self.abort(fault)),
        };
        match result {
            RoundResult::Success => {
                self.score += 1;
                self.state = GameState::RoundPlayback;
                Ok(RoundOutcome::Continue { score: self.score })
            }
            RoundResult::Failure { position } => {
                self.state = GameState::Terminated;
                Ok(RoundOutcome::GameOver {
                    score: self.score,
                    mismatch_at: position,
                })
            }
        }
    }

    /// "Game Over"-Anzeige nach [`RoundOutcome::GameOver`]
    pub async fn play_failure_pattern(&mut self) -> Result<(), GameError> {
        if let Err(fault) = self.emitter.play_failure_pattern().await {
            return Err(self.abort(fault));
        }
        Ok(())
    }

    /// Pause zwischen zwei erfolgreichen Runden
    pub async fn pause_between_rounds(&mut self) {
        self.delay.delay_ms(ROUND_PAUSE_MS).await;
    }

    /// Pins freigeben und Session beenden
    ///
    /// Fehler beim Freigeben werden an den Aufrufer gegeben, der sie
    /// ignorieren darf; ein zweiter Aufruf ist harmlos.
    pub fn release_all(&mut self) -> Result<(), HardwareFault> {
        self.state = GameState::Terminated;
        self.emitter.release_all()
    }

    async fn read_round(&mut self) -> Result<RoundResult, HardwareFault> {
        for (position, &expected) in self.sequence.iter().enumerate() {
            let entered = self.input.await_channel().await?;
            if entered != expected {
                return Ok(RoundResult::Failure { position });
            }
        }
        Ok(RoundResult::Success)
    }

    fn ensure_configurable(&self) -> Result<(), GameError> {
        match self.state {
            GameState::Idle | GameState::Configuring => Ok(()),
            GameState::Terminated => Err(GameError::SessionTerminated),
            state => Err(GameError::ConfigurationLocked(state)),
        }
    }

    /// Hardware-Fehler sind fatal für die Session
    fn abort(&mut self, fault: HardwareFault) -> GameError {
        self.state = GameState::Terminated;
        GameError::Hardware(fault)
    }
}
