//! Gemeinsame Mocks für die Integrationstests
//!
//! Alle Mocks schreiben in eine gemeinsame Timeline, damit Tests die
//! genaue Reihenfolge von Signalen, Pausen und Eingaben prüfen können.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embedded_hal_async::delay::DelayNs;
use rgb::RGB8;
use simon_core::{
    Channel, Difficulty, GameEngine, HardwareFault, InputSource, InterruptSignal, LedError, Level,
    RandomSource, SessionObserver, SignalEmitter, SignalOutputs, SmartLedWriter, TriggerInputs,
};

pub type Signal = InterruptSignal<NoopRawMutex>;

// ============================================================================
// Timeline
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    On(Channel),
    Off(Channel),
    Delay(u32),
    Pressed(Channel),
    Release,
    /// Finaler Punktestand an den Observer gemeldet
    GameOver(u32),
}

pub type Timeline = Rc<RefCell<Vec<Event>>>;

pub fn timeline() -> Timeline {
    Rc::new(RefCell::new(Vec::new()))
}

// ============================================================================
// Mock LED Writer
// ============================================================================

#[derive(Default)]
pub struct MockLedWriter {
    pub last_color: Option<RGB8>,
    pub write_count: usize,
    pub fail_next_write: bool,
}

impl MockLedWriter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SmartLedWriter for MockLedWriter {
    fn write(&mut self, color: RGB8) -> Result<(), LedError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(LedError::WriteFailed);
        }

        self.last_color = Some(color);
        self.write_count += 1;
        Ok(())
    }
}

// ============================================================================
// Recording Outputs
// ============================================================================

pub struct RecordingOutputs {
    log: Timeline,
    /// Schlägt beim n-ten `set_output` fehl (0-basiert)
    pub fail_at: Option<usize>,
    pub set_count: usize,
    pub release_count: Rc<RefCell<usize>>,
}

impl RecordingOutputs {
    pub fn new(log: Timeline) -> Self {
        Self {
            log,
            fail_at: None,
            set_count: 0,
            release_count: Rc::new(RefCell::new(0)),
        }
    }
}

impl SignalOutputs for RecordingOutputs {
    fn set_output(&mut self, channel: Channel, level: Level) -> Result<(), HardwareFault> {
        if self.fail_at == Some(self.set_count) {
            return Err(HardwareFault::OutputFailed);
        }
        self.set_count += 1;
        self.log.borrow_mut().push(match level {
            Level::Active => Event::On(channel),
            Level::Inactive => Event::Off(channel),
        });
        Ok(())
    }

    fn release_all(&mut self) -> Result<(), HardwareFault> {
        *self.release_count.borrow_mut() += 1;
        self.log.borrow_mut().push(Event::Release);
        Ok(())
    }
}

// ============================================================================
// Scripted Inputs
// ============================================================================

/// Liefert vorgegebene Tastendrücke
///
/// Nach dem Skript-Ende löst jedes Lesen den Abbruch aus (falls gesetzt)
/// und meldet keinen Taster. Ohne Abbruch-Signal schlägt der Test fehl,
/// statt endlos auf einen Tastendruck zu warten.
pub struct ScriptedInputs {
    log: Timeline,
    presses: VecDeque<Channel>,
    interrupt_when_exhausted: Option<Rc<Signal>>,
    pub fail_reads: bool,
}

impl ScriptedInputs {
    pub fn new(log: Timeline, presses: &[Channel]) -> Self {
        Self {
            log,
            presses: presses.iter().copied().collect(),
            interrupt_when_exhausted: None,
            fail_reads: false,
        }
    }

    pub fn interrupt_when_exhausted(mut self, signal: Rc<Signal>) -> Self {
        self.interrupt_when_exhausted = Some(signal);
        self
    }
}

impl TriggerInputs for ScriptedInputs {
    fn read_input(&mut self, channel: Channel) -> Result<Level, HardwareFault> {
        if self.fail_reads {
            return Err(HardwareFault::InputFailed);
        }
        match self.presses.front() {
            Some(&next) if next == channel => {
                self.presses.pop_front();
                self.log.borrow_mut().push(Event::Pressed(channel));
                Ok(Level::Active)
            }
            Some(_) => Ok(Level::Inactive),
            None => match &self.interrupt_when_exhausted {
                Some(signal) => {
                    signal.signal(());
                    Ok(Level::Inactive)
                }
                None => panic!("Tastendruck erwartet, aber das Skript ist leer"),
            },
        }
    }
}

// ============================================================================
// Recording Delay
// ============================================================================

/// Zeichnet Pausen auf statt zu warten
///
/// Gibt pro Pause einmal die Kontrolle ab, damit `select` das
/// Abbruch-Signal sehen kann.
pub struct RecordingDelay {
    log: Timeline,
}

impl RecordingDelay {
    pub fn new(log: Timeline) -> Self {
        Self { log }
    }
}

impl DelayNs for RecordingDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.delay_ms(ns / 1_000_000).await;
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(Event::Delay(ms));
        embassy_futures::yield_now().await;
    }
}

// ============================================================================
// Scripted RNG
// ============================================================================

pub struct ScriptedRng {
    values: VecDeque<u32>,
}

impl ScriptedRng {
    pub fn new(values: &[u32]) -> Self {
        Self {
            values: values.iter().copied().collect(),
        }
    }
}

impl RandomSource for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        self.values.pop_front().unwrap_or(0)
    }
}

// ============================================================================
// Recording Observer
// ============================================================================

#[derive(Default, Debug)]
pub struct RecordingObserver {
    /// Optional: Game Over zusätzlich in die Timeline schreiben
    pub log: Option<Timeline>,
    pub difficulty: Option<Difficulty>,
    pub scores: Vec<u32>,
    pub game_over: Option<(u32, usize)>,
    pub exhausted: Option<u32>,
    pub interrupted: Option<u32>,
    pub faulted: Option<(u32, HardwareFault)>,
}

impl RecordingObserver {
    pub fn with_log(log: Timeline) -> Self {
        Self {
            log: Some(log),
            ..Self::default()
        }
    }
}

impl SessionObserver for RecordingObserver {
    fn difficulty_selected(&mut self, level: Difficulty) {
        self.difficulty = Some(level);
    }

    fn round_completed(&mut self, score: u32) {
        self.scores.push(score);
    }

    fn game_over(&mut self, score: u32, mismatch_at: usize) {
        self.game_over = Some((score, mismatch_at));
        if let Some(log) = &self.log {
            log.borrow_mut().push(Event::GameOver(score));
        }
    }

    fn sequence_exhausted(&mut self, score: u32) {
        self.exhausted = Some(score);
    }

    fn interrupted(&mut self, score: u32) {
        self.interrupted = Some(score);
    }

    fn faulted(&mut self, score: u32, fault: HardwareFault) {
        self.faulted = Some((score, fault));
    }
}

// ============================================================================
// Helpers
// ============================================================================

pub type TestEngine = GameEngine<RecordingOutputs, ScriptedInputs, RecordingDelay, ScriptedRng>;

pub fn build_engine<const N: usize>(
    log: &Timeline,
    outputs: RecordingOutputs,
    inputs: ScriptedInputs,
    rng: &[u32],
) -> GameEngine<RecordingOutputs, ScriptedInputs, RecordingDelay, ScriptedRng, N> {
    GameEngine::new(
        SignalEmitter::new(outputs, RecordingDelay::new(log.clone())),
        InputSource::new(inputs, RecordingDelay::new(log.clone())),
        RecordingDelay::new(log.clone()),
        ScriptedRng::new(rng),
    )
}

/// Standard-Engine mit aufzeichnenden Mocks
pub fn engine(presses: &[Channel], rng: &[u32]) -> (TestEngine, Timeline) {
    let log = timeline();
    let engine = build_engine(
        &log,
        RecordingOutputs::new(log.clone()),
        ScriptedInputs::new(log.clone(), presses),
        rng,
    );
    (engine, log)
}

/// Kanal aus einem Zufallswert (ohne den verworfenen Randwert)
pub fn channel_for(value: u32) -> Channel {
    simon_core::CHANNELS[(value % 3) as usize]
}

/// Irgendein anderer Kanal als `channel`
pub fn other_than(channel: Channel) -> Channel {
    simon_core::CHANNELS[(channel.index() + 1) % 3]
}

/// Erwartete Timeline des Fehler-Musters (3x alle an/aus)
pub fn failure_pattern() -> Vec<Event> {
    let mut events = Vec::new();
    for _ in 0..3 {
        events.extend(simon_core::CHANNELS.map(Event::On));
        events.push(Event::Delay(300));
        events.extend(simon_core::CHANNELS.map(Event::Off));
        events.push(Event::Delay(300));
    }
    events
}

/// Alle Signal-Aktivierungen (On-Events) der Timeline
pub fn emitted(log: &Timeline) -> Vec<Channel> {
    log.borrow()
        .iter()
        .filter_map(|event| match event {
            Event::On(channel) => Some(*channel),
            _ => None,
        })
        .collect()
}
