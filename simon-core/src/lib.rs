//! Simon Core - Platform-agnostic Game Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Traits, die Spiel-Zustandsmaschine und generische
//! Adapter; Timing läuft über `embedded_hal_async::delay::DelayNs`.

#![no_std]

pub mod emitter;
pub mod engine;
pub mod error;
pub mod input;
pub mod logic;
pub mod pins;
pub mod policy;
pub mod session;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use emitter::SignalEmitter;
pub use engine::{GameEngine, MAX_SEQUENCE_LEN};
pub use error::{GameError, HardwareFault, InvalidConfiguration};
pub use input::InputSource;
pub use logic::{mix_channels, pick_channel};
pub use pins::{ButtonInputs, RgbLedOutputs};
pub use policy::{hold_duration_ms, hold_duration_ms_for, hold_duration_ms_for_name};
pub use session::{InterruptSignal, SessionObserver, run_session};
pub use traits::{LedError, RandomSource, SignalOutputs, SmartLedWriter, TriggerInputs};
pub use types::{
    CHANNELS, Channel, Difficulty, GameState, Level, RoundOutcome, RoundResult, SessionOutcome,
};
