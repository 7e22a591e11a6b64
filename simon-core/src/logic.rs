//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use rgb::RGB8;

use crate::traits::RandomSource;
use crate::types::{CHANNELS, Channel};

/// Zieht einen Kanal gleichverteilt aus [`CHANNELS`]
///
/// Rejection Sampling: Werte aus dem unvollständigen letzten Block
/// werden verworfen, damit jeder Kanal exakt dieselbe Chance hat.
pub fn pick_channel<R: RandomSource + ?Sized>(rng: &mut R) -> Channel {
    const COUNT: u32 = CHANNELS.len() as u32;
    let limit = u32::MAX - (u32::MAX % COUNT);
    loop {
        let value = rng.next_u32();
        if value < limit {
            return CHANNELS[(value % COUNT) as usize];
        }
    }
}

/// Mischt die aktiven Kanäle zu einer RGB-Farbe
///
/// Jeder Kanal steuert genau eine Farbkomponente: Rot + Grün = Gelb,
/// alle drei = Weiß.
pub fn mix_channels(active: [bool; 3], brightness: u8) -> RGB8 {
    let component = |channel: Channel| {
        if active[channel.index()] {
            brightness
        } else {
            0
        }
    };
    RGB8 {
        r: component(Channel::Red),
        g: component(Channel::Green),
        b: component(Channel::Blue),
    }
}
