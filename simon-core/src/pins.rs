//! Generische Pin-Adapter
//!
//! - [`RgbLedOutputs`]: drei Kanäle auf einer RGB-LED (je eine Farbkomponente)
//! - [`ButtonInputs`]: drei Taster mit Pull-up (gedrückt = LOW)

use embedded_hal::digital::InputPin;

use crate::error::HardwareFault;
use crate::logic::mix_channels;
use crate::traits::{SignalOutputs, SmartLedWriter, TriggerInputs};
use crate::types::{Channel, Level};

/// Signal-Ausgänge über eine einzelne SmartLED
///
/// Mehrere aktive Kanäle mischen sich (Rot + Grün = Gelb).
pub struct RgbLedOutputs<L> {
    led: L,
    brightness: u8,
    active: [bool; 3],
    released: bool,
}

impl<L: SmartLedWriter> RgbLedOutputs<L> {
    pub fn new(led: L, brightness: u8) -> Self {
        Self {
            led,
            brightness,
            active: [false; 3],
            released: false,
        }
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Zugriff auf den Writer (z.B. für Assertions in Tests)
    pub fn led(&self) -> &L {
        &self.led
    }
}

impl<L: SmartLedWriter> SignalOutputs for RgbLedOutputs<L> {
    fn set_output(&mut self, channel: Channel, level: Level) -> Result<(), HardwareFault> {
        if self.released {
            return Err(HardwareFault::Released);
        }
        self.active[channel.index()] = level == Level::Active;
        self.led.write(mix_channels(self.active, self.brightness))?;
        Ok(())
    }

    fn release_all(&mut self) -> Result<(), HardwareFault> {
        if self.released {
            return Ok(());
        }
        self.released = true;
        self.active = [false; 3];
        self.led.write(mix_channels(self.active, 0))?;
        Ok(())
    }
}

/// Taster-Eingänge, Index = [`Channel::index`]
///
/// Erwartet Pull-up Beschaltung: gedrückt zieht den Pin auf LOW.
pub struct ButtonInputs<B> {
    buttons: [B; 3],
}

impl<B: InputPin> ButtonInputs<B> {
    /// Reihenfolge: `[rot, grün, blau]`
    pub fn new(buttons: [B; 3]) -> Self {
        Self { buttons }
    }
}

impl<B: InputPin> TriggerInputs for ButtonInputs<B> {
    fn read_input(&mut self, channel: Channel) -> Result<Level, HardwareFault> {
        let pressed = self.buttons[channel.index()]
            .is_low()
            .map_err(|_| HardwareFault::InputFailed)?;
        Ok(if pressed { Level::Active } else { Level::Inactive })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::LedError;
    use core::convert::Infallible;
    use rgb::RGB8;

    #[derive(Default)]
    struct LastColor {
        color: Option<RGB8>,
        writes: usize,
        fail: bool,
    }

    impl SmartLedWriter for LastColor {
        fn write(&mut self, color: RGB8) -> Result<(), LedError> {
            if self.fail {
                return Err(LedError::WriteFailed);
            }
            self.color = Some(color);
            self.writes += 1;
            Ok(())
        }
    }

    struct FixedPin(bool);

    impl embedded_hal::digital::ErrorType for FixedPin {
        type Error = Infallible;
    }

    impl InputPin for FixedPin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Ok(self.0)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.0)
        }
    }

    #[test]
    fn test_rgb_outputs_mix_channels() {
        let mut outputs = RgbLedOutputs::new(LastColor::default(), 10);
        outputs.set_output(Channel::Red, Level::Active).unwrap();
        outputs.set_output(Channel::Blue, Level::Active).unwrap();
        assert_eq!(outputs.led().color, Some(RGB8 { r: 10, g: 0, b: 10 }));

        outputs.set_output(Channel::Red, Level::Inactive).unwrap();
        assert_eq!(outputs.led().color, Some(RGB8 { r: 0, g: 0, b: 10 }));
    }

    #[test]
    fn test_rgb_outputs_release_is_idempotent() {
        let mut outputs = RgbLedOutputs::new(LastColor::default(), 10);
        outputs.set_output(Channel::Green, Level::Active).unwrap();

        assert_eq!(outputs.release_all(), Ok(()));
        assert_eq!(outputs.release_all(), Ok(()));
        assert!(outputs.is_released());
        assert_eq!(outputs.led().color, Some(RGB8 { r: 0, g: 0, b: 0 }));
        // Nur ein Schreibvorgang für die Freigabe
        assert_eq!(outputs.led().writes, 2);
    }

    #[test]
    fn test_rgb_outputs_fail_after_release() {
        let mut outputs = RgbLedOutputs::new(LastColor::default(), 10);
        outputs.release_all().unwrap();
        assert_eq!(
            outputs.set_output(Channel::Red, Level::Active),
            Err(HardwareFault::Released)
        );
    }

    #[test]
    fn test_rgb_outputs_write_failure_is_hardware_fault() {
        let mut outputs = RgbLedOutputs::new(
            LastColor {
                fail: true,
                ..LastColor::default()
            },
            10,
        );
        assert_eq!(
            outputs.set_output(Channel::Red, Level::Active),
            Err(HardwareFault::OutputFailed)
        );
    }

    #[test]
    fn test_button_inputs_active_low() {
        let mut inputs = ButtonInputs::new([FixedPin(true), FixedPin(false), FixedPin(true)]);
        assert_eq!(inputs.read_input(Channel::Red), Ok(Level::Inactive));
        assert_eq!(inputs.read_input(Channel::Green), Ok(Level::Active));
        assert_eq!(inputs.read_input(Channel::Blue), Ok(Level::Inactive));
    }
}
