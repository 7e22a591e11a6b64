// Hardware-Zufallsquelle für die Kanalauswahl

use esp_hal::rng::Rng;
use simon_core::RandomSource;

/// Wrapper um den ESP32 Hardware-RNG
///
/// Mit aktivem Radio/ADC liefert der RNG echte Zufallswerte; für ein Spiel
/// reicht er auch ohne.
pub struct HardwareRng {
    rng: Rng,
}

impl HardwareRng {
    pub fn new(rng: Rng) -> Self {
        Self { rng }
    }
}

impl RandomSource for HardwareRng {
    fn next_u32(&mut self) -> u32 {
        self.rng.random()
    }
}
