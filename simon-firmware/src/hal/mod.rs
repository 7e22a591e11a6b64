// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul implementiert die Traits aus simon-core für das ESP32-C6.
// Taster brauchen keinen eigenen Adapter: esp_hal::gpio::Input implementiert
// embedded_hal::digital::InputPin und passt direkt in simon_core::ButtonInputs.

pub mod led_writer;
pub mod rng;

pub use led_writer::RmtLedWriter;
pub use rng::HardwareRng;
