// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen

// ============================================================================
// Signal-LED Konfiguration
// ============================================================================

/// GPIO-Pin für die RGB LED (WS2812/Neopixel, onboard beim DevKitC-1)
/// Rot, Grün und Blau sind die drei Signal-Kanäle des Spiels
pub const LED_GPIO_PIN: u8 = 8;

/// Helligkeits-Level pro Farbkanal (0-255)
/// Wert ist gedimmt für Augenschonung
pub const LED_BRIGHTNESS: u8 = 10;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

// ============================================================================
// Taster Konfiguration
// ============================================================================
//
// Alle Taster schalten gegen GND, interner Pull-up aktiv.
// Die Pins werden in main.rs über `peripherals.GPIOx` belegt;
// die Nummern hier dienen der Dokumentation und dem Boot-Log.

/// Taster für Kanal Rot (wählt beim Start "leicht")
pub const BUTTON_RED_GPIO_PIN: u8 = 4;

/// Taster für Kanal Grün (wählt beim Start "mittel")
pub const BUTTON_GREEN_GPIO_PIN: u8 = 5;

/// Taster für Kanal Blau (wählt beim Start "schwer")
pub const BUTTON_BLUE_GPIO_PIN: u8 = 6;

/// BOOT-Taster des DevKits - bricht das laufende Spiel ab
pub const ABORT_GPIO_PIN: u8 = 9;

// ============================================================================
// Spiel-Konfiguration
// ============================================================================

/// Vorgegebene Schwierigkeit (`easy`/`medium`/`hard`)
/// Wird zur Build-Zeit aus der Environment Variable SIMON_DIFFICULTY geladen.
/// Nicht gesetzt → Auswahl per Taster beim Start.
pub const PRESET_DIFFICULTY: Option<&str> = option_env!("SIMON_DIFFICULTY");

/// Wartezeit nach Spielende, bevor die Hauptschleife schlafen geht (Sekunden)
pub const IDLE_SLEEP_SECS: u64 = 3600;
