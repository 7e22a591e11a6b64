// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use embassy_executor::Spawner;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Input, InputConfig, Pull};
use esp_hal::rng::Rng;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

use defmt::info;

// Projekt-Module und Konfiguration
use simon_says::AbortSignal;
use simon_says::config::{
    ABORT_GPIO_PIN, BUTTON_BLUE_GPIO_PIN, BUTTON_GREEN_GPIO_PIN, BUTTON_RED_GPIO_PIN,
    IDLE_SLEEP_SECS, LED_GPIO_PIN,
};
use simon_says::tasks::{abort_task, game_task};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Abbruch-Signal zwischen Abort Task und Game Task
static ABORT: AbortSignal = Signal::new();

/// Main Entry Point
///
/// Initialisiert Hardware, startet Embassy Runtime und spawnt Tasks.
/// Danach schläft main() - alle Arbeit läuft in Tasks.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // Taster: schalten gegen GND, daher interner Pull-up
    let button_config = InputConfig::default().with_pull(Pull::Up);
    let red = Input::new(peripherals.GPIO4, button_config);
    let green = Input::new(peripherals.GPIO5, button_config);
    let blue = Input::new(peripherals.GPIO6, button_config);
    let boot = Input::new(peripherals.GPIO9, button_config);

    info!(
        "Simon Says: LED GPIO{}, Taster R/G/B GPIO{}/{}/{}, Abbruch GPIO{}",
        LED_GPIO_PIN, BUTTON_RED_GPIO_PIN, BUTTON_GREEN_GPIO_PIN, BUTTON_BLUE_GPIO_PIN,
        ABORT_GPIO_PIN
    );

    // Hardware RNG für die Sequenz
    let rng = Rng::new();

    // Spawn Game Task (LED, Taster, RNG und Abbruch-Signal)
    spawner
        .spawn(game_task(
            peripherals.GPIO8,
            peripherals.RMT,
            [red, green, blue],
            rng,
            &ABORT,
        ))
        .unwrap();

    // Spawn Abort Task (BOOT-Taster)
    spawner.spawn(abort_task(boot, &ABORT)).unwrap();

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(IDLE_SLEEP_SECS)).await;
    }
}
