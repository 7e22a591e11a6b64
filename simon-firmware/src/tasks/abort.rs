// Abort Task - BOOT-Taster löst den Abbruch des laufenden Spiels aus
use defmt::info;
use esp_hal::gpio::Input;

use crate::AbortSignal;

/// Wartet auf eine fallende Flanke am BOOT-Taster und signalisiert den Abbruch
///
/// Der Game Task sieht das Signal an jedem Wartepunkt (Signal, Pause,
/// Tastenabfrage) und räumt danach die LED auf.
#[embassy_executor::task]
pub async fn abort_task(mut button: Input<'static>, abort: &'static AbortSignal) {
    button.wait_for_falling_edge().await;
    info!("BOOT-Taster gedrückt - Spiel wird abgebrochen");
    abort.signal(());
}
