// Task-Modul: Enthält alle Embassy Tasks
//
// Der Game Task spielt; der Abort Task wartet parallel auf den BOOT-Taster
// und meldet sich über ein Embassy Signal.

pub mod abort;
pub mod game;

// Re-export Tasks für einfachen Import
pub use abort::abort_task;
pub use game::game_task;
