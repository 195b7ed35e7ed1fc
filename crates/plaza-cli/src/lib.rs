// NOTE: plaza Architecture Rationale
//
// Why One State Record Per Post (not global comment state)?
// - The original page gives each post its own comment thread; nothing is
//   shared across posts, so the app holds a Vec<CommentThread> parallel to
//   the post list and every event mutates exactly one thread
//
// Why a Single-Threaded Event Loop (not async)?
// - All work is keystroke-driven and completes within one loop turn
// - crossterm poll with a tick timeout covers redraw without a runtime
//
// Why Components (not one draw function)?
// - header / sidebar / post / comment form / comment list map one-to-one to
//   the original page regions, and each renders from the same AppState

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod tui;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
