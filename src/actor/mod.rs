//! Actor Model: Terminal input on its own thread, everything else on main.
//!
//! - **Input Actor**: Polls crossterm events, forwards them over a bounded
//!   channel
//! - **Engine**: Owns the terminal and the screen writer; the main loop pulls
//!   events from it, updates the application and presents frames
//!
//! ```text
//! ┌──────────────┐     InputEvent      ┌──────────────┐
//! │ Input Thread │ ─────────────────▶  │  Main Loop   │ ──▶ Root::evaluate
//! └──────────────┘                     │   (Engine)   │ ──▶ present(Buffer)
//!                                      └──────────────┘
//! ```
//!
//! Component state is `Rc` based and stays on the main thread.

mod engine;
mod input;
mod messages;

pub use engine::{Engine, EngineConfig};
pub use input::InputActor;
pub use messages::{InputEvent, KeyCode, KeyModifiers};
