//! Roll records and the fold that maintains them
//!
//! ```text
//!   LootEvent ──► RollBook::apply ──► LootRoll { rollers, rollers_display, winner }
//!                                          │
//!                         RollBook::sweep (pending / won timeouts)
//! ```

mod book;
pub mod display;
mod roll;


pub use book::{DropReason, FoldContext, FoldOutcome, RollBook};
pub use display::{DisplayOptions, render_rollers};
pub use roll::{LootRoll, LootRoller};
