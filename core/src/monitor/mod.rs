mod processor;
mod timer;


pub use processor::{
    DrainReport, FOLD_ERROR_CONTEXT, RollMonitor, SWEEP_ERROR_CONTEXT, TickOutcome, TickReport,
};
pub use timer::TickerHandle;
