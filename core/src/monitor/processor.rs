//! Roll monitor: drains loot events into the roll book on every tick.
//!
//! The live `RollBook` never leaves this type. Readers only ever see the
//! published snapshot, a deep copy replaced after every applied event and
//! again after each sweep.

use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, RwLock};

use crate::error::{RollError, panic_message};
use crate::events::{EventQueue, LootEvent, LootEventSender};
use crate::host::RollHost;
use crate::rolls::{FoldContext, FoldOutcome, LootRoll, RollBook};

/// Context strings passed to [`RollHost::report_error`].
pub const FOLD_ERROR_CONTEXT: &str = "failed to process roll";
pub const SWEEP_ERROR_CONTEXT: &str = "failed to remove old rolls";

/// Counts from one drain pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrainReport {
    pub applied: usize,
    pub dropped: usize,
    pub faulted: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub drain: DrainReport,
    /// Events still queued because processing paused mid-drain.
    pub remaining: usize,
    /// None when the sweep was skipped.
    pub evicted: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Another tick was still running.
    Skipped,
    /// Disabled, or paused for combat. Nothing was touched.
    Waiting,
    Processed(TickReport),
}

/// Clears the in-progress flag when the tick body exits, panics included.
struct ProcessingGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> ProcessingGuard<'a> {
    fn try_acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for ProcessingGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

pub struct RollMonitor {
    pub(super) host: Arc<dyn RollHost>,
    queue: EventQueue,
    book: Mutex<RollBook>,
    snapshot: RwLock<Arc<Vec<LootRoll>>>,
    is_processing: AtomicBool,
    is_rolling: AtomicBool,
}

impl RollMonitor {
    pub fn new(host: Arc<dyn RollHost>) -> Self {
        Self {
            host,
            queue: EventQueue::new(),
            book: Mutex::new(RollBook::new()),
            snapshot: RwLock::new(Arc::new(Vec::new())),
            is_processing: AtomicBool::new(false),
            is_rolling: AtomicBool::new(false),
        }
    }

    // --- Producer side ---

    pub fn enqueue(&self, event: LootEvent) {
        self.queue.enqueue(event);
    }

    pub fn sender(&self) -> LootEventSender {
        self.queue.sender()
    }

    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    // --- Consumer side ---

    /// Latest published rolls, in insertion order.
    pub fn snapshot(&self) -> Arc<Vec<LootRoll>> {
        Arc::clone(&self.snapshot.read().unwrap_or_else(|e| e.into_inner()))
    }

    /// Whether the last sweep left any rolls on the book.
    pub fn is_rolling(&self) -> bool {
        self.is_rolling.load(Ordering::Acquire)
    }

    // --- Processing ---

    /// Disabled, or combat-restricted while in combat.
    pub fn should_wait(&self) -> bool {
        let config = self.host.config();
        if !config.enabled {
            return true;
        }
        config.restrict_in_combat && self.host.in_combat()
    }

    /// Run one tick: drain, sweep, publish.
    ///
    /// Overlapping calls return [`TickOutcome::Skipped`] without waiting.
    pub fn on_tick(&self) -> TickOutcome {
        if self.is_processing.load(Ordering::Acquire) {
            return TickOutcome::Skipped;
        }
        if self.should_wait() {
            return TickOutcome::Waiting;
        }
        let Some(_guard) = ProcessingGuard::try_acquire(&self.is_processing) else {
            return TickOutcome::Skipped;
        };

        let drain = self.drain_and_fold();
        let evicted = if self.should_wait() {
            None
        } else {
            let evicted = self.sweep();
            self.publish_snapshot();
            Some(evicted)
        };

        let report = TickReport {
            drain,
            remaining: self.queue.len(),
            evicted,
        };
        if drain != DrainReport::default() || evicted.is_some_and(|n| n > 0) {
            tracing::debug!(
                applied = drain.applied,
                dropped = drain.dropped,
                faulted = drain.faulted,
                remaining = report.remaining,
                evicted = ?evicted,
                "Roll monitor tick"
            );
        }
        TickOutcome::Processed(report)
    }

    /// Fold queued events until the queue is empty or processing must pause.
    pub fn drain_and_fold(&self) -> DrainReport {
        let mut report = DrainReport::default();
        let mut book = self.lock_book();

        while !self.should_wait() {
            let Some(event) = self.queue.try_dequeue() else {
                break;
            };
            match self.fold_event(&mut book, &event) {
                Ok(FoldOutcome::Applied) => {
                    report.applied += 1;
                    self.publish(&book);
                }
                Ok(FoldOutcome::Dropped(reason)) => {
                    report.dropped += 1;
                    tracing::trace!(
                        item_id = event.item_id,
                        event = event.event_type().as_str(),
                        ?reason,
                        "Dropped loot event"
                    );
                }
                Err(err) => {
                    report.faulted += 1;
                    self.host.report_error(&err, FOLD_ERROR_CONTEXT);
                }
            }
        }

        report
    }

    fn fold_event(&self, book: &mut RollBook, event: &LootEvent) -> Result<FoldOutcome, RollError> {
        let host = self.host.as_ref();
        panic::catch_unwind(AssertUnwindSafe(|| {
            let ctx = FoldContext::new(host);
            book.apply(event, &ctx)
        }))
        .map_err(|payload| RollError::FoldPanicked {
            event: event.event_type().as_str(),
            item_id: event.item_id,
            message: panic_message(payload.as_ref()),
        })
    }

    /// Evict expired rolls. Returns how many were removed.
    pub fn sweep(&self) -> usize {
        let mut book = self.lock_book();
        let host = self.host.as_ref();

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let config = host.config();
            book.sweep(host.now(), &config)
        }));
        self.is_rolling.store(!book.is_empty(), Ordering::Release);

        match result {
            Ok(evicted) => evicted,
            Err(payload) => {
                let err = RollError::SweepPanicked {
                    message: panic_message(payload.as_ref()),
                };
                self.host.report_error(&err, SWEEP_ERROR_CONTEXT);
                0
            }
        }
    }

    /// Replace the published snapshot with a copy of the live book.
    pub fn publish_snapshot(&self) {
        let book = self.lock_book();
        self.publish(&book);
    }

    fn publish(&self, book: &RollBook) {
        let copy = Arc::new(book.snapshot());
        *self.snapshot.write().unwrap_or_else(|e| e.into_inner()) = copy;
    }

    fn lock_book(&self) -> MutexGuard<'_, RollBook> {
        // A panic mid-fold leaves the book structurally valid
        self.book.lock().unwrap_or_else(|e| e.into_inner())
    }
}
