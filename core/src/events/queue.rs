//! Multi-producer, single-consumer loot event queue.
//!
//! Producers get a cloneable [`LootEventSender`]; the roll monitor owns the
//! receiving half and drains it from inside its tick guard.

use std::sync::Mutex;

use tokio::sync::mpsc;

use super::LootEvent;

/// Cloneable producer handle. Sending never blocks.
#[derive(Debug, Clone)]
pub struct LootEventSender {
    tx: mpsc::UnboundedSender<LootEvent>,
}

impl LootEventSender {
    /// Append an event. Returns false only if the queue has been dropped.
    pub fn send(&self, event: LootEvent) -> bool {
        self.tx.send(event).is_ok()
    }
}

#[derive(Debug)]
pub struct EventQueue {
    tx: mpsc::UnboundedSender<LootEvent>,
    rx: Mutex<mpsc::UnboundedReceiver<LootEvent>>,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl EventQueue {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            tx,
            rx: Mutex::new(rx),
        }
    }

    pub fn sender(&self) -> LootEventSender {
        LootEventSender {
            tx: self.tx.clone(),
        }
    }

    pub fn enqueue(&self, event: LootEvent) {
        // The receiver lives as long as `self`, so this cannot fail
        let _ = self.tx.send(event);
    }

    /// Remove the oldest event, if any. Never waits.
    pub fn try_dequeue(&self) -> Option<LootEvent> {
        self.rx
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .try_recv()
            .ok()
    }

    pub fn len(&self) -> usize {
        self.rx.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
