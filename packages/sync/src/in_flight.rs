//! Pending-operation tracking.
//!
//! Save and publish share the document slot, so at most one write to the
//! website record is outstanding. The assistant has a slot of its own. A
//! request for a busy slot fails with [`SyncError::Busy`] before reaching the
//! store.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use strum::{AsRefStr, Display};
use tracing::debug;

use crate::errors::SyncError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Operation {
    Load,
    Save,
    Publish,
    Assistant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Slot {
    Document,
    Assistant,
}

impl Operation {
    fn slot(self) -> Slot {
        match self {
            Operation::Load | Operation::Save | Operation::Publish => Slot::Document,
            Operation::Assistant => Slot::Assistant,
        }
    }
}

/// Shared handle; clones observe the same slots
#[derive(Debug, Clone, Default)]
pub struct InFlight {
    slots: Arc<Mutex<HashMap<Slot, Operation>>>,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the slot of `op`. The slot is released when the guard drops.
    pub fn begin(&self, op: Operation) -> Result<InFlightGuard, SyncError> {
        let mut slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(holder) = slots.get(&op.slot()) {
            debug!(requested = %op, holder = %holder, "slot busy");
            return Err(SyncError::Busy(*holder));
        }
        slots.insert(op.slot(), op);

        Ok(InFlightGuard {
            slots: Arc::clone(&self.slots),
            slot: op.slot(),
        })
    }

    /// Whether `op` itself is currently running
    pub fn is_pending(&self, op: Operation) -> bool {
        let slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
        slots.get(&op.slot()) == Some(&op)
    }

    /// Whether any operation holds the slot `op` would need
    pub fn is_blocked(&self, op: Operation) -> bool {
        let slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
        slots.contains_key(&op.slot())
    }
}

#[derive(Debug)]
pub struct InFlightGuard {
    slots: Arc<Mutex<HashMap<Slot, Operation>>>,
    slot: Slot,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        let mut slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
        slots.remove(&self.slot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_blocks_publish() {
        let in_flight = InFlight::new();
        let guard = in_flight.begin(Operation::Save).unwrap();

        assert!(in_flight.is_pending(Operation::Save));
        assert!(!in_flight.is_pending(Operation::Publish));
        assert!(in_flight.is_blocked(Operation::Publish));
        assert!(matches!(
            in_flight.begin(Operation::Publish),
            Err(SyncError::Busy(Operation::Save))
        ));

        drop(guard);
        assert!(!in_flight.is_blocked(Operation::Publish));
        assert!(in_flight.begin(Operation::Publish).is_ok());
    }

    #[test]
    fn test_assistant_slot_is_independent() {
        let in_flight = InFlight::new();
        let _save = in_flight.begin(Operation::Save).unwrap();

        let assistant = in_flight.clone().begin(Operation::Assistant);
        assert!(assistant.is_ok());
        assert!(in_flight.is_pending(Operation::Assistant));
    }
}
