//! # Drag Reorder
//!
//! Tracks one pointer-drag gesture over the block list and turns a drop into
//! a single `move_block(from, to)` call.
//!
//! ```text
//! Idle ──start(i)──▶ Dragging(i) ──over(j≠i)──▶ DraggingOver(i, j) ──over(k)──▶ DraggingOver(i, k)
//!   ▲                     │                              │
//!   └──── drop / end ─────┴──────────────────────────────┘
//! ```
//!
//! The machine has no side effects besides the one move on a successful
//! drop. Hovering the current target again reports no change so the UI does
//! not re-render for every pointer event.

use serde::Serialize;

/// Gesture state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        source: usize,
    },
    DraggingOver {
        source: usize,
        target: usize,
    },
}

/// What `drag_end` means when no `drop` preceded it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragEndPolicy {
    /// The gesture was abandoned; nothing moves
    #[default]
    Cancel,
    /// Treat `drag_end` like a drop on the current target
    Commit,
}

/// A reorder produced by a completed gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlockMove {
    pub from: usize,
    pub to: usize,
}

/// Per-index visual state, derived from [`DragState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DragIndicator {
    /// The block being dragged ("lifted")
    pub is_source: bool,
    /// Where the block would land ("insertion indicator")
    pub is_drop_target: bool,
}

/// Receiver of the move produced by a drop
pub trait Reorder {
    type Error;

    fn move_block(&mut self, from: usize, to: usize) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, Default)]
pub struct DragReorder {
    state: DragState,
    policy: DragEndPolicy,
}

impl DragReorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: DragEndPolicy) -> Self {
        Self {
            state: DragState::Idle,
            policy,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn policy(&self) -> DragEndPolicy {
        self.policy
    }

    pub fn is_dragging(&self) -> bool {
        self.state != DragState::Idle
    }

    /// Begin a gesture on `index`. Starting while another gesture is active
    /// restarts it.
    pub fn drag_start(&mut self, index: usize) {
        self.state = DragState::Dragging { source: index };
    }

    /// Pointer is over `index`. Returns whether the state changed.
    pub fn drag_over(&mut self, index: usize) -> bool {
        let next = match self.state {
            DragState::Idle => return false,
            DragState::Dragging { source } if index == source => return false,
            DragState::Dragging { source } => DragState::DraggingOver {
                source,
                target: index,
            },
            DragState::DraggingOver { source, target } if index == target || index == source => {
                return false
            }
            DragState::DraggingOver { source, .. } => DragState::DraggingOver {
                source,
                target: index,
            },
        };
        self.state = next;
        true
    }

    /// The move a drop would perform right now
    pub fn pending_move(&self) -> Option<BlockMove> {
        match self.state {
            DragState::DraggingOver { source, target } if source != target => Some(BlockMove {
                from: source,
                to: target,
            }),
            _ => None,
        }
    }

    /// Drop on the current target. Invokes `target.move_block` at most once
    /// and always returns to `Idle`, even if the move fails.
    pub fn drop<R: Reorder>(&mut self, target: &mut R) -> Result<Option<BlockMove>, R::Error> {
        let pending = self.pending_move();
        self.state = DragState::Idle;

        match pending {
            Some(m) => {
                target.move_block(m.from, m.to)?;
                Ok(Some(m))
            }
            None => Ok(None),
        }
    }

    /// End of the gesture. After a drop the machine is already idle and this
    /// does nothing; otherwise behavior follows the [`DragEndPolicy`].
    pub fn drag_end<R: Reorder>(&mut self, target: &mut R) -> Result<Option<BlockMove>, R::Error> {
        match self.policy {
            DragEndPolicy::Commit => self.drop(target),
            DragEndPolicy::Cancel => {
                self.cancel();
                Ok(None)
            }
        }
    }

    /// Abandon the gesture without moving anything
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }

    pub fn is_source(&self, index: usize) -> bool {
        match self.state {
            DragState::Dragging { source } | DragState::DraggingOver { source, .. } => {
                source == index
            }
            DragState::Idle => false,
        }
    }

    pub fn is_drop_target(&self, index: usize) -> bool {
        matches!(self.state, DragState::DraggingOver { target, .. } if target == index)
    }

    pub fn indicator(&self, index: usize) -> DragIndicator {
        DragIndicator {
            is_source: self.is_source(index),
            is_drop_target: self.is_drop_target(index),
        }
    }
}
