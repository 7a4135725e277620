// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-drag session state.

bitflags::bitflags! {
    /// Progress of the visuals attached to a session.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct SessionFlags: u8 {
        /// The lift visual (ghost in, row out) has not completed yet.
        const LIFTING        = 0b0000_0001;
        /// A finish was requested while lifting; revealing the row is deferred.
        const PENDING_REVEAL = 0b0000_0010;
    }
}

/// Generation of a drag session.
///
/// Each session started by a [`ReorderController`](crate::controller::ReorderController) gets the
/// next id. It travels out in [`ReorderIntent::BeginDragVisual`](crate::types::ReorderIntent::BeginDragVisual)
/// and must come back with the matching lift completion, so a lift callback that outlives its
/// session can never be applied to a newer one.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionId(pub u32);

impl SessionId {
    pub(crate) const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Transient state of one drag, from start until its finish visual completes.
///
/// Only reachable through the `Dragging` and `Settling` states of
/// [`ReorderController`](crate::controller::ReorderController).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DragSession {
    id: SessionId,
    origin_slot: usize,
    current_slot: usize,
    flags: SessionFlags,
}

impl DragSession {
    /// Start session `id` on `slot`, with the lift visual in flight.
    pub(crate) fn new(id: SessionId, slot: usize) -> Self {
        Self {
            id,
            origin_slot: slot,
            current_slot: slot,
            flags: SessionFlags::LIFTING,
        }
    }

    /// Generation of this session.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Slot where the drag began.
    pub fn origin_slot(&self) -> usize {
        self.origin_slot
    }

    /// Slot the dragged item occupies now.
    pub fn current_slot(&self) -> usize {
        self.current_slot
    }

    /// Visual progress flags.
    pub fn flags(&self) -> SessionFlags {
        self.flags
    }

    /// Whether the lift visual is still in flight.
    pub fn is_lifting(&self) -> bool {
        self.flags.contains(SessionFlags::LIFTING)
    }

    /// Whether revealing the row has been deferred until the lift completes.
    pub fn pending_reveal(&self) -> bool {
        self.flags.contains(SessionFlags::PENDING_REVEAL)
    }

    pub(crate) fn set_current_slot(&mut self, slot: usize) {
        self.current_slot = slot;
    }

    /// Mark the finish as requested. Returns `true` if the row can be revealed now.
    pub(crate) fn request_reveal(&mut self) -> bool {
        if self.is_lifting() {
            self.flags.insert(SessionFlags::PENDING_REVEAL);
            false
        } else {
            true
        }
    }

    /// Mark the lift as finished. Returns `true` if a deferred reveal is now due.
    pub(crate) fn finish_lift(&mut self) -> bool {
        self.flags.remove(SessionFlags::LIFTING);
        self.take_pending_reveal()
    }

    pub(crate) fn take_pending_reveal(&mut self) -> bool {
        let pending = self.pending_reveal();
        self.flags.remove(SessionFlags::PENDING_REVEAL);
        pending
    }
}
