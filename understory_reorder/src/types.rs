// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the reorder protocol: controller states, input events, and output intents.
//!
//! ## Overview
//!
//! The rendering layer speaks to the [`controller`](crate::controller) in [`DragEvent`]s and
//! receives [`ReorderIntent`]s back. Slots are plain `usize` indices into the
//! [`OrderedList`](crate::list::OrderedList); a slot of `None` means the pointer is over no row.

use crate::session::SessionId;

/// Coarse state of a [`ReorderController`](crate::controller::ReorderController).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReorderState {
    /// No drag in progress.
    Idle,
    /// A drag session is active and following the pointer.
    Dragging,
    /// The drag has ended and the finish visual is still in flight.
    Settling,
}

/// Input from the gesture/rendering layer.
///
/// Positions are vertical offsets in the list's coordinate space. Slots are resolved by the
/// caller (see [`RowLayout::slot_at`](crate::rows::RowLayout::slot_at)); the controller does no
/// geometry of its own.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragEvent {
    /// Long press recognized at `y`, over `slot` if any.
    Start {
        /// Vertical pointer offset.
        y: f64,
        /// Slot under the pointer.
        slot: Option<usize>,
    },
    /// Pointer moved to `y`, now over `slot` if any.
    Move {
        /// Vertical pointer offset.
        y: f64,
        /// Slot under the pointer.
        slot: Option<usize>,
    },
    /// Pointer released.
    End,
    /// Gesture cancelled by the system.
    Cancel,
    /// The lift visual started by [`ReorderIntent::BeginDragVisual`] finished.
    LiftComplete {
        /// Session named by the `BeginDragVisual` that started the lift.
        session: SessionId,
    },
    /// The finish visual started by [`ReorderIntent::BeginFinishVisual`] finished.
    FinishComplete,
}

/// Declarative output for the rendering layer.
///
/// Returned in emission order from every controller handler.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReorderIntent {
    /// Snapshot the row at `slot`, show the ghost over it, and fade the row out.
    BeginDragVisual {
        /// Origin slot of the drag.
        slot: usize,
        /// Session to quote back in the lift completion.
        session: SessionId,
    },
    /// Move the ghost to vertical offset `y`.
    UpdateGhostPosition {
        /// Vertical pointer offset.
        y: f64,
    },
    /// The item at `from` now lives at `to`; move the row to match.
    CommitMove {
        /// Slot the item left.
        from: usize,
        /// Slot the item now occupies.
        to: usize,
    },
    /// Animate the ghost back onto the row at `slot` and fade it out.
    ///
    /// Answer with [`ReorderController::finish_complete`](crate::controller::ReorderController::finish_complete)
    /// exactly once.
    BeginFinishVisual {
        /// Slot the dragged item settled into.
        slot: usize,
    },
    /// The ghost now stands in for the row at `slot`; hide the row.
    HideRow {
        /// Slot of the dragged item.
        slot: usize,
    },
    /// Make the row at `slot` visible again.
    RevealRow {
        /// Slot of the dragged item.
        slot: usize,
    },
    /// The session is over; discard the ghost.
    DragSessionEnded,
}
