// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_reorder --heading-base-level=0

//! Understory Reorder: a deterministic, `no_std` drag-to-reorder state machine.
//!
//! ## Overview
//!
//! This crate tracks a long-press-and-drag interaction over a flat, vertically stacked list and
//! decides when the list is mutated. It does not draw, animate, or hit test.
//! Instead, a rendering layer feeds it pointer samples that already carry a resolved slot
//! (for example from [`RowLayout::slot_at`](crate::rows::RowLayout::slot_at)), and it returns
//! declarative [`ReorderIntent`](crate::types::ReorderIntent) values for the rendering layer to act on.
//!
//! ## State machine
//!
//! [`ReorderController`](crate::controller::ReorderController) moves through three states:
//!
//! - `Idle`: no drag. Stray moves and ends are ignored.
//! - `Dragging`: a [`DragSession`](crate::session::DragSession) exists. Each move updates the ghost, and
//!   each slot boundary crossed moves the dragged item by exactly one
//!   [`OrderedList::move_item`](crate::list::OrderedList::move_item).
//! - `Settling`: the finish visual is in flight. New drags are rejected until the rendering layer
//!   reports [`finish_complete`](crate::controller::ReorderController::finish_complete).
//!
//! ## Layering
//!
//! The controller owns the list and the session; the rendering layer owns the ghost, row
//! visibility, and every animation. Cosmetic constants live in
//! [`VisualStyle`](crate::style::VisualStyle), which only the rendering layer reads.
//!
//! ## Minimal example
//!
//! ```
//! use understory_reorder::controller::ReorderController;
//! use understory_reorder::session::SessionId;
//! use understory_reorder::types::ReorderIntent;
//!
//! let mut c = ReorderController::new([1, 2, 3, 4, 5]);
//! assert_eq!(
//!     c.start(25.0, Some(0)),
//!     vec![ReorderIntent::BeginDragVisual { slot: 0, session: SessionId(0) }]
//! );
//! let out = c.pointer_moved(130.0, Some(2));
//! assert_eq!(
//!     out,
//!     vec![
//!         ReorderIntent::UpdateGhostPosition { y: 130.0 },
//!         ReorderIntent::CommitMove { from: 0, to: 2 },
//!     ]
//! );
//! assert_eq!(c.end(), vec![ReorderIntent::BeginFinishVisual { slot: 2 }]);
//! // The lift visual was never reported complete, so the row is revealed on the way out.
//! assert_eq!(
//!     c.finish_complete(),
//!     vec![ReorderIntent::RevealRow { slot: 2 }, ReorderIntent::DragSessionEnded]
//! );
//! assert_eq!(c.list().as_slice(), &[2, 3, 1, 4, 5]);
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to Kurbo's `std` feature.
//! - `libm`: use Kurbo's `libm` backend for `no_std` builds.
//! - `tracing`: emit `debug`/`trace` records for transitions and absorbed input.
//! - `serde`: derive serialization for [`VisualStyle`](crate::style::VisualStyle) and the event vocabulary.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod controller;
pub mod list;
pub mod rows;
pub mod session;
pub mod style;
pub mod types;
