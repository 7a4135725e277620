// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The reorder controller: owns the list, tracks one drag at a time, and emits intents.
//!
//! ## Usage
//!
//! 1) Resolve the slot under the pointer (for example with
//!    [`RowLayout::slot_at`](crate::rows::RowLayout::slot_at)).
//! 2) Feed each gesture sample to [`ReorderController::handle`] (or the per-event methods).
//! 3) Apply the returned [`ReorderIntent`]s in order, and report the completion of the lift and
//!    finish visuals back with [`ReorderController::lift_complete`] and
//!    [`ReorderController::finish_complete`].
//!
//! ## Transitions
//!
//! | From | Input | To | Intents |
//! |---|---|---|---|
//! | `Idle` | `start` over a slot | `Dragging` | `BeginDragVisual` |
//! | `Dragging` | `move` | `Dragging` | `UpdateGhostPosition`, then `CommitMove` if a slot was crossed |
//! | `Dragging` | `lift_complete` | `Dragging` | `HideRow` |
//! | `Dragging` | `end` / `cancel` | `Settling` | `BeginFinishVisual`, then `RevealRow` unless still lifting |
//! | `Settling` | `lift_complete` | `Settling` | deferred `RevealRow` |
//! | `Settling` | `finish_complete` | `Idle` | deferred `RevealRow` if still owed, then `DragSessionEnded` |
//!
//! Every other combination is absorbed without any state change. In particular `start` while
//! `Settling` is rejected, so a new session never races the previous session's finish callback.
//! Lift completions quote the [`SessionId`] from `BeginDragVisual`; one that arrives after its
//! session has ended is dropped instead of being applied to the next session.
//!
//! ## Example
//!
//! ```
//! use understory_reorder::controller::ReorderController;
//! use understory_reorder::types::{DragEvent, ReorderIntent, ReorderState};
//!
//! let mut c = ReorderController::new([1, 2, 3]);
//! let _ = c.handle(DragEvent::Start { y: 60.0, slot: Some(1) });
//! let _ = c.handle(DragEvent::Move { y: 10.0, slot: Some(0) });
//! let _ = c.handle(DragEvent::Move { y: 120.0, slot: Some(2) });
//! let _ = c.handle(DragEvent::End);
//! assert_eq!(c.state(), ReorderState::Settling);
//!
//! // A second drag cannot start until the first has settled.
//! assert!(c.handle(DragEvent::Start { y: 0.0, slot: Some(0) }).is_empty());
//!
//! let _ = c.handle(DragEvent::FinishComplete);
//! // 2 moved to the top, then from the top to the bottom.
//! assert_eq!(c.list().as_slice(), &[1, 3, 2]);
//! ```

use alloc::vec;
use alloc::vec::Vec;

use crate::list::OrderedList;
use crate::session::{DragSession, SessionId};
use crate::types::{DragEvent, ReorderIntent, ReorderState};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Dragging(DragSession),
    Settling(DragSession),
}

/// Drag-to-reorder state machine over an owned [`OrderedList`].
///
/// The controller is the only mutator of its list. Each handler returns the intents it produced,
/// in the order the rendering layer should apply them.
#[derive(Clone, Debug)]
pub struct ReorderController<T> {
    list: OrderedList<T>,
    phase: Phase,
    next_session: SessionId,
}

impl<T> ReorderController<T> {
    /// Create an idle controller over `items`.
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        Self::from_list(items.into_iter().collect())
    }

    /// Create an idle controller over an existing list.
    pub fn from_list(list: OrderedList<T>) -> Self {
        Self {
            list,
            phase: Phase::Idle,
            next_session: SessionId::default(),
        }
    }

    /// The list, in its current order.
    pub fn list(&self) -> &OrderedList<T> {
        &self.list
    }

    /// Consume the controller and return its list.
    pub fn into_list(self) -> OrderedList<T> {
        self.list
    }

    /// Coarse state of the interaction.
    pub fn state(&self) -> ReorderState {
        match self.phase {
            Phase::Idle => ReorderState::Idle,
            Phase::Dragging(_) => ReorderState::Dragging,
            Phase::Settling(_) => ReorderState::Settling,
        }
    }

    /// The active session, while dragging or settling.
    pub fn session(&self) -> Option<&DragSession> {
        match &self.phase {
            Phase::Idle => None,
            Phase::Dragging(s) | Phase::Settling(s) => Some(s),
        }
    }

    /// Dispatch a single input event to the matching handler.
    pub fn handle(&mut self, event: DragEvent) -> Vec<ReorderIntent> {
        match event {
            DragEvent::Start { y, slot } => self.start(y, slot),
            DragEvent::Move { y, slot } => self.pointer_moved(y, slot),
            DragEvent::End => self.end(),
            DragEvent::Cancel => self.cancel(),
            DragEvent::LiftComplete { session } => self.lift_complete(session),
            DragEvent::FinishComplete => self.finish_complete(),
        }
    }

    /// Begin a drag over `slot`.
    ///
    /// Ignored unless idle and `slot` names an item in the list.
    pub fn start(&mut self, _y: f64, slot: Option<usize>) -> Vec<ReorderIntent> {
        match self.phase {
            Phase::Idle => {}
            Phase::Dragging(_) => {
                #[cfg(feature = "tracing")]
                tracing::trace!("start ignored: a drag is already active");
                return Vec::new();
            }
            Phase::Settling(_) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("start rejected: previous drag is still settling");
                return Vec::new();
            }
        }
        let Some(slot) = self.resolve(slot) else {
            #[cfg(feature = "tracing")]
            tracing::trace!(?slot, len = self.list.len(), "start ignored: no row under pointer");
            return Vec::new();
        };

        let session = self.next_session;
        self.next_session = session.next();
        #[cfg(feature = "tracing")]
        tracing::debug!(slot, session = session.0, "drag started");
        self.phase = Phase::Dragging(DragSession::new(session, slot));
        vec![ReorderIntent::BeginDragVisual { slot, session }]
    }

    /// Follow the pointer to `y`; move the dragged item if it is now over a different slot.
    pub fn pointer_moved(&mut self, y: f64, slot: Option<usize>) -> Vec<ReorderIntent> {
        let target = self.resolve(slot);
        let Phase::Dragging(session) = &mut self.phase else {
            #[cfg(feature = "tracing")]
            tracing::trace!(y, "move ignored: no active drag");
            return Vec::new();
        };

        let mut out = vec![ReorderIntent::UpdateGhostPosition { y }];
        let from = session.current_slot();
        if let Some(to) = target
            && to != from
        {
            self.list.move_item(from, to);
            session.set_current_slot(to);
            #[cfg(feature = "tracing")]
            tracing::debug!(from, to, "item moved");
            out.push(ReorderIntent::CommitMove { from, to });
        }
        out
    }

    /// Release the pointer; the item stays in the last slot it reached.
    pub fn end(&mut self) -> Vec<ReorderIntent> {
        self.finish_drag()
    }

    /// System cancel. Behaves exactly like [`end`](Self::end).
    pub fn cancel(&mut self) -> Vec<ReorderIntent> {
        self.finish_drag()
    }

    /// The lift visual requested by [`ReorderIntent::BeginDragVisual`] for `id` has finished.
    ///
    /// Ignored unless `id` names the current session and its lift is still in flight.
    pub fn lift_complete(&mut self, id: SessionId) -> Vec<ReorderIntent> {
        match &mut self.phase {
            Phase::Dragging(session) if session.id() == id && session.is_lifting() => {
                let pending = session.finish_lift();
                debug_assert!(!pending, "a reveal cannot be pending before the drag ends");
                vec![ReorderIntent::HideRow {
                    slot: session.current_slot(),
                }]
            }
            Phase::Settling(session) if session.id() == id && session.is_lifting() => {
                if !session.finish_lift() {
                    return Vec::new();
                }
                #[cfg(feature = "tracing")]
                tracing::debug!(slot = session.current_slot(), "deferred reveal delivered");
                vec![ReorderIntent::RevealRow {
                    slot: session.current_slot(),
                }]
            }
            _ => {
                #[cfg(feature = "tracing")]
                tracing::trace!(session = id.0, "lift completion ignored");
                Vec::new()
            }
        }
    }

    /// The finish visual requested by [`ReorderIntent::BeginFinishVisual`] has finished.
    pub fn finish_complete(&mut self) -> Vec<ReorderIntent> {
        let Phase::Settling(mut session) = self.phase else {
            #[cfg(feature = "tracing")]
            tracing::trace!("finish completion ignored: not settling");
            return Vec::new();
        };

        let mut out = Vec::new();
        if session.take_pending_reveal() {
            out.push(ReorderIntent::RevealRow {
                slot: session.current_slot(),
            });
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(
            origin = session.origin_slot(),
            slot = session.current_slot(),
            "drag session ended"
        );
        self.phase = Phase::Idle;
        out.push(ReorderIntent::DragSessionEnded);
        out
    }

    fn finish_drag(&mut self) -> Vec<ReorderIntent> {
        let Phase::Dragging(mut session) = self.phase else {
            #[cfg(feature = "tracing")]
            tracing::trace!("end ignored: no active drag");
            return Vec::new();
        };

        let slot = session.current_slot();
        let mut out = vec![ReorderIntent::BeginFinishVisual { slot }];
        if session.request_reveal() {
            out.push(ReorderIntent::RevealRow { slot });
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(slot, deferred = session.pending_reveal(), "drag finishing");
        self.phase = Phase::Settling(session);
        out
    }

    fn resolve(&self, slot: Option<usize>) -> Option<usize> {
        slot.filter(|&s| s < self.list.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ReorderIntent::*;

    fn count_moves(intents: &[ReorderIntent]) -> usize {
        intents
            .iter()
            .filter(|i| matches!(i, CommitMove { .. }))
            .count()
    }

    #[test]
    fn scenario_single_crossing_with_repeat() {
        let mut c = ReorderController::new([1, 2, 3, 4, 5]);
        let mut all = Vec::new();
        all.extend(c.start(0.0, Some(0)));
        all.extend(c.pointer_moved(120.0, Some(2)));
        all.extend(c.pointer_moved(125.0, Some(2)));
        all.extend(c.end());
        all.extend(c.finish_complete());

        assert_eq!(
            all,
            vec![
                BeginDragVisual {
                    slot: 0,
                    session: SessionId(0),
                },
                UpdateGhostPosition { y: 120.0 },
                CommitMove { from: 0, to: 2 },
                UpdateGhostPosition { y: 125.0 },
                BeginFinishVisual { slot: 2 },
                // Lift never reported, so the reveal waits for the finish.
                RevealRow { slot: 2 },
                DragSessionEnded,
            ]
        );
        assert_eq!(c.list().as_slice(), &[2, 3, 1, 4, 5]);
        assert_eq!(c.state(), ReorderState::Idle);
    }

    #[test]
    fn scenario_tracks_current_slot_across_crossings() {
        let mut c = ReorderController::new([1, 2, 3]);
        let _ = c.start(60.0, Some(1));
        assert_eq!(
            c.pointer_moved(10.0, Some(0)),
            vec![UpdateGhostPosition { y: 10.0 }, CommitMove { from: 1, to: 0 }]
        );
        assert_eq!(
            c.pointer_moved(130.0, Some(2)),
            vec![UpdateGhostPosition { y: 130.0 }, CommitMove { from: 0, to: 2 }]
        );
        assert_eq!(c.end()[0], BeginFinishVisual { slot: 2 });
        // Item 2 went to the top, then from the top to the bottom.
        assert_eq!(c.list().as_slice(), &[1, 3, 2]);
        let s = c.session().unwrap();
        assert_eq!((s.origin_slot(), s.current_slot()), (1, 2));
    }

    #[test]
    fn pointer_off_the_list_is_a_pure_visual_update() {
        let mut c = ReorderController::new([1, 2, 3]);
        let _ = c.start(0.0, Some(0));
        assert_eq!(
            c.pointer_moved(-40.0, None),
            vec![UpdateGhostPosition { y: -40.0 }]
        );
        let end = c.end();
        assert_eq!(end[0], BeginFinishVisual { slot: 0 });
        assert_eq!(c.finish_complete().last(), Some(&DragSessionEnded));
        assert_eq!(c.list().as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn out_of_range_slot_is_treated_as_no_row() {
        let mut c = ReorderController::new(['a', 'b']);
        assert!(c.start(0.0, Some(2)).is_empty());
        assert_eq!(c.state(), ReorderState::Idle);

        let _ = c.start(0.0, Some(1));
        let out = c.pointer_moved(500.0, Some(9));
        assert_eq!(count_moves(&out), 0);
        assert_eq!(c.list().as_slice(), &['a', 'b']);
    }

    #[test]
    fn repeated_slot_never_commits() {
        let mut c = ReorderController::new(0..4);
        let _ = c.start(0.0, Some(1));
        for y in 0..5 {
            let out = c.pointer_moved(f64::from(y), Some(1));
            assert_eq!(out, vec![UpdateGhostPosition { y: f64::from(y) }]);
        }
        assert_eq!(c.list().as_slice(), &[0, 1, 2, 3]);
    }

    #[test]
    fn start_without_a_row_does_nothing() {
        let mut c = ReorderController::new([1, 2]);
        assert!(c.start(-5.0, None).is_empty());
        assert_eq!(c.state(), ReorderState::Idle);
        assert!(c.session().is_none());
    }

    #[test]
    fn stray_events_while_idle_are_absorbed() {
        let mut c = ReorderController::new([1, 2]);
        assert!(c.pointer_moved(3.0, Some(1)).is_empty());
        assert!(c.end().is_empty());
        assert!(c.cancel().is_empty());
        assert!(c.lift_complete(SessionId(0)).is_empty());
        assert!(c.finish_complete().is_empty());
        assert_eq!(c.state(), ReorderState::Idle);
        assert_eq!(c.list().as_slice(), &[1, 2]);
    }

    #[test]
    fn start_while_settling_is_rejected() {
        let mut c = ReorderController::new([1, 2, 3]);
        let _ = c.start(0.0, Some(0));
        let _ = c.pointer_moved(60.0, Some(1));
        let _ = c.end();
        let before = *c.session().unwrap();

        assert!(c.start(0.0, Some(2)).is_empty());
        assert_eq!(c.state(), ReorderState::Settling);
        assert_eq!(c.session(), Some(&before));

        // Moves and ends also do nothing until the finish completes.
        assert!(c.pointer_moved(0.0, Some(0)).is_empty());
        assert!(c.end().is_empty());
        assert_eq!(c.list().as_slice(), &[2, 1, 3]);

        let _ = c.finish_complete();
        assert_eq!(
            c.start(0.0, Some(2)),
            vec![BeginDragVisual {
                slot: 2,
                session: SessionId(1),
            }]
        );
    }

    #[test]
    fn start_while_dragging_is_ignored() {
        let mut c = ReorderController::new([1, 2, 3]);
        let _ = c.start(0.0, Some(0));
        assert!(c.start(0.0, Some(2)).is_empty());
        assert_eq!(c.session().map(DragSession::origin_slot), Some(0));
    }

    #[test]
    fn lift_completion_hides_the_row() {
        let mut c = ReorderController::new([1, 2, 3]);
        let _ = c.start(0.0, Some(0));
        let _ = c.pointer_moved(60.0, Some(1));
        let id = c.session().unwrap().id();
        assert_eq!(c.lift_complete(id), vec![HideRow { slot: 1 }]);
        // Duplicate callbacks are absorbed.
        assert!(c.lift_complete(id).is_empty());
        // With the lift done, the reveal rides along with the finish.
        assert_eq!(
            c.end(),
            vec![BeginFinishVisual { slot: 1 }, RevealRow { slot: 1 }]
        );
        assert_eq!(c.finish_complete(), vec![DragSessionEnded]);
    }

    #[test]
    fn end_during_lift_defers_reveal_to_lift_completion() {
        let mut c = ReorderController::new([1, 2, 3]);
        let _ = c.start(0.0, Some(2));
        assert_eq!(c.end(), vec![BeginFinishVisual { slot: 2 }]);
        assert!(c.session().unwrap().pending_reveal());

        let id = c.session().unwrap().id();
        assert_eq!(c.lift_complete(id), vec![RevealRow { slot: 2 }]);
        // The reveal has been paid; finishing must not repeat it.
        assert_eq!(c.finish_complete(), vec![DragSessionEnded]);
    }

    #[test]
    fn stale_lift_completion_is_ignored_by_the_next_session() {
        let mut c = ReorderController::new([1, 2, 3]);
        let _ = c.start(0.0, Some(0));
        let old = c.session().unwrap().id();
        let _ = c.end();
        let _ = c.finish_complete();

        let out = c.start(120.0, Some(2));
        let new = c.session().unwrap().id();
        assert_ne!(old, new);
        assert_eq!(out, vec![BeginDragVisual { slot: 2, session: new }]);

        // The first session's lift callback arrives late.
        assert!(c.lift_complete(old).is_empty());
        assert!(c.session().unwrap().is_lifting());

        // The new session's reveal still waits for its own lift.
        assert_eq!(c.end(), vec![BeginFinishVisual { slot: 2 }]);
        assert!(c.lift_complete(old).is_empty());
        assert_eq!(c.lift_complete(new), vec![RevealRow { slot: 2 }]);
        assert_eq!(c.finish_complete(), vec![DragSessionEnded]);
    }

    #[test]
    fn lift_completion_for_another_session_does_not_hide() {
        let mut c = ReorderController::new([1, 2, 3]);
        let _ = c.start(0.0, Some(1));
        let id = c.session().unwrap().id();
        assert!(c.lift_complete(SessionId(id.0 + 1)).is_empty());
        assert!(c.session().unwrap().is_lifting());
        assert_eq!(c.lift_complete(id), vec![HideRow { slot: 1 }]);
    }

    #[test]
    fn cancel_keeps_the_last_resolved_slot() {
        let mut c = ReorderController::new(["a", "b", "c"]);
        let _ = c.start(0.0, Some(0));
        let _ = c.lift_complete(SessionId(0));
        let _ = c.pointer_moved(100.0, Some(2));
        assert_eq!(c.cancel()[0], BeginFinishVisual { slot: 2 });
        assert_eq!(c.list().as_slice(), &["b", "c", "a"]);
    }

    #[test]
    fn handle_dispatches_like_the_direct_methods() {
        let events = [
            DragEvent::Start {
                y: 0.0,
                slot: Some(3),
            },
            DragEvent::LiftComplete {
                session: SessionId(0),
            },
            DragEvent::Move {
                y: 10.0,
                slot: Some(0),
            },
            DragEvent::Cancel,
            DragEvent::FinishComplete,
        ];
        let mut via_handle = ReorderController::new(0..4);
        let mut direct = ReorderController::new(0..4);

        let a: Vec<_> = events.iter().flat_map(|e| via_handle.handle(*e)).collect();
        let mut b = direct.start(0.0, Some(3));
        b.extend(direct.lift_complete(SessionId(0)));
        b.extend(direct.pointer_moved(10.0, Some(0)));
        b.extend(direct.cancel());
        b.extend(direct.finish_complete());

        assert_eq!(a, b);
        assert_eq!(via_handle.list(), direct.list());
        assert_eq!(via_handle.into_list().into_vec(), vec![3, 0, 1, 2]);
    }
}
