// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A long-press drag over eight rows, from raw pointer positions to the final order.
//!
//! This example plays the rendering layer: it resolves slots with `RowLayout`, applies the
//! controller's intents to a tiny in-memory scene, and reports visual completions back. The lift
//! completes only after the second pointer sample, so the example also shows the row being hidden
//! once the ghost has taken over.
//!
//! Run:
//! - `cargo run -p understory_demos --example reorder_pointer_trace`

use kurbo::Point;
use tracing_subscriber::EnvFilter;
use understory_reorder::controller::ReorderController;
use understory_reorder::rows::{RowLayout, SectionSpacing};
use understory_reorder::session::SessionId;
use understory_reorder::style::VisualStyle;
use understory_reorder::types::ReorderIntent;

/// Just enough scene state to check the intents make sense.
#[derive(Debug, Default)]
struct Scene {
    ghost: Option<(usize, Point, f64)>,
    lifting: Option<SessionId>,
    hidden_row: Option<usize>,
    finish_pending: bool,
}

impl Scene {
    fn apply(&mut self, layout: &RowLayout, style: &VisualStyle, intent: ReorderIntent) {
        match intent {
            ReorderIntent::BeginDragVisual { slot, session } => {
                let center = layout.row_center(slot).unwrap_or(Point::ZERO);
                let (_, ghost_alpha) = style.lift_alphas();
                self.ghost = Some((slot, center, ghost_alpha));
                self.lifting = Some(session);
                println!(
                    "  lift row {slot} over {:?} ms",
                    style.animation_duration.as_millis()
                );
            }
            ReorderIntent::UpdateGhostPosition { y } => {
                if let Some((slot, center, _)) = &mut self.ghost {
                    *center = layout.ghost_center(*slot, y).unwrap_or(*center);
                }
            }
            ReorderIntent::CommitMove { from, to } => {
                if let Some((slot, ..)) = &mut self.ghost {
                    *slot = to;
                }
                if self.hidden_row == Some(from) {
                    self.hidden_row = Some(to);
                }
                println!("  move row {from} -> {to}");
            }
            ReorderIntent::HideRow { slot } => self.hidden_row = Some(slot),
            ReorderIntent::RevealRow { slot } => {
                if self.hidden_row == Some(slot) {
                    self.hidden_row = None;
                }
            }
            ReorderIntent::BeginFinishVisual { slot } => {
                let target = layout.row_center(slot).unwrap_or(Point::ZERO);
                let (_, ghost_alpha) = style.finish_alphas();
                self.ghost = Some((slot, target, ghost_alpha));
                self.finish_pending = true;
            }
            ReorderIntent::DragSessionEnded => self.ghost = None,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let items: Vec<String> = (1..=8).map(|i| i.to_string()).collect();
    let layout = RowLayout::uniform(items.len(), 50.0, 320.0, SectionSpacing::default());
    let style = VisualStyle::default();
    let mut controller = ReorderController::new(items);
    let mut scene = Scene::default();

    // Press on "2", drag down past "3" and "4", wander into a gap, then release.
    let press = Point::new(160.0, 95.0);
    let samples = [150.0, 205.0, 245.0, 250.0, 272.0];

    let apply = |scene: &mut Scene, out: Vec<ReorderIntent>| {
        for intent in out {
            scene.apply(&layout, &style, intent);
        }
    };

    let out = controller.start(press.y, layout.slot_at(press));
    apply(&mut scene, out);
    for (i, y) in samples.into_iter().enumerate() {
        let pt = Point::new(press.x, y);
        let out = controller.pointer_moved(y, layout.slot_at(pt));
        apply(&mut scene, out);
        if i == 1
            && let Some(session) = scene.lifting.take()
        {
            let out = controller.lift_complete(session);
            apply(&mut scene, out);
        }
    }
    let out = controller.end();
    apply(&mut scene, out);

    assert!(scene.finish_pending);
    let out = controller.finish_complete();
    apply(&mut scene, out);

    let order: Vec<&str> = controller.list().iter().map(String::as_str).collect();
    println!("== Final order ==\n  {order:?}");
    println!("== Scene ==\n  {scene:?}");

    assert_eq!(order, ["1", "3", "4", "5", "2", "6", "7", "8"]);
    assert_eq!(scene.hidden_row, None);
    assert!(scene.ghost.is_none());
}
