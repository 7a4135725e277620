// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reorder basics: drive the controller with pre-resolved slots and print the intents.
//!
//! Run:
//! - `cargo run -p understory_demos --example reorder_basics`
//! - `RUST_LOG=understory_reorder=debug cargo run -p understory_demos --example reorder_basics`

use tracing_subscriber::EnvFilter;
use understory_reorder::controller::ReorderController;
use understory_reorder::types::{DragEvent, ReorderIntent, ReorderState};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut controller = ReorderController::new(["1", "2", "3", "4", "5"]);

    // Drag the first row down two slots, hovering over the target twice.
    let events = [
        DragEvent::Start {
            y: 35.0,
            slot: Some(0),
        },
        DragEvent::Move {
            y: 140.0,
            slot: Some(2),
        },
        DragEvent::Move {
            y: 142.0,
            slot: Some(2),
        },
        DragEvent::End,
        DragEvent::FinishComplete,
    ];

    let mut intents = Vec::new();
    for event in events {
        let out = controller.handle(event);
        println!("{event:?}\n  -> {out:?}");
        intents.extend(out);
    }

    let moves: Vec<_> = intents
        .iter()
        .filter(|i| matches!(i, ReorderIntent::CommitMove { .. }))
        .collect();
    println!("== Final order ==\n  {:?}", controller.list().as_slice());

    assert_eq!(moves, vec![&ReorderIntent::CommitMove { from: 0, to: 2 }]);
    assert_eq!(controller.list().as_slice(), &["2", "3", "1", "4", "5"]);
    assert_eq!(intents.last(), Some(&ReorderIntent::DragSessionEnded));
    assert_eq!(controller.state(), ReorderState::Idle);
}
