// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Range slider handles.
//!
//! Drag one handle of a collapsed two-handle range past the other and watch
//! the handles swap roles, then drag a separated range and watch it clamp.
//!
//! Run:
//! - `cargo run -p understory_demos --example range_drag`

use understory_event_state::range::{Handle, RangeAction, RangeValues, StartSource};

fn drag(label: &str, mut values: RangeValues, handle: Handle, path: &[f64]) {
    println!("{label}: start {values:?}, dragging {handle:?}");
    let mut action = RangeAction::begin(handle, values, StartSource::Pointer);
    for &value in path {
        let corrected = action.drag_to(&mut values, value);
        println!(
            "  to {value:>5}: {values:?} target={:?} corrected={corrected}",
            action.target()
        );
    }
}

fn main() {
    drag(
        "collapsed",
        RangeValues::new(50.0, 50.0),
        Handle::Start,
        &[55.0, 70.0, 40.0],
    );
    drag(
        "separated",
        RangeValues::new(20.0, 60.0),
        Handle::Start,
        &[40.0, 80.0],
    );
}
