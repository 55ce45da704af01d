// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchor placement basics.
//!
//! Place the same surface next to anchors across the viewport and print
//! which corners flipped and the resulting CSS, once per strategy.
//!
//! Run:
//! - `cargo run -p understory_demos --example anchor_placement`

use kurbo::{Rect, Size, Vec2};
use understory_anchor::{
    Corner, Direction, PositionRequest, Positioning, RepositionStrategy, Viewport,
    compute_placement,
};

fn main() {
    let anchors = [
        ("top left", Rect::new(10.0, 10.0, 90.0, 40.0)),
        ("bottom left", Rect::new(10.0, 700.0, 90.0, 730.0)),
        ("top right", Rect::new(950.0, 10.0, 1010.0, 40.0)),
        ("middle", Rect::new(480.0, 360.0, 560.0, 390.0)),
    ];

    for strategy in [RepositionStrategy::Move, RepositionStrategy::Resize] {
        println!("{strategy:?}:");
        for (name, anchor) in anchors {
            let request = PositionRequest {
                anchor,
                surface: Rect::new(0.0, 0.0, 200.0, 500.0),
                anchor_corner: Corner::END_START,
                surface_corner: Corner::START_START,
                positioning: Positioning::Fixed,
                x_offset: 0.0,
                y_offset: 0.0,
                strategy,
                viewport: Viewport {
                    size: Size::new(1024.0, 768.0),
                    scroll: Vec2::ZERO,
                },
                scrollbar: Vec2::ZERO,
                direction: Direction::Ltr,
                disable_block_flip: false,
                disable_inline_flip: false,
            };
            let placement = compute_placement(&request);
            println!(
                "  {name:<12} block_flipped={:<5} inline_flipped={:<5} {}",
                placement.block_flipped,
                placement.inline_flipped,
                placement.style.css()
            );
        }
    }

    for text in ["end-start", "start-end", "bottom-left"] {
        println!("{text:?} -> {:?}", Corner::parse_or(text, Corner::END_START));
    }
}
