//! Integer line stepping used to lay out tunnels between rooms.

use crate::types::Coord;

/// Cells along the segment `from -> to`, one per step of the dominant axis.
///
/// `from` is always the first cell; `to` itself is never emitted, so the result holds
/// exactly `max(|dx|, |dy|)` cells and a zero-length segment yields nothing.
pub fn line(from: Coord, to: Coord) -> Vec<Coord> {
    let dx = to.x - from.x;
    let dy = to.y - from.y;

    let inverted = dx.abs() < dy.abs();
    let (longest, shortest, step, gradient_step) = if inverted {
        (dy.abs(), dx.abs(), dy.signum(), dx.signum())
    } else {
        (dx.abs(), dy.abs(), dx.signum(), dy.signum())
    };

    let mut cells = Vec::with_capacity(longest as usize);
    let (mut x, mut y) = (from.x, from.y);
    let mut gradient_accumulation = longest / 2;
    for _ in 0..longest {
        cells.push(Coord::new(x, y));
        if inverted {
            y += step;
        } else {
            x += step;
        }
        gradient_accumulation += shortest;
        if gradient_accumulation >= longest {
            if inverted {
                x += gradient_step;
            } else {
                y += gradient_step;
            }
            gradient_accumulation -= longest;
        }
    }
    cells
}
