//! Stroke sampler - window placement along a drag path
//!
//! Most tools paint one window per reported pointer position. The Linear
//! tool additionally fills the gap between consecutive motion samples
//! with an integer scan-line walk, so fast drags leave no unpainted
//! stretches where motion-event density falls behind the window size.

use super::KernelKind;
use crate::input::Position;

/// Decide the window centers to paint for one motion sample.
///
/// `previous` is the coordinate of the last painted sample, if any. For
/// gap-filling tools the walk starts just after `previous` (it was
/// already painted) and always ends on `current`.
pub fn sample_positions(
    kind: KernelKind,
    previous: Option<Position>,
    current: Position,
) -> Vec<Position> {
    match previous {
        Some(previous) if kind.fills_path_gaps() && previous != current => {
            let mut positions = line_positions(previous, current);
            positions.remove(0);
            positions
        }
        _ => vec![current],
    }
}

/// All integer positions on the line segment from `from` to `to`,
/// inclusive of both endpoints (Bresenham, all octants).
///
/// The step count derives from the actual pixel distance between the
/// samples, so a vertical segment (zero x delta) terminates like any
/// other.
fn line_positions(from: Position, to: Position) -> Vec<Position> {
    let dx = (to.x - from.x).abs();
    let dy = -(to.y - from.y).abs();
    let step_x = if from.x < to.x { 1 } else { -1 };
    let step_y = if from.y < to.y { 1 } else { -1 };

    let mut positions = Vec::with_capacity((dx.max(-dy) + 1) as usize);
    let (mut x, mut y) = (from.x, from.y);
    let mut error = dx + dy;

    loop {
        positions.push(Position::new(x, y));
        if x == to.x && y == to.y {
            break;
        }
        let doubled = 2 * error;
        if doubled >= dy {
            error += dy;
            x += step_x;
        }
        if doubled <= dx {
            error += dx;
            y += step_y;
        }
    }

    positions
}
