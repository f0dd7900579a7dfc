//! Binary space partitioning of a rectangular region.
//!
//! Two termination policies are provided. [`partition`] stops splitting a
//! rectangle once neither half could satisfy the minimum size and drops
//! rectangles that are already too small. [`partition_to_count`] keeps halving
//! everything until enough rectangles exist and enforces no minimum at all, so
//! its leaves can be arbitrarily thin.

use std::collections::VecDeque;

use rand::Rng;
use rand_core::RngCore;

use crate::rect::Rect;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SplitAxis {
    /// Cut across the y axis, stacking the halves vertically.
    Horizontal,
    /// Cut across the x axis, placing the halves side by side.
    Vertical,
}

/// Splits `rect` at a uniformly random offset in `[1, dimension - 1]` along
/// `axis`. `None` when that dimension is below 2.
pub fn split(rect: Rect, axis: SplitAxis, rng: &mut impl RngCore) -> Option<(Rect, Rect)> {
    match axis {
        SplitAxis::Horizontal => {
            if rect.height < 2 {
                return None;
            }
            let cut = rng.gen_range(1..rect.height);
            let bottom = Rect::new(rect.x, rect.y, rect.width, cut);
            let top = Rect::new(rect.x, rect.y + cut, rect.width, rect.height - cut);
            Some((bottom, top))
        }
        SplitAxis::Vertical => {
            if rect.width < 2 {
                return None;
            }
            let cut = rng.gen_range(1..rect.width);
            let left = Rect::new(rect.x, rect.y, cut, rect.height);
            let right = Rect::new(rect.x + cut, rect.y, rect.width - cut, rect.height);
            Some((left, right))
        }
    }
}

/// Quota-with-min-size partitioning.
///
/// Rectangles narrower than `min_width` or shorter than `min_height` are
/// discarded. A rectangle that can be halved on neither axis (height below
/// `2 * min_height` and width below `2 * min_width`) becomes a leaf. With
/// `fixed_count`, at most `room_target` leaves are kept, sampled without
/// replacement.
pub fn partition(
    region: Rect,
    min_width: i32,
    min_height: i32,
    room_target: usize,
    fixed_count: bool,
    rng: &mut impl RngCore,
) -> Vec<Rect> {
    let mut queue = VecDeque::from([region]);
    let mut leaves = Vec::new();

    while let Some(rect) = queue.pop_front() {
        if rect.height < min_height || rect.width < min_width || rect.is_empty() {
            continue;
        }
        let can_split_h = rect.height >= min_height.saturating_mul(2);
        let can_split_v = rect.width >= min_width.saturating_mul(2);

        let axis = match (can_split_h, can_split_v) {
            (true, true) => {
                if rng.gen_bool(0.5) {
                    SplitAxis::Vertical
                } else {
                    SplitAxis::Horizontal
                }
            }
            (true, false) => SplitAxis::Horizontal,
            (false, true) => SplitAxis::Vertical,
            (false, false) => {
                leaves.push(rect);
                continue;
            }
        };

        match split(rect, axis, rng) {
            Some((a, b)) => {
                queue.push_back(a);
                queue.push_back(b);
            }
            None => leaves.push(rect),
        }
    }

    if !fixed_count || leaves.len() <= room_target {
        return leaves;
    }

    let mut kept = Vec::with_capacity(room_target);
    for _ in 0..room_target {
        let index = rng.gen_range(0..leaves.len());
        kept.push(leaves.remove(index));
    }
    kept
}

/// Split-to-count partitioning.
///
/// Every pass halves each rectangle of the current list on a random axis until
/// the list holds at least `room_target` rectangles, then random rectangles are
/// dropped until exactly `room_target` remain. A rectangle too thin for the
/// chosen axis is cut on the other one; a single cell is left whole.
///
/// The count is exact only while `room_target <= region.area()`; beyond that
/// every cell of the region comes back as its own rectangle.
pub fn partition_to_count(region: Rect, room_target: usize, rng: &mut impl RngCore) -> Vec<Rect> {
    if room_target == 0 || region.is_empty() {
        return Vec::new();
    }

    let mut rects = vec![region];
    while rects.len() < room_target {
        let snapshot = std::mem::take(&mut rects);
        let before = snapshot.len();
        for rect in snapshot {
            let (first, second) = if rng.gen_bool(0.5) {
                (SplitAxis::Vertical, SplitAxis::Horizontal)
            } else {
                (SplitAxis::Horizontal, SplitAxis::Vertical)
            };
            match split(rect, first, rng).or_else(|| split(rect, second, rng)) {
                Some((a, b)) => {
                    rects.push(a);
                    rects.push(b);
                }
                None => rects.push(rect),
            }
        }
        if rects.len() == before {
            log::debug!(
                "split-to-count stalled at {} of {} rectangles",
                rects.len(),
                room_target
            );
            break;
        }
    }

    while rects.len() > room_target {
        let index = rng.gen_range(0..rects.len());
        rects.remove(index);
    }
    rects
}
