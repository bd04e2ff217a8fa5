//! Skill arcs and their one-shot reveal animation.
//!
//! Each skill is drawn as a circle whose filled arc covers `level / 100` of
//! the circumference, starting at 12 o'clock and running clockwise. The arcs
//! stay empty until the skills grid is at least half visible; from then on
//! they ease out to their final length over [`REVEAL_DURATION`]. The reveal
//! happens once per process and is never replayed.

use ratatui::layout::Rect;
use std::f64::consts::TAU;
use std::ops::Range;
use std::time::{Duration, Instant};

/// Fraction of the skills grid that must be on screen to trigger the reveal.
pub const REVEAL_THRESHOLD: f64 = 0.5;

/// How long the arcs take to reach their final length.
pub const REVEAL_DURATION: Duration = Duration::from_millis(3800);

/// Latch that records the first time the skills grid came into view.
#[derive(Debug, Clone, Copy, Default)]
pub struct RevealLatch {
    revealed_at: Option<Instant>,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report how much of the grid is visible.
    ///
    /// Returns `true` only on the call that trips the latch.
    pub fn observe(&mut self, visible_ratio: f64, now: Instant) -> bool {
        if self.revealed_at.is_some() || visible_ratio < REVEAL_THRESHOLD {
            return false;
        }
        self.revealed_at = Some(now);
        tracing::debug!(visible_ratio, "skills revealed");
        true
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed_at.is_some()
    }

    /// Time since the reveal, `None` before it.
    pub fn elapsed(&self, now: Instant) -> Option<Duration> {
        self.revealed_at
            .map(|at| now.saturating_duration_since(at))
    }

    /// Whether the arcs are still growing.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.elapsed(now).is_some_and(|e| e < REVEAL_DURATION)
    }
}

/// Fraction of `content` that lies inside `viewport`, by area.
///
/// Measured against the largest part of `content` that could fit in
/// `viewport`, so a grid taller than the screen reads 1.0 once it fills it.
pub fn visible_ratio(content: Rect, viewport: Rect) -> f64 {
    let reachable = f64::from(content.width.min(viewport.width))
        * f64::from(content.height.min(viewport.height));
    if reachable == 0.0 {
        return 0.0;
    }
    let overlap = content.intersection(viewport);
    f64::from(overlap.width) * f64::from(overlap.height) / reachable
}

/// Cubic ease-out on `t` in `0.0..=1.0`.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Filled fraction of a skill's arc at a point in the reveal.
///
/// `elapsed` is `None` before the reveal, which leaves the arc empty.
pub fn arc_fraction(level: u8, elapsed: Option<Duration>) -> f64 {
    let Some(elapsed) = elapsed else {
        return 0.0;
    };
    let target = f64::from(level.min(100)) / 100.0;
    let progress = elapsed.as_secs_f64() / REVEAL_DURATION.as_secs_f64();
    target * ease_out_cubic(progress)
}

/// Points along an arc of `fraction` of a circle of `radius`.
///
/// Starts at 12 o'clock (`(0, radius)`) and runs clockwise. `steps` is the
/// point count for a full circle; partial arcs get a proportional share.
pub fn arc_points(fraction: f64, radius: f64, steps: usize) -> Vec<(f64, f64)> {
    let fraction = fraction.clamp(0.0, 1.0);
    let count = (steps as f64 * fraction).round() as usize;
    if count == 0 {
        return Vec::new();
    }
    (0..=count)
        .map(|i| {
            let theta = TAU * fraction * (i as f64 / count as f64);
            (radius * theta.sin(), radius * theta.cos())
        })
        .collect()
}

/// Grid columns for the skills section at a given width.
pub fn grid_columns(width: u16) -> u16 {
    match width {
        w if w >= 96 => 4,
        w if w >= 64 => 3,
        _ => 2,
    }
}

/// Height in rows of one skill cell.
pub const CELL_HEIGHT: u16 = 10;

/// The rectangle the skills grid wants, anchored at the top of `area`.
///
/// The height may exceed `area`; [`visible_ratio`] against `area` then tells
/// how much of the grid is on screen.
pub fn grid_extent(area: Rect, skill_count: usize) -> Rect {
    let columns = usize::from(grid_columns(area.width));
    let rows = skill_count.div_ceil(columns) as u16;
    Rect::new(area.x, area.y, area.width, rows.saturating_mul(CELL_HEIGHT))
}

/// Rows of the grid drawn at `scroll` in a viewport `height` rows tall.
///
/// Only whole cells are drawn, so a row that is cut off by either edge is
/// left out.
pub fn drawn_rows(row_count: usize, scroll: u16, height: u16) -> Range<usize> {
    let cell = u32::from(CELL_HEIGHT);
    let first = u32::from(scroll).div_ceil(cell) as usize;
    let end = ((u32::from(scroll) + u32::from(height)) / cell) as usize;
    first..end.min(row_count).max(first)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_latch_stays_closed_below_threshold() {
        let mut latch = RevealLatch::new();
        let now = Instant::now();

        assert!(!latch.observe(0.0, now));
        assert!(!latch.observe(0.49, now));
        assert!(!latch.is_revealed());
        assert!(latch.elapsed(now).is_none());
    }

    #[test]
    fn test_latch_fires_once() {
        let mut latch = RevealLatch::new();
        let start = Instant::now();

        assert!(latch.observe(0.5, start));
        assert!(latch.is_revealed());

        // Leaving and re-entering the view does not fire again.
        assert!(!latch.observe(0.0, start + Duration::from_secs(1)));
        assert!(!latch.observe(1.0, start + Duration::from_secs(2)));
        assert_eq!(
            latch.elapsed(start + Duration::from_secs(2)),
            Some(Duration::from_secs(2))
        );
    }

    #[test]
    fn test_latch_animation_window() {
        let mut latch = RevealLatch::new();
        let start = Instant::now();
        assert!(!latch.is_animating(start));

        latch.observe(1.0, start);
        assert!(latch.is_animating(start + Duration::from_secs(1)));
        assert!(!latch.is_animating(start + REVEAL_DURATION));
    }

    #[test]
    fn test_visible_ratio_full_and_partial() {
        let viewport = Rect::new(0, 0, 80, 20);

        assert!((visible_ratio(Rect::new(0, 0, 80, 10), viewport) - 1.0).abs() < EPS);
        assert!((visible_ratio(Rect::new(0, 10, 80, 20), viewport) - 0.5).abs() < EPS);
        assert!((visible_ratio(Rect::new(0, 30, 80, 10), viewport)).abs() < EPS);
    }

    #[test]
    fn test_visible_ratio_tall_content_filling_viewport() {
        let viewport = Rect::new(0, 0, 80, 20);
        assert!((visible_ratio(Rect::new(0, 0, 80, 60), viewport) - 1.0).abs() < EPS);
        assert!((visible_ratio(Rect::new(0, 15, 80, 60), viewport) - 0.25).abs() < EPS);
    }

    #[test]
    fn test_visible_ratio_empty_content() {
        assert_eq!(visible_ratio(Rect::new(0, 0, 0, 0), Rect::new(0, 0, 10, 10)), 0.0);
        assert_eq!(visible_ratio(Rect::new(0, 0, 10, 10), Rect::new(0, 0, 10, 0)), 0.0);
    }

    #[test]
    fn test_ease_out_cubic_endpoints_and_monotonic() {
        assert!(ease_out_cubic(0.0).abs() < EPS);
        assert!((ease_out_cubic(1.0) - 1.0).abs() < EPS);
        assert!((ease_out_cubic(5.0) - 1.0).abs() < EPS);

        let mut last = 0.0;
        for i in 1..=20 {
            let value = ease_out_cubic(f64::from(i) / 20.0);
            assert!(value >= last);
            last = value;
        }
        // Ease-out front-loads progress.
        assert!(ease_out_cubic(0.5) > 0.5);
    }

    #[test]
    fn test_arc_fraction_before_reveal_is_empty() {
        assert_eq!(arc_fraction(95, None), 0.0);
    }

    #[test]
    fn test_arc_fraction_settles_at_level() {
        assert!((arc_fraction(85, Some(REVEAL_DURATION)) - 0.85).abs() < EPS);
        assert!((arc_fraction(85, Some(Duration::from_secs(60))) - 0.85).abs() < EPS);
        assert!(arc_fraction(85, Some(Duration::from_millis(1900))) < 0.85);
        assert!(arc_fraction(85, Some(Duration::ZERO)).abs() < EPS);
    }

    #[test]
    fn test_arc_points_start_at_top_and_run_clockwise() {
        let points = arc_points(0.25, 50.0, 120);
        assert_eq!(points.len(), 31);

        let (x0, y0) = points[0];
        assert!(x0.abs() < EPS && (y0 - 50.0).abs() < EPS);

        // A quarter turn clockwise from 12 o'clock ends at 3 o'clock.
        let (x1, y1) = points[points.len() - 1];
        assert!((x1 - 50.0).abs() < 1e-6 && y1.abs() < 1e-6);
    }

    #[test]
    fn test_arc_points_stay_on_circle() {
        for (x, y) in arc_points(0.77, 40.0, 90) {
            assert!(((x * x + y * y).sqrt() - 40.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_arc_points_empty_for_zero_fraction() {
        assert!(arc_points(0.0, 50.0, 120).is_empty());
    }

    #[test]
    fn test_grid_columns_follow_width() {
        assert_eq!(grid_columns(40), 2);
        assert_eq!(grid_columns(70), 3);
        assert_eq!(grid_columns(120), 4);
    }

    #[test]
    fn test_grid_extent_rows() {
        let extent = grid_extent(Rect::new(0, 3, 120, 20), 8);
        assert_eq!(extent.height, 2 * CELL_HEIGHT);

        let narrow = grid_extent(Rect::new(0, 3, 40, 20), 8);
        assert_eq!(narrow.height, 4 * CELL_HEIGHT);
        assert_eq!(narrow.y, 3);
    }

    #[test]
    fn test_drawn_rows_whole_cells_only() {
        assert_eq!(drawn_rows(2, 0, 26), 0..2);
        assert_eq!(drawn_rows(4, 0, 15), 0..1);
        // Shorter than one cell: nothing is drawn.
        assert!(drawn_rows(2, 0, 9).is_empty());
        assert!(drawn_rows(4, 0, 0).is_empty());
    }

    #[test]
    fn test_drawn_rows_skip_rows_cut_by_scroll() {
        // Row 0 is partly scrolled off, row 1 fits, row 2 is cut at the bottom.
        assert_eq!(drawn_rows(4, 5, 20), 1..2);
        assert_eq!(drawn_rows(4, 10, 20), 1..3);
        assert_eq!(drawn_rows(4, 25, 15), 3..4);
    }
}
