#![forbid(unsafe_code)]

//! Tooltip layout and view model.
//!
//! The tooltip sits adjacent to the highlighted target on the step's
//! declared side, centered on the perpendicular axis, then clamped so it
//! never leaves the viewport. Steps without a target (or with `Center`
//! placement) bypass the rect math entirely and center in the viewport -
//! hosts apply their own `translate(-50%, -50%)` equivalent for that case.
//!
//! The box size is whatever the host actually rendered; measuring rendered
//! UI is the host's job. [`TooltipView::estimate_size`] exists for hosts
//! that lay out before rendering, using simple character metrics and a
//! greedy wrap.

use unicode_width::UnicodeWidthStr;
use waylight_catalog::TourStep;
use waylight_core::geometry::{Point, Rect, Size};
use waylight_core::Placement;
use waylight_store::FontSize;

/// Gap between the tooltip and its target, and between the tooltip and the
/// viewport edges when clamping.
pub const GAP: f32 = 16.0;

/// Preferred tooltip width.
pub const PREFERRED_WIDTH: f32 = 380.0;

/// Horizontal room always left around the tooltip on narrow viewports.
pub const VIEWPORT_MARGIN: f32 = 32.0;

/// Where the tooltip goes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TooltipPosition {
    /// Center of the viewport; the host centers the box on this point.
    Centered,
    /// Top-left corner of the box.
    At(Point),
}

/// Compute the tooltip's position for a step.
///
/// `size` is the measured (or estimated) tooltip box. Anchored positions
/// are clamped to keep the whole box inside the viewport with [`GAP`]
/// spare on every side.
#[must_use]
pub fn tooltip_position(
    placement: Placement,
    target: Option<Rect>,
    size: Size,
    viewport: Size,
) -> TooltipPosition {
    let Some(target) = target else {
        return TooltipPosition::Centered;
    };

    let (top, left) = match placement {
        Placement::Top => (
            target.top() - size.height - GAP,
            target.left() + target.width / 2.0 - size.width / 2.0,
        ),
        Placement::Bottom => (
            target.bottom() + GAP,
            target.left() + target.width / 2.0 - size.width / 2.0,
        ),
        Placement::Left => (
            target.top() + target.height / 2.0 - size.height / 2.0,
            target.left() - size.width - GAP,
        ),
        Placement::Right => (
            target.top() + target.height / 2.0 - size.height / 2.0,
            target.right() + GAP,
        ),
        Placement::Center => return TooltipPosition::Centered,
    };

    // Clamp into the viewport; the lower bound wins when the viewport is
    // too small for both.
    let top = GAP.max(top.min(viewport.height - size.height - GAP));
    let left = GAP.max(left.min(viewport.width - size.width - GAP));

    TooltipPosition::At(Point::new(left, top))
}

/// Character metrics for size estimation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    /// Average glyph advance at the medium font size.
    pub char_width: f32,
    /// Line height at the medium font size.
    pub line_height: f32,
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self {
            char_width: 8.0,
            line_height: 20.0,
        }
    }
}

// Fixed chrome heights used by the size estimate.
const HEADER_HEIGHT: f32 = 48.0;
const CONTENT_PADDING: f32 = 16.0;
const PROGRESS_HEIGHT: f32 = 12.0;
const ACTIONS_HEIGHT: f32 = 56.0;
const HINT_HEIGHT: f32 = 24.0;

/// Everything the host needs to render the tooltip for one step.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipView {
    pub title: String,
    pub description: String,
    pub hotkey: Option<String>,
    /// Zero-based index of the step.
    pub step_index: usize,
    pub total_steps: usize,
    pub font_size: FontSize,
    pub high_contrast: bool,
}

impl TooltipView {
    /// Build the view model for a step.
    #[must_use]
    pub fn build(
        step: &TourStep,
        step_index: usize,
        total_steps: usize,
        font_size: FontSize,
        high_contrast: bool,
    ) -> Self {
        Self {
            title: step.title.clone(),
            description: step.description.clone(),
            hotkey: step.hotkey.clone(),
            step_index,
            total_steps,
            font_size,
            high_contrast,
        }
    }

    /// The position badge, e.g. `"2 / 9"`.
    #[must_use]
    pub fn badge(&self) -> String {
        format!("{} / {}", self.step_index + 1, self.total_steps)
    }

    /// Progress through the tour including this step, rounded percent.
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        if self.total_steps == 0 {
            return 0;
        }
        (((self.step_index + 1) as f64 / self.total_steps as f64) * 100.0).round() as u8
    }

    /// Whether this is the first step (back button disabled).
    #[must_use]
    pub fn is_first(&self) -> bool {
        self.step_index == 0
    }

    /// Whether this is the last step (primary button finishes).
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.step_index + 1 == self.total_steps
    }

    /// Label for the primary action button.
    #[must_use]
    pub fn primary_label(&self) -> &'static str {
        if self.is_last() { "Finish" } else { "Next" }
    }

    /// The footer hint line.
    #[must_use]
    pub fn keyboard_hint(&self) -> &'static str {
        "Use \u{2190} \u{2192} to navigate, Esc to close"
    }

    /// Estimate the rendered box size from character metrics.
    ///
    /// The width is [`PREFERRED_WIDTH`] clamped to the viewport minus
    /// [`VIEWPORT_MARGIN`]; the height follows from greedy word wrap of the
    /// title and description plus the fixed chrome.
    #[must_use]
    pub fn estimate_size(&self, metrics: &TextMetrics, viewport: Size) -> Size {
        let scale = self.font_size.scale();
        let char_width = metrics.char_width * scale;
        let line_height = metrics.line_height * scale;

        let width = PREFERRED_WIDTH.min(viewport.width - VIEWPORT_MARGIN).max(
            // Never collapse below one readable column.
            CONTENT_PADDING * 2.0 + char_width,
        );
        let columns = (((width - CONTENT_PADDING * 2.0) / char_width).floor() as usize).max(1);

        let title_lines = wrapped_line_count(&self.title, columns);
        let body_lines = wrapped_line_count(&self.description, columns);
        let hotkey_height = if self.hotkey.is_some() {
            line_height + 8.0
        } else {
            0.0
        };

        let height = HEADER_HEIGHT
            + CONTENT_PADDING
            + title_lines as f32 * line_height
            + body_lines as f32 * line_height
            + hotkey_height
            + CONTENT_PADDING
            + PROGRESS_HEIGHT
            + ACTIONS_HEIGHT
            + HINT_HEIGHT;

        Size::new(width, height)
    }
}

/// Number of lines greedy word wrap produces at `columns` wide.
///
/// Width is display width, not char count, so CJK text wraps correctly.
/// A word wider than the column count occupies as many full lines as it
/// needs.
fn wrapped_line_count(text: &str, columns: usize) -> usize {
    let columns = columns.max(1);
    let mut lines = 1usize;
    let mut used = 0usize;

    for word in text.split_whitespace() {
        let w = UnicodeWidthStr::width(word);
        if w > columns {
            // Oversized word: flush the current line, then hard-break it.
            if used > 0 {
                lines += 1;
            }
            lines += w.div_ceil(columns) - 1;
            used = w % columns;
            if used == 0 {
                used = columns;
            }
            continue;
        }
        let needed = if used == 0 { w } else { used + 1 + w };
        if needed > columns {
            lines += 1;
            used = w;
        } else {
            used = needed;
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Size = Size::new(1280.0, 720.0);
    const BOX: Size = Size::new(380.0, 240.0);

    fn target() -> Rect {
        Rect::new(500.0, 300.0, 120.0, 40.0)
    }

    // ── Placement ───────────────────────────────────────────────────────

    #[test]
    fn placement_top_sits_above_and_centers() {
        let pos = tooltip_position(Placement::Top, Some(target()), BOX, VIEWPORT);
        assert_eq!(
            pos,
            TooltipPosition::At(Point::new(500.0 + 60.0 - 190.0, 300.0 - 240.0 - GAP))
        );
    }

    #[test]
    fn placement_bottom_sits_below() {
        let pos = tooltip_position(Placement::Bottom, Some(target()), BOX, VIEWPORT);
        let TooltipPosition::At(p) = pos else {
            panic!("expected anchored position");
        };
        assert_eq!(p.y, 340.0 + GAP);
    }

    #[test]
    fn placement_left_and_right_center_vertically() {
        let TooltipPosition::At(l) =
            tooltip_position(Placement::Left, Some(target()), BOX, VIEWPORT)
        else {
            panic!();
        };
        let TooltipPosition::At(r) =
            tooltip_position(Placement::Right, Some(target()), BOX, VIEWPORT)
        else {
            panic!();
        };
        assert_eq!(l.y, r.y);
        assert_eq!(l.y, 300.0 + 20.0 - 120.0);
        assert_eq!(l.x, 500.0 - 380.0 - GAP);
        assert_eq!(r.x, 620.0 + GAP);
    }

    #[test]
    fn center_placement_bypasses_rect_math() {
        assert_eq!(
            tooltip_position(Placement::Center, Some(target()), BOX, VIEWPORT),
            TooltipPosition::Centered
        );
    }

    #[test]
    fn missing_target_centers() {
        assert_eq!(
            tooltip_position(Placement::Right, None, BOX, VIEWPORT),
            TooltipPosition::Centered
        );
    }

    #[test]
    fn position_clamps_to_viewport() {
        // Target hugging the top-left corner pushes Top placement offscreen.
        let corner = Rect::new(0.0, 0.0, 40.0, 20.0);
        let TooltipPosition::At(p) = tooltip_position(Placement::Top, Some(corner), BOX, VIEWPORT)
        else {
            panic!();
        };
        assert_eq!(p.x, GAP);
        assert_eq!(p.y, GAP);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn anchored_positions_stay_within_viewport(
                x in -200.0f32..1500.0, y in -200.0f32..900.0,
                w in 1.0f32..300.0, h in 1.0f32..300.0,
                placement in prop_oneof![
                    Just(Placement::Top), Just(Placement::Bottom),
                    Just(Placement::Left), Just(Placement::Right),
                ],
            ) {
                let target = Rect::new(x, y, w, h);
                if let TooltipPosition::At(p) =
                    tooltip_position(placement, Some(target), BOX, VIEWPORT)
                {
                    prop_assert!(p.x >= GAP);
                    prop_assert!(p.y >= GAP);
                    prop_assert!(p.x + BOX.width <= VIEWPORT.width - GAP + 0.001);
                    prop_assert!(p.y + BOX.height <= VIEWPORT.height - GAP + 0.001);
                }
            }
        }
    }

    // ── View model ──────────────────────────────────────────────────────

    fn view(index: usize, total: usize) -> TooltipView {
        let step = TourStep::new("s", "Search Products", "Type a name or scan a barcode.");
        TooltipView::build(&step, index, total, FontSize::Medium, false)
    }

    #[test]
    fn badge_and_progress() {
        let v = view(1, 4);
        assert_eq!(v.badge(), "2 / 4");
        assert_eq!(v.progress_percent(), 50);
        assert!(!v.is_first());
        assert!(!v.is_last());
        assert_eq!(v.primary_label(), "Next");
    }

    #[test]
    fn last_step_flips_primary_label() {
        let v = view(3, 4);
        assert!(v.is_last());
        assert_eq!(v.primary_label(), "Finish");
        assert_eq!(v.progress_percent(), 100);
    }

    #[test]
    fn estimate_width_clamps_on_narrow_viewports() {
        let v = view(0, 1);
        let metrics = TextMetrics::default();

        let wide = v.estimate_size(&metrics, VIEWPORT);
        assert_eq!(wide.width, PREFERRED_WIDTH);

        let narrow = v.estimate_size(&metrics, Size::new(320.0, 568.0));
        assert_eq!(narrow.width, 320.0 - VIEWPORT_MARGIN);
    }

    #[test]
    fn estimate_grows_with_longer_text_and_font() {
        let short = view(0, 1);
        let mut long = view(0, 1);
        long.description = "word ".repeat(60);

        let metrics = TextMetrics::default();
        assert!(
            long.estimate_size(&metrics, VIEWPORT).height
                > short.estimate_size(&metrics, VIEWPORT).height
        );

        let mut big = view(0, 1);
        big.font_size = FontSize::Large;
        assert!(
            big.estimate_size(&metrics, VIEWPORT).height
                >= short.estimate_size(&metrics, VIEWPORT).height
        );
    }

    // ── Wrapping ────────────────────────────────────────────────────────

    #[test]
    fn wrap_counts_lines_greedily() {
        assert_eq!(wrapped_line_count("one two three", 20), 1);
        assert_eq!(wrapped_line_count("one two three", 7), 2);
        assert_eq!(wrapped_line_count("one two three", 5), 3);
    }

    #[test]
    fn wrap_handles_oversized_words() {
        assert_eq!(wrapped_line_count("abcdefghij", 4), 3);
        assert_eq!(wrapped_line_count("hi abcdefghij", 4), 4);
    }

    #[test]
    fn wrap_empty_text_is_one_line() {
        assert_eq!(wrapped_line_count("", 10), 1);
    }
}
