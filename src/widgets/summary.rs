//! Labeled summary layout.
//!
//! A vertical stack of one-line rows, each with left-aligned label content and
//! right-aligned value content, optionally split by separator lines. Spans can
//! be tagged with a target; their on-screen rectangles are recorded in
//! [`SummaryState`] during render so mouse clicks can be mapped back to them.
//!
//! ```text
//!   Estimated gas fee ⓘ             $4.00  0.002 ETH
//!   Likely in < 30 seconds           Max fee: 0.003 ETH
//!   ───────────────────────────────────────────────────
//!   Total                          $204.00  0.102 ETH
//!                                  Max amount: 0.103 ETH
//! ```

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    text::Span,
    widgets::StatefulWidget,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::SEPARATOR_STYLE;

const ELLIPSIS: &str = "…";

// ============================================================================
// Rows
// ============================================================================

#[derive(Debug, Clone)]
struct SummaryCell<'a, T> {
    span: Span<'a>,
    target: Option<T>,
}

impl<T> SummaryCell<'_, T> {
    fn width(&self) -> usize {
        self.span.width()
    }

    fn is_blank(&self) -> bool {
        self.span.content.trim().is_empty()
    }

    /// A copy cut down to `max_width` columns. Shortened cells lose their
    /// target.
    fn truncated(&self, max_width: usize) -> Self
    where
        T: Copy,
    {
        let text = truncate_end(&self.span.content, max_width);
        let target = if text == self.span.content {
            self.target
        } else {
            None
        };
        Self {
            span: Span::styled(text, self.span.style),
            target,
        }
    }
}

fn truncate_end(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut kept = String::new();
    let mut used = ELLIPSIS.width();
    for ch in text.chars() {
        let width = ch.width().unwrap_or(0);
        if used + width > max_width {
            break;
        }
        used += width;
        kept.push(ch);
    }
    let mut truncated = kept.trim_end().to_string();
    truncated.push_str(ELLIPSIS);
    truncated
}

fn cells_width<T>(cells: &[SummaryCell<'_, T>]) -> usize {
    cells.iter().map(SummaryCell::width).sum()
}

/// One line of the summary.
#[derive(Debug, Clone)]
pub struct SummaryRow<'a, T> {
    left: Vec<SummaryCell<'a, T>>,
    right: Vec<SummaryCell<'a, T>>,
}

impl<T> Default for SummaryRow<'_, T> {
    fn default() -> Self {
        Self {
            left: Vec::new(),
            right: Vec::new(),
        }
    }
}

impl<'a, T> SummaryRow<'a, T> {
    /// Creates an empty row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a span to the left-aligned side.
    #[must_use]
    pub fn left(mut self, span: impl Into<Span<'a>>) -> Self {
        self.left.push(SummaryCell {
            span: span.into(),
            target: None,
        });
        self
    }

    /// Appends a span to the left-aligned side and records where it lands.
    #[must_use]
    pub fn left_target(mut self, span: impl Into<Span<'a>>, target: T) -> Self {
        self.left.push(SummaryCell {
            span: span.into(),
            target: Some(target),
        });
        self
    }

    /// Appends a span to the right-aligned side.
    #[must_use]
    pub fn right(mut self, span: impl Into<Span<'a>>) -> Self {
        self.right.push(SummaryCell {
            span: span.into(),
            target: None,
        });
        self
    }

    /// Appends a span to the right-aligned side, tagged with `target` when
    /// one is given.
    #[must_use]
    pub fn right_maybe_target(mut self, span: impl Into<Span<'a>>, target: Option<T>) -> Self {
        self.right.push(SummaryCell {
            span: span.into(),
            target,
        });
        self
    }
}

#[derive(Debug, Clone)]
enum SummaryItem<'a, T> {
    Row(SummaryRow<'a, T>),
    Separator,
}

// ============================================================================
// Summary
// ============================================================================

/// A stack of summary rows and separators.
#[derive(Debug, Clone)]
pub struct Summary<'a, T> {
    items: Vec<SummaryItem<'a, T>>,
    margin: u16,
}

impl<T> Default for Summary<'_, T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            margin: 0,
        }
    }
}

impl<'a, T> Summary<'a, T> {
    /// Creates an empty summary with no margin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the horizontal margin on both sides.
    #[must_use]
    pub const fn margin(mut self, margin: u16) -> Self {
        self.margin = margin;
        self
    }

    /// Appends a row.
    #[must_use]
    pub fn row(mut self, row: SummaryRow<'a, T>) -> Self {
        self.items.push(SummaryItem::Row(row));
        self
    }

    /// Appends a separator line.
    #[must_use]
    pub fn separator(mut self) -> Self {
        self.items.push(SummaryItem::Separator);
        self
    }

    /// Number of terminal rows needed to draw every item.
    #[must_use]
    pub fn height(&self) -> u16 {
        u16::try_from(self.items.len()).unwrap_or(u16::MAX)
    }
}

// ============================================================================
// State
// ============================================================================

/// Screen rectangles of the tagged spans drawn in the last render.
#[derive(Debug, Clone)]
pub struct SummaryState<T> {
    hotspots: Vec<(Rect, T)>,
}

impl<T> Default for SummaryState<T> {
    fn default() -> Self {
        Self {
            hotspots: Vec::new(),
        }
    }
}

impl<T: Copy + PartialEq> SummaryState<T> {
    /// Returns the target drawn at `(column, row)`, if any.
    #[must_use]
    pub fn target_at(&self, column: u16, row: u16) -> Option<T> {
        let position = Position::new(column, row);
        self.hotspots
            .iter()
            .find(|(area, _)| area.contains(position))
            .map(|(_, target)| *target)
    }

    /// Returns where `target` was drawn, if it was.
    #[must_use]
    pub fn area_of(&self, target: T) -> Option<Rect> {
        self.hotspots
            .iter()
            .find(|(_, t)| *t == target)
            .map(|(area, _)| *area)
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Fits the right side into `max_width` by dropping leading cells (and the
/// blank gaps they leave) until the rest fits. A last cell that is still too
/// wide is cut.
fn fit_right<'a, T: Copy>(cells: &[SummaryCell<'a, T>], max_width: usize) -> Vec<SummaryCell<'a, T>> {
    let mut start = 0;
    let mut total = cells_width(cells);
    while total > max_width && start + 1 < cells.len() {
        total -= cells[start].width();
        start += 1;
    }
    if start > 0 {
        while start + 1 < cells.len() && cells[start].is_blank() {
            total -= cells[start].width();
            start += 1;
        }
    }

    let kept = &cells[start..];
    if total <= max_width {
        kept.to_vec()
    } else {
        kept.iter().map(|cell| cell.truncated(max_width)).collect()
    }
}

/// Fits the left side into `budget`, shortening the first cell so the
/// trailing ones keep their place. When even the trailing cells do not fit,
/// the side is cut at the budget.
fn fit_left<'a, T: Copy>(cells: &[SummaryCell<'a, T>], budget: usize) -> Vec<SummaryCell<'a, T>> {
    if cells_width(cells) <= budget {
        return cells.to_vec();
    }
    let Some((first, rest)) = cells.split_first() else {
        return Vec::new();
    };

    let rest_width = cells_width(rest);
    if rest_width < budget {
        let mut fitted = vec![first.truncated(budget - rest_width)];
        fitted.extend_from_slice(rest);
        return fitted;
    }

    let mut fitted = Vec::new();
    let mut used = 0;
    for cell in cells {
        let width = cell.width();
        if used + width > budget {
            fitted.push(cell.truncated(budget - used));
            break;
        }
        used += width;
        fitted.push(cell.clone());
    }
    fitted
}

fn draw_cells<T: Copy>(
    cells: &[SummaryCell<'_, T>],
    mut x: u16,
    y: u16,
    right_edge: u16,
    buf: &mut Buffer,
    state: &mut SummaryState<T>,
) {
    for cell in cells {
        if x >= right_edge {
            break;
        }
        let (next_x, _) = buf.set_span(x, y, &cell.span, right_edge - x);
        let drawn = usize::from(next_x - x);
        if let Some(target) = cell.target
            && drawn > 0
            && drawn == cell.width()
        {
            state.hotspots.push((Rect::new(x, y, next_x - x, 1), target));
        }
        x = next_x;
    }
}

fn draw_row<T: Copy>(
    row: &SummaryRow<'_, T>,
    content: Rect,
    y: u16,
    buf: &mut Buffer,
    state: &mut SummaryState<T>,
) {
    let right = fit_right(&row.right, usize::from(content.width));
    let right_width = u16::try_from(cells_width(&right)).unwrap_or(u16::MAX);
    let right_x = content.right().saturating_sub(right_width).max(content.x);

    let gap = u16::from(!right.is_empty());
    let left_budget = (right_x - content.x).saturating_sub(gap);
    let left = fit_left(&row.left, usize::from(left_budget));

    draw_cells(&left, content.x, y, content.x + left_budget, buf, state);
    draw_cells(&right, right_x, y, content.right(), buf, state);
}

impl<T: Copy> StatefulWidget for Summary<'_, T> {
    type State = SummaryState<T>;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        state.hotspots.clear();

        let content = Rect::new(
            area.x.saturating_add(self.margin),
            area.y,
            area.width.saturating_sub(self.margin.saturating_mul(2)),
            area.height,
        );
        if content.is_empty() {
            return;
        }

        for (offset, item) in self.items.iter().enumerate() {
            let Ok(offset) = u16::try_from(offset) else {
                break;
            };
            let y = content.y.saturating_add(offset);
            if y >= content.bottom() {
                break;
            }

            match item {
                SummaryItem::Separator => {
                    let line = "─".repeat(content.width as usize);
                    buf.set_string(content.x, y, line, SEPARATOR_STYLE);
                }
                SummaryItem::Row(row) => draw_row(row, content, y, buf, state),
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
