//! Widget trait shared by everything painted on screen.

use crate::buffer::Buffer;
use crate::layout::Rect;

/// A UI element that paints itself into a buffer.
///
/// Widgets are the terminal-side half of the demo: they show state but hold
/// none of the memoization logic. Components decide *what* changed; widgets
/// only repaint.
pub trait Widget {
    /// Get the current bounds of this widget.
    fn bounds(&self) -> Rect;

    /// Set the bounds of this widget (called on terminal resize).
    fn set_bounds(&mut self, bounds: Rect);

    /// Paint this widget into `buffer`, within its bounds.
    fn render(&self, buffer: &mut Buffer);

    /// Check if this widget needs to be repainted.
    fn needs_redraw(&self) -> bool;

    /// Clear the redraw flag after painting.
    fn clear_redraw(&mut self);
}
