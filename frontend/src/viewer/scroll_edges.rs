//! Horizontal scroll-edge detection for the carousel affordances.

use crate::config::{CAROUSEL_SCROLL_STEP, SCROLL_EDGE_EPSILON};

/// Scroll metrics of a horizontally scrollable region, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollPosition {
    pub offset: f64,
    pub extent: f64,
    pub viewport: f64,
}

impl ScrollPosition {
    pub fn can_scroll_left(&self) -> bool {
        self.offset > 0.0
    }

    pub fn can_scroll_right(&self) -> bool {
        self.offset < self.extent - self.viewport - SCROLL_EDGE_EPSILON
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollEdges {
    pub can_scroll_left: bool,
    pub can_scroll_right: bool,
}

impl ScrollEdges {
    /// Edges for a measured position. A failed measurement disables both.
    pub fn from_position(position: Option<ScrollPosition>) -> Self {
        match position {
            Some(position) => Self {
                can_scroll_left: position.can_scroll_left(),
                can_scroll_right: position.can_scroll_right(),
            },
            None => Self::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Left,
    Right,
}

impl ScrollDirection {
    /// Signed offset change for one arrow press.
    pub fn delta(self) -> f64 {
        match self {
            ScrollDirection::Left => -CAROUSEL_SCROLL_STEP,
            ScrollDirection::Right => CAROUSEL_SCROLL_STEP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(offset: f64) -> Option<ScrollPosition> {
        Some(ScrollPosition {
            offset,
            extent: 1000.0,
            viewport: 300.0,
        })
    }

    #[test]
    fn start_can_only_go_right() {
        let edges = ScrollEdges::from_position(at(0.0));
        assert!(!edges.can_scroll_left);
        assert!(edges.can_scroll_right);
    }

    #[test]
    fn end_and_epsilon_band_stop_right() {
        let edges = ScrollEdges::from_position(at(700.0));
        assert!(edges.can_scroll_left);
        assert!(!edges.can_scroll_right);

        // Within 10px of the end counts as the end.
        assert!(!ScrollEdges::from_position(at(690.0)).can_scroll_right);
        assert!(ScrollEdges::from_position(at(689.0)).can_scroll_right);
    }

    #[test]
    fn middle_can_go_both_ways() {
        let edges = ScrollEdges::from_position(at(300.0));
        assert_eq!(
            edges,
            ScrollEdges {
                can_scroll_left: true,
                can_scroll_right: true
            }
        );
    }

    #[test]
    fn content_narrower_than_viewport_cannot_scroll() {
        let edges = ScrollEdges::from_position(Some(ScrollPosition {
            offset: 0.0,
            extent: 250.0,
            viewport: 300.0,
        }));
        assert_eq!(edges, ScrollEdges::default());
    }

    #[test]
    fn wider_viewport_at_same_offset_reaches_the_end() {
        let narrow = ScrollEdges::from_position(at(600.0));
        assert!(narrow.can_scroll_right);

        let widened = ScrollEdges::from_position(Some(ScrollPosition {
            offset: 600.0,
            extent: 1000.0,
            viewport: 400.0,
        }));
        assert!(widened.can_scroll_left);
        assert!(!widened.can_scroll_right);
    }

    #[test]
    fn failed_measurement_disables_both() {
        assert_eq!(ScrollEdges::from_position(None), ScrollEdges::default());
    }

    #[test]
    fn step_is_signed() {
        assert_eq!(ScrollDirection::Left.delta(), -300.0);
        assert_eq!(ScrollDirection::Right.delta(), 300.0);
    }
}
