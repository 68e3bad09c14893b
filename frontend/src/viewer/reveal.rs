//! Options and visibility rule for reveal-on-visible animations.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the element that must intersect, 0.0 to 1.0.
    pub threshold: f64,
    /// Stay revealed after the first intersection.
    pub once: bool,
    /// Root margin in px on every side; negative values shrink the trigger area.
    pub offset: f64,
    pub delay_ms: u32,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            once: true,
            offset: 0.0,
            delay_ms: 0,
        }
    }
}

impl RevealOptions {
    /// Section headers reveal slightly after they cross into view.
    pub fn section() -> Self {
        Self {
            offset: -100.0,
            ..Self::default()
        }
    }

    pub fn with_delay(self, delay_ms: u32) -> Self {
        Self { delay_ms, ..self }
    }

    pub fn with_offset(self, offset: f64) -> Self {
        Self { offset, ..self }
    }

    /// Adds `index * step_ms` to the delay for the `index`-th sibling.
    pub fn staggered(self, index: usize, step_ms: u32) -> Self {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        let extra = index.saturating_mul(step_ms);
        Self {
            delay_ms: self.delay_ms.saturating_add(extra),
            ..self
        }
    }

    pub fn root_margin(&self) -> String {
        format!("{}px", self.offset)
    }

    pub fn clamped_threshold(&self) -> f64 {
        self.threshold.clamp(0.0, 1.0)
    }
}

/// Visibility after an intersection change.
pub fn next_visible(currently_visible: bool, intersecting: bool, once: bool) -> bool {
    if once && currently_visible {
        return true;
    }
    intersecting
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn once_latches_visible() {
        let mut visible = false;
        visible = next_visible(visible, true, true);
        assert!(visible);
        visible = next_visible(visible, false, true);
        assert!(visible);
    }

    #[test]
    fn repeatable_follows_intersection() {
        let mut visible = next_visible(false, true, false);
        assert!(visible);
        visible = next_visible(visible, false, false);
        assert!(!visible);
    }

    #[test]
    fn stagger_adds_to_base_delay() {
        let options = RevealOptions::default().with_delay(300).staggered(3, 100);
        assert_eq!(options.delay_ms, 600);
        assert!(options.once);
    }

    #[test]
    fn margin_and_threshold_formatting() {
        assert_eq!(RevealOptions::section().root_margin(), "-100px");
        assert_eq!(RevealOptions::default().root_margin(), "0px");
        let wide = RevealOptions {
            threshold: 1.7,
            ..RevealOptions::default()
        };
        assert_eq!(wide.clamped_threshold(), 1.0);
    }
}
