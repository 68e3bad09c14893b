//! Open/closed state of the full-screen media viewer.

use std::rc::Rc;

use log::{debug, warn};
use yew::Reducible;

use crate::error::ViewerError;
use crate::viewer::cycle::{self, Direction};

#[derive(Clone, Debug, PartialEq)]
pub struct MediaItem {
    pub source: &'static str,
    pub caption: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxAction {
    Open(usize),
    Close,
    Advance(Direction),
}

/// Lightbox over a collection of `len` items.
///
/// `open_index`, when present, is always below `len`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lightbox {
    len: usize,
    open_index: Option<usize>,
}

impl Lightbox {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            open_index: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open_index.is_some()
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open_index
    }

    /// Opens the viewer on `index`, or retargets it if already open.
    pub fn open(&mut self, index: usize) -> Result<(), ViewerError> {
        if index >= self.len {
            return Err(ViewerError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.open_index = Some(index);
        Ok(())
    }

    pub fn close(&mut self) {
        self.open_index = None;
    }

    /// Moves to the neighbouring item. Ignored while closed.
    pub fn advance(&mut self, direction: Direction) -> Result<(), ViewerError> {
        if let Some(current) = self.open_index {
            self.open_index = Some(cycle::step(current, self.len, direction)?);
        }
        Ok(())
    }

    pub fn apply(&mut self, action: LightboxAction) -> Result<(), ViewerError> {
        match action {
            LightboxAction::Open(index) => self.open(index),
            LightboxAction::Close => {
                self.close();
                Ok(())
            }
            LightboxAction::Advance(direction) => self.advance(direction),
        }
    }

    /// "{n} / {len}" indicator for the open item.
    pub fn position_label(&self) -> Option<String> {
        self.open_index
            .map(|index| format!("{} / {}", index + 1, self.len))
    }

    /// Keyboard shortcut table used while the viewer is open.
    pub fn key_action(key: &str) -> Option<LightboxAction> {
        match key {
            "Escape" => Some(LightboxAction::Close),
            "ArrowRight" => Some(LightboxAction::Advance(Direction::Next)),
            "ArrowLeft" => Some(LightboxAction::Advance(Direction::Previous)),
            _ => None,
        }
    }
}

impl Reducible for Lightbox {
    type Action = LightboxAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        if let Err(e) = next.apply(action) {
            warn!("Ignoring lightbox action {:?}: {}", action, e);
            return self;
        }
        if next == *self {
            return self;
        }
        debug!("Lightbox {:?} -> {:?}", self.open_index, next.open_index);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advancing_wraps_past_the_last_item() {
        let mut lightbox = Lightbox::new(5);
        lightbox.open(2).unwrap();
        for _ in 0..3 {
            lightbox.advance(Direction::Next).unwrap();
        }
        assert_eq!(lightbox.open_index(), Some(0));

        lightbox.advance(Direction::Previous).unwrap();
        assert_eq!(lightbox.open_index(), Some(4));
    }

    #[test]
    fn close_is_idempotent() {
        let mut lightbox = Lightbox::new(5);
        lightbox.open(1).unwrap();
        lightbox.close();
        assert!(!lightbox.is_open());
        lightbox.close();
        assert!(!lightbox.is_open());
        assert_eq!(lightbox.open_index(), None);
    }

    #[test]
    fn open_rejects_index_equal_to_len() {
        let mut lightbox = Lightbox::new(5);
        assert_eq!(
            lightbox.open(5),
            Err(ViewerError::IndexOutOfRange { index: 5, len: 5 })
        );
        assert!(!lightbox.is_open());
    }

    #[test]
    fn failed_open_keeps_current_item() {
        let mut lightbox = Lightbox::new(3);
        lightbox.open(1).unwrap();
        assert!(lightbox.open(7).is_err());
        assert_eq!(lightbox.open_index(), Some(1));
    }

    #[test]
    fn open_retargets_while_open() {
        let mut lightbox = Lightbox::new(5);
        lightbox.open(1).unwrap();
        lightbox.open(3).unwrap();
        assert_eq!(lightbox.open_index(), Some(3));
    }

    #[test]
    fn advance_while_closed_does_nothing() {
        let mut lightbox = Lightbox::new(5);
        assert_eq!(lightbox.advance(Direction::Next), Ok(()));
        assert_eq!(lightbox.open_index(), None);
    }

    #[test]
    fn position_label_is_one_based() {
        let mut lightbox = Lightbox::new(5);
        assert_eq!(lightbox.position_label(), None);
        lightbox.open(2).unwrap();
        assert_eq!(lightbox.position_label().as_deref(), Some("3 / 5"));
    }

    #[test]
    fn key_table() {
        assert_eq!(Lightbox::key_action("Escape"), Some(LightboxAction::Close));
        assert_eq!(
            Lightbox::key_action("ArrowRight"),
            Some(LightboxAction::Advance(Direction::Next))
        );
        assert_eq!(
            Lightbox::key_action("ArrowLeft"),
            Some(LightboxAction::Advance(Direction::Previous))
        );
        assert_eq!(Lightbox::key_action("Enter"), None);
    }

    #[test]
    fn reducer_keeps_same_state_on_error_and_noop() {
        let state = Rc::new(Lightbox::new(5));
        let after_bad_open = state.clone().reduce(LightboxAction::Open(9));
        assert!(Rc::ptr_eq(&state, &after_bad_open));

        let after_close = state.clone().reduce(LightboxAction::Close);
        assert!(Rc::ptr_eq(&state, &after_close));

        let opened = state.reduce(LightboxAction::Open(4));
        assert_eq!(opened.open_index(), Some(4));
        let wrapped = opened.reduce(LightboxAction::Advance(Direction::Next));
        assert_eq!(wrapped.open_index(), Some(0));
    }
}
