//! Keyboard subscription whose lifetime follows the lightbox's open period.

/// Something that can deliver key presses to a handler.
///
/// The returned guard keeps the handler attached; dropping it detaches.
pub trait KeySource {
    type Guard;

    fn attach(&self, on_key: Box<dyn FnMut(&str)>) -> Option<Self::Guard>;
}

/// Holds at most one attached key handler.
pub struct KeyboardScope<S: KeySource> {
    source: S,
    guard: Option<S::Guard>,
}

impl<S: KeySource> KeyboardScope<S> {
    pub fn new(source: S) -> Self {
        Self { source, guard: None }
    }

    /// Brings the binding in line with the viewer's open state.
    ///
    /// While open exactly one handler stays attached, built by `make_handler`
    /// only when none is present. While closed nothing is attached.
    pub fn sync<F>(&mut self, is_open: bool, make_handler: F) -> bool
    where
        F: FnOnce() -> Box<dyn FnMut(&str)>,
    {
        if !is_open {
            self.guard = None;
        } else if self.guard.is_none() {
            self.guard = self.source.attach(make_handler());
        }
        self.guard.is_some()
    }

    pub fn is_attached(&self) -> bool {
        self.guard.is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;
    use crate::viewer::lightbox::Lightbox;

    type Handlers = Rc<RefCell<Vec<(u32, Box<dyn FnMut(&str)>)>>>;

    #[derive(Clone, Default)]
    struct FakeKeys {
        handlers: Handlers,
        next_id: Rc<Cell<u32>>,
    }

    struct FakeGuard {
        handlers: Handlers,
        id: u32,
    }

    impl Drop for FakeGuard {
        fn drop(&mut self) {
            self.handlers.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }

    impl KeySource for FakeKeys {
        type Guard = FakeGuard;

        fn attach(&self, on_key: Box<dyn FnMut(&str)>) -> Option<FakeGuard> {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.handlers.borrow_mut().push((id, on_key));
            Some(FakeGuard {
                handlers: self.handlers.clone(),
                id,
            })
        }
    }

    impl FakeKeys {
        fn active(&self) -> usize {
            self.handlers.borrow().len()
        }

        fn press(&self, key: &str) {
            for (_, handler) in self.handlers.borrow_mut().iter_mut() {
                handler(key);
            }
        }
    }

    fn shortcut_handler(lightbox: &Rc<RefCell<Lightbox>>) -> Box<dyn FnMut(&str)> {
        let lightbox = lightbox.clone();
        Box::new(move |key: &str| {
            if let Some(action) = Lightbox::key_action(key) {
                let _ = lightbox.borrow_mut().apply(action);
            }
        })
    }

    fn sync_with(scope: &mut KeyboardScope<FakeKeys>, lightbox: &Rc<RefCell<Lightbox>>) -> bool {
        let is_open = lightbox.borrow().is_open();
        scope.sync(is_open, || shortcut_handler(lightbox))
    }

    #[test]
    fn closed_viewer_binds_nothing() {
        let keys = FakeKeys::default();
        let mut scope = KeyboardScope::new(keys.clone());
        let lightbox = Rc::new(RefCell::new(Lightbox::new(5)));

        assert!(!sync_with(&mut scope, &lightbox));
        assert_eq!(keys.active(), 0);
        keys.press("ArrowRight");
        assert_eq!(lightbox.borrow().open_index(), None);
    }

    #[test]
    fn retarget_and_advance_keep_a_single_handler() {
        let keys = FakeKeys::default();
        let mut scope = KeyboardScope::new(keys.clone());
        let lightbox = Rc::new(RefCell::new(Lightbox::new(5)));

        lightbox.borrow_mut().open(1).unwrap();
        assert!(sync_with(&mut scope, &lightbox));
        assert_eq!(keys.active(), 1);

        lightbox.borrow_mut().open(3).unwrap();
        assert!(sync_with(&mut scope, &lightbox));
        assert_eq!(keys.active(), 1);

        keys.press("ArrowRight");
        assert_eq!(lightbox.borrow().open_index(), Some(4));
        sync_with(&mut scope, &lightbox);
        assert_eq!(keys.active(), 1);

        // One handler means one step per key press.
        keys.press("ArrowRight");
        assert_eq!(lightbox.borrow().open_index(), Some(0));
    }

    #[test]
    fn escape_through_the_handler_unbinds() {
        let keys = FakeKeys::default();
        let mut scope = KeyboardScope::new(keys.clone());
        let lightbox = Rc::new(RefCell::new(Lightbox::new(5)));

        lightbox.borrow_mut().open(2).unwrap();
        sync_with(&mut scope, &lightbox);
        keys.press("Escape");
        assert!(!lightbox.borrow().is_open());

        assert!(!sync_with(&mut scope, &lightbox));
        assert_eq!(keys.active(), 0);
        assert!(!scope.is_attached());

        // Reopened without a sync: Escape must not reach it.
        lightbox.borrow_mut().open(3).unwrap();
        keys.press("Escape");
        assert_eq!(lightbox.borrow().open_index(), Some(3));
    }

    #[test]
    fn dropping_the_scope_while_open_unbinds() {
        let keys = FakeKeys::default();
        let lightbox = Rc::new(RefCell::new(Lightbox::new(2)));
        lightbox.borrow_mut().open(0).unwrap();
        {
            let mut scope = KeyboardScope::new(keys.clone());
            sync_with(&mut scope, &lightbox);
            assert_eq!(keys.active(), 1);
        }
        assert_eq!(keys.active(), 0);
    }
}
