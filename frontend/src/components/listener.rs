use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, KeyboardEvent, Window};

use crate::viewer::keyboard::KeySource;

/// A `window` event listener that is removed when dropped.
pub struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    pub fn add<F>(event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let window = web_sys::window()?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);

        if let Err(e) = window
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        {
            warn!("Failed to add {} listener: {:?}", event, e);
            return None;
        }

        Some(Self {
            window,
            event,
            callback,
        })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Err(e) = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            warn!("Failed to remove {} listener: {:?}", self.event, e);
        }
    }
}

/// Keydown events on the browser window.
pub struct WindowKeys;

impl KeySource for WindowKeys {
    type Guard = WindowListener;

    fn attach(&self, mut on_key: Box<dyn FnMut(&str)>) -> Option<WindowListener> {
        WindowListener::add("keydown", move |event: Event| {
            if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                on_key(&event.key());
            }
        })
    }
}
