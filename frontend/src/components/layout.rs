use log::debug;
use yew::prelude::*;

use crate::components::listener::WindowListener;
use crate::config::COMPACT_BREAKPOINT;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutMode {
    Compact,
    Wide,
}

impl LayoutMode {
    pub fn from_width(width: f64) -> Self {
        if width < COMPACT_BREAKPOINT {
            LayoutMode::Compact
        } else {
            LayoutMode::Wide
        }
    }

    pub fn is_compact(self) -> bool {
        self == LayoutMode::Compact
    }

    /// Reads the current window width; falls back to the wide layout.
    fn measure() -> Self {
        web_sys::window()
            .and_then(|window| window.inner_width().ok())
            .and_then(|width| width.as_f64())
            .map(Self::from_width)
            .unwrap_or(LayoutMode::Wide)
    }
}

#[derive(Properties, PartialEq)]
pub struct LayoutProviderProps {
    pub children: Children,
}

/// Owns the single resize subscription and shares the derived layout mode.
#[function_component(LayoutProvider)]
pub fn layout_provider(props: &LayoutProviderProps) -> Html {
    let mode = use_state(LayoutMode::measure);

    {
        let mode = mode.clone();
        use_effect_with_deps(
            move |_| {
                let mut current = *mode;
                let listener = WindowListener::add("resize", move |_| {
                    let measured = LayoutMode::measure();
                    if measured != current {
                        debug!("Layout mode changed to {:?}", measured);
                        current = measured;
                        mode.set(measured);
                    }
                });
                move || drop(listener)
            },
            (),
        );
    }

    html! {
        <ContextProvider<LayoutMode> context={*mode}>
            { for props.children.iter() }
        </ContextProvider<LayoutMode>>
    }
}

#[hook]
pub fn use_layout_mode() -> LayoutMode {
    use_context::<LayoutMode>().unwrap_or(LayoutMode::Wide)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_exclusive() {
        assert_eq!(LayoutMode::from_width(1023.0), LayoutMode::Compact);
        assert_eq!(LayoutMode::from_width(1024.0), LayoutMode::Wide);
        assert!(LayoutMode::from_width(375.0).is_compact());
        assert!(!LayoutMode::from_width(1920.0).is_compact());
    }
}
