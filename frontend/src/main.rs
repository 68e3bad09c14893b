use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use web_sys::MouseEvent;

mod config;
mod error;
mod viewer {
    pub mod cycle;
    pub mod keyboard;
    pub mod lightbox;
    pub mod reveal;
    pub mod scroll_edges;
}
mod components {
    pub mod carousel;
    pub mod layout;
    pub mod lightbox;
    pub mod listener;
    pub mod reveal;
}
mod sections {
    pub mod hero;
    pub mod amenities;
    pub mod floor_guide;
    pub mod apartments;
    pub mod gallery;
    pub mod rooftop;
    pub mod location;
    pub mod contact;
    pub mod footer;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use components::layout::LayoutProvider;
use components::listener::WindowListener;
use pages::{home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

const NAV_LINKS: &[(&str, &str)] = &[
    ("#amenities", "Amenities"),
    ("#floors", "Floor Guide"),
    ("#apartments", "Apartments"),
    ("#gallery", "Gallery"),
    ("#rooftop", "Rooftop"),
    ("#location", "Location"),
];

fn past_scroll_threshold(scroll_y: f64) -> bool {
    scroll_y > config::NAV_SCROLL_THRESHOLD
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let listener = WindowListener::add("scroll", move |_| {
                let scroll_y = web_sys::window()
                    .and_then(|w| w.scroll_y().ok())
                    .unwrap_or(0.0);
                is_scrolled.set(past_scroll_threshold(scroll_y));
            });

            move || drop(listener)
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Anchor navigation still happens, only the menu closes.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Rainbow "}<span class="gold">{"Apartments"}</span>
                </Link<Route>>

                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <a key={*href} href={*href} class="nav-link" onclick={close_menu.clone()}>
                            {*label}
                        </a>
                    }) }
                    <a href="#contact" class="nav-cta" onclick={close_menu.clone()}>
                        {"Enquire"}
                    </a>
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    padding: 1.5rem 0;
                    transition: all 0.5s ease;
                }
                .top-nav.scrolled {
                    background: rgba(26, 39, 68, 0.95);
                    backdrop-filter: blur(12px);
                    padding: 1rem 0;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.2);
                }
                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    font-family: 'Playfair Display', serif;
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #fff;
                    text-decoration: none;
                }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }
                .nav-link {
                    color: rgba(255, 255, 255, 0.8);
                    font-size: 0.875rem;
                    letter-spacing: 0.05em;
                    text-decoration: none;
                    transition: color 0.3s ease;
                }
                .nav-link:hover {
                    color: #c9a961;
                }
                .nav-cta {
                    background: #c9a961;
                    color: #1a2744;
                    padding: 0.625rem 1.5rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                    text-decoration: none;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.5rem;
                }
                .burger-menu span {
                    display: block;
                    width: 24px;
                    height: 2px;
                    background: #fff;
                }
                @media (max-width: 1023px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-right {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        gap: 1.25rem;
                        padding: 1.5rem;
                        background: rgba(26, 39, 68, 0.98);
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <LayoutProvider>
                <Nav />
                <Switch<Route> render={switch} />
            </LayoutProvider>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!("error initializing log:", e.to_string());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_turns_solid_past_threshold() {
        assert!(!past_scroll_threshold(0.0));
        assert!(!past_scroll_threshold(50.0));
        assert!(past_scroll_threshold(50.5));
    }

    #[test]
    fn nav_links_cover_every_section_anchor() {
        let anchors: Vec<&str> = NAV_LINKS.iter().map(|(href, _)| *href).collect();
        for id in ["#amenities", "#floors", "#apartments", "#gallery", "#rooftop", "#location"] {
            assert!(anchors.contains(&id), "missing {}", id);
        }
    }
}
