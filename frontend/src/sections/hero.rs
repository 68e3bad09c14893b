use yew::prelude::*;

use crate::components::listener::WindowListener;

/// Background shift and content fade for a given hero scroll progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parallax {
    pub shift_percent: f64,
    pub opacity: f64,
}

impl Parallax {
    pub fn at(progress: f64) -> Self {
        let progress = progress.clamp(0.0, 1.0);
        Self {
            shift_percent: progress * 30.0,
            opacity: (1.0 - progress / 0.5).clamp(0.0, 1.0),
        }
    }

    /// Progress is how far the window has scrolled through the first viewport.
    fn measure() -> Self {
        let progress = web_sys::window().and_then(|window| {
            let scroll_y = window.scroll_y().ok()?;
            let height = window.inner_height().ok()?.as_f64()?;
            (height > 0.0).then(|| scroll_y / height)
        });
        Self::at(progress.unwrap_or(0.0))
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let parallax = use_state_eq(|| Parallax::at(0.0));

    {
        let parallax = parallax.clone();
        use_effect_with_deps(
            move |_| {
                parallax.set(Parallax::measure());
                let listener = WindowListener::add("scroll", move |_| {
                    parallax.set(Parallax::measure());
                });
                move || drop(listener)
            },
            (),
        );
    }

    html! {
        <section class="hero">
            <div
                class="hero-background"
                style={format!("transform: translateY({}%);", parallax.shift_percent)}
            >
                <img src="/images/hero.webp" alt="Rainbow Apartments Exterior" />
                <div class="hero-overlay-side"></div>
                <div class="hero-overlay-bottom"></div>
            </div>

            <div class="hero-content" style={format!("opacity: {};", parallax.opacity)}>
                <div class="container">
                    <div class="hero-text">
                        <div class="hero-tagline enter" style="animation-delay: 0.3s;">
                            <span class="hero-rule"></span>
                            <span class="eyebrow">{"A Life Above the Ordinary"}</span>
                        </div>
                        <h1 class="enter" style="animation-delay: 0.5s;">
                            {"Rainbow"}
                            <br />
                            <span class="gold">{"Apartments"}</span>
                        </h1>
                        <p class="hero-subtitle enter" style="animation-delay: 0.7s;">
                            {"Luxury Living in Rathmalana"}
                        </p>
                        <p class="hero-description enter" style="animation-delay: 0.9s;">
                            {"Experience elevated living with panoramic views of the sea, lagoon, and Bolgoda Lake. \
                              Modern architecture meets tranquil surroundings in this exclusive residential sanctuary."}
                        </p>
                        <div class="hero-location enter" style="animation-delay: 1.0s;">
                            <span class="gold">{"📍"}</span>
                            <span>{"Rathmalana, Sri Lanka"}</span>
                        </div>
                        <div class="hero-cta-group enter" style="animation-delay: 1.1s;">
                            <a href="#apartments" class="btn-gold">{"Explore Apartments →"}</a>
                            <a href="#contact" class="btn-outline">{"📅 Schedule a Visit"}</a>
                        </div>
                    </div>
                </div>
            </div>

            <div class="scroll-indicator">
                <span>{"Scroll"}</span>
                <div class="scroll-line"></div>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    height: 100vh;
                    width: 100%;
                    overflow: hidden;
                }
                .hero-background {
                    position: absolute;
                    inset: 0;
                    height: 120%;
                    will-change: transform;
                }
                .hero-background img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .hero-overlay-side {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to right, rgba(26, 39, 68, 0.9), rgba(26, 39, 68, 0.6), transparent);
                }
                .hero-overlay-bottom {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, rgba(26, 39, 68, 0.5), transparent);
                }
                .hero-content {
                    position: relative;
                    z-index: 10;
                    height: 100%;
                    display: flex;
                    align-items: center;
                }
                .hero-text {
                    max-width: 42rem;
                }
                .hero-tagline {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-bottom: 1.5rem;
                }
                .hero-rule {
                    width: 3rem;
                    height: 1px;
                    background: #c9a961;
                }
                .hero h1 {
                    font-family: 'Playfair Display', serif;
                    font-size: clamp(3rem, 7vw, 4.5rem);
                    font-weight: 700;
                    color: #fff;
                    line-height: 1.1;
                    margin: 0 0 1rem;
                }
                .hero-subtitle {
                    font-size: clamp(1.25rem, 2.5vw, 1.5rem);
                    color: rgba(255, 255, 255, 0.9);
                    font-weight: 300;
                    margin-bottom: 1.5rem;
                }
                .hero-description {
                    color: rgba(255, 255, 255, 0.7);
                    line-height: 1.7;
                    max-width: 36rem;
                    margin-bottom: 2rem;
                }
                .hero-location {
                    display: flex;
                    gap: 0.5rem;
                    color: rgba(255, 255, 255, 0.6);
                    font-size: 0.875rem;
                    margin-bottom: 2rem;
                }
                .hero-cta-group {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                }
                .enter {
                    opacity: 0;
                    animation: heroEnter 0.8s ease-out forwards;
                }
                @keyframes heroEnter {
                    from { opacity: 0; transform: translateY(30px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                .scroll-indicator {
                    position: absolute;
                    bottom: 2rem;
                    left: 50%;
                    transform: translateX(-50%);
                    z-index: 10;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.5rem;
                    color: rgba(255, 255, 255, 0.5);
                    font-size: 0.75rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    animation: scrollBob 1.5s ease-in-out infinite;
                }
                .scroll-line {
                    width: 1px;
                    height: 3rem;
                    background: linear-gradient(to bottom, #c9a961, transparent);
                }
                @keyframes scrollBob {
                    0%, 100% { transform: translate(-50%, 0); }
                    50% { transform: translate(-50%, 10px); }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_of_page_is_unshifted_and_opaque() {
        assert_eq!(
            Parallax::at(0.0),
            Parallax {
                shift_percent: 0.0,
                opacity: 1.0
            }
        );
    }

    #[test]
    fn quarter_way_is_half_faded() {
        let parallax = Parallax::at(0.25);
        assert!((parallax.shift_percent - 7.5).abs() < 1e-9);
        assert!((parallax.opacity - 0.5).abs() < 1e-9);
    }

    #[test]
    fn content_gone_past_half_and_shift_capped() {
        assert_eq!(Parallax::at(0.5).opacity, 0.0);
        assert_eq!(Parallax::at(0.8).opacity, 0.0);
        assert_eq!(Parallax::at(3.0).shift_percent, 30.0);
        assert_eq!(Parallax::at(-1.0), Parallax::at(0.0));
    }
}
