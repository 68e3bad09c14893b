use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"This page doesn't exist."}</p>
            <Link<Route> to={Route::Home} classes="btn-gold">
                {"Back to Home"}
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    background: #1a2744;
                    color: #fff;
                    text-align: center;
                }
                .not-found h1 {
                    font-family: 'Playfair Display', serif;
                    font-size: 5rem;
                    color: #c9a961;
                    margin: 0;
                }
                "#}
            </style>
        </div>
    }
}
