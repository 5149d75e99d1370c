use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router_macro::path;
use tracing::{debug, info};

mod components;
mod constants;
mod error;
mod routes;
mod state;
mod types;
mod utils;

pub use error::Error;

use constants::TOKEN_MAP;
use routes::{nav::Nav, swap::Swap, tokens::Tokens};
use state::TokenMap;

#[component]
pub fn App() -> impl IntoView {
    info!("rendering <App/>");

    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Global Contexts

    provide_context(TokenMap::new(TOKEN_MAP.clone()));

    let token_map = use_context::<TokenMap>().expect("token map context missing!");
    debug!("{} known tokens", token_map.len());

    view! {
        <Title text="Tidepool" />
        <Router>
            <header>
                <div class="flex justify-between items-center">
                    <div
                        id="mainTitle"
                        class="my-2 font-bold text-3xl line-clamp-1 transition-transform duration-300"
                    >
                        "Tidepool"
                    </div>
                </div>
                <hr />
                <Nav />
                <hr />
            </header>
            <main class="overflow-x-auto">
                <Routes transition=true fallback=|| "This page could not be found.">
                    <Route path=path!("/") view=Swap />
                    <Route path=path!("/swap") view=Swap />
                    <Route path=path!("/tokens") view=Tokens />
                </Routes>
            </main>
        </Router>
    }
}
