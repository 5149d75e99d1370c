use leptos::prelude::*;
use leptos_router::components::A;
use lucide_leptos::{ArrowUpDown, Coins};

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="flex items-center gap-4">
            <A href="/swap">
                <div class="inline-flex items-center gap-1">
                    <ArrowUpDown size=16 />
                    "Swap"
                </div>
            </A>
            <A href="/tokens">
                <div class="inline-flex items-center gap-1">
                    <Coins size=16 />
                    "Tokens"
                </div>
            </A>
        </nav>
    }
}
