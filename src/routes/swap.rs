use crate::{
    components::PageContainer,
    error::Error,
    state::TokenMap,
    types::Token,
    utils::humanize_token_amount,
};
use codee::string::FromToStringCodec;
use leptos::html::Select;
use leptos::prelude::*;
use leptos_router::{hooks::query_signal_with_options, NavigateOptions};
use leptos_use::storage::use_local_storage;
use lucide_leptos::ArrowUpDown;
use std::collections::HashMap;
use tracing::{debug, info};

#[cfg(test)]
#[path = "swap_test.rs"]
mod swap_test;

/// Keeps free-form input constrained to a plain decimal amount.
pub(crate) fn sanitize_amount(input: &str) -> String {
    let mut seen_dot = false;
    input
        .chars()
        .filter(|c| match c {
            '0'..='9' => true,
            '.' if !seen_dot => {
                seen_dot = true;
                true
            }
            _ => false,
        })
        .collect()
}

pub(crate) fn lookup<'a>(
    map: &'a HashMap<String, Token>,
    symbol: &str,
) -> Result<&'a Token, Error> {
    map.get(symbol).ok_or(Error::UnknownToken)
}

#[component]
pub fn Swap() -> impl IntoView {
    info!("rendering <Swap/>");

    on_cleanup(move || {
        info!("cleaning up <Swap/>");
    });

    let token_map = use_context::<TokenMap>().expect("token map context missing!");

    // prevents scrolling to the top of the page each time a query param changes
    let nav_options = NavigateOptions {
        scroll: false,
        ..Default::default()
    };

    let (token_x, set_token_x) =
        query_signal_with_options::<String>("from".to_string(), nav_options.clone());
    let (token_y, set_token_y) =
        query_signal_with_options::<String>("to".to_string(), nav_options.clone());

    let (amount_x, set_amount_x) = signal(String::default());
    let (amount_y, set_amount_y) = signal(String::default());

    let (last_pair, set_last_pair, _) =
        use_local_storage::<String, FromToStringCodec>("last_pair");

    // restore the previous session's pair when the url doesn't name one
    Effect::new(move |_| {
        if token_x.get_untracked().is_none() && token_y.get_untracked().is_none() {
            let pair = last_pair.get_untracked();
            if let Some((from, to)) = pair.split_once('/') {
                debug!("restoring last pair {from}/{to}");
                set_token_x.set(Some(from.to_string()));
                set_token_y.set(Some(to.to_string()));
            }
        }
    });

    Effect::new(move |_| {
        if let (Some(from), Some(to)) = (token_x.get(), token_y.get()) {
            set_last_pair.set(format!("{from}/{to}"));
        }
    });

    let select_x_node_ref = NodeRef::<Select>::new();
    let select_y_node_ref = NodeRef::<Select>::new();

    Effect::new(move |_| {
        let token_x = token_x.get().unwrap_or_default();
        if let Some(select_x) = select_x_node_ref.get() {
            select_x.set_value(&token_x)
        }
    });

    Effect::new(move |_| {
        let token_y = token_y.get().unwrap_or_default();
        if let Some(select_y) = select_y_node_ref.get() {
            select_y.set_value(&token_y)
        }
    });

    let flip = move |_| {
        let from = token_x.get();
        let to = token_y.get();
        set_token_x.set(to);
        set_token_y.set(from);
        set_amount_x.set(amount_y.get_untracked());
        set_amount_y.set(String::new());
    };

    let symbols = {
        let mut symbols: Vec<String> = token_map.keys().cloned().collect();
        symbols.sort();
        symbols
    };

    let options_x = symbols
        .iter()
        .map(|symbol| view! { <option value=symbol.clone()>{symbol.clone()}</option> })
        .collect_view();
    let options_y = symbols
        .iter()
        .map(|symbol| view! { <option value=symbol.clone()>{symbol.clone()}</option> })
        .collect_view();

    let token_map_x = token_map.clone();
    let balance_x = move || {
        let symbol = token_x.get()?;
        lookup(&token_map_x, &symbol)
            .inspect_err(|err| debug!("{err}"))
            .ok()
            .map(|token| humanize_token_amount(0u128, token.decimals))
    };
    let token_map_y = token_map.clone();
    let balance_y = move || {
        let symbol = token_y.get()?;
        lookup(&token_map_y, &symbol)
            .inspect_err(|err| debug!("{err}"))
            .ok()
            .map(|token| humanize_token_amount(0u128, token.decimals))
    };

    view! {
        <PageContainer>
            <div class="p-2">
                <div class="text-3xl font-bold mb-4">"Swap"</div>
                <div class="container max-w-sm space-y-6">
                    <div class="space-y-2">
                        <div class="flex justify-between">
                            <div>"From"</div>
                            <div class="py-0 px-2 text-ellipsis">"Balance: "{balance_x}</div>
                        </div>
                        <div class="flex justify-between space-x-2">
                            <input
                                class="p-1"
                                type="text"
                                inputmode="decimal"
                                placeholder="0.0"
                                prop:value=move || amount_x.get()
                                on:input=move |ev| {
                                    set_amount_x.set(sanitize_amount(&event_target_value(&ev)));
                                    set_amount_y.set(String::new());
                                }
                            />
                            <select
                                node_ref=select_x_node_ref
                                class="p-1 w-28"
                                title="Select Token X"
                                on:input=move |ev| {
                                    let token_x = event_target_value(&ev);
                                    set_token_x.set(Some(token_x));
                                }
                                prop:value=move || token_x.get().unwrap_or_default()
                            >
                                <option value="" disabled selected>
                                    "Select Token"
                                </option>
                                {options_x}
                            </select>
                        </div>
                    </div>
                    <button class="p-1 inline-flex items-center" title="Flip pair" on:click=flip>
                        <ArrowUpDown size=16 />
                    </button>
                    <div class="space-y-2">
                        <div class="flex justify-between">
                            <div>"To"</div>
                            <div class="py-0 px-2 text-ellipsis">"Balance: "{balance_y}</div>
                        </div>
                        <div class="flex justify-between space-x-2">
                            <input
                                class="p-1"
                                type="text"
                                inputmode="decimal"
                                placeholder="0.0"
                                prop:value=move || amount_y.get()
                                on:input=move |ev| {
                                    set_amount_y.set(sanitize_amount(&event_target_value(&ev)));
                                    set_amount_x.set(String::new());
                                }
                            />
                            <select
                                node_ref=select_y_node_ref
                                class="p-1 w-28"
                                title="Select Token Y"
                                on:input=move |ev| {
                                    let token_y = event_target_value(&ev);
                                    set_token_y.set(Some(token_y));
                                }
                                prop:value=move || token_y.get().unwrap_or_default()
                            >
                                <option value="" disabled selected>
                                    "Select Token"
                                </option>
                                {options_y}
                            </select>
                        </div>
                    </div>
                    <button class="p-1 block" disabled>
                        "Swap"
                    </button>
                </div>
            </div>
        </PageContainer>
    }
}
