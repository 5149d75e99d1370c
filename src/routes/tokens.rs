use crate::{
    components::LoadingBoundary,
    state::TokenMap,
    types::Token,
    utils::humanize_token_amount,
};
use leptos::prelude::*;
use std::collections::HashMap;
use tracing::{debug, info};

#[cfg(test)]
#[path = "tokens_test.rs"]
mod tokens_test;

/// Registry entries in the order the page lists them.
pub(crate) fn sorted_tokens(map: &HashMap<String, Token>) -> Vec<Token> {
    let mut tokens: Vec<Token> = map.values().cloned().collect();
    tokens.sort_by(|a, b| a.symbol.cmp(&b.symbol));
    tokens
}

#[component]
pub fn Tokens() -> impl IntoView {
    info!("rendering <Tokens/>");

    on_cleanup(move || {
        info!("cleaning up <Tokens/>");
    });

    let token_map = use_context::<TokenMap>().expect("token map context missing!");

    let tokens = LocalResource::new(move || {
        let token_map = token_map.clone();
        async move {
            debug!("loading token registry");
            sorted_tokens(&token_map)
        }
    });

    let token_rows = move || {
        Suspend::new(async move {
            tokens
                .await
                .into_iter()
                .map(|token| {
                    view! {
                        <div class="flex items-center justify-between px-3 py-2 rounded hover:bg-neutral-100">
                            <div class="flex items-center gap-3">
                                <div>
                                    <div class="text-sm font-semibold">{token.symbol.clone()}</div>
                                    <div class="text-xs text-gray-400">{token.name.clone()}</div>
                                </div>
                            </div>
                            <div class="text-right">
                                <div class="text-sm font-semibold">
                                    {humanize_token_amount(0u128, token.decimals)}
                                </div>
                                <div class="text-xs text-gray-400">"$0"</div>
                            </div>
                        </div>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <LoadingBoundary>
            <div class="p-2 max-w-lg">
                <div class="text-3xl font-bold mb-4">"Tokens"</div>
                {token_rows}
            </div>
        </LoadingBoundary>
    }
}
