use leptos::prelude::*;

#[cfg(test)]
#[path = "page_container_test.rs"]
mod page_container_test;

/// Tailwind classes shared by every page shell.
pub(crate) const PAGE_SHELL_CLASSES: &str = "min-h-screen bg-neutral-50";

/// Full-viewport-height shell around a page's content. The children are
/// rendered unmodified.
#[component]
pub fn PageContainer(children: Children) -> impl IntoView {
    view! { <div class=PAGE_SHELL_CLASSES>{children()}</div> }
}
