use super::page_container::PAGE_SHELL_CLASSES;
use leptos::prelude::*;

#[cfg(test)]
#[path = "loading_boundary_test.rs"]
mod loading_boundary_test;

/// Shown while the wrapped content is still resolving.
pub(crate) const LOADING_FALLBACK: &str = "Loading...";

/// Defers rendering of its children until every resource they read has
/// resolved, showing a plain text placeholder in the meantime. Once resolved,
/// the children appear inside the same shell as [`PageContainer`].
///
/// The pending -> ready transition belongs to `<Suspense/>`; this wrapper only
/// supplies the fallback and the shell.
///
/// [`PageContainer`]: super::PageContainer
#[component]
pub fn LoadingBoundary(children: ChildrenFn) -> impl IntoView {
    view! {
        <Suspense fallback=|| LOADING_FALLBACK>
            <div class=PAGE_SHELL_CLASSES>{children()}</div>
        </Suspense>
    }
}
