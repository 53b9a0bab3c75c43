use leptos::prelude::*;

/// Two-column application frame: fixed sidebar on the left, the active
/// page in the center.
#[component]
pub fn Shell(
    left: impl Fn() -> AnyView + Send + Sync + 'static,
    center: impl Fn() -> AnyView + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <div class="shell">
            <aside class="shell__left">{left()}</aside>
            <main class="shell__center">{center()}</main>
        </div>
    }
}
