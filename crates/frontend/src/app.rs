use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::currency_ctx::CurrencyContext;
use crate::shared::i18n::I18nContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // App-wide contexts: navigation, locale, display currency
    provide_context(AppGlobalContext::new());
    provide_context(I18nContext::new());
    provide_context(CurrencyContext::new());

    view! {
        <AppShell />
    }
}
