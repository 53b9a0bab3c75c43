use crate::shared::api_utils::api_url;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Reports page: date range + CSV download of the orders register
#[component]
pub fn ReportsPage() -> impl IntoView {
    let i18n = use_i18n();

    let (from, set_from) = signal(String::new());
    let (to, set_to) = signal(String::new());

    let export_csv = move || {
        let mut query = Vec::new();
        let from_value = from.get_untracked();
        let to_value = to.get_untracked();
        if !from_value.is_empty() {
            query.push(format!("from={}", from_value));
        }
        if !to_value.is_empty() {
            query.push(format!("to={}", to_value));
        }
        let path = if query.is_empty() {
            "/api/reports/orders.csv".to_string()
        } else {
            format!("/api/reports/orders.csv?{}", query.join("&"))
        };

        // Let the browser handle the attachment download
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(&api_url(&path));
        }
    };

    view! {
        <div class="content">
            <div class="header">
                <h2>{move || i18n.t("reports.title")}</h2>
            </div>

            <div class="details-form">
                <div class="form-row">
                    <div class="form-group">
                        <label for="from">{move || i18n.t("reports.from")}</label>
                        <input
                            type="date"
                            id="from"
                            prop:value=move || from.get()
                            on:input=move |ev| set_from.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="to">{move || i18n.t("reports.to")}</label>
                        <input
                            type="date"
                            id="to"
                            prop:value=move || to.get()
                            on:input=move |ev| set_to.set(event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="form-actions">
                    <button class="button button--primary" on:click=move |_| export_csv()>
                        {icon("download")}
                        {move || i18n.t("reports.export_csv")}
                    </button>
                </div>
            </div>
        </div>
    }
}
