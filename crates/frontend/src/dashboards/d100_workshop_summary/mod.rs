use crate::shared::currency_ctx::use_currency;
use crate::shared::fetch;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use contracts::dashboards::d100_workshop_summary::WorkshopSummaryResponse;
use leptos::prelude::*;

/// Workshop dashboard: month aggregates, status breakdown, health counters
#[component]
pub fn WorkshopSummaryPage() -> impl IntoView {
    let i18n = use_i18n();
    let currency = use_currency();

    let (summary, set_summary) = signal::<Option<WorkshopSummaryResponse>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch_summary = move || {
        leptos::task::spawn_local(async move {
            match fetch::get_json::<WorkshopSummaryResponse>("/api/d100/workshop-summary").await {
                Ok(v) => {
                    set_summary.set(Some(v));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    fetch_summary();

    view! {
        <div class="content">
            <div class="header">
                <h2>{move || i18n.t("dashboard.title")}</h2>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| fetch_summary()>
                        {icon("refresh")}
                        {move || i18n.t("common.refresh")}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            {move || match summary.get() {
                None => view! { <div class="loading">{move || i18n.t("common.loading")}</div> }.into_any(),
                Some(s) => {
                    let by_status = s.orders_by_status;
                    view! {
                        <div class="stat-grid">
                            <div class="stat-card">
                                <div class="stat-card__label">
                                    {move || i18n.t("dashboard.orders_this_month")}
                                </div>
                                <div class="stat-card__value">{s.orders_this_month}</div>
                                <div class="stat-card__hint">{s.period.clone()}</div>
                            </div>
                            <div class="stat-card">
                                <div class="stat-card__label">
                                    {move || i18n.t("dashboard.revenue_this_month")}
                                </div>
                                <div class="stat-card__value">{currency.format(s.revenue_this_month)}</div>
                            </div>
                            <div class="stat-card">
                                <div class="stat-card__label">
                                    {move || i18n.t("dashboard.average_order")}
                                </div>
                                <div class="stat-card__value">{currency.format(s.average_order_value)}</div>
                            </div>
                            <div class="stat-card">
                                <div class="stat-card__label">
                                    {move || i18n.t("dashboard.total_parts")}
                                </div>
                                <div class="stat-card__value">{s.total_parts}</div>
                            </div>
                            <div class="stat-card">
                                <div class="stat-card__label">
                                    {move || i18n.t("dashboard.low_stock")}
                                </div>
                                <div class="stat-card__value">{s.low_stock_materials}</div>
                            </div>
                            <div class="stat-card">
                                <div class="stat-card__label">
                                    {move || i18n.t("dashboard.maintenance_due")}
                                </div>
                                <div class="stat-card__value">{s.printers_due_maintenance}</div>
                            </div>
                        </div>

                        <h3>{move || i18n.t("dashboard.orders_by_status")}</h3>
                        <div class="stat-grid">
                            <div class="stat-card">
                                <div class="stat-card__label">{move || i18n.t("orders.status.new")}</div>
                                <div class="stat-card__value">{by_status.new}</div>
                            </div>
                            <div class="stat-card">
                                <div class="stat-card__label">{move || i18n.t("orders.status.printing")}</div>
                                <div class="stat-card__value">{by_status.printing}</div>
                            </div>
                            <div class="stat-card">
                                <div class="stat-card__label">{move || i18n.t("orders.status.finished")}</div>
                                <div class="stat-card__value">{by_status.finished}</div>
                            </div>
                            <div class="stat-card">
                                <div class="stat-card__label">{move || i18n.t("orders.status.delivered")}</div>
                                <div class="stat-card__value">{by_status.delivered}</div>
                            </div>
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
