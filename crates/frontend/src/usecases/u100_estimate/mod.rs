use crate::shared::currency_ctx::use_currency;
use crate::shared::fetch;
use crate::shared::i18n::use_i18n;
use contracts::domain::a001_material::aggregate::Material;
use contracts::domain::common::AggregateId;
use contracts::usecases::u100_estimate::{EstimateRequest, EstimateResponse};
use leptos::prelude::*;

/// What-if quote calculator over /api/estimate; nothing is persisted
#[component]
pub fn EstimatePage() -> impl IntoView {
    let i18n = use_i18n();
    let currency = use_currency();

    let (materials, set_materials) = signal::<Vec<Material>>(Vec::new());
    let (material_id, set_material_id) = signal(String::new());
    let (weight, set_weight) = signal(0.0_f64);
    let (minutes, set_minutes) = signal(0.0_f64);
    let (markup, set_markup) = signal(30.0_f64);
    let (result, set_result) = signal::<Option<EstimateResponse>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    leptos::task::spawn_local(async move {
        match fetch::get_json::<Vec<Material>>("/api/material").await {
            Ok(list) => set_materials.set(list),
            Err(e) => set_error.set(Some(e)),
        }
    });

    let calculate = move || {
        let request = EstimateRequest {
            material_id: material_id.get_untracked(),
            weight_grams: weight.get_untracked(),
            print_time_minutes: minutes.get_untracked(),
            markup_percent: markup.get_untracked(),
        };
        leptos::task::spawn_local(async move {
            match fetch::post_json::<_, EstimateResponse>("/api/estimate", &request).await {
                Ok(v) => {
                    set_result.set(Some(v));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let can_calculate =
        move || !material_id.get().is_empty() && weight.get() > 0.0 && minutes.get() > 0.0;

    view! {
        <div class="content">
            <div class="header">
                <h2>{move || i18n.t("estimate.title")}</h2>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="material">{move || i18n.t("parts.material")}</label>
                    <select
                        id="material"
                        on:change=move |ev| set_material_id.set(event_target_value(&ev))
                    >
                        <option value="" selected=move || material_id.get().is_empty()>{"—"}</option>
                        {move || materials.get().into_iter().map(|m| {
                            let id = m.base.id.as_string();
                            let id_for_selected = id.clone();
                            view! {
                                <option
                                    value={id}
                                    selected=move || material_id.get() == id_for_selected
                                >
                                    {m.base.description}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="weight">{move || i18n.t("parts.weight")}</label>
                        <input
                            type="number"
                            step="0.1"
                            min="0"
                            id="weight"
                            prop:value=move || weight.get().to_string()
                            on:input=move |ev| {
                                set_weight.set(event_target_value(&ev).parse().unwrap_or(0.0))
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label for="minutes">{move || i18n.t("parts.print_time")}</label>
                        <input
                            type="number"
                            step="1"
                            min="0"
                            id="minutes"
                            prop:value=move || minutes.get().to_string()
                            on:input=move |ev| {
                                set_minutes.set(event_target_value(&ev).parse().unwrap_or(0.0))
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label for="markup">{move || i18n.t("parts.markup")}</label>
                        <input
                            type="number"
                            step="1"
                            min="0"
                            max="500"
                            id="markup"
                            prop:value=move || markup.get().to_string()
                            on:input=move |ev| {
                                set_markup.set(event_target_value(&ev).parse().unwrap_or(0.0))
                            }
                        />
                    </div>
                </div>

                <div class="form-actions">
                    <button
                        class="button button--primary"
                        disabled=move || !can_calculate()
                        on:click=move |_| calculate()
                    >
                        {move || i18n.t("estimate.calculate")}
                    </button>
                </div>
            </div>

            {move || result.get().map(|r| {
                view! {
                    <div class="stat-grid">
                        <div class="stat-card">
                            <div class="stat-card__label">{move || i18n.t("estimate.material_cost")}</div>
                            <div class="stat-card__value">{currency.format(r.material_cost)}</div>
                        </div>
                        <div class="stat-card">
                            <div class="stat-card__label">{move || i18n.t("estimate.print_cost")}</div>
                            <div class="stat-card__value">{currency.format(r.print_cost)}</div>
                        </div>
                        <div class="stat-card">
                            <div class="stat-card__label">{move || i18n.t("estimate.base_cost")}</div>
                            <div class="stat-card__value">{currency.format(r.base_cost)}</div>
                        </div>
                        <div class="stat-card">
                            <div class="stat-card__label">{move || i18n.t("estimate.final_price")}</div>
                            <div class="stat-card__value">{currency.format(r.suggested_price)}</div>
                        </div>
                    </div>
                }
            })}
        </div>
    }
}
