use super::view_model::PartDetailsViewModel;
use crate::shared::currency_ctx::use_currency;
use crate::shared::i18n::use_i18n;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

#[component]
pub fn PartDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let i18n = use_i18n();
    let currency = use_currency();
    let vm = PartDetailsViewModel::new();
    vm.load_if_needed(id);

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>
                    {move || if vm.is_edit_mode() {
                        i18n.t("parts.edit")
                    } else {
                        i18n.t("parts.new")
                    }}
                </h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="description">{move || i18n.t("common.name")}</label>
                    <input
                        type="text"
                        id="description"
                        prop:value=move || vm.form.get().description
                        on:input=move |ev| {
                            vm.form.update(|f| f.description = event_target_value(&ev));
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="material_id">{move || i18n.t("parts.material")}</label>
                    <select
                        id="material_id"
                        on:change=move |ev| {
                            vm.form.update(|f| f.material_id = event_target_value(&ev));
                        }
                    >
                        <option value="" selected=move || vm.form.get().material_id.is_empty()>
                            {"—"}
                        </option>
                        {move || {
                            vm.materials
                                .get()
                                .into_iter()
                                .map(|m| {
                                    let id = m.base.id.as_string();
                                    let id_for_selected = id.clone();
                                    view! {
                                        <option
                                            value={id}
                                            selected=move || {
                                                vm.form.get().material_id == id_for_selected
                                            }
                                        >
                                            {m.base.description}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
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
                            prop:value=move || vm.form.get().weight_grams.to_string()
                            on:input=move |ev| {
                                let v = event_target_value(&ev).parse().unwrap_or(0.0);
                                vm.form.update(|f| f.weight_grams = v);
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label for="print_time">{move || i18n.t("parts.print_time")}</label>
                        <input
                            type="number"
                            step="1"
                            min="0"
                            id="print_time"
                            prop:value=move || vm.form.get().print_time_minutes.to_string()
                            on:input=move |ev| {
                                let v = event_target_value(&ev).parse().unwrap_or(0.0);
                                vm.form.update(|f| f.print_time_minutes = v);
                            }
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label for="markup">{move || i18n.t("parts.markup")}</label>
                    <input
                        type="number"
                        step="1"
                        min="0"
                        max="500"
                        id="markup"
                        prop:value=move || vm.form.get().default_markup_percent.to_string()
                        on:input=move |ev| {
                            let v = event_target_value(&ev).parse().unwrap_or(0.0);
                            vm.form.update(|f| f.default_markup_percent = v);
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="category">{move || i18n.t("parts.category")}</label>
                    <input
                        type="text"
                        id="category"
                        prop:value=move || vm.form.get().category.unwrap_or_default()
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            vm.form.update(|f| {
                                f.category = if v.trim().is_empty() { None } else { Some(v) }
                            });
                        }
                    />
                </div>

                // Derived prices as stored server-side (recomputed on save)
                {move || {
                    vm.base_cost.get().map(|base_cost| {
                        view! {
                            <div class="form-row">
                                <div class="form-group">
                                    <label>{move || i18n.t("parts.base_cost")}</label>
                                    <div class="readonly-field">{currency.format(base_cost)}</div>
                                </div>
                                <div class="form-group">
                                    <label>{move || i18n.t("parts.price")}</label>
                                    <div class="readonly-field">
                                        {vm.suggested_price.get().map(|p| currency.format(p))}
                                    </div>
                                </div>
                            </div>
                        }
                    })
                }}

                <div class="form-group">
                    <label for="comment">{move || i18n.t("common.comment")}</label>
                    <textarea
                        id="comment"
                        prop:value=move || vm.form.get().comment.unwrap_or_default()
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            vm.form.update(|f| {
                                f.comment = if v.trim().is_empty() { None } else { Some(v) }
                            });
                        }
                    />
                </div>

                <div class="form-actions">
                    <button
                        class="button button--primary"
                        disabled=move || !vm.is_form_valid()
                        on:click=move |_| vm.save(on_saved)
                    >
                        {move || i18n.t("common.save")}
                    </button>
                    <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                        {move || i18n.t("common.cancel")}
                    </button>
                </div>
            </div>
        </div>
    }
}
