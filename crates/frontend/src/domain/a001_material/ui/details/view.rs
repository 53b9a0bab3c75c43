use super::view_model::MaterialDetailsViewModel;
use crate::shared::i18n::use_i18n;
use contracts::enums::MaterialType;
use leptos::prelude::*;

fn opt_from_input(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

fn opt_f64_from_input(value: String) -> Option<f64> {
    value.trim().parse().ok()
}

#[component]
pub fn MaterialDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let i18n = use_i18n();
    let vm = MaterialDetailsViewModel::new();
    vm.load_if_needed(id);

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>
                    {move || if vm.is_edit_mode() {
                        i18n.t("materials.edit")
                    } else {
                        i18n.t("materials.new")
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
                    <label for="material_type">{move || i18n.t("materials.type")}</label>
                    <select
                        id="material_type"
                        on:change=move |ev| {
                            if let Some(t) = MaterialType::from_code(&event_target_value(&ev)) {
                                vm.form.update(|f| f.material_type = t);
                            }
                        }
                    >
                        {MaterialType::all()
                            .into_iter()
                            .map(|t| {
                                view! {
                                    <option
                                        value={t.code()}
                                        selected={move || vm.form.get().material_type == t}
                                    >
                                        {t.display_name()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="color">{move || i18n.t("materials.color")}</label>
                    <input
                        type="text"
                        id="color"
                        prop:value=move || vm.form.get().color.unwrap_or_default()
                        on:input=move |ev| {
                            let v = opt_from_input(event_target_value(&ev));
                            vm.form.update(|f| f.color = v);
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="brand">{move || i18n.t("materials.brand")}</label>
                    <input
                        type="text"
                        id="brand"
                        prop:value=move || vm.form.get().brand.unwrap_or_default()
                        on:input=move |ev| {
                            let v = opt_from_input(event_target_value(&ev));
                            vm.form.update(|f| f.brand = v);
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="cost_per_gram">{move || i18n.t("materials.cost_per_gram")}</label>
                    <input
                        type="number"
                        step="0.01"
                        min="0"
                        id="cost_per_gram"
                        prop:value=move || vm.form.get().cost_per_gram.to_string()
                        on:input=move |ev| {
                            let v = event_target_value(&ev).parse().unwrap_or(0.0);
                            vm.form.update(|f| f.cost_per_gram = v);
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="stock">{move || i18n.t("materials.stock")}</label>
                    <input
                        type="number"
                        step="1"
                        min="0"
                        id="stock"
                        prop:value=move || vm.form.get().current_stock_grams.to_string()
                        on:input=move |ev| {
                            let v = event_target_value(&ev).parse().unwrap_or(0.0);
                            vm.form.update(|f| f.current_stock_grams = v);
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="threshold">{move || i18n.t("materials.threshold")}</label>
                    <input
                        type="number"
                        step="1"
                        min="0"
                        id="threshold"
                        prop:value=move || vm.form.get().low_stock_threshold.to_string()
                        on:input=move |ev| {
                            let v = event_target_value(&ev).parse().unwrap_or(0.0);
                            vm.form.update(|f| f.low_stock_threshold = v);
                        }
                    />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="print_temp_min">{"T print min, °C"}</label>
                        <input
                            type="number"
                            id="print_temp_min"
                            prop:value=move || {
                                vm.form.get().print_temp_min.map(|v| v.to_string()).unwrap_or_default()
                            }
                            on:input=move |ev| {
                                let v = opt_f64_from_input(event_target_value(&ev));
                                vm.form.update(|f| f.print_temp_min = v);
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label for="print_temp_max">{"T print max, °C"}</label>
                        <input
                            type="number"
                            id="print_temp_max"
                            prop:value=move || {
                                vm.form.get().print_temp_max.map(|v| v.to_string()).unwrap_or_default()
                            }
                            on:input=move |ev| {
                                let v = opt_f64_from_input(event_target_value(&ev));
                                vm.form.update(|f| f.print_temp_max = v);
                            }
                        />
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="bed_temp_min">{"T bed min, °C"}</label>
                        <input
                            type="number"
                            id="bed_temp_min"
                            prop:value=move || {
                                vm.form.get().bed_temp_min.map(|v| v.to_string()).unwrap_or_default()
                            }
                            on:input=move |ev| {
                                let v = opt_f64_from_input(event_target_value(&ev));
                                vm.form.update(|f| f.bed_temp_min = v);
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label for="bed_temp_max">{"T bed max, °C"}</label>
                        <input
                            type="number"
                            id="bed_temp_max"
                            prop:value=move || {
                                vm.form.get().bed_temp_max.map(|v| v.to_string()).unwrap_or_default()
                            }
                            on:input=move |ev| {
                                let v = opt_f64_from_input(event_target_value(&ev));
                                vm.form.update(|f| f.bed_temp_max = v);
                            }
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label for="comment">{move || i18n.t("common.comment")}</label>
                    <textarea
                        id="comment"
                        prop:value=move || vm.form.get().comment.unwrap_or_default()
                        on:input=move |ev| {
                            let v = opt_from_input(event_target_value(&ev));
                            vm.form.update(|f| f.comment = v);
                        }
                    />
                </div>

                {move || {
                    vm.form.get().updated_at.map(|updated_at| {
                        view! {
                            <div class="form-group">
                                <label>{move || i18n.t("common.updated")}</label>
                                <div class="readonly-field">
                                    {format!("{}", updated_at.format("%Y-%m-%d %H:%M:%S"))}
                                </div>
                            </div>
                        }
                    })
                }}

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
