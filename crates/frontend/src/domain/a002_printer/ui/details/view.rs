use super::view_model::PrinterDetailsViewModel;
use crate::shared::i18n::use_i18n;
use leptos::prelude::*;

#[component]
pub fn PrinterDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let i18n = use_i18n();
    let vm = PrinterDetailsViewModel::new();
    vm.load_if_needed(id);

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>
                    {move || if vm.is_edit_mode() {
                        i18n.t("printers.edit")
                    } else {
                        i18n.t("printers.new")
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
                    <label for="model">{move || i18n.t("printers.model")}</label>
                    <input
                        type="text"
                        id="model"
                        prop:value=move || vm.form.get().model.unwrap_or_default()
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            vm.form.update(|f| {
                                f.model = if v.trim().is_empty() { None } else { Some(v) }
                            });
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="hourly_rate">{move || i18n.t("printers.hourly_rate")}</label>
                    <input
                        type="number"
                        step="0.01"
                        min="0"
                        id="hourly_rate"
                        prop:value=move || vm.form.get().hourly_rate.to_string()
                        on:input=move |ev| {
                            let v = event_target_value(&ev).parse().unwrap_or(0.0);
                            vm.form.update(|f| f.hourly_rate = v);
                        }
                    />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="power">{move || i18n.t("printers.power")}</label>
                        <input
                            type="number"
                            step="1"
                            min="0"
                            max="5000"
                            id="power"
                            prop:value=move || vm.form.get().power_consumption_watts.to_string()
                            on:input=move |ev| {
                                let v = event_target_value(&ev).parse().unwrap_or(0.0);
                                vm.form.update(|f| f.power_consumption_watts = v);
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label for="electricity">{move || i18n.t("printers.electricity")}</label>
                        <input
                            type="number"
                            step="0.01"
                            min="0"
                            id="electricity"
                            prop:value=move || vm.form.get().electricity_cost_per_kwh.to_string()
                            on:input=move |ev| {
                                let v = event_target_value(&ev).parse().unwrap_or(0.0);
                                vm.form.update(|f| f.electricity_cost_per_kwh = v);
                            }
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label for="interval">{move || i18n.t("printers.interval")}</label>
                    <input
                        type="number"
                        step="1"
                        min="1"
                        id="interval"
                        prop:value=move || vm.form.get().maintenance_interval_hours.to_string()
                        on:input=move |ev| {
                            let v = event_target_value(&ev).parse().unwrap_or(0.0);
                            vm.form.update(|f| f.maintenance_interval_hours = v);
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="is_active">{move || i18n.t("printers.active")}</label>
                    <input
                        type="checkbox"
                        id="is_active"
                        prop:checked=move || vm.form.get().is_active.unwrap_or(true)
                        on:change=move |ev| {
                            let v = event_target_checked(&ev);
                            vm.form.update(|f| f.is_active = Some(v));
                        }
                    />
                </div>

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
