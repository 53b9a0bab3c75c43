use super::view_model::OrderDetailsViewModel;
use crate::shared::currency_ctx::use_currency;
use crate::shared::date_utils::format_datetime;
use crate::shared::i18n::use_i18n;
use contracts::domain::common::AggregateId;
use contracts::enums::OrderStatus;
use leptos::prelude::*;

fn opt_from_input(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[component]
pub fn OrderDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let i18n = use_i18n();
    let currency = use_currency();
    let vm = OrderDetailsViewModel::new();
    vm.load_if_needed(id);

    let status_key = |status: OrderStatus| match status {
        OrderStatus::New => "orders.status.new",
        OrderStatus::Printing => "orders.status.printing",
        OrderStatus::Finished => "orders.status.finished",
        OrderStatus::Delivered => "orders.status.delivered",
    };

    view! {
        <div class="details-container">
            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            // ================= View mode: existing order =================
            {move || {
                vm.loaded.get().map(|order| {
                    let current = order.status;
                    view! {
                        <div class="details-header">
                            <h3>{format!("{} — {}", order.order_number(), order.customer_name)}</h3>
                        </div>
                        <div class="order-view">
                            <div class="order-view__status-row">
                                <span>{move || i18n.t("orders.status")}</span>
                                {OrderStatus::all()
                                    .into_iter()
                                    .map(|status| {
                                        view! {
                                            <button
                                                class="button button--chip"
                                                class:button--chip-active={status == current}
                                                on:click=move |_| vm.transition(status)
                                            >
                                                {move || i18n.t(status_key(status))}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>

                            <table class="table__data">
                                <thead class="table__head">
                                    <tr>
                                        <th class="table__header-cell">{move || i18n.t("orders.parts")}</th>
                                        <th class="table__header-cell">{move || i18n.t("orders.quantity")}</th>
                                        <th class="table__header-cell">{move || i18n.t("orders.total")}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {order.lines.iter().map(|line| {
                                        view! {
                                            <tr class="table__row">
                                                <td class="table__cell">{line.part_name.clone()}</td>
                                                <td class="table__cell">{line.quantity}</td>
                                                <td class="table__cell">
                                                    {currency.format(line.price_at_order * f64::from(line.quantity))}
                                                </td>
                                            </tr>
                                        }
                                    }).collect_view()}
                                </tbody>
                            </table>

                            <div class="order-view__totals">
                                <div>
                                    {move || i18n.t("orders.subtotal")}
                                    {": "}
                                    {currency.format(order.subtotal)}
                                </div>
                                <div>
                                    {move || i18n.t("orders.markup")}
                                    {": "}
                                    {currency.format(order.markup)}
                                </div>
                                <div class="order-view__total">
                                    {move || i18n.t("orders.total")}
                                    {": "}
                                    {currency.format(order.total)}
                                </div>
                            </div>

                            <div class="order-view__stamps">
                                {order.started_at.map(|t| format!("▶ {}", format_datetime(t)))}
                                {order.finished_at.map(|t| format!(" ✔ {}", format_datetime(t)))}
                                {order.delivered_at.map(|t| format!(" 📦 {}", format_datetime(t)))}
                            </div>

                            <div class="form-actions">
                                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                                    {move || i18n.t("common.cancel")}
                                </button>
                            </div>
                        </div>
                    }
                })
            }}

            // ================= Create mode: new order form =================
            {move || {
                (!vm.is_view_mode()).then(|| {
                    view! {
                        <div class="details-header">
                            <h3>{move || i18n.t("orders.new")}</h3>
                        </div>
                        <div class="details-form">
                            <div class="form-group">
                                <label for="customer_name">{move || i18n.t("orders.customer")}</label>
                                <input
                                    type="text"
                                    id="customer_name"
                                    prop:value=move || vm.form.get().customer_name
                                    on:input=move |ev| {
                                        vm.form.update(|f| f.customer_name = event_target_value(&ev));
                                    }
                                />
                            </div>

                            <div class="form-row">
                                <div class="form-group">
                                    <label for="customer_phone">{move || i18n.t("orders.phone")}</label>
                                    <input
                                        type="text"
                                        id="customer_phone"
                                        prop:value=move || vm.form.get().customer_phone.unwrap_or_default()
                                        on:input=move |ev| {
                                            let v = opt_from_input(event_target_value(&ev));
                                            vm.form.update(|f| f.customer_phone = v);
                                        }
                                    />
                                </div>
                                <div class="form-group">
                                    <label for="customer_email">{move || i18n.t("orders.email")}</label>
                                    <input
                                        type="text"
                                        id="customer_email"
                                        prop:value=move || vm.form.get().customer_email.unwrap_or_default()
                                        on:input=move |ev| {
                                            let v = opt_from_input(event_target_value(&ev));
                                            vm.form.update(|f| f.customer_email = v);
                                        }
                                    />
                                </div>
                                <div class="form-group">
                                    <label for="customer_telegram">{move || i18n.t("orders.telegram")}</label>
                                    <input
                                        type="text"
                                        id="customer_telegram"
                                        prop:value=move || vm.form.get().customer_telegram.unwrap_or_default()
                                        on:input=move |ev| {
                                            let v = opt_from_input(event_target_value(&ev));
                                            vm.form.update(|f| f.customer_telegram = v);
                                        }
                                    />
                                </div>
                            </div>

                            // Line items: part picker + quantity per row
                            <div class="form-group">
                                <label>{move || i18n.t("orders.parts")}</label>
                                {move || {
                                    vm.form.get().parts.iter().enumerate().map(|(index, line)| {
                                        let part_id = line.part_id.clone();
                                        let quantity = line.quantity;
                                        view! {
                                            <div class="order-line">
                                                <select
                                                    on:change=move |ev| {
                                                        let v = event_target_value(&ev);
                                                        vm.form.update(|f| {
                                                            if let Some(l) = f.parts.get_mut(index) {
                                                                l.part_id = v;
                                                            }
                                                        });
                                                    }
                                                >
                                                    <option value="" selected={part_id.is_empty()}>{"—"}</option>
                                                    {vm.parts.get().into_iter().map(|p| {
                                                        let id = p.base.id.as_string();
                                                        let selected = id == part_id;
                                                        view! {
                                                            <option value={id} selected={selected}>
                                                                {format!(
                                                                    "{} ({})",
                                                                    p.base.description,
                                                                    currency.format(p.suggested_price),
                                                                )}
                                                            </option>
                                                        }
                                                    }).collect_view()}
                                                </select>
                                                <input
                                                    type="number"
                                                    min="1"
                                                    step="1"
                                                    prop:value={quantity.to_string()}
                                                    on:input=move |ev| {
                                                        let v: u32 = event_target_value(&ev).parse().unwrap_or(0);
                                                        vm.form.update(|f| {
                                                            if let Some(l) = f.parts.get_mut(index) {
                                                                l.quantity = v;
                                                            }
                                                        });
                                                    }
                                                />
                                                <button
                                                    class="button button--icon"
                                                    on:click=move |_| vm.remove_line(index)
                                                >
                                                    {"✕"}
                                                </button>
                                            </div>
                                        }
                                    }).collect_view()
                                }}
                                <button class="button button--secondary" on:click=move |_| vm.add_line()>
                                    {move || i18n.t("orders.add_line")}
                                </button>
                            </div>

                            <div class="form-group">
                                <label for="markup">{move || i18n.t("orders.markup")}</label>
                                <input
                                    type="number"
                                    min="0"
                                    max="500"
                                    step="1"
                                    id="markup"
                                    prop:value=move || vm.form.get().markup.to_string()
                                    on:input=move |ev| {
                                        let v = event_target_value(&ev).parse().unwrap_or(0.0);
                                        vm.form.update(|f| f.markup = v);
                                    }
                                />
                            </div>

                            {move || {
                                vm.preview_totals().map(|totals| {
                                    view! {
                                        <div class="order-view__totals">
                                            <div>
                                                {move || i18n.t("orders.subtotal")}
                                                {": "}
                                                {currency.format(totals.subtotal)}
                                            </div>
                                            <div class="order-view__total">
                                                {move || i18n.t("orders.total")}
                                                {": "}
                                                {currency.format(totals.total)}
                                            </div>
                                        </div>
                                    }
                                })
                            }}

                            <div class="form-group">
                                <label for="notes">{move || i18n.t("orders.notes")}</label>
                                <textarea
                                    id="notes"
                                    prop:value=move || vm.form.get().notes.unwrap_or_default()
                                    on:input=move |ev| {
                                        let v = opt_from_input(event_target_value(&ev));
                                        vm.form.update(|f| f.notes = v);
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
                    }
                })
            }}
        </div>
    }
}
