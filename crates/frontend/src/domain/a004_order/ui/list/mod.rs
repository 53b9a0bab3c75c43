use crate::domain::a004_order::ui::details::OrderDetails;
use crate::shared::currency_ctx::use_currency;
use crate::shared::date_utils::format_datetime;
use crate::shared::fetch;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::list_utils::{sort_indicator, sort_list, Sortable};
use contracts::domain::a004_order::aggregate::Order;
use contracts::domain::common::AggregateId;
use contracts::enums::OrderStatus;
use leptos::prelude::*;
use std::cmp::Ordering;

#[derive(Clone, Debug)]
pub struct OrderRow {
    pub id: String,
    pub order_number: String,
    pub customer: String,
    pub status: OrderStatus,
    pub items: u32,
    pub total: f64,
    pub created_at: String,
}

impl From<Order> for OrderRow {
    fn from(o: Order) -> Self {
        Self {
            id: o.base.id.as_string(),
            order_number: o.base.code.clone(),
            customer: o.customer_name.clone(),
            status: o.status,
            items: o.lines.iter().map(|l| l.quantity).sum(),
            total: o.total,
            created_at: format_datetime(o.base.metadata.created_at),
        }
    }
}

impl Sortable for OrderRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "number" => self.order_number.cmp(&other.order_number),
            "customer" => self
                .customer
                .to_lowercase()
                .cmp(&other.customer.to_lowercase()),
            "total" => self.total.partial_cmp(&other.total).unwrap_or(Ordering::Equal),
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => Ordering::Equal,
        }
    }
}

#[component]
pub fn OrderList() -> impl IntoView {
    let i18n = use_i18n();
    let currency = use_currency();

    let (items, set_items) = signal::<Vec<OrderRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (editing, set_editing) = signal::<Option<Option<String>>>(None);
    let (status_filter, set_status_filter) = signal::<Option<OrderStatus>>(None);
    let (sort_field, set_sort_field) = signal("created_at".to_string());
    let (sort_ascending, set_sort_ascending) = signal(false);

    let fetch_list = move || {
        let path = match status_filter.get_untracked() {
            Some(status) => format!("/api/order?status={}", status.code()),
            None => "/api/order".to_string(),
        };
        leptos::task::spawn_local(async move {
            match fetch::get_json::<Vec<Order>>(&path).await {
                Ok(v) => {
                    set_items.set(v.into_iter().map(Into::into).collect());
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let delete_row = move |id: String| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&i18n.t("common.confirm_delete"))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        leptos::task::spawn_local(async move {
            match fetch::delete(&format!("/api/order/{}", id)).await {
                Ok(_) => fetch_list(),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let toggle_sort = move |field: &'static str| {
        move |_| {
            if sort_field.get() == field {
                set_sort_ascending.update(|v| *v = !*v);
            } else {
                set_sort_field.set(field.to_string());
                set_sort_ascending.set(true);
            }
        }
    };

    let sorted_items = move || {
        let mut rows = items.get();
        sort_list(&mut rows, &sort_field.get(), sort_ascending.get());
        rows
    };

    let status_key = |status: OrderStatus| match status {
        OrderStatus::New => "orders.status.new",
        OrderStatus::Printing => "orders.status.printing",
        OrderStatus::Finished => "orders.status.finished",
        OrderStatus::Delivered => "orders.status.delivered",
    };

    fetch_list();

    view! {
        <div class="content">
            <div class="header">
                <h2>{move || i18n.t("orders.title")}</h2>
                <div class="header__actions">
                    <select
                        on:change=move |ev| {
                            set_status_filter.set(OrderStatus::from_code(&event_target_value(&ev)));
                            fetch_list();
                        }
                    >
                        <option value="">{"—"}</option>
                        {OrderStatus::all().into_iter().map(|status| {
                            view! {
                                <option value={status.code()}>
                                    {move || i18n.t(status_key(status))}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                    <button
                        class="button button--primary"
                        on:click=move |_| set_editing.set(Some(None))
                    >
                        {icon("plus")}
                        {move || i18n.t("orders.new")}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch_list()>
                        {icon("refresh")}
                        {move || i18n.t("common.refresh")}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            {move || {
                editing.get().map(|id| {
                    view! {
                        <OrderDetails
                            id=id
                            on_saved=Callback::new(move |_| {
                                set_editing.set(None);
                                fetch_list();
                            })
                            on_cancel=Callback::new(move |_| {
                                set_editing.set(None);
                                // Status may have changed inside the details view
                                fetch_list();
                            })
                        />
                    }
                })
            }}

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("number")>
                                {move || i18n.t("orders.number")}
                                {move || sort_indicator(&sort_field.get(), "number", sort_ascending.get())}
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("customer")>
                                {move || i18n.t("orders.customer")}
                                {move || sort_indicator(&sort_field.get(), "customer", sort_ascending.get())}
                            </th>
                            <th class="table__header-cell">{move || i18n.t("orders.status")}</th>
                            <th class="table__header-cell">{move || i18n.t("orders.quantity")}</th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("total")>
                                {move || i18n.t("orders.total")}
                                {move || sort_indicator(&sort_field.get(), "total", sort_ascending.get())}
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("created_at")>
                                {move || i18n.t("common.created")}
                                {move || sort_indicator(&sort_field.get(), "created_at", sort_ascending.get())}
                            </th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || sorted_items().into_iter().map(|row| {
                            let id_for_edit = row.id.clone();
                            let id_for_delete = row.id.clone();
                            let status = row.status;
                            view! {
                                <tr class="table__row" on:click=move |_| {
                                    set_editing.set(Some(Some(id_for_edit.clone())))
                                }>
                                    <td class="table__cell">{row.order_number}</td>
                                    <td class="table__cell">{row.customer}</td>
                                    <td class="table__cell">
                                        <span class={format!("badge badge--status-{}", status.code())}>
                                            {move || i18n.t(status_key(status))}
                                        </span>
                                    </td>
                                    <td class="table__cell">{row.items}</td>
                                    <td class="table__cell">{currency.format(row.total)}</td>
                                    <td class="table__cell">{row.created_at}</td>
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="button button--icon"
                                            on:click=move |ev| {
                                                ev.stop_propagation();
                                                delete_row(id_for_delete.clone());
                                            }
                                        >
                                            {icon("delete")}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
