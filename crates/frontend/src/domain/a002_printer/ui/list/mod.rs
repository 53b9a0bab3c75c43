use crate::domain::a002_printer::ui::details::PrinterDetails;
use crate::shared::currency_ctx::use_currency;
use crate::shared::date_utils::format_datetime;
use crate::shared::fetch;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::list_utils::{sort_indicator, sort_list, Sortable};
use contracts::domain::a002_printer::aggregate::Printer;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use std::cmp::Ordering;

#[derive(Clone, Debug)]
pub struct PrinterRow {
    pub id: String,
    pub name: String,
    pub model: String,
    pub hourly_rate: f64,
    pub total_print_hours: f64,
    pub total_print_count: i64,
    pub is_active: bool,
    pub maintenance_due: bool,
    pub created_at: String,
}

impl From<Printer> for PrinterRow {
    fn from(p: Printer) -> Self {
        Self {
            id: p.base.id.as_string(),
            name: p.base.description.clone(),
            model: p.model.clone().unwrap_or_else(|| "-".to_string()),
            hourly_rate: p.hourly_rate,
            total_print_hours: p.total_print_hours,
            total_print_count: p.total_print_count,
            is_active: p.is_active,
            maintenance_due: p.is_maintenance_due(),
            created_at: format_datetime(p.base.metadata.created_at),
        }
    }
}

impl Sortable for PrinterRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "rate" => self
                .hourly_rate
                .partial_cmp(&other.hourly_rate)
                .unwrap_or(Ordering::Equal),
            "hours" => self
                .total_print_hours
                .partial_cmp(&other.total_print_hours)
                .unwrap_or(Ordering::Equal),
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => Ordering::Equal,
        }
    }
}

#[component]
pub fn PrinterList() -> impl IntoView {
    let i18n = use_i18n();
    let currency = use_currency();

    let (items, set_items) = signal::<Vec<PrinterRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (editing, set_editing) = signal::<Option<Option<String>>>(None);
    let (sort_field, set_sort_field) = signal("created_at".to_string());
    let (sort_ascending, set_sort_ascending) = signal(false);

    let fetch_list = move || {
        leptos::task::spawn_local(async move {
            match fetch::get_json::<Vec<Printer>>("/api/printer").await {
                Ok(v) => {
                    set_items.set(v.into_iter().map(Into::into).collect());
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let fill_demo = move || {
        leptos::task::spawn_local(async move {
            match fetch::post_empty("/api/printer/testdata").await {
                Ok(_) => fetch_list(),
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
            match fetch::delete(&format!("/api/printer/{}", id)).await {
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

    fetch_list();

    view! {
        <div class="content">
            <div class="header">
                <h2>{move || i18n.t("printers.title")}</h2>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| set_editing.set(Some(None))
                    >
                        {icon("plus")}
                        {move || i18n.t("printers.new")}
                    </button>
                    <button class="button button--primary" on:click=move |_| fill_demo()>
                        {icon("download")}
                        {move || i18n.t("common.fill_demo")}
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
                        <PrinterDetails
                            id=id
                            on_saved=Callback::new(move |_| {
                                set_editing.set(None);
                                fetch_list();
                            })
                            on_cancel=Callback::new(move |_| set_editing.set(None))
                        />
                    }
                })
            }}

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("name")>
                                {move || i18n.t("common.name")}
                                {move || sort_indicator(&sort_field.get(), "name", sort_ascending.get())}
                            </th>
                            <th class="table__header-cell">{move || i18n.t("printers.model")}</th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("rate")>
                                {move || i18n.t("printers.hourly_rate")}
                                {move || sort_indicator(&sort_field.get(), "rate", sort_ascending.get())}
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("hours")>
                                {move || i18n.t("printers.hours")}
                                {move || sort_indicator(&sort_field.get(), "hours", sort_ascending.get())}
                            </th>
                            <th class="table__header-cell">{move || i18n.t("printers.active")}</th>
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
                            view! {
                                <tr class="table__row" on:click=move |_| {
                                    set_editing.set(Some(Some(id_for_edit.clone())))
                                }>
                                    <td class="table__cell">
                                        {row.name}
                                        {row.maintenance_due.then(|| view! {
                                            <span class="badge badge--warning">
                                                {move || i18n.t("printers.maintenance_due_badge")}
                                            </span>
                                        })}
                                    </td>
                                    <td class="table__cell">{row.model}</td>
                                    <td class="table__cell">{currency.format(row.hourly_rate)}</td>
                                    <td class="table__cell">
                                        {format!("{:.1} / {}", row.total_print_hours, row.total_print_count)}
                                    </td>
                                    <td class="table__cell">{if row.is_active { "✓" } else { "—" }}</td>
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
