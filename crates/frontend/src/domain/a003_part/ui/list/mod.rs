use crate::domain::a003_part::ui::details::PartDetails;
use crate::shared::currency_ctx::use_currency;
use crate::shared::date_utils::format_duration;
use crate::shared::fetch;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::list_utils::{sort_indicator, sort_list, Sortable};
use contracts::domain::a003_part::aggregate::Part;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use std::cmp::Ordering;

#[derive(Clone, Debug)]
pub struct PartRow {
    pub id: String,
    pub name: String,
    pub weight_grams: f64,
    pub print_time_minutes: f64,
    pub base_cost: f64,
    pub markup_percent: f64,
    pub suggested_price: f64,
    pub category: String,
}

impl From<Part> for PartRow {
    fn from(p: Part) -> Self {
        Self {
            id: p.base.id.as_string(),
            name: p.base.description.clone(),
            weight_grams: p.weight_grams,
            print_time_minutes: p.print_time_minutes,
            base_cost: p.base_cost,
            markup_percent: p.default_markup_percent,
            suggested_price: p.suggested_price,
            category: p.category.clone().unwrap_or_else(|| "-".to_string()),
        }
    }
}

impl Sortable for PartRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "weight" => self
                .weight_grams
                .partial_cmp(&other.weight_grams)
                .unwrap_or(Ordering::Equal),
            "base_cost" => self
                .base_cost
                .partial_cmp(&other.base_cost)
                .unwrap_or(Ordering::Equal),
            "price" => self
                .suggested_price
                .partial_cmp(&other.suggested_price)
                .unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        }
    }
}

#[component]
pub fn PartList() -> impl IntoView {
    let i18n = use_i18n();
    let currency = use_currency();

    let (items, set_items) = signal::<Vec<PartRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (editing, set_editing) = signal::<Option<Option<String>>>(None);
    let (sort_field, set_sort_field) = signal("name".to_string());
    let (sort_ascending, set_sort_ascending) = signal(true);

    let fetch_list = move || {
        leptos::task::spawn_local(async move {
            match fetch::get_json::<Vec<Part>>("/api/part").await {
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
            match fetch::delete(&format!("/api/part/{}", id)).await {
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
                <h2>{move || i18n.t("parts.title")}</h2>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| set_editing.set(Some(None))
                    >
                        {icon("plus")}
                        {move || i18n.t("parts.new")}
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
                        <PartDetails
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
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("weight")>
                                {move || i18n.t("parts.weight")}
                                {move || sort_indicator(&sort_field.get(), "weight", sort_ascending.get())}
                            </th>
                            <th class="table__header-cell">{move || i18n.t("parts.print_time")}</th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("base_cost")>
                                {move || i18n.t("parts.base_cost")}
                                {move || sort_indicator(&sort_field.get(), "base_cost", sort_ascending.get())}
                            </th>
                            <th class="table__header-cell">{move || i18n.t("parts.markup")}</th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("price")>
                                {move || i18n.t("parts.price")}
                                {move || sort_indicator(&sort_field.get(), "price", sort_ascending.get())}
                            </th>
                            <th class="table__header-cell">{move || i18n.t("parts.category")}</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let locale = i18n.locale.get();
                            sorted_items().into_iter().map(|row| {
                                let id_for_edit = row.id.clone();
                                let id_for_delete = row.id.clone();
                                view! {
                                    <tr class="table__row" on:click=move |_| {
                                        set_editing.set(Some(Some(id_for_edit.clone())))
                                    }>
                                        <td class="table__cell">{row.name}</td>
                                        <td class="table__cell">{format!("{:.0}", row.weight_grams)}</td>
                                        <td class="table__cell">
                                            {format_duration(row.print_time_minutes, locale)}
                                        </td>
                                        <td class="table__cell">{currency.format(row.base_cost)}</td>
                                        <td class="table__cell">{format!("{:.0}%", row.markup_percent)}</td>
                                        <td class="table__cell">{currency.format(row.suggested_price)}</td>
                                        <td class="table__cell">{row.category}</td>
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
                            }).collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
