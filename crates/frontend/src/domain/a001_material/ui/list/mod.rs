use crate::domain::a001_material::ui::details::MaterialDetails;
use crate::shared::currency_ctx::use_currency;
use crate::shared::date_utils::format_datetime;
use crate::shared::fetch;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::list_utils::{sort_indicator, sort_list, Sortable};
use contracts::domain::a001_material::aggregate::Material;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use std::cmp::Ordering;

#[derive(Clone, Debug)]
pub struct MaterialRow {
    pub id: String,
    pub name: String,
    pub material_type: String,
    pub color: String,
    pub brand: String,
    pub cost_per_gram: f64,
    pub stock: f64,
    pub threshold: f64,
    pub low_stock: bool,
    pub created_at: String,
}

impl From<Material> for MaterialRow {
    fn from(m: Material) -> Self {
        Self {
            id: m.base.id.as_string(),
            name: m.base.description.clone(),
            material_type: m.material_type.code().to_string(),
            color: m.color.clone().unwrap_or_else(|| "-".to_string()),
            brand: m.brand.clone().unwrap_or_else(|| "-".to_string()),
            cost_per_gram: m.cost_per_gram,
            stock: m.current_stock_grams,
            threshold: m.low_stock_threshold,
            low_stock: m.is_low_stock(),
            created_at: format_datetime(m.base.metadata.created_at),
        }
    }
}

impl Sortable for MaterialRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "type" => self.material_type.cmp(&other.material_type),
            "cost" => self
                .cost_per_gram
                .partial_cmp(&other.cost_per_gram)
                .unwrap_or(Ordering::Equal),
            "stock" => self.stock.partial_cmp(&other.stock).unwrap_or(Ordering::Equal),
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => Ordering::Equal,
        }
    }
}

#[component]
pub fn MaterialList() -> impl IntoView {
    let i18n = use_i18n();
    let currency = use_currency();

    let (items, set_items) = signal::<Vec<MaterialRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    // None = closed, Some(None) = create, Some(Some(id)) = edit
    let (editing, set_editing) = signal::<Option<Option<String>>>(None);
    let (sort_field, set_sort_field) = signal("created_at".to_string());
    let (sort_ascending, set_sort_ascending) = signal(false);

    let fetch_list = move || {
        leptos::task::spawn_local(async move {
            match fetch::get_json::<Vec<Material>>("/api/material").await {
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
            match fetch::post_empty("/api/material/testdata").await {
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
            match fetch::delete(&format!("/api/material/{}", id)).await {
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
                <h2>{move || i18n.t("materials.title")}</h2>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| set_editing.set(Some(None))
                    >
                        {icon("plus")}
                        {move || i18n.t("materials.new")}
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
                        <MaterialDetails
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
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("type")>
                                {move || i18n.t("materials.type")}
                                {move || sort_indicator(&sort_field.get(), "type", sort_ascending.get())}
                            </th>
                            <th class="table__header-cell">{move || i18n.t("materials.color")}</th>
                            <th class="table__header-cell">{move || i18n.t("materials.brand")}</th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("cost")>
                                {move || i18n.t("materials.cost_per_gram")}
                                {move || sort_indicator(&sort_field.get(), "cost", sort_ascending.get())}
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("stock")>
                                {move || i18n.t("materials.stock")}
                                {move || sort_indicator(&sort_field.get(), "stock", sort_ascending.get())}
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
                            view! {
                                <tr class="table__row" on:click=move |_| {
                                    set_editing.set(Some(Some(id_for_edit.clone())))
                                }>
                                    <td class="table__cell">{row.name}</td>
                                    <td class="table__cell">{row.material_type}</td>
                                    <td class="table__cell">{row.color}</td>
                                    <td class="table__cell">{row.brand}</td>
                                    <td class="table__cell">{currency.format(row.cost_per_gram)}</td>
                                    <td class="table__cell">
                                        {format!("{:.0}", row.stock)}
                                        {row.low_stock.then(|| view! {
                                            <span class="badge badge--warning">
                                                {move || i18n.t("materials.low_stock_badge")}
                                            </span>
                                        })}
                                    </td>
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
