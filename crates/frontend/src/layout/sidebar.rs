//! Sidebar with grouped navigation items

use super::global_context::{use_app_context, Page};
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use leptos::prelude::*;

struct MenuGroup {
    label_key: &'static str,
    items: Vec<(Page, &'static str, &'static str)>, // (page, label key, icon)
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            label_key: "nav.dashboard",
            items: vec![(Page::Dashboard, "nav.dashboard", "dashboard")],
        },
        MenuGroup {
            label_key: "nav.catalogs",
            items: vec![
                (Page::Materials, "nav.materials", "materials"),
                (Page::Parts, "nav.parts", "parts"),
                (Page::Printers, "nav.printers", "printers"),
            ],
        },
        MenuGroup {
            label_key: "nav.documents",
            items: vec![(Page::Orders, "nav.orders", "orders")],
        },
        MenuGroup {
            label_key: "nav.tools",
            items: vec![
                (Page::Estimate, "nav.estimate", "estimate"),
                (Page::Reports, "nav.reports", "reports"),
                (Page::Settings, "nav.settings", "settings"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let i18n = use_i18n();

    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">
                {icon("printers")}
                <span class="sidebar__title">{"PrintShop CRM"}</span>
            </div>
            {menu_groups()
                .into_iter()
                .map(|group| {
                    view! {
                        <div class="sidebar__group">
                            <div class="sidebar__group-label">
                                {move || i18n.t(group.label_key)}
                            </div>
                            {group
                                .items
                                .into_iter()
                                .map(|(page, label_key, icon_name)| {
                                    view! {
                                        <button
                                            class="sidebar__item"
                                            class:sidebar__item--active={move || {
                                                ctx.current_page.get() == page
                                            }}
                                            on:click=move |_| ctx.navigate(page)
                                        >
                                            {icon(icon_name)}
                                            <span>{move || i18n.t(label_key)}</span>
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })
                .collect_view()}
        </nav>
    }
}
