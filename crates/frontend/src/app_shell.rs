//! Application shell: sidebar plus the active page.

use crate::dashboards::d100_workshop_summary::WorkshopSummaryPage;
use crate::domain::a001_material::ui::list::MaterialList;
use crate::domain::a002_printer::ui::list::PrinterList;
use crate::domain::a003_part::ui::list::PartList;
use crate::domain::a004_order::ui::list::OrderList;
use crate::layout::global_context::{use_app_context, Page};
use crate::layout::sidebar::Sidebar;
use crate::layout::Shell;
use crate::system::pages::reports::ReportsPage;
use crate::system::pages::settings::SettingsPage;
use crate::usecases::u100_estimate::EstimatePage;
use leptos::prelude::*;

#[component]
pub fn AppShell() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    {move || match ctx.current_page.get() {
                        Page::Dashboard => view! { <WorkshopSummaryPage /> }.into_any(),
                        Page::Materials => view! { <MaterialList /> }.into_any(),
                        Page::Parts => view! { <PartList /> }.into_any(),
                        Page::Orders => view! { <OrderList /> }.into_any(),
                        Page::Printers => view! { <PrinterList /> }.into_any(),
                        Page::Estimate => view! { <EstimatePage /> }.into_any(),
                        Page::Reports => view! { <ReportsPage /> }.into_any(),
                        Page::Settings => view! { <SettingsPage /> }.into_any(),
                    }}
                }
                .into_any()
            }
        />
    }
}
