use super::model;
use contracts::domain::a003_part::aggregate::Part;
use contracts::domain::a004_order::aggregate::{Order, OrderDto, OrderLineDto};
use contracts::enums::OrderStatus;
use contracts::shared::costing;
use leptos::prelude::*;

/// ViewModel for the order screen.
///
/// Creation mode drives an `OrderDto` form with line items; view mode
/// holds the loaded order and runs status transitions.
#[derive(Clone, Copy)]
pub struct OrderDetailsViewModel {
    pub form: RwSignal<OrderDto>,
    pub parts: RwSignal<Vec<Part>>,
    pub loaded: RwSignal<Option<Order>>,
    pub error: RwSignal<Option<String>>,
}

impl OrderDetailsViewModel {
    pub fn new() -> Self {
        let vm = Self {
            form: RwSignal::new(OrderDto {
                markup: 0.0,
                ..OrderDto::default()
            }),
            parts: RwSignal::new(Vec::new()),
            loaded: RwSignal::new(None),
            error: RwSignal::new(None),
        };
        vm.load_parts();
        vm
    }

    fn load_parts(&self) {
        let this = *self;
        leptos::task::spawn_local(async move {
            match model::fetch_parts().await {
                Ok(list) => this.parts.set(list),
                Err(e) => this.error.set(Some(e)),
            }
        });
    }

    pub fn is_view_mode(&self) -> bool {
        self.loaded.get().is_some()
    }

    pub fn load_if_needed(&self, id: Option<String>) {
        let Some(existing_id) = id else {
            return;
        };

        let this = *self;
        leptos::task::spawn_local(async move {
            match model::fetch_by_id(existing_id).await {
                Ok(order) => this.loaded.set(Some(order)),
                Err(e) => this.error.set(Some(e)),
            }
        });
    }

    pub fn add_line(&self) {
        self.form.update(|f| {
            f.parts.push(OrderLineDto {
                part_id: String::new(),
                quantity: 1,
            })
        });
    }

    pub fn remove_line(&self, index: usize) {
        self.form.update(|f| {
            if index < f.parts.len() {
                f.parts.remove(index);
            }
        });
    }

    /// Live preview of the totals from the picked parts' current prices
    pub fn preview_totals(&self) -> Option<costing::OrderTotals> {
        let dto = self.form.get();
        let catalog = self.parts.get();
        let lines: Vec<(f64, u32)> = dto
            .parts
            .iter()
            .filter_map(|line| {
                use contracts::domain::common::AggregateId;
                let part = catalog
                    .iter()
                    .find(|p| p.base.id.as_string() == line.part_id)?;
                Some((part.suggested_price, line.quantity))
            })
            .collect();
        costing::calculate_order_totals(&lines, dto.markup).ok()
    }

    pub fn is_form_valid(&self) -> bool {
        let dto = self.form.get();
        dto.customer_name.trim().chars().count() >= 2
            && !dto.parts.is_empty()
            && dto
                .parts
                .iter()
                .all(|line| !line.part_id.is_empty() && line.quantity > 0)
    }

    pub fn save(&self, on_saved: Callback<()>) {
        let this = *self;
        let dto = this.form.get();
        leptos::task::spawn_local(async move {
            match model::create_order(&dto).await {
                Ok(_) => on_saved.run(()),
                Err(e) => this.error.set(Some(e)),
            }
        });
    }

    pub fn transition(&self, status: OrderStatus) {
        let Some(order) = self.loaded.get() else {
            return;
        };
        let this = *self;
        let id = order.to_string_id();
        leptos::task::spawn_local(async move {
            match model::set_status(&id, status).await {
                Ok(updated) => this.loaded.set(Some(updated)),
                Err(e) => this.error.set(Some(e)),
            }
        });
    }
}
