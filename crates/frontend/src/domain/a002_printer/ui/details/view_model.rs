use super::model;
use contracts::domain::a002_printer::aggregate::PrinterDto;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

/// ViewModel for the printer details form
#[derive(Clone, Copy)]
pub struct PrinterDetailsViewModel {
    pub form: RwSignal<PrinterDto>,
    pub error: RwSignal<Option<String>>,
}

impl PrinterDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(PrinterDto::default()),
            error: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.get().id.is_some()
    }

    pub fn is_form_valid(&self) -> bool {
        let dto = self.form.get();
        !dto.description.trim().is_empty() && dto.maintenance_interval_hours > 0.0
    }

    pub fn load_if_needed(&self, id: Option<String>) {
        let Some(existing_id) = id else {
            return;
        };

        let this = *self;
        leptos::task::spawn_local(async move {
            match model::fetch_by_id(existing_id).await {
                Ok(item) => {
                    this.form.update(|f| {
                        f.id = Some(item.base.id.as_string());
                        f.code = Some(item.base.code);
                        f.description = item.base.description;
                        f.comment = item.base.comment;
                        f.model = item.model;
                        f.hourly_rate = item.hourly_rate;
                        f.power_consumption_watts = item.power_consumption_watts;
                        f.electricity_cost_per_kwh = item.electricity_cost_per_kwh;
                        f.maintenance_interval_hours = item.maintenance_interval_hours;
                        f.is_active = Some(item.is_active);
                        f.updated_at = Some(item.base.metadata.updated_at);
                    });
                }
                Err(e) => this.error.set(Some(e)),
            }
        });
    }

    pub fn save(&self, on_saved: Callback<()>) {
        let this = *self;
        let dto = this.form.get();
        leptos::task::spawn_local(async move {
            match model::save_form(&dto).await {
                Ok(_) => on_saved.run(()),
                Err(e) => this.error.set(Some(e)),
            }
        });
    }
}
