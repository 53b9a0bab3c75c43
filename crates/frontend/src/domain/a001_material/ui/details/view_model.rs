use super::model;
use contracts::domain::a001_material::aggregate::MaterialDto;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

/// ViewModel for the material details form
#[derive(Clone, Copy)]
pub struct MaterialDetailsViewModel {
    pub form: RwSignal<MaterialDto>,
    pub error: RwSignal<Option<String>>,
}

impl MaterialDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(MaterialDto::default()),
            error: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.get().id.is_some()
    }

    pub fn is_form_valid(&self) -> bool {
        let dto = self.form.get();
        !dto.description.trim().is_empty() && dto.cost_per_gram > 0.0
    }

    /// Load form data from the server if an ID is provided
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
                        f.material_type = item.material_type;
                        f.color = item.color;
                        f.brand = item.brand;
                        f.cost_per_gram = item.cost_per_gram;
                        f.current_stock_grams = item.current_stock_grams;
                        f.low_stock_threshold = item.low_stock_threshold;
                        f.print_temp_min = item.print_temp_min;
                        f.print_temp_max = item.print_temp_max;
                        f.bed_temp_min = item.bed_temp_min;
                        f.bed_temp_max = item.bed_temp_max;
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
