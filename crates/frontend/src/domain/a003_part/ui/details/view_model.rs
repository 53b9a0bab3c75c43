use super::model;
use contracts::domain::a001_material::aggregate::Material;
use contracts::domain::a003_part::aggregate::PartDto;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

/// ViewModel for the part details form.
///
/// Holds the material catalog for the picker; derived costs are shown
/// read-only and recomputed server-side on save.
#[derive(Clone, Copy)]
pub struct PartDetailsViewModel {
    pub form: RwSignal<PartDto>,
    pub materials: RwSignal<Vec<Material>>,
    pub base_cost: RwSignal<Option<f64>>,
    pub suggested_price: RwSignal<Option<f64>>,
    pub error: RwSignal<Option<String>>,
}

impl PartDetailsViewModel {
    pub fn new() -> Self {
        let vm = Self {
            form: RwSignal::new(PartDto::default()),
            materials: RwSignal::new(Vec::new()),
            base_cost: RwSignal::new(None),
            suggested_price: RwSignal::new(None),
            error: RwSignal::new(None),
        };
        vm.load_materials();
        vm
    }

    fn load_materials(&self) {
        let this = *self;
        leptos::task::spawn_local(async move {
            match model::fetch_materials().await {
                Ok(list) => this.materials.set(list),
                Err(e) => this.error.set(Some(e)),
            }
        });
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.get().id.is_some()
    }

    pub fn is_form_valid(&self) -> bool {
        let dto = self.form.get();
        !dto.description.trim().is_empty()
            && !dto.material_id.trim().is_empty()
            && dto.weight_grams > 0.0
            && dto.print_time_minutes > 0.0
    }

    pub fn load_if_needed(&self, id: Option<String>) {
        let Some(existing_id) = id else {
            return;
        };

        let this = *self;
        leptos::task::spawn_local(async move {
            match model::fetch_by_id(existing_id).await {
                Ok(item) => {
                    this.base_cost.set(Some(item.base_cost));
                    this.suggested_price.set(Some(item.suggested_price));
                    this.form.update(|f| {
                        f.id = Some(item.base.id.as_string());
                        f.code = Some(item.base.code);
                        f.description = item.base.description;
                        f.comment = item.base.comment;
                        f.material_id = item.material_id;
                        f.weight_grams = item.weight_grams;
                        f.print_time_minutes = item.print_time_minutes;
                        f.default_markup_percent = item.default_markup_percent;
                        f.category = item.category;
                        f.tags = item.tags;
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
