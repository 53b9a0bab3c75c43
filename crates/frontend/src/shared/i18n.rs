//! Locale context and translation lookup.
//!
//! Keys are dot-separated ("nav.orders"); an unknown key is echoed back
//! so a missing string is visible instead of silent.

use contracts::domain::a007_user_settings::Language;
use leptos::prelude::*;

const STORAGE_KEY: &str = "locale";

/// Reactive locale shared through the leptos context
#[derive(Clone, Copy)]
pub struct I18nContext {
    pub locale: RwSignal<Language>,
}

impl I18nContext {
    pub fn new() -> Self {
        let initial = load_saved_locale().unwrap_or(Language::En);
        Self {
            locale: RwSignal::new(initial),
        }
    }

    pub fn set_locale(&self, locale: Language) {
        self.locale.set(locale);
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, locale.code());
        }
    }

    /// Translate a key under the current locale
    pub fn t(&self, key: &str) -> String {
        translate(self.locale.get(), key)
    }
}

impl Default for I18nContext {
    fn default() -> Self {
        Self::new()
    }
}

fn load_saved_locale() -> Option<Language> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let saved = storage.get_item(STORAGE_KEY).ok()??;
    Language::from_code(&saved)
}

pub fn use_i18n() -> I18nContext {
    use_context::<I18nContext>().expect("I18nContext not found in context")
}

/// Static string table; returns the key itself when no entry exists
pub fn translate(locale: Language, key: &str) -> String {
    let text = match locale {
        Language::En => translate_en(key),
        Language::Ru => translate_ru(key),
    };
    text.map(|s| s.to_string()).unwrap_or_else(|| key.to_string())
}

fn translate_en(key: &str) -> Option<&'static str> {
    Some(match key {
        "nav.dashboard" => "Dashboard",
        "nav.materials" => "Materials",
        "nav.parts" => "Parts",
        "nav.orders" => "Orders",
        "nav.printers" => "Printers",
        "nav.estimate" => "Estimate",
        "nav.reports" => "Reports",
        "nav.settings" => "Settings",
        "nav.catalogs" => "Catalogs",
        "nav.documents" => "Documents",
        "nav.tools" => "Tools",

        "common.new" => "New",
        "common.refresh" => "Refresh",
        "common.delete" => "Delete",
        "common.save" => "Save",
        "common.cancel" => "Cancel",
        "common.name" => "Name",
        "common.code" => "Code",
        "common.comment" => "Comment",
        "common.created" => "Created",
        "common.updated" => "Last updated",
        "common.fill_demo" => "Fill demo data",
        "common.loading" => "Loading...",
        "common.confirm_delete" => "Delete selected items?",

        "dashboard.title" => "Workshop dashboard",
        "dashboard.orders_this_month" => "Orders this month",
        "dashboard.revenue_this_month" => "Revenue this month",
        "dashboard.average_order" => "Average order",
        "dashboard.total_parts" => "Parts in catalog",
        "dashboard.orders_by_status" => "Orders by status",
        "dashboard.low_stock" => "Low stock materials",
        "dashboard.maintenance_due" => "Printers due maintenance",

        "materials.title" => "Materials",
        "materials.new" => "New material",
        "materials.edit" => "Edit material",
        "materials.type" => "Type",
        "materials.color" => "Color",
        "materials.brand" => "Brand",
        "materials.cost_per_gram" => "Cost per gram",
        "materials.stock" => "Stock, g",
        "materials.threshold" => "Low stock threshold, g",
        "materials.low_stock_badge" => "low",

        "parts.title" => "Parts",
        "parts.new" => "New part",
        "parts.edit" => "Edit part",
        "parts.material" => "Material",
        "parts.weight" => "Weight, g",
        "parts.print_time" => "Print time, min",
        "parts.markup" => "Markup, %",
        "parts.base_cost" => "Base cost",
        "parts.price" => "Suggested price",
        "parts.category" => "Category",

        "orders.title" => "Orders",
        "orders.new" => "New order",
        "orders.number" => "Order #",
        "orders.customer" => "Customer",
        "orders.phone" => "Phone",
        "orders.email" => "Email",
        "orders.telegram" => "Telegram",
        "orders.status" => "Status",
        "orders.parts" => "Parts",
        "orders.quantity" => "Qty",
        "orders.subtotal" => "Subtotal",
        "orders.markup" => "Markup",
        "orders.total" => "Total",
        "orders.notes" => "Notes",
        "orders.add_line" => "Add part",
        "orders.status.new" => "New",
        "orders.status.printing" => "Printing",
        "orders.status.finished" => "Finished",
        "orders.status.delivered" => "Delivered",

        "printers.title" => "Printers",
        "printers.new" => "New printer",
        "printers.edit" => "Edit printer",
        "printers.model" => "Model",
        "printers.hourly_rate" => "Hourly rate",
        "printers.power" => "Power, W",
        "printers.electricity" => "Electricity, kWh",
        "printers.interval" => "Maintenance interval, h",
        "printers.hours" => "Print hours",
        "printers.active" => "Active",
        "printers.maintenance_due_badge" => "maintenance due",

        "estimate.title" => "Cost estimate",
        "estimate.calculate" => "Calculate",
        "estimate.material_cost" => "Material cost",
        "estimate.print_cost" => "Print cost",
        "estimate.base_cost" => "Base cost",
        "estimate.final_price" => "Price with markup",

        "reports.title" => "Reports",
        "reports.from" => "From",
        "reports.to" => "To",
        "reports.export_csv" => "Export CSV",

        "settings.title" => "Settings",
        "settings.language" => "Language",
        "settings.currency" => "Display currency",
        "settings.default_markup" => "Default markup, %",
        "settings.notifications" => "Notifications",
        "settings.notify_new_order" => "New order",
        "settings.notify_status" => "Status change",
        "settings.notify_low_stock" => "Low stock",
        "settings.rates" => "Exchange rates",
        "settings.refresh_rates" => "Refresh rates",
        "settings.saved" => "Settings saved",

        _ => return None,
    })
}

fn translate_ru(key: &str) -> Option<&'static str> {
    Some(match key {
        "nav.dashboard" => "Сводка",
        "nav.materials" => "Материалы",
        "nav.parts" => "Детали",
        "nav.orders" => "Заказы",
        "nav.printers" => "Принтеры",
        "nav.estimate" => "Калькулятор",
        "nav.reports" => "Отчёты",
        "nav.settings" => "Настройки",
        "nav.catalogs" => "Справочники",
        "nav.documents" => "Документы",
        "nav.tools" => "Инструменты",

        "common.new" => "Создать",
        "common.refresh" => "Обновить",
        "common.delete" => "Удалить",
        "common.save" => "Сохранить",
        "common.cancel" => "Отмена",
        "common.name" => "Наименование",
        "common.code" => "Код",
        "common.comment" => "Комментарий",
        "common.created" => "Создано",
        "common.updated" => "Последнее обновление",
        "common.fill_demo" => "Заполнить",
        "common.loading" => "Загрузка...",
        "common.confirm_delete" => "Удалить выбранные элементы?",

        "dashboard.title" => "Сводка мастерской",
        "dashboard.orders_this_month" => "Заказов за месяц",
        "dashboard.revenue_this_month" => "Выручка за месяц",
        "dashboard.average_order" => "Средний заказ",
        "dashboard.total_parts" => "Деталей в каталоге",
        "dashboard.orders_by_status" => "Заказы по статусам",
        "dashboard.low_stock" => "Материалы на исходе",
        "dashboard.maintenance_due" => "Принтеры ждут ТО",

        "materials.title" => "Материалы",
        "materials.new" => "Новый материал",
        "materials.edit" => "Редактирование материала",
        "materials.type" => "Тип",
        "materials.color" => "Цвет",
        "materials.brand" => "Бренд",
        "materials.cost_per_gram" => "Цена за грамм",
        "materials.stock" => "Остаток, г",
        "materials.threshold" => "Порог остатка, г",
        "materials.low_stock_badge" => "мало",

        "parts.title" => "Детали",
        "parts.new" => "Новая деталь",
        "parts.edit" => "Редактирование детали",
        "parts.material" => "Материал",
        "parts.weight" => "Вес, г",
        "parts.print_time" => "Время печати, мин",
        "parts.markup" => "Наценка, %",
        "parts.base_cost" => "Себестоимость",
        "parts.price" => "Рекомендованная цена",
        "parts.category" => "Категория",

        "orders.title" => "Заказы",
        "orders.new" => "Новый заказ",
        "orders.number" => "№ заказа",
        "orders.customer" => "Клиент",
        "orders.phone" => "Телефон",
        "orders.email" => "Почта",
        "orders.telegram" => "Телеграм",
        "orders.status" => "Статус",
        "orders.parts" => "Детали",
        "orders.quantity" => "Кол-во",
        "orders.subtotal" => "Сумма",
        "orders.markup" => "Наценка",
        "orders.total" => "Итого",
        "orders.notes" => "Примечания",
        "orders.add_line" => "Добавить деталь",
        "orders.status.new" => "Новый",
        "orders.status.printing" => "Печать",
        "orders.status.finished" => "Готов",
        "orders.status.delivered" => "Выдан",

        "printers.title" => "Принтеры",
        "printers.new" => "Новый принтер",
        "printers.edit" => "Редактирование принтера",
        "printers.model" => "Модель",
        "printers.hourly_rate" => "Ставка в час",
        "printers.power" => "Мощность, Вт",
        "printers.electricity" => "Электричество, кВт·ч",
        "printers.interval" => "Интервал ТО, ч",
        "printers.hours" => "Часы печати",
        "printers.active" => "Активен",
        "printers.maintenance_due_badge" => "нужно ТО",

        "estimate.title" => "Калькулятор стоимости",
        "estimate.calculate" => "Рассчитать",
        "estimate.material_cost" => "Материал",
        "estimate.print_cost" => "Печать",
        "estimate.base_cost" => "Себестоимость",
        "estimate.final_price" => "Цена с наценкой",

        "reports.title" => "Отчёты",
        "reports.from" => "С",
        "reports.to" => "По",
        "reports.export_csv" => "Выгрузить CSV",

        "settings.title" => "Настройки",
        "settings.language" => "Язык",
        "settings.currency" => "Валюта отображения",
        "settings.default_markup" => "Наценка по умолчанию, %",
        "settings.notifications" => "Уведомления",
        "settings.notify_new_order" => "Новый заказ",
        "settings.notify_status" => "Смена статуса",
        "settings.notify_low_stock" => "Остаток на исходе",
        "settings.rates" => "Курсы валют",
        "settings.refresh_rates" => "Обновить курсы",
        "settings.saved" => "Настройки сохранены",

        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_keys() {
        assert_eq!(translate(Language::En, "nav.orders"), "Orders");
        assert_eq!(translate(Language::Ru, "nav.orders"), "Заказы");
    }

    #[test]
    fn test_unknown_key_echoes() {
        assert_eq!(translate(Language::En, "nav.bogus"), "nav.bogus");
    }

    #[test]
    fn test_locales_cover_same_keys() {
        // Every key present in English must resolve in Russian too
        for key in [
            "nav.dashboard",
            "common.save",
            "dashboard.orders_by_status",
            "materials.cost_per_gram",
            "parts.print_time",
            "orders.status.delivered",
            "printers.interval",
            "estimate.final_price",
            "reports.export_csv",
            "settings.currency",
        ] {
            assert_ne!(translate(Language::Ru, key), key, "missing ru: {}", key);
            assert_ne!(translate(Language::En, key), key, "missing en: {}", key);
        }
    }
}
