use crate::shared::currency_ctx::use_currency;
use crate::shared::fetch;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use contracts::domain::a007_user_settings::{Language, UserSettings};
use contracts::domain::a008_exchange_rates::ExchangeRates;
use contracts::shared::currency::Currency;
use leptos::prelude::*;

/// Settings page: language, display currency, default markup,
/// notification toggles and the exchange-rate cache
#[component]
pub fn SettingsPage() -> impl IntoView {
    let i18n = use_i18n();
    let currency_ctx = use_currency();

    let (form, set_form) = signal(UserSettings::default());
    let (saved, set_saved) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    // Load stored settings once
    leptos::task::spawn_local(async move {
        match fetch::get_json::<UserSettings>("/api/settings").await {
            Ok(settings) => set_form.set(settings),
            Err(e) => set_error.set(Some(e)),
        }
    });

    let save = move || {
        let settings = form.get_untracked();
        leptos::task::spawn_local(async move {
            match fetch::post_json::<_, UserSettings>("/api/settings", &settings).await {
                Ok(saved_settings) => {
                    // Apply display preferences immediately
                    i18n.set_locale(saved_settings.language);
                    currency_ctx.set_currency(saved_settings.currency);
                    set_form.set(saved_settings);
                    set_saved.set(true);
                    set_error.set(None);
                }
                Err(e) => {
                    set_saved.set(false);
                    set_error.set(Some(e));
                }
            }
        });
    };

    let refresh_rates = move || {
        leptos::task::spawn_local(async move {
            match fetch::post_empty("/api/exchange-rates/refresh").await {
                Ok(_) => currency_ctx.load_rates(),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="content">
            <div class="header">
                <h2>{move || i18n.t("settings.title")}</h2>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
            {move || saved.get().then(|| view! {
                <div class="notice">{move || i18n.t("settings.saved")}</div>
            })}

            <div class="details-form">
                <div class="form-group">
                    <label for="language">{move || i18n.t("settings.language")}</label>
                    <select
                        id="language"
                        on:change=move |ev| {
                            if let Some(lang) = Language::from_code(&event_target_value(&ev)) {
                                set_form.update(|f| f.language = lang);
                            }
                        }
                    >
                        <option value="en" selected=move || form.get().language == Language::En>
                            {"English"}
                        </option>
                        <option value="ru" selected=move || form.get().language == Language::Ru>
                            {"Русский"}
                        </option>
                    </select>
                </div>

                <div class="form-group">
                    <label for="currency">{move || i18n.t("settings.currency")}</label>
                    <select
                        id="currency"
                        on:change=move |ev| {
                            if let Some(c) = Currency::from_code(&event_target_value(&ev)) {
                                set_form.update(|f| f.currency = c);
                            }
                        }
                    >
                        {Currency::all().into_iter().map(|c| {
                            view! {
                                <option
                                    value={c.code()}
                                    selected=move || form.get().currency == c
                                >
                                    {format!("{} {}", c.code(), c.symbol())}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="default_markup">{move || i18n.t("settings.default_markup")}</label>
                    <input
                        type="number"
                        step="1"
                        min="0"
                        max="500"
                        id="default_markup"
                        prop:value=move || form.get().default_markup_percent.to_string()
                        on:input=move |ev| {
                            let v = event_target_value(&ev).parse().unwrap_or(0.0);
                            set_form.update(|f| f.default_markup_percent = v);
                        }
                    />
                </div>

                <div class="form-group">
                    <label>{move || i18n.t("settings.notifications")}</label>
                    <div class="checkbox-row">
                        <input
                            type="checkbox"
                            id="notify_new_order"
                            prop:checked=move || form.get().notify_on_new_order
                            on:change=move |ev| {
                                let v = event_target_checked(&ev);
                                set_form.update(|f| f.notify_on_new_order = v);
                            }
                        />
                        <label for="notify_new_order">{move || i18n.t("settings.notify_new_order")}</label>
                    </div>
                    <div class="checkbox-row">
                        <input
                            type="checkbox"
                            id="notify_status"
                            prop:checked=move || form.get().notify_on_status_change
                            on:change=move |ev| {
                                let v = event_target_checked(&ev);
                                set_form.update(|f| f.notify_on_status_change = v);
                            }
                        />
                        <label for="notify_status">{move || i18n.t("settings.notify_status")}</label>
                    </div>
                    <div class="checkbox-row">
                        <input
                            type="checkbox"
                            id="notify_low_stock"
                            prop:checked=move || form.get().notify_on_low_stock
                            on:change=move |ev| {
                                let v = event_target_checked(&ev);
                                set_form.update(|f| f.notify_on_low_stock = v);
                            }
                        />
                        <label for="notify_low_stock">{move || i18n.t("settings.notify_low_stock")}</label>
                    </div>
                </div>

                <div class="form-actions">
                    <button class="button button--primary" on:click=move |_| save()>
                        {move || i18n.t("common.save")}
                    </button>
                </div>

                <div class="form-group">
                    <label>{move || i18n.t("settings.rates")}</label>
                    <div class="readonly-field">
                        {move || {
                            let rates: ExchangeRates = currency_ctx.rates.get();
                            format!(
                                "1 RUB = {:.4} USD · {:.4} EUR · {:.4} CNY",
                                rates.usd, rates.eur, rates.cny
                            )
                        }}
                    </div>
                    <button class="button button--secondary" on:click=move |_| refresh_rates()>
                        {icon("refresh")}
                        {move || i18n.t("settings.refresh_rates")}
                    </button>
                </div>
            </div>
        </div>
    }
}
