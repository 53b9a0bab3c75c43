//! Display-currency context: selected currency plus cached RUB-based
//! rates, with one `format` call used everywhere money is shown.

use contracts::domain::a008_exchange_rates::ExchangeRates;
use contracts::shared::currency::{self, Currency};
use leptos::prelude::*;

use super::fetch;

const STORAGE_KEY: &str = "currency";

#[derive(Clone, Copy)]
pub struct CurrencyContext {
    pub currency: RwSignal<Currency>,
    pub rates: RwSignal<ExchangeRates>,
}

impl CurrencyContext {
    pub fn new() -> Self {
        let initial = load_saved_currency().unwrap_or(Currency::Rub);
        let ctx = Self {
            currency: RwSignal::new(initial),
            rates: RwSignal::new(ExchangeRates::default()),
        };
        ctx.load_rates();
        ctx
    }

    /// Pull the cached rates from the backend (defaults remain on error)
    pub fn load_rates(&self) {
        let rates_signal = self.rates;
        leptos::task::spawn_local(async move {
            if let Ok(rates) = fetch::get_json::<ExchangeRates>("/api/exchange-rates").await {
                rates_signal.set(rates);
            }
        });
    }

    pub fn set_currency(&self, currency: Currency) {
        self.currency.set(currency);
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, currency.code());
        }
    }

    /// Format a RUB amount in the selected display currency
    pub fn format(&self, amount_rub: f64) -> String {
        let selected = self.currency.get();
        let rate = self.rates.get().rate(selected);
        let converted = currency::convert_from_rub(amount_rub, selected, rate);
        currency::format_amount(converted, selected)
    }
}

impl Default for CurrencyContext {
    fn default() -> Self {
        Self::new()
    }
}

fn load_saved_currency() -> Option<Currency> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let saved = storage.get_item(STORAGE_KEY).ok()??;
    Currency::from_code(&saved)
}

pub fn use_currency() -> CurrencyContext {
    use_context::<CurrencyContext>().expect("CurrencyContext not found in context")
}
