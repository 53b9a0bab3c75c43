pub mod rates;

pub use rates::ExchangeRates;
