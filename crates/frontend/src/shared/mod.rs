pub mod api_utils;
pub mod currency_ctx;
pub mod date_utils;
pub mod fetch;
pub mod i18n;
pub mod icons;
pub mod list_utils;
