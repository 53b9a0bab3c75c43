pub mod settings;

pub use settings::{Language, UserSettings};
