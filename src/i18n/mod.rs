pub mod locale;

pub use locale::{I18nLocaleResolver, LocaleResolver};
