// Utility functions
// Activity records and host-locale formatting

pub mod activity;
pub mod locale;

pub use activity::Activity;
pub use locale::LocaleDateTime;
