pub mod catalog;
pub mod loader;
pub mod output;
pub mod prompt;
pub mod reports;
pub mod session;
pub mod trip;
