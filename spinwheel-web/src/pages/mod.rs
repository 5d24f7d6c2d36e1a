pub mod edit;
pub mod history;
pub mod not_found;
pub mod spin;
