pub mod api;
pub mod blueprint;
pub mod errors;
pub mod layout;
mod preview;
pub mod scaffold;
pub mod templates;
