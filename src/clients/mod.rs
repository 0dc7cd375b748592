pub mod confirm;
pub mod template;
