pub mod notice;
pub mod picker;
