pub mod clock;
pub mod fields;
pub mod form;
