pub mod form_strip;
pub mod format;
pub mod theme;
