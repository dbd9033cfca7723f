pub mod lead;
pub mod resume;
