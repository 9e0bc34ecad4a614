pub mod dataset;
pub mod fixture;
