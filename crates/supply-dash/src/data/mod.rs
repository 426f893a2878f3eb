pub mod datasets;
pub mod generator;
pub mod regions;
