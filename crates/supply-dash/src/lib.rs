pub mod cli;
pub mod data;
pub mod doctor;
pub mod error;
pub mod logging;
pub mod narrative;
pub mod output;
pub mod random;
pub mod ranking;
pub mod snapshot;
