pub mod logging;
pub mod repo;
