pub mod perf;
pub mod tooling;
