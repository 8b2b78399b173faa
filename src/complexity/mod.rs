pub mod cyclomatic;

pub use cyclomatic::calculate_cyclomatic;
