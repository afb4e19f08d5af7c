//! Command implementations

mod run;
mod status;

pub use run::run;
pub use status::status;
