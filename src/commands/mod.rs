//! Command implementations
//!
//! Each command is a module with an `execute` function that takes parsed CLI
//! args and runs the operation against the catalog or configuration.

pub mod catalog;
pub mod games;
pub mod lookup;
pub mod reviews;
pub mod search;
pub mod settings;
pub mod tags;
pub mod transfer;

pub use catalog::execute as catalog;
pub use lookup::execute as lookup;
pub use reviews::execute as reviews;
pub use search::execute as search;
pub use settings::execute as settings;
pub use tags::execute as tags;
