pub mod load;
pub mod types;
pub mod write;

pub use load::{load_athletes, RESOLVE_COLUMNS, RESULTS_COLUMNS};
pub use types::{AthleteRecord, AthleteTable, Column};
pub use write::write_athletes;
