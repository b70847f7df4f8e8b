//! Fiscal-year aware date picker core.
//!
//! Computes fiscal calendar coordinates, generates the cells of the day,
//! month and quarter pickers, and keeps multi-select state consistent across
//! granularities. Rendering is left to the caller, which consumes
//! [`shared::PickerSnapshot`] values.

pub mod config;
pub mod domain;
pub mod script;

pub use config::{ConfigError, FiscalConfig, PickerConfig};
pub use domain::cell_generator::CellGenerator;
pub use domain::picker_controller::{PickerAction, PickerController};
pub use domain::selection_store::SelectionStore;
