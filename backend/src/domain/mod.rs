//! # Domain Module
//!
//! Business logic of the fiscal date picker, independent of any UI framework.
//!
//! ## Module Organization
//!
//! - **fiscal_calendar**: fiscal week, year and quarter math for a date
//! - **cell_generator**: day, month and quarter cells for a displayed period
//! - **selection_store**: selected days, months, quarters and years
//! - **picker_controller**: navigation and click routing per picker mode
//! - **summary**: selection banner and navigation header derivations
//!
//! ## Business Rules
//!
//! - A fiscal year may start in any month and is named after the calendar year it ends in
//! - The day grid is always 6 weeks, padded with adjacent-month days
//! - Clicking a quarter forces all three of its months in or out
//! - A quarter is selected exactly when all three of its months are
//! - At least one year stays selected in multi-year mode

pub mod cell_generator;
pub mod fiscal_calendar;
pub mod picker_controller;
pub mod selection_store;
pub mod summary;
