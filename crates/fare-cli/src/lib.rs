mod form;
mod insights;
mod predict;
mod report;
pub mod runner;
