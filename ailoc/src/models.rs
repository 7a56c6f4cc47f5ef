// src/models.rs
mod report;
mod scan_result;
mod totals;

pub use report::Report;
pub use scan_result::ScanResult;
pub use totals::Totals;
