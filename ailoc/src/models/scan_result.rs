// src/models/scan_result.rs

/// Line counts for a single scanned file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanResult {
    pub tagged: u64,
    pub total: u64,
}

impl ScanResult {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tagged: 0,
            total: 0,
        }
    }
}
