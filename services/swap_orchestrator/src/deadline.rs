use crate::error::SwapError;
use std::time::{SystemTime, UNIX_EPOCH};

/// Unix timestamp `secs` seconds from now
pub fn deadline_after(secs: u64) -> Result<u64, SwapError> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| SwapError::Clock(e.to_string()))?;
    now.as_secs()
        .checked_add(secs)
        .ok_or_else(|| SwapError::Clock(format!("deadline {}s from now overflows", secs)))
}
