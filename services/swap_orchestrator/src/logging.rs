//! Standardized emoji logging for the swap orchestrator
//!
//! Provides consistent emoji usage across all orchestrator components
//! to improve log readability.

/// Standard emoji set for orchestrator logging
pub struct LogEmoji;

impl LogEmoji {
    // Status indicators
    pub const SUCCESS: &'static str = "✅"; // Operation succeeded
    pub const ERROR: &'static str = "❌"; // Operation failed

    // Module-specific
    pub const SEARCH: &'static str = "🔍"; // Reading quotes/pool state/positions
    pub const NETWORK: &'static str = "🌐"; // Network/connection
    pub const APPROVAL: &'static str = "🔐"; // Allowance checks and approvals

    // Operation types
    pub const SWAP: &'static str = "🔄"; // Swap prepared
    pub const BURN: &'static str = "➖"; // Liquidity removal
}

// Convenience macros for standardized logging
#[macro_export]
macro_rules! log_success {
    ($($arg:tt)*) => {
        tracing::info!("{} {}", $crate::logging::LogEmoji::SUCCESS, format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        tracing::error!("{} {}", $crate::logging::LogEmoji::ERROR, format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_search {
    ($($arg:tt)*) => {
        tracing::debug!("{} {}", $crate::logging::LogEmoji::SEARCH, format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_network {
    ($($arg:tt)*) => {
        tracing::info!("{} {}", $crate::logging::LogEmoji::NETWORK, format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_approval {
    ($($arg:tt)*) => {
        tracing::info!("{} {}", $crate::logging::LogEmoji::APPROVAL, format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_swap {
    ($($arg:tt)*) => {
        tracing::info!("{} {}", $crate::logging::LogEmoji::SWAP, format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_withdrawal {
    ($($arg:tt)*) => {
        tracing::info!("{} {}", $crate::logging::LogEmoji::BURN, format!($($arg)*))
    };
}
