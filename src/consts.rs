pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains the configuration constants for the refresh loop,
    //! organized by functional area.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Maximum number of buffered events between the refresh worker and the UI
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// Maximum number of buffered manual refresh requests
    pub const REFRESH_REQUEST_QUEUE_SIZE: usize = 8;

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    /// Stats API configuration
    pub mod stats_api {
        use std::time::Duration;

        /// Path of the loan statistics endpoint, relative to the backend base URL
        pub const STATS_ENDPOINT: &str = "dashboard/api/stats";

        /// Path of the backend health endpoint
        pub const HEALTH_ENDPOINT: &str = "dashboard/health";

        /// Connect and request timeout (seconds)
        pub const REQUEST_TIMEOUT_SECS: u64 = 10;

        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }

    /// Refresh loop timing
    pub mod refresh {
        use std::time::Duration;

        /// Period between automatic refresh cycles (milliseconds)
        pub const REFRESH_INTERVAL_MS: u64 = 30_000;

        /// Helper function to get the refresh interval
        pub const fn refresh_interval() -> Duration {
            Duration::from_millis(REFRESH_INTERVAL_MS)
        }
    }

    // =============================================================================
    // FALLBACK DATA
    // =============================================================================

    /// Stats shown when the backend cannot be reached
    pub mod fallback {
        pub const APPROVED: u64 = 0;
        pub const PENDING: u64 = 2;
        pub const REJECTED: u64 = 0;
        pub const TOTAL: u64 = 2;
        pub const RECENT_COUNT: u64 = 2;
        pub const ROLE: &str = "admin";
    }

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    /// Quick actions bound to the number keys, in key order
    pub const QUICK_ACTIONS: [&str; 4] = [
        "New Application",
        "Manage Clients",
        "Risk Reports",
        "Export Data",
    ];
}
