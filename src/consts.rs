pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! Configuration constants for the user-admin dashboard, organized by
    //! functional area.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Maximum event buffer size between the API worker and the UI.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// Maximum number of queued actions waiting for the API worker.
    pub const ACTION_QUEUE_SIZE: usize = 32;

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    /// HTTP client timeouts.
    pub mod http {
        /// Maximum time to establish a connection to the backend, in seconds.
        pub const CONNECT_TIMEOUT_SECS: u64 = 10;

        /// Maximum time for a full request/response cycle, in seconds.
        pub const REQUEST_TIMEOUT_SECS: u64 = 10;
    }

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    /// Terminal input handling.
    pub mod input {
        /// How long to block waiting for a key event before redrawing, in milliseconds.
        pub const POLL_INTERVAL_MS: u64 = 100;
    }
}
