//! Constants for the interactive browser

// Timing constants
/// Message auto-clear delay in milliseconds
pub const MESSAGE_CLEAR_DELAY_MS: u64 = 3000;

/// Event polling interval in milliseconds
pub const EVENT_POLL_INTERVAL_MS: u64 = 50;

/// Double Ctrl+C timeout in seconds
pub const DOUBLE_CTRL_C_TIMEOUT_SECS: u64 = 1;

pub const EXIT_PROMPT: &str = "Press Ctrl+C again to exit";

// UI Layout constants
/// Height of the search bar component
pub const SEARCH_BAR_HEIGHT: u16 = 3;

pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Page size for PageUp/PageDown navigation
pub const PAGE_SIZE: usize = 10;

// Help dialog dimensions
pub const HELP_DIALOG_MAX_WIDTH: u16 = 70;
pub const HELP_DIALOG_MARGIN: u16 = 4;

/// Height of the header block in the preview screen
pub const PREVIEW_HEADER_HEIGHT: u16 = 5;
