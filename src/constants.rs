//! Codec limits and defaults.
//!
//! Values that bound how much work the decoder will do on untrusted input.

// ============================================================================
// Decoding limits
// ============================================================================

/// Maximum number of nested lists/dictionaries accepted by default.
/// Deep enough for any real torrent or DHT message, shallow enough to keep
/// recursion well within a thread's stack.
pub const DEFAULT_MAX_DEPTH: usize = 64;
