//! # Observability & Tracing
//!
//! Structured logging for every actor in the process.
//!
//! Actors log their lifecycle (`Actor started`, `Shutdown`) and every request with
//! structured fields such as `entity_type`, `id` and `size`. Client wrappers add a
//! `#[instrument]` span per call, so a request reads as one hierarchy:
//!
//! ```text
//! INFO create_order: Created entity_type="Order" id=5f0c… size=1
//! INFO New order received order_id=5f0c… dishes=2 total=$21.98
//! ```
//!
//! Verbosity comes from `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run      # lifecycle and mutations
//! RUST_LOG=debug cargo run     # every request, with payloads
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the process-wide subscriber.
///
/// Uses `RUST_LOG` when set and `info` otherwise, a compact format, and no module targets
/// (the `entity_type` field already says which actor is talking). Calling it again is a
/// no-op, so tests and binaries can both call it.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
