//! Interruption handler.

use std::sync::Arc;
use std::sync::Once;
use std::sync::atomic::{AtomicBool, Ordering};
use ufl_core::prelude::Quota;

static SHOULD_INTERRUPT: AtomicBool = AtomicBool::new(false);
static HANDLER: Once = Once::new();

/// Creates a quota which is reached once the process receives an interruption signal.
pub fn create_interruption_quota() -> Arc<dyn Quota + Send + Sync> {
    HANDLER.call_once(|| {
        if let Err(err) = ctrlc::set_handler(|| SHOULD_INTERRUPT.store(true, Ordering::Relaxed)) {
            eprintln!("cannot set interruption handler: '{err}'");
        }
    });

    Arc::new(InterruptionQuota)
}

struct InterruptionQuota;

impl Quota for InterruptionQuota {
    fn is_reached(&self) -> bool {
        SHOULD_INTERRUPT.load(Ordering::Relaxed)
    }
}
