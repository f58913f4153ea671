use std::sync::atomic::{AtomicU64, Ordering};

// Process-wide invoice number sequence, starting at 1. The counter only
// ever increases, so numbers stay unique and monotonic even when invoices
// are constructed from multiple threads.
static NEXT_NUMBER: AtomicU64 = AtomicU64::new(1);

/// Claim the next invoice number from the process-wide sequence.
pub(crate) fn next_invoice_number() -> u64 {
    NEXT_NUMBER.fetch_add(1, Ordering::Relaxed)
}
