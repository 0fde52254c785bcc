//! Shared primitive types used across the entire generation pipeline.

/// Account identifier. Sequential from 1 in generation order.
pub type AccountId = u32;

/// Contact identifier. Sequential from 1 across all accounts.
pub type ContactId = u32;

/// Deal identifier. Assigned only after the global chronological sort.
pub type DealId = u32;

/// Activity identifier. Assigned only after the global chronological sort.
pub type ActivityId = u32;
