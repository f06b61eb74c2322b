//! Entity-kind tags carried as the prefix of every sync message.
//!
//! A plain tag (`"bank"`) marks an upsert; the same tag with a `_delete`
//! suffix marks a tombstone. The suffix is stripped before anything goes on
//! the wire, so receivers must inspect the payload's `delete` field to tell
//! the two apart.

pub const LOAN: &str = "loan";
pub const BANK: &str = "bank";
pub const BORROWER: &str = "borrower";
pub const AGENT: &str = "agent";
pub const PRODUCT: &str = "product";
pub const SERVICE: &str = "service";
pub const BANK_SERVICE: &str = "bank_service";
pub const BANK_PRODUCT: &str = "bank_product";

pub const DELETE_SUFFIX: &str = "_delete";

/// Returns the model name when `kind` is a tombstone tag.
pub fn delete_model(kind: &str) -> Option<&str> {
    kind.strip_suffix(DELETE_SUFFIX)
}

/// Strips a trailing `_delete`, leaving upsert tags untouched.
pub fn base(kind: &str) -> &str {
    kind.strip_suffix(DELETE_SUFFIX).unwrap_or(kind)
}
