use valigen_core::{FieldDescriptor, Record};

/// Ordered field descriptors for a record type.
///
/// The ordering policy maximizes the chance that source fields (names) are
/// generated before fields derived from them (emails), so context-aware
/// rules have sibling data to work with:
///
/// 1. fields whose lowercase name contains `name`, `first`, or `last`;
/// 2. everything else, alphabetically by lowercase name;
/// 3. fields whose lowercase name contains `email` or `mail`.
///
/// The order is total and deterministic for a given field set; it is
/// recomputed per build call rather than cached.
pub fn scan_fields<T: Record>() -> Vec<FieldDescriptor> {
    let mut fields = T::fields();
    fields.sort_by(|a, b| ordering_key(&a.name).cmp(&ordering_key(&b.name)));
    fields
}

fn ordering_key(name: &str) -> (u8, u8, String) {
    let lower = name.to_lowercase();
    let name_like = lower.contains("name") || lower.contains("first") || lower.contains("last");
    let email_like = lower.contains("email") || lower.contains("mail");
    (u8::from(!name_like), u8::from(email_like), lower)
}
