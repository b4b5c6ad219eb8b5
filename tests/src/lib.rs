//! Cross-crate tests: value objects from `primer-common` driven through the
//! adapters and collections in `primer-core`.

mod collections;
mod values;
