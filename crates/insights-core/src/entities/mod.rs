//! Entity structs for persisted domain objects.
//!
//! Each entity maps to a table in the libSQL database. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` so the HTTP layer can return
//! them as JSON and clients can validate against the generated schema.

mod insight;

pub use insight::Insight;
