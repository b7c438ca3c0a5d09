//! Shared vocabulary for selectable variants.
//!
//! Both ambient modes and system states are closed sets chosen with a single
//! selector character:
//! - The `Variant` trait describes such a set
//! - `variant_enum!` generates the enum and its implementation
//! - `SelectorError` reports a selector that matches nothing

mod error;
mod macros;
mod variant;

pub use error::SelectorError;
pub use variant::Variant;
