//! Closed sets of selectable variants.
//!
//! Modes and system states are both small, fixed enumerations that a caller
//! picks with a single-character selector. This trait gives them a shared,
//! pure vocabulary: a display name, a selector, and lookup in both directions.

use super::error::SelectorError;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for selectable context variants.
///
/// All methods are pure. Variants carry no per-instance data, so they are
/// `Copy` and compared by value.
///
/// Implementations are normally generated with [`variant_enum!`](crate::variant_enum).
///
/// # Example
///
/// ```rust
/// use hearth::core::Variant;
/// use hearth::variant_enum;
///
/// variant_enum! {
///     pub enum Lighting: "lighting" {
///         Bright = 'B' => "Bright",
///         Dim = 'D' => "Dim",
///     }
/// }
///
/// assert_eq!(Lighting::from_selector('d').unwrap(), Lighting::Dim);
/// assert_eq!(Lighting::Bright.name(), "Bright");
/// assert!(Lighting::from_selector('x').is_err());
/// ```
pub trait Variant:
    Copy + Eq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Name of the context this variant belongs to, used in error messages.
    const CONTEXT: &'static str;

    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    /// Human readable name.
    fn name(&self) -> &'static str;

    /// Upper-case selector character.
    fn selector(&self) -> char;

    /// Look up a variant by selector, ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::Unknown`] when no variant uses `selector`.
    fn from_selector(selector: char) -> Result<Self, SelectorError> {
        Self::ALL
            .iter()
            .copied()
            .find(|variant| variant.selector().eq_ignore_ascii_case(&selector))
            .ok_or(SelectorError::Unknown {
                context: Self::CONTEXT,
                selector,
            })
    }

    /// Look up a variant by its display name.
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|variant| variant.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::variant_enum! {
        enum TestVariant: "test" {
            Alpha = 'A' => "Alpha",
            Beta = 'B' => "Beta Two",
            Gamma = 'G' => "Gamma",
        }
    }

    #[test]
    fn selector_lookup_ignores_case() {
        assert_eq!(TestVariant::from_selector('A').unwrap(), TestVariant::Alpha);
        assert_eq!(TestVariant::from_selector('b').unwrap(), TestVariant::Beta);
        assert_eq!(TestVariant::from_selector('g').unwrap(), TestVariant::Gamma);
    }

    #[test]
    fn unknown_selector_reports_context() {
        let err = TestVariant::from_selector('z').unwrap_err();

        assert_eq!(
            err,
            SelectorError::Unknown {
                context: "test",
                selector: 'z'
            }
        );
        assert_eq!(err.to_string(), "invalid test selection 'z'");
    }

    #[test]
    fn name_lookup_is_exact() {
        assert_eq!(TestVariant::from_name("Beta Two"), Some(TestVariant::Beta));
        assert_eq!(TestVariant::from_name("beta two"), None);
    }

    #[test]
    fn all_lists_variants_in_order() {
        assert_eq!(
            TestVariant::ALL,
            &[TestVariant::Alpha, TestVariant::Beta, TestVariant::Gamma]
        );
    }

    #[test]
    fn every_variant_round_trips_through_its_selector() {
        for variant in TestVariant::ALL {
            assert_eq!(
                TestVariant::from_selector(variant.selector()).unwrap(),
                *variant
            );
        }
    }

    #[test]
    fn variant_serializes_correctly() {
        let json = serde_json::to_string(&TestVariant::Gamma).unwrap();
        let deserialized: TestVariant = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, TestVariant::Gamma);
    }
}
