//! Macros for declaring selectable variants.

/// Generate a `Copy` enum together with its [`Variant`](crate::core::Variant)
/// implementation and a `Display` impl that prints the variant name.
///
/// Each variant lists its selector character and display name. The string
/// after the enum name is the context used in selector errors.
///
/// # Example
///
/// ```
/// use hearth::core::Variant;
/// use hearth::variant_enum;
///
/// variant_enum! {
///     #[derive(Default)]
///     pub enum Fan: "fan" {
///         #[default]
///         Low = 'L' => "Low",
///         High = 'H' => "High",
///     }
/// }
///
/// assert_eq!(Fan::default(), Fan::Low);
/// assert_eq!(Fan::High.to_string(), "High");
/// assert_eq!(Fan::High.selector(), 'H');
/// ```
#[macro_export]
macro_rules! variant_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $context:literal {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $selector:literal => $label:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, ::serde::Serialize, ::serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Variant for $name {
            const CONTEXT: &'static str = $context;
            const ALL: &'static [Self] = &[$(Self::$variant),*];

            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),*
                }
            }

            fn selector(&self) -> char {
                match self {
                    $(Self::$variant => $selector),*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::Variant::name(self))
            }
        }
    };
}
