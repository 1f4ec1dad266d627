/// Declares a family of named functions as a closed enum.
///
/// Each entry provides a variant and the identifier callers use for it in
/// operator tables. The macro produces:
/// - the enum itself,
/// - `ALL`, every member in declaration order,
/// - `name()`, the identifier of a member,
/// - `from_name()`, the reverse lookup,
/// - a `Display` impl printing the identifier.
macro_rules! function_family {
    (
        $(#[$meta:meta])*
        $vis:vis enum $family:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $name:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $family {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $family {
            /// Every member of the family, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

            /// The identifier of this member.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }

            /// Looks up a member by its identifier.
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|member| member.name() == name)
            }
        }

        impl std::fmt::Display for $family {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.name())
            }
        }
    };
}

/// The value model.
///
/// Tags, determinism, the tagged `Value` type, the tag predicates and the
/// comparability rule.
pub mod value;

/// Unary conversion functions.
///
/// One family per base category. A conversion validates the tag of its input,
/// narrows it to a target base category and keeps its determinism.
pub mod conversion;

/// Binary operator functions.
///
/// Number arithmetic, string concatenation, array membership and generic
/// equality. Operators validate both operand tags and derive the determinism of
/// their result from the operands.
pub mod operator;

/// Static result types.
///
/// Tables predicting the tag each conversion and operator produces, and a
/// checker that types a whole tree without evaluating it.
pub mod result_type;

/// Operation trees and their evaluation.
///
/// Tree nodes, the caller supplied operator table and the bottom-up evaluator.
pub mod tree;
