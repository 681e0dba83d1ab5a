// slug_enum
// declares a closed identifier set whose variants map 1:1 onto stable slugs
macro_rules! slug_enum {
    (
        $(#[$meta:meta])*
        pub enum $Name:ident ($kind:literal) {
            $( $(#[$vmeta:meta])* $Variant:ident => $slug:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            Debug,
            ::serde::Deserialize,
            Eq,
            Hash,
            Ord,
            PartialEq,
            PartialOrd,
            ::serde::Serialize,
        )]
        pub enum $Name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $slug)]
                $Variant,
            )*
        }

        impl $Name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$Variant),*];

            /// Every slug, in declaration order.
            pub const SLUGS: &'static [&'static str] = &[$($slug),*];

            /// Stable slug used in records, storage, and serialized forms.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$Variant => $slug,)*
                }
            }
        }

        impl ::std::fmt::Display for $Name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $Name {
            type Err = $crate::types::UnknownSlug;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($slug => Ok(Self::$Variant),)*
                    _ => Err($crate::types::UnknownSlug::new($kind, s)),
                }
            }
        }
    };
}
