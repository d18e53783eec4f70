//! Common domain type definitions
//!
//! Enumerations shared by household and member records. Backend payloads use
//! both English and Indonesian spellings, so parsing is lenient: values are
//! trimmed and lowercased before matching, and anything unrecognised falls
//! back to a designated variant.

/// Declare a lenient text-backed enum
///
/// The first literal of each variant is its canonical wire value, the rest are
/// accepted aliases. All literals must be lowercase.
macro_rules! text_enum {
    (
        $(#[$meta:meta])*
        $name:ident, fallback = $fallback:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $canonical:literal $(| $alias:literal)* ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(from = "Option<String>", into = "String")]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Parse a value, returning `None` when it is not recognised
            #[must_use]
            pub fn parse(s: &str) -> Option<Self> {
                match s.trim().to_lowercase().as_str() {
                    $( $canonical $(| $alias)* => Some(Self::$variant), )+
                    _ => None,
                }
            }

            /// Canonical wire value
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $canonical ),+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$fallback
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::parse(s).unwrap_or_default()
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self::from(s.as_str())
            }
        }

        impl From<Option<String>> for $name {
            fn from(s: Option<String>) -> Self {
                s.map(Self::from).unwrap_or_default()
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

text_enum! {
    /// Whether the household has always lived at its address
    DomicileStatus, fallback = NativeResident {
        /// Household originates from the area
        NativeResident => "native_resident" | "nativeresident" | "native" | "penduduk asli" | "asli",
        /// Household moved in from elsewhere
        Migrant => "migrant" | "pendatang",
    }
}

text_enum! {
    /// Citizenship of a household member
    Citizenship, fallback = Citizen {
        /// Indonesian citizen (WNI)
        Citizen => "citizen" | "wni",
        /// Foreign national (WNA)
        ForeignNational => "foreign_national" | "foreignnational" | "foreign" | "wna",
    }
}

text_enum! {
    /// Sex of a household member
    Sex, fallback = Unknown {
        Male => "male" | "m" | "laki-laki" | "l",
        Female => "female" | "f" | "perempuan" | "p",
        Unknown => "unknown" | "",
    }
}

text_enum! {
    /// ABO blood group
    BloodType, fallback = Unknown {
        A => "a",
        B => "b",
        Ab => "ab",
        O => "o",
        Unknown => "unknown" | "" | "-" | "tidak tahu",
    }
}

text_enum! {
    /// Marital status of a household member
    MaritalStatus, fallback = Unknown {
        Single => "single" | "belum kawin",
        /// Requires a marriage date
        Married => "married" | "kawin",
        Divorced => "divorced" | "cerai hidup",
        Widowed => "widowed" | "cerai mati",
        Unknown => "unknown" | "",
    }
}

/// Authorization role of the caller, resolved once at load time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessRole {
    /// Administrators and auditors: the full cross-household registry
    Privileged,
    /// Field staff: only documents they submitted themselves
    Standard,
}

impl AccessRole {
    /// Resolve the role name reported by the session
    #[must_use]
    pub fn from_role_name(role: &str) -> Self {
        match role.trim().to_lowercase().as_str() {
            "admin" | "administrator" | "auditor" | "guest" => Self::Privileged,
            _ => Self::Standard,
        }
    }
}

impl From<&str> for AccessRole {
    fn from(role: &str) -> Self {
        Self::from_role_name(role)
    }
}
