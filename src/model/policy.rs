//! Enumerated webhook fields
//!
//! The API server sends these as plain strings. Known values get their own variant;
//! anything else is kept verbatim in `Other` so a newer server never has its values
//! rewritten in the report.

use std::fmt;

use serde::{Serialize, Serializer};

/// Generates the string conversions shared by every enumerated field.
macro_rules! api_string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
            /// Value not known to this tool, kept as returned by the server
            Other(String),
        }

        impl $name {
            /// The wire representation of this value
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $text,)+
                    $name::Other(s) => s.as_str(),
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $($text => $name::$variant,)+
                    other => $name::Other(other.to_string()),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

api_string_enum! {
    /// Behaviour when the webhook call fails
    pub enum FailurePolicy {
        /// Errors are ignored and the request is allowed
        Ignore => "Ignore",
        /// Errors reject the request
        Fail => "Fail",
    }
}

api_string_enum! {
    /// How rules match requests made through other API versions
    pub enum MatchPolicy {
        Exact => "Exact",
        Equivalent => "Equivalent",
    }
}

api_string_enum! {
    /// Declared side effects of calling the webhook
    pub enum SideEffects {
        None => "None",
        NoneOnDryRun => "NoneOnDryRun",
        Some => "Some",
        Unknown => "Unknown",
    }
}

api_string_enum! {
    /// Operation a rule intercepts
    pub enum Operation {
        Create => "CREATE",
        Update => "UPDATE",
        Delete => "DELETE",
        Connect => "CONNECT",
        All => "*",
    }
}

api_string_enum! {
    /// Resource scope a rule applies to
    pub enum Scope {
        Cluster => "Cluster",
        Namespaced => "Namespaced",
        All => "*",
    }
}
