//! Typed identifiers.
//!
//! Block ids are minted locally when a block is placed on the page. Record
//! ids (websites, users, chat messages, custom blocks) are assigned by the
//! remote store and treated as opaque strings.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$meta:meta])* $T:ident) => {
        $(#[$meta])*
        #[derive(Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $T(String);

        impl $T {
            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl From<String> for $T {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $T {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl fmt::Display for $T {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl fmt::Debug for $T {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($T), self.0)
            }
        }
    };
}

string_id!(
    /// Identifier of a placed block. Unique within and across documents.
    BlockId
);
string_id!(
    /// Identifier of a template, built-in (`hero-modern`) or custom (`custom-…`).
    TemplateId
);
string_id!(
    /// Remote identifier of a persisted website record.
    WebsiteId
);
string_id!(
    /// Authenticated user.
    UserId
);
string_id!(
    /// Remote identifier of a chat message record.
    MessageId
);
string_id!(
    /// Remote identifier of a custom block record.
    CustomBlockId
);

impl BlockId {
    /// Mint a fresh block id. Ids are random and never reused.
    pub fn generate() -> Self {
        Self(format!("block-{}", uuid::Uuid::new_v4().as_simple()))
    }
}

/// Prefix that namespaces custom templates away from the built-in catalog.
pub const CUSTOM_TEMPLATE_PREFIX: &str = "custom-";

impl TemplateId {
    /// Template id for a custom block record.
    pub fn custom(record: &CustomBlockId) -> Self {
        Self(format!("{}{}", CUSTOM_TEMPLATE_PREFIX, record.as_str()))
    }

    /// Whether this id lives in the custom namespace.
    pub fn is_custom(&self) -> bool {
        self.0.starts_with(CUSTOM_TEMPLATE_PREFIX)
    }

    /// The custom block record this template was built from, if any.
    pub fn custom_record(&self) -> Option<CustomBlockId> {
        self.0
            .strip_prefix(CUSTOM_TEMPLATE_PREFIX)
            .map(CustomBlockId::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_ids_are_unique() {
        let a = BlockId::generate();
        let b = BlockId::generate();
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("block-"));
    }

    #[test]
    fn test_custom_template_namespace() {
        let record = CustomBlockId::from("42");
        let id = TemplateId::custom(&record);

        assert_eq!(id.as_str(), "custom-42");
        assert!(id.is_custom());
        assert_eq!(id.custom_record(), Some(record));
        assert!(!TemplateId::from("hero-modern").is_custom());
    }

    #[test]
    fn test_ids_serialize_transparently() {
        let id = BlockId::from("block-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"block-1\"");
    }
}
