//! Leaf type descriptors

use serde::{Deserialize, Serialize};

/// Resolved kind of a leaf type together with its kind-specific data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum TypeKind {
    /// Built-in or derived type with nothing else worth showing.
    Plain,
    #[serde(rename = "identityref")]
    IdentityRef {
        /// Name of the identity base.
        base: String,
    },
    Leafref {
        /// The referenced path, as written in the schema.
        path: String,
    },
    Enumeration {
        /// Enum member names in declaration order.
        #[serde(default)]
        names: Vec<String>,
    },
    Union {
        #[serde(default)]
        members: Vec<TypeDescriptor>,
    },
}

/// Value type of a leaf or leaf-list.
///
/// `name` is the type as written (it may be a typedef name), while `kind`
/// is the resolved built-in kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    pub name: String,
    #[serde(flatten)]
    pub kind: TypeKind,
}

impl TypeDescriptor {
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn plain(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Plain)
    }

    pub fn identityref(base: impl Into<String>) -> Self {
        Self::new("identityref", TypeKind::IdentityRef { base: base.into() })
    }

    pub fn leafref(path: impl Into<String>) -> Self {
        Self::new("leafref", TypeKind::Leafref { path: path.into() })
    }

    pub fn enumeration<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            "enumeration",
            TypeKind::Enumeration {
                names: names.into_iter().map(Into::into).collect(),
            },
        )
    }

    pub fn union(members: Vec<TypeDescriptor>) -> Self {
        Self::new("union", TypeKind::Union { members })
    }

    /// Rename the type, keeping its resolved kind (typedefs).
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn identity_base(&self) -> Option<&str> {
        match &self.kind {
            TypeKind::IdentityRef { base } => Some(base),
            _ => None,
        }
    }
}
