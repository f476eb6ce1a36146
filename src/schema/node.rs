//! Schema node tree

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::types::TypeDescriptor;

/// Tri-state `config` statement of a schema node.
///
/// Serialized as `true`, `false` or `null`/absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum ConfigState {
    /// No `config` statement; the state is inherited from the parent.
    #[default]
    Unset,
    /// `config true` - read-write configuration data.
    True,
    /// `config false` - read-only state data.
    False,
}

impl ConfigState {
    pub fn is_set(self) -> bool {
        self != ConfigState::Unset
    }

    /// Short read/write marker used in text output.
    ///
    /// Only explicit state data is reported as read-only.
    pub fn marker(self) -> &'static str {
        match self {
            ConfigState::False => "[ro]",
            ConfigState::True | ConfigState::Unset => "[rw]",
        }
    }
}

impl From<Option<bool>> for ConfigState {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => ConfigState::True,
            Some(false) => ConfigState::False,
            None => ConfigState::Unset,
        }
    }
}

impl From<ConfigState> for Option<bool> {
    fn from(value: ConfigState) -> Self {
        match value {
            ConfigState::True => Some(true),
            ConfigState::False => Some(false),
            ConfigState::Unset => None,
        }
    }
}

/// Kind-specific part of a schema node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum NodeKind {
    Module,
    Container,
    List {
        /// Ordered key leaf names; empty for keyless lists.
        #[serde(default)]
        keys: Vec<String>,
    },
    LeafList {
        #[serde(rename = "type")]
        leaf_type: TypeDescriptor,
    },
    Leaf {
        #[serde(rename = "type")]
        leaf_type: TypeDescriptor,
    },
    /// Choice, case, rpc, notification and any other statement kinds.
    #[serde(other)]
    Other,
}

/// A node of the compiled schema tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaNode {
    pub name: String,
    #[serde(flatten)]
    pub kind: NodeKind,
    #[serde(default)]
    pub config: ConfigState,
    /// Children keyed by name; the ordered map yields them lexicographically.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub children: BTreeMap<String, SchemaNode>,
}

impl SchemaNode {
    pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            config: ConfigState::Unset,
            children: BTreeMap::new(),
        }
    }

    pub fn module(name: impl Into<String>) -> Self {
        Self::new(name, NodeKind::Module)
    }

    pub fn container(name: impl Into<String>) -> Self {
        Self::new(name, NodeKind::Container)
    }

    pub fn list<I, S>(name: impl Into<String>, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            name,
            NodeKind::List {
                keys: keys.into_iter().map(Into::into).collect(),
            },
        )
    }

    pub fn leaf(name: impl Into<String>, leaf_type: TypeDescriptor) -> Self {
        Self::new(name, NodeKind::Leaf { leaf_type })
    }

    pub fn leaf_list(name: impl Into<String>, leaf_type: TypeDescriptor) -> Self {
        Self::new(name, NodeKind::LeafList { leaf_type })
    }

    /// Set the node's `config` statement.
    pub fn with_config(mut self, config: bool) -> Self {
        self.config = ConfigState::from(Some(config));
        self
    }

    /// Add a child node, replacing any existing child with the same name.
    pub fn with_child(mut self, child: SchemaNode) -> Self {
        self.children.insert(child.name.clone(), child);
        self
    }

    pub fn is_module(&self) -> bool {
        matches!(self.kind, NodeKind::Module)
    }

    /// Count the leaf nodes reachable from this node, including itself.
    pub fn leaf_count(&self) -> usize {
        let own = usize::from(matches!(self.kind, NodeKind::Leaf { .. }));
        own + self.children.values().map(SchemaNode::leaf_count).sum::<usize>()
    }
}
