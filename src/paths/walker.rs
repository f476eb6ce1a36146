//! PathWalker - collects one path record per leaf of a schema tree

use tracing::debug;

use crate::schema::{NodeKind, SchemaNode};

use super::record::{PathAccumulator, PathRecord};
use super::style::{SegmentStyle, paint};
use super::types::render_type;

/// Configuration for path collection.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Decorate list keys (bold) and type strings (dimmed) with ANSI codes.
    pub use_color: bool,
}

/// Depth-first walker over a schema tree.
///
/// Children are visited in lexicographic name order, so the records come
/// out in the same order on every run.
pub struct PathWalker {
    config: WalkerConfig,
}

impl PathWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Collect the paths of every leaf under `root`.
    pub fn walk(&self, root: &SchemaNode) -> Vec<PathRecord> {
        let mut records = Vec::new();
        self.walk_node(root, PathAccumulator::default(), &mut records);
        debug!(module = %root.name, paths = records.len(), "collected paths");
        records
    }

    /// Process `node` with the path state inherited from its parent,
    /// appending a record to `records` for each leaf reached.
    pub fn walk_node(
        &self,
        node: &SchemaNode,
        mut acc: PathAccumulator,
        records: &mut Vec<PathRecord>,
    ) {
        let colorize = self.config.use_color;

        match &node.kind {
            NodeKind::Module => {
                acc.module = node.name.clone();
            }
            NodeKind::Container => {
                acc.push_segment(&node.name);
                acc.inherit_config(node.config);
            }
            NodeKind::List { keys } => {
                acc.inherit_config(node.config);
                let (xpath_keys, restconf_keys) = key_elements(keys, colorize);
                acc.xpath.push_str(&format!("/{}{}", node.name, xpath_keys));
                acc.restconf.push_str(&format!("/{}={}", node.name, restconf_keys));
            }
            NodeKind::LeafList { .. } => {
                acc.inherit_config(node.config);
            }
            NodeKind::Leaf { leaf_type } => {
                acc.inherit_config(node.config);
                acc.push_segment(&node.name);
                let stype = render_type(leaf_type, colorize);
                records.push(acc.clone().into_record(leaf_type.clone(), stype));
            }
            NodeKind::Other => {}
        }

        for child in node.children.values() {
            self.walk_node(child, acc.clone(), records);
        }
    }
}

/// Build the XPath (`[k1=*][k2=*]`) and RESTCONF (`k1,k2`) key suffixes of a list.
/// Keyless lists get empty suffixes.
fn key_elements(keys: &[String], colorize: bool) -> (String, String) {
    if keys.is_empty() {
        return (String::new(), String::new());
    }
    let xpath = keys
        .iter()
        .map(|key| paint(&format!("[{}=*]", key), SegmentStyle::Key, colorize))
        .collect();
    let restconf = paint(&keys.join(","), SegmentStyle::Key, colorize);
    (xpath, restconf)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::schema::{ConfigState, TypeDescriptor};

    fn walk(root: &SchemaNode) -> Vec<PathRecord> {
        PathWalker::new(WalkerConfig::default()).walk(root)
    }

    fn string_leaf(name: &str) -> SchemaNode {
        SchemaNode::leaf(name, TypeDescriptor::plain("string"))
    }

    #[test]
    fn test_module_sets_name_without_segment() {
        let root = SchemaNode::module("acme").with_child(string_leaf("hostname"));
        let records = walk(&root);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].module, "acme");
        assert_eq!(records[0].xpath, "/hostname");
        assert_eq!(records[0].restconf, "/hostname");
    }

    #[test]
    fn test_container_segments() {
        let root = SchemaNode::module("acme").with_child(
            SchemaNode::container("system")
                .with_child(SchemaNode::container("dns").with_child(string_leaf("domain"))),
        );
        let records = walk(&root);
        assert_eq!(records[0].xpath, "/system/dns/domain");
        assert_eq!(records[0].restconf, "/system/dns/domain");
    }

    #[test]
    fn test_list_with_composite_key() {
        let root = SchemaNode::module("acme").with_child(
            SchemaNode::list("entry", ["id", "index"]).with_child(string_leaf("value")),
        );
        let records = walk(&root);
        assert_eq!(records[0].xpath, "/entry[id=*][index=*]/value");
        assert_eq!(records[0].restconf, "/entry=id,index/value");
    }

    #[test]
    fn test_keyless_list() {
        let root = SchemaNode::module("acme").with_child(
            SchemaNode::list("log", Vec::<String>::new()).with_child(string_leaf("message")),
        );
        let records = walk(&root);
        assert_eq!(records[0].xpath, "/log/message");
        assert_eq!(records[0].restconf, "/log=/message");
    }

    #[test]
    fn test_colored_keys_are_bold() {
        let root = SchemaNode::module("acme")
            .with_child(SchemaNode::list("entry", ["id"]).with_child(string_leaf("value")));
        let records = PathWalker::new(WalkerConfig { use_color: true }).walk(&root);
        assert!(records[0].xpath.starts_with("/entry\x1b["));
        assert!(records[0].xpath.contains("\x1b[1m[id=*]"));
        assert!(records[0].restconf.contains("\x1b[1mid"));
        assert!(records[0].stype.contains("\x1b[2m"));
    }

    #[test]
    fn test_leaf_list_produces_no_record_and_no_segment() {
        let root = SchemaNode::module("acme").with_child(
            SchemaNode::container("dns")
                .with_child(SchemaNode::leaf_list("servers", TypeDescriptor::plain("string"))),
        );
        assert!(walk(&root).is_empty());
    }

    #[test]
    fn test_other_kinds_pass_through() {
        let root = SchemaNode::module("acme").with_child(
            SchemaNode::new("transport", NodeKind::Other).with_child(
                SchemaNode::new("tcp", NodeKind::Other).with_child(string_leaf("port")),
            ),
        );
        let records = walk(&root);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].xpath, "/port");
    }

    #[test]
    fn test_children_visited_in_lexicographic_order() {
        let root = SchemaNode::module("acme")
            .with_child(string_leaf("zeta"))
            .with_child(string_leaf("alpha"))
            .with_child(SchemaNode::container("mid").with_child(string_leaf("x")));
        let paths: Vec<String> = walk(&root).into_iter().map(|r| r.xpath).collect();
        assert_eq!(paths, vec!["/alpha", "/mid/x", "/zeta"]);
    }

    #[test]
    fn test_walk_is_deterministic() {
        let root = crate::test_utils::interfaces_module();
        assert_eq!(walk(&root), walk(&root));
    }

    #[test]
    fn test_record_count_matches_leaf_count() {
        let root = crate::test_utils::interfaces_module();
        assert_eq!(walk(&root).len(), root.leaf_count());
    }

    #[test]
    fn test_siblings_do_not_share_state() {
        let root = SchemaNode::module("acme")
            .with_child(
                SchemaNode::container("a")
                    .with_config(false)
                    .with_child(SchemaNode::list("l", ["k"]).with_child(string_leaf("x"))),
            )
            .with_child(SchemaNode::container("b").with_child(string_leaf("y")));
        let records = walk(&root);
        assert_eq!(records[0].xpath, "/a/l[k=*]/x");
        assert_eq!(records[0].config, ConfigState::False);
        assert_eq!(records[1].xpath, "/b/y");
        assert_eq!(records[1].config, ConfigState::Unset);
    }

    #[test]
    fn test_config_inherited_and_overridden() {
        let root = SchemaNode::module("acme").with_child(
            SchemaNode::container("top")
                .with_config(true)
                .with_child(string_leaf("name"))
                .with_child(
                    SchemaNode::container("state")
                        .with_config(false)
                        .with_child(string_leaf("counter")),
                )
                .with_child(string_leaf("mtu").with_config(false)),
        );
        let records = walk(&root);
        let config: Vec<(&str, ConfigState)> = records
            .iter()
            .map(|r| (r.xpath.as_str(), r.config))
            .collect();
        assert_eq!(
            config,
            vec![
                ("/top/mtu", ConfigState::False),
                ("/top/name", ConfigState::True),
                ("/top/state/counter", ConfigState::False),
            ]
        );
    }

    #[test]
    fn test_leaf_list_config_applies_to_its_children() {
        let mut leaf_list =
            SchemaNode::leaf_list("tags", TypeDescriptor::plain("string")).with_config(false);
        leaf_list = leaf_list.with_child(string_leaf("value"));
        let root = SchemaNode::module("acme").with_child(leaf_list);
        let records = walk(&root);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].xpath, "/value");
        assert_eq!(records[0].config, ConfigState::False);
    }

    #[test]
    fn test_leaf_record_carries_type() {
        let root = SchemaNode::module("acme")
            .with_child(SchemaNode::leaf("ref", TypeDescriptor::leafref("/a/b")));
        let records = walk(&root);
        assert_eq!(records[0].leaf_type, TypeDescriptor::leafref("/a/b"));
        assert_eq!(records[0].stype, "leafref->/a/b");
    }
}
