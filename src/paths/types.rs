//! Rendering of leaf type descriptors into their display form

use crate::schema::{TypeDescriptor, TypeKind};

use super::style::{SegmentStyle, paint};

/// Render the detailed type string of a leaf.
///
/// Starts with the type name and appends, in order: the identity base
/// (`->base`), the leafref target (`->path`), the quoted enum names and
/// the braced union members. Each part is dimmed when `colorize` is set.
pub fn render_type(ty: &TypeDescriptor, colorize: bool) -> String {
    let mut rendered = paint(&ty.name, SegmentStyle::Type, colorize);

    if let Some(base) = ty.identity_base() {
        rendered.push_str(&paint(&format!("->{}", base), SegmentStyle::Type, colorize));
    }

    match &ty.kind {
        TypeKind::Leafref { path } => {
            rendered.push_str(&paint(&format!("->{}", path), SegmentStyle::Type, colorize));
        }
        TypeKind::Enumeration { names } => {
            rendered.push_str(&paint(&quoted_names(names, ","), SegmentStyle::Type, colorize));
        }
        TypeKind::Union { members } => {
            let members: Vec<String> = members.iter().map(union_member).collect();
            rendered.push_str(&paint(
                &format!("{{{}}}", members.join(" ")),
                SegmentStyle::Type,
                colorize,
            ));
        }
        TypeKind::Plain | TypeKind::IdentityRef { .. } => {}
    }

    rendered
}

fn union_member(ty: &TypeDescriptor) -> String {
    match &ty.kind {
        TypeKind::IdentityRef { base } => format!("identityref->{}", base),
        TypeKind::Enumeration { names } => format!("enumeration{}", quoted_names(names, " ")),
        _ => ty.name.clone(),
    }
}

/// `"[a<sep>b]"`, with embedded quotes and backslashes escaped.
fn quoted_names(names: &[String], sep: &str) -> String {
    let list = format!("[{}]", names.join(sep));
    format!("\"{}\"", list.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_type() {
        assert_eq!(render_type(&TypeDescriptor::plain("uint32"), false), "uint32");
    }

    #[test]
    fn test_identityref() {
        let ty = TypeDescriptor::identityref("interface-type");
        assert_eq!(render_type(&ty, false), "identityref->interface-type");
    }

    #[test]
    fn test_leafref() {
        let ty = TypeDescriptor::leafref("../config/name");
        assert_eq!(render_type(&ty, false), "leafref->../config/name");
    }

    #[test]
    fn test_enumeration_keeps_declared_order() {
        let ty = TypeDescriptor::enumeration(["UP", "DOWN", "TESTING"]);
        assert_eq!(render_type(&ty, false), r#"enumeration"[UP,DOWN,TESTING]""#);
    }

    #[test]
    fn test_typedef_enumeration_uses_typedef_name() {
        let ty = TypeDescriptor::enumeration(["up", "down"]).named("oper-status");
        assert_eq!(render_type(&ty, false), r#"oper-status"[up,down]""#);
    }

    #[test]
    fn test_union_members() {
        let ty = TypeDescriptor::union(vec![
            TypeDescriptor::identityref("Foo"),
            TypeDescriptor::enumeration(["A", "B"]),
        ]);
        assert_eq!(
            render_type(&ty, false),
            r#"union{identityref->Foo enumeration"[A B]"}"#
        );
    }

    #[test]
    fn test_union_plain_and_leafref_members_use_names() {
        let ty = TypeDescriptor::union(vec![
            TypeDescriptor::plain("uint32"),
            TypeDescriptor::leafref("/a/b"),
            TypeDescriptor::plain("ip-address"),
        ]);
        assert_eq!(render_type(&ty, false), "union{uint32 leafref ip-address}");
    }

    #[test]
    fn test_empty_union() {
        assert_eq!(render_type(&TypeDescriptor::union(vec![]), false), "union{}");
    }

    #[test]
    fn test_quoted_names_escapes() {
        assert_eq!(quoted_names(&["a\"b".to_string()], ","), r#""[a\"b]""#);
    }

    #[test]
    fn test_colorized_type_is_dimmed() {
        let rendered = render_type(&TypeDescriptor::leafref("/a"), true);
        assert!(rendered.contains("\x1b[2m"));
        assert!(rendered.contains("leafref"));
        assert!(rendered.contains("->/a"));
    }
}
