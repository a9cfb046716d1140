use crate::types::Node;

/// Marker printed for an absent subtree.
pub const EMPTY_DUMP: &str = "∅";

fn label<P>(node: &Node<P>) -> String {
    match node.id.as_deref() {
        Some(id) => format!("{} #{id} [h={} bf={}]", node.weight, node.height, node.bf()),
        None => format!("{} [h={} bf={}]", node.weight, node.height, node.bf()),
    }
}

fn dump_node<P>(out: &mut String, node: &Node<P>, tab: &str) {
    out.push_str(&label(node));
    if node.is_leaf() {
        return;
    }

    let children = [("L", node.left.as_deref()), ("R", node.right.as_deref())];
    let count = children.len();
    for (i, (side, child)) in children.into_iter().enumerate() {
        let is_last = i + 1 == count;
        out.push('\n');
        out.push_str(tab);
        out.push_str(if is_last { "└─ " } else { "├─ " });
        out.push_str(side);
        out.push(' ');
        match child {
            Some(child) => {
                let child_tab = format!("{tab}{}  ", if is_last { " " } else { "│" });
                dump_node(out, child, &child_tab);
            }
            None => out.push_str(EMPTY_DUMP),
        }
    }
}

/// Indented dump listing weight, id, height and balance factor per node.
///
/// Unlike [`super::render_levels`] its size is linear in the node count.
pub fn dump<P>(root: Option<&Node<P>>) -> String {
    let Some(root) = root else {
        return EMPTY_DUMP.to_string();
    };
    let mut out = String::new();
    dump_node(&mut out, root, "");
    out
}
