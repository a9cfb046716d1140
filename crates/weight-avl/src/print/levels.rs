//! Level-by-level ASCII diagram.
//!
//! Each node is an 8 column cell `(%6d)`. Level `i` of a diagram `h` levels
//! deep is padded on both sides of every cell by `4 * (2^(h-1-i) - 1)` spaces,
//! and each level but the last is followed by a row of `/` `\` connectors.
//!
//! Width doubles with every level, so at most [`MAX_LEVELS`] are drawn. A
//! taller tree gets a final line saying how many levels were left out.

use crate::types::Node;

/// Printed instead of a diagram for an absent root.
pub const EMPTY_LEVELS: &str = "(XXXXXX)";

/// Deepest level drawn. The bottom row is then 1024 columns wide.
pub const MAX_LEVELS: u32 = 8;

const HALF_CELL: usize = 4;
const BLANK_CELL: &str = "        ";

pub fn render_levels<P>(root: Option<&Node<P>>) -> String {
    let Some(root) = root else {
        return format!("{EMPTY_LEVELS}\n");
    };

    let height = root.height.max(1) as u32;
    let depth = height.min(MAX_LEVELS);
    let mut out = String::new();
    let mut current: Vec<Option<&Node<P>>> = vec![Some(root)];

    for level in 0..depth {
        let pad = " ".repeat(HALF_CELL * ((1usize << (depth - 1 - level)) - 1));
        let mut next = Vec::with_capacity(current.len() * 2);

        for &node in &current {
            out.push_str(&pad);
            match node {
                Some(n) => {
                    out.push_str(&format!("({:6})", n.weight));
                    next.push(n.left.as_deref());
                    next.push(n.right.as_deref());
                }
                None => {
                    out.push_str(BLANK_CELL);
                    next.push(None);
                    next.push(None);
                }
            }
            out.push_str(&pad);
        }
        out.push('\n');

        if level + 1 < depth {
            for &node in &current {
                out.push_str(&pad);
                match node {
                    Some(n) => {
                        let l = if n.left.is_some() { "/" } else { " " };
                        let r = if n.right.is_some() { "\\" } else { " " };
                        out.push_str(&format!("{l}      {r}"));
                    }
                    None => out.push_str(BLANK_CELL),
                }
                out.push_str(&pad);
            }
            out.push('\n');
        }

        current = next;
    }

    if height > depth {
        out.push_str(&format!("... {} more levels\n", height - depth));
    }

    out
}
