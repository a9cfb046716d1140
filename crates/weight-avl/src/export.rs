//! Line-oriented weight export and import.
//!
//! The export format is one decimal weight per line in ascending order. An
//! empty tree writes nothing. The reader also accepts an optional identifier
//! after the weight, blank lines and `#` comments.

use std::io::{BufRead, Write};

use crate::error::AvlError;
use crate::types::Node;
use crate::util::{first, iter, last};

pub fn write_weights<P, W: Write>(root: Option<&Node<P>>, sink: &mut W) -> Result<(), AvlError> {
    for node in iter(root) {
        writeln!(sink, "{}", node.weight)?;
    }
    sink.flush()?;
    Ok(())
}

/// Parses `weight [id]` lines.
pub fn read_weights<R: BufRead>(source: R) -> Result<Vec<(i64, Option<String>)>, AvlError> {
    let mut out = Vec::new();
    for (i, line) in source.lines().enumerate() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        let mut fields = text.split_whitespace();
        let (Some(weight), id) = (fields.next(), fields.next()) else {
            continue;
        };
        let weight = weight.parse::<i64>().map_err(|_| AvlError::Parse {
            line: i + 1,
            text: weight.to_string(),
        })?;
        out.push((weight, id.map(str::to_string)));
    }
    Ok(out)
}

pub fn min_weight<P>(root: Option<&Node<P>>) -> Option<i64> {
    first(root).map(|n| n.weight)
}

pub fn max_weight<P>(root: Option<&Node<P>>) -> Option<i64> {
    last(root).map(|n| n.weight)
}
