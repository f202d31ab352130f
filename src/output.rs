//! Output formatting for match results and tree dumps

use crate::tree::{Edge, NodeId, SuffixTree, NOT_FOUND};
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Result of looking up one pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch {
    pub pattern: String,
    /// Occurrence starts; empty when the pattern is absent
    pub positions: Vec<usize>,
}

/// Standard output stream honoring the color flag
pub fn stdout(color: bool) -> StandardStream {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Print one `pattern<TAB>positions` line per pattern
///
/// Absent patterns print the `-1` sentinel.
pub fn write_matches<W: WriteColor>(out: &mut W, matches: &[PatternMatch]) -> io::Result<()> {
    for m in matches {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
        write!(out, "{}", m.pattern)?;
        out.reset()?;
        write!(out, "\t")?;

        if m.positions.is_empty() {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
            write!(out, "{}", NOT_FOUND)?;
        } else {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
            let positions: Vec<String> = m.positions.iter().map(|p| p.to_string()).collect();
            write!(out, "{}", positions.join(" "))?;
        }
        out.reset()?;
        writeln!(out)?;
    }
    Ok(())
}

/// Print one value per line
pub fn write_lengths<W: Write>(out: &mut W, lengths: &[usize]) -> io::Result<()> {
    for length in lengths {
        writeln!(out, "{}", length)?;
    }
    Ok(())
}

/// Render every edge of the tree, indented by nesting level
///
/// Leaf edges are followed by the start of the suffix they complete.
pub fn write_tree<W: WriteColor>(out: &mut W, tree: &SuffixTree) -> io::Result<()> {
    let last = tree.symbols().len() - 1;
    let mut stack = Vec::new();
    push_edges(&mut stack, tree, NodeId::ROOT, 0);

    while let Some((parent_depth, edge, level)) = stack.pop() {
        write!(out, "{}", "  ".repeat(level))?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        write!(out, "{}", tree.label(edge.from, edge.to(last)))?;
        out.reset()?;

        match edge.tail {
            Some(tail) => {
                writeln!(out)?;
                push_edges(&mut stack, tree, tail, level + 1);
            }
            None => {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
                write!(out, " [{}]", edge.from - parent_depth)?;
                out.reset()?;
                writeln!(out)?;
            }
        }
    }
    Ok(())
}

/// Queue the child edges of `id` so they pop in symbol order
fn push_edges(stack: &mut Vec<(usize, Edge, usize)>, tree: &SuffixTree, id: NodeId, level: usize) {
    let node = tree.node(id);
    let first = stack.len();
    stack.extend(node.edges().map(|(_, edge)| (node.depth, *edge, level)));
    stack[first..].reverse();
}
