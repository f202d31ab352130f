use super::suffix_tree::SuffixTree;
use serde::Serialize;

/// Structural statistics about a finished tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeStats {
    /// Indexed characters (terminator excluded)
    pub text_len: usize,
    /// Alphabet characters (terminator excluded)
    pub alphabet_size: usize,
    /// Root plus internal nodes
    pub node_count: usize,
    pub internal_nodes: usize,
    /// One per suffix of the terminated text
    pub leaf_count: usize,
    pub edge_count: usize,
    /// Deepest internal node: length of the longest repeated substring
    pub max_depth: usize,
    /// Approximate heap usage of the arena and text
    pub memory_bytes: usize,
}

impl SuffixTree {
    /// Get statistics about this tree
    pub fn stats(&self) -> TreeStats {
        let mut edge_count = 0;
        let mut leaf_count = 0;
        let mut max_depth = 0;
        let mut child_slots = 0;

        for node in self.nodes() {
            max_depth = max_depth.max(node.depth);
            child_slots += self.alphabet().symbol_count();
            for (_, edge) in node.edges() {
                edge_count += 1;
                if edge.is_leaf() {
                    leaf_count += 1;
                }
            }
        }

        let memory_bytes = self.nodes().len() * std::mem::size_of::<super::types::Node>()
            + child_slots * std::mem::size_of::<Option<super::types::Edge>>()
            + self.symbols().len();

        TreeStats {
            text_len: self.len(),
            alphabet_size: self.alphabet().size as usize,
            node_count: self.nodes().len(),
            internal_nodes: self.nodes().len() - 1,
            leaf_count,
            edge_count,
            max_depth,
            memory_bytes,
        }
    }
}

/// Print statistics in human readable form
pub fn show_stats(stats: &TreeStats) {
    println!("Suffix Tree Statistics");
    println!("======================");
    println!();
    println!("Text length:      {}", stats.text_len);
    println!("Alphabet size:    {} (+1 terminator)", stats.alphabet_size);
    println!("Nodes:            {}", stats.node_count);
    println!("Internal nodes:   {}", stats.internal_nodes);
    println!("Leaves:           {}", stats.leaf_count);
    println!("Edges:            {}", stats.edge_count);
    println!("Max repeat:       {}", stats.max_depth);
    println!();
    println!("Memory (approx):  {}", format_size(stats.memory_bytes as u64));
}

/// Format byte size to human readable
fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}
