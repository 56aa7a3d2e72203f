//! Composite: files and folders answering `size()` uniformly.

use std::collections::BTreeMap;
use std::time::Instant;

use crate::demos::Demo;
use crate::domain::{Control, DemoInput, InputOutcome};

const CONTROLS: &[Control] = &[
    Control::new("r", "Toggle Root"),
    Control::new("m", "Toggle Music"),
];

/// A node of the file tree: a leaf file or a composite folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsNode {
    File {
        name: &'static str,
        size_mb: u32,
    },
    Folder {
        key: &'static str,
        name: &'static str,
        children: Vec<FsNode>,
    },
}

impl FsNode {
    /// Size in MB; folders sum their children recursively.
    pub fn size_mb(&self) -> u32 {
        match self {
            FsNode::File { size_mb, .. } => *size_mb,
            FsNode::Folder { children, .. } => children.iter().map(FsNode::size_mb).sum(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FsNode::File { name, .. } | FsNode::Folder { name, .. } => name,
        }
    }

    fn sample_tree() -> Self {
        FsNode::Folder {
            key: "root",
            name: "Root",
            children: vec![
                FsNode::File {
                    name: "resume.pdf",
                    size_mb: 2,
                },
                FsNode::Folder {
                    key: "music",
                    name: "Music",
                    children: vec![
                        FsNode::File {
                            name: "track1.mp3",
                            size_mb: 10,
                        },
                        FsNode::File {
                            name: "mix.wav",
                            size_mb: 438,
                        },
                    ],
                },
            ],
        }
    }
}

/// A visible line of the explorer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow {
    pub depth: usize,
    pub name: &'static str,
    pub size_mb: u32,
    /// `Some(expanded)` for folders.
    pub folder: Option<bool>,
}

impl TreeRow {
    pub fn label(&self) -> String {
        format!("{} ({}MB)", self.name, self.size_mb)
    }
}

#[derive(Debug)]
pub struct CompositeDemo {
    root: FsNode,
    expanded: BTreeMap<&'static str, bool>,
}

impl Default for CompositeDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl CompositeDemo {
    pub fn new() -> Self {
        Self {
            root: FsNode::sample_tree(),
            expanded: BTreeMap::from([("root", true), ("music", true)]),
        }
    }

    pub fn toggle(&mut self, key: &'static str) {
        let flag = self.expanded.entry(key).or_insert(false);
        *flag = !*flag;
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded.get(key).copied().unwrap_or(false)
    }

    pub fn total_mb(&self) -> u32 {
        self.root.size_mb()
    }

    /// Rows currently visible, depth first.
    pub fn rows(&self) -> Vec<TreeRow> {
        let mut rows = Vec::new();
        self.collect_rows(&self.root, 0, &mut rows);
        rows
    }

    fn collect_rows(&self, node: &FsNode, depth: usize, rows: &mut Vec<TreeRow>) {
        match node {
            FsNode::File { name, size_mb } => rows.push(TreeRow {
                depth,
                name,
                size_mb: *size_mb,
                folder: None,
            }),
            FsNode::Folder { key, name, children } => {
                let expanded = self.is_expanded(key);
                rows.push(TreeRow {
                    depth,
                    name,
                    size_mb: node.size_mb(),
                    folder: Some(expanded),
                });
                if expanded {
                    for child in children {
                        self.collect_rows(child, depth + 1, rows);
                    }
                }
            }
        }
    }
}

impl Demo for CompositeDemo {
    fn handle(&mut self, input: DemoInput, _now: Instant) -> InputOutcome {
        match input {
            DemoInput::Key('r') => self.toggle("root"),
            DemoInput::Key('m') => self.toggle("music"),
            _ => return InputOutcome::Ignored,
        }
        InputOutcome::Consumed
    }

    fn controls(&self) -> &'static [Control] {
        CONTROLS
    }

    fn hint(&self) -> &'static str {
        "Folders & Files treated uniformly"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(demo: &CompositeDemo) -> Vec<String> {
        demo.rows().iter().map(TreeRow::label).collect()
    }

    #[test]
    fn test_sizes_roll_up() {
        let demo = CompositeDemo::new();
        assert_eq!(demo.total_mb(), 450);
        assert_eq!(
            labels(&demo),
            vec![
                "Root (450MB)",
                "resume.pdf (2MB)",
                "Music (448MB)",
                "track1.mp3 (10MB)",
                "mix.wav (438MB)",
            ]
        );
    }

    #[test]
    fn test_collapsing_hides_children_not_size() {
        let mut demo = CompositeDemo::new();
        demo.handle(DemoInput::Key('m'), Instant::now());
        assert_eq!(labels(&demo), vec!["Root (450MB)", "resume.pdf (2MB)", "Music (448MB)"]);

        demo.handle(DemoInput::Key('r'), Instant::now());
        assert_eq!(labels(&demo), vec!["Root (450MB)"]);
        assert_eq!(demo.total_mb(), 450);
    }

    #[test]
    fn test_expansion_flags_survive_parent_collapse() {
        let mut demo = CompositeDemo::new();
        demo.toggle("music");
        demo.toggle("root");
        demo.toggle("root");
        assert!(!demo.is_expanded("music"));
        assert_eq!(demo.rows().len(), 3);
    }
}
