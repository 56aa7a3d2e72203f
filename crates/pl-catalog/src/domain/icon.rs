//! Symbolic icons attached to catalog entries.

use serde::Serialize;

/// Symbolic icon reference of a pattern.
///
/// The names follow a common line-icon set so that a graphical front end can
/// map them directly; the terminal front end uses [`Icon::glyph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Icon {
    Database,
    Box,
    Grid,
    Layers,
    Copy,
    Puzzle,
    Anchor,
    Network,
    Shield,
    LayoutTemplate,
    Package,
    ShieldCheck,
    List,
    Terminal,
    ArrowRight,
    Users,
    History,
    Activity,
    Wifi,
    GitBranch,
    FileText,
    ExternalLink,
}

impl Icon {
    /// Symbolic name.
    pub fn name(&self) -> &'static str {
        match self {
            Icon::Database => "Database",
            Icon::Box => "Box",
            Icon::Grid => "Grid",
            Icon::Layers => "Layers",
            Icon::Copy => "Copy",
            Icon::Puzzle => "Puzzle",
            Icon::Anchor => "Anchor",
            Icon::Network => "Network",
            Icon::Shield => "Shield",
            Icon::LayoutTemplate => "LayoutTemplate",
            Icon::Package => "Package",
            Icon::ShieldCheck => "ShieldCheck",
            Icon::List => "List",
            Icon::Terminal => "Terminal",
            Icon::ArrowRight => "ArrowRight",
            Icon::Users => "Users",
            Icon::History => "History",
            Icon::Activity => "Activity",
            Icon::Wifi => "Wifi",
            Icon::GitBranch => "GitBranch",
            Icon::FileText => "FileText",
            Icon::ExternalLink => "ExternalLink",
        }
    }

    /// Single-cell terminal glyph.
    pub fn glyph(&self) -> char {
        match self {
            Icon::Database => '⛁',
            Icon::Box => '▣',
            Icon::Grid => '▦',
            Icon::Layers => '☰',
            Icon::Copy => '⧉',
            Icon::Puzzle => '✣',
            Icon::Anchor => '⊥',
            Icon::Network => '⋔',
            Icon::Shield => '◈',
            Icon::LayoutTemplate => '▤',
            Icon::Package => '◰',
            Icon::ShieldCheck => '✓',
            Icon::List => '≣',
            Icon::Terminal => '›',
            Icon::ArrowRight => '→',
            Icon::Users => '⁂',
            Icon::History => '↺',
            Icon::Activity => '∿',
            Icon::Wifi => '≋',
            Icon::GitBranch => '⑂',
            Icon::FileText => '¶',
            Icon::ExternalLink => '↗',
        }
    }
}
