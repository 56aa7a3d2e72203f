//! Pattern categories.

use serde::Serialize;

/// Accent color family used to tint a category in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Accent {
    Blue,
    Purple,
    Green,
}

impl Accent {
    /// RGB triple of the accent.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Accent::Blue => (96, 165, 250),
            Accent::Purple => (192, 132, 252),
            Accent::Green => (74, 222, 128),
        }
    }
}

/// The three classic families of design patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Category {
    Creational,
    Structural,
    Behavioral,
}

impl Category {
    /// All categories in sidebar order.
    pub const ALL: [Category; 3] = [
        Category::Creational,
        Category::Structural,
        Category::Behavioral,
    ];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Creational => "Creational",
            Category::Structural => "Structural",
            Category::Behavioral => "Behavioral",
        }
    }

    /// Accent color of the category.
    pub fn accent(&self) -> Accent {
        match self {
            Category::Creational => Accent::Blue,
            Category::Structural => Accent::Purple,
            Category::Behavioral => Accent::Green,
        }
    }

    /// Position in [`Category::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Category::Creational => 0,
            Category::Structural => 1,
            Category::Behavioral => 2,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
