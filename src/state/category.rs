use serde::{Deserialize, Serialize};

/// Number of counted categories.
pub const CATEGORY_COUNT: usize = 4;

/// A counted road-user category.
///
/// The discriminant doubles as the counter index used in persisted state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Bike = 0,
    EBike = 1,
    Vehicle = 2,
    Pedestrian = 3,
}

impl Category {
    pub const ALL: [Category; CATEGORY_COUNT] = [
        Category::Bike,
        Category::EBike,
        Category::Vehicle,
        Category::Pedestrian,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Display label shown next to the counter.
    pub fn label(self) -> &'static str {
        match self {
            Category::Bike => "Bike",
            Category::EBike => "E-bike",
            Category::Vehicle => "Vehicle",
            Category::Pedestrian => "Pedestrian",
        }
    }
}
