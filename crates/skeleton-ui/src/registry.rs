use std::fmt;
use std::str::FromStr;

use dioxus::prelude::*;

use crate::components::{
    AchievementCardSkeleton, CardSkeleton, ChartSkeleton, PageSkeleton, ProfileHeaderSkeleton,
    QuestCardSkeleton, StatCardSkeleton, TaskCardSkeleton,
};

/// Every zero-prop skeleton, addressable by a stable key.
///
/// Keys match the `data-skeleton` attribute each skeleton renders on its root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SkeletonKind {
    #[default]
    Card,
    TaskCard,
    StatCard,
    AchievementCard,
    QuestCard,
    ProfileHeader,
    Chart,
    /// Header, stat tiles and a card list together.
    Page,
}

/// All skeleton kinds in display order.
pub const ALL_KINDS: &[SkeletonKind] = &[
    SkeletonKind::Card,
    SkeletonKind::TaskCard,
    SkeletonKind::StatCard,
    SkeletonKind::AchievementCard,
    SkeletonKind::QuestCard,
    SkeletonKind::ProfileHeader,
    SkeletonKind::Chart,
    SkeletonKind::Page,
];

impl SkeletonKind {
    /// Stable key used for lookups and the `data-skeleton` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            SkeletonKind::Card => "card",
            SkeletonKind::TaskCard => "task-card",
            SkeletonKind::StatCard => "stat-card",
            SkeletonKind::AchievementCard => "achievement-card",
            SkeletonKind::QuestCard => "quest-card",
            SkeletonKind::ProfileHeader => "profile-header",
            SkeletonKind::Chart => "chart",
            SkeletonKind::Page => "page",
        }
    }

    /// Human-readable name for display in UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            SkeletonKind::Card => "Card",
            SkeletonKind::TaskCard => "Task card",
            SkeletonKind::StatCard => "Stat card",
            SkeletonKind::AchievementCard => "Achievement card",
            SkeletonKind::QuestCard => "Quest card",
            SkeletonKind::ProfileHeader => "Profile header",
            SkeletonKind::Chart => "Chart",
            SkeletonKind::Page => "Page",
        }
    }

    /// Parse a key string, falling back to `Card`.
    pub fn from_key(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    /// The component that renders this kind.
    pub fn component(&self) -> fn() -> Element {
        match self {
            SkeletonKind::Card => CardSkeleton,
            SkeletonKind::TaskCard => TaskCardSkeleton,
            SkeletonKind::StatCard => StatCardSkeleton,
            SkeletonKind::AchievementCard => AchievementCardSkeleton,
            SkeletonKind::QuestCard => QuestCardSkeleton,
            SkeletonKind::ProfileHeader => ProfileHeaderSkeleton,
            SkeletonKind::Chart => ChartSkeleton,
            SkeletonKind::Page => PageSkeleton,
        }
    }
}

impl fmt::Display for SkeletonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A key that names no registered skeleton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSkeleton(pub String);

impl fmt::Display for UnknownSkeleton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown skeleton kind: {:?}", self.0)
    }
}

impl std::error::Error for UnknownSkeleton {}

impl FromStr for SkeletonKind {
    type Err = UnknownSkeleton;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_KINDS
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownSkeleton(s.to_string()))
    }
}
