use serde::Serialize;

/// One intensity bucket of the heatmap legend.
/// `max = None` means unbounded.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ContributionLevel {
    pub min: u32,
    pub max: Option<u32>,
    /// CSS class the frontend maps to a theme colour.
    pub color: &'static str,
    pub label: &'static str,
}

impl ContributionLevel {
    pub fn contains(&self, count: u32) -> bool {
        count >= self.min && self.max.map_or(true, |max| count <= max)
    }
}

pub const CONTRIBUTION_LEVELS: &[ContributionLevel] = &[
    ContributionLevel {
        min: 0,
        max: Some(0),
        color: "heatmap-level-0",
        label: "No contributions",
    },
    ContributionLevel {
        min: 1,
        max: Some(1),
        color: "heatmap-level-1",
        label: "Light",
    },
    ContributionLevel {
        min: 2,
        max: Some(3),
        color: "heatmap-level-2",
        label: "Moderate",
    },
    ContributionLevel {
        min: 4,
        max: Some(6),
        color: "heatmap-level-3",
        label: "Active",
    },
    ContributionLevel {
        min: 7,
        max: None,
        color: "heatmap-level-4",
        label: "Very active",
    },
];

pub fn level_for(count: u32) -> &'static ContributionLevel {
    CONTRIBUTION_LEVELS
        .iter()
        .find(|level| level.contains(count))
        .unwrap_or(&CONTRIBUTION_LEVELS[CONTRIBUTION_LEVELS.len() - 1])
}
