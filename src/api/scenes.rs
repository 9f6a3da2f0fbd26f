use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SceneKind {
    /// Narrates a predetermined year range; immune to toggle and range controls.
    Fixed,
    /// The single free-form step with viewer-controlled range and chart kind.
    Explore,
}

/// One step of the narrative deck, defined once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub id: String,
    pub start_year: i32,
    pub end_year: i32,
    pub kind: SceneKind,
    pub description: String,
}

impl Scene {
    #[must_use]
    pub fn fixed(id: impl Into<String>, start_year: i32, end_year: i32) -> Self {
        Self {
            id: id.into(),
            start_year,
            end_year,
            kind: SceneKind::Fixed,
            description: String::new(),
        }
    }

    #[must_use]
    pub fn explore(id: impl Into<String>, start_year: i32, end_year: i32) -> Self {
        Self {
            kind: SceneKind::Explore,
            ..Self::fixed(id, start_year, end_year)
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// The reference deck: four narrated ranges, then free exploration.
#[must_use]
pub fn default_scenes() -> Vec<Scene> {
    vec![
        Scene::fixed("scene-0", 1927, 2020)
            .with_description("Nearly a century of daily closing prices, 1927 to 2020."),
        Scene::fixed("scene-1", 1927, 1945).with_description(
            "The 1929 crash, the Great Depression, and World War II, 1927 to 1945.",
        ),
        Scene::fixed("scene-2", 1946, 1999).with_description(
            "The postwar expansion through the late-1990s bull market, 1946 to 1999.",
        ),
        Scene::fixed("scene-3", 2000, 2020)
            .with_description("Two crashes and two recoveries, 2000 to 2020."),
        Scene::explore("scene-4", 1927, 2020),
    ]
}
