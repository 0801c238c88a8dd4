//! Tutorial steps, step navigation and video asset naming.

use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TutorialStep {
    pub step: usize,
    pub title: &'static str,
    pub description: &'static str,
}

pub const TUTORIAL_STEPS: [TutorialStep; 4] = [
    TutorialStep {
        step: 1,
        title: "Introduction",
        description: "Get started with an overview of the documentation and key concepts",
    },
    TutorialStep {
        step: 2,
        title: "Core Concepts",
        description: "Deep dive into the fundamental principles and architecture",
    },
    TutorialStep {
        step: 3,
        title: "Interactive Learning",
        description: "Practice with hands-on examples and real-world scenarios",
    },
    TutorialStep {
        step: 4,
        title: "Knowledge Check",
        description: "Test your understanding with interactive quizzes",
    },
];

/// Narration language of the avatar videos
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Ger,
}

impl Language {
    /// Code used in asset file names and the config file
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ger => "ger",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Ger => "DE",
        }
    }

    pub fn from_code(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "en" => Some(Language::En),
            "ger" | "de" => Some(Language::Ger),
            _ => None,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Language::En => Language::Ger,
            Language::Ger => Language::En,
        }
    }
}

/// Position within [`TUTORIAL_STEPS`], 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TutorialProgress {
    current: usize,
}

impl Default for TutorialProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl TutorialProgress {
    pub fn new() -> Self {
        Self { current: 1 }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn step(&self) -> &'static TutorialStep {
        &TUTORIAL_STEPS[self.current - 1]
    }

    pub fn total(&self) -> usize {
        TUTORIAL_STEPS.len()
    }

    pub fn is_first(&self) -> bool {
        self.current == 1
    }

    pub fn is_last(&self) -> bool {
        self.current == TUTORIAL_STEPS.len()
    }

    /// Returns false when already on the last step
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Returns false when already on the first step
    pub fn previous(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.current -= 1;
        true
    }

    pub fn percent(&self) -> u16 {
        (self.current * 100 / TUTORIAL_STEPS.len()) as u16
    }
}

pub fn demo_video(step: usize) -> String {
    format!("demo-gumloop-{}.mp4", step)
}

pub fn avatar_video(language: Language, step: usize) -> String {
    format!("{}-avatar-gumloop-{}.mp4", language.code(), step)
}

/// Static video files for one step, resolved against an assets directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepAssets {
    pub demo: PathBuf,
    pub avatar: PathBuf,
}

impl StepAssets {
    pub fn resolve(assets_dir: &Path, language: Language, step: usize) -> Self {
        Self {
            demo: assets_dir.join(demo_video(step)),
            avatar: assets_dir.join(avatar_video(language, step)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_are_numbered_in_order() {
        for (i, step) in TUTORIAL_STEPS.iter().enumerate() {
            assert_eq!(step.step, i + 1);
        }
    }

    #[test]
    fn test_next_clamps_at_last_step() {
        let mut progress = TutorialProgress::new();
        assert!(progress.is_first());
        assert!(progress.next());
        assert!(progress.next());
        assert!(progress.next());
        assert!(progress.is_last());
        assert!(!progress.next());
        assert_eq!(progress.current(), 4);
        assert_eq!(progress.step().title, "Knowledge Check");
    }

    #[test]
    fn test_previous_clamps_at_first_step() {
        let mut progress = TutorialProgress::new();
        assert!(!progress.previous());
        assert_eq!(progress.current(), 1);
        progress.next();
        assert!(progress.previous());
        assert_eq!(progress.step().title, "Introduction");
    }

    #[test]
    fn test_percent() {
        let mut progress = TutorialProgress::new();
        assert_eq!(progress.percent(), 25);
        progress.next();
        progress.next();
        progress.next();
        assert_eq!(progress.percent(), 100);
    }

    #[test]
    fn test_asset_names() {
        assert_eq!(demo_video(2), "demo-gumloop-2.mp4");
        assert_eq!(avatar_video(Language::En, 1), "en-avatar-gumloop-1.mp4");
        assert_eq!(avatar_video(Language::Ger, 3), "ger-avatar-gumloop-3.mp4");
    }

    #[test]
    fn test_assets_resolve_against_dir() {
        let assets = StepAssets::resolve(Path::new("public"), Language::Ger, 4);
        assert_eq!(assets.demo, Path::new("public/demo-gumloop-4.mp4"));
        assert_eq!(assets.avatar, Path::new("public/ger-avatar-gumloop-4.mp4"));
    }

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::from_code("EN"), Some(Language::En));
        assert_eq!(Language::from_code("de"), Some(Language::Ger));
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::En.toggle(), Language::Ger);
        assert_eq!(Language::Ger.display_name(), "DE");
    }
}
