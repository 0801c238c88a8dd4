//! Processing animation schedule.
//!
//! The animation is a pure function of elapsed time; the UI polls it on each
//! tick instead of scheduling its own frames.

use std::time::Duration;

pub struct LoadingStep {
    pub message: &'static str,
    pub target_progress: u8,
}

pub const LOADING_STEPS: [LoadingStep; 4] = [
    LoadingStep {
        message: "Analyzing documentation...",
        target_progress: 25,
    },
    LoadingStep {
        message: "Creating personalized tutorial...",
        target_progress: 50,
    },
    LoadingStep {
        message: "Generating video content...",
        target_progress: 75,
    },
    LoadingStep {
        message: "Finalizing your experience...",
        target_progress: 100,
    },
];

/// Total length of the animation
pub const PROGRESS_DURATION: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub percent: u8,
    pub message: &'static str,
    pub done: bool,
}

/// State shown while the process call itself is still outstanding
pub fn waiting() -> Progress {
    Progress {
        percent: 0,
        message: LOADING_STEPS[0].message,
        done: false,
    }
}

pub fn progress(elapsed: Duration) -> Progress {
    let total = PROGRESS_DURATION.as_secs_f64();
    let ratio = (elapsed.as_secs_f64() / total).min(1.0);
    let percent = (ratio * 100.0).round() as u8;

    let step_len = total / LOADING_STEPS.len() as f64;
    let index = ((elapsed.as_secs_f64() / step_len).floor() as usize).min(LOADING_STEPS.len() - 1);

    Progress {
        percent,
        message: LOADING_STEPS[index].message,
        done: ratio >= 1.0,
    }
}
