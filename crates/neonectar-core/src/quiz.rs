//! Knowledge check at the end of the tutorial.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizQuestion {
    pub question: &'static str,
    pub options: [&'static str; 4],
    pub correct_answer: usize,
    pub explanation: &'static str,
}

pub const QUIZ_QUESTIONS: [QuizQuestion; 5] = [
    QuizQuestion {
        question: "What is the recommended way to handle sensitive user data in Gumloop?",
        options: [
            "Store it directly in local storage for quick access",
            "Encrypt all sensitive data and use secure transmission protocols",
            "Keep it in plain text format for easy debugging",
            "Share it across all user sessions for convenience",
        ],
        correct_answer: 1,
        explanation: "Always encrypt sensitive data and use secure protocols like HTTPS for transmission \
                      to protect user information.",
    },
    QuizQuestion {
        question: "Which practice should be followed when implementing API authentication in Gumloop?",
        options: [
            "Use API keys directly in frontend code",
            "Store authentication tokens in URL parameters",
            "Implement JWT tokens with proper expiration and refresh mechanisms",
            "Share authentication credentials between users",
        ],
        correct_answer: 2,
        explanation: "JWT tokens with proper expiration and refresh mechanisms provide secure \
                      authentication while maintaining user sessions safely.",
    },
    QuizQuestion {
        question: "How should you handle error messages in Gumloop to maintain security?",
        options: [
            "Display detailed error stack traces to users",
            "Show generic error messages to users while logging details securely",
            "Ignore all errors to prevent security breaches",
            "Send all error details to the client console",
        ],
        correct_answer: 1,
        explanation: "Generic error messages prevent exposing sensitive system information while \
                      maintaining proper error tracking internally.",
    },
    QuizQuestion {
        question: "What is the best practice for managing user permissions in Gumloop?",
        options: [
            "Give all users admin access for simplicity",
            "Implement role-based access control (RBAC) with principle of least privilege",
            "Store permissions in client-side cookies",
            "Allow users to modify their own permission levels",
        ],
        correct_answer: 1,
        explanation: "RBAC with least privilege ensures users only have access to the resources they \
                      need for their role.",
    },
    QuizQuestion {
        question: "Which approach should be used for handling file uploads in Gumloop?",
        options: [
            "Accept all file types without validation",
            "Store files directly in the database as raw data",
            "Validate file types, scan for malware, and store in secure cloud storage",
            "Allow unlimited file sizes for user convenience",
        ],
        correct_answer: 2,
        explanation: "Proper file validation, malware scanning, and secure storage prevent security \
                      vulnerabilities and ensure safe file handling.",
    },
];

pub const PERFECT_SCORE_MESSAGE: &str = "Perfect score! You're well-versed in Gumloop security practices!";
pub const REVIEW_MESSAGE: &str =
    "Review the questions you missed to better understand Gumloop security best practices.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizState {
    current: usize,
    selected: Option<usize>,
    score: usize,
    completed: bool,
}

impl QuizState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn question(&self) -> &'static QuizQuestion {
        &QUIZ_QUESTIONS[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        QUIZ_QUESTIONS.len()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// The explanation is revealed once an answer is picked
    pub fn show_explanation(&self) -> bool {
        self.selected.is_some()
    }

    /// Record an answer for the current question. Only the first pick counts.
    pub fn select(&mut self, answer: usize) -> bool {
        if self.completed || self.selected.is_some() || answer >= self.question().options.len() {
            return false;
        }
        self.selected = Some(answer);
        if answer == self.question().correct_answer {
            self.score += 1;
        }
        true
    }

    /// Move to the next question, or finish after the last one.
    pub fn next(&mut self) {
        if self.selected.is_none() || self.completed {
            return;
        }
        if self.current + 1 < QUIZ_QUESTIONS.len() {
            self.current += 1;
            self.selected = None;
        } else {
            self.completed = true;
        }
    }

    pub fn restart(&mut self) {
        *self = Self::new();
    }

    pub fn progress_percent(&self) -> u16 {
        ((self.current + 1) * 100 / QUIZ_QUESTIONS.len()) as u16
    }

    pub fn completion_message(&self) -> &'static str {
        if self.score == QUIZ_QUESTIONS.len() {
            PERFECT_SCORE_MESSAGE
        } else {
            REVIEW_MESSAGE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer_all(quiz: &mut QuizState, pick: impl Fn(&QuizQuestion) -> usize) {
        while !quiz.is_completed() {
            let answer = pick(quiz.question());
            quiz.select(answer);
            quiz.next();
        }
    }

    #[test]
    fn test_questions_are_well_formed() {
        for q in &QUIZ_QUESTIONS {
            assert!(q.correct_answer < q.options.len());
            assert!(!q.explanation.is_empty());
        }
    }

    #[test]
    fn test_perfect_score() {
        let mut quiz = QuizState::new();
        answer_all(&mut quiz, |q| q.correct_answer);
        assert_eq!(quiz.score(), 5);
        assert_eq!(quiz.completion_message(), PERFECT_SCORE_MESSAGE);
    }

    #[test]
    fn test_wrong_answers_do_not_score() {
        let mut quiz = QuizState::new();
        answer_all(&mut quiz, |q| (q.correct_answer + 1) % 4);
        assert_eq!(quiz.score(), 0);
        assert_eq!(quiz.completion_message(), REVIEW_MESSAGE);
    }

    #[test]
    fn test_only_first_selection_counts() {
        let mut quiz = QuizState::new();
        assert!(quiz.select(0));
        assert!(!quiz.select(1));
        assert_eq!(quiz.selected(), Some(0));
        assert_eq!(quiz.score(), 0);
        assert!(quiz.show_explanation());
    }

    #[test]
    fn test_next_requires_an_answer() {
        let mut quiz = QuizState::new();
        quiz.next();
        assert_eq!(quiz.current_index(), 0);
        quiz.select(1);
        quiz.next();
        assert_eq!(quiz.current_index(), 1);
        assert!(!quiz.show_explanation());
    }

    #[test]
    fn test_out_of_range_answer_ignored() {
        let mut quiz = QuizState::new();
        assert!(!quiz.select(9));
        assert_eq!(quiz.selected(), None);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut quiz = QuizState::new();
        answer_all(&mut quiz, |q| q.correct_answer);
        quiz.restart();
        assert_eq!(quiz, QuizState::new());
        assert_eq!(quiz.progress_percent(), 20);
    }
}
