/// A titled help entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpTopic {
    /// Short heading.
    pub title: &'static str,
    /// Body text.
    pub body: &'static str,
}

/// A question with its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QaPair {
    /// The question.
    pub question: &'static str,
    /// The answer.
    pub answer: &'static str,
}

/// Help shown in the "Game Help" overlay.
pub const HELP_TOPICS: [HelpTopic; 4] = [
    HelpTopic {
        title: "Navigation",
        body: "Click on choices to progress through the story. Your decisions matter!",
    },
    HelpTopic {
        title: "Progress",
        body: "Your journey stats and history are tracked on the right panel.",
    },
    HelpTopic {
        title: "Returning",
        body: "Most locations allow you to return to previous areas.",
    },
    HelpTopic {
        title: "Endings",
        body: "There are three unique endings to discover. Choose wisely!",
    },
];

/// Questions shown in the "Questions & Answers" overlay.
pub const QA_PAIRS: [QaPair; 4] = [
    QaPair {
        question: "What's the best strategy for this game?",
        answer: "Explore all paths! Each ending offers a unique experience.",
    },
    QaPair {
        question: "Can I go back to previous choices?",
        answer: "Yes, most scenes allow you to return to previous locations.",
    },
    QaPair {
        question: "How many endings are there?",
        answer: "There are three unique endings to discover!",
    },
    QaPair {
        question: "What's the goal of the game?",
        answer: "The goal is to explore and find the ending that resonates with you most.",
    },
];
