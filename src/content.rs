//! Everything the page says and shows.

pub const FLOATING_HEARTS: [&str; 6] = ["❤️", "💕", "💖", "💗", "💝", "💓"];

pub const LOVE_EMOJI: [&str; 10] = ["💕", "💖", "💗", "💝", "💓", "💞", "💘", "❤️", "💜", "🩷"];

pub const BURST_HEARTS: [&str; 4] = ["💕", "💖", "💗", "💝"];

pub const FIREWORK_SYMBOLS: [&str; 8] = ["🎉", "🎊", "💖", "✨", "💕", "🌟", "💝", "🎆"];

pub const CONFETTI_COLORS: [&str; 6] = [
    "#ff69b4", "#ff1493", "#ff6eb4", "#ffc0cb", "#ffb6c1", "#f093fb",
];

/// Extra animation on an envelope popup; `None` keeps the plain float.
pub const POPUP_STYLES: [Option<&str>; 3] = [None, Some("bounce"), Some("sparkle")];

pub const TAP_HEART: &str = "💖";

pub const QUESTION: &str = "Will you be my Valentine? 💘";
pub const YES_LABEL: &str = "Yes! 💖";
pub const NO_LABEL: &str = "No 🙈";
pub const NO_FINAL_NUDGE: &str = "Say Yes! 💕";

pub fn love_phrases(nickname: &str) -> [String; 3] {
    [
        "I love you".to_string(),
        format!("I love you {}", nickname),
        "I love you so much".to_string(),
    ]
}

pub fn cute_messages(nickname: &str) -> [String; 6] {
    [
        "🥰 Aww so cute!".to_string(),
        format!("💖 Love you {}!", nickname),
        "✨ You are special!".to_string(),
        "🌸 So sweet bubu!".to_string(),
        "💕 Beautiful!".to_string(),
        "🌈 Made with love!".to_string(),
    ]
}

pub fn yes_response(nickname: &str) -> String {
    format!("Yaaay! I knew it, {}! 🥰 You just made me the happiest person alive 💕", nickname)
}

/// One screen of the page. `id` doubles as the scroll target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub const SECTIONS: [Section; 5] = [
    Section {
        id: "welcome",
        title: "Hey you 💕",
        subtitle: "I made something just for you. Tap anywhere.",
    },
    Section {
        id: "reasons",
        title: "Reasons I love you",
        subtitle: "Tap a card to flip it",
    },
    Section {
        id: "letters",
        title: "Little letters",
        subtitle: "Open them one by one",
    },
    Section {
        id: "song",
        title: "Our song 🎶",
        subtitle: "Press play and think of me",
    },
    Section {
        id: "question",
        title: "One last thing…",
        subtitle: "",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reason {
    pub front: &'static str,
    pub back: &'static str,
}

pub const REASONS: [Reason; 6] = [
    Reason {
        front: "😊",
        back: "Your smile fixes my worst days",
    },
    Reason {
        front: "🤗",
        back: "Your hugs feel like home",
    },
    Reason {
        front: "😂",
        back: "You laugh at my terrible jokes",
    },
    Reason {
        front: "🌙",
        back: "Late night talks with you are my favourite",
    },
    Reason {
        front: "💪",
        back: "You believe in me more than I do",
    },
    Reason {
        front: "🍫",
        back: "You always share your chocolate (mostly)",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Letter {
    pub label: &'static str,
    pub body: String,
}

pub fn letters(nickname: &str) -> Vec<Letter> {
    vec![
        Letter {
            label: "Open when you miss me",
            body: format!("Close your eyes, {}. I'm thinking of you right now. 💭", nickname),
        },
        Letter {
            label: "Open when you're sad",
            body: "You are stronger than you know, and you never face anything alone. 🌷".to_string(),
        },
        Letter {
            label: "Open when you can't sleep",
            body: "Count the stars, then count the reasons I love you. The second list is longer. ✨".to_string(),
        },
    ]
}
