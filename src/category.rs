// Category classifier - Guess a desktop-entry category path from a package description

/// Category used when nothing else applies
pub const DEFAULT_CATEGORY: &str = "Application";

/// Characters trimmed from both ends of every description word
const TRIMMED_PUNCTUATION: &[char] = &[
    '.', ',', ';', ':', '!', '?', '(', ')', '[', ']', '{', '}', '"', '\'',
];

/// One classification rule: any keyword present selects the category
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    pub keywords: &'static [&'static str],
    pub category: &'static str,
}

/// Rules in priority order, first match wins. Specific game genres come before
/// the generic game bucket; emulator and player sit in that bucket so other
/// rules get first refusal.
pub const RULES: &[CategoryRule] = &[
    CategoryRule {
        keywords: &["video", "audio", "sound", "graphics", "draw", "demo"],
        category: "Application;Multimedia",
    },
    CategoryRule {
        keywords: &["network", "p2p"],
        category: "Application;Network",
    },
    CategoryRule {
        keywords: &["synth", "synthesizer"],
        category: "Application;AudioVideo",
    },
    CategoryRule {
        keywords: &["editor"],
        category: "Application;Development;TextEditor",
    },
    CategoryRule {
        keywords: &["gps", "inspecting"],
        category: "Application;Science",
    },
    CategoryRule {
        keywords: &["git"],
        category: "Application;Development;RevisionControl",
    },
    CategoryRule {
        keywords: &["combat", "arcade", "racing", "fighting", "fight"],
        category: "Application;Game;ArcadeGame",
    },
    CategoryRule {
        keywords: &["shooter", "fps"],
        category: "Application;Game;ActionGame",
    },
    CategoryRule {
        keywords: &["roguelike", "rpg"],
        category: "Application;Game;AdventureGame",
    },
    CategoryRule {
        keywords: &["game", "rts", "mmorpg", "emulator", "player"],
        category: "Application;Game",
    },
    CategoryRule {
        keywords: &["code", "c", "ide", "programming", "develop", "compile"],
        category: "Application;Development",
    },
];

/// Lower-cased whole words of a description, punctuation stripped from their ends
fn words(description: &str) -> Vec<String> {
    description
        .to_lowercase()
        .split(' ')
        .map(|word| word.trim_matches(TRIMMED_PUNCTUATION).to_string())
        .filter(|word| !word.is_empty())
        .collect()
}

impl CategoryRule {
    pub fn matches(&self, words: &[String]) -> bool {
        self.keywords
            .iter()
            .any(|keyword| words.iter().any(|word| word == keyword))
    }
}

/// Category path for a description, or `None` when no rule matches
pub fn classify(description: &str) -> Option<&'static str> {
    let words = words(description);
    RULES
        .iter()
        .find(|rule| rule.matches(&words))
        .map(|rule| rule.category)
}
