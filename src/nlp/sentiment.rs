//! Rule-based compound sentiment for social-media text
//!
//! Word valences come from a lexicon on a -4..4 scale and are adjusted by
//! booster words, negation, ALL-CAPS emphasis, a contrastive "but", and
//! trailing punctuation before being squashed into [-1, 1].

use super::{is_all_caps, strip_punctuation, SentimentScorer};
use std::collections::{HashMap, HashSet};

/// Normalization constant of the compound score
const ALPHA: f64 = 15.0;
/// Booster increment / decrement
const B_INCR: f64 = 0.293;
const B_DECR: f64 = -0.293;
/// Emphasis added to an ALL-CAPS word in mixed-case text
const C_INCR: f64 = 0.733;
/// Valence multiplier for a negated word
const N_SCALAR: f64 = -0.74;
/// Per-'!' emphasis, counted up to four marks
const EXCLAIM_INCR: f64 = 0.292;

/// Lexicon-backed sentiment scorer
#[derive(Debug, Clone)]
pub struct LexiconSentiment {
    lexicon: HashMap<String, f64>,
    boosters: HashMap<String, f64>,
    negations: HashSet<String>,
}

impl Default for LexiconSentiment {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconSentiment {
    /// Scorer with the built-in English lexicon
    pub fn new() -> Self {
        let lexicon = VALENCES
            .iter()
            .map(|(word, valence)| (word.to_string(), *valence))
            .collect();

        let boosters = INCREMENTS
            .iter()
            .map(|w| (w.to_string(), B_INCR))
            .chain(DECREMENTS.iter().map(|w| (w.to_string(), B_DECR)))
            .collect();

        let negations = NEGATIONS.iter().map(|w| w.to_string()).collect();

        Self {
            lexicon,
            boosters,
            negations,
        }
    }

    /// Add or override a lexicon entry (valence on the -4..4 scale)
    pub fn with_word(mut self, word: &str, valence: f64) -> Self {
        self.lexicon.insert(word.to_lowercase(), valence);
        self
    }

    fn is_negation(&self, word: &str) -> bool {
        let collapsed: String = word.chars().filter(|c| *c != '\'').collect();
        self.negations.contains(&collapsed) || word.contains("n't")
    }

    /// Booster contribution of `word` to a neighbouring valence
    fn booster_scalar(&self, word: &str, raw: &str, valence: f64, cap_diff: bool) -> f64 {
        let Some(&base) = self.boosters.get(word) else {
            return 0.0;
        };
        let mut scalar = if valence < 0.0 { -base } else { base };
        if cap_diff && is_all_caps(raw) {
            scalar += C_INCR.copysign(valence);
        }
        scalar
    }

    fn word_valence(&self, tokens: &[&str], lowered: &[String], i: usize, cap_diff: bool) -> f64 {
        let word = lowered[i].as_str();
        if self.boosters.contains_key(word) {
            return 0.0;
        }
        let Some(&base) = self.lexicon.get(word) else {
            return 0.0;
        };

        let mut valence = base;
        if cap_diff && is_all_caps(tokens[i]) {
            valence += C_INCR.copysign(valence);
        }

        for (back, damping) in [(1usize, 1.0), (2, 0.95), (3, 0.9)] {
            if i < back {
                break;
            }
            let prev = lowered[i - back].as_str();
            if self.lexicon.contains_key(prev) {
                continue;
            }
            valence += self.booster_scalar(prev, tokens[i - back], valence, cap_diff) * damping;
            if self.is_negation(prev) {
                valence *= N_SCALAR;
            }
        }

        valence
    }
}

impl SentimentScorer for LexiconSentiment {
    fn compound(&self, text: &str) -> f64 {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return 0.0;
        }
        let lowered: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();

        let caps_count = tokens.iter().filter(|t| is_all_caps(t)).count();
        let cap_diff = caps_count > 0 && caps_count < tokens.len();

        let mut valences: Vec<f64> = (0..tokens.len())
            .map(|i| self.word_valence(&tokens, &lowered, i, cap_diff))
            .collect();

        // Contrast: the clause after "but" dominates
        if let Some(but_idx) = lowered.iter().position(|w| w == "but") {
            for (i, v) in valences.iter_mut().enumerate() {
                if i < but_idx {
                    *v *= 0.5;
                } else if i > but_idx {
                    *v *= 1.5;
                }
            }
        }

        let mut sum: f64 = valences.iter().sum();
        if sum == 0.0 {
            return 0.0;
        }

        let emphasis = punctuation_emphasis(text);
        sum += emphasis.copysign(sum);

        let compound = (sum / (sum * sum + ALPHA).sqrt()).clamp(-1.0, 1.0);
        (compound * 10_000.0).round() / 10_000.0
    }
}

fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .map(|raw| {
            let stripped = strip_punctuation(raw);
            // Emoticons are all punctuation; keep them whole
            if stripped.chars().count() <= 2 {
                raw
            } else {
                stripped
            }
        })
        .filter(|t| t.chars().count() > 1)
        .collect()
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclaims = text.matches('!').count().min(4) as f64;
    let questions = text.matches('?').count();
    let question_emphasis = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * 0.18,
        _ => 0.96,
    };
    exclaims * EXCLAIM_INCR + question_emphasis
}

const INCREMENTS: &[&str] = &[
    "absolutely", "amazingly", "awfully", "completely", "considerably", "decidedly",
    "deeply", "effing", "enormously", "entirely", "especially", "exceptionally",
    "extremely", "fabulously", "flipping", "freaking", "fricking", "frickin", "fully",
    "fucking", "greatly", "hella", "highly", "hugely", "incredibly", "intensely",
    "majorly", "more", "most", "particularly", "purely", "quite", "really",
    "remarkably", "so", "substantially", "super", "thoroughly", "totally",
    "tremendously", "uber", "unbelievably", "unusually", "utterly", "very",
];

const DECREMENTS: &[&str] = &[
    "almost", "barely", "hardly", "kinda", "kindof", "less", "little", "marginally",
    "occasionally", "partly", "scarcely", "slightly", "somewhat", "sorta",
];

const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "dont",
    "hadnt", "hasnt", "havent", "isnt", "mightnt", "mustnt", "neither", "never", "none",
    "nope", "nor", "not", "nothing", "nowhere", "oughtnt", "shant", "shouldnt", "wasnt",
    "werent", "without", "wont", "wouldnt", "rarely", "seldom", "despite",
];

const VALENCES: &[(&str, f64)] = &[
    // positive
    ("agree", 1.5),
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("beautiful", 2.9),
    ("best", 3.2),
    ("better", 1.9),
    ("bless", 1.8),
    ("brilliant", 2.8),
    ("calm", 1.3),
    ("clever", 2.0),
    ("cool", 1.3),
    ("correct", 1.4),
    ("cute", 2.0),
    ("enjoy", 2.2),
    ("enjoyed", 2.3),
    ("excellent", 2.7),
    ("excited", 1.4),
    ("fair", 1.3),
    ("fantastic", 2.6),
    ("favorite", 2.0),
    ("fun", 2.3),
    ("funny", 1.9),
    ("genius", 2.4),
    ("glad", 2.0),
    ("good", 1.9),
    ("great", 3.1),
    ("haha", 2.0),
    ("hahaha", 2.6),
    ("happy", 2.7),
    ("helpful", 1.8),
    ("hilarious", 1.7),
    ("honest", 2.3),
    ("hope", 1.9),
    ("impressive", 2.3),
    ("incredible", 2.2),
    ("informative", 1.6),
    ("insightful", 1.9),
    ("interesting", 1.7),
    ("legend", 1.8),
    ("lmao", 2.0),
    ("lol", 2.9),
    ("love", 3.2),
    ("loved", 2.9),
    ("lovely", 2.8),
    ("masterpiece", 3.0),
    ("nice", 1.8),
    ("perfect", 2.7),
    ("perfectly", 3.2),
    ("pleasant", 2.3),
    ("proud", 2.1),
    ("respect", 2.1),
    ("right", 0.8),
    ("smart", 1.7),
    ("solid", 1.2),
    ("success", 2.7),
    ("support", 1.7),
    ("sweet", 2.0),
    ("thank", 1.5),
    ("thanks", 1.9),
    ("true", 1.3),
    ("useful", 1.9),
    ("win", 2.8),
    ("wonderful", 2.7),
    ("wow", 2.8),
    ("yay", 2.4),
    (":)", 2.0),
    (":-)", 2.2),
    (":d", 2.3),
    ("<3", 1.9),
    // negative
    ("angry", -2.3),
    ("annoying", -1.7),
    ("awful", -2.0),
    ("bad", -2.5),
    ("biased", -1.1),
    ("boring", -1.3),
    ("broken", -2.1),
    ("bullshit", -2.8),
    ("confused", -1.3),
    ("confusing", -0.9),
    ("crap", -1.6),
    ("cringe", -1.9),
    ("damn", -1.7),
    ("dead", -3.3),
    ("die", -2.9),
    ("disappointed", -1.9),
    ("disappointing", -2.2),
    ("disgusting", -2.4),
    ("dumb", -2.3),
    ("evil", -3.4),
    ("fail", -2.5),
    ("failed", -2.3),
    ("fake", -2.1),
    ("false", -0.4),
    ("fraud", -2.8),
    ("garbage", -2.1),
    ("hate", -2.7),
    ("hated", -3.2),
    ("horrible", -2.5),
    ("idiot", -2.3),
    ("idiots", -2.6),
    ("ignorant", -1.6),
    ("kill", -3.7),
    ("liar", -2.9),
    ("lie", -1.6),
    ("lies", -1.8),
    ("lying", -2.4),
    ("mess", -1.5),
    ("misleading", -1.7),
    ("nonsense", -1.7),
    ("pathetic", -2.2),
    ("poor", -2.1),
    ("problem", -1.7),
    ("propaganda", -1.0),
    ("racist", -3.1),
    ("ridiculous", -1.5),
    ("sad", -2.1),
    ("scam", -2.4),
    ("scary", -2.2),
    ("shame", -2.1),
    ("shit", -2.6),
    ("sick", -2.3),
    ("stupid", -2.4),
    ("sucks", -1.5),
    ("terrible", -2.5),
    ("toxic", -2.4),
    ("trash", -1.9),
    ("ugly", -2.3),
    ("useless", -1.8),
    ("weird", -0.7),
    ("worse", -2.1),
    ("worst", -3.1),
    ("wrong", -2.1),
    ("wtf", -2.8),
    (":(", -1.9),
    (":-(", -1.9),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> LexiconSentiment {
        LexiconSentiment::new()
    }

    #[test]
    fn test_neutral_and_empty() {
        assert_eq!(scorer().compound(""), 0.0);
        assert_eq!(scorer().compound("2:15 the table is here"), 0.0);
    }

    #[test]
    fn test_polarity_direction() {
        assert!(scorer().compound("this is great") > 0.0);
        assert!(scorer().compound("this is terrible") < 0.0);
    }

    #[test]
    fn test_compound_normalization() {
        // Single "great" (3.1): 3.1 / sqrt(3.1^2 + 15)
        let expected = 3.1 / (3.1f64 * 3.1 + ALPHA).sqrt();
        let score = scorer().compound("great");
        assert!((score - expected).abs() < 1e-4);
    }

    #[test]
    fn test_negation_flips() {
        let s = scorer();
        assert!(s.compound("not good") < 0.0);
        assert!(s.compound("this isn't good") < 0.0);
        assert!(s.compound("this isnt good") < 0.0);
    }

    #[test]
    fn test_boosters_and_caps_intensify() {
        let s = scorer();
        let plain = s.compound("the ending was good");
        assert!(s.compound("the ending was very good") > plain);
        assert!(s.compound("the ending was GOOD") > plain);
        assert!(s.compound("the ending was slightly good") < plain);
    }

    #[test]
    fn test_exclamation_intensifies() {
        let s = scorer();
        assert!(s.compound("good!!") > s.compound("good"));
        assert!(s.compound("bad!!") < s.compound("bad"));
    }

    #[test]
    fn test_but_shifts_weight() {
        // "but" halves the clause before it and boosts the one after
        assert!(scorer().compound("the intro was good but the ending was terrible") < 0.0);
    }

    #[test]
    fn test_range() {
        let s = scorer();
        let gushing = "AMAZING AMAZING love love love best best perfect wonderful!!!!";
        let hostile = "worst hate hate stupid idiots liar racist garbage!!!!";
        assert!(s.compound(gushing) <= 1.0 && s.compound(gushing) > 0.9);
        assert!(s.compound(hostile) >= -1.0 && s.compound(hostile) < -0.9);
    }

    #[test]
    fn test_emoticons() {
        assert!(scorer().compound("nice one :)") > scorer().compound("nice one"));
        assert!(scorer().compound("that ending :(") < 0.0);
    }

    #[test]
    fn test_custom_word() {
        let s = scorer().with_word("based", 1.5);
        assert!(s.compound("based take") > 0.0);
    }
}
