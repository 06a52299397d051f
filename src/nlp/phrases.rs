//! Noun-phrase chunking without a tagger
//!
//! Text is split into clauses at punctuation. Inside a clause, maximal runs of
//! content words (anything not in the closed function-word list) of two or
//! more words are noun-phrase candidates, as are single proper nouns and
//! acronyms that do not open the clause.

use super::{is_all_caps, PhraseExtractor};
use std::collections::HashSet;

/// Function-word chunker
#[derive(Debug, Clone)]
pub struct ChunkPhraseExtractor {
    function_words: HashSet<&'static str>,
}

impl Default for ChunkPhraseExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ChunkPhraseExtractor {
    pub fn new() -> Self {
        Self {
            function_words: FUNCTION_WORDS.iter().copied().collect(),
        }
    }

    fn is_content(&self, word: &str) -> bool {
        word.chars().count() > 1
            && word.chars().all(|c| c.is_alphabetic() || c == '-' || c == '\'')
            && !self.function_words.contains(word.to_lowercase().as_str())
    }

    fn chunk_clause(&self, clause: &str, phrases: &mut Vec<String>) {
        let words: Vec<&str> = clause
            .split_whitespace()
            .map(|w| w.trim_matches('\''))
            .map(|w| w.strip_suffix("'s").unwrap_or(w))
            .filter(|w| !w.is_empty())
            .collect();

        let mut run: Vec<&str> = Vec::new();
        let mut run_start = 0;

        // Sentinel pass at the end flushes the last run
        for (i, word) in words.iter().map(Some).chain(std::iter::once(None)).enumerate() {
            if let Some(word) = word.filter(|w| self.is_content(w)) {
                if run.is_empty() {
                    run_start = i;
                }
                run.push(*word);
                continue;
            }

            match run.len() {
                0 => {}
                1 => {
                    let single = run[0];
                    let proper = run_start > 0 && single.starts_with(char::is_uppercase);
                    if proper || is_all_caps(single) {
                        phrases.push(single.to_string());
                    }
                }
                _ => phrases.push(run.join(" ")),
            }
            run.clear();
        }
    }
}

impl PhraseExtractor for ChunkPhraseExtractor {
    fn noun_phrases(&self, text: &str) -> Vec<String> {
        let mut phrases = Vec::new();
        for clause in text.split(is_clause_break) {
            self.chunk_clause(clause, &mut phrases);
        }
        phrases
    }
}

fn is_clause_break(c: char) -> bool {
    matches!(
        c,
        '.' | ',' | '!' | '?' | ';' | ':' | '(' | ')' | '[' | ']' | '"' | '/' | '\u{2026}'
    )
}

const FUNCTION_WORDS: &[&str] = &[
    // determiners and quantifiers
    "a", "an", "the", "this", "that", "these", "those", "some", "any", "all", "each",
    "every", "few", "many", "much", "more", "most", "other", "another", "such", "no",
    "own", "both", "either", "neither", "several", "enough",
    // pronouns
    "i", "me", "my", "mine", "myself", "you", "your", "yours", "he", "him", "his",
    "she", "her", "hers", "it", "its", "we", "us", "our", "they", "them", "their",
    "theirs", "someone", "something", "anyone", "anything", "everyone", "everything",
    "nobody", "nothing", "im", "i'm", "you're", "he's", "she's", "it's", "we're",
    "they're", "i've", "i'd", "i'll", "you've", "that's", "there's", "what's",
    // prepositions and conjunctions
    "of", "in", "on", "at", "to", "for", "with", "from", "by", "about", "as", "into",
    "over", "under", "after", "before", "between", "through", "during", "without",
    "around", "against", "up", "down", "out", "off", "and", "or", "but", "nor", "so",
    "if", "because", "than", "then", "while", "though", "although", "unless", "until",
    "since", "like",
    // auxiliaries and common verbs
    "is", "are", "was", "were", "be", "been", "being", "am", "have", "has", "had",
    "having", "do", "does", "did", "doing", "done", "will", "would", "can", "could",
    "should", "shall", "may", "might", "must", "get", "gets", "got", "getting", "make",
    "makes", "made", "go", "goes", "going", "went", "gone", "say", "says", "said", "see",
    "saw", "seen", "think", "thought", "know", "knew", "want", "wants", "look", "looks",
    "come", "came", "take", "took", "need", "needs", "feel", "feels", "seem", "seems",
    "happen", "happens", "happened", "mean", "means", "let", "keep", "give", "tell",
    "don't", "doesn't", "didn't", "isn't", "aren't", "wasn't", "weren't", "can't",
    "won't", "wouldn't", "shouldn't", "couldn't", "dont", "doesnt", "didnt", "isnt",
    "cant", "wont",
    // adverbs and question words
    "not", "very", "really", "too", "also", "just", "only", "even", "still", "already",
    "actually", "literally", "basically", "honestly", "probably", "maybe", "here",
    "there", "now", "again", "always", "never", "ever", "often", "why", "how", "what",
    "who", "whom", "whose", "when", "where", "which", "well", "yet", "quite", "pretty",
    // interjections
    "lol", "lmao", "omg", "wow", "yeah", "yes", "yep", "oh", "ok", "okay", "haha",
    "hahaha", "please", "thanks", "thank",
];
