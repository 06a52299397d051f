//! Global topic counting

use std::collections::HashMap;

/// Keyword occurrence counter that remembers first-seen order
#[derive(Debug, Clone, Default)]
pub struct TopicCounter {
    index: HashMap<String, usize>,
    counts: Vec<(String, usize)>,
}

impl TopicCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of each keyword
    pub fn update<I, S>(&mut self, keywords: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for keyword in keywords {
            let keyword = keyword.into();
            match self.index.get(&keyword) {
                Some(&slot) => self.counts[slot].1 += 1,
                None => {
                    self.index.insert(keyword.clone(), self.counts.len());
                    self.counts.push((keyword, 1));
                }
            }
        }
    }

    pub fn count(&self, keyword: &str) -> usize {
        self.index
            .get(keyword)
            .map(|&slot| self.counts[slot].1)
            .unwrap_or(0)
    }

    /// Number of distinct keywords
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The `n` most frequent keywords; equal counts keep first-seen order
    pub fn most_common(&self, n: usize) -> Vec<(String, usize)> {
        let mut ranked = self.counts.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}
