//! TF-IDF term weighting.
//!
//! Each document becomes a sparse vector over the vocabulary observed in
//! the fitted corpus:
//!
//! - term frequency: raw count of the term in the document
//! - inverse document frequency: `ln((1 + n) / (1 + df)) + 1`
//! - every vector is L2-normalized, so a dot product is a cosine

use std::collections::{BTreeMap, BTreeSet, HashMap};

use once_cell::sync::Lazy;
use regex::Regex;

/// Tokens of two or more word characters.
static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("token pattern is valid"));

/// Split text into lowercase terms.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    TOKEN_RE
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Sparse weight vector: (term index, weight) pairs sorted by term index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    fn from_weights(weights: HashMap<usize, f64>) -> Self {
        let mut entries: Vec<(usize, f64)> = weights.into_iter().collect();
        entries.sort_by_key(|(term, _)| *term);
        Self { entries }
    }

    #[cfg(test)]
    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    #[cfg(test)]
    pub fn is_zero(&self) -> bool {
        self.entries.iter().all(|(_, w)| *w == 0.0)
    }

    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;

        while i < self.entries.len() && j < other.entries.len() {
            let (a_term, a_weight) = self.entries[i];
            let (b_term, b_weight) = other.entries[j];
            match a_term.cmp(&b_term) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a_weight * b_weight;
                    i += 1;
                    j += 1;
                }
            }
        }

        sum
    }

    fn normalize(&mut self) {
        let norm = self.norm();
        if norm < f64::EPSILON {
            return;
        }
        for (_, w) in self.entries.iter_mut() {
            *w /= norm;
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TfidfVectorizer {
    /// term -> column, columns assigned in lexicographic term order
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Learn the vocabulary and idf weights from `documents` and return
    /// one normalized vector per document, in input order.
    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Vec<SparseVector> {
        let tokenized: Vec<Vec<String>> = documents
            .iter()
            .map(|doc| tokenize(doc.as_ref()))
            .collect();

        let terms: BTreeSet<&str> = tokenized
            .iter()
            .flat_map(|tokens| tokens.iter().map(String::as_str))
            .collect();
        self.vocabulary = terms
            .into_iter()
            .enumerate()
            .map(|(col, term)| (term.to_string(), col))
            .collect();

        let mut doc_freq = vec![0usize; self.vocabulary.len()];
        for tokens in &tokenized {
            let unique: BTreeSet<usize> = tokens.iter().map(|t| self.vocabulary[t]).collect();
            for col in unique {
                doc_freq[col] += 1;
            }
        }

        let n_docs = documents.len() as f64;
        self.idf = doc_freq
            .iter()
            .map(|df| ((1.0 + n_docs) / (1.0 + *df as f64)).ln() + 1.0)
            .collect();

        tokenized
            .iter()
            .map(|tokens| {
                let mut counts: HashMap<usize, f64> = HashMap::new();
                for token in tokens {
                    *counts.entry(self.vocabulary[token]).or_insert(0.0) += 1.0;
                }
                for (col, weight) in counts.iter_mut() {
                    *weight *= self.idf[*col];
                }

                let mut vector = SparseVector::from_weights(counts);
                vector.normalize();
                vector
            })
            .collect()
    }

    #[cfg(test)]
    pub fn vocabulary(&self) -> &BTreeMap<String, usize> {
        &self.vocabulary
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    #[cfg(test)]
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.vocabulary.get(term).map(|col| self.idf[*col])
    }
}
