use std::time::Instant;

use crate::catalog::Item;
use crate::errors::EngineError;

use super::tfidf::{SparseVector, TfidfVectorizer};

/// Dense symmetric matrix of pairwise cosine similarities, row-major.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    size: usize,
    scores: Vec<f64>,
}

impl SimilarityMatrix {
    /// Vectorize item descriptions with TF-IDF and compute every pairwise
    /// cosine similarity.
    pub fn build(items: &[Item]) -> Result<Self, EngineError> {
        if items.is_empty() {
            return Err(EngineError::EmptyCorpus);
        }

        let now = Instant::now();

        let descriptions: Vec<&str> = items.iter().map(|item| item.description.as_str()).collect();
        let mut vectorizer = TfidfVectorizer::new();
        let vectors = vectorizer.fit_transform(&descriptions);

        let matrix = Self::from_vectors(&vectors);

        log::debug!(
            "built {n}x{n} similarity matrix over {} terms in {}ms",
            vectorizer.vocabulary_size(),
            now.elapsed().as_micros() as f64 / 1000.0,
            n = matrix.size,
        );

        Ok(matrix)
    }

    fn from_vectors(vectors: &[SparseVector]) -> Self {
        let size = vectors.len();
        let norms: Vec<f64> = vectors.iter().map(SparseVector::norm).collect();
        let mut scores = vec![0.0; size * size];

        for i in 0..size {
            for j in i..size {
                let score = cosine_similarity(&vectors[i], &vectors[j], norms[i], norms[j]);
                scores[i * size + j] = score;
                scores[j * size + i] = score;
            }
        }

        Self { size, scores }
    }

    #[cfg(test)]
    pub fn size(&self) -> usize {
        self.size
    }

    #[cfg(test)]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.scores[i * self.size + j]
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.scores[i * self.size..(i + 1) * self.size]
    }
}

/// Cosine similarity with precomputed norms. Zero vectors score 0.0
/// against everything, themselves included.
fn cosine_similarity(a: &SparseVector, b: &SparseVector, norm_a: f64, norm_b: f64) -> f64 {
    if norm_a < f64::EPSILON || norm_b < f64::EPSILON {
        return 0.0;
    }

    (a.dot(b) / (norm_a * norm_b)).clamp(0.0, 1.0)
}
