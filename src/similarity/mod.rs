//! Text similarity for catalog items.
//!
//! # Architecture
//!
//! - `tfidf`: tokenization and TF-IDF term weighting
//! - `matrix`: dense pairwise cosine similarity over TF-IDF vectors

mod matrix;
mod tfidf;

pub use matrix::SimilarityMatrix;
