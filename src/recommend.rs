//! Ranked similarity lookup over a prebuilt matrix.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::errors::{EngineError, RecommendError};
use crate::similarity::SimilarityMatrix;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub name: String,
    pub score: f64,
}

pub struct Recommender {
    catalog: Catalog,
    matrix: SimilarityMatrix,
}

impl Recommender {
    pub fn new(catalog: Catalog) -> Result<Self, EngineError> {
        let matrix = SimilarityMatrix::build(catalog.items())?;
        Ok(Self { catalog, matrix })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[cfg(test)]
    pub fn matrix(&self) -> &SimilarityMatrix {
        &self.matrix
    }

    /// Up to `top_n` items most similar to `name`, best first.
    ///
    /// The query is matched case-insensitively and exactly. Equal scores
    /// keep catalog order; the queried item itself is never returned.
    pub fn recommend(
        &self,
        name: &str,
        top_n: usize,
    ) -> Result<Vec<Recommendation>, RecommendError> {
        let Some(idx) = self.catalog.resolve(name) else {
            log::debug!("no catalog entry for {name:?}");
            return Err(RecommendError::NotFound(name.to_string()));
        };

        let mut ranked: Vec<(usize, f64)> = self
            .matrix
            .row(idx)
            .iter()
            .copied()
            .enumerate()
            .filter(|(col, _)| *col != idx)
            .collect();

        // stable: ties stay in catalog order
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        ranked.truncate(top_n);

        Ok(ranked
            .into_iter()
            .filter_map(|(col, score)| {
                self.catalog.get(col).map(|item| Recommendation {
                    name: item.name.clone(),
                    score,
                })
            })
            .collect())
    }
}
