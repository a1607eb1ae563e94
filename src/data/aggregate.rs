use std::collections::BTreeMap;

use super::model::{Quadrant, ScoreDataset};

// ---------------------------------------------------------------------------
// Summary metrics over the filtered dataset
// ---------------------------------------------------------------------------

/// KPI summary of a filtered view.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,
    /// Arithmetic mean of the included scores; 0 for an empty view.
    pub mean_score: f64,
    /// Count per quadrant. Every quadrant is present, absent ones at 0.
    pub per_quadrant: BTreeMap<Quadrant, usize>,
}

impl Summary {
    pub fn count_for(&self, quadrant: Quadrant) -> usize {
        self.per_quadrant.get(&quadrant).copied().unwrap_or(0)
    }

    /// The "Alto Desempenho" KPI card.
    pub fn high_performers(&self) -> usize {
        self.count_for(Quadrant::EquityGain)
    }

    /// The "Necessita Atenção" KPI card.
    pub fn needs_attention(&self) -> usize {
        self.count_for(Quadrant::Dilution)
    }
}

/// Compute the summary over the records selected by `indices`.
pub fn summarize(dataset: &ScoreDataset, indices: &[usize]) -> Summary {
    let mut per_quadrant: BTreeMap<Quadrant, usize> =
        Quadrant::ALL.into_iter().map(|q| (q, 0)).collect();
    let mut total = 0.0;

    for &i in indices {
        let record = &dataset.records[i];
        *per_quadrant.entry(record.quadrant).or_insert(0) += 1;
        total += record.score;
    }

    let count = indices.len();
    let mean_score = if count == 0 { 0.0 } else { total / count as f64 };

    Summary {
        count,
        mean_score,
        per_quadrant,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{filtered_indices, FilterSpec};
    use crate::data::loader::fallback_dataset;

    #[test]
    fn count_equals_sum_of_per_quadrant_counts() {
        let ds = fallback_dataset();
        let indices: Vec<usize> = (0..ds.len()).collect();
        let summary = summarize(&ds, &indices);

        assert_eq!(summary.count, 5);
        assert_eq!(summary.count, summary.per_quadrant.values().sum::<usize>());
        assert_eq!(summary.count_for(Quadrant::EquityGain), 2);
        assert_eq!(summary.count_for(Quadrant::Maintenance), 1);
        assert_eq!(summary.count_for(Quadrant::PurchaseOption), 1);
        assert_eq!(summary.count_for(Quadrant::Dilution), 1);
    }

    #[test]
    fn mean_of_fallback_dataset() {
        let ds = fallback_dataset();
        let indices: Vec<usize> = (0..ds.len()).collect();
        let summary = summarize(&ds, &indices);
        // (85 + 45 + 72 + 38 + 91) / 5
        assert!((summary.mean_score - 66.2).abs() < 1e-9);
    }

    #[test]
    fn empty_view_yields_zero_mean_and_zero_counts() {
        let ds = fallback_dataset();
        let summary = summarize(&ds, &[]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.mean_score, 0.0);
        for q in Quadrant::ALL {
            assert_eq!(summary.count_for(q), 0);
        }
        assert_eq!(summary.high_performers(), 0);
        assert_eq!(summary.needs_attention(), 0);
    }

    #[test]
    fn summary_follows_the_filtered_view() {
        let ds = fallback_dataset();
        let spec = FilterSpec {
            team: Some("Vendas".to_string()),
            ..FilterSpec::default()
        };
        let indices = filtered_indices(&ds, &spec);
        let summary = summarize(&ds, &indices);

        assert_eq!(summary.count, 3);
        assert_eq!(summary.high_performers(), 2);
        assert_eq!(summary.needs_attention(), 0);
        assert!((summary.mean_score - (85.0 + 72.0 + 91.0) / 3.0).abs() < 1e-9);
    }
}
