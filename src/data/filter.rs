use super::model::{Quadrant, ScoreDataset, ScoreRecord};

// ---------------------------------------------------------------------------
// Filter predicate: quadrant, team, score range
// ---------------------------------------------------------------------------

/// The user's current filter selection. `None` means "Todos" (no constraint).
/// The score range is inclusive on both ends.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSpec {
    pub quadrant: Option<Quadrant>,
    pub team: Option<String>,
    pub score_min: f64,
    pub score_max: f64,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            quadrant: None,
            team: None,
            score_min: 0.0,
            score_max: 100.0,
        }
    }
}

impl FilterSpec {
    /// Whether a single record passes all three predicates (AND semantics).
    pub fn matches(&self, record: &ScoreRecord) -> bool {
        if let Some(wanted) = self.quadrant {
            if record.quadrant != wanted {
                return false;
            }
        }
        if let Some(wanted) = &self.team {
            if &record.team != wanted {
                return false;
            }
        }
        self.score_min <= record.score && record.score <= self.score_max
    }
}

/// Return indices of records that pass the filter, in source order.
///
/// Pure: the dataset is untouched and the same inputs always produce the
/// same indices. An empty result is a valid state, not an error.
pub fn filtered_indices(dataset: &ScoreDataset, spec: &FilterSpec) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, r)| spec.matches(r))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::fallback_dataset;
    use crate::data::model::ScoreDataset;

    fn subset(dataset: &ScoreDataset, indices: &[usize]) -> ScoreDataset {
        ScoreDataset::from_records(
            indices
                .iter()
                .map(|&i| dataset.records[i].clone())
                .collect(),
        )
    }

    #[test]
    fn default_spec_selects_everything() {
        let ds = fallback_dataset();
        assert_eq!(filtered_indices(&ds, &FilterSpec::default()), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn predicates_are_conjunctive() {
        let ds = fallback_dataset();
        let spec = FilterSpec {
            quadrant: Some(Quadrant::EquityGain),
            team: Some("Vendas".to_string()),
            score_min: 0.0,
            score_max: 90.0,
        };
        // Only João Silva (85, Ganho de Equity, Vendas) passes all three;
        // Carlos Souza (91) fails the range, everyone else the quadrant.
        let indices = filtered_indices(&ds, &spec);
        assert_eq!(indices, vec![0]);

        for (i, r) in ds.records.iter().enumerate() {
            let expected = r.quadrant == Quadrant::EquityGain
                && r.team == "Vendas"
                && (0.0..=90.0).contains(&r.score);
            assert_eq!(indices.contains(&i), expected, "record {i}");
        }
    }

    #[test]
    fn score_range_is_inclusive_on_both_ends() {
        let ds = fallback_dataset();
        let spec = FilterSpec {
            score_min: 38.0,
            score_max: 85.0,
            ..FilterSpec::default()
        };
        // 38 (Ana Lima) and 85 (João Silva) are both kept.
        assert_eq!(filtered_indices(&ds, &spec), vec![0, 1, 2, 3]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let ds = fallback_dataset();
        let spec = FilterSpec {
            team: Some("Marketing".to_string()),
            score_min: 0.0,
            score_max: 50.0,
            ..FilterSpec::default()
        };

        let once = filtered_indices(&ds, &spec);
        let refiltered = filtered_indices(&subset(&ds, &once), &spec);
        assert_eq!(refiltered.len(), once.len());
        assert_eq!(
            subset(&ds, &once).records,
            subset(&subset(&ds, &once), &refiltered).records
        );
    }

    #[test]
    fn empty_result_is_valid() {
        let ds = fallback_dataset();
        let spec = FilterSpec {
            quadrant: Some(Quadrant::Dilution),
            team: Some("Vendas".to_string()),
            ..FilterSpec::default()
        };
        assert!(filtered_indices(&ds, &spec).is_empty());
    }
}
