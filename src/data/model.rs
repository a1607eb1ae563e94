use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Quadrant – the four performance bands
// ---------------------------------------------------------------------------

/// The four partnership quadrants, ordered by ascending score band.
/// A closed set: adding a band is a source change, never a data change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    Dilution,
    Maintenance,
    PurchaseOption,
    EquityGain,
}

impl Quadrant {
    /// All quadrants in band order. Iterating this instead of a map keeps
    /// per-quadrant output deterministic.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::Dilution,
        Quadrant::Maintenance,
        Quadrant::PurchaseOption,
        Quadrant::EquityGain,
    ];

    /// The label used in source data and the UI (the domain is Portuguese).
    pub fn label(self) -> &'static str {
        match self {
            Quadrant::Dilution => "Diluição",
            Quadrant::Maintenance => "Manutenção",
            Quadrant::PurchaseOption => "Opção de Compra",
            Quadrant::EquityGain => "Ganho de Equity",
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error for labels outside the closed quadrant set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownQuadrant(pub String);

impl fmt::Display for UnknownQuadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown quadrant label '{}'", self.0)
    }
}

impl std::error::Error for UnknownQuadrant {}

impl FromStr for Quadrant {
    type Err = UnknownQuadrant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Diluição" => Ok(Quadrant::Dilution),
            "Manutenção" => Ok(Quadrant::Maintenance),
            "Opção de Compra" => Ok(Quadrant::PurchaseOption),
            "Ganho de Equity" => Ok(Quadrant::EquityGain),
            other => Err(UnknownQuadrant(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// QuadrantThresholds – configurable band boundaries
// ---------------------------------------------------------------------------

/// The three boundaries splitting [0, 100] into four bands.
/// Bands are lower-inclusive: a score exactly on a boundary belongs to the
/// band above it, and 100 stays in the top band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadrantThresholds {
    pub maintenance: f64,
    pub purchase_option: f64,
    pub equity_gain: f64,
}

impl Default for QuadrantThresholds {
    fn default() -> Self {
        Self {
            maintenance: 40.0,
            purchase_option: 60.0,
            equity_gain: 80.0,
        }
    }
}

impl QuadrantThresholds {
    /// Classify a score into its quadrant.
    pub fn classify(&self, score: f64) -> Quadrant {
        if score >= self.equity_gain {
            Quadrant::EquityGain
        } else if score >= self.purchase_option {
            Quadrant::PurchaseOption
        } else if score >= self.maintenance {
            Quadrant::Maintenance
        } else {
            Quadrant::Dilution
        }
    }

    /// Band edges `[0, t1, t2, t3, 100]`, so band `i` spans `edges[i]..edges[i+1]`.
    pub fn band_edges(&self) -> [f64; 5] {
        [
            0.0,
            self.maintenance,
            self.purchase_option,
            self.equity_gain,
            100.0,
        ]
    }

    /// The `(start, end)` range of a quadrant's band.
    pub fn band_range(&self, quadrant: Quadrant) -> (f64, f64) {
        let edges = self.band_edges();
        let i = quadrant as usize;
        (edges[i], edges[i + 1])
    }
}

// ---------------------------------------------------------------------------
// ScoreRecord – one row of the source table
// ---------------------------------------------------------------------------

/// One advisor row. `quadrant` is a derived projection of `score`: the loader
/// recomputes it from the configured thresholds, so it can never disagree
/// with the score the way a stored label could.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRecord {
    pub name: String,
    pub score: f64,
    pub quadrant: Quadrant,
    pub team: String,
}

// ---------------------------------------------------------------------------
// ScoreDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with the team index precomputed.
#[derive(Debug, Clone)]
pub struct ScoreDataset {
    /// All rows in source order (display order only; filtering ignores it).
    pub records: Vec<ScoreRecord>,
    /// Sorted unique team names, for the team filter widget.
    pub teams: Vec<String>,
}

impl ScoreDataset {
    /// Build the team index from loaded records.
    pub fn from_records(records: Vec<ScoreRecord>) -> Self {
        let mut teams: Vec<String> = records.iter().map(|r| r.team.clone()).collect();
        teams.sort();
        teams.dedup();
        ScoreDataset { records, teams }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_boundaries_are_lower_inclusive() {
        let t = QuadrantThresholds::default();
        assert_eq!(t.classify(0.0), Quadrant::Dilution);
        assert_eq!(t.classify(39.99), Quadrant::Dilution);
        assert_eq!(t.classify(40.0), Quadrant::Maintenance);
        assert_eq!(t.classify(59.99), Quadrant::Maintenance);
        assert_eq!(t.classify(60.0), Quadrant::PurchaseOption);
        assert_eq!(t.classify(80.0), Quadrant::EquityGain);
        assert_eq!(t.classify(100.0), Quadrant::EquityGain);
    }

    #[test]
    fn classify_respects_custom_thresholds() {
        let t = QuadrantThresholds {
            maintenance: 25.0,
            purchase_option: 50.0,
            equity_gain: 75.0,
        };
        assert_eq!(t.classify(30.0), Quadrant::Maintenance);
        assert_eq!(t.classify(74.9), Quadrant::PurchaseOption);
        assert_eq!(t.classify(75.0), Quadrant::EquityGain);
    }

    #[test]
    fn quadrant_label_roundtrip() {
        for q in Quadrant::ALL {
            assert_eq!(q.label().parse::<Quadrant>(), Ok(q));
        }
        assert!("Quadrante Fantasma".parse::<Quadrant>().is_err());
    }

    #[test]
    fn band_ranges_tile_the_score_axis() {
        let t = QuadrantThresholds::default();
        assert_eq!(t.band_range(Quadrant::Dilution), (0.0, 40.0));
        assert_eq!(t.band_range(Quadrant::Maintenance), (40.0, 60.0));
        assert_eq!(t.band_range(Quadrant::PurchaseOption), (60.0, 80.0));
        assert_eq!(t.band_range(Quadrant::EquityGain), (80.0, 100.0));
    }

    #[test]
    fn dataset_team_index_is_sorted_and_unique() {
        let records = vec![
            ScoreRecord {
                name: "A".into(),
                score: 10.0,
                quadrant: Quadrant::Dilution,
                team: "Vendas".into(),
            },
            ScoreRecord {
                name: "B".into(),
                score: 50.0,
                quadrant: Quadrant::Maintenance,
                team: "Marketing".into(),
            },
            ScoreRecord {
                name: "C".into(),
                score: 90.0,
                quadrant: Quadrant::EquityGain,
                team: "Vendas".into(),
            },
        ];
        let ds = ScoreDataset::from_records(records);
        assert_eq!(ds.teams, vec!["Marketing".to_string(), "Vendas".to_string()]);
        assert_eq!(ds.len(), 3);
    }
}
