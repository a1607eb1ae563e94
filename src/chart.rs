use eframe::egui::Color32;

use crate::color::{band_fill, quadrant_color};
use crate::data::model::{Quadrant, QuadrantThresholds, ScoreDataset};

// ---------------------------------------------------------------------------
// Chart description
// ---------------------------------------------------------------------------
//
// The builder computes pure geometry/metadata; rendering lives in ui/plot.rs.

/// Horizontal plot range, slightly wider than the score axis.
pub const X_RANGE: (f64, f64) = (-5.0, 105.0);
/// Vertical extent of the strip the points sit in.
pub const Y_EXTENT: (f64, f64) = (-0.5, 0.5);
/// Height at which band labels are drawn.
pub const LABEL_Y: f64 = 0.3;

/// One translucent background rectangle spanning a score band.
#[derive(Debug, Clone, PartialEq)]
pub struct Band {
    pub quadrant: Quadrant,
    pub x_start: f64,
    pub x_end: f64,
    pub fill: Color32,
}

/// One plotted advisor. All points sit on the y = 0 line; only x-position,
/// color and hover text distinguish them.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixPoint {
    pub score: f64,
    pub hover: String,
}

/// The point series of one quadrant present in the filtered data.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSeries {
    pub quadrant: Quadrant,
    pub color: Color32,
    pub points: Vec<MatrixPoint>,
}

/// Band-name annotation at the midpoint of a band.
#[derive(Debug, Clone, PartialEq)]
pub struct BandLabel {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub color: Color32,
}

/// Full description of the matrix chart for one filtered view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSpec {
    pub bands: Vec<Band>,
    pub series: Vec<PointSeries>,
    /// Vertical divider x-positions at the band boundaries.
    pub dividers: Vec<f64>,
    pub labels: Vec<BandLabel>,
}

/// Hover text for one point: name, score to 2 decimals, quadrant, team.
fn hover_text(name: &str, score: f64, quadrant: Quadrant, team: &str) -> String {
    format!("{name}\nPontuação: {score:.2}\nQuadrante: {quadrant}\nEquipe: {team}")
}

/// Build the chart for the records selected by `indices`.
///
/// Bands, dividers and labels depend only on the thresholds and are always
/// emitted; point series exist only for quadrants present in the view, so an
/// empty view yields an empty (but still banded) chart.
pub fn build_chart(
    dataset: &ScoreDataset,
    indices: &[usize],
    thresholds: &QuadrantThresholds,
) -> ChartSpec {
    let mut spec = ChartSpec::default();

    for quadrant in Quadrant::ALL {
        let (x_start, x_end) = thresholds.band_range(quadrant);
        spec.bands.push(Band {
            quadrant,
            x_start,
            x_end,
            fill: band_fill(quadrant),
        });
        spec.labels.push(BandLabel {
            x: (x_start + x_end) / 2.0,
            y: LABEL_Y,
            text: format!(
                "{}\n({:.0}-{:.0})",
                quadrant.label().to_uppercase(),
                x_start,
                x_end
            ),
            color: quadrant_color(quadrant),
        });
    }

    spec.dividers = vec![
        thresholds.maintenance,
        thresholds.purchase_option,
        thresholds.equity_gain,
    ];

    for quadrant in Quadrant::ALL {
        let points: Vec<MatrixPoint> = indices
            .iter()
            .map(|&i| &dataset.records[i])
            .filter(|r| r.quadrant == quadrant)
            .map(|r| MatrixPoint {
                score: r.score,
                hover: hover_text(&r.name, r.score, r.quadrant, &r.team),
            })
            .collect();

        if !points.is_empty() {
            spec.series.push(PointSeries {
                quadrant,
                color: quadrant_color(quadrant),
                points,
            });
        }
    }

    spec
}

impl ChartSpec {
    /// Hover text of the plotted point nearest to `x`, within `tolerance`.
    /// Points share the y = 0 line, so distance is purely horizontal.
    pub fn hover_at(&self, x: f64, tolerance: f64) -> Option<&str> {
        self.series
            .iter()
            .flat_map(|s| s.points.iter())
            .map(|p| ((p.score - x).abs(), p))
            .filter(|(d, _)| *d <= tolerance)
            .min_by(|(a, _), (b, _)| a.total_cmp(b))
            .map(|(_, p)| p.hover.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{filtered_indices, FilterSpec};
    use crate::data::loader::fallback_dataset;

    fn full_chart() -> ChartSpec {
        let ds = fallback_dataset();
        let indices: Vec<usize> = (0..ds.len()).collect();
        build_chart(&ds, &indices, &QuadrantThresholds::default())
    }

    #[test]
    fn fallback_dataset_produces_four_series_and_three_dividers() {
        let spec = full_chart();
        assert_eq!(spec.series.len(), 4);
        assert_eq!(spec.dividers, vec![40.0, 60.0, 80.0]);
        assert_eq!(spec.bands.len(), 4);
        assert_eq!(spec.labels.len(), 4);
    }

    #[test]
    fn absent_quadrants_produce_no_series() {
        let ds = fallback_dataset();
        let spec_filter = FilterSpec {
            quadrant: Some(Quadrant::EquityGain),
            ..FilterSpec::default()
        };
        let indices = filtered_indices(&ds, &spec_filter);
        let chart = build_chart(&ds, &indices, &QuadrantThresholds::default());

        assert_eq!(chart.series.len(), 1);
        assert_eq!(chart.series[0].quadrant, Quadrant::EquityGain);
        assert_eq!(chart.series[0].points.len(), 2);
        // Geometry is unaffected by filtering.
        assert_eq!(chart.bands.len(), 4);
        assert_eq!(chart.dividers.len(), 3);
        assert_eq!(chart.labels.len(), 4);
    }

    #[test]
    fn empty_view_keeps_geometry_but_no_points() {
        let ds = fallback_dataset();
        let chart = build_chart(&ds, &[], &QuadrantThresholds::default());
        assert!(chart.series.is_empty());
        assert_eq!(chart.bands.len(), 4);
        assert_eq!(chart.labels.len(), 4);
    }

    #[test]
    fn bands_and_labels_follow_threshold_geometry() {
        let spec = full_chart();
        assert_eq!(spec.bands[0].x_start, 0.0);
        assert_eq!(spec.bands[0].x_end, 40.0);
        assert_eq!(spec.bands[3].x_start, 80.0);
        assert_eq!(spec.bands[3].x_end, 100.0);

        assert_eq!(spec.labels[1].x, 50.0);
        assert_eq!(spec.labels[1].y, LABEL_Y);
        assert_eq!(spec.labels[1].text, "MANUTENÇÃO\n(40-60)");
        assert_eq!(spec.labels[3].text, "GANHO DE EQUITY\n(80-100)");
    }

    #[test]
    fn hover_text_carries_all_fields_with_two_decimals() {
        let spec = full_chart();
        let hover = spec.hover_at(85.0, 0.5).unwrap();
        assert_eq!(
            hover,
            "João Silva\nPontuação: 85.00\nQuadrante: Ganho de Equity\nEquipe: Vendas"
        );
        assert!(spec.hover_at(20.0, 0.5).is_none());
    }
}
