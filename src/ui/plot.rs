use eframe::egui::{Color32, RichText, Stroke, Ui};
use egui_plot::{
    Legend, LineStyle, MarkerShape, Plot, PlotPoint, PlotPoints, Points, Polygon, Text, VLine,
};

use crate::chart::{ChartSpec, X_RANGE, Y_EXTENT};

/// Hover hit radius along the score axis.
const HOVER_TOLERANCE: f64 = 1.0;

// ---------------------------------------------------------------------------
// Matrix plot (central panel)
// ---------------------------------------------------------------------------

/// Render the prepared [`ChartSpec`]: background bands, one point series per
/// quadrant present, dashed dividers and band labels.
pub fn matrix_plot(ui: &mut Ui, chart: &ChartSpec) {
    let hover_chart = chart.clone();

    Plot::new("matrix_plot")
        .legend(Legend::default())
        .x_axis_label("Pontuação (0-100)")
        .include_x(X_RANGE.0)
        .include_x(X_RANGE.1)
        .include_y(Y_EXTENT.0)
        .include_y(Y_EXTENT.1)
        .show_axes([true, false])
        .show_grid(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .height(420.0)
        .label_formatter(move |_name, point| {
            hover_chart
                .hover_at(point.x, HOVER_TOLERANCE)
                .map(str::to_string)
                .unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            for band in &chart.bands {
                let corners = vec![
                    [band.x_start, Y_EXTENT.0],
                    [band.x_end, Y_EXTENT.0],
                    [band.x_end, Y_EXTENT.1],
                    [band.x_start, Y_EXTENT.1],
                ];
                plot_ui.polygon(
                    Polygon::new(PlotPoints::from(corners))
                        .fill_color(band.fill)
                        .stroke(Stroke::NONE),
                );
            }

            for &x in &chart.dividers {
                plot_ui.vline(
                    VLine::new(x)
                        .width(3.0)
                        .style(LineStyle::dashed_loose())
                        .color(Color32::from_rgba_unmultiplied(44, 62, 80, 204)),
                );
            }

            for label in &chart.labels {
                plot_ui.text(Text::new(
                    PlotPoint::new(label.x, label.y),
                    RichText::new(&label.text).size(12.0).color(label.color),
                ));
            }

            for series in &chart.series {
                let points: PlotPoints = series
                    .points
                    .iter()
                    .map(|p| [p.score, 0.0])
                    .collect();
                plot_ui.points(
                    Points::new(points)
                        .name(series.quadrant.label())
                        .color(series.color)
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(7.0),
                );
            }
        });
}
