use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::model::{Quadrant, QuadrantThresholds, ScoreDataset, ScoreRecord};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Load failures that abort a file read. Row-level problems never end up
/// here: incomplete or malformed rows are dropped with a warning instead.
///
/// `NotFound` is split from `Io` so the fallback policy can log the expected
/// "no file yet" case differently from a genuine I/O fault.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("data file not found: {0}")]
    NotFound(PathBuf),
    #[error("reading data file")]
    Io(#[from] io::Error),
    #[error("parsing CSV data")]
    Csv(#[from] csv::Error),
    #[error("parsing JSON data")]
    Json(#[from] serde_json::Error),
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a score dataset from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row plus four positional columns
///             (Funcionario, Pontuacao, Quadrante, Equipe)
/// * `.json` – records-oriented array of objects with the same keys
pub fn load_file(path: &Path, thresholds: &QuadrantThresholds) -> Result<ScoreDataset, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => Ok(read_csv(open(path)?, thresholds)?),
        "json" => Ok(read_json(open(path)?, thresholds)?),
        other => Err(LoadError::UnsupportedExtension(other.to_string())),
    }
}

/// Load a dataset, substituting the fixed example dataset on any failure.
///
/// Deliberate "always render something" policy: the dashboard never shows a
/// load error, only data. A missing file is expected and logged at info;
/// anything else is logged at warn. Returns the dataset and whether the
/// fallback was used.
pub fn load_or_fallback(path: &Path, thresholds: &QuadrantThresholds) -> (ScoreDataset, bool) {
    match load_file(path, thresholds) {
        Ok(dataset) => {
            log::info!(
                "loaded {} records ({} teams) from {}",
                dataset.len(),
                dataset.teams.len(),
                path.display()
            );
            (dataset, false)
        }
        Err(LoadError::NotFound(p)) => {
            log::info!("{} not found, using example dataset", p.display());
            (fallback_dataset(), true)
        }
        Err(e) => {
            log::warn!("failed to load {}: {e}, using example dataset", path.display());
            (fallback_dataset(), true)
        }
    }
}

/// The fixed 5-row example dataset shown when no real data is available.
pub fn fallback_dataset() -> ScoreDataset {
    let rows = [
        ("João Silva", 85.0, Quadrant::EquityGain, "Vendas"),
        ("Maria Santos", 45.0, Quadrant::Maintenance, "Marketing"),
        ("Pedro Costa", 72.0, Quadrant::PurchaseOption, "Vendas"),
        ("Ana Lima", 38.0, Quadrant::Dilution, "Marketing"),
        ("Carlos Souza", 91.0, Quadrant::EquityGain, "Vendas"),
    ];
    ScoreDataset::from_records(
        rows.into_iter()
            .map(|(name, score, quadrant, team)| ScoreRecord {
                name: name.to_string(),
                score,
                quadrant,
                team: team.to_string(),
            })
            .collect(),
    )
}

fn open(path: &Path) -> Result<std::fs::File, LoadError> {
    std::fs::File::open(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            LoadError::NotFound(path.to_path_buf())
        } else {
            LoadError::Io(e)
        }
    })
}

// ---------------------------------------------------------------------------
// CSV reader
// ---------------------------------------------------------------------------

/// CSV layout: one header row (names ignored, mapping is positional), then
/// four columns per row: name, score, quadrant label, team.
pub fn read_csv<R: io::Read>(
    reader: R,
    thresholds: &QuadrantThresholds,
) -> Result<ScoreDataset, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for (row_no, result) in csv_reader.records().enumerate() {
        let row = result?;
        let name = row.get(0).unwrap_or("").trim();
        let score = row.get(1).unwrap_or("").trim();
        let label = row.get(2).unwrap_or("").trim();
        let team = row.get(3).unwrap_or("").trim();

        if name.is_empty() || score.is_empty() || label.is_empty() || team.is_empty() {
            log::warn!("dropping row {row_no}: missing field");
            continue;
        }
        let Ok(score) = score.parse::<f64>() else {
            log::warn!("dropping row {row_no}: score '{score}' is not a number");
            continue;
        };
        if let Some(record) = build_record(name, score, label, team, thresholds, row_no) {
            records.push(record);
        }
    }

    Ok(ScoreDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// JSON reader
// ---------------------------------------------------------------------------

/// Row shape of the records-oriented JSON export (`df.to_json(orient='records')`).
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Funcionario")]
    name: Option<String>,
    #[serde(rename = "Pontuacao")]
    score: Option<f64>,
    #[serde(rename = "Quadrante")]
    quadrant: Option<String>,
    #[serde(rename = "Equipe")]
    team: Option<String>,
}

pub fn read_json<R: io::Read>(
    reader: R,
    thresholds: &QuadrantThresholds,
) -> Result<ScoreDataset, serde_json::Error> {
    let rows: Vec<RawRow> = serde_json::from_reader(reader)?;

    let mut records = Vec::new();
    for (row_no, row) in rows.into_iter().enumerate() {
        let (Some(name), Some(score), Some(label), Some(team)) =
            (row.name, row.score, row.quadrant, row.team)
        else {
            log::warn!("dropping row {row_no}: missing field");
            continue;
        };
        if let Some(record) = build_record(&name, score, &label, &team, thresholds, row_no) {
            records.push(record);
        }
    }

    Ok(ScoreDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Row policy
// ---------------------------------------------------------------------------

/// Validate one row and derive its quadrant.
///
/// The stored label is advisory only: the quadrant kept on the record is
/// always recomputed from the score, and a label that is unknown or
/// disagrees with the score is reported, not trusted.
fn build_record(
    name: &str,
    score: f64,
    stored_label: &str,
    team: &str,
    thresholds: &QuadrantThresholds,
    row_no: usize,
) -> Option<ScoreRecord> {
    if !(0.0..=100.0).contains(&score) {
        log::warn!("dropping row {row_no} ('{name}'): score {score} outside 0-100");
        return None;
    }

    let derived = thresholds.classify(score);
    match stored_label.parse::<Quadrant>() {
        Ok(stored) if stored != derived => {
            log::warn!(
                "row {row_no} ('{name}'): stored quadrant '{stored}' disagrees with \
                 score {score} ({derived}), keeping derived"
            );
        }
        Ok(_) => {}
        Err(e) => {
            log::warn!("row {row_no} ('{name}'): {e}, deriving from score ({derived})");
        }
    }

    Some(ScoreRecord {
        name: name.to_string(),
        score,
        quadrant: derived,
        team: team.to_string(),
    })
}
