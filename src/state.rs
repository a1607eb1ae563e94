use std::path::PathBuf;

use crate::auth::{CredentialProvider, Session, StaticCredentials};
use crate::chart::{build_chart, ChartSpec};
use crate::data::aggregate::{summarize, Summary};
use crate::data::filter::{filtered_indices, FilterSpec};
use crate::data::loader;
use crate::data::model::{Quadrant, QuadrantThresholds, ScoreDataset};

/// Step of the score-range sliders in the filter panel.
pub const SCORE_STEP: f64 = 5.0;

const DEFAULT_DATA_PATH: &str = "partnership.csv";

// ---------------------------------------------------------------------------
// Login form
// ---------------------------------------------------------------------------

/// Transient login page inputs, cleared on success and on logout.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    /// Generic failure message: never says which field was wrong.
    pub error: Option<String>,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub session: Session,
    credentials: Box<dyn CredentialProvider>,
    /// Shown on the login page so leadership knows the valid accounts.
    pub known_usernames: Vec<String>,

    pub thresholds: QuadrantThresholds,
    pub data_path: PathBuf,
    pub dataset: ScoreDataset,
    /// Whether the current dataset is the built-in example data.
    pub used_fallback: bool,

    pub filter: FilterSpec,
    /// Indices of records passing the current filter (cached).
    pub visible_indices: Vec<usize>,
    pub summary: Summary,
    pub chart: ChartSpec,

    pub login_form: LoginForm,
}

impl Default for AppState {
    fn default() -> Self {
        let credentials = StaticCredentials::default();
        let known_usernames = credentials.usernames();
        Self::new(Box::new(credentials), known_usernames)
    }
}

impl AppState {
    /// Build the state around an injected credential provider. The dataset
    /// is loaded immediately so there is always something to render.
    pub fn new(credentials: Box<dyn CredentialProvider>, known_usernames: Vec<String>) -> Self {
        let thresholds = QuadrantThresholds::default();
        let data_path = PathBuf::from(DEFAULT_DATA_PATH);
        let (dataset, used_fallback) = loader::load_or_fallback(&data_path, &thresholds);

        let mut state = Self {
            session: Session::default(),
            credentials,
            known_usernames,
            thresholds,
            data_path,
            dataset,
            used_fallback,
            filter: FilterSpec::default(),
            visible_indices: Vec::new(),
            summary: summarize(&ScoreDataset::from_records(Vec::new()), &[]),
            chart: ChartSpec::default(),
            login_form: LoginForm::default(),
        };
        state.recompute();
        state
    }

    // -- session -----------------------------------------------------------

    /// Check the login form against the credential provider; on success the
    /// session is activated, the form cleared, and the data re-read.
    pub fn submit_login(&mut self) {
        let username = self.login_form.username.trim().to_string();
        match self.credentials.verify(&username, &self.login_form.password) {
            Some(role) => {
                log::info!("login accepted for {username}");
                self.session.login(&username, role);
                self.login_form = LoginForm::default();
                self.reload_data();
            }
            None => {
                log::info!("login rejected for {username}");
                self.login_form.error = Some("Usuário ou senha incorretos".to_string());
            }
        }
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.session.username() {
            log::info!("logout: {user}");
        }
        self.session.logout();
        self.login_form = LoginForm::default();
        self.filter = FilterSpec::default();
        self.recompute();
    }

    // -- data --------------------------------------------------------------

    /// Re-read the data file (or fall back) and reset the filter, since the
    /// old team/quadrant selection may not exist in the new data.
    pub fn reload_data(&mut self) {
        let (dataset, used_fallback) = loader::load_or_fallback(&self.data_path, &self.thresholds);
        self.dataset = dataset;
        self.used_fallback = used_fallback;
        self.filter = FilterSpec::default();
        self.recompute();
    }

    /// Switch to another data file (File → Open…).
    pub fn open_data_file(&mut self, path: PathBuf) {
        self.data_path = path;
        self.reload_data();
    }

    // -- filters -----------------------------------------------------------

    pub fn set_quadrant_filter(&mut self, quadrant: Option<Quadrant>) {
        self.filter.quadrant = quadrant;
        self.recompute();
    }

    pub fn set_team_filter(&mut self, team: Option<String>) {
        self.filter.team = team;
        self.recompute();
    }

    /// Clamp the slider pair so min never crosses max, then recompute.
    pub fn set_score_range(&mut self, min: f64, max: f64) {
        let min = min.clamp(0.0, 100.0);
        let max = max.clamp(0.0, 100.0);
        self.filter.score_min = min.min(max);
        self.filter.score_max = max.max(min);
        self.recompute();
    }

    /// One full pass: filter → aggregate → build chart. Runs after every
    /// login, reload, or filter change.
    pub fn recompute(&mut self) {
        self.visible_indices = filtered_indices(&self.dataset, &self.filter);
        self.summary = summarize(&self.dataset, &self.visible_indices);
        self.chart = build_chart(&self.dataset, &self.visible_indices, &self.thresholds);
    }
}
