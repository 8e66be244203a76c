//! PyO3 bindings for the league feature pipeline.
//!
//! Exposes to Python:
//! - Training set construction from typed JSON records
//! - Feature names in column order
//! - Dataset statistics
//! - Logging setup

use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;

use league_core::{Config as RustConfig, Error as RustError};
use league_dataset::{
    DatasetStats as RustDatasetStats, TrainingSet as RustTrainingSet, TrainingSetBuilder,
};
use league_ingestion::{load_records, parse_records, LeagueBuilder};

fn to_py_err(err: RustError) -> PyErr {
    match err {
        RustError::Io(e) => PyIOError::new_err(e.to_string()),
        other => PyValueError::new_err(other.to_string()),
    }
}

// ============================================================================
// Python-exposed Types
// ============================================================================

/// Feature vectors and one-hot labels, aligned row by row.
#[pyclass]
#[derive(Clone)]
pub struct TrainingSet {
    inner: RustTrainingSet,
}

#[pymethods]
impl TrainingSet {
    #[getter]
    fn feature_names(&self) -> Vec<String> {
        self.inner.feature_names.clone()
    }

    #[getter]
    fn features(&self) -> Vec<Vec<f64>> {
        self.inner.features.clone()
    }

    /// (home win, draw, away win) per row.
    #[getter]
    fn labels(&self) -> Vec<Vec<f64>> {
        self.inner.labels.iter().map(|l| l.to_vec()).collect()
    }

    /// Ingestion index of the game behind each row.
    #[getter]
    fn games(&self) -> Vec<usize> {
        self.inner.games.iter().map(|g| g.0).collect()
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "TrainingSet(rows={}, width={})",
            self.inner.len(),
            self.inner.width()
        )
    }

    /// Serialized form, for handing the set to another process.
    fn to_json(&self) -> PyResult<String> {
        self.inner.to_json().map_err(to_py_err)
    }
}

impl From<RustTrainingSet> for TrainingSet {
    fn from(inner: RustTrainingSet) -> Self {
        TrainingSet { inner }
    }
}

/// Counts of kept and dropped games.
#[pyclass]
#[derive(Clone)]
pub struct DatasetStats {
    #[pyo3(get)]
    pub total_games: usize,
    #[pyo3(get)]
    pub included_games: usize,
    #[pyo3(get)]
    pub excluded_games: usize,
    #[pyo3(get)]
    pub home_wins: usize,
    #[pyo3(get)]
    pub draws: usize,
    #[pyo3(get)]
    pub away_wins: usize,
    #[pyo3(get)]
    pub unknown_values: Vec<usize>,
    #[pyo3(get)]
    pub exclusion_rate: f64,
}

#[pymethods]
impl DatasetStats {
    fn __repr__(&self) -> String {
        format!(
            "DatasetStats(total={}, included={}, excluded={})",
            self.total_games, self.included_games, self.excluded_games
        )
    }
}

impl From<RustDatasetStats> for DatasetStats {
    fn from(s: RustDatasetStats) -> Self {
        DatasetStats {
            exclusion_rate: s.exclusion_rate(),
            total_games: s.total_games,
            included_games: s.included_games,
            excluded_games: s.excluded_games,
            home_wins: s.home_wins,
            draws: s.draws,
            away_wins: s.away_wins,
            unknown_values: s.unknown_values,
        }
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builds training sets from tournament records.
#[pyclass]
pub struct PyTrainingSetBuilder {
    config: RustConfig,
    inner: TrainingSetBuilder,
}

impl PyTrainingSetBuilder {
    fn from_config(config: RustConfig) -> PyResult<Self> {
        let inner = TrainingSetBuilder::new(&config).map_err(to_py_err)?;
        Ok(PyTrainingSetBuilder { config, inner })
    }

    fn build_from_records(
        &self,
        records: &[league_core::TournamentRecord],
    ) -> PyResult<(TrainingSet, DatasetStats)> {
        let league = LeagueBuilder::from_records(&self.config, records).map_err(to_py_err)?;
        let (set, stats) = self.inner.build_with_stats(&league).map_err(to_py_err)?;
        Ok((set.into(), stats.into()))
    }
}

#[pymethods]
impl PyTrainingSetBuilder {
    #[new]
    #[pyo3(signature = (number_of_teams=20, windows=None, include_last_season_place=true))]
    fn new(
        number_of_teams: u32,
        windows: Option<Vec<usize>>,
        include_last_season_place: bool,
    ) -> PyResult<Self> {
        let mut config = RustConfig::default();
        config.league.number_of_teams = number_of_teams;
        if let Some(windows) = windows {
            config.features.windows = windows;
        }
        config.features.include_last_season_place = include_last_season_place;
        Self::from_config(config)
    }

    /// Create from a JSON configuration file.
    #[staticmethod]
    fn from_config_file(path: &str) -> PyResult<Self> {
        let config = RustConfig::from_json_file(path).map_err(to_py_err)?;
        Self::from_config(config)
    }

    /// Feature names in column order.
    fn feature_names(&self) -> Vec<String> {
        self.inner.engine().feature_names()
    }

    /// Width of every feature vector.
    fn width(&self) -> usize {
        self.inner.engine().width()
    }

    /// Build from a JSON records file.
    fn build_from_file(&self, path: &str) -> PyResult<(TrainingSet, DatasetStats)> {
        let records = load_records(path).map_err(to_py_err)?;
        self.build_from_records(&records)
    }

    /// Build from a JSON records string.
    fn build_from_json(&self, json: &str) -> PyResult<(TrainingSet, DatasetStats)> {
        let records = parse_records(json).map_err(to_py_err)?;
        self.build_from_records(&records)
    }
}

// ============================================================================
// Functions
// ============================================================================

/// Install a stderr log subscriber; later calls are no-ops.
#[pyfunction]
#[pyo3(signature = (filter="info"))]
fn init_logging(filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .try_init();
    tracing::debug!(filter, "logging initialised");
}

// ============================================================================
// Module Definition
// ============================================================================

/// League Features - historical match features for Python learners.
#[pymodule]
fn league_features(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Types
    m.add_class::<TrainingSet>()?;
    m.add_class::<DatasetStats>()?;

    // Builder
    m.add_class::<PyTrainingSetBuilder>()?;

    // Functions
    m.add_function(wrap_pyfunction!(init_logging, m)?)?;

    Ok(())
}
