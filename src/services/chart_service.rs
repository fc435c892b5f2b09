use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::charts::histogram::DEFAULT_BINS;
use crate::charts::{to_bar_chart, to_histogram, to_scatter, ChartKind, Histogram};
use crate::common::write_string_to_file;
use crate::data_loader::{self, GENRE_COLUMN, REVENUE_COLUMN, YEAR_COLUMN};
use crate::errors::ChartResult;

/// Where a rendered chart ended up
#[derive(Debug, Clone, Serialize)]
pub struct ChartOutput {
    pub kind: ChartKind,
    pub path: PathBuf,
    /// Path under which the server exposes the static directory
    pub url: String,
    /// Values that made it into the chart after coercion
    pub plotted: usize,
}

/// Reads the dataset, builds the requested view and writes it as an image
/// into the static directory.
///
/// Nothing is cached: every call re-reads the dataset and overwrites the
/// previous image for that view. Calls block on file I/O.
#[derive(Debug, Clone)]
pub struct ChartService {
    dataset_path: PathBuf,
    static_dir: PathBuf,
}

impl ChartService {
    pub fn new(dataset_path: impl Into<PathBuf>, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            dataset_path: dataset_path.into(),
            static_dir: static_dir.into(),
        }
    }

    pub fn dataset_path(&self) -> &Path {
        &self.dataset_path
    }

    pub fn output_path(&self, kind: ChartKind) -> PathBuf {
        self.static_dir.join(kind.file_name())
    }

    pub fn render(&self, kind: ChartKind) -> ChartResult<ChartOutput> {
        let dataset = data_loader::load_csv(&self.dataset_path)?;

        let (svg, plotted) = match kind {
            ChartKind::Histogram => {
                let revenue = dataset.numeric_column(REVENUE_COLUMN)?;
                debug!(
                    "Histogram uses {} of {} rows",
                    revenue.len(),
                    dataset.len()
                );
                let histogram = Histogram::from_values(&revenue, DEFAULT_BINS);
                (to_histogram::render(&histogram)?, revenue.len())
            }
            ChartKind::GenreBar => {
                let counts = dataset.value_counts(GENRE_COLUMN)?;
                debug!("Bar chart has {} distinct genres", counts.len());
                let plotted = counts.values().sum();
                (to_bar_chart::render(&counts)?, plotted)
            }
            ChartKind::Scatter => {
                let points = dataset.numeric_pairs(YEAR_COLUMN, REVENUE_COLUMN)?;
                debug!("Scatter uses {} of {} rows", points.len(), dataset.len());
                (to_scatter::render(&points)?, points.len())
            }
        };

        let path = self.output_path(kind);
        write_string_to_file(&path, &svg)?;
        info!("Rendered {:?} chart to {}", kind, path.display());

        Ok(ChartOutput {
            kind,
            url: format!("/static/{}", kind.file_name()),
            path,
            plotted,
        })
    }
}
