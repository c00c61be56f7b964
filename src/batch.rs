use std::{
    fs,
    path::{Path, PathBuf},
};

use hashbrown::HashMap;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::{
    charts::{cycles_spent_chart, max_weight_chart, BitmapRenderer, ChartRenderer},
    config::PlotConfig,
    constants::charts::{CYCLES_SPENT_NAME, MAX_WEIGHT_NAME},
    data::ResultTable,
    error::{PlotError, Result},
    trend::TrendLine,
    utils::{check_suffix, create_folder_if_not_exists, file_name, has_suffix, require_dir},
};

/// Where the two charts of a result table are written
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPaths {
    pub max_weight: PathBuf,
    pub cycles_spent: PathBuf,
}

impl OutputPaths {
    /// Fixed names, optionally prefixed with `prefix_` when several tables
    /// share a directory.
    pub fn new(plots_dir: &Path, prefix: Option<&str>, image_format: &str) -> Self {
        let name = |chart: &str| match prefix {
            Some(prefix) => plots_dir.join(format!("{prefix}_{chart}.{image_format}")),
            None => plots_dir.join(format!("{chart}.{image_format}")),
        };

        Self {
            max_weight: name(MAX_WEIGHT_NAME),
            cycles_spent: name(CYCLES_SPENT_NAME),
        }
    }
}

#[derive(Clone, Debug)]
pub struct RenderedTable {
    pub source: PathBuf,
    pub outputs: OutputPaths,
    pub records: usize,
    pub trend: TrendLine,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub rendered: Vec<RenderedTable>,
    /// Tables that were skipped, with the reason
    pub failures: Vec<(PathBuf, PlotError)>,
}

impl BatchReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Finds colony result tables and renders the max weight and cycles spent
/// charts of each into a `plots` folder beside it.
pub struct BatchPlotter<R: ChartRenderer = BitmapRenderer> {
    config: PlotConfig,
    renderer: R,
}

impl BatchPlotter<BitmapRenderer> {
    pub fn new(config: PlotConfig) -> Self {
        let renderer = BitmapRenderer::new(config.style.clone());
        Self { config, renderer }
    }
}

impl<R: ChartRenderer> BatchPlotter<R> {
    pub fn with_renderer(config: PlotConfig, renderer: R) -> Self {
        Self { config, renderer }
    }

    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Renders every table anywhere under `root`. Finding none is not an
    /// error.
    pub fn scan_and_render(&self, root: &Path) -> Result<BatchReport> {
        let tables = self.find_tables(root, None)?;
        if tables.is_empty() {
            info!(root = %root.display(), suffix = %self.config.data_suffix, "no result tables found");
        }

        self.render_all(tables)
    }

    /// Renders the tables directly inside `dir`, failing if there are none.
    pub fn render_directory(&self, dir: &Path) -> Result<BatchReport> {
        let tables = self.find_tables(dir, Some(1))?;
        if tables.is_empty() {
            return Err(PlotError::NotFound {
                dir: dir.to_path_buf(),
                suffix: self.config.data_suffix.clone(),
            });
        }

        self.render_all(tables)
    }

    /// Renders a single table. Output names get the table's stem as a prefix
    /// if other tables live in the same directory.
    pub fn render_table(&self, path: &Path) -> Result<RenderedTable> {
        let dir = parent_dir(path);
        let siblings = fs::read_dir(dir)
            .map_err(|source| PlotError::io(dir, source))?
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .filter(|entry| has_suffix(&entry.path(), &self.config.data_suffix))
            .count();

        self.render_source(path, siblings > 1)
    }

    fn find_tables(&self, root: &Path, max_depth: Option<usize>) -> Result<Vec<PathBuf>> {
        check_suffix(&self.config.data_suffix)?;
        require_dir(root)?;

        let mut walker = WalkDir::new(root)
            .min_depth(1)
            .follow_links(true)
            .sort_by_file_name();
        if let Some(depth) = max_depth {
            walker = walker.max_depth(depth);
        }

        let mut tables = Vec::new();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if self.config.fail_fast => return Err(err.into()),
                Err(err) => {
                    warn!(error = %err, "skipping unreadable entry");
                    continue;
                }
            };

            if entry.file_type().is_file() && has_suffix(entry.path(), &self.config.data_suffix) {
                debug!(path = %entry.path().display(), "found result table");
                tables.push(entry.into_path());
            }
        }

        Ok(tables)
    }

    fn render_all(&self, tables: Vec<PathBuf>) -> Result<BatchReport> {
        let mut per_dir: HashMap<&Path, usize> = HashMap::new();
        for table in &tables {
            *per_dir.entry(parent_dir(table)).or_default() += 1;
        }

        let mut report = BatchReport::default();

        for table in &tables {
            let shared = per_dir.get(parent_dir(table)).copied().unwrap_or(0) > 1;

            match self.render_source(table, shared) {
                Ok(rendered) => report.rendered.push(rendered),
                Err(err) if self.config.fail_fast => return Err(err),
                Err(err) => {
                    warn!(path = %table.display(), error = %err, "skipping result table");
                    report.failures.push((table.clone(), err));
                }
            }
        }

        info!(
            rendered = report.rendered.len(),
            failed = report.failures.len(),
            "batch finished"
        );

        Ok(report)
    }

    fn render_source(&self, path: &Path, prefixed: bool) -> Result<RenderedTable> {
        let plots_dir = parent_dir(path).join(&self.config.plots_dir);
        create_folder_if_not_exists(&plots_dir)?;

        let table = ResultTable::load(path)?;
        let trend = TrendLine::fit(&table.epochs(), &table.cycles_spent()).ok_or_else(|| {
            PlotError::EmptyTable {
                path: path.to_path_buf(),
            }
        })?;

        let prefix = prefixed.then(|| self.table_stem(path));
        let outputs = OutputPaths::new(&plots_dir, prefix.as_deref(), &self.config.image_format);

        let style = &self.config.style;
        self.renderer
            .render(&max_weight_chart(&table, style), &outputs.max_weight)?;
        self.renderer
            .render(&cycles_spent_chart(&table, &trend, style), &outputs.cycles_spent)?;

        debug!(
            path = %path.display(),
            records = table.len(),
            slope = trend.slope,
            direction = %trend.direction,
            "plots generated"
        );

        Ok(RenderedTable {
            source: path.to_path_buf(),
            outputs,
            records: table.len(),
            trend,
        })
    }

    /// File name without the data suffix, e.g. `rand0147` for `rand0147.csv`
    fn table_stem(&self, path: &Path) -> String {
        let name = file_name(path).unwrap_or_default();
        match name.strip_suffix(self.config.data_suffix.as_str()) {
            Some(stem) if !stem.is_empty() => stem.to_string(),
            _ => name.to_string(),
        }
    }
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
