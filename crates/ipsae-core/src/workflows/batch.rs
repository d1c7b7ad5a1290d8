use crate::core::models::pair::StructurePair;
use crate::engine::aggregate::{self, Aggregator, WrittenFile};
use crate::engine::config::{BatchConfig, ScoringConfig};
use crate::engine::discovery::discover_pairs;
use crate::engine::error::{EngineError, PairError};
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::scorer::Scorer;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Counts and outputs of a completed batch run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchSummary {
    pub pairs_found: usize,
    pub missing_structures: usize,
    pub pairs_scored: usize,
    pub pairs_failed: usize,
    pub total_rows: usize,
    /// Empty when no pair produced results.
    pub written: Vec<WrittenFile>,
}

impl BatchSummary {
    pub fn has_results(&self) -> bool {
        !self.written.is_empty()
    }
}

/// Runs discovery, scoring and aggregation for every pair under `config.prediction_root`.
///
/// Pairs are processed one after another. A failing pair is logged and skipped; the run only
/// fails for missing inputs, an empty discovery, or an output file that cannot be written.
/// When every pair fails the run succeeds without writing anything.
#[instrument(skip_all, name = "batch_workflow")]
pub fn run(config: &BatchConfig, reporter: &ProgressReporter) -> Result<BatchSummary, EngineError> {
    if !config.prediction_root.exists() {
        return Err(EngineError::OutputDirNotFound(config.prediction_root.clone()));
    }
    if !config.scoring.tool_path.exists() {
        return Err(EngineError::ScoringToolNotFound(
            config.scoring.tool_path.clone(),
        ));
    }

    // The tool runs in `working_dir`, so relative paths are anchored at the process cwd here.
    let prediction_root = absolute_path(&config.prediction_root)?;
    let scoring = ScoringConfig {
        tool_path: absolute_path(&config.scoring.tool_path)?,
        ..config.scoring.clone()
    };
    debug!("Resolved scoring tool to {:?}", scoring.tool_path);

    // === Phase 1: Discovery ===
    reporter.report(Progress::PhaseStart {
        name: "Finding structure pairs",
    });
    info!("Finding structure pairs in {:?}", prediction_root);
    let discovery = discover_pairs(&prediction_root)?;
    reporter.report(Progress::PhaseFinish);

    if discovery.pairs.is_empty() {
        return Err(EngineError::NoStructurePairs(
            config.prediction_root.clone(),
        ));
    }
    info!("Found {} structure pairs to process", discovery.pairs.len());

    let mut summary = BatchSummary {
        pairs_found: discovery.pairs.len(),
        missing_structures: discovery.missing_structures.len(),
        ..Default::default()
    };

    // === Phase 2: Scoring ===
    reporter.report(Progress::PhaseStart {
        name: "Scoring structure pairs",
    });
    reporter.report(Progress::TaskStart {
        total_steps: discovery.pairs.len() as u64,
    });

    let scorer = Scorer::new(&scoring, &config.working_dir);
    let mut aggregator = Aggregator::new();
    let total = discovery.pairs.len();

    for (i, pair) in discovery.pairs.iter().enumerate() {
        info!("=== Processing {}/{}: {} ===", i + 1, total, pair.group_name);
        reporter.report(Progress::StatusUpdate {
            text: pair.cif_stem(),
        });

        match score_pair(&scorer, &mut aggregator, pair) {
            Ok(rows) => {
                info!("  Successfully processed: {} rows", rows);
                summary.pairs_scored += 1;
            }
            Err(e) => {
                warn!("  Skipping {}: {}", pair.cif_file_name(), e);
                reporter.report(Progress::Message(format!(
                    "✗ {}: {}",
                    pair.cif_file_name(),
                    e
                )));
                summary.pairs_failed += 1;
            }
        }
        reporter.report(Progress::TaskIncrement);
    }

    reporter.report(Progress::TaskFinish);
    reporter.report(Progress::PhaseFinish);

    // === Phase 3: Aggregation ===
    let structures = aggregator.table_count();
    let Some(combined) = aggregator.combine() else {
        warn!("No results to save!");
        return Ok(summary);
    };
    info!(
        "Combined {} total rows from {} structures",
        combined.len(),
        structures
    );
    summary.total_rows = combined.len();

    reporter.report(Progress::PhaseStart {
        name: "Writing results",
    });
    let partitions = aggregate::partition(&combined);
    summary.written = aggregate::write_partitions(
        &partitions,
        &config.output.output_dir,
        &config.output.prefix,
    )?;
    reporter.report(Progress::PhaseFinish);

    Ok(summary)
}

fn absolute_path(path: &Path) -> Result<PathBuf, EngineError> {
    std::path::absolute(path)
        .map_err(|e| EngineError::Internal(format!("Cannot resolve path {:?}: {}", path, e)))
}

fn score_pair(
    scorer: &Scorer,
    aggregator: &mut Aggregator,
    pair: &StructurePair,
) -> Result<usize, PairError> {
    let report = scorer.score(pair)?;
    aggregator.add_report(pair, &report)
}
