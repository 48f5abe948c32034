//! Command-line interface for evaluating rotated windows of exemplar images

use crate::analysis::binarize::binarize;
use crate::analysis::patterns::multipoint_histogram;
use crate::analysis::scores::{embed_histograms, scores_from_histograms};
use crate::io::configuration::{
    DEFAULT_PATCH_SIZE, DEFAULT_SAMPLE_COUNT, DEFAULT_SEED, DEFAULT_WINDOW_SIZE,
    EMBEDDING_CSV_SUFFIX, EMBEDDING_PLOT_SUFFIX, ROTATIONS,
};
use crate::io::error::{AnodiError, Result, invalid_parameter};
use crate::io::image::{export_embedding_as_png, load_grayscale};
use crate::io::progress::ProgressManager;
use crate::io::report::{RotationReport, group_label, write_embedding_csv};
use crate::math::scaling::ScalingConfig;
use crate::spatial::patches::{rotate_quarter_turns, sample_patches};
use clap::Parser;
use ndarray::Array2;
use rand::{SeedableRng, rngs::StdRng};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "anodi")]
#[command(
    author,
    version,
    about = "Score inconsistency and diversity of rotated windows against an exemplar image"
)]
/// Command-line arguments for the evaluation tool
pub struct Cli {
    /// Input PNG file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Side length of the counted binary patterns
    #[arg(short, long, default_value_t = DEFAULT_PATCH_SIZE)]
    pub patch_size: usize,

    /// Number of windows sampled per rotation
    #[arg(short = 'n', long, default_value_t = DEFAULT_SAMPLE_COUNT)]
    pub samples: usize,

    /// Side length of sampled windows in pixels
    #[arg(short, long, default_value_t = DEFAULT_WINDOW_SIZE)]
    pub window: usize,

    /// Random seed for window sampling and embedding
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Everything computed for one exemplar image
#[derive(Debug)]
pub struct FileReport {
    /// Source image path
    pub path: PathBuf,
    /// Scores for each rotation, in [`ROTATIONS`] order
    pub rotations: Vec<RotationReport>,
    /// Embedding of every sampled window followed by the reference
    pub coordinates: Array2<f64>,
    /// Group of each embedded row; the reference uses `ROTATIONS.len()`
    pub groups: Vec<usize>,
}

/// Orchestrates batch evaluation of PNG files with progress tracking
pub struct BatchEvaluator {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl BatchEvaluator {
    /// Create a new evaluator with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Evaluate files according to CLI arguments and print their scores
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, evaluation or output writing fails
    pub fn process(&mut self) -> Result<()> {
        self.process_into(&mut std::io::stdout().lock())
    }

    /// Evaluate files and write each file's score lines to `out` as soon as
    /// its outputs are on disk
    ///
    /// Files evaluated before a failure keep their reported scores.
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, evaluation or output writing fails
    pub fn process_into<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            let report = self.evaluate_file(file)?;
            Self::write_outputs(&report)?;
            Self::write_scores(&report, files.len() > 1, out)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn write_scores<W: Write>(report: &FileReport, show_path: bool, out: &mut W) -> Result<()> {
        let to_error = |source| AnodiError::FileSystem {
            path: report.path.clone(),
            operation: "report scores",
            source,
        };

        if show_path {
            writeln!(out, "{}", report.path.display()).map_err(to_error)?;
        }
        for rotation in &report.rotations {
            writeln!(out, "{}", rotation.line()).map_err(to_error)?;
        }
        out.flush().map_err(to_error)
    }

    /// Score and embed rotated windows sampled from one exemplar
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The image cannot be loaded
    /// - The window does not fit the image or is empty
    /// - The patch size does not fit the window
    /// - Fewer than two samples are requested
    pub fn evaluate_file(&mut self, input_path: &Path) -> Result<FileReport> {
        if self.cli.samples < 2 {
            return Err(invalid_parameter(
                "samples",
                &self.cli.samples,
                &"diversity needs at least two windows per rotation",
            ));
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(input_path);
        }

        let reference = binarize(&load_grayscale(input_path)?);
        let reference_histogram = multipoint_histogram(&reference, self.cli.patch_size)?;
        let window = (self.cli.window, self.cli.window);
        let mut rng = StdRng::seed_from_u64(self.cli.seed);

        let mut rotations = Vec::with_capacity(ROTATIONS.len());
        let embedded_count = ROTATIONS.len() * self.cli.samples + 1;
        let mut histograms = Vec::with_capacity(embedded_count);
        let mut groups = Vec::with_capacity(embedded_count);

        for (group, &turns) in ROTATIONS.iter().enumerate() {
            let rotated = rotate_quarter_turns(&reference, turns);
            let windows = sample_patches(&rotated, window, self.cli.samples, &mut rng)?;

            let progress_group = self
                .progress_manager
                .as_mut()
                .map(|pm| pm.start_group(&format!("{}°", group_label(group)), windows.len()));

            let mut group_histograms = Vec::with_capacity(windows.len());
            for sample in &windows {
                group_histograms.push(multipoint_histogram(sample, self.cli.patch_size)?);
                if let (Some(pm), Some(index)) = (self.progress_manager.as_mut(), progress_group) {
                    pm.advance_group(index);
                }
            }

            let scores = scores_from_histograms(&reference_histogram, &group_histograms)?;
            rotations.push(RotationReport {
                degrees: turns * 90,
                scores,
            });

            groups.extend(std::iter::repeat_n(group, group_histograms.len()));
            histograms.extend(group_histograms);
        }

        histograms.push(reference_histogram);
        groups.push(ROTATIONS.len());

        let coordinates = embed_histograms(&histograms, &ScalingConfig::with_seed(self.cli.seed))?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file();
        }

        Ok(FileReport {
            path: input_path.to_path_buf(),
            rotations,
            coordinates,
            groups,
        })
    }

    fn write_outputs(report: &FileReport) -> Result<()> {
        write_embedding_csv(
            &report.coordinates,
            &report.groups,
            &Self::get_output_path(&report.path, EMBEDDING_CSV_SUFFIX),
        )?;
        export_embedding_as_png(
            &report.coordinates,
            &report.groups,
            &Self::get_output_path(&report.path, EMBEDDING_PLOT_SUFFIX),
        )
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if self.cli.target.extension().and_then(|s| s.to_str()) == Some("png") {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_parameter(
                    "target",
                    &self.cli.target.display(),
                    &"target file must be a PNG image",
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if path.extension().and_then(|s| s.to_str()) == Some("png")
                    && !Self::is_generated_output(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &self.cli.target.display(),
                &"target must be a PNG file or directory",
            ))
        }
    }

    fn is_generated_output(path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(EMBEDDING_PLOT_SUFFIX))
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path, EMBEDDING_CSV_SUFFIX);
        if output_path.exists() {
            // Allow print for user feedback for skipped files
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    /// Output path next to the input: `<stem><suffix>`
    pub fn get_output_path(input_path: &Path, suffix: &str) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{suffix}", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
