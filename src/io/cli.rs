//! Command-line interface for batch converting images to pixel art

use crate::algorithm::pipeline::{PipelineConfig, PixelArtPipeline};
use crate::color::tint::PaletteStyle;
use crate::io::configuration::{
    DEFAULT_COLORS, DEFAULT_PALETTE_STYLE, DEFAULT_PIXEL_SIZE, OUTPUT_EXTENSION, OUTPUT_SUFFIX,
    SUPPORTED_EXTENSIONS,
};
use crate::io::error::{PixelArtError, Result, WithPath, invalid_argument};
use crate::io::image::{export_grid_as_png, load_grid};
use crate::io::progress::ProgressManager;
use clap::Parser;
use indicatif::MultiProgress;
use log::LevelFilter;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "pixelart")]
#[command(
    author,
    version,
    about = "Convert images to stylized pixel art with a reduced palette"
)]
/// Command-line arguments for the conversion tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input image file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Edge length in output pixels of each art block
    #[arg(short, long, default_value_t = DEFAULT_PIXEL_SIZE)]
    pub pixel_size: u32,

    /// Number of palette colors (2-256)
    #[arg(short, long, default_value_t = DEFAULT_COLORS)]
    pub colors: u32,

    /// Palette tint
    #[arg(long, value_enum, default_value_t = DEFAULT_PALETTE_STYLE)]
    pub palette: PaletteStyle,

    /// Maximum source width in pixels before conversion
    #[arg(short = 'w', long)]
    pub max_width: Option<u32>,

    /// Maximum source height in pixels before conversion
    #[arg(short = 'H', long)]
    pub max_height: Option<u32>,

    /// Directory for converted files (defaults to next to each input)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Print diagnostic messages
    #[arg(short, long)]
    pub verbose: bool,
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

    /// Log level implied by the verbosity flags
    pub const fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else if self.quiet {
            LevelFilter::Error
        } else {
            LevelFilter::Warn
        }
    }

    /// Pipeline configuration built from the arguments
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if any value is out of range
    pub fn pipeline_config(&self) -> Result<PipelineConfig> {
        let config = PipelineConfig {
            pixel_size: self.pixel_size,
            colors: self.colors,
            palette: self.palette,
            max_width: self.max_width,
            max_height: self.max_height,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Orchestrates batch conversion of image files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Display handle for routing log output, when progress is shown
    pub fn multi_progress(&self) -> Option<MultiProgress> {
        self.progress_manager
            .as_ref()
            .map(ProgressManager::multi_progress)
    }

    /// Process files according to CLI arguments
    ///
    /// Returns the paths of every written output file.
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, target discovery or any
    /// file conversion fails
    pub fn process(&mut self) -> Result<Vec<PathBuf>> {
        let config = self.cli.pipeline_config()?;
        let files = self.collect_files()?;

        if files.is_empty() {
            log::warn!("no images to convert in {}", self.cli.target.display());
            return Ok(Vec::new());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let mut outputs = Vec::with_capacity(files.len());
        for (index, file) in files.iter().enumerate() {
            outputs.push(self.process_file(file, index, &config)?);
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(outputs)
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if is_supported_image(target) {
                if self.should_process_file(target) {
                    Ok(vec![target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_argument(
                    "target",
                    &target.display(),
                    &format!("file must be one of: {}", SUPPORTED_EXTENSIONS.join(", ")),
                ))
            }
        } else if target.is_dir() {
            let mut files = Vec::new();
            let entries = std::fs::read_dir(target).map_err(|e| PixelArtError::FileSystem {
                path: target.clone(),
                operation: "read directory",
                source: e,
            })?;
            for entry in entries {
                let path = entry.with_path(target)?.path();
                if path.is_file()
                    && is_supported_image(&path)
                    && !is_output_file(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_argument(
                "target",
                &target.display(),
                &"must be an image file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = self.output_path(input_path);
        if output_path.exists() {
            log::info!("skipping {} (output exists)", input_path.display());
            false
        } else {
            true
        }
    }

    fn process_file(
        &mut self,
        input_path: &Path,
        index: usize,
        config: &PipelineConfig,
    ) -> Result<PathBuf> {
        let start_time = Instant::now();
        let output_path = self.output_path(input_path);

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path);
        }

        let source = load_grid(input_path)?;
        log::debug!(
            "loaded {} ({}x{})",
            input_path.display(),
            source.width(),
            source.height()
        );

        let progress = &mut self.progress_manager;
        let converted = PixelArtPipeline::convert_with_progress(&source, config, |stage| {
            if let Some(pm) = progress.as_mut() {
                pm.update_stage(index, stage);
            }
        })?;

        export_grid_as_png(&converted, &output_path)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index, start_time.elapsed());
        }

        Ok(output_path)
    }

    /// Destination for the converted version of `input_path`
    pub fn output_path(&self, input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!(
            "{}{OUTPUT_SUFFIX}.{OUTPUT_EXTENSION}",
            stem.to_string_lossy()
        );

        match (&self.cli.output_dir, input_path.parent()) {
            (Some(dir), _) => dir.join(output_name),
            (None, Some(parent)) => parent.join(output_name),
            (None, None) => PathBuf::from(output_name),
        }
    }
}

/// Whether the file extension names a decodable image format
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| supported.eq_ignore_ascii_case(ext))
        })
}

// Previous outputs in the same directory are not fed back in
fn is_output_file(path: &Path) -> bool {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX))
}
