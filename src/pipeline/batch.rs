use std::path::{Path, PathBuf};

use rand::Rng;
use rayon::prelude::*;
use tracing::{info, warn};

use crate::{
    config::{Config, GrainConfig},
    error::{Result, StyleError, StylerError},
    photo::{Photo, PhotoLoader},
    pipeline::StylePipeline,
    styles::{CompoundStyleName, GrainSynthesizer, StyleRegistry},
};

/// Ordered, de-duplicated list of compound style names to render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchPlan {
    names: Vec<String>,
}

impl BatchPlan {
    /// Plan from arbitrary names; invalid ones fail individually at run time
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut plan = Self::default();
        for name in names {
            plan.push(name.into());
        }
        plan
    }

    /// The bare frame, then the frame combined with each known color
    ///
    /// Unknown colors are logged and skipped; an unknown frame is an error.
    pub fn for_frame<S: AsRef<str>>(registry: &StyleRegistry, frame: &str, colors: &[S]) -> Result<Self> {
        if !registry.frames().has_style(frame) {
            return Err(StyleError::UnsupportedFrame { key: frame.to_string() }.into());
        }

        let mut plan = Self::default();
        plan.push(frame.to_string());

        for color in colors.iter().map(AsRef::as_ref) {
            if !registry.colors().has_style(color) {
                warn!(
                    "Unknown color style '{}', skipping. Supported: {}",
                    color,
                    registry.colors().keys().join(", ")
                );
                continue;
            }
            plan.push(CompoundStyleName::new(frame, Some(color.to_string())).to_string());
        }

        Ok(plan)
    }

    /// Every color style under one frame
    pub fn all_effects(registry: &StyleRegistry, frame: &str) -> Result<Self> {
        let colors = registry.colors().keys();
        Self::for_frame(registry, frame, colors.as_slice())
    }

    /// Every frame, bare and with every color style
    pub fn all_combinations(registry: &StyleRegistry) -> Self {
        let colors = registry.colors().keys();
        let mut plan = Self::default();
        for frame in registry.frames().keys() {
            plan.push(frame.clone());
            for color in &colors {
                plan.push(format!("{}_{}", frame, color));
            }
        }
        plan
    }

    /// `count` distinct frame/color pairs, each preceded by its bare frame
    ///
    /// `count` is capped at the number of available pairs.
    pub fn random<R: Rng + ?Sized>(registry: &StyleRegistry, count: usize, rng: &mut R) -> Self {
        let frames = registry.frames().keys();
        let colors = registry.colors().keys();
        let total = frames.len() * colors.len();

        if count > total {
            warn!("Only {} combinations exist; generating all of them", total);
        }

        let mut plan = Self::default();
        for index in rand::seq::index::sample(rng, total, count.min(total)) {
            let frame = &frames[index / colors.len()];
            let color = &colors[index % colors.len()];
            plan.push(frame.clone());
            plan.push(format!("{}_{}", frame, color));
        }
        plan
    }

    fn push(&mut self, name: String) {
        if !self.names.contains(&name) {
            self.names.push(name);
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Pair every name with `<output_dir>/<name>.<extension>`
    pub fn jobs(&self, output_dir: &Path, extension: &str) -> Vec<BatchJob> {
        self.names
            .iter()
            .map(|name| BatchJob {
                style: name.clone(),
                output: output_dir.join(format!("{}.{}", name, extension)),
            })
            .collect()
    }
}

/// One render of the batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchJob {
    pub style: String,
    pub output: PathBuf,
}

/// A job that did not produce its file
#[derive(Debug, Clone)]
pub struct JobFailure {
    pub job: BatchJob,
    pub message: String,
}

/// Outcome of a batch run
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub succeeded: Vec<BatchJob>,
    pub failed: Vec<JobFailure>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Runs a [`BatchPlan`] on a rayon pool
///
/// Every job gets its own copy of the source photo and its own grain
/// generator; a failing job is logged and recorded without stopping the rest.
pub struct BatchRunner<'a> {
    pipeline: &'a StylePipeline,
    grain: GrainConfig,
    threads: usize,
}

impl<'a> BatchRunner<'a> {
    pub fn new(pipeline: &'a StylePipeline, config: &Config) -> Self {
        Self {
            pipeline,
            grain: config.grain.clone(),
            threads: config.batch.jobs.max(1),
        }
    }

    /// Load the source once and run the plan against it
    pub fn run_file<P: AsRef<Path>>(
        &self,
        input: P,
        plan: &BatchPlan,
        output_dir: &Path,
        extension: &str,
    ) -> Result<BatchReport> {
        let photo = PhotoLoader::load(input)?;
        self.run(&photo, plan, output_dir, extension)
    }

    pub fn run(
        &self,
        photo: &Photo,
        plan: &BatchPlan,
        output_dir: &Path,
        extension: &str,
    ) -> Result<BatchReport> {
        let jobs = plan.jobs(output_dir, extension);
        info!("🖼️  Rendering {} styles on {} threads", jobs.len(), self.threads);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .build()
            .map_err(|e| StylerError::generic(format!("Failed to build thread pool: {}", e)))?;

        let outcomes: Vec<(BatchJob, Result<()>)> = pool.install(|| {
            jobs.into_par_iter()
                .enumerate()
                .map(|(index, job)| {
                    let mut grain = GrainSynthesizer::from_config(&self.grain, index as u64);
                    let outcome = self.pipeline.apply(photo.clone(), &job.style, &job.output, &mut grain);
                    (job, outcome)
                })
                .collect()
        });

        let styles = self.pipeline.registry().supported_styles();
        let mut report = BatchReport::default();
        for (job, outcome) in outcomes {
            match outcome {
                Ok(()) => {
                    info!("   ✅ {} -> {:?}", job.style, job.output);
                    report.succeeded.push(job);
                }
                Err(e) => {
                    let message = e.user_message(&styles);
                    warn!("   ❌ {} failed: {}", job.style, message);
                    report.failed.push(JobFailure { job, message });
                }
            }
        }

        info!("Batch complete: {} written, {} failed", report.succeeded.len(), report.failed.len());
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::tempdir;

    #[test]
    fn test_for_frame_skips_unknown_colors() {
        let registry = StyleRegistry::new();
        let plan = BatchPlan::for_frame(&registry, "polaroid", &["vintage", "nope", "bw_soft"]).unwrap();
        assert_eq!(plan.names(), &["polaroid", "polaroid_vintage", "polaroid_bw_soft"]);

        assert!(BatchPlan::for_frame(&registry, "circle", &["vintage"]).is_err());
    }

    #[test]
    fn test_all_combinations() {
        let registry = StyleRegistry::new();
        let plan = BatchPlan::all_combinations(&registry);
        assert_eq!(plan.len(), 3 * (1 + 16));
        assert_eq!(plan.names()[0], "original");
        assert_eq!(plan.names()[1], "original_vintage");

        let effects = BatchPlan::all_effects(&registry, "symmetric").unwrap();
        assert_eq!(effects.len(), 17);
    }

    #[test]
    fn test_random_pairs_are_distinct_and_capped() {
        let registry = StyleRegistry::new();
        let mut rng = StdRng::seed_from_u64(8);

        let plan = BatchPlan::random(&registry, 5, &mut rng);
        let pairs = plan.names().iter().filter(|n| n.contains('_')).count();
        assert_eq!(pairs, 5);

        let plan = BatchPlan::random(&registry, 1000, &mut rng);
        let pairs = plan.names().iter().filter(|n| n.contains('_')).count();
        assert_eq!(pairs, 48);
        assert_eq!(plan.len(), 51);
    }

    #[test]
    fn test_job_paths() {
        let plan = BatchPlan::from_names(["polaroid", "polaroid", "original_bw_soft"]);
        let jobs = plan.jobs(Path::new("out"), "jpg");
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[1].output, PathBuf::from("out/original_bw_soft.jpg"));
    }

    #[test]
    fn test_failed_job_does_not_stop_siblings() {
        let dir = tempdir().unwrap();
        let mut config = Config::default();
        config.grain.seed = Some(1);
        config.batch.jobs = 2;

        let pipeline = StylePipeline::new(&config);
        let runner = BatchRunner::new(&pipeline, &config);
        let photo = Photo::new_filled(24, 16, [120, 80, 60]);
        let plan = BatchPlan::from_names(["polaroid_vintage", "polaroid_nonexistent", "original"]);

        let report = runner.run(&photo, &plan, dir.path(), "png").unwrap();
        assert_eq!(report.total(), 3);
        assert_eq!(report.succeeded.len(), 2);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].job.style, "polaroid_nonexistent");
        assert!(report.failed[0].message.contains("nonexistent"));
        assert!(report.failed[0].message.contains("cinematic_fuji"));

        assert!(dir.path().join("polaroid_vintage.png").exists());
        assert!(dir.path().join("original.png").exists());
        assert!(!dir.path().join("polaroid_nonexistent.png").exists());
    }

    #[test]
    fn test_seeded_batch_is_reproducible() {
        let first = tempdir().unwrap();
        let second = tempdir().unwrap();
        let mut config = Config::default();
        config.grain.seed = Some(77);

        let pipeline = StylePipeline::new(&config);
        let runner = BatchRunner::new(&pipeline, &config);
        let photo = Photo::new_filled(16, 16, [200, 100, 50]);
        let plan = BatchPlan::from_names(["symmetric_bw_classic", "original_cinematic_fuji"]);

        runner.run(&photo, &plan, first.path(), "png").unwrap();
        runner.run(&photo, &plan, second.path(), "png").unwrap();

        for name in plan.names() {
            let file = format!("{}.png", name);
            let a = image::open(first.path().join(&file)).unwrap().to_rgb8();
            let b = image::open(second.path().join(&file)).unwrap().to_rgb8();
            assert_eq!(a, b, "{}", name);
        }
    }
}
