use crate::cleanup_items::CleanupTarget;
use crate::command::{CommandRunner, Invocation};
use crate::config::CleanConfig;
use crate::platform::Remover;
use tracing::{debug, info};

/// Outcome of one external command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Completed,
    Failed(String),
    Skipped(String),
}

impl StepOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, StepOutcome::Failed(_))
    }
}

/// One attempt at removing a cleanup target
#[derive(Debug, Clone)]
pub struct RemovalAttempt {
    pub target: CleanupTarget,
    pub outcome: StepOutcome,
}

/// Result of a cleaning run. Failures are recorded here and nowhere else.
#[derive(Debug, Clone, Default)]
pub struct CleanReport {
    /// `None` when no build marker was found or the step was disabled
    pub build_clean: Option<StepOutcome>,
    pub removals: Vec<RemovalAttempt>,
}

impl CleanReport {
    pub fn failures(&self) -> usize {
        let build = self
            .build_clean
            .as_ref()
            .map_or(0, |o| usize::from(o.is_failed()));
        build + self.removals.iter().filter(|r| r.outcome.is_failed()).count()
    }

    pub fn has_errors(&self) -> bool {
        self.failures() > 0
    }

    pub fn display_status(&self) -> String {
        let build = match &self.build_clean {
            None => "not run".to_string(),
            Some(StepOutcome::Completed) => "ok".to_string(),
            Some(StepOutcome::Failed(reason)) => format!("failed ({})", reason),
            Some(StepOutcome::Skipped(reason)) => format!("skipped ({})", reason),
        };
        let mut status = vec![
            format!("Build clean: {}", build),
            format!("Targets attempted: {}", self.removals.len()),
        ];

        if self.has_errors() {
            status.push(format!("Errors ignored: {}", self.failures()));
        }

        status.join("\n")
    }
}

/// Best-effort cleaner: optional build-tool clean, then the removal loop
pub struct Cleaner<R> {
    config: CleanConfig,
    remover: Box<dyn Remover>,
    runner: R,
}

impl<R: CommandRunner> Cleaner<R> {
    pub fn new(config: CleanConfig, runner: R) -> Self {
        let remover = config.mode.remover();
        Self {
            config,
            remover,
            runner,
        }
    }

    /// Run the whole procedure. Never fails; every error ends up in the report.
    pub fn run(&self) -> CleanReport {
        println!("Cleaning Directory...");
        debug!(
            "Cleaning {} using {} delete commands",
            self.config.directory.display(),
            self.remover.name()
        );

        let mut report = CleanReport {
            build_clean: self.build_clean(),
            removals: Vec::with_capacity(self.config.targets.len()),
        };

        for target in &self.config.targets {
            let outcome = match self.remover.invocation(target, &self.config.directory) {
                Ok(invocation) => self.execute(&invocation),
                Err(e) => StepOutcome::Failed(e.to_string()),
            };
            debug!("Remove {}: {:?}", target, outcome);
            report.removals.push(RemovalAttempt {
                target: target.clone(),
                outcome,
            });
        }

        report
    }

    fn build_clean(&self) -> Option<StepOutcome> {
        if !self.config.build_clean {
            debug!("Build clean disabled");
            return None;
        }
        let marker = self.config.marker_path();
        if !marker.is_file() {
            debug!("No {} found, skipping build clean", marker.display());
            return None;
        }

        let invocation = Invocation::new(
            self.config.build_program.as_str(),
            self.config.build_args.iter().map(String::as_str),
            &self.config.directory,
        );
        let outcome = self.execute(&invocation);
        debug!("Build clean: {:?}", outcome);
        Some(outcome)
    }

    fn execute(&self, invocation: &Invocation) -> StepOutcome {
        if self.config.dry_run {
            info!("[DRY RUN] Would run: {}", invocation);
            return StepOutcome::Skipped("dry run".to_string());
        }
        match self.runner.run(invocation) {
            Ok(()) => StepOutcome::Completed,
            Err(e) => StepOutcome::Failed(e.to_string()),
        }
    }
}
