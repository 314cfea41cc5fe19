//! Main workflow orchestration logic
//!
//! Runs the bump pipeline independent of argument parsing:
//! resolve part, read current version, compute next version, rewrite files, stage.

use std::path::PathBuf;

use crate::config::Config;
use crate::domain::{resolve_bump_mode, Version, VersionBump};
use crate::error::Result;
use crate::git::Stager;
use crate::sync::{self, FileUpdate};
use crate::ui;
use crate::warning::BumpWarning;

/// Arguments for the bump workflow
///
/// Mirrors the CLI Args but can be built without clap.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BumpWorkflowArgs {
    /// Raw `<flag>=major|minor|patch` argument, if one was given
    pub part: Option<String>,

    /// Overrides the configured root directory
    pub root: Option<PathBuf>,

    /// Compute and report only; no writes, no staging
    pub dry_run: bool,

    /// Skip staging even if the configuration enables it
    pub no_stage: bool,
}

/// What happened to the rewritten files in the staging step
#[derive(Debug, Clone, PartialEq)]
pub enum StagingStatus {
    Staged(Vec<PathBuf>),
    Skipped,
    /// Staging failed; the run itself still succeeded
    Failed(String),
}

/// Result of a successful bump workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    pub previous_version: Version,
    pub new_version: Version,
    pub bump: VersionBump,
    /// Empty on a dry run
    pub updated_files: Vec<FileUpdate>,
    pub staging: StagingStatus,
    pub warnings: Vec<BumpWarning>,
    pub dry_run: bool,
}

fn warn(warnings: &mut Vec<BumpWarning>, warning: BumpWarning) {
    ui::display_warning(&warning);
    warnings.push(warning);
}

/// Main bump workflow
///
/// Any error before staging aborts the run. Files already rewritten when a later
/// file fails keep the new version. Staging failures are recorded in the result
/// as [StagingStatus::Failed] and never returned as errors.
///
/// # Arguments
///
/// * `args` - Workflow arguments
/// * `config` - Source file, manifests and staging settings
/// * `stager` - Backend used to add the rewritten files to the index
pub fn run_bump_workflow(
    args: &BumpWorkflowArgs,
    config: &Config,
    stager: &dyn Stager,
) -> Result<WorkflowResult> {
    let mut warnings = Vec::new();

    ui::display_status("Bumping version...");

    let resolution = resolve_bump_mode(args.part.as_deref());
    if let Some(warning) = resolution.warning {
        warn(&mut warnings, warning);
    }
    let bump = resolution.bump;
    ui::display_status(&format!("Version part to bump: {}", bump));

    let root = config.resolve_root(args.root.as_deref())?;
    let file_set = config.file_set(&root);

    let current_raw = sync::read_current_version(&file_set.source)?;
    ui::display_status(&format!("Current version: {}", current_raw));

    let previous_version = Version::parse(&current_raw)?;
    let new_version = previous_version.bump(bump)?;
    ui::display_version_change(&previous_version, &new_version, bump);

    if args.dry_run {
        ui::display_dry_run(&file_set, &new_version);
        return Ok(WorkflowResult {
            previous_version,
            new_version,
            bump,
            updated_files: Vec::new(),
            staging: StagingStatus::Skipped,
            warnings,
            dry_run: true,
        });
    }

    let updated_files = sync::sync_files(&file_set, &new_version.to_string())?;
    for update in updated_files.iter().filter(|u| u.previous.is_none()) {
        warn(
            &mut warnings,
            BumpWarning::PatternNotFound {
                path: update.path.clone(),
                pattern: update.kind.to_string(),
            },
        );
    }

    let staging = if args.no_stage || !config.staging.enabled {
        ui::display_status("Staging skipped");
        StagingStatus::Skipped
    } else {
        match stager.stage(&root, &file_set.paths()) {
            Ok(outcome) => {
                ui::display_success("Changed version files added to git.");
                if let Some(output) = outcome.stderr {
                    warn(&mut warnings, BumpWarning::StagingStderr { output });
                }
                StagingStatus::Staged(outcome.staged)
            }
            Err(e) => {
                let reason = e.to_string();
                warn(
                    &mut warnings,
                    BumpWarning::StagingFailed {
                        reason: reason.clone(),
                    },
                );
                StagingStatus::Failed(reason)
            }
        }
    };

    ui::display_success("Version bump complete.");

    Ok(WorkflowResult {
        previous_version,
        new_version,
        bump,
        updated_files,
        staging,
        warnings,
        dry_run: false,
    })
}
