use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use release_bump::cli::{run_bump_workflow, BumpWorkflowArgs, StagingStatus};
use release_bump::{config, git, ui};

#[derive(clap::Parser)]
#[command(
    name = "release-bump",
    about = "Bump the project version in source and manifest files and stage them for commit"
)]
struct Args {
    #[arg(
        allow_hyphen_values = true,
        value_name = "FLAG=PART",
        help = "Version part to bump, e.g. --part=minor (major|minor|patch, default patch)"
    )]
    part: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(short, long, help = "Directory version file paths are relative to")]
    root: Option<PathBuf>,

    #[arg(long, help = "Preview the new version without writing or staging files")]
    dry_run: bool,

    #[arg(long, help = "Rewrite files but do not stage them")]
    no_stage: bool,

    #[arg(long, help = "Show the configured version files and exit")]
    list: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    if args.list {
        let root = match config.resolve_root(args.root.as_deref()) {
            Ok(root) => root,
            Err(e) => {
                ui::display_error(&format!("Error resolving root: {}", e));
                std::process::exit(1);
            }
        };
        ui::display_file_set(&config.file_set(&root));
        return Ok(());
    }

    let stager = git::stager_for(&config.staging);
    let workflow_args = BumpWorkflowArgs {
        part: args.part,
        root: args.root,
        dry_run: args.dry_run,
        no_stage: args.no_stage,
    };

    match run_bump_workflow(&workflow_args, &config, stager.as_ref()) {
        Ok(result) => {
            if let StagingStatus::Failed(_) = result.staging {
                ui::display_status(&format!(
                    "Version files were updated to {} but not staged",
                    result.new_version
                ));
            }
            Ok(())
        }
        Err(e) => {
            ui::display_error(&format!("Error bumping version: {}", e));
            std::process::exit(1);
        }
    }
}
