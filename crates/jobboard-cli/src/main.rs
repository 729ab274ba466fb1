// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! `jobboard` - browse job postings and apply from the terminal.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use jobboard_backend::SupabaseBackend;
use jobboard_config::JobBoardConfig;
use jobboard_core::{Job, JobId, ResumeFile};
use jobboard_state::components::{AppShell, ApplicationModal, JobDetails, JobList};
use jobboard_state::{JobStore, OrphanPolicy, SubmitOutcome};
use tracing::{debug, info};

mod logging;
mod render;
mod version;

#[derive(Parser, Debug)]
#[command(name = "jobboard", version, about = "Browse job postings and apply")]
struct Args {
	/// Config file (defaults to ./jobboard.toml)
	#[arg(long, global = true, env = "JOBBOARD_CONFIG", value_name = "PATH")]
	config: Option<PathBuf>,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// List every job posting
	Jobs {
		/// Mark this posting as selected
		#[arg(long, value_name = "ID")]
		select: Option<JobId>,
	},
	/// Show one job posting
	Show {
		id: JobId,
	},
	/// Apply to a job posting
	Apply(ApplyArgs),
	/// Show version and build information
	Version,
}

#[derive(ClapArgs, Debug)]
struct ApplyArgs {
	id: JobId,

	#[arg(long)]
	name: String,

	#[arg(long)]
	email: String,

	#[arg(long)]
	phone: String,

	/// Resume file to upload
	#[arg(long, value_name = "PATH")]
	resume: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
	let args = Args::parse();

	if let Command::Version = args.command {
		println!("{}", version::format_version_info());
		return Ok(ExitCode::SUCCESS);
	}

	dotenvy::dotenv().ok();

	let config = match &args.config {
		Some(path) => jobboard_config::load_config_with_file(path),
		None => jobboard_config::load_config(),
	}
	.context("failed to load configuration")?;

	logging::init_tracing(&config.logging);
	info!(backend = %config.backend.url, "starting jobboard");

	let store = build_store(&config)?;
	let policy = OrphanPolicy::from_cleanup_flag(config.submission.cleanup_orphaned_resumes);

	match args.command {
		Command::Jobs { select } => list_jobs(store, select).await,
		Command::Show { id } => show_job(store, id).await,
		Command::Apply(apply) => apply_to_job(store, policy, apply).await,
		Command::Version => Ok(ExitCode::SUCCESS),
	}
}

fn build_store(config: &JobBoardConfig) -> Result<Arc<JobStore>> {
	let backend = SupabaseBackend::builder()
		.base_url(&config.backend.url)
		.api_key(config.backend.api_key.clone())
		.jobs_table(&config.backend.jobs_table)
		.applications_table(&config.backend.applications_table)
		.request_timeout(config.backend.request_timeout())
		.build()
		.context("failed to create backend client")?;

	let store = JobStore::new(Arc::new(backend)).with_resumes_bucket(&config.backend.resumes_bucket);
	Ok(Arc::new(store))
}

async fn mounted_list(store: &Arc<JobStore>) -> JobList {
	let mut list = JobList::new(store.clone());
	list.mount().await;
	list
}

fn find_job(list: &JobList, id: JobId) -> Option<Job> {
	list.jobs().into_iter().find(|job| job.id == id)
}

async fn list_jobs(store: Arc<JobStore>, select: Option<JobId>) -> Result<ExitCode> {
	let list = mounted_list(&store).await;
	if let Some(id) = select {
		match find_job(&list, id) {
			Some(job) => list.select(&job),
			None => {
				eprintln!("No job with id {id}");
				return Ok(ExitCode::FAILURE);
			}
		}
	}
	println!("{}", render::job_table(&list.jobs(), |job| list.is_selected(job)));
	Ok(ExitCode::SUCCESS)
}

async fn show_job(store: Arc<JobStore>, id: JobId) -> Result<ExitCode> {
	let list = mounted_list(&store).await;
	let Some(job) = find_job(&list, id) else {
		eprintln!("No job with id {id}");
		return Ok(ExitCode::FAILURE);
	};

	let details = JobDetails::new(&store);
	list.select(&job);

	match details.job() {
		Some(job) => {
			print!("{}", render::job_details(&job));
			Ok(ExitCode::SUCCESS)
		}
		None => Ok(ExitCode::FAILURE),
	}
}

async fn apply_to_job(
	store: Arc<JobStore>,
	policy: OrphanPolicy,
	args: ApplyArgs,
) -> Result<ExitCode> {
	let resume = ResumeFile::from_path(&args.resume)
		.await
		.context("failed to read resume")?;

	let list = mounted_list(&store).await;
	let Some(job) = find_job(&list, args.id) else {
		eprintln!("No job with id {}", args.id);
		return Ok(ExitCode::FAILURE);
	};

	let shell = AppShell::new();
	let details = JobDetails::new(&store);
	let mut modal = ApplicationModal::new(store.clone(), policy);
	shell.connect(&details, &modal);

	list.select(&job);
	shell.show_job_details();
	details.apply();
	debug!(state = ?shell.state(), "application modal opened");

	modal.set_name(args.name);
	modal.set_email(args.email);
	modal.set_phone(args.phone);
	modal.choose_file(Some(resume));

	if !modal.is_valid_email() {
		eprintln!("Email address is not valid");
	}

	let result = modal.submit().await;
	match result {
		Ok(SubmitOutcome::Submitted { .. }) => {
			if let Some(notice) = modal.notice() {
				println!("{notice}");
			}
			Ok(ExitCode::SUCCESS)
		}
		Ok(SubmitOutcome::Skipped) => {
			eprintln!("Application form is incomplete; nothing was submitted");
			Ok(ExitCode::FAILURE)
		}
		Err(e) => {
			eprintln!("{}", e.user_message());
			Ok(ExitCode::FAILURE)
		}
	}
}
