// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Plain-text rendering of jobs for the terminal.

use std::fmt::Write;

use jobboard_core::Job;

/// One line per job: id, title, company, location, applicant count.
pub fn job_row(job: &Job, selected: bool) -> String {
	format!(
		"{marker}{id:>5}  {title} · {company} · {location} · {applicants} applicants",
		marker = if selected { '>' } else { ' ' },
		id = job.id,
		title = job.title,
		company = job.company,
		location = job.location,
		applicants = job.applicants,
	)
}

/// Renders every job, marking the rows `is_selected` accepts.
pub fn job_table(jobs: &[Job], is_selected: impl Fn(&Job) -> bool) -> String {
	if jobs.is_empty() {
		return "No jobs found.".to_string();
	}
	jobs
		.iter()
		.map(|job| job_row(job, is_selected(job)))
		.collect::<Vec<_>>()
		.join("\n")
}

pub fn job_details(job: &Job) -> String {
	let mut out = String::new();
	let _ = writeln!(out, "{}", job.title);
	let _ = writeln!(out, "{} · {}", job.company, job.location);

	let mut facts = Vec::new();
	if !job.job_type.is_empty() {
		facts.push(job.job_type.clone());
	}
	facts.push(job.salary.clone());
	if !job.posted.is_empty() {
		facts.push(format!("posted {}", job.posted));
	}
	facts.push(format!("{} applicants", job.applicants));
	let _ = writeln!(out, "{}", facts.join(" · "));

	if !job.description.is_empty() {
		let _ = writeln!(out, "\n{}", job.description);
	}
	if !job.requirements.is_empty() {
		let _ = writeln!(out, "\nRequirements:");
		for requirement in &job.requirements {
			let _ = writeln!(out, "  - {requirement}");
		}
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;

	fn engineer() -> Job {
		let mut job = Job::new(7, "Engineer", "Acme").with_applicants(12);
		job.job_type = "Full-time".to_string();
		job.description = "Build things.".to_string();
		job.requirements = vec!["Rust".to_string(), "SQL".to_string()];
		job
	}

	#[test]
	fn test_row_includes_key_fields() {
		let row = job_row(&engineer(), false);
		assert!(row.contains("    7"));
		assert!(row.contains("Engineer · Acme · Remote · 12 applicants"));
		assert!(row.starts_with(' '));
		assert!(job_row(&engineer(), true).starts_with('>'));
	}

	#[test]
	fn test_empty_table() {
		assert_eq!(job_table(&[], |_| true), "No jobs found.");
	}

	#[test]
	fn test_table_marks_selected_rows() {
		let jobs = vec![engineer(), Job::new(8, "Designer", "Globex")];
		let table = job_table(&jobs, |job| job.id == 8);
		let rows: Vec<&str> = table.lines().collect();
		assert_eq!(rows.len(), 2);
		assert!(rows[0].starts_with(' '));
		assert!(rows[1].starts_with('>'));
		assert!(rows[1].contains("Designer"));
	}

	#[test]
	fn test_details_lists_requirements() {
		let details = job_details(&engineer());
		assert!(details.starts_with("Engineer\nAcme · Remote\n"));
		assert!(details.contains("Full-time · Competitive · 12 applicants"));
		assert!(details.contains("Build things."));
		assert!(details.contains("  - Rust\n  - SQL\n"));
	}

	#[test]
	fn test_details_skips_empty_sections() {
		let details = job_details(&Job::new(1, "Writer", "Initech"));
		assert!(!details.contains("Requirements"));
		assert!(!details.contains("posted"));
	}
}
