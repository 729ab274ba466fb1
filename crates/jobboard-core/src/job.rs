// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Job postings.

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of a job row. Stable across loads.
pub type JobId = i64;

const DEFAULT_LOCATION: &str = "Remote";
const DEFAULT_SALARY: &str = "Competitive";

/// A job posting as stored in the `jobs` table.
///
/// Rows are created by the backend only. Text columns that come back as
/// `null` decode to their defaults so the view layer never has to handle
/// missing values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
	pub id: JobId,
	pub title: String,
	pub company: String,
	#[serde(default = "default_location", deserialize_with = "location_or_remote")]
	pub location: String,
	#[serde(rename = "type", default, deserialize_with = "null_as_default")]
	pub job_type: String,
	#[serde(default = "default_salary", deserialize_with = "salary_or_competitive")]
	pub salary: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub posted: String,
	/// Display-only applicant count. Not a backend column; the state store
	/// fills it in on every load.
	#[serde(default, skip_deserializing)]
	pub applicants: u32,
	#[serde(default, deserialize_with = "null_as_default")]
	pub description: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub requirements: Vec<String>,
	#[serde(default, deserialize_with = "null_as_default")]
	pub logo: String,
}

impl Job {
	/// Creates a job with the given identity and defaults for everything else.
	pub fn new(id: JobId, title: impl Into<String>, company: impl Into<String>) -> Self {
		Self {
			id,
			title: title.into(),
			company: company.into(),
			location: default_location(),
			job_type: String::new(),
			salary: default_salary(),
			posted: String::new(),
			applicants: 0,
			description: String::new(),
			requirements: Vec::new(),
			logo: String::new(),
		}
	}

	/// Returns true if both values refer to the same posting.
	///
	/// Identity is the row id; every other field may differ between loads.
	pub fn same_posting(&self, other: &Job) -> bool {
		self.id == other.id
	}

	pub fn with_applicants(mut self, applicants: u32) -> Self {
		self.applicants = applicants;
		self
	}
}

fn default_location() -> String {
	DEFAULT_LOCATION.to_string()
}

fn default_salary() -> String {
	DEFAULT_SALARY.to_string()
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Deserialize<'de> + Default,
{
	Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn location_or_remote<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_location))
}

fn salary_or_competitive<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_salary))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_decode_full_row() {
		let json = serde_json::json!({
			"id": 7,
			"title": "Engineer",
			"company": "Acme",
			"location": "Berlin",
			"type": "Full-time",
			"salary": "$100k",
			"posted": "2 days ago",
			"description": "Build things",
			"requirements": ["Rust", "SQL"],
			"logo": "https://cdn.example.com/acme.png"
		});

		let job: Job = serde_json::from_value(json).unwrap();
		assert_eq!(job.id, 7);
		assert_eq!(job.job_type, "Full-time");
		assert_eq!(job.requirements, vec!["Rust", "SQL"]);
		assert_eq!(job.applicants, 0);
	}

	#[test]
	fn test_decode_sparse_row_uses_defaults() {
		let json = serde_json::json!({
			"id": 1,
			"title": "Engineer",
			"company": "Acme",
			"location": null,
			"requirements": null
		});

		let job: Job = serde_json::from_value(json).unwrap();
		assert_eq!(job.location, "Remote");
		assert_eq!(job.salary, "Competitive");
		assert!(job.requirements.is_empty());
		assert!(job.description.is_empty());
	}

	#[test]
	fn test_backend_applicants_column_is_ignored() {
		let json = serde_json::json!({
			"id": 1,
			"title": "Engineer",
			"company": "Acme",
			"applicants": 4000
		});

		let job: Job = serde_json::from_value(json).unwrap();
		assert_eq!(job.applicants, 0);
	}

	#[test]
	fn test_same_posting_compares_ids_only() {
		let a = Job::new(1, "Engineer", "Acme");
		let b = Job::new(1, "Senior Engineer", "Acme").with_applicants(12);
		let c = Job::new(2, "Engineer", "Acme");

		assert!(a.same_posting(&b));
		assert!(!a.same_posting(&c));
	}
}
