// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Applications and the form they are built from.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::job::JobId;
use crate::resume::ResumeFile;

static EMAIL_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Returns true if `email` looks like `local@domain.tld`.
///
/// This is a shape check only: one `@`, no whitespace, and at least one `.`
/// after the `@` with something on both sides of it.
pub fn is_valid_email(email: &str) -> bool {
	EMAIL_REGEX.is_match(email)
}

/// One row of the `applications` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
	pub job_id: JobId,
	pub name: String,
	pub email: String,
	pub phone: String,
	/// Public URL of the uploaded resume; set only after a successful upload.
	pub resume_url: Option<String>,
}

/// Form state behind the application modal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationForm {
	pub name: String,
	pub email: String,
	pub phone: String,
	pub resume_url: Option<String>,
	resume: Option<ResumeFile>,
	resume_touched: bool,
	resume_uploaded: bool,
}

impl ApplicationForm {
	pub fn new(
		name: impl Into<String>,
		email: impl Into<String>,
		phone: impl Into<String>,
	) -> Self {
		Self {
			name: name.into(),
			email: email.into(),
			phone: phone.into(),
			..Default::default()
		}
	}

	/// Records a file picker interaction. `None` means the picker was
	/// dismissed without a file.
	pub fn choose_resume(&mut self, file: Option<ResumeFile>) {
		self.resume = file;
		self.resume_touched = true;
		self.resume_uploaded = false;
	}

	/// Records a successful upload of the chosen resume.
	pub fn mark_resume_uploaded(&mut self, url: impl Into<String>) {
		self.resume_url = Some(url.into());
		self.resume_uploaded = true;
	}

	pub fn resume(&self) -> Option<&ResumeFile> {
		self.resume.as_ref()
	}

	pub fn resume_touched(&self) -> bool {
		self.resume_touched
	}

	pub fn resume_uploaded(&self) -> bool {
		self.resume_uploaded
	}

	/// True when name, email and phone are non-blank, a resume is chosen,
	/// and the email has a valid shape.
	pub fn is_valid(&self) -> bool {
		!self.name.trim().is_empty()
			&& !self.email.trim().is_empty()
			&& !self.phone.trim().is_empty()
			&& self.resume.is_some()
			&& is_valid_email(&self.email)
	}

	/// Builds the row to insert for `job_id` from the current field values.
	pub fn to_application(&self, job_id: JobId) -> Application {
		Application {
			job_id,
			name: self.name.clone(),
			email: self.email.clone(),
			phone: self.phone.clone(),
			resume_url: self.resume_url.clone(),
		}
	}

	/// Clears every field, the chosen file, and both resume flags.
	pub fn reset(&mut self) {
		*self = Self::default();
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn resume() -> ResumeFile {
		ResumeFile::new("resume.pdf", b"%PDF-1.4".to_vec())
	}

	fn filled_form() -> ApplicationForm {
		let mut form = ApplicationForm::new("Alice", "alice@x.com", "555");
		form.choose_resume(Some(resume()));
		form
	}

	#[test]
	fn test_filled_form_is_valid() {
		assert!(filled_form().is_valid());
	}

	#[test]
	fn test_missing_resume_is_invalid() {
		let form = ApplicationForm::new("Alice", "alice@x.com", "555");
		assert!(!form.is_valid());
	}

	#[test]
	fn test_dismissed_picker_clears_resume() {
		let mut form = filled_form();
		form.choose_resume(None);
		assert!(form.resume_touched());
		assert!(!form.is_valid());
	}

	#[test]
	fn test_choose_resume_clears_uploaded_flag() {
		let mut form = filled_form();
		form.mark_resume_uploaded("https://cdn/resume.pdf");
		assert!(form.resume_uploaded());

		form.choose_resume(Some(resume()));
		assert!(!form.resume_uploaded());
	}

	#[test]
	fn test_to_application_copies_fields() {
		let mut form = filled_form();
		form.mark_resume_uploaded("https://cdn/resume.pdf");

		let application = form.to_application(1);
		assert_eq!(
			application,
			Application {
				job_id: 1,
				name: "Alice".to_string(),
				email: "alice@x.com".to_string(),
				phone: "555".to_string(),
				resume_url: Some("https://cdn/resume.pdf".to_string()),
			}
		);
	}

	#[test]
	fn test_reset_clears_everything() {
		let mut form = filled_form();
		form.mark_resume_uploaded("https://cdn/resume.pdf");
		form.reset();

		assert_eq!(form, ApplicationForm::default());
		assert!(form.resume().is_none());
		assert!(!form.resume_touched());
	}

	#[test]
	fn test_application_serializes_as_row() {
		let application = filled_form().to_application(3);
		let json = serde_json::to_value(&application).unwrap();
		assert_eq!(json["job_id"], 3);
		assert_eq!(json["resume_url"], serde_json::Value::Null);
	}

	#[test]
	fn test_email_shapes() {
		assert!(is_valid_email("alice@x.com"));
		assert!(is_valid_email("a.b+c@mail.example.org"));
		assert!(!is_valid_email("alice"));
		assert!(!is_valid_email("alice@x"));
		assert!(!is_valid_email("alice@@x.com"));
		assert!(!is_valid_email("al ice@x.com"));
		assert!(!is_valid_email("@x.com"));
		assert!(!is_valid_email(""));
	}

	proptest! {
		#[test]
		fn simple_emails_are_valid(
			local in "[a-z0-9]{1,12}",
			domain in "[a-z0-9]{1,12}",
			tld in "[a-z]{1,6}",
		) {
			let email = format!("{local}@{domain}.{tld}");
			prop_assert!(is_valid_email(&email));
		}

		#[test]
		fn emails_without_at_are_invalid(s in "[a-z0-9.]{0,30}") {
			prop_assert!(!is_valid_email(&s));
		}

		#[test]
		fn emails_without_dot_after_at_are_invalid(
			local in "[a-z0-9.]{1,12}",
			domain in "[a-z0-9]{1,12}",
		) {
			let email = format!("{local}@{domain}");
			prop_assert!(!is_valid_email(&email));
		}

		#[test]
		fn blank_required_field_invalidates_form(
			blank in "[ \t]{0,4}",
			field in 0usize..3,
		) {
			let mut form = filled_form();
			match field {
				0 => form.name = blank,
				1 => form.email = blank,
				_ => form.phone = blank,
			}
			prop_assert!(!form.is_valid());
		}

		#[test]
		fn malformed_email_invalidates_form(email in "[a-z0-9]{1,20}") {
			let mut form = filled_form();
			form.email = email;
			prop_assert!(!form.is_valid());
		}
	}
}
