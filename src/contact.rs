pub mod emailjs;

use serde::Serialize;
use thiserror::Error;

use emailjs::DispatchError;

/// One field of the contact form. Updates replace the whole field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    SenderName,
    SenderEmail,
    Body,
}

/// The message being composed. Snapshotted (cloned) at submit time so the
/// in-flight dispatch is unaffected by further typing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub sender_name: String,
    pub sender_email: String,
    pub body: String,
}

impl ContactMessage {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::SenderName => self.sender_name = value,
            Field::SenderEmail => self.sender_email = value,
            Field::Body => self.body = value,
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::SenderName => &self.sender_name,
            Field::SenderEmail => &self.sender_email,
            Field::Body => &self.body,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("This field is required")]
    Required,
    #[error("Enter a valid email address")]
    InvalidEmail,
}

/// Per-field validation results, rendered inline next to each input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub sender_name: Option<ValidationError>,
    pub sender_email: Option<ValidationError>,
    pub body: Option<ValidationError>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.sender_name.is_none() && self.sender_email.is_none() && self.body.is_none()
    }

    pub fn get(&self, field: Field) -> Option<ValidationError> {
        match field {
            Field::SenderName => self.sender_name,
            Field::SenderEmail => self.sender_email,
            Field::Body => self.body,
        }
    }
}

/// Structural check only. The email provider is the authority on whether an
/// address is deliverable; this just catches obvious typos before a network
/// call is made.
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !value.contains(char::is_whitespace)
}

fn validate(message: &ContactMessage) -> FieldErrors {
    let required = |value: &str| {
        if value.trim().is_empty() {
            Some(ValidationError::Required)
        } else {
            None
        }
    };
    let email = required(&message.sender_email).or_else(|| {
        if is_valid_email(message.sender_email.trim()) {
            None
        } else {
            Some(ValidationError::InvalidEmail)
        }
    });
    FieldErrors {
        sender_name: required(&message.sender_name),
        sender_email: email,
        body: required(&message.body),
    }
}

/// Where the current submit attempt stands. `Failed` carries the rendered
/// reason so the notification can show what the provider said.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Succeeded,
    Failed(String),
}

impl SubmissionStatus {
    pub fn is_sending(&self) -> bool {
        matches!(self, Self::Sending)
    }
}

/// Why `begin_submit` refused to produce a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// A previous attempt is still in flight.
    InFlight,
    /// Validation failed; the per-field errors were recorded.
    Invalid,
}

/// Contact form controller: field state, validation results, and the
/// submission state machine. Pure and synchronous; the async dispatch happens
/// between `begin_submit` and `finish_submit`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    message: ContactMessage,
    status: SubmissionStatus,
    errors: FieldErrors,
}

impl ContactForm {
    pub fn message(&self) -> &ContactMessage {
        &self.message
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Field-level replace on every input event. No validation happens here;
    /// any stale inline error for the edited field is cleared so the user is
    /// not shouted at mid-correction.
    pub fn update_field(&mut self, field: Field, value: String) {
        self.message.set(field, value);
        match field {
            Field::SenderName => self.errors.sender_name = None,
            Field::SenderEmail => self.errors.sender_email = None,
            Field::Body => self.errors.body = None,
        }
    }

    /// Guarded submit. While `Sending` this is a no-op, which is what makes
    /// concurrent submissions impossible. On validation failure the errors
    /// are recorded and status is left untouched. On success the status
    /// becomes `Sending` and the caller gets the snapshot to dispatch.
    pub fn begin_submit(&mut self) -> Result<ContactMessage, SubmitBlocked> {
        if self.status.is_sending() {
            return Err(SubmitBlocked::InFlight);
        }
        let errors = validate(&self.message);
        if !errors.is_empty() {
            self.errors = errors;
            return Err(SubmitBlocked::Invalid);
        }
        self.errors = FieldErrors::default();
        self.status = SubmissionStatus::Sending;
        Ok(self.message.clone())
    }

    /// Apply the dispatch outcome. Success clears the fields; failure keeps
    /// them so the user does not retype. Either way the form is
    /// re-submittable, never stuck in `Sending`.
    pub fn finish_submit(&mut self, outcome: Result<(), DispatchError>) {
        match outcome {
            Ok(()) => {
                self.message.reset();
                self.status = SubmissionStatus::Succeeded;
            }
            Err(err) => {
                self.status = SubmissionStatus::Failed(err.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::default();
        form.update_field(Field::SenderName, "Alice".to_string());
        form.update_field(Field::SenderEmail, "alice@example.com".to_string());
        form.update_field(Field::Body, "Hello".to_string());
        form
    }

    #[test]
    fn update_field_replaces_single_field() {
        let mut form = ContactForm::default();
        form.update_field(Field::SenderName, "Alice".to_string());
        form.update_field(Field::SenderName, "Bob".to_string());
        assert_eq!(form.message().sender_name, "Bob");
        assert_eq!(form.message().sender_email, "");
        assert_eq!(form.message().body, "");
    }

    #[test]
    fn empty_required_field_blocks_dispatch_and_keeps_status() {
        let mut form = ContactForm::default();
        form.update_field(Field::SenderEmail, "b@x.com".to_string());
        form.update_field(Field::Body, "Hi".to_string());

        assert_eq!(form.begin_submit(), Err(SubmitBlocked::Invalid));
        assert_eq!(*form.status(), SubmissionStatus::Idle);
        assert_eq!(
            form.errors().sender_name,
            Some(ValidationError::Required)
        );
        assert!(form.errors().sender_email.is_none());
        assert!(form.errors().body.is_none());
    }

    #[test]
    fn whitespace_only_fields_count_as_empty() {
        let mut form = filled_form();
        form.update_field(Field::Body, "   \t".to_string());

        assert_eq!(form.begin_submit(), Err(SubmitBlocked::Invalid));
        assert_eq!(*form.status(), SubmissionStatus::Idle);
        assert_eq!(form.errors().body, Some(ValidationError::Required));
    }

    #[test]
    fn malformed_email_blocks_dispatch() {
        let mut form = filled_form();
        form.update_field(Field::SenderEmail, "not-an-address".to_string());

        assert_eq!(form.begin_submit(), Err(SubmitBlocked::Invalid));
        assert_eq!(
            form.errors().sender_email,
            Some(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn valid_submit_snapshots_and_enters_sending() {
        let mut form = filled_form();
        let snapshot = form.begin_submit().expect("should submit");

        assert_eq!(snapshot.sender_name, "Alice");
        assert_eq!(snapshot.sender_email, "alice@example.com");
        assert_eq!(snapshot.body, "Hello");
        assert_eq!(*form.status(), SubmissionStatus::Sending);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn second_click_while_sending_is_a_noop() {
        let mut form = filled_form();
        form.begin_submit().expect("should submit");

        assert_eq!(form.begin_submit(), Err(SubmitBlocked::InFlight));
        assert_eq!(*form.status(), SubmissionStatus::Sending);
        assert_eq!(form.message().sender_name, "Alice");
    }

    #[test]
    fn success_resets_fields_and_marks_succeeded() {
        let mut form = filled_form();
        form.begin_submit().expect("should submit");
        form.finish_submit(Ok(()));

        assert_eq!(*form.status(), SubmissionStatus::Succeeded);
        assert_eq!(*form.message(), ContactMessage::default());
    }

    #[test]
    fn failure_keeps_fields_and_carries_reason() {
        let mut form = filled_form();
        let before = form.message().clone();
        form.begin_submit().expect("should submit");
        form.finish_submit(Err(DispatchError::Rejected(
            "invalid public key".to_string(),
        )));

        match form.status() {
            SubmissionStatus::Failed(reason) => {
                assert!(reason.contains("invalid public key"))
            }
            other => panic!("expected Failed, got {other:?}"),
        }
        assert_eq!(*form.message(), before);
    }

    #[test]
    fn failed_form_can_be_resubmitted() {
        let mut form = filled_form();
        form.begin_submit().expect("should submit");
        form.finish_submit(Err(DispatchError::NotConfigured));

        assert!(form.begin_submit().is_ok());
        assert_eq!(*form.status(), SubmissionStatus::Sending);
    }

    #[test]
    fn succeeded_form_requires_fresh_input() {
        let mut form = filled_form();
        form.begin_submit().expect("should submit");
        form.finish_submit(Ok(()));

        // Fields were reset, so a bare resubmit hits validation again.
        assert_eq!(form.begin_submit(), Err(SubmitBlocked::Invalid));
        assert_eq!(*form.status(), SubmissionStatus::Succeeded);
    }

    #[test]
    fn editing_a_field_clears_its_inline_error() {
        let mut form = ContactForm::default();
        assert_eq!(form.begin_submit(), Err(SubmitBlocked::Invalid));
        assert_eq!(form.errors().sender_name, Some(ValidationError::Required));

        form.update_field(Field::SenderName, "A".to_string());
        assert!(form.errors().sender_name.is_none());
        // Untouched fields keep their errors until the next submit.
        assert_eq!(form.errors().body, Some(ValidationError::Required));
    }

    #[test]
    fn email_structure_checks() {
        for ok in ["a@b.co", "first.last@example.com", "x@sub.domain.org"] {
            assert!(is_valid_email(ok), "{ok} should be accepted");
        }
        for bad in [
            "",
            "plain",
            "@example.com",
            "a@",
            "a@nodot",
            "a@.com",
            "a@com.",
            "a@b@c.com",
            "spaced name@example.com",
        ] {
            assert!(!is_valid_email(bad), "{bad} should be rejected");
        }
    }
}
