use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
pub const FAILURE_MESSAGE: &str = "Failed to send message. Please try again or contact me directly.";

lazy_static! {
    static ref EMAIL_PATTERN: Regex = Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$")
        .expect("email pattern is valid");
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

enum Rule {
    Required(&'static str),
    MinLength(usize, &'static str),
    Email(&'static str),
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Full Name *",
            Field::Email => "Email Address *",
            Field::Subject => "Subject *",
            Field::Message => "Message *",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Name => "Your full name",
            Field::Email => "your.email@example.com",
            Field::Subject => "What's this about?",
            Field::Message => "Tell me about your project or just say hello...",
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Field::Message)
    }

    fn rules(&self) -> [Rule; 2] {
        match self {
            Field::Name => [
                Rule::Required("Name is required"),
                Rule::MinLength(2, "Name must be at least 2 characters"),
            ],
            Field::Email => [
                Rule::Required("Email is required"),
                Rule::Email("Invalid email address"),
            ],
            Field::Subject => [
                Rule::Required("Subject is required"),
                Rule::MinLength(5, "Subject must be at least 5 characters"),
            ],
            Field::Message => [
                Rule::Required("Message is required"),
                Rule::MinLength(10, "Message must be at least 10 characters"),
            ],
        }
    }

    /// The first failing rule's message.
    pub fn validate(&self, value: &str) -> Option<&'static str> {
        self.rules().into_iter().find_map(|rule| match rule {
            Rule::Required(msg) => value.is_empty().then_some(msg),
            Rule::MinLength(min, msg) => (value.chars().count() < min).then_some(msg),
            Rule::Email(msg) => (!EMAIL_PATTERN.is_match(value)).then_some(msg),
        })
    }

    fn next(&self) -> Field {
        match self {
            Field::Name => Field::Email,
            Field::Email => Field::Subject,
            Field::Subject => Field::Message,
            Field::Message => Field::Name,
        }
    }

    fn prev(&self) -> Field {
        match self {
            Field::Name => Field::Message,
            Field::Email => Field::Name,
            Field::Subject => Field::Email,
            Field::Message => Field::Subject,
        }
    }
}

/// A validated message ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitOutcome {
    Success,
    Failure,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Sent,
    Failed,
}

impl SubmitStatus {
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            SubmitStatus::Sent => Some(SUCCESS_MESSAGE),
            SubmitStatus::Failed => Some(FAILURE_MESSAGE),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    FieldChanged { field: Field, value: String },
    FocusMoved(Field),
    FocusedNext,
    FocusedPrev,
    SubmitRequested,
    Submitted(SubmitOutcome),
}

/// Contact form values, validation errors and submission status.
///
/// Validation runs on submit. After the first attempt every edit
/// re-validates the edited field, so errors disappear while typing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    values: BTreeMap<Field, String>,
    errors: BTreeMap<Field, &'static str>,
    focused: Option<Field>,
    status: SubmitStatus,
    attempted: bool,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or_default()
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn focused(&self) -> Field {
        self.focused.unwrap_or(Field::Name)
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    /// The values to send, present only while a submission is in flight.
    pub fn submission(&self) -> Option<Submission> {
        self.is_submitting().then(|| Submission {
            name: self.value(Field::Name).to_string(),
            email: self.value(Field::Email).to_string(),
            subject: self.value(Field::Subject).to_string(),
            message: self.value(Field::Message).to_string(),
        })
    }

    fn validate_field(&mut self, field: Field) {
        match field.validate(self.value(field)) {
            Some(error) => self.errors.insert(field, error),
            None => self.errors.remove(&field),
        };
    }

    fn reset(&mut self) {
        self.values.clear();
        self.errors.clear();
        self.focused = None;
        self.attempted = false;
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::FieldChanged { field, value } => {
                if self.is_submitting() {
                    return;
                }
                self.values.insert(field, value);
                if self.attempted {
                    self.validate_field(field);
                }
            }
            Message::FocusMoved(field) => self.focused = Some(field),
            Message::FocusedNext => self.focused = Some(self.focused().next()),
            Message::FocusedPrev => self.focused = Some(self.focused().prev()),
            Message::SubmitRequested => {
                if self.is_submitting() {
                    return;
                }
                self.attempted = true;
                Field::iter().for_each(|field| self.validate_field(field));
                if self.has_errors() {
                    self.focused = Field::iter().find(|f| self.errors.contains_key(f));
                    return;
                }
                self.status = SubmitStatus::Submitting;
            }
            Message::Submitted(outcome) => {
                if !self.is_submitting() {
                    return;
                }
                match outcome {
                    SubmitOutcome::Success => {
                        self.status = SubmitStatus::Sent;
                        self.reset();
                    }
                    SubmitOutcome::Failure => self.status = SubmitStatus::Failed,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        for (field, value) in [
            (Field::Name, "Ada Lovelace"),
            (Field::Email, "ada@example.com"),
            (Field::Subject, "Analytical engine"),
            (Field::Message, "Let's build something together."),
        ] {
            form.update(Message::FieldChanged {
                field,
                value: value.to_string(),
            });
        }
        form
    }

    #[rstest]
    #[case(Field::Name, "", Some("Name is required"))]
    #[case(Field::Name, "A", Some("Name must be at least 2 characters"))]
    #[case(Field::Name, "Al", None)]
    #[case(Field::Email, "", Some("Email is required"))]
    #[case(Field::Email, "not-an-email", Some("Invalid email address"))]
    #[case(Field::Email, "a@b.c", Some("Invalid email address"))]
    #[case(Field::Email, "Yu.Wang@FZ-Juelich.DE", None)]
    #[case(Field::Subject, "", Some("Subject is required"))]
    #[case(Field::Subject, "Hey", Some("Subject must be at least 5 characters"))]
    #[case(Field::Subject, "Hello", None)]
    #[case(Field::Message, "", Some("Message is required"))]
    #[case(Field::Message, "Too short", Some("Message must be at least 10 characters"))]
    #[case(Field::Message, "Long enough", None)]
    fn test_validate(
        #[case] field: Field,
        #[case] value: &str,
        #[case] expected: Option<&'static str>,
    ) {
        assert_eq!(field.validate(value), expected);
    }

    #[test]
    fn test_min_length_counts_characters() {
        assert_eq!(Field::Name.validate("王宇"), None);
    }

    #[test]
    fn test_submit_empty_form_reports_every_field() {
        let mut form = ContactForm::default();
        form.update(Message::SubmitRequested);

        assert_eq!(form.status(), SubmitStatus::Idle);
        assert_eq!(form.error(Field::Name), Some("Name is required"));
        assert_eq!(form.error(Field::Email), Some("Email is required"));
        assert_eq!(form.error(Field::Subject), Some("Subject is required"));
        assert_eq!(form.error(Field::Message), Some("Message is required"));
        assert_eq!(form.submission(), None);
    }

    #[test]
    fn test_errors_wait_for_first_submit() {
        let mut form = ContactForm::default();
        form.update(Message::FieldChanged {
            field: Field::Name,
            value: "A".to_string(),
        });
        assert!(!form.has_errors());

        form.update(Message::SubmitRequested);
        assert_eq!(
            form.error(Field::Name),
            Some("Name must be at least 2 characters")
        );

        form.update(Message::FieldChanged {
            field: Field::Name,
            value: "Ad".to_string(),
        });
        assert_eq!(form.error(Field::Name), None);
    }

    #[test]
    fn test_submit_moves_focus_to_first_error() {
        let mut form = filled();
        form.update(Message::FieldChanged {
            field: Field::Subject,
            value: "Hi".to_string(),
        });
        form.update(Message::FocusMoved(Field::Message));
        form.update(Message::SubmitRequested);
        assert_eq!(form.focused(), Field::Subject);
    }

    #[test]
    fn test_successful_submission_resets() {
        let mut form = filled();
        form.update(Message::SubmitRequested);
        assert!(form.is_submitting());
        assert_eq!(
            form.submission().map(|s| s.email),
            Some("ada@example.com".to_string())
        );

        form.update(Message::Submitted(SubmitOutcome::Success));
        assert_eq!(form.status(), SubmitStatus::Sent);
        assert_eq!(form.status().notice(), Some(SUCCESS_MESSAGE));
        assert_eq!(form.value(Field::Name), "");
        assert!(!form.has_errors());
    }

    #[test]
    fn test_failed_submission_keeps_values() {
        let mut form = filled();
        form.update(Message::SubmitRequested);
        form.update(Message::Submitted(SubmitOutcome::Failure));
        assert_eq!(form.status(), SubmitStatus::Failed);
        assert_eq!(form.status().notice(), Some(FAILURE_MESSAGE));
        assert_eq!(form.value(Field::Name), "Ada Lovelace");
    }

    #[test]
    fn test_no_edits_or_resubmits_while_submitting() {
        let mut form = filled();
        form.update(Message::SubmitRequested);
        form.update(Message::FieldChanged {
            field: Field::Name,
            value: String::new(),
        });
        form.update(Message::SubmitRequested);
        assert_eq!(form.value(Field::Name), "Ada Lovelace");
        assert!(form.is_submitting());
    }

    #[test]
    fn test_resubmit_clears_previous_notice() {
        let mut form = filled();
        form.update(Message::SubmitRequested);
        form.update(Message::Submitted(SubmitOutcome::Failure));
        form.update(Message::SubmitRequested);
        assert_eq!(form.status(), SubmitStatus::Submitting);
        assert_eq!(form.status().notice(), None);
    }

    #[test]
    fn test_stray_outcome_is_ignored() {
        let mut form = ContactForm::default();
        form.update(Message::Submitted(SubmitOutcome::Success));
        assert_eq!(form.status(), SubmitStatus::Idle);
    }

    #[test]
    fn test_focus_cycles() {
        let mut form = ContactForm::default();
        assert_eq!(form.focused(), Field::Name);
        form.update(Message::FocusedPrev);
        assert_eq!(form.focused(), Field::Message);
        form.update(Message::FocusedNext);
        form.update(Message::FocusedNext);
        assert_eq!(form.focused(), Field::Email);
    }
}
