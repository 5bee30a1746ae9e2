// SPDX-License-Identifier: MPL-2.0
//! Simulated submissions: contact message, newsletter sign-up, CV download.
//!
//! Nothing leaves the machine. Each submission holds its button in a busy
//! state for a fixed delay, then resets and reports completion so the app can
//! show a toast. Deadlines are checked by [`Forms::tick`] with the same clock
//! that drives the carousel.

use crate::config::{
    CONTACT_SEND_DELAY_MS, CV_FINISH_DELAY_MS, CV_PREPARE_DELAY_MS, NEWSLETTER_DELAY_MS,
};
use std::fmt;
use std::time::{Duration, Instant};

/// File name offered for the simulated CV download.
pub const CV_FILE_NAME: &str = "portfolio_cv.pdf";

/// The three simulated flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Contact,
    Newsletter,
    CvDownload,
}

impl FormKind {
    /// i18n key of the toast shown once the flow completes.
    #[must_use]
    pub fn success_key(self) -> &'static str {
        match self {
            FormKind::Contact => "notification-contact-sent",
            FormKind::Newsletter => "notification-newsletter-subscribed",
            FormKind::CvDownload => "notification-cv-download-started",
        }
    }
}

/// Input fields that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Field::Name => "contact-name-label",
            Field::Email => "contact-email-label",
            Field::Subject => "contact-subject-label",
            Field::Message => "contact-message-label",
        }
    }
}

/// Reasons a submission is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    MissingField(Field),
    InvalidEmail,
}

impl FormError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            FormError::MissingField(_) => "notification-form-missing-field",
            FormError::InvalidEmail => "notification-form-invalid-email",
        }
    }
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::MissingField(field) => write!(f, "Required field {:?} is empty", field),
            FormError::InvalidEmail => write!(f, "E-mail address is malformed"),
        }
    }
}

impl std::error::Error for FormError {}

/// Lifecycle of one simulated request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// Button disabled with a spinner label until the deadline.
    Submitting { until: Instant },
    /// Second stage of the CV flow.
    Finishing { until: Instant },
}

impl Phase {
    #[must_use]
    pub fn is_busy(self) -> bool {
        !matches!(self, Phase::Idle)
    }
}

/// Result of pressing a submit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submit {
    Started,
    /// A request is already in flight; the press is ignored.
    InFlight,
}

/// Returns true for `local@domain.tld` shaped addresses.
#[must_use]
pub fn is_email_shaped(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((name, tld)) => !name.is_empty() && !tld.is_empty(),
        None => false,
    }
}

fn require(value: &str, field: Field) -> Result<(), FormError> {
    if value.trim().is_empty() {
        Err(FormError::MissingField(field))
    } else {
        Ok(())
    }
}

fn require_email(value: &str) -> Result<(), FormError> {
    require(value, Field::Email)?;
    if is_email_shaped(value) {
        Ok(())
    } else {
        Err(FormError::InvalidEmail)
    }
}

/// Contact form fields and submission state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    phase: Phase,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), FormError> {
        require(&self.name, Field::Name)?;
        require_email(&self.email)?;
        require(&self.subject, Field::Subject)?;
        require(&self.message, Field::Message)
    }

    /// Starts the simulated send if the form is idle and valid.
    pub fn submit(&mut self, now: Instant) -> Result<Submit, FormError> {
        if self.phase.is_busy() {
            return Ok(Submit::InFlight);
        }
        self.validate()?;
        self.phase = Phase::Submitting {
            until: now + Duration::from_millis(CONTACT_SEND_DELAY_MS),
        };
        log::info!("Contact form submitted (subject: {:?})", self.subject.trim());
        Ok(Submit::Started)
    }

    fn poll(&mut self, now: Instant) -> bool {
        match self.phase {
            Phase::Submitting { until } if now >= until => {
                *self = Self::default();
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }
}

/// Newsletter sign-up field and submission state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewsletterForm {
    pub email: String,
    phase: Phase,
}

impl NewsletterForm {
    pub fn validate(&self) -> Result<(), FormError> {
        require_email(&self.email)
    }

    pub fn submit(&mut self, now: Instant) -> Result<Submit, FormError> {
        if self.phase.is_busy() {
            return Ok(Submit::InFlight);
        }
        self.validate()?;
        self.phase = Phase::Submitting {
            until: now + Duration::from_millis(NEWSLETTER_DELAY_MS),
        };
        log::info!("Newsletter subscription requested");
        Ok(Submit::Started)
    }

    fn poll(&mut self, now: Instant) -> bool {
        match self.phase {
            Phase::Submitting { until } if now >= until => {
                *self = Self::default();
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }
}

/// Two-stage CV download button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CvDownload {
    phase: Phase,
}

impl CvDownload {
    pub fn request(&mut self, now: Instant) -> Submit {
        if self.phase.is_busy() {
            return Submit::InFlight;
        }
        self.phase = Phase::Submitting {
            until: now + Duration::from_millis(CV_PREPARE_DELAY_MS),
        };
        Submit::Started
    }

    fn poll(&mut self, now: Instant) -> bool {
        match self.phase {
            Phase::Submitting { until } if now >= until => {
                log::info!("Serving {}", CV_FILE_NAME);
                self.phase = Phase::Finishing {
                    until: until + Duration::from_millis(CV_FINISH_DELAY_MS),
                };
                // Both stages may have elapsed between two ticks.
                self.poll(now)
            }
            Phase::Finishing { until } if now >= until => {
                self.phase = Phase::Idle;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }
}

/// All simulated forms on the page.
#[derive(Debug, Clone, Default)]
pub struct Forms {
    pub contact: ContactForm,
    pub newsletter: NewsletterForm,
    pub cv: CvDownload,
}

impl Forms {
    /// Returns true while any request is in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.contact.phase.is_busy() || self.newsletter.phase.is_busy() || self.cv.phase.is_busy()
    }

    /// Advances every pending request and returns the flows that completed.
    pub fn tick(&mut self, now: Instant) -> Vec<FormKind> {
        let mut completed = Vec::new();
        if self.contact.poll(now) {
            completed.push(FormKind::Contact);
        }
        if self.newsletter.poll(now) {
            completed.push(FormKind::Newsletter);
        }
        if self.cv.poll(now) {
            completed.push(FormKind::CvDownload);
        }
        completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_contact() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.org".into(),
            subject: "Hello".into(),
            message: "Nice carousel".into(),
            ..ContactForm::default()
        }
    }

    #[test]
    fn email_shape_checks() {
        assert!(is_email_shaped("a@b.co"));
        assert!(is_email_shaped("  first.last@sub.example.org "));
        assert!(!is_email_shaped("no-at-sign.org"));
        assert!(!is_email_shaped("@example.org"));
        assert!(!is_email_shaped("a@localhost"));
        assert!(!is_email_shaped("a@.org"));
        assert!(!is_email_shaped("a@example."));
        assert!(!is_email_shaped("a@b@c.org"));
        assert!(!is_email_shaped("a b@c.org"));
    }

    #[test]
    fn contact_requires_every_field() {
        let mut form = filled_contact();
        form.subject = "   ".into();
        assert_eq!(
            form.submit(Instant::now()),
            Err(FormError::MissingField(Field::Subject))
        );
        assert_eq!(form.phase(), Phase::Idle);
    }

    #[test]
    fn contact_rejects_malformed_email() {
        let mut form = filled_contact();
        form.email = "ada".into();
        assert_eq!(form.submit(Instant::now()), Err(FormError::InvalidEmail));
        assert_eq!(form.name, "Ada");
    }

    #[test]
    fn contact_completes_after_delay_and_resets() {
        let start = Instant::now();
        let mut forms = Forms {
            contact: filled_contact(),
            ..Forms::default()
        };
        assert_eq!(forms.contact.submit(start), Ok(Submit::Started));
        assert!(forms.is_busy());

        assert!(forms.tick(start + Duration::from_millis(1499)).is_empty());
        assert_eq!(
            forms.tick(start + Duration::from_millis(1500)),
            vec![FormKind::Contact]
        );
        assert_eq!(forms.contact, ContactForm::default());
        assert!(!forms.is_busy());
    }

    #[test]
    fn resubmitting_in_flight_is_ignored() {
        let start = Instant::now();
        let mut form = filled_contact();
        form.submit(start).unwrap();
        let phase = form.phase();
        assert_eq!(
            form.submit(start + Duration::from_millis(100)),
            Ok(Submit::InFlight)
        );
        assert_eq!(form.phase(), phase);
    }

    #[test]
    fn newsletter_completes_after_one_second() {
        let start = Instant::now();
        let mut forms = Forms::default();
        forms.newsletter.email = "reader@example.com".into();
        forms.newsletter.submit(start).unwrap();

        assert!(forms.tick(start + Duration::from_millis(999)).is_empty());
        assert_eq!(
            forms.tick(start + Duration::from_millis(1000)),
            vec![FormKind::Newsletter]
        );
        assert!(forms.newsletter.email.is_empty());
    }

    #[test]
    fn cv_download_runs_two_stages() {
        let start = Instant::now();
        let mut forms = Forms::default();
        assert_eq!(forms.cv.request(start), Submit::Started);
        assert_eq!(forms.cv.request(start), Submit::InFlight);

        assert!(forms.tick(start + Duration::from_millis(1500)).is_empty());
        assert!(matches!(forms.cv.phase(), Phase::Finishing { .. }));
        assert!(forms.tick(start + Duration::from_millis(1999)).is_empty());
        assert_eq!(
            forms.tick(start + Duration::from_millis(2000)),
            vec![FormKind::CvDownload]
        );
        assert_eq!(forms.cv.phase(), Phase::Idle);
    }

    #[test]
    fn cv_download_catches_up_on_late_tick() {
        let start = Instant::now();
        let mut forms = Forms::default();
        forms.cv.request(start);
        assert_eq!(
            forms.tick(start + Duration::from_secs(10)),
            vec![FormKind::CvDownload]
        );
    }
}
