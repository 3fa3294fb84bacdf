use std::time::Duration;

/// Simulated round trip before a submission completes
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);
pub const SUBMIT_LABEL: &str = "Send Message";
pub const SUBMITTING_LABEL: &str = "Sending...";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InquiryType {
    #[default]
    General,
    Catering,
}

impl InquiryType {
    pub fn as_str(self) -> &'static str {
        match self {
            InquiryType::General => "general",
            InquiryType::Catering => "catering",
        }
    }
}

/// Values typed into the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub inquiry_type: InquiryType,
    pub event_date: String,
    pub guest_count: String,
    pub event_type: String,
    pub message: String,
}

impl ContactFields {
    /// Names of required fields that are still blank
    pub fn missing_required(&self) -> Vec<&'static str> {
        [("name", &self.name), ("email", &self.email), ("phone", &self.phone), ("message", &self.message)]
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| field)
            .collect()
    }

    /// Event fields only apply to catering inquiries
    pub fn shows_event_details(&self) -> bool {
        self.inquiry_type == InquiryType::Catering
    }
}

/// Transient message shown to the visitor after submitting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn submitted() -> Self {
        Self {
            title: "Thank you for your message!".to_string(),
            description: "We'll get back to you as soon as possible.".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Submitting { remaining: Duration },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// Already waiting on a previous submission
    InFlight,
    MissingFields(Vec<&'static str>),
}

/// Contact form with a simulated, non-networked submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub fields: ContactFields,
    state: SubmitState,
    notifications: Vec<Notification>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self { fields: ContactFields::default(), state: SubmitState::Idle, notifications: Vec::new() }
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, SubmitState::Submitting { .. })
    }

    /// The submit control is disabled while a submission is pending
    pub fn submit_enabled(&self) -> bool {
        !self.is_submitting()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() { SUBMITTING_LABEL } else { SUBMIT_LABEL }
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn submit(&mut self) -> Result<(), SubmitError> {
        if self.is_submitting() {
            return Err(SubmitError::InFlight);
        }
        let missing = self.fields.missing_required();
        if !missing.is_empty() {
            return Err(SubmitError::MissingFields(missing));
        }
        self.state = SubmitState::Submitting { remaining: SUBMIT_DELAY };
        Ok(())
    }

    /// Advance the pending submission; completes once the delay has elapsed
    pub fn tick(&mut self, elapsed: Duration) -> SubmitState {
        if let SubmitState::Submitting { remaining } = self.state {
            let remaining = remaining.saturating_sub(elapsed);
            if remaining.is_zero() {
                self.notifications.push(Notification::submitted());
                self.fields = ContactFields::default();
                self.state = SubmitState::Idle;
            } else {
                self.state = SubmitState::Submitting { remaining };
            }
        }
        self.state
    }

    /// Cancel a pending submission without notifying or clearing the fields
    pub fn teardown(&mut self) {
        self.state = SubmitState::Idle;
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.fields.name = "Dana".to_string();
        form.fields.email = "dana@example.com".to_string();
        form.fields.phone = "408-555-0100".to_string();
        form.fields.inquiry_type = InquiryType::Catering;
        form.fields.guest_count = "40".to_string();
        form.fields.message = "Office lunch".to_string();
        form
    }

    #[test]
    fn submit_runs_through_delay_and_resets() {
        let mut form = filled();
        form.submit().unwrap();
        assert!(!form.submit_enabled());
        assert_eq!(form.submit_label(), "Sending...");

        form.tick(Duration::from_millis(1000));
        assert!(form.is_submitting());

        assert_eq!(form.tick(Duration::from_millis(500)), SubmitState::Idle);
        assert_eq!(form.fields, ContactFields::default());
        assert_eq!(form.submit_label(), "Send Message");
        assert_eq!(form.notifications(), &[Notification::submitted()]);
    }

    #[test]
    fn required_fields_are_checked() {
        let mut form = ContactForm::new();
        form.fields.name = "Dana".to_string();
        assert_eq!(form.submit(), Err(SubmitError::MissingFields(vec!["email", "phone", "message"])));
        assert_eq!(form.state(), SubmitState::Idle);
    }

    #[test]
    fn double_submit_is_rejected() {
        let mut form = filled();
        form.submit().unwrap();
        assert_eq!(form.submit(), Err(SubmitError::InFlight));
    }

    #[test]
    fn teardown_cancels_pending_submit() {
        let mut form = filled();
        form.submit().unwrap();
        form.teardown();
        form.tick(SUBMIT_DELAY);
        assert!(form.notifications().is_empty());
        assert_eq!(form.fields.name, "Dana");
    }

    #[test]
    fn event_details_follow_inquiry_type() {
        let mut form = ContactForm::new();
        assert!(!form.fields.shows_event_details());
        form.fields.inquiry_type = InquiryType::Catering;
        assert!(form.fields.shows_event_details());
    }
}
