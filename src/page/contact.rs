use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Phone,
    Email,
    Message,
}

impl Field {
    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Your Name *",
            Field::Phone => "Phone Number",
            Field::Email => "Your Email *",
            Field::Message => "Your Message",
        }
    }

    /// Input type attribute. The message field renders as a textarea instead.
    pub fn input_type(self) -> &'static str {
        match self {
            Field::Name | Field::Message => "text",
            Field::Phone => "tel",
            Field::Email => "email",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill in at least Name and Email")]
    MissingRequired,
}

/// What the visitor submitted, kept only long enough to acknowledge it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
}

impl fmt::Display for Submission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Thank you {}! I'll contact you soon at {}",
            self.name, self.email
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Phone => &mut self.phone,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Clears every field on success. A rejected form is left as typed.
    pub fn submit(&mut self) -> Result<Submission, ContactError> {
        // whitespace-only input still counts as filled
        if self.name.is_empty() || self.email.is_empty() {
            return Err(ContactError::MissingRequired);
        }
        let form = std::mem::take(self);
        Ok(Submission {
            name: form.name,
            email: form.email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set(Field::Name, "Ann");
        form.set(Field::Phone, "555-0100");
        form.set(Field::Email, "a@b.com");
        form.set(Field::Message, "hello");
        form
    }

    #[test]
    fn test_set_replaces_single_field() {
        let mut form = filled();
        form.set(Field::Phone, "555-0199");
        assert_eq!(form.get(Field::Phone), "555-0199");
        assert_eq!(form.get(Field::Name), "Ann");
        assert_eq!(form.get(Field::Email), "a@b.com");
        assert_eq!(form.get(Field::Message), "hello");
    }

    #[test]
    fn test_submit_acknowledges_and_clears() {
        let mut form = filled();
        let submission = form.submit().expect("form should be valid");
        assert_eq!(submission.name, "Ann");
        assert_eq!(submission.email, "a@b.com");
        assert_eq!(
            submission.to_string(),
            "Thank you Ann! I'll contact you soon at a@b.com"
        );
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_submit_without_name_keeps_fields() {
        let mut form = filled();
        form.set(Field::Name, "");
        let before = form.clone();
        assert_eq!(form.submit(), Err(ContactError::MissingRequired));
        assert_eq!(form, before);
    }

    #[test]
    fn test_submit_without_email_keeps_fields() {
        let mut form = ContactForm::default();
        form.set(Field::Name, "Ann");
        let err = form.submit().unwrap_err();
        assert_eq!(err.to_string(), "Please fill in at least Name and Email");
        assert_eq!(form.get(Field::Name), "Ann");
    }

    #[test]
    fn test_whitespace_counts_as_filled() {
        let mut form = ContactForm::default();
        form.set(Field::Name, " ");
        form.set(Field::Email, " ");
        assert!(form.submit().is_ok());
    }
}
