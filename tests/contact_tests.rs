// Host-side tests for contact form validation and acknowledgement.

#![allow(dead_code)]
use site_core::contact::{
    AcknowledgeOnly, ContactForm, ContactSink, Field, FormError, Subject, ACKNOWLEDGEMENT,
};

fn filled() -> ContactForm {
    ContactForm {
        name: " Ada Lovelace ".to_string(),
        email: "ada@example.com".to_string(),
        company: String::new(),
        subject: "demo".to_string(),
        message: "Please call me back.".to_string(),
    }
}

#[test]
fn complete_form_validates() {
    let msg = filled().validate().unwrap();
    assert_eq!(msg.name, "Ada Lovelace");
    assert_eq!(msg.subject, Subject::Demo);
    assert_eq!(msg.company, None);
}

#[test]
fn company_is_kept_when_given() {
    let mut form = filled();
    form.set(Field::Company, "  Analytical Engines  ");
    let msg = form.validate().unwrap();
    assert_eq!(msg.company.as_deref(), Some("Analytical Engines"));
}

#[test]
fn first_missing_field_is_reported() {
    assert_eq!(
        ContactForm::default().validate(),
        Err(FormError::Missing(Field::Name))
    );
    let mut form = filled();
    form.set(Field::Message, "   ");
    assert_eq!(form.validate(), Err(FormError::Missing(Field::Message)));
    let mut form = filled();
    form.set(Field::Subject, "");
    assert_eq!(form.validate(), Err(FormError::Missing(Field::Subject)));
}

#[test]
fn email_needs_one_at_sign() {
    for bad in ["ada", "@example.com", "ada@", "a@b@c", "ada lovelace@example.com"] {
        let mut form = filled();
        form.set(Field::Email, bad);
        assert!(
            matches!(form.validate(), Err(FormError::InvalidEmail(_))),
            "{} accepted",
            bad
        );
    }
}

#[test]
fn unknown_subject_is_rejected() {
    let mut form = filled();
    form.set(Field::Subject, "spam");
    assert!(matches!(form.validate(), Err(FormError::Subject(_))));
}

#[test]
fn subjects_parse_from_option_values() {
    assert_eq!("sales".parse::<Subject>().unwrap(), Subject::Sales);
    assert_eq!(" support ".parse::<Subject>().unwrap(), Subject::Support);
    assert!("Sales".parse::<Subject>().is_err());
    assert_eq!(Subject::Demo.to_string(), "Request a Demo");
    assert_eq!(Subject::ALL.len(), 6);
}

#[test]
fn fields_know_their_names_and_requirements() {
    assert_eq!("company".parse::<Field>().unwrap(), Field::Company);
    assert!(!Field::Company.is_required());
    assert!(Field::Email.is_required());
    assert!("phone".parse::<Field>().is_err());
    let form = filled();
    assert_eq!(form.get(Field::Email), "ada@example.com");
}

#[test]
fn errors_read_naturally() {
    assert_eq!(FormError::Missing(Field::Email).to_string(), "email is required");
    assert_eq!(
        FormError::InvalidEmail("ada".into()).to_string(),
        "`ada` is not an email address"
    );
}

#[test]
fn default_sink_acknowledges() {
    let msg = filled().validate().unwrap();
    let ack = AcknowledgeOnly.submit(msg).unwrap();
    assert_eq!(ack, ACKNOWLEDGEMENT);
}

struct Outbox(Vec<String>);

impl ContactSink for Outbox {
    fn submit(&mut self, message: site_core::contact::ContactMessage) -> Result<String, FormError> {
        self.0.push(message.email);
        Ok("queued".to_string())
    }
}

#[test]
fn custom_sinks_receive_the_message() {
    let mut outbox = Outbox(Vec::new());
    let ack = outbox.submit(filled().validate().unwrap()).unwrap();
    assert_eq!(ack, "queued");
    assert_eq!(outbox.0, vec!["ada@example.com".to_string()]);
}
