// SPDX-License-Identifier: MPL-2.0
//! Contact form state, validation, and rendering.
//!
//! The form owns its four fields and the submission status. Submits are
//! validated locally; a valid submission is handed to the app as an event so
//! the relay call runs as an async task. Outcomes come back tagged with a
//! submission id so a stale completion can never clobber the status of a
//! newer submission.

use crate::i18n::fluent::I18n;
use crate::relay::ContactFields;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::layout;
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, text_input, Column, Container, Id, Row, Text},
    Element, Length,
};

/// Widget id of the name input, focused when navigation jumps here.
pub const NAME_INPUT_ID: &str = "contact-name-input";

/// Identifies one submission attempt for stale-outcome filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmissionId(u64);

/// Inline feedback under the form. The payload is an i18n key resolved at
/// render time; the status only changes on explicit submit outcomes and
/// never auto-clears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Success(&'static str),
    Error(&'static str),
}

#[derive(Debug, Clone, Default)]
pub struct State {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    status: SubmissionStatus,
    in_flight: Option<SubmissionId>,
    submission_counter: u64,
}

/// Messages emitted by the form.
#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    PhoneChanged(String),
    MessageChanged(String),
    Submit,
    Reset,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Send {
        submission: SubmissionId,
        fields: ContactFields,
    },
}

impl State {
    #[must_use]
    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    #[must_use]
    pub fn is_sending(&self) -> bool {
        self.in_flight.is_some()
    }

    fn allocate_submission(&mut self) -> SubmissionId {
        self.submission_counter += 1;
        SubmissionId(self.submission_counter)
    }

    fn clear_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.phone.clear();
        self.message.clear();
    }
}

/// Matches the shape `local@domain.tld`: a non-whitespace local part, a
/// single `@`, and a domain with an interior dot. Anything subtler is the
/// relay's problem.
fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    let well_formed = |s: &str| !s.is_empty() && !s.chars().any(char::is_whitespace);
    let has_interior_dot = domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len());

    well_formed(local) && well_formed(domain) && has_interior_dot
}

/// Process a form message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::NameChanged(value) => {
            state.name = value;
            Event::None
        }
        Message::EmailChanged(value) => {
            state.email = value;
            Event::None
        }
        Message::PhoneChanged(value) => {
            state.phone = value;
            Event::None
        }
        Message::MessageChanged(value) => {
            state.message = value;
            Event::None
        }
        Message::Submit => submit(state),
        Message::Reset => {
            // The original reset control clears the fields but leaves the
            // status line alone.
            state.clear_fields();
            Event::None
        }
    }
}

fn submit(state: &mut State) -> Event {
    // A send is already pending; ignore the repeat instead of firing a
    // second in-flight relay call.
    if state.in_flight.is_some() {
        return Event::None;
    }

    let name = state.name.trim();
    let email = state.email.trim();
    let phone = state.phone.trim();
    let message = state.message.trim();

    if name.is_empty() || message.is_empty() || !is_valid_email(email) {
        state.status = SubmissionStatus::Error("contact-error-validation");
        return Event::None;
    }

    let fields = ContactFields {
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        message: message.to_string(),
    };

    let submission = state.allocate_submission();
    state.in_flight = Some(submission);
    state.status = SubmissionStatus::Success("contact-sending");

    Event::Send { submission, fields }
}

/// Applies a relay outcome. Returns false when the outcome belongs to a
/// superseded submission and was ignored.
pub fn handle_outcome(state: &mut State, submission: SubmissionId, accepted: bool) -> bool {
    if state.in_flight != Some(submission) {
        return false;
    }
    state.in_flight = None;

    if accepted {
        state.status = SubmissionStatus::Success("contact-sent");
        state.clear_fields();
    } else {
        state.status = SubmissionStatus::Error("contact-failed");
    }
    true
}

/// Render the contact section.
pub fn view<'a>(i18n: &'a I18n, state: &'a State) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("contact-title")).size(typography::TITLE_LG);

    let mut form = Column::new()
        .spacing(spacing::SM)
        .max_width(sizing::CONTENT_MAX_WIDTH);

    form = form.push(labelled_input(
        i18n.tr("contact-name-label"),
        &state.name,
        Message::NameChanged,
        Some(NAME_INPUT_ID),
    ));
    form = form.push(labelled_input(
        i18n.tr("contact-email-label"),
        &state.email,
        Message::EmailChanged,
        None,
    ));
    form = form.push(labelled_input(
        i18n.tr("contact-phone-label"),
        &state.phone,
        Message::PhoneChanged,
        None,
    ));
    form = form.push(labelled_input(
        i18n.tr("contact-message-label"),
        &state.message,
        Message::MessageChanged,
        None,
    ));

    let send = button(Text::new(i18n.tr("contact-send-button")).size(typography::BODY))
        .on_press(Message::Submit)
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary);
    let reset = button(Text::new(i18n.tr("contact-reset-button")).size(typography::BODY))
        .on_press(Message::Reset)
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::danger);

    form = form.push(
        Row::new()
            .spacing(spacing::SM)
            .push(send)
            .push(reset),
    );

    match state.status {
        SubmissionStatus::Idle => {}
        SubmissionStatus::Success(key) => {
            form = form.push(
                Container::new(Text::new(i18n.tr(key)).size(typography::BODY))
                    .padding(spacing::XS)
                    .width(Length::Fill)
                    .style(styles::container::status_success),
            );
        }
        SubmissionStatus::Error(key) => {
            form = form.push(
                Container::new(Text::new(i18n.tr(key)).size(typography::BODY))
                    .padding(spacing::XS)
                    .width(Length::Fill)
                    .style(styles::container::status_error),
            );
        }
    }

    let content = Column::new()
        .spacing(spacing::MD)
        .push(title)
        .push(form)
        .align_x(Horizontal::Center);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(layout::CONTACT_HEIGHT))
        .padding(layout::SECTION_PADDING)
        .align_x(Horizontal::Center)
        .into()
}

fn labelled_input<'a>(
    label: String,
    value: &str,
    on_input: fn(String) -> Message,
    id: Option<&'static str>,
) -> Element<'a, Message> {
    let mut input = text_input("", value)
        .on_input(on_input)
        .padding(spacing::XS)
        .size(typography::BODY);
    if let Some(id) = id {
        input = input.id(Id::new(id));
    }

    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::BODY_SM))
        .push(input)
        .into()
}
