use tracing::info;

use palazzo_types::Effect;

use crate::ui::components::common::TextInputState;

/// Fields of the reservation form, in focus order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReserveField {
    Name,
    Email,
    Phone,
    Guests,
    Date,
    Time,
    Requests,
}

impl ReserveField {
    pub const ALL: [ReserveField; 7] = [
        ReserveField::Name,
        ReserveField::Email,
        ReserveField::Phone,
        ReserveField::Guests,
        ReserveField::Date,
        ReserveField::Time,
        ReserveField::Requests,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ReserveField::Name => "Name",
            ReserveField::Email => "Email",
            ReserveField::Phone => "Phone",
            ReserveField::Guests => "Guests",
            ReserveField::Date => "Date",
            ReserveField::Time => "Time",
            ReserveField::Requests => "Special requests",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, ReserveField::Phone | ReserveField::Requests)
    }
}

/// Reservation form state: one text input per field plus the focus index.
///
/// Submission is local only; the booking is logged and acknowledged with a
/// status toast, after which the form resets for the next guest.
#[derive(Debug, Default)]
pub struct ReserveFormState {
    pub show: bool,
    inputs: [TextInputState; ReserveField::ALL.len()],
    focused: usize,
}

impl ReserveFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.show = true;
        self.focused = 0;
    }

    pub fn close(&mut self) {
        self.show = false;
    }

    pub fn focused_field(&self) -> ReserveField {
        ReserveField::ALL[self.focused]
    }

    pub fn focused_index(&self) -> usize {
        self.focused
    }

    pub fn input(&self, field: ReserveField) -> &TextInputState {
        &self.inputs[field as usize]
    }

    pub fn input_mut(&mut self, field: ReserveField) -> &mut TextInputState {
        &mut self.inputs[field as usize]
    }

    pub fn focused_input_mut(&mut self) -> &mut TextInputState {
        &mut self.inputs[self.focused]
    }

    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % ReserveField::ALL.len();
    }

    pub fn focus_prev(&mut self) {
        self.focused = (self.focused + ReserveField::ALL.len() - 1) % ReserveField::ALL.len();
    }

    fn first_missing_required(&self) -> Option<ReserveField> {
        ReserveField::ALL
            .into_iter()
            .find(|field| field.is_required() && self.input(*field).is_empty())
    }

    /// Validates and submits the form.
    ///
    /// Incomplete submissions move focus to the first missing required field
    /// and report it without closing the modal.
    pub fn submit(&mut self) -> Vec<Effect> {
        if let Some(missing) = self.first_missing_required() {
            self.focused = missing as usize;
            return vec![Effect::ShowStatus(format!(
                "Please fill in the {} field.",
                missing.label().to_lowercase()
            ))];
        }

        info!(
            name = self.input(ReserveField::Name).input(),
            guests = self.input(ReserveField::Guests).input(),
            date = self.input(ReserveField::Date).input(),
            time = self.input(ReserveField::Time).input(),
            "reservation submitted"
        );

        for input in &mut self.inputs {
            input.clear();
        }
        self.focused = 0;
        vec![
            Effect::ShowStatus("Reservation submitted successfully! We'll contact you soon.".into()),
            Effect::CloseReserveModal,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_required(form: &mut ReserveFormState) {
        form.input_mut(ReserveField::Name).set_input("Ada");
        form.input_mut(ReserveField::Email).set_input("ada@example.com");
        form.input_mut(ReserveField::Guests).set_input("4");
        form.input_mut(ReserveField::Date).set_input("2024-06-01");
        form.input_mut(ReserveField::Time).set_input("19:30");
    }

    #[test]
    fn focus_cycles_through_every_field_and_wraps() {
        let mut form = ReserveFormState::new();
        assert_eq!(form.focused_field(), ReserveField::Name);
        for _ in 0..ReserveField::ALL.len() {
            form.focus_next();
        }
        assert_eq!(form.focused_field(), ReserveField::Name);
        form.focus_prev();
        assert_eq!(form.focused_field(), ReserveField::Requests);
    }

    #[test]
    fn incomplete_submission_flags_the_first_missing_field() {
        let mut form = ReserveFormState::new();
        form.open();
        form.input_mut(ReserveField::Name).set_input("Ada");
        let effects = form.submit();
        assert_eq!(effects.len(), 1);
        assert!(matches!(&effects[0], Effect::ShowStatus(msg) if msg.contains("email")));
        assert_eq!(form.focused_field(), ReserveField::Email);
        assert!(form.show);
    }

    #[test]
    fn optional_fields_may_stay_empty() {
        let mut form = ReserveFormState::new();
        form.open();
        fill_required(&mut form);
        let effects = form.submit();
        assert!(matches!(effects[0], Effect::ShowStatus(_)));
        assert!(matches!(effects[1], Effect::CloseReserveModal));
    }

    #[test]
    fn successful_submission_resets_the_form() {
        let mut form = ReserveFormState::new();
        form.open();
        fill_required(&mut form);
        form.input_mut(ReserveField::Requests).set_input("window seat");
        form.focus_next();
        form.submit();
        assert!(form.input(ReserveField::Name).is_empty());
        assert!(form.input(ReserveField::Requests).is_empty());
        assert_eq!(form.focused_field(), ReserveField::Name);
    }
}
