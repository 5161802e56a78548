//! Last-request-wins bookkeeping for asynchronous field fills.
//!
//! A ticket is taken before awaiting; on completion only the newest ticket for
//! a field may apply its result.

/// Form field filled by an asynchronous request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Position,
    Image,
}

/// Proof that a request was started for one field at one generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    field: FormField,
    generation: u64,
}

/// Per-field generation counter.
#[derive(Debug)]
pub struct Supersession {
    field: FormField,
    latest: u64,
}

impl Supersession {
    pub fn new(field: FormField) -> Self {
        Self { field, latest: 0 }
    }

    /// Starts a request, superseding every earlier one.
    pub fn begin(&mut self) -> RequestTicket {
        self.latest += 1;
        RequestTicket {
            field: self.field,
            generation: self.latest,
        }
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.field == self.field && ticket.generation == self.latest
    }

    /// Supersedes all in-flight requests without starting a new one.
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::{FormField, Supersession};

    #[test]
    fn newer_ticket_supersedes_older() {
        let mut requests = Supersession::new(FormField::Image);
        let first = requests.begin();
        let second = requests.begin();

        assert!(!requests.is_current(first));
        assert!(requests.is_current(second));

        requests.invalidate();
        assert!(!requests.is_current(second));
    }

    #[test]
    fn ticket_for_other_field_is_never_current() {
        let mut image = Supersession::new(FormField::Image);
        let mut position = Supersession::new(FormField::Position);
        let _ = image.begin();
        let position_ticket = position.begin();

        assert!(!image.is_current(position_ticket));
    }
}
