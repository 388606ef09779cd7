pub const DEBOUNCE_MS: f64 = 2000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Only the newest ticket is honored, so a burst settles once whatever the
/// timer does.
#[derive(Debug, Clone, Default)]
pub struct DebounceTickets {
    latest: u64,
}

impl DebounceTickets {
    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }

    pub fn cancel(&mut self) {
        self.latest += 1;
    }
}
