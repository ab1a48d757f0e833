//! Stale-response protection for overlapping fetches.
//!
//! Network responses resolve in wall-clock order, not dispatch order; a
//! slow page-1 response must not overwrite the page-2 state the user has
//! since asked for. Every fetch takes a ticket, and only the holder of the
//! newest ticket may write the store.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sequence {
    issued: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl Sequence {
    /// Starts a new fetch, invalidating every ticket issued before.
    pub fn begin(&mut self) -> Ticket {
        self.issued = self.issued.wrapping_add(1);
        Ticket(self.issued)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.issued == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_ticket_wins() {
        let mut seq = Sequence::default();
        let first = seq.begin();
        let second = seq.begin();

        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn ticket_stays_current_until_superseded() {
        let mut seq = Sequence::default();
        let ticket = seq.begin();
        assert!(seq.is_current(ticket));
        assert!(seq.is_current(ticket));

        seq.begin();
        assert!(!seq.is_current(ticket));
    }
}
