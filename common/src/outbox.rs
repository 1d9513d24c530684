use tracing::debug;

// Outbox
//
// holds the newest value waiting to be uploaded.  only one upload runs at a
// time, and a value queued while one is out replaces whatever was waiting, so
// the last value sent is always the last value queued
#[derive(Clone, Debug, PartialEq)]
pub struct Outbox<T> {
    waiting: Option<T>,
    in_flight: bool,
}

impl<T> Default for Outbox<T> {
    fn default() -> Self {
        Outbox {
            waiting: None,
            in_flight: false,
        }
    }
}

impl<T> Outbox<T> {
    // returns true when the caller should start draining
    pub fn queue(&mut self, value: T) -> bool {
        if self.waiting.replace(value).is_some() {
            debug!("superseding a queued upload");
        }

        if self.in_flight {
            return false;
        }

        self.in_flight = true;
        true
    }

    // the value to send next; None means the drain is over
    pub fn take_next(&mut self) -> Option<T> {
        let next = self.waiting.take();

        if next.is_none() {
            self.in_flight = false;
        }

        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_value_starts_a_drain() {
        let mut outbox = Outbox::default();

        assert!(outbox.queue(1));
        assert!(!outbox.queue(2));
        assert_eq!(outbox.take_next(), Some(2));
        assert_eq!(outbox.take_next(), None);

        // the drain ended, so the next change starts another
        assert!(outbox.queue(3));
    }

    #[test]
    fn values_queued_during_an_upload_collapse_to_the_newest() {
        let mut outbox = Outbox::default();

        assert!(outbox.queue("first"));
        assert_eq!(outbox.take_next(), Some("first"));

        // the first upload is still out
        assert!(!outbox.queue("second"));
        assert!(!outbox.queue("third"));

        assert_eq!(outbox.take_next(), Some("third"));
        assert_eq!(outbox.take_next(), None);

        assert!(outbox.queue("fourth"));
    }
}
