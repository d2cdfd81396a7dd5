//! Single-slot mailbox standing in for the system clipboard.

use std::sync::{Arc, Mutex};

/// Shared slot the copy-URL action writes into and the verification flow
/// reads from. Single writer, single reader.
#[derive(Debug, Clone, Default)]
pub struct UrlMailbox {
    slot: Arc<Mutex<Option<String>>>,
}

impl UrlMailbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write(&self, url: &str) {
        *self.slot.lock().unwrap() = Some(url.to_string());
    }

    pub fn clear(&self) {
        *self.slot.lock().unwrap() = None;
    }

    pub fn read(&self) -> Option<String> {
        self.slot.lock().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read_round_trips() {
        let mailbox = UrlMailbox::new();
        assert_eq!(mailbox.read(), None);

        mailbox.write("https://appX.azurewebsites.net/api/funcAB12");
        assert_eq!(
            mailbox.read().as_deref(),
            Some("https://appX.azurewebsites.net/api/funcAB12")
        );
    }

    #[test]
    fn clear_empties_the_slot() {
        let mailbox = UrlMailbox::new();
        mailbox.write("https://example.com");
        mailbox.clear();
        assert_eq!(mailbox.read(), None);
    }

    #[test]
    fn clones_share_the_slot() {
        let mailbox = UrlMailbox::new();
        let other = mailbox.clone();
        other.write("https://example.com");
        assert_eq!(mailbox.read().as_deref(), Some("https://example.com"));
    }
}
