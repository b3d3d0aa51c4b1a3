//! Identifier generators for newly added widgets.
//!
//! The store never reads the clock. It asks an injected [`IdGenerator`] for a
//! candidate and makes the candidate unique itself, so generators only need to
//! be cheap, not collision-free.

use std::fmt;

use rand::Rng;

/// Length of the random alphanumeric suffix in [`RandomIds`] identifiers.
const RANDOM_ID_SUFFIX_LEN: usize = 20;

/// Prefix for all [`RandomIds`] identifiers.
const RANDOM_ID_PREFIX: &str = "wgt_";

/// Default prefix for [`SequentialIds`].
pub const DEFAULT_SEQUENTIAL_PREFIX: &str = "widget";

/// Source of candidate widget identifiers.
pub trait IdGenerator: fmt::Debug {
    /// Returns the next candidate identifier.
    fn next_id(&mut self) -> String;
}

impl IdGenerator for Box<dyn IdGenerator> {
    fn next_id(&mut self) -> String {
        (**self).next_id()
    }
}

/// Monotonic counter producing `<prefix>-1`, `<prefix>-2`, ...
///
/// # Examples
///
/// ```
/// use widgetboard_core::ids::{IdGenerator, SequentialIds};
///
/// let mut ids = SequentialIds::default();
/// assert_eq!(ids.next_id(), "widget-1");
/// assert_eq!(ids.next_id(), "widget-2");
/// ```
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new(DEFAULT_SEQUENTIAL_PREFIX)
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

/// Random identifiers with the format `wgt_` followed by 20 alphanumeric characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> String {
        const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

        let mut rng = rand::rng();
        let suffix: String = (0..RANDOM_ID_SUFFIX_LEN)
            .map(|_| {
                let idx = rng.random_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect();

        format!("{RANDOM_ID_PREFIX}{suffix}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_ids_count_from_one() {
        let mut ids = SequentialIds::new("w");
        assert_eq!(ids.next_id(), "w-1");
        assert_eq!(ids.next_id(), "w-2");
        assert_eq!(ids.next_id(), "w-3");
    }

    #[test]
    fn sequential_ids_default_prefix() {
        let mut ids = SequentialIds::default();
        assert!(ids.next_id().starts_with("widget-"));
    }

    #[test]
    fn random_id_has_correct_format() {
        let id = RandomIds.next_id();
        assert!(id.starts_with("wgt_"));
        assert_eq!(id.len(), 24); // "wgt_" (4) + 20 alphanumeric
        assert!(id[4..].chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn random_ids_differ() {
        let mut ids = RandomIds;
        assert_ne!(ids.next_id(), ids.next_id());
    }

    #[test]
    fn boxed_generator_delegates() {
        let mut ids: Box<dyn IdGenerator> = Box::new(SequentialIds::new("b"));
        assert_eq!(ids.next_id(), "b-1");
        assert_eq!(ids.next_id(), "b-2");
    }
}
