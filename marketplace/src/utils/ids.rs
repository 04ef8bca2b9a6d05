//! Timestamp-derived record ids

use chrono::Utc;
use parking_lot::Mutex;

/// Hands out unix-millisecond ids that never repeat within a process
///
/// Two calls inside the same millisecond get consecutive values, so ids stay
/// unique and keep creation order.
#[derive(Debug)]
pub struct IdGenerator {
    prefix: &'static str,
    last: Mutex<i64>,
}

impl IdGenerator {
    pub fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            last: Mutex::new(0),
        }
    }

    /// Ids for listings: `"1717171717171"`
    pub fn listings() -> Self {
        Self::new("")
    }

    /// Ids for transactions: `"t1717171717171"`
    pub fn transactions() -> Self {
        Self::new("t")
    }

    /// Continue after the largest id already issued
    ///
    /// Keeps new ids unique against persisted ones even if the clock went
    /// backwards since they were written. Ids without this prefix or with a
    /// non-numeric tail are ignored.
    pub fn resume_after<'a>(self, existing: impl IntoIterator<Item = &'a str>) -> Self {
        let highest = existing
            .into_iter()
            .filter_map(|id| id.strip_prefix(self.prefix))
            .filter_map(|tail| tail.parse::<i64>().ok())
            .max();
        if let Some(highest) = highest {
            let mut last = self.last.lock();
            *last = (*last).max(highest);
        }
        self
    }

    pub fn next_id(&self) -> String {
        format!("{}{}", self.prefix, self.next_millis())
    }

    fn next_millis(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let mut last = self.last.lock();
        let next = now.max(*last + 1);
        *last = next;
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_strictly_increasing() {
        let ids = IdGenerator::listings();
        let values: Vec<i64> = (0..200)
            .map(|_| ids.next_id().parse().unwrap())
            .collect();
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_resume_after_future_ids() {
        let ahead = Utc::now().timestamp_millis() + 3_600_000;
        let existing = ["t5".to_string(), format!("t{ahead}"), "legacy".to_string()];
        let ids = IdGenerator::transactions().resume_after(existing.iter().map(String::as_str));

        assert_eq!(ids.next_id(), format!("t{}", ahead + 1));
        assert_eq!(ids.next_id(), format!("t{}", ahead + 2));
    }

    #[test]
    fn test_resume_after_ignores_other_prefixes() {
        let ahead = Utc::now().timestamp_millis() + 3_600_000;
        let existing = [format!("t{ahead}")];
        // listing ids have no prefix, so "t..." does not parse as one
        let ids = IdGenerator::listings().resume_after(existing.iter().map(String::as_str));
        let next: i64 = ids.next_id().parse().unwrap();
        assert!(next < ahead);
    }

    #[test]
    fn test_transaction_prefix() {
        let id = IdGenerator::transactions().next_id();
        assert!(id.starts_with('t'));
        assert!(id[1..].parse::<i64>().is_ok());
    }
}
