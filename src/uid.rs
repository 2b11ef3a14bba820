// src/uid.rs

use uuid::Uuid;

/// Produces one opaque unique identifier per emitted element.
///
/// KiCad wants a fresh uuid on every pad, line, text and property. Keeping
/// this behind a trait lets tests swap in a deterministic source and compare
/// whole files.
pub trait UidSource {
    fn next_uid(&mut self) -> String;
}

/// Production source: random v4 uuids.
#[derive(Debug, Default)]
pub struct RandomUids;

impl UidSource for RandomUids {
    fn next_uid(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic source for tests: 00000000-0000-0000-0000-000000000000,
/// then -…001, and so on.
#[derive(Debug, Default)]
pub struct SequentialUids(u64);

impl UidSource for SequentialUids {
    fn next_uid(&mut self) -> String {
        let uid = format!("00000000-0000-0000-0000-{:012x}", self.0);
        self.0 += 1;
        uid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_uids_have_uuid_shape() {
        let mut uids = RandomUids;
        let uid = uids.next_uid();
        let groups: Vec<&str> = uid.split('-').collect();
        let lens: Vec<usize> = groups.iter().map(|g| g.len()).collect();
        assert_eq!(lens, vec![8, 4, 4, 4, 12]);
    }

    #[test]
    fn sequential_uids_count_up() {
        let mut uids = SequentialUids::default();
        assert_eq!(uids.next_uid(), "00000000-0000-0000-0000-000000000000");
        assert_eq!(uids.next_uid(), "00000000-0000-0000-0000-000000000001");
    }
}
