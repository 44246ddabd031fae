//! Node id generation.

use uuid::Uuid;

pub trait IdFactory {
    fn next_id(&mut self) -> String;
}

/// Random ids (`node-<uuid v4>`).
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdFactory for UuidIds {
    fn next_id(&mut self) -> String {
        format!("node-{}", Uuid::new_v4())
    }
}

/// Deterministic ids: `prefix-1`, `prefix-2`, ...
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("node")
    }
}

impl IdFactory for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

/// Asks `ids` for an id that `used` does not reject.
///
/// A factory that keeps repeating itself gets a numeric suffix appended.
pub(crate) fn fresh_id(ids: &mut dyn IdFactory, used: impl Fn(&str) -> bool) -> String {
    let mut candidate = ids.next_id();
    for _ in 0..16 {
        if !used(&candidate) {
            return candidate;
        }
        candidate = ids.next_id();
    }
    let mut n = 1usize;
    loop {
        let id = format!("{candidate}-{n}");
        if !used(&id) {
            return id;
        }
        n += 1;
    }
}
