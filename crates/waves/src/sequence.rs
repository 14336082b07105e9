//! Episode id generation.

/// Whether episode ids restart every year or run through the whole table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EpisodeScope {
    /// One increasing sequence shared by all years.
    #[default]
    Global,
    /// The sequence restarts at its first id for every year.
    PerYear,
}

/// Source of episode ids.
///
/// The scanner calls [`next_id`](Self::next_id) once per run, in year order
/// and then in day order, and [`reset`](Self::reset) at the start of every
/// year when the scope is [`EpisodeScope::PerYear`].
pub trait EpisodeSequence {
    /// Returns the id for the run that is starting.
    fn next_id(&mut self) -> i64;

    /// Restarts the sequence.
    fn reset(&mut self);
}

/// Counter handing out `first, first + 1, ...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpisodeCounter {
    first: i64,
    next: i64,
}

impl EpisodeCounter {
    /// Creates a counter starting at 1.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Creates a counter starting at `first`.
    ///
    /// Ids must stay positive because 0 marks "no episode"; values below 1
    /// are raised to 1.
    pub fn starting_at(first: i64) -> Self {
        let first = first.max(1);
        Self { first, next: first }
    }

    /// Returns the id the next run would receive.
    pub fn peek(&self) -> i64 {
        self.next
    }
}

impl Default for EpisodeCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl EpisodeSequence for EpisodeCounter {
    fn next_id(&mut self) -> i64 {
        let id = self.next;
        self.next += 1;
        id
    }

    fn reset(&mut self) {
        self.next = self.first;
    }
}
