//! Print-job spooling over a [`BoundedQueue`]
//!
//! Jobs are flattened into the queue character by character, each followed
//! by [`JOB_SEPARATOR`]. Draining the queue prints characters in arrival
//! order and completes a job at every separator. Job names containing the
//! separator are split at it.

use crate::containers::{BoundedQueue, DEFAULT_CAPACITY};

/// Marks the end of one job in the queue
pub const JOB_SEPARATOR: char = '|';

/// What one dequeue did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpoolEvent {
    Printed(char),
    JobDone(String),
}

#[derive(Debug, Clone, Default)]
pub struct Spooler<const C: usize = DEFAULT_CAPACITY> {
    queue: BoundedQueue<C>,
    printing: String,
}

impl<const C: usize> Spooler<C> {
    pub fn new() -> Self {
        Spooler {
            queue: BoundedQueue::new(),
            printing: String::new(),
        }
    }

    /// Queue a job's characters followed by the separator
    pub fn submit(&mut self, job: &str) {
        for c in job.chars() {
            self.queue.enqueue(c);
        }
        self.queue.enqueue(JOB_SEPARATOR);
    }

    /// Dequeue one character; `None` once the queue is drained
    pub fn next_event(&mut self) -> Option<SpoolEvent> {
        let c = self.queue.try_dequeue().ok()?;
        if c == JOB_SEPARATOR {
            Some(SpoolEvent::JobDone(std::mem::take(&mut self.printing)))
        } else {
            self.printing.push(c);
            Some(SpoolEvent::Printed(c))
        }
    }

    pub fn queue(&self) -> &BoundedQueue<C> {
        &self.queue
    }

    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }
}

/// Spool every job and return job names in completion order
pub fn print_all(jobs: &[&str]) -> Vec<String> {
    let mut spooler: Spooler = Spooler::new();
    for job in jobs {
        spooler.submit(job);
    }
    std::iter::from_fn(|| spooler.next_event())
        .filter_map(|event| match event {
            SpoolEvent::JobDone(job) => Some(job),
            SpoolEvent::Printed(_) => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jobs_complete_in_arrival_order() {
        assert_eq!(print_all(&["Doc1", "Doc2", "Doc3"]), ["Doc1", "Doc2", "Doc3"]);
    }

    #[test]
    fn test_separator_enqueued_per_job() {
        let mut spooler: Spooler<16> = Spooler::new();
        spooler.submit("ab");
        spooler.submit("c");
        assert_eq!(spooler.queue().iter().collect::<String>(), "ab|c|");

        assert_eq!(spooler.next_event(), Some(SpoolEvent::Printed('a')));
        assert_eq!(spooler.next_event(), Some(SpoolEvent::Printed('b')));
        assert_eq!(spooler.next_event(), Some(SpoolEvent::JobDone("ab".into())));
        assert_eq!(spooler.next_event(), Some(SpoolEvent::Printed('c')));
        assert_eq!(spooler.next_event(), Some(SpoolEvent::JobDone("c".into())));
        assert_eq!(spooler.next_event(), None);
        assert!(spooler.is_idle());
    }

    #[test]
    fn test_full_queue_truncates_jobs() {
        let mut spooler: Spooler<4> = Spooler::new();
        spooler.submit("abcdef");
        // Only "abcd" fit; the separator was dropped with the rest.
        let events: Vec<_> = std::iter::from_fn(|| spooler.next_event()).collect();
        assert_eq!(events.len(), 4);
        assert!(events.iter().all(|e| matches!(e, SpoolEvent::Printed(_))));
    }
}
