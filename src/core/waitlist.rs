//! core::waitlist
//!
//! FIFO buffer of students deferred because a course was full.
//!
//! Insertion order is service order. There is no sort invariant and no
//! capacity of its own; the owning course decides when to enqueue.

use std::collections::VecDeque;

use super::roster::StudentRow;
use super::student::StudentRef;
use super::types::StudentId;

/// Students waiting for a seat, oldest first.
#[derive(Debug, Default)]
pub struct Waitlist {
    queue: VecDeque<StudentRef>,
}

impl Waitlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a student to the back.
    pub fn enqueue(&mut self, student: StudentRef) {
        self.queue.push_back(student);
    }

    /// Remove the front student. Does nothing when empty.
    pub fn dequeue(&mut self) {
        self.queue.pop_front();
    }

    /// The student at the front, without removing it.
    pub fn front(&self) -> Option<&StudentRef> {
        self.queue.front()
    }

    pub fn size(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Check whether any waiting student has the given id.
    pub fn contains(&self, id: &StudentId) -> bool {
        self.queue.iter().any(|s| s.id() == id)
    }

    /// Display rows in service order.
    pub fn display(&self) -> impl ExactSizeIterator<Item = StudentRow<'_>> + '_ {
        self.queue.iter().map(StudentRow::of)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::student::StudentRecord;
    use crate::core::types::GradeLevel;

    fn student(id: &str, last: &str) -> StudentRef {
        StudentRecord::shared(id, "First", last, GradeLevel::new(1))
    }

    #[test]
    fn fifo_order_ignores_names() {
        let mut wl = Waitlist::new();
        wl.enqueue(student("1", "Zhou"));
        wl.enqueue(student("2", "Adams"));
        wl.enqueue(student("3", "Moss"));

        let ids: Vec<_> = wl.display().map(|r| r.id.to_string()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn front_and_dequeue() {
        let mut wl = Waitlist::new();
        wl.enqueue(student("1", "Zhou"));
        wl.enqueue(student("2", "Adams"));

        assert_eq!(wl.front().map(|s| s.id().as_str()), Some("1"));
        assert_eq!(wl.size(), 2);

        wl.dequeue();
        assert_eq!(wl.front().map(|s| s.id().as_str()), Some("2"));
        assert_eq!(wl.size(), 1);
    }

    #[test]
    fn contains_by_id() {
        let mut wl = Waitlist::new();
        wl.enqueue(student("1", "Zhou"));

        assert!(wl.contains(&StudentId::new("1")));
        assert!(!wl.contains(&StudentId::new("2")));
        wl.dequeue();
        assert!(!wl.contains(&StudentId::new("1")));
    }

    #[test]
    fn dequeue_empty_is_noop() {
        let mut wl = Waitlist::new();
        wl.dequeue();
        assert!(wl.is_empty());
        assert!(wl.front().is_none());
        assert_eq!(wl.size(), 0);
    }
}
