use std::collections::VecDeque;

use super::{IoRequest, ProcessControlBlock};

/// Cyclic-LOOK disk scheduling queue.
///
/// Requests are kept in one low-to-high sweep with wraparound: the head is
/// the next cylinder to service, and cylinder numbers never decrease along
/// the queue except at the single wrap point. Conceptually this is the
/// circular singly linked list of the classic implementation; here the
/// sequence is an owned `VecDeque` with index 0 as the sweep position, so
/// the wrap link is implicit.
pub(crate) struct DiskQueue {
    queue: VecDeque<IoRequest>,
}

impl DiskQueue {
    pub fn new() -> DiskQueue {
        DiskQueue {
            queue: VecDeque::new(),
        }
    }

    /// Insert a request where the sweep will pass it next.
    ///
    /// Scanning adjacent pairs from the head, the request with cylinder `k`
    /// belongs between `prev` and `curr` when
    ///
    ///     k > prev  &&  (k < curr  ||  prev > curr)
    ///
    /// The second disjunct detects the wrap boundary, where the sweep drops
    /// back to the lowest remaining cylinder; a `k` the sweep has already
    /// passed belongs there. If no pair matches, the request goes at the
    /// tail, just before wrapping back to the head. The strict `>` against
    /// `prev` keeps equal cylinders in arrival order, so a duplicate of the
    /// head's cylinder ends up at the tail rather than jumping the line.
    pub fn enqueue(&mut self, insert: IoRequest) {
        let key = insert.cylinder;
        for at in 1..self.queue.len() {
            let prev = self.queue[at - 1].cylinder;
            let curr = self.queue[at].cylinder;
            if key > prev && (key < curr || prev > curr) {
                self.queue.insert(at, insert);
                return;
            }
        }
        self.queue.push_back(insert);
    }

    /// Service the head request; the sweep advances to the next entry, or
    /// wraps to a fresh queue when this was the last one.
    pub fn dequeue(&mut self) -> Option<ProcessControlBlock> {
        self.queue.pop_front().map(|request| request.process)
    }

    pub fn remove_by_pid(&mut self, pid: u32) -> Option<ProcessControlBlock> {
        let at = self
            .queue
            .iter()
            .position(|request| request.process.get_id() == pid)?;
        self.queue.remove(at).map(|request| request.process)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IoRequest> {
        self.queue.iter()
    }
}
