use std::collections::VecDeque;

use super::ProcessControlBlock;

/// Preemptive shortest-remaining-time ready queue.
///
/// Processes are kept in ascending order of `tau_remaining`, so the head is
/// always the shortest predicted/remaining burst. Insertion goes before the
/// first strictly greater key, which keeps arrival order among equal keys.
pub(crate) struct ReadyQueue {
    queue: VecDeque<ProcessControlBlock>,
}

impl ReadyQueue {
    pub fn new() -> ReadyQueue {
        ReadyQueue {
            queue: VecDeque::new(),
        }
    }

    pub fn enqueue(&mut self, insert: ProcessControlBlock) {
        let key = insert.tau_remaining;
        let at = self
            .queue
            .iter()
            .position(|pcb| pcb.tau_remaining > key)
            .unwrap_or(self.queue.len());
        self.queue.insert(at, insert);
    }

    pub fn dequeue(&mut self) -> Option<ProcessControlBlock> {
        self.queue.pop_front()
    }

    /// Splice out the process with the given PID, wherever it sits.
    pub fn remove_by_pid(&mut self, pid: u32) -> Option<ProcessControlBlock> {
        let at = self.queue.iter().position(|pcb| pcb.get_id() == pid)?;
        self.queue.remove(at)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProcessControlBlock> {
        self.queue.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pcb_with_tau(id: u32, tau: f64) -> ProcessControlBlock {
        ProcessControlBlock::new(id, tau, 8, 8)
    }

    #[test]
    fn test_ready_queue_orders_by_tau_remaining() {
        let mut rq = ReadyQueue::new();
        rq.enqueue(pcb_with_tau(1, 9.0));
        rq.enqueue(pcb_with_tau(2, 3.0));
        rq.enqueue(pcb_with_tau(3, 6.0));

        assert_eq!(rq.dequeue().unwrap().get_id(), 2);
        assert_eq!(rq.dequeue().unwrap().get_id(), 3);
        assert_eq!(rq.dequeue().unwrap().get_id(), 1);
        assert!(rq.dequeue().is_none());
    }

    #[test]
    fn test_ready_queue_equal_keys_keep_arrival_order() {
        let mut rq = ReadyQueue::new();
        rq.enqueue(pcb_with_tau(1, 5.0));
        rq.enqueue(pcb_with_tau(2, 5.0));
        rq.enqueue(pcb_with_tau(3, 5.0));

        assert_eq!(rq.dequeue().unwrap().get_id(), 1);
        assert_eq!(rq.dequeue().unwrap().get_id(), 2);
        assert_eq!(rq.dequeue().unwrap().get_id(), 3);
    }

    #[test]
    fn test_ready_queue_remove_by_pid() {
        let mut rq = ReadyQueue::new();
        rq.enqueue(pcb_with_tau(1, 2.0));
        rq.enqueue(pcb_with_tau(2, 4.0));
        rq.enqueue(pcb_with_tau(3, 8.0));

        assert_eq!(rq.remove_by_pid(2).unwrap().get_id(), 2);
        assert!(rq.remove_by_pid(2).is_none());
        assert_eq!(rq.dequeue().unwrap().get_id(), 1);
        assert_eq!(rq.dequeue().unwrap().get_id(), 3);
    }

    #[test]
    fn test_ready_queue_empty_is_not_an_error() {
        let mut rq = ReadyQueue::new();
        assert!(rq.is_empty());
        assert!(rq.dequeue().is_none());
        assert!(rq.remove_by_pid(1).is_none());
    }
}
