use std::collections::VecDeque;

use super::ProcessControlBlock;

/// Holding queue for processes whose memory demand cannot be met yet.
///
/// Ordered descending by requested size (largest first), so that when memory
/// frees up the biggest pending process gets the first shot at it.
pub(crate) struct JobPool {
    queue: VecDeque<ProcessControlBlock>,
}

impl JobPool {
    pub fn new() -> JobPool {
        JobPool {
            queue: VecDeque::new(),
        }
    }

    pub fn enqueue(&mut self, insert: ProcessControlBlock) {
        let key = insert.get_size();
        let at = self
            .queue
            .iter()
            .position(|pcb| pcb.get_size() < key)
            .unwrap_or(self.queue.len());
        self.queue.insert(at, insert);
    }

    /// Pop the first (largest) process that fits in `available_words`.
    ///
    /// This is an opportunistic conditional pop: if nothing fits the pool is
    /// left untouched and `None` is returned.
    pub fn dequeue_fitting(&mut self, available_words: u32) -> Option<ProcessControlBlock> {
        let at = self
            .queue
            .iter()
            .position(|pcb| pcb.get_size() <= available_words)?;
        self.queue.remove(at)
    }

    pub fn remove_by_pid(&mut self, pid: u32) -> Option<ProcessControlBlock> {
        let at = self.queue.iter().position(|pcb| pcb.get_id() == pid)?;
        self.queue.remove(at)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProcessControlBlock> {
        self.queue.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pcb_with_size(id: u32, size: u32) -> ProcessControlBlock {
        ProcessControlBlock::new(id, 10.0, size, 8)
    }

    #[test]
    fn test_job_pool_orders_largest_first() {
        let mut pool = JobPool::new();
        pool.enqueue(pcb_with_size(1, 40));
        pool.enqueue(pcb_with_size(2, 80));
        pool.enqueue(pcb_with_size(3, 60));

        let order: Vec<u32> = pool.iter().map(|pcb| pcb.get_id()).collect();
        assert_eq!(order, vec![2, 3, 1]);
    }

    #[test]
    fn test_job_pool_equal_sizes_keep_arrival_order() {
        let mut pool = JobPool::new();
        pool.enqueue(pcb_with_size(1, 40));
        pool.enqueue(pcb_with_size(2, 40));

        let order: Vec<u32> = pool.iter().map(|pcb| pcb.get_id()).collect();
        assert_eq!(order, vec![1, 2]);
    }

    #[test]
    fn test_job_pool_dequeue_fitting_skips_too_large() {
        let mut pool = JobPool::new();
        pool.enqueue(pcb_with_size(1, 100));
        pool.enqueue(pcb_with_size(2, 30));
        pool.enqueue(pcb_with_size(3, 10));

        assert_eq!(pool.dequeue_fitting(50).unwrap().get_id(), 2);
        // The too-large head is still pending.
        let order: Vec<u32> = pool.iter().map(|pcb| pcb.get_id()).collect();
        assert_eq!(order, vec![1, 3]);
    }

    #[test]
    fn test_job_pool_dequeue_fitting_none_fits() {
        let mut pool = JobPool::new();
        pool.enqueue(pcb_with_size(1, 100));
        assert!(pool.dequeue_fitting(50).is_none());
        assert_eq!(pool.iter().count(), 1);
    }

    #[test]
    fn test_job_pool_remove_by_pid() {
        let mut pool = JobPool::new();
        pool.enqueue(pcb_with_size(1, 40));
        pool.enqueue(pcb_with_size(2, 80));

        assert_eq!(pool.remove_by_pid(1).unwrap().get_id(), 1);
        assert!(pool.remove_by_pid(1).is_none());
    }
}
