/// Process control block for a simulated process.
///
/// A process is owned by exactly one container at a time: the processor
/// slot, the ready queue, the job pool, or a device/disk queue. Moving it
/// between containers moves the value itself, so a process can never be
/// observed in two places at once.
pub(crate) struct ProcessControlBlock {
    id: u32,

    // CPU accounting.
    pub tau_next: f64,
    pub tau_remaining: f64,
    pub cpu_time: f64,
    pub burst_count: u32,
    pub burst_avg: f64,
    pub burst_time: f64,

    // Paging.
    size: u32,
    num_pages: usize,
    pub(crate) page_table: Vec<usize>,
}

impl ProcessControlBlock {
    /// Create a process with the system's initial burst estimate.
    ///
    /// The page table stays empty until the frame allocator admits the
    /// process into memory.
    pub fn new(id: u32, tau_initial: f64, size: u32, frame_size: u32) -> ProcessControlBlock {
        ProcessControlBlock {
            id,
            tau_next: tau_initial,
            tau_remaining: tau_initial,
            cpu_time: 0.0,
            burst_count: 0,
            burst_avg: 0.0,
            burst_time: 0.0,
            size,
            num_pages: pages_needed(size, frame_size),
            page_table: Vec::new(),
        }
    }

    pub fn get_id(&self) -> u32 {
        self.id
    }

    pub fn get_size(&self) -> u32 {
        self.size
    }

    pub fn get_num_pages(&self) -> usize {
        self.num_pages
    }
}

/// Number of frames a process of `size` words needs: ceil(size / frame_size).
pub(crate) fn pages_needed(size: u32, frame_size: u32) -> usize {
    (size as usize).div_ceil(frame_size as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_needed_rounds_up() {
        assert_eq!(pages_needed(0, 16), 0);
        assert_eq!(pages_needed(1, 16), 1);
        assert_eq!(pages_needed(16, 16), 1);
        assert_eq!(pages_needed(17, 16), 2);
        assert_eq!(pages_needed(64, 16), 4);
    }

    #[test]
    fn test_process_starts_with_initial_estimate() {
        let pcb = ProcessControlBlock::new(1, 10.0, 40, 16);
        assert_eq!(pcb.get_id(), 1);
        assert_eq!(pcb.tau_next, 10.0);
        assert_eq!(pcb.tau_remaining, 10.0);
        assert_eq!(pcb.burst_count, 0);
        assert_eq!(pcb.get_num_pages(), 3);
        assert!(pcb.page_table.is_empty());
    }
}
