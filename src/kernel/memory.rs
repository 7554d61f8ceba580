use super::ProcessControlBlock;

/// One physical frame and its current owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Frame {
    /// Owning process and the page it backs, or `None` when free.
    pub owner: Option<(u32, usize)>,
}

/// Frame allocation failed; the caller should route the process to the
/// job pool.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct InsufficientMemory;

/// Fixed-size frame table plus a free-frame stack.
///
/// Frame identity is fungible, so freed frames are reused LIFO. Invariant:
/// `free_frame_count + sum(num_pages of admitted processes) == num_frames`
/// after every operation.
pub(crate) struct FrameAllocator {
    frame_size: u32,
    frames: Vec<Frame>,
    free: Vec<usize>,
}

impl FrameAllocator {
    pub fn new(memory_size: u32, frame_size: u32) -> FrameAllocator {
        let num_frames = (memory_size / frame_size) as usize;
        FrameAllocator {
            frame_size,
            frames: vec![Frame { owner: None }; num_frames],
            free: (0..num_frames).collect(),
        }
    }

    /// Allocate every page of the process, all or nothing.
    ///
    /// On success the page table holds one frame index per page and the
    /// frame table records the ownership. On failure nothing is touched.
    pub fn try_admit(
        &mut self,
        pcb: &mut ProcessControlBlock,
    ) -> Result<(), InsufficientMemory> {
        let needed = pcb.get_num_pages();
        if needed > self.free.len() {
            return Err(InsufficientMemory);
        }

        for page in 0..needed {
            let frame = self.free.pop().expect("free count was checked");
            self.frames[frame].owner = Some((pcb.get_id(), page));
            pcb.page_table.push(frame);
        }

        Ok(())
    }

    /// Return every frame in the process's page table to the free stack.
    /// Called exactly once per admitted process, at termination or kill.
    pub fn release(&mut self, pcb: &mut ProcessControlBlock) {
        for frame in pcb.page_table.drain(..) {
            self.frames[frame].owner = None;
            self.free.push(frame);
        }
    }

    pub fn free_frame_count(&self) -> usize {
        self.free.len()
    }

    /// Memory currently available for admission, in words.
    pub fn available_words(&self) -> u32 {
        self.free.len() as u32 * self.frame_size
    }

    pub fn frame_size(&self) -> u32 {
        self.frame_size
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocator_admit_fills_page_table() {
        let mut frames = FrameAllocator::new(64, 16);
        let mut pcb = ProcessControlBlock::new(1, 10.0, 32, 16);

        frames.try_admit(&mut pcb).unwrap();

        assert_eq!(pcb.page_table.len(), 2);
        assert_eq!(frames.free_frame_count(), 2);
        for (page, &frame) in pcb.page_table.iter().enumerate() {
            assert_eq!(frames.frames()[frame].owner, Some((1, page)));
        }
    }

    #[test]
    fn test_allocator_admit_is_all_or_nothing() {
        let mut frames = FrameAllocator::new(64, 16);
        let mut big = ProcessControlBlock::new(1, 10.0, 80, 16);

        assert_eq!(frames.try_admit(&mut big), Err(InsufficientMemory));
        assert!(big.page_table.is_empty());
        assert_eq!(frames.free_frame_count(), 4);
    }

    #[test]
    fn test_allocator_release_returns_frames() {
        let mut frames = FrameAllocator::new(64, 16);
        let mut pcb = ProcessControlBlock::new(1, 10.0, 48, 16);

        frames.try_admit(&mut pcb).unwrap();
        assert_eq!(frames.free_frame_count(), 1);

        frames.release(&mut pcb);
        assert_eq!(frames.free_frame_count(), 4);
        assert!(pcb.page_table.is_empty());
        assert!(frames.frames().iter().all(|frame| frame.owner.is_none()));
    }

    #[test]
    fn test_allocator_reuses_frames_lifo() {
        let mut frames = FrameAllocator::new(64, 16);
        let mut first = ProcessControlBlock::new(1, 10.0, 16, 16);
        frames.try_admit(&mut first).unwrap();
        let taken = first.page_table[0];

        frames.release(&mut first);

        let mut second = ProcessControlBlock::new(2, 10.0, 16, 16);
        frames.try_admit(&mut second).unwrap();
        assert_eq!(second.page_table[0], taken);
    }

    #[test]
    fn test_allocator_available_words() {
        let mut frames = FrameAllocator::new(64, 16);
        assert_eq!(frames.available_words(), 64);

        let mut pcb = ProcessControlBlock::new(1, 10.0, 17, 16);
        frames.try_admit(&mut pcb).unwrap();
        assert_eq!(frames.available_words(), 32);
    }
}
