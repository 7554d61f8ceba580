use super::ProcessControlBlock;

/// Single-slot holder of the currently executing process.
pub(crate) struct Processor {
    running: Option<ProcessControlBlock>,
}

impl Processor {
    pub fn new() -> Processor {
        Processor { running: None }
    }

    /// Put a process into the slot. The slot must be empty; the dispatcher
    /// always vacates it first.
    pub fn install(&mut self, pcb: ProcessControlBlock) {
        if self.running.is_some() {
            panic!("Processor already occupied");
        }
        self.running = Some(pcb);
    }

    pub fn take(&mut self) -> Option<ProcessControlBlock> {
        self.running.take()
    }

    pub fn is_empty(&self) -> bool {
        self.running.is_none()
    }

    pub fn running(&self) -> Option<&ProcessControlBlock> {
        self.running.as_ref()
    }

    pub fn running_mut(&mut self) -> Option<&mut ProcessControlBlock> {
        self.running.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_processor_install_and_take() {
        let mut cpu = Processor::new();
        assert!(cpu.is_empty());

        cpu.install(ProcessControlBlock::new(1, 10.0, 8, 8));
        assert!(!cpu.is_empty());
        assert_eq!(cpu.running().unwrap().get_id(), 1);

        assert_eq!(cpu.take().unwrap().get_id(), 1);
        assert!(cpu.is_empty());
        assert!(cpu.take().is_none());
    }

    #[test]
    #[should_panic]
    fn test_processor_double_install() {
        let mut cpu = Processor::new();
        cpu.install(ProcessControlBlock::new(1, 10.0, 8, 8));
        cpu.install(ProcessControlBlock::new(2, 10.0, 8, 8));
    }
}
