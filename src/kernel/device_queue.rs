use std::collections::VecDeque;

use super::{ProcessControlBlock, ReadWrite};

/// A queued I/O request: the waiting process plus its system call
/// parameters. The record exists only while queued; dequeueing hands the
/// process back to the scheduler and drops the parameters (file name
/// included) with the record.
pub(crate) struct IoRequest {
    pub process: ProcessControlBlock,
    /// Requested cylinder; zero for non-disk devices.
    pub cylinder: u32,
    pub file_name: String,
    /// Physical starting address, already translated.
    pub mem_start: u32,
    pub read_write: ReadWrite,
    pub file_len: u32,
}

/// Plain FIFO queue for printers and flash drives.
pub(crate) struct DeviceQueue {
    queue: VecDeque<IoRequest>,
}

impl DeviceQueue {
    pub fn new() -> DeviceQueue {
        DeviceQueue {
            queue: VecDeque::new(),
        }
    }

    pub fn enqueue(&mut self, insert: IoRequest) {
        self.queue.push_back(insert);
    }

    /// Remove the head request and hand its process back.
    pub fn dequeue(&mut self) -> Option<ProcessControlBlock> {
        self.queue.pop_front().map(|request| request.process)
    }

    /// Splice out the request owned by the given PID, anywhere in the queue.
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

#[cfg(test)]
mod tests {
    use super::*;

    fn request(pid: u32) -> IoRequest {
        IoRequest {
            process: ProcessControlBlock::new(pid, 10.0, 8, 8),
            cylinder: 0,
            file_name: format!("file{}", pid),
            mem_start: 0,
            read_write: ReadWrite::Write,
            file_len: 16,
        }
    }

    #[test]
    fn test_device_queue_is_fifo() {
        let mut dq = DeviceQueue::new();
        dq.enqueue(request(1));
        dq.enqueue(request(2));
        dq.enqueue(request(3));

        assert_eq!(dq.dequeue().unwrap().get_id(), 1);
        assert_eq!(dq.dequeue().unwrap().get_id(), 2);
        assert_eq!(dq.dequeue().unwrap().get_id(), 3);
        assert!(dq.dequeue().is_none());
    }

    #[test]
    fn test_device_queue_remove_by_pid_mid_queue() {
        let mut dq = DeviceQueue::new();
        dq.enqueue(request(1));
        dq.enqueue(request(2));
        dq.enqueue(request(3));

        assert_eq!(dq.remove_by_pid(2).unwrap().get_id(), 2);
        assert!(dq.remove_by_pid(2).is_none());
        assert_eq!(dq.dequeue().unwrap().get_id(), 1);
        assert_eq!(dq.dequeue().unwrap().get_id(), 3);
    }

    #[test]
    fn test_device_queue_empty() {
        let mut dq = DeviceQueue::new();
        assert!(dq.is_empty());
        dq.enqueue(request(1));
        assert!(!dq.is_empty());
    }
}
