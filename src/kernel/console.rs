//! The seam between the kernel and the operator-facing driver.
//!
//! The kernel never touches stdin or stdout. Elapsed-time and I/O-parameter
//! queries block on the `Console` implementation, and accounting/status
//! lines are pushed through its report sink.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum DeviceKind {
    Printer,
    FlashDrive,
    Disk,
}

impl DeviceKind {
    /// One-letter device prefix used in command names and queue labels.
    pub fn letter(&self) -> char {
        match self {
            DeviceKind::Printer => 'p',
            DeviceKind::FlashDrive => 'f',
            DeviceKind::Disk => 'd',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ReadWrite {
    Read,
    Write,
}

impl fmt::Display for ReadWrite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadWrite::Read => write!(f, "r"),
            ReadWrite::Write => write!(f, "w"),
        }
    }
}

/// Why the kernel is asking how long the running process has been in the CPU.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BurstQuery {
    /// The running process issued an I/O system call (burst complete).
    Syscall,
    /// The running process is terminating (final burst).
    Terminate,
    /// The running process is being displaced by an arrival, a returning
    /// process, or a forced kill (burst continues later).
    Interrupt,
}

/// Parameters supplied by the operator for one I/O request attempt.
///
/// `start_address` is a logical address; the kernel translates it through
/// the page table and rejects the whole attempt if it falls outside it.
/// `cylinder` is only meaningful for disk requests.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct IoQuery {
    pub file_name: String,
    pub start_address: u32,
    pub read_write: ReadWrite,
    pub length: u32,
    pub cylinder: u32,
}

/// Accounting and status notifications the kernel emits.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Event {
    /// A process terminated normally.
    ProcessCompleted {
        pid: u32,
        cpu_time: f64,
        burst_avg: f64,
    },
    /// A process was forcibly killed after having run.
    ProcessKilled {
        pid: u32,
        cpu_time: f64,
        burst_avg: f64,
    },
    /// A process was killed straight out of the job pool; it never ran and
    /// owned no frames, so there is nothing to account.
    JobPoolProcessKilled { pid: u32 },
    /// Kill target was not present in any queue.
    ProcessNotFound { pid: u32 },
    /// An operation that needs a running process found the CPU empty.
    CpuEmpty,
    /// A completion interrupt arrived for a device with no queued request.
    /// `device` is the zero-based queue index.
    DeviceQueueEmpty { kind: DeviceKind, device: usize },
    /// Result of translating the request's logical start address.
    PhysicalAddress { address: u32 },
    /// Requested cylinder outside the disk's configured range.
    InvalidCylinder { cylinder: u32, max: u32 },
    /// Logical address maps past the process's page table.
    InvalidAddress { address: u32 },
    /// Admission request exceeded the maximum process size; no process was
    /// created.
    AdmissionRejected { size: u32, max: u32 },
}

/// Blocking collaborator interface implemented by the driver.
pub(crate) trait Console {
    /// How long the running process has been executing, in milliseconds.
    fn query_burst_time(&mut self, query: BurstQuery) -> f64;

    /// Parameters for an I/O request on the given device queue (zero-based).
    /// Called again from scratch if the previous attempt was invalid.
    fn query_io_params(&mut self, kind: DeviceKind, device: usize) -> IoQuery;

    /// Non-blocking sink for accounting/status lines.
    fn report(&mut self, event: Event);
}
