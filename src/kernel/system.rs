use log::debug;

use super::{
    BurstQuery, ConfigError, Console, DeviceKind, DeviceQueue, DiskQueue, Event, FrameAllocator,
    IoRequest, JobPool, Processor, ProcessControlBlock, ReadyQueue, SystemConfig,
};

/// The dispatcher: owns every queue, the processor slot, and the frame
/// allocator, and turns driver commands into atomic state transitions.
pub(crate) struct System {
    config: SystemConfig,
    next_pid: u32,
    cpu: Processor,
    ready_queue: ReadyQueue,
    job_pool: JobPool,
    printers: Vec<DeviceQueue>,
    flash_drives: Vec<DeviceQueue>,
    disks: Vec<DiskQueue>,
    frames: FrameAllocator,

    // System-wide accounting.
    cpu_time_avg: f64,
    completed_count: u32,
}

/// Running mean over `n` samples after folding in `new_val`.
fn running_average(old_avg: f64, new_val: f64, n: u32) -> f64 {
    ((n - 1) as f64 * old_avg + new_val) / n as f64
}

/// Translate a logical address through the page table, or `None` when the
/// page index falls outside it.
fn translate(pcb: &ProcessControlBlock, frame_size: u32, logical: u32) -> Option<u32> {
    let page = (logical / frame_size) as usize;
    if page >= pcb.get_num_pages() {
        return None;
    }
    Some(pcb.page_table[page] as u32 * frame_size + logical % frame_size)
}

impl System {
    pub fn new(config: SystemConfig) -> Result<System, ConfigError> {
        config.validate()?;
        let frames = FrameAllocator::new(config.memory_size, config.page_size);
        Ok(System {
            next_pid: 1,
            cpu: Processor::new(),
            ready_queue: ReadyQueue::new(),
            job_pool: JobPool::new(),
            printers: (0..config.printer_count).map(|_| DeviceQueue::new()).collect(),
            flash_drives: (0..config.flash_drive_count)
                .map(|_| DeviceQueue::new())
                .collect(),
            disks: (0..config.disk_count).map(|_| DiskQueue::new()).collect(),
            frames,
            cpu_time_avg: 0.0,
            completed_count: 0,
            config,
        })
    }

    /// Create a process of `size` words and admit it if memory allows.
    ///
    /// Oversized requests are rejected before a PID is consumed. A process
    /// that does not fit goes to the job pool and never touches the CPU or
    /// ready queue until memory frees up.
    pub fn create_process(&mut self, size: u32, console: &mut dyn Console) {
        if size > self.config.max_process_size {
            console.report(Event::AdmissionRejected {
                size,
                max: self.config.max_process_size,
            });
            return;
        }

        let pid = self.next_pid;
        self.next_pid += 1;
        let mut pcb =
            ProcessControlBlock::new(pid, self.config.tau_initial, size, self.config.page_size);

        if self.frames.try_admit(&mut pcb).is_err() {
            debug!("pid {} deferred to job pool ({} words)", pid, size);
            self.job_pool.enqueue(pcb);
            return;
        }
        debug!("pid {} admitted with {} frames", pid, pcb.get_num_pages());

        if self.cpu.is_empty() && self.ready_queue.is_empty() {
            self.cpu.install(pcb);
        } else {
            self.dispatch_arrival(pcb, console);
        }
    }

    /// Place an arriving or returning process: it either preempts the
    /// running process or joins the ready queue.
    ///
    /// Only the running process needs to be compared against. No ready
    /// process can have a lower key than it: any process that could beat it
    /// would have won the CPU at its own arrival through this same
    /// comparison.
    fn dispatch_arrival(&mut self, arriving: ProcessControlBlock, console: &mut dyn Console) {
        let mut running = match self.cpu.take() {
            Some(running) => running,
            None => {
                self.cpu.install(arriving);
                return;
            }
        };

        let elapsed = console.query_burst_time(BurstQuery::Interrupt);
        running.burst_time += elapsed;
        running.tau_remaining -= elapsed;
        running.cpu_time += elapsed;

        if arriving.tau_remaining < running.tau_remaining {
            debug!(
                "pid {} preempts pid {}",
                arriving.get_id(),
                running.get_id()
            );
            self.ready_queue.enqueue(running);
            self.cpu.install(arriving);
        } else {
            self.ready_queue.enqueue(arriving);
            self.cpu.install(running);
        }
    }

    /// Completion interrupt from a device: hand its head process back to
    /// the scheduler. `device` is zero-based.
    pub fn device_completion(
        &mut self,
        kind: DeviceKind,
        device: usize,
        console: &mut dyn Console,
    ) {
        let returned = match kind {
            DeviceKind::Printer => self.printers[device].dequeue(),
            DeviceKind::FlashDrive => self.flash_drives[device].dequeue(),
            DeviceKind::Disk => self.disks[device].dequeue(),
        };
        match returned {
            Some(pcb) => self.dispatch_arrival(pcb, console),
            None => console.report(Event::DeviceQueueEmpty { kind, device }),
        }
    }

    /// The running process requests I/O: finalize its burst, collect and
    /// validate the request parameters, queue the request, and move the
    /// next ready process into the CPU.
    pub fn io_request_syscall(
        &mut self,
        kind: DeviceKind,
        device: usize,
        console: &mut dyn Console,
    ) {
        if self.cpu.is_empty() {
            console.report(Event::CpuEmpty);
            return;
        }

        let elapsed = console.query_burst_time(BurstQuery::Syscall);
        let alpha = self.config.alpha;
        {
            let running = self.cpu.running_mut().expect("CPU checked nonempty");
            running.cpu_time += elapsed;
            let total_burst = running.burst_time + elapsed;
            running.burst_count += 1;
            running.burst_avg =
                running_average(running.burst_avg, total_burst, running.burst_count);
            running.tau_next = alpha * running.tau_next + (1.0 - alpha) * total_burst;
            running.tau_remaining = running.tau_next;
            running.burst_time = 0.0;
        }

        // Invalid parameters reject the whole attempt and query again.
        let (query, physical) = loop {
            let query = console.query_io_params(kind, device);

            if kind == DeviceKind::Disk {
                let max = self.config.cylinder_counts[device];
                if query.cylinder < 1 || query.cylinder > max {
                    console.report(Event::InvalidCylinder {
                        cylinder: query.cylinder,
                        max,
                    });
                    continue;
                }
            }

            let running = self.cpu.running().expect("CPU checked nonempty");
            match translate(running, self.frames.frame_size(), query.start_address) {
                Some(physical) => {
                    console.report(Event::PhysicalAddress { address: physical });
                    break (query, physical);
                }
                None => console.report(Event::InvalidAddress {
                    address: query.start_address,
                }),
            }
        };

        let process = self.cpu.take().expect("CPU checked nonempty");
        debug!(
            "pid {} waiting on {}{}",
            process.get_id(),
            kind.letter(),
            device + 1
        );
        let request = IoRequest {
            process,
            cylinder: if kind == DeviceKind::Disk {
                query.cylinder
            } else {
                0
            },
            file_name: query.file_name,
            mem_start: physical,
            read_write: query.read_write,
            file_len: query.length,
        };

        if let Some(next) = self.ready_queue.dequeue() {
            self.cpu.install(next);
        }

        match kind {
            DeviceKind::Printer => self.printers[device].enqueue(request),
            DeviceKind::FlashDrive => self.flash_drives[device].enqueue(request),
            DeviceKind::Disk => self.disks[device].enqueue(request),
        }
    }

    /// Terminate the running process: finalize its accounting, fold it into
    /// the system average, and return its frames. Freed memory is offered to
    /// the job pool before the CPU is refilled.
    pub fn terminate_process(&mut self, console: &mut dyn Console) {
        match self.cpu.take() {
            Some(mut finished) => {
                let elapsed = console.query_burst_time(BurstQuery::Terminate);
                finished.cpu_time += elapsed;
                let total_burst = finished.burst_time + elapsed;
                finished.burst_count += 1;
                finished.burst_avg =
                    running_average(finished.burst_avg, total_burst, finished.burst_count);

                self.completed_count += 1;
                self.cpu_time_avg =
                    running_average(self.cpu_time_avg, finished.cpu_time, self.completed_count);

                console.report(Event::ProcessCompleted {
                    pid: finished.get_id(),
                    cpu_time: finished.cpu_time,
                    burst_avg: finished.burst_avg,
                });
                self.frames.release(&mut finished);
            }
            None => console.report(Event::CpuEmpty),
        }

        self.drain_job_pool();
        self.refill_cpu();
    }

    /// Forcibly remove a process from the system, wherever it is queued.
    ///
    /// The running process is displaced into the ready queue first (its
    /// burst is interrupted, not completed), so a kill aimed at it finds it
    /// there. The search order is fixed: disks, printers, flash drives,
    /// ready queue, job pool.
    pub fn kill_process(&mut self, pid: u32, console: &mut dyn Console) {
        if let Some(mut running) = self.cpu.take() {
            let elapsed = console.query_burst_time(BurstQuery::Interrupt);
            running.burst_time += elapsed;
            running.tau_remaining -= elapsed;
            running.cpu_time += elapsed;
            self.ready_queue.enqueue(running);
        }

        let mut victim = self.disks.iter_mut().find_map(|dq| dq.remove_by_pid(pid));
        if victim.is_none() {
            victim = self.printers.iter_mut().find_map(|dq| dq.remove_by_pid(pid));
        }
        if victim.is_none() {
            victim = self
                .flash_drives
                .iter_mut()
                .find_map(|dq| dq.remove_by_pid(pid));
        }
        if victim.is_none() {
            victim = self.ready_queue.remove_by_pid(pid);
        }
        let mut from_job_pool = false;
        if victim.is_none() {
            victim = self.job_pool.remove_by_pid(pid);
            from_job_pool = victim.is_some();
        }

        match victim {
            None => {
                console.report(Event::ProcessNotFound { pid });
                // The displaced running process (if any) sits in the ready
                // queue now; restore the front-runner even after a failed
                // search.
                self.refill_cpu();
            }
            Some(pcb) if from_job_pool => {
                // Never ran and owns no frames; nothing to account for.
                console.report(Event::JobPoolProcessKilled { pid });
                drop(pcb);
                self.refill_cpu();
            }
            Some(mut victim) => {
                if victim.burst_time > 0.0 {
                    // Killed mid-burst: fold the partial burst in.
                    victim.burst_count += 1;
                    victim.burst_avg =
                        running_average(victim.burst_avg, victim.burst_time, victim.burst_count);
                    self.completed_count += 1;
                    self.cpu_time_avg =
                        running_average(self.cpu_time_avg, victim.cpu_time, self.completed_count);
                } else if victim.cpu_time > 0.0 {
                    self.completed_count += 1;
                    self.cpu_time_avg =
                        running_average(self.cpu_time_avg, victim.cpu_time, self.completed_count);
                }

                console.report(Event::ProcessKilled {
                    pid,
                    cpu_time: victim.cpu_time,
                    burst_avg: victim.burst_avg,
                });
                self.frames.release(&mut victim);
                drop(victim);

                self.drain_job_pool();
                self.refill_cpu();
            }
        }
    }

    /// Admit as many pending processes as now fit, largest first, moving
    /// each to the ready queue.
    fn drain_job_pool(&mut self) {
        while let Some(mut pcb) = self.job_pool.dequeue_fitting(self.frames.available_words()) {
            if self.frames.try_admit(&mut pcb).is_err() {
                panic!("job pool candidate no longer fits the free frames");
            }
            debug!("pid {} admitted from job pool", pcb.get_id());
            self.ready_queue.enqueue(pcb);
        }
    }

    fn refill_cpu(&mut self) {
        if self.cpu.is_empty() {
            if let Some(next) = self.ready_queue.dequeue() {
                self.cpu.install(next);
            }
        }
    }

    // Read access for the snapshot printer.

    pub fn config(&self) -> &SystemConfig {
        &self.config
    }

    pub fn cpu(&self) -> &Processor {
        &self.cpu
    }

    pub fn ready_queue(&self) -> &ReadyQueue {
        &self.ready_queue
    }

    pub fn job_pool(&self) -> &JobPool {
        &self.job_pool
    }

    pub fn printers(&self) -> &[DeviceQueue] {
        &self.printers
    }

    pub fn flash_drives(&self) -> &[DeviceQueue] {
        &self.flash_drives
    }

    pub fn disks(&self) -> &[DiskQueue] {
        &self.disks
    }

    pub fn frames(&self) -> &FrameAllocator {
        &self.frames
    }

    pub fn cpu_time_avg(&self) -> f64 {
        self.cpu_time_avg
    }

    pub fn completed_count(&self) -> u32 {
        self.completed_count
    }
}
