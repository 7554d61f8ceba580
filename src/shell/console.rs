//! Operator-facing `Console` implementation backed by stdin/stdout.

use crate::kernel::{BurstQuery, Console, DeviceKind, Event, IoQuery, ReadWrite};
use crate::shell::input;

pub(crate) struct StdinConsole;

impl Console for StdinConsole {
    fn query_burst_time(&mut self, query: BurstQuery) -> f64 {
        let prompt = match query {
            BurstQuery::Syscall => "CPU process requested a syscall. Time spent in CPU (ms):",
            BurstQuery::Terminate => "Terminating CPU process. Time spent in CPU (ms):",
            BurstQuery::Interrupt => "CPU process interrupted. Time spent in CPU (ms):",
        };
        input::get_f64(prompt)
    }

    fn query_io_params(&mut self, kind: DeviceKind, device: usize) -> IoQuery {
        println!("I/O request for device {}{}.", kind.letter(), device + 1);
        let cylinder = match kind {
            DeviceKind::Disk => input::get_u32("Enter cylinder number:"),
            _ => 0,
        };
        let file_name = input::read_line("Enter file name:");
        let start_address = input::get_hex("Enter starting location (hex):");
        // Printers only ever consume output.
        let read_write = match kind {
            DeviceKind::Printer => ReadWrite::Write,
            _ => input::get_read_write("Read or write? [r|w]:"),
        };
        let length = match read_write {
            ReadWrite::Write => input::get_hex("Enter file length (hex):"),
            ReadWrite::Read => 0,
        };
        IoQuery {
            file_name,
            start_address,
            read_write,
            length,
            cylinder,
        }
    }

    fn report(&mut self, event: Event) {
        match event {
            Event::ProcessCompleted {
                pid,
                cpu_time,
                burst_avg,
            } => println!(
                "Process with PID {} terminated. Total CPU time: {:.3}ms, average burst: {:.3}ms.",
                pid, cpu_time, burst_avg
            ),
            Event::ProcessKilled {
                pid,
                cpu_time,
                burst_avg,
            } => println!(
                "Process with PID {} killed. Total CPU time: {:.3}ms, average burst: {:.3}ms.",
                pid, cpu_time, burst_avg
            ),
            Event::JobPoolProcessKilled { pid } => {
                println!("Process with PID {} killed from the job pool.", pid);
            }
            Event::ProcessNotFound { pid } => {
                println!("Process with PID {} not found.", pid);
            }
            Event::CpuEmpty => println!("The CPU is empty."),
            Event::DeviceQueueEmpty { kind, device } => {
                println!("Device queue {}{} is empty.", kind.letter(), device + 1);
            }
            Event::PhysicalAddress { address } => {
                println!("Physical address: {:#x}.", address);
            }
            Event::InvalidCylinder { cylinder, max } => {
                println!("Cylinder {} out of range (1..={}).", cylinder, max);
            }
            Event::InvalidAddress { address } => {
                println!(
                    "Logical address {:#x} falls outside the process's pages.",
                    address
                );
            }
            Event::AdmissionRejected { size, max } => {
                println!(
                    "Process size {} exceeds the maximum process size {}.",
                    size, max
                );
            }
        }
    }
}
