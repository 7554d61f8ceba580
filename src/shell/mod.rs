//! Interactive driver: system generation prompts, the command loop, and
//! snapshot printing. All terminal I/O lives here; the kernel only sees the
//! `Console` trait.

mod console;
pub(crate) mod input;

pub(crate) use console::StdinConsole;

use crate::kernel::{DeviceKind, DeviceQueue, DiskQueue, ProcessControlBlock, System, SystemConfig};

/// Prompt for every system-generation parameter.
pub(crate) fn sysgen() -> SystemConfig {
    println!("System generation.");
    let printer_count = input::get_usize("Enter number of printers:");
    let disk_count = input::get_usize("Enter number of disks:");
    let flash_drive_count = input::get_usize("Enter number of flash drives:");
    let cylinder_counts = (0..disk_count)
        .map(|disk| input::get_u32(&format!("Enter number of cylinders for disk d{}:", disk + 1)))
        .collect();
    let alpha = input::get_alpha("Enter history parameter alpha [0, 1]:");
    let tau_initial = input::get_f64("Enter initial burst estimate (ms):");
    let memory_size = input::get_u32("Enter total memory size (words):");
    let max_process_size = input::get_u32("Enter maximum process size (words):");
    let page_size = input::get_page_size("Enter page size (words, power of two):");
    SystemConfig {
        printer_count,
        disk_count,
        flash_drive_count,
        cylinder_counts,
        alpha,
        tau_initial,
        memory_size,
        max_process_size,
        page_size,
    }
}

/// Read and dispatch commands until `Q`.
pub(crate) fn run(system: &mut System, console: &mut StdinConsole) {
    println!("Running. Commands: A, t, S, K#, p#/P#, f#/F#, d#/D#, Q.");
    loop {
        let line = input::read_line(">");
        for token in line.split_whitespace() {
            if !dispatch(system, console, token) {
                return;
            }
        }
    }
}

/// Handle one command token. Returns false on `Q`.
fn dispatch(system: &mut System, console: &mut StdinConsole, token: &str) -> bool {
    let mut chars = token.chars();
    let head = match chars.next() {
        Some(head) => head,
        None => return true,
    };
    let rest = chars.as_str();

    match head {
        'A' if rest.is_empty() => {
            let size = input::get_u32("Enter process size (words):");
            system.create_process(size, console);
        }
        't' if rest.is_empty() => system.terminate_process(console),
        'S' if rest.is_empty() => snapshot(system),
        'Q' if rest.is_empty() => return false,
        'K' => match rest.parse::<u32>() {
            Ok(pid) => system.kill_process(pid, console),
            Err(_) => skip(token),
        },
        // Lowercase device commands are system calls from the running
        // process; uppercase are completion interrupts from the device.
        'p' | 'P' | 'f' | 'F' | 'd' | 'D' => {
            let kind = match head.to_ascii_lowercase() {
                'p' => DeviceKind::Printer,
                'f' => DeviceKind::FlashDrive,
                _ => DeviceKind::Disk,
            };
            let count = match kind {
                DeviceKind::Printer => system.config().printer_count,
                DeviceKind::FlashDrive => system.config().flash_drive_count,
                DeviceKind::Disk => system.config().disk_count,
            };
            match device_number(rest, count) {
                Some(device) if head.is_ascii_lowercase() => {
                    system.io_request_syscall(kind, device, console);
                }
                Some(device) => system.device_completion(kind, device, console),
                None => skip(token),
            }
        }
        _ => skip(token),
    }
    true
}

fn skip(token: &str) {
    println!("Skipping command: {}", token);
}

/// One-based device number from a command tail, as a queue index.
fn device_number(rest: &str, count: usize) -> Option<usize> {
    let number: usize = rest.parse().ok()?;
    if number == 0 || number > count {
        return None;
    }
    Some(number - 1)
}

/// `S` command: prompt for which part of the system to print.
fn snapshot(system: &System) {
    loop {
        let choice = input::read_line("Snapshot of [r|p|d|f|m|j|c]:");
        match choice.as_str() {
            "r" => {
                print_ready_queue(system);
                print_system_average(system);
            }
            "c" => {
                print_cpu(system);
                print_system_average(system);
            }
            "p" => print_device_queues('p', system.printers()),
            "f" => {
                print_device_queues('f', system.flash_drives());
                print_system_average(system);
            }
            "d" => {
                print_disk_queues(system.disks());
                print_system_average(system);
            }
            "m" => print_frame_table(system),
            "j" => print_job_pool(system),
            _ => {
                println!("Please enter one of r, p, d, f, m, j, c.");
                continue;
            }
        }
        return;
    }
}

fn print_process_header() {
    println!(
        "{:>5} {:>12} {:>12} {:>12} {:>15}",
        "PID", "BURST_AVG", "CPU_TIME", "TAU_NEXT", "TAU_REMAINING"
    );
}

fn print_process_row(pcb: &ProcessControlBlock) {
    println!(
        "{:>5} {:>12.3} {:>12.3} {:>12.3} {:>15.3}",
        pcb.get_id(),
        pcb.burst_avg,
        pcb.cpu_time,
        pcb.tau_next,
        pcb.tau_remaining
    );
}

fn print_ready_queue(system: &System) {
    println!("---- ready queue ----");
    print_process_header();
    for pcb in system.ready_queue().iter() {
        print_process_row(pcb);
    }
}

fn print_cpu(system: &System) {
    println!("---- cpu ----");
    print_process_header();
    match system.cpu().running() {
        Some(pcb) => print_process_row(pcb),
        None => println!("(empty)"),
    }
}

fn print_device_queues(letter: char, queues: &[DeviceQueue]) {
    for (index, queue) in queues.iter().enumerate() {
        println!("---- {}{} ----", letter, index + 1);
        println!(
            "{:>5} {:>16} {:>10} {:>4} {:>12}",
            "PID", "FILENAME", "MEMSTART", "R/W", "FILE-LENGTH"
        );
        for request in queue.iter() {
            println!(
                "{:>5} {:>16} {:>#10x} {:>4} {:>#12x}",
                request.process.get_id(),
                request.file_name,
                request.mem_start,
                request.read_write.to_string(),
                request.file_len
            );
        }
    }
}

fn print_disk_queues(queues: &[DiskQueue]) {
    for (index, queue) in queues.iter().enumerate() {
        println!("---- d{} ----", index + 1);
        println!(
            "{:>5} {:>16} {:>10} {:>4} {:>12} {:>9}",
            "PID", "FILENAME", "MEMSTART", "R/W", "FILE-LENGTH", "CYLINDER"
        );
        for request in queue.iter() {
            println!(
                "{:>5} {:>16} {:>#10x} {:>4} {:>#12x} {:>9}",
                request.process.get_id(),
                request.file_name,
                request.mem_start,
                request.read_write.to_string(),
                request.file_len,
                request.cylinder
            );
        }
    }
}

fn print_frame_table(system: &System) {
    println!("---- memory ----");
    println!("{:>6} {:>6} {:>6}", "FRAME", "PID", "PAGE");
    for (frame, entry) in system.frames().frames().iter().enumerate() {
        match entry.owner {
            Some((pid, page)) => println!("{:>6} {:>6} {:>6}", frame, pid, page),
            None => println!("{:>6} {:>6} {:>6}", frame, ".", "."),
        }
    }
    println!("Free frames: {}", system.frames().free_frame_count());
}

fn print_job_pool(system: &System) {
    println!("---- job pool ----");
    println!("{:>5} {:>8} {:>6}", "PID", "SIZE", "PAGES");
    for pcb in system.job_pool().iter() {
        println!(
            "{:>5} {:>8} {:>6}",
            pcb.get_id(),
            pcb.get_size(),
            pcb.get_num_pages()
        );
    }
}

fn print_system_average(system: &System) {
    println!(
        "Completed processes: {}, average total CPU time: {:.3}ms",
        system.completed_count(),
        system.cpu_time_avg()
    );
}
