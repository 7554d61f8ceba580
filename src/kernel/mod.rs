mod config;
mod console;
mod cpu;
mod device_queue;
mod disk_queue;
mod job_pool;
mod memory;
mod process;
mod ready_queue;
mod system;

pub(crate) use config::{ConfigError, SystemConfig};
pub(crate) use console::{BurstQuery, Console, DeviceKind, Event, IoQuery, ReadWrite};
pub(crate) use cpu::Processor;
pub(crate) use device_queue::{DeviceQueue, IoRequest};
pub(crate) use disk_queue::DiskQueue;
pub(crate) use job_pool::JobPool;
pub(crate) use memory::FrameAllocator;
pub(crate) use process::ProcessControlBlock;
pub(crate) use ready_queue::ReadyQueue;
pub(crate) use system::System;
