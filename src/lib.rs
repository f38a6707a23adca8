//! Offline CPU-scheduling simulator.
//!
//! Simulates classic dispatch policies over a batch of process descriptors
//! and reports aggregate performance metrics (average waiting time, average
//! turnaround time, total simulated run time). Deterministic and
//! single-threaded — this is a policy-comparison tool, not a live scheduler.
//!
//! # Modules
//!
//! - **`models`**: Domain types — [`ProcessDescriptor`], [`ScheduleResult`],
//!   [`SimClock`]
//! - **`loader`**: Binary descriptor-file loader
//! - **`policy`**: The five dispatch policies — FCFS, SJF, Priority,
//!   Round-Robin, SRT
//! - **`workload`**: Descriptor-file writer and random workload generation
//!
//! # Example
//!
//! ```
//! use std::collections::VecDeque;
//! use dispatch_sim::models::ProcessDescriptor;
//! use dispatch_sim::policy;
//!
//! let mut queue = VecDeque::new();
//! queue.push_back(ProcessDescriptor::new(4, 0, 0));
//! queue.push_back(ProcessDescriptor::new(2, 0, 1));
//!
//! let result = policy::shortest_job_first(&mut queue).unwrap();
//! assert_eq!(result.total_run_time, 7);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5: CPU Scheduling
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod loader;
pub mod models;
pub mod policy;
pub mod workload;

mod error;

pub use error::SimError;
pub use loader::load_process_descriptors;
pub use models::{ProcessDescriptor, ScheduleResult, SimClock};
pub use policy::Policy;
