//! Command-line front end.
//!
//! Usage: `dispatch-sim <pcb file> <FCFS|SJF|P|RR|SRT> [quantum]`
//!
//! Loads the binary descriptor file, runs the named policy once, and prints
//! the three result fields. Any failure becomes a message on stderr and a
//! non-zero exit status; the library itself never prints.

use std::process::ExitCode;

use dispatch_sim::{load_process_descriptors, Policy};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!("usage: {} <pcb file> <FCFS|SJF|P|RR|SRT> [quantum]", args[0]);
        return ExitCode::FAILURE;
    }

    let pcb_file = &args[1];
    let algorithm = &args[2];

    let quantum = match args.get(3) {
        Some(raw) => match raw.parse::<u32>() {
            Ok(q) if q > 0 => Some(q),
            _ => {
                eprintln!("error: quantum must be a positive integer");
                return ExitCode::FAILURE;
            }
        },
        None => None,
    };

    let policy = match Policy::from_args(algorithm, quantum) {
        Ok(policy) => policy,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("valid algorithms: FCFS, SJF, P, RR <quantum>, SRT");
            return ExitCode::FAILURE;
        }
    };

    let mut ready_queue = match load_process_descriptors(pcb_file) {
        Ok(queue) => queue,
        Err(err) => {
            eprintln!("error: failed to load descriptors from '{pcb_file}': {err}");
            return ExitCode::FAILURE;
        }
    };

    match policy.run(&mut ready_queue) {
        Ok(result) => {
            println!("Algorithm: {}", policy.name());
            println!("Average Waiting Time: {:.2}", result.average_waiting_time);
            println!(
                "Average Turnaround Time: {:.2}",
                result.average_turnaround_time
            );
            println!("Total Run Time: {}", result.total_run_time);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: scheduling under {} failed: {err}", policy.name());
            ExitCode::FAILURE
        }
    }
}
