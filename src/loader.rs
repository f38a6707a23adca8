//! Binary descriptor-file loader.
//!
//! # File format
//!
//! Fixed-width, no padding, platform-native 4-byte unsigned integers:
//!
//! ```text
//! [u32 count]
//! repeat count times:
//!   [u32 burst_time] [u32 priority] [u32 arrival_time]
//! ```
//!
//! Total size is `4 + count * 12` bytes. A zero count, a truncated record
//! group, or an unreadable path fails the whole load.
//!
//! # Load order
//!
//! Each record is pushed to the FRONT of the returned deque, so the file's
//! last record ends up at the front and its first record at the back.
//! Policies drain from the back and therefore process records in file order.
//! This inversion is load-bearing; see the policy module.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::SimError;
use crate::models::ProcessDescriptor;

/// Path bytes that mark a malformed invocation when found in the first 32
/// bytes. A defensive guard, not a security boundary.
const REJECTED_PATH_BYTES: [u8; 5] = [b'\n', b'\t', b'\r', 0x0B, 0x0C];

/// Loads an ordered set of process descriptors from a binary file.
///
/// The loader is a pure function of the file contents: loading the same file
/// twice yields sequences with identical fields in identical order.
///
/// # Errors
/// - [`SimError::InvalidArgument`] for an empty path or a path containing
///   control characters within its first 32 bytes.
/// - [`SimError::Io`] if the file cannot be opened.
/// - [`SimError::MalformedInput`] for a zero record count, a zero burst, or
///   a byte stream that ends before all declared records are read.
pub fn load_process_descriptors<P: AsRef<Path>>(
    path: P,
) -> Result<VecDeque<ProcessDescriptor>, SimError> {
    let path = path.as_ref();
    check_path(path)?;

    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let count = read_u32(&mut reader)
        .map_err(|_| SimError::MalformedInput("file too short for record count".into()))?;
    if count == 0 {
        return Err(SimError::MalformedInput(
            "declared record count is zero".into(),
        ));
    }

    // Grown as records arrive; a bogus huge count fails on its first
    // missing record instead of reserving for it.
    let mut descriptors = VecDeque::new();
    for index in 0..count {
        let burst = read_field(&mut reader, "burst", index)?;
        let priority = read_field(&mut reader, "priority", index)?;
        let arrival = read_field(&mut reader, "arrival", index)?;

        if burst == 0 {
            return Err(SimError::MalformedInput(format!(
                "record {index} declares a zero burst time"
            )));
        }

        descriptors.push_front(ProcessDescriptor::new(burst, priority, arrival));
    }

    log::debug!(
        "loaded {} descriptors from {}",
        descriptors.len(),
        path.display()
    );
    Ok(descriptors)
}

/// Rejects empty paths and control characters in the leading 32 bytes.
fn check_path(path: &Path) -> Result<(), SimError> {
    let bytes = path.as_os_str().as_encoded_bytes();
    if bytes.is_empty() {
        return Err(SimError::InvalidArgument("empty descriptor-file path"));
    }
    if bytes
        .iter()
        .take(32)
        .any(|b| REJECTED_PATH_BYTES.contains(b))
    {
        return Err(SimError::InvalidArgument(
            "control character in descriptor-file path",
        ));
    }
    Ok(())
}

fn read_u32<R: Read>(reader: &mut R) -> std::io::Result<u32> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(u32::from_ne_bytes(buf))
}

fn read_field<R: Read>(reader: &mut R, field: &str, record: u32) -> Result<u32, SimError> {
    read_u32(reader).map_err(|_| {
        SimError::MalformedInput(format!("stream ended reading {field} of record {record}"))
    })
}
