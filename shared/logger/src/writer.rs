//! Dedicated log writer thread.

use crate::error::Result;
use crate::record::Record;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::mpsc::Receiver;

/// Opens the log file in append mode and spawns the writer thread.
/// The thread drains the channel until every sender is dropped.
pub(crate) fn spawn(log_path: &Path, receiver: Receiver<Record>) -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(log_path)?;
    std::thread::spawn(move || drain(file, receiver));
    Ok(())
}

fn drain(mut file: File, receiver: Receiver<Record>) {
    for record in receiver {
        if let Err(e) = file.write_all(record.render().as_bytes()) {
            eprintln!("log write failed: {}", e);
            continue;
        }
        // Flush per record so tail -f and crash dumps stay useful
        if let Err(e) = file.flush() {
            eprintln!("log flush failed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::LogLevel;
    use std::fs;
    use std::sync::mpsc::channel;
    use std::thread;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn test_spawn_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.log");
        let (_tx, rx) = channel();

        spawn(&path, rx).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_records_are_written_in_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.log");
        let (tx, rx) = channel();

        spawn(&path, rx).unwrap();
        tx.send(Record::new(LogLevel::Info, "T", "first")).unwrap();
        tx.send(Record::new(LogLevel::Info, "T", "second")).unwrap();
        drop(tx);

        thread::sleep(Duration::from_millis(100));

        let content = fs::read_to_string(path).unwrap();
        let first = content.find("first").unwrap();
        let second = content.find("second").unwrap();
        assert!(first < second);
    }
}
