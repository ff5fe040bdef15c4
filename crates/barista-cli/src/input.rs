//! Line input read on a plain thread.
//!
//! A blocked stdin read cannot be cancelled, so it lives on its own detached
//! thread; the session only waits on the channel and can leave on Ctrl-C
//! without joining the reader.

use std::io::{self, BufRead};
use std::thread;

use tokio::sync::mpsc;

/// Read `reader` line by line on a new thread.
///
/// The channel closes after end of input or the first read error, which is
/// delivered as the last message.
pub fn spawn_reader<R>(reader: R) -> mpsc::Receiver<io::Result<String>>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel(16);
    let spawned = thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || {
            for line in reader.lines() {
                let failed = line.is_err();
                if tx.blocking_send(line).is_err() || failed {
                    break;
                }
            }
            log::debug!("input reader finished");
        });
    if let Err(err) = spawned {
        log::error!("failed to start input reader: {err}");
    }
    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[tokio::test]
    async fn delivers_lines_then_closes() {
        let mut rx = spawn_reader(Cursor::new("CREATE A 1\nENQ A tea\n"));
        assert_eq!(rx.recv().await.unwrap().unwrap(), "CREATE A 1");
        assert_eq!(rx.recv().await.unwrap().unwrap(), "ENQ A tea");
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn pending_read_does_not_block_the_receiver() {
        struct Stalled;

        impl io::Read for Stalled {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                thread::sleep(std::time::Duration::from_secs(3600));
                Ok(0)
            }
        }

        let mut rx = spawn_reader(io::BufReader::new(Stalled));
        let waited =
            tokio::time::timeout(std::time::Duration::from_millis(50), rx.recv()).await;
        assert!(waited.is_err());
    }
}
