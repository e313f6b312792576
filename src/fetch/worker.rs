//! Background thread bridging controller commands to a [`PageFetcher`].
//!
//! Requests are executed in order on one worker thread; discarding responses
//! that arrive for a superseded query is the controller's job, not ours.

use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::controller::{FetchOutcome, FetchRequest};

use super::PageFetcher;

/// Spawns the worker and hands back its request/outcome endpoints. The thread
/// exits once the request sender is dropped.
pub fn spawn_fetch_worker(
    fetcher: Box<dyn PageFetcher>,
) -> (Sender<FetchRequest>, Receiver<FetchOutcome>) {
    let (request_tx, request_rx) = unbounded::<FetchRequest>();
    let (outcome_tx, outcome_rx) = unbounded::<FetchOutcome>();

    std::thread::spawn(move || {
        for request in request_rx.iter() {
            let result = fetcher.fetch_page(&request.query, request.page);
            let outcome = FetchOutcome { seq: request.seq, page: request.page, result };
            if outcome_tx.send(outcome).is_err() {
                break;
            }
        }
    });

    (request_tx, outcome_rx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::FlaticonFetcher;
    use std::time::Duration;

    #[test]
    fn worker_echoes_request_tags() {
        let fetcher = FlaticonFetcher::new(true).unwrap();
        let (tx, rx) = spawn_fetch_worker(Box::new(fetcher));
        tx.send(FetchRequest { seq: 7, query: "ring".into(), page: 2 }).unwrap();

        let outcome = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(outcome.seq, 7);
        assert_eq!(outcome.page, 2);
        assert_eq!(outcome.result.unwrap().len(), 20);
    }

    #[test]
    fn worker_shuts_down_when_requests_close() {
        let fetcher = FlaticonFetcher::new(true).unwrap();
        let (tx, rx) = spawn_fetch_worker(Box::new(fetcher));
        drop(tx);
        assert!(rx.recv_timeout(Duration::from_millis(500)).is_err());
    }
}
