use crate::client::RecommendationService;
use crate::error::RecommendationError;
use crate::types::{Recommendation, RecommendationRequest};
use crossbeam_channel::{bounded, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

pub type FetchResult = Result<Vec<Recommendation>, RecommendationError>;

/// Handle for a recommendation request running on a background thread
pub struct FetchHandle {
    thread_handle: Option<JoinHandle<()>>,
    receiver: Receiver<FetchResult>,
}

impl FetchHandle {
    /// Non-blocking check; `None` while the request is still in flight.
    ///
    /// A worker that went away without reporting counts as a failed fetch.
    pub fn poll(&self) -> Option<FetchResult> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(RecommendationError::fetch_failed(
                "fetch worker exited without a result",
            ))),
        }
    }

    /// Blocking wait for the request to settle
    pub fn wait(mut self) -> FetchResult {
        let result = self.receiver.recv().unwrap_or_else(|_| {
            Err(RecommendationError::fetch_failed(
                "fetch worker exited without a result",
            ))
        });

        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
        result
    }
}

/// Issue `request` against `service` without blocking the caller
pub fn spawn_fetch(
    service: Arc<dyn RecommendationService>,
    request: RecommendationRequest,
) -> FetchHandle {
    let (sender, receiver) = bounded(1);

    let thread_handle = thread::spawn(move || {
        log::info!(
            "[FETCH] Requesting recommendations for {} interests / {} strengths",
            request.interests.len(),
            request.strengths.len()
        );
        let result = service.recommend(&request);
        let _ = sender.send(result);
    });

    FetchHandle {
        thread_handle: Some(thread_handle),
        receiver,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    struct FixedService(FetchResult);

    impl RecommendationService for FixedService {
        fn recommend(&self, _request: &RecommendationRequest) -> FetchResult {
            self.0.clone()
        }
    }

    struct PanickingService;

    impl RecommendationService for PanickingService {
        fn recommend(&self, _request: &RecommendationRequest) -> FetchResult {
            panic!("service blew up");
        }
    }

    fn request() -> RecommendationRequest {
        RecommendationRequest {
            name: "Alice".to_string(),
            interests: vec!["coding".to_string()],
            strengths: vec!["logic".to_string()],
        }
    }

    fn poll_until_settled(handle: &FetchHandle) -> FetchResult {
        for _ in 0..500 {
            if let Some(result) = handle.poll() {
                return result;
            }
            thread::sleep(Duration::from_millis(5));
        }
        panic!("fetch never settled");
    }

    #[test]
    fn test_wait_returns_service_result() {
        let recs = vec![Recommendation {
            career: "Engineer".to_string(),
            description: "Builds things".to_string(),
            roadmap: vec!["Learn math".to_string()],
        }];
        let handle = spawn_fetch(Arc::new(FixedService(Ok(recs.clone()))), request());
        assert_eq!(handle.wait().unwrap(), recs);
    }

    #[test]
    fn test_poll_reports_failure() {
        let err = RecommendationError::fetch_failed("boom");
        let handle = spawn_fetch(Arc::new(FixedService(Err(err.clone()))), request());
        assert_eq!(poll_until_settled(&handle), Err(err));
    }

    #[test]
    fn test_panicking_worker_settles_as_failure() {
        let handle = spawn_fetch(Arc::new(PanickingService), request());
        let result = poll_until_settled(&handle);
        assert!(result.is_err());
    }
}
