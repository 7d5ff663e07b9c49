//! Workflow Monitoring
//!
//! Blocking poll loop over the workflow status endpoint. The loop sleeps
//! before every check, including the first one, and keeps polling until
//! the workflow reaches a terminal status or a request fails. There is no
//! retry: a single transport or decoding failure aborts monitoring.
//!
//! By default the loop has no upper bound on its lifetime; an optional
//! deadline turns a long-overdue run into an error instead of blocking
//! the caller forever.

use std::thread;
use std::time::{Duration, Instant};

use chrono::Utc;
use log::{info, warn};

use crate::api::SeqeraClient;
use crate::error::SeqeraError;
use crate::workflow::status::WorkflowStatus;

/// Time between workflow status checks.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Polling behavior knobs.
#[derive(Clone, Debug)]
pub struct MonitorOptions {
    /// Delay between status checks (also applied before the first one).
    pub poll_interval: Duration,

    /// Overall time limit; `None` polls until a terminal status.
    pub deadline: Option<Duration>,
}

impl Default for MonitorOptions {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            deadline: None,
        }
    }
}

/// Blocks until the workflow reaches a terminal state.
///
/// Returns `Ok(())` when the workflow succeeds. Fails with
/// [`SeqeraError::WorkflowFailed`] on a FAILED/CANCELLED/UNKNOWN status,
/// and with [`SeqeraError::DeadlineExceeded`] if `options.deadline`
/// elapses first. Any other status label keeps the loop running.
pub fn monitor_workflow(
    client: &SeqeraClient,
    workflow_id: &str,
    options: &MonitorOptions,
) -> Result<(), SeqeraError> {
    let started = Instant::now();
    let started_at = Utc::now();

    info!(
        "Monitoring workflow {} (poll interval: {}s)",
        workflow_id,
        options.poll_interval.as_secs()
    );

    loop {
        thread::sleep(options.poll_interval);

        if let Some(deadline) = options.deadline {
            if started.elapsed() >= deadline {
                warn!(
                    "Workflow {} still not terminal after {}s",
                    workflow_id,
                    deadline.as_secs()
                );
                return Err(SeqeraError::DeadlineExceeded(deadline.as_secs()));
            }
        }

        let label = client.workflow_status(workflow_id)?;
        let status = WorkflowStatus::classify(&label);

        match status {
            WorkflowStatus::Succeeded => {
                let elapsed = Utc::now().signed_duration_since(started_at);
                info!(
                    "Workflow {} succeeded after {}m of monitoring",
                    workflow_id,
                    elapsed.num_minutes()
                );
                return Ok(());
            }
            s if s.is_failure() => {
                warn!("Workflow {} reached terminal status: {}", workflow_id, label);
                return Err(SeqeraError::WorkflowFailed(label));
            }
            _ => {
                info!("Workflow {} status: {}", workflow_id, label);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn fast_options() -> MonitorOptions {
        MonitorOptions {
            poll_interval: Duration::from_millis(1),
            deadline: None,
        }
    }

    #[test]
    fn test_default_options_poll_forever_every_five_minutes() {
        let options = MonitorOptions::default();
        assert_eq!(options.poll_interval, Duration::from_secs(300));
        assert!(options.deadline.is_none());
    }

    #[test]
    fn test_monitor_returns_on_succeeded() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/workflow/wf-1")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"workflow": {"status": "SUCCEEDED"}}"#)
            .expect(1)
            .create();

        let client = SeqeraClient::new(&server.url(), "test-token");
        let result = monitor_workflow(&client, "wf-1", &fast_options());

        assert!(result.is_ok());
        mock.assert();
    }

    #[test]
    fn test_monitor_polls_until_succeeded_then_stops() {
        let mut server = mockito::Server::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let mock = server
            .mock("GET", "/workflow/wf-2")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body_from_request(move |_| {
                if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                    br#"{"workflow": {"status": "RUNNING"}}"#.to_vec()
                } else {
                    br#"{"workflow": {"status": "SUCCEEDED"}}"#.to_vec()
                }
            })
            .expect(2)
            .create();

        let client = SeqeraClient::new(&server.url(), "test-token");
        let result = monitor_workflow(&client, "wf-2", &fast_options());

        assert!(result.is_ok());
        // No further requests once SUCCEEDED was observed
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        mock.assert();
    }

    #[test]
    fn test_monitor_fails_on_failed_status() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/workflow/wf-3")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"workflow": {"status": "FAILED"}}"#)
            .create();

        let client = SeqeraClient::new(&server.url(), "test-token");
        let result = monitor_workflow(&client, "wf-3", &fast_options());

        match result {
            Err(SeqeraError::WorkflowFailed(status)) => assert_eq!(status, "FAILED"),
            other => panic!("expected WorkflowFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_monitor_fails_on_cancelled_status() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/workflow/wf-4")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"workflow": {"status": "CANCELLED"}}"#)
            .create();

        let client = SeqeraClient::new(&server.url(), "test-token");
        let result = monitor_workflow(&client, "wf-4", &fast_options());

        assert!(matches!(result, Err(SeqeraError::WorkflowFailed(s)) if s == "CANCELLED"));
    }

    #[test]
    fn test_monitor_fails_on_missing_status_field() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/workflow/wf-5")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"workflow": {}}"#)
            .create();

        let client = SeqeraClient::new(&server.url(), "test-token");
        let result = monitor_workflow(&client, "wf-5", &fast_options());

        assert!(matches!(result, Err(SeqeraError::MissingField("status"))));
    }

    #[test]
    fn test_monitor_fails_immediately_on_http_error() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/workflow/wf-6")
            .with_status(500)
            .with_body("internal error")
            .expect(1)
            .create();

        let client = SeqeraClient::new(&server.url(), "test-token");
        let result = monitor_workflow(&client, "wf-6", &fast_options());

        // No retry on transport failure
        assert!(matches!(result, Err(SeqeraError::Api { status: 500, .. })));
        mock.assert();
    }

    #[test]
    fn test_monitor_deadline_before_first_poll() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/workflow/wf-7")
            .with_status(200)
            .with_body(r#"{"workflow": {"status": "RUNNING"}}"#)
            .expect(0)
            .create();

        let client = SeqeraClient::new(&server.url(), "test-token");
        let options = MonitorOptions {
            poll_interval: Duration::from_millis(1),
            deadline: Some(Duration::ZERO),
        };

        let result = monitor_workflow(&client, "wf-7", &options);

        assert!(matches!(result, Err(SeqeraError::DeadlineExceeded(_))));
        mock.assert();
    }

    #[test]
    fn test_monitor_deadline_on_stalled_workflow() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/workflow/wf-8")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"workflow": {"status": "RUNNING"}}"#)
            .expect_at_least(1)
            .create();

        let client = SeqeraClient::new(&server.url(), "test-token");
        let options = MonitorOptions {
            poll_interval: Duration::from_millis(1),
            deadline: Some(Duration::from_millis(30)),
        };

        let result = monitor_workflow(&client, "wf-8", &options);

        assert!(matches!(result, Err(SeqeraError::DeadlineExceeded(_))));
    }

    #[test]
    fn test_unrecognized_status_keeps_polling() {
        let mut server = mockito::Server::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let mock = server
            .mock("GET", "/workflow/wf-9")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body_from_request(move |_| {
                match counter.fetch_add(1, Ordering::SeqCst) {
                    0 => br#"{"workflow": {"status": "SUBMITTED"}}"#.to_vec(),
                    1 => br#"{"workflow": {"status": "SOME_FUTURE_STATE"}}"#.to_vec(),
                    _ => br#"{"workflow": {"status": "SUCCEEDED"}}"#.to_vec(),
                }
            })
            .expect(3)
            .create();

        let client = SeqeraClient::new(&server.url(), "test-token");
        let result = monitor_workflow(&client, "wf-9", &fast_options());

        assert!(result.is_ok());
        mock.assert();
    }
}
