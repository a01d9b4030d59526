//! Execution Gateway
//!
//! Forwards a run request to an opaque backend and always hands back an
//! `ExecutionResult`. Transport and backend failures become synthetic
//! `exitCode = 1` results at this boundary.
//!
//! Only one run may be in flight per gateway; a second `run` while the
//! first is pending is refused.

mod http;
mod simulation;

pub use http::HttpExecutionBackend;
pub use simulation::SimulationBackend;

use std::cell::Cell;
use std::rc::Rc;

use async_trait::async_trait;

use crate::config::{BackendKind, ExecutionConfig};
use crate::domain::{is_executable_name, DomainResult, ExecutionRequest, ExecutionResult};

/// First line of every synthetic failure result
pub const FAILURE_MESSAGE: &str = "Runtime Error: Failed to communicate with execution engine.";

/// Capability implemented by whatever actually compiles and runs code
#[async_trait(?Send)]
pub trait CodeExecutionBackend {
    fn name(&self) -> &'static str;

    /// Run the request; any `Err` is reported to the user as a failure result
    async fn execute(&self, request: &ExecutionRequest) -> DomainResult<ExecutionResult>;
}

/// Build the backend selected by the config
pub fn backend_from_config(config: &ExecutionConfig) -> Rc<dyn CodeExecutionBackend> {
    match config.backend {
        BackendKind::Http => Rc::new(HttpExecutionBackend::new(&config.endpoint)),
        BackendKind::Simulation => Rc::new(SimulationBackend::new(
            &config.simulation_endpoint,
            &config.model,
            config.api_key.clone(),
        )),
    }
}

/// Clears the in-flight flag when the run finishes or its future is dropped
struct RunGuard {
    running: Rc<Cell<bool>>,
}

impl Drop for RunGuard {
    fn drop(&mut self) {
        self.running.set(false);
    }
}

#[derive(Clone)]
pub struct ExecutionGateway {
    backend: Rc<dyn CodeExecutionBackend>,
    running: Rc<Cell<bool>>,
}

impl ExecutionGateway {
    pub fn new(backend: Rc<dyn CodeExecutionBackend>) -> Self {
        Self {
            backend,
            running: Rc::new(Cell::new(false)),
        }
    }

    pub fn from_config(config: &ExecutionConfig) -> Self {
        Self::new(backend_from_config(config))
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Whether a run is currently waiting on the backend
    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Call the backend, converting every failure into a result
    pub async fn execute(&self, request: &ExecutionRequest) -> ExecutionResult {
        tracing::info!(
            backend = self.backend.name(),
            entry = %request.entry_path,
            files = request.files.len(),
            "executing"
        );
        match self.backend.execute(request).await {
            Ok(result) => {
                tracing::debug!(exit_code = result.exit_code, "execution finished");
                result
            }
            Err(e) => {
                tracing::warn!(error = %e, "execution backend failed");
                ExecutionResult::failure(format!("{}\n{}", FAILURE_MESSAGE, e))
            }
        }
    }

    /// Run an entry file unless it is not executable or a run is in flight
    ///
    /// Returns `None` without contacting the backend in both refused cases.
    pub async fn run(&self, request: &ExecutionRequest) -> Option<ExecutionResult> {
        if !is_executable_name(&request.entry_name) {
            tracing::debug!(entry = %request.entry_name, "not an executable file");
            return None;
        }
        if self.running.replace(true) {
            tracing::debug!("run already in flight");
            return None;
        }
        let _guard = RunGuard {
            running: self.running.clone(),
        };
        Some(self.execute(request).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DomainError, SourcePayload};
    use futures::channel::oneshot;
    use std::cell::RefCell;

    fn request(entry: &str) -> ExecutionRequest {
        ExecutionRequest {
            entry_name: entry.to_string(),
            entry_path: entry.to_string(),
            entry_content: String::new(),
            files: vec![SourcePayload {
                name: entry.to_string(),
                path: entry.to_string(),
                content: String::new(),
            }],
            stdin: String::new(),
        }
    }

    struct FixedBackend {
        result: DomainResult<ExecutionResult>,
        calls: Cell<usize>,
    }

    #[async_trait(?Send)]
    impl CodeExecutionBackend for FixedBackend {
        fn name(&self) -> &'static str {
            "fixed"
        }

        async fn execute(&self, _request: &ExecutionRequest) -> DomainResult<ExecutionResult> {
            self.calls.set(self.calls.get() + 1);
            self.result.clone()
        }
    }

    /// Holds the run open until the test releases it
    struct GatedBackend {
        gate: RefCell<Option<oneshot::Receiver<()>>>,
    }

    #[async_trait(?Send)]
    impl CodeExecutionBackend for GatedBackend {
        fn name(&self) -> &'static str {
            "gated"
        }

        async fn execute(&self, _request: &ExecutionRequest) -> DomainResult<ExecutionResult> {
            let gate = self.gate.borrow_mut().take();
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            Ok(ExecutionResult {
                stdout: "done\n".into(),
                stderr: String::new(),
                exit_code: 0,
            })
        }
    }

    #[tokio::test]
    async fn test_success_passes_through() {
        let backend = Rc::new(FixedBackend {
            result: Ok(ExecutionResult {
                stdout: "10 + 5 = 15\n".into(),
                stderr: String::new(),
                exit_code: 0,
            }),
            calls: Cell::new(0),
        });
        let gateway = ExecutionGateway::new(backend.clone());

        let result = gateway.run(&request("Main.java")).await.unwrap();
        assert_eq!(result.stdout, "10 + 5 = 15\n");
        assert!(result.is_success());
        assert_eq!(backend.calls.get(), 1);
        assert!(!gateway.is_running());
    }

    #[tokio::test]
    async fn test_backend_error_becomes_failure_result() {
        let backend = Rc::new(FixedBackend {
            result: Err(DomainError::Execution("connection refused".into())),
            calls: Cell::new(0),
        });
        let gateway = ExecutionGateway::new(backend);

        let result = gateway.execute(&request("Main.java")).await;
        assert_eq!(result.exit_code, 1);
        assert!(result.stdout.is_empty());
        assert!(result.stderr.starts_with(FAILURE_MESSAGE));
        assert!(result.stderr.contains("connection refused"));
    }

    #[tokio::test]
    async fn test_non_executable_entry_is_skipped() {
        let backend = Rc::new(FixedBackend {
            result: Ok(ExecutionResult::failure("unused")),
            calls: Cell::new(0),
        });
        let gateway = ExecutionGateway::new(backend.clone());

        assert!(gateway.run(&request("notes.txt")).await.is_none());
        assert_eq!(backend.calls.get(), 0);
    }

    #[tokio::test]
    async fn test_second_run_refused_while_first_in_flight() {
        let (release, gate) = oneshot::channel();
        let gateway = ExecutionGateway::new(Rc::new(GatedBackend {
            gate: RefCell::new(Some(gate)),
        }));
        let req = request("Main.java");

        let first = gateway.run(&req);
        let second = async {
            // First run has claimed the flag by the time this is polled
            let refused = gateway.run(&req).await;
            assert!(gateway.is_running());
            let _ = release.send(());
            refused
        };
        let (first, second) = futures::join!(first, second);

        assert_eq!(first.unwrap().stdout, "done\n");
        assert!(second.is_none());
        assert!(!gateway.is_running());
    }
}
