//! Shared fixtures for integration tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use engine::errors::domain::InfraErrorKind;
use engine::{
    DomainError, EngineConfig, GameRepoMem, GamesService, ScoreAck, ScoreReporter, ScoreRequest,
};
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Idempotent logging init for integration tests, mirroring the crate's
/// unit-test bootstrap.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

#[ctor::ctor]
fn init_test_logging() {
    init_logging();
}

/// Recording scoring double: remembers every request, optionally failing.
#[derive(Default)]
pub struct ScoreReporterFake {
    pub requests: Mutex<Vec<ScoreRequest>>,
    pub fail: bool,
}

#[async_trait]
impl ScoreReporter for ScoreReporterFake {
    async fn report(&self, request: &ScoreRequest) -> Result<ScoreAck, DomainError> {
        self.requests
            .lock()
            .expect("requests mutex poisoned")
            .push(request.clone());
        if self.fail {
            return Err(DomainError::infra(
                InfraErrorKind::ScoringUnavailable,
                "scoring endpoint unreachable",
            ));
        }
        Ok(ScoreAck {
            status: 200,
            message: format!("scored {} moves for {}", request.moves, request.player),
        })
    }
}

pub struct TestHarness {
    pub service: GamesService,
    pub repo: Arc<GameRepoMem>,
    pub scores: Arc<ScoreReporterFake>,
}

pub fn harness() -> TestHarness {
    harness_with(ScoreReporterFake::default())
}

pub fn harness_with(scores: ScoreReporterFake) -> TestHarness {
    let repo = Arc::new(GameRepoMem::new());
    let scores = Arc::new(scores);
    let service = GamesService::new(repo.clone(), scores.clone(), EngineConfig::default());
    TestHarness {
        service,
        repo,
        scores,
    }
}
