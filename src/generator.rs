//! Synthetic request generator.
//!
//! Fabricates randomized [`Request`] records with nested [`Destination`]
//! variants for exercising the downstream trade/clearing flow. Pure
//! in-memory construction: the generator never fails and performs no I/O.

use chrono::Local;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

use crate::models::{
    Content, Destination, FtpType, MerlinDestination, MlClearDestination, ReqState, ReqSystem,
    ReqType, Request, TargetSystem,
};

/// Fund pool for MLClear content lines
pub const FUNDS: [&str; 3] = ["JUMPTP_SWAP3", "HEDGE_FUND_A", "EQUITY_FUND_B"];

/// Ticker pool for MLClear content lines
pub const TICKERS: [&str; 5] = ["AAPL", "GOOGL", "MSFT", "AMZN", "FB"];

/// Fixed drop path for MLClear file deliveries
pub const FTP_PATH: &str = "/jumpftp/outgoing";

const FILE_NAME_PREFIX: &str = "File_";

/// Request generator owning its random source.
///
/// One generator is meant to live for a whole batch; every
/// `generate_*` call draws from the same source.
pub struct RequestGenerator {
    rng: StdRng,
}

impl RequestGenerator {
    /// Entropy-seeded generator for normal runs.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic generator for tests and reproducible batches.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate exactly `count` independent requests, in insertion order.
    pub fn generate_requests(&mut self, count: usize) -> Vec<Request> {
        let requests: Vec<Request> = (0..count).map(|_| self.generate_request()).collect();
        tracing::debug!(count = requests.len(), "generated request batch");
        requests
    }

    /// Build one request with random field picks and a creation-time stamp.
    pub fn generate_request(&mut self) -> Request {
        Request {
            req_id: Uuid::new_v4().to_string(),
            req_type: self.pick(&ReqType::ALL),
            req_system: self.pick(&ReqSystem::ALL),
            req_timestamp: Local::now().format("%Y%m%d%H%M%S%3f").to_string(),
            req_state: self.pick(&ReqState::ALL),
            destinations: self.generate_destinations(),
        }
    }

    /// 1-3 destinations, uniform random count.
    fn generate_destinations(&mut self) -> Vec<Destination> {
        let dest_count = self.rng.gen_range(1..=3);
        (0..dest_count).map(|_| self.generate_destination()).collect()
    }

    /// Uniform pick over target systems, dispatched to the variant builder.
    fn generate_destination(&mut self) -> Destination {
        match self.pick(&TargetSystem::ALL) {
            TargetSystem::MlClear => Destination::MlClear(self.generate_ml_clear()),
            TargetSystem::Merlin => Destination::Merlin(self.generate_merlin()),
        }
    }

    fn generate_ml_clear(&mut self) -> MlClearDestination {
        MlClearDestination {
            ftp_type: self.pick(&FtpType::ALL),
            file_name: self.generate_file_name(),
            ftp_path: FTP_PATH.to_string(),
            content: self.generate_content(),
            ticket_ids: self.generate_ticket_ids(),
        }
    }

    fn generate_merlin(&mut self) -> MerlinDestination {
        MerlinDestination {
            ticket_ids: self.generate_ticket_ids(),
        }
    }

    /// 1-3 fund/ticker/quantity/price line items.
    fn generate_content(&mut self) -> Vec<Content> {
        let content_count = self.rng.gen_range(1..=3);
        (0..content_count)
            .map(|_| Content {
                fund: self.pick(&FUNDS).to_string(),
                ticker: self.pick(&TICKERS).to_string(),
                quantity: self.rng.gen_range(1..=10_000),
                price: self.rng.gen_range(0.0..1000.0),
            })
            .collect()
    }

    /// 0-3 ticket identifiers.
    fn generate_ticket_ids(&mut self) -> Vec<String> {
        let ticket_count = self.rng.gen_range(0..=3);
        (0..ticket_count).map(|_| Uuid::new_v4().to_string()).collect()
    }

    /// `File_` + first 8 hex chars of a v4 UUID + `.csv`
    fn generate_file_name(&mut self) -> String {
        let token = Uuid::new_v4().simple().to_string();
        format!("{}{}.csv", FILE_NAME_PREFIX, &token[..8])
    }

    fn pick<T: Copy>(&mut self, pool: &[T]) -> T {
        pool[self.rng.gen_range(0..pool.len())]
    }
}

impl Default for RequestGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================
// TESTS
// ============================================================
