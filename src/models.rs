// models.rs - Request, Destination, and Content types

/// Request type code as the downstream clearing system expects it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReqType {
    Wf,  // Workflow
    Nwf, // Non-workflow
    Uf,  // User-forced
}

impl ReqType {
    pub const ALL: [ReqType; 3] = [ReqType::Wf, ReqType::Nwf, ReqType::Uf];
}

impl std::fmt::Display for ReqType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReqType::Wf => write!(f, "WF"),
            ReqType::Nwf => write!(f, "NWF"),
            ReqType::Uf => write!(f, "UF"),
        }
    }
}

/// System that originated the request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReqSystem {
    StratsRecallGui,
    TradeFlow,
    RiskManager,
}

impl ReqSystem {
    pub const ALL: [ReqSystem; 3] = [
        ReqSystem::StratsRecallGui,
        ReqSystem::TradeFlow,
        ReqSystem::RiskManager,
    ];
}

impl std::fmt::Display for ReqSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReqSystem::StratsRecallGui => write!(f, "StratsRecallGUI"),
            ReqSystem::TradeFlow => write!(f, "TradeFlow"),
            ReqSystem::RiskManager => write!(f, "RiskManager"),
        }
    }
}

/// Request processing state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReqState {
    New,
    Processing,
    Completed,
    Failed,
}

impl ReqState {
    pub const ALL: [ReqState; 4] = [
        ReqState::New,
        ReqState::Processing,
        ReqState::Completed,
        ReqState::Failed,
    ];
}

impl std::fmt::Display for ReqState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReqState::New => write!(f, "NEW"),
            ReqState::Processing => write!(f, "PROCESSING"),
            ReqState::Completed => write!(f, "COMPLETED"),
            ReqState::Failed => write!(f, "FAILED"),
        }
    }
}

/// Delivery target system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetSystem {
    MlClear,
    Merlin,
}

impl TargetSystem {
    pub const ALL: [TargetSystem; 2] = [TargetSystem::MlClear, TargetSystem::Merlin];
}

impl std::fmt::Display for TargetSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetSystem::MlClear => write!(f, "MLClear"),
            TargetSystem::Merlin => write!(f, "Merlin"),
        }
    }
}

/// FTP delivery window for MLClear file drops
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FtpType {
    Sod, // Start of day
    Eod, // End of day
    Intraday,
}

impl FtpType {
    pub const ALL: [FtpType; 3] = [FtpType::Sod, FtpType::Eod, FtpType::Intraday];
}

impl std::fmt::Display for FtpType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FtpType::Sod => write!(f, "SOD"),
            FtpType::Eod => write!(f, "EOD"),
            FtpType::Intraday => write!(f, "INTRADAY"),
        }
    }
}

// ============================================================
// REQUEST (top-level synthetic record)
// ============================================================

/// A synthetic trade-processing request.
///
/// Immutable after construction; every request owns 1-3 destinations.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub req_id: String,
    pub req_type: ReqType,
    pub req_system: ReqSystem,
    /// Creation time, fixed-width `yyyyMMddHHmmssSSS`
    pub req_timestamp: String,
    pub req_state: ReqState,
    pub destinations: Vec<Destination>,
}

// ============================================================
// DESTINATION (tagged union over delivery targets)
// ============================================================

/// A delivery target for a request: a file drop (MLClear) or a
/// ticketing system (Merlin).
#[derive(Debug, Clone, PartialEq)]
pub enum Destination {
    MlClear(MlClearDestination),
    Merlin(MerlinDestination),
}

impl Destination {
    pub fn target_system(&self) -> TargetSystem {
        match self {
            Destination::MlClear(_) => TargetSystem::MlClear,
            Destination::Merlin(_) => TargetSystem::Merlin,
        }
    }

    /// Type tag the downstream system dispatches on
    pub fn kind(&self) -> &'static str {
        match self {
            Destination::MlClear(_) => "File",
            Destination::Merlin(_) => "Ticket",
        }
    }

    pub fn ticket_ids(&self) -> &[String] {
        match self {
            Destination::MlClear(d) => &d.ticket_ids,
            Destination::Merlin(d) => &d.ticket_ids,
        }
    }
}

/// MLClear file drop: CSV named `File_<8-hex>.csv` under a fixed FTP path,
/// carrying 1-3 content line items.
#[derive(Debug, Clone, PartialEq)]
pub struct MlClearDestination {
    pub ftp_type: FtpType,
    pub file_name: String,
    pub ftp_path: String,
    pub content: Vec<Content>,
    pub ticket_ids: Vec<String>,
}

/// Merlin ticketing delivery: nothing beyond the common ticket-id set.
#[derive(Debug, Clone, PartialEq)]
pub struct MerlinDestination {
    pub ticket_ids: Vec<String>,
}

// ============================================================
// CONTENT (MLClear line items)
// ============================================================

/// A fund/ticker/quantity/price line item inside an MLClear file.
#[derive(Debug, Clone, PartialEq)]
pub struct Content {
    pub fund: String,
    pub ticker: String,
    pub quantity: u32,
    pub price: f64,
}

impl std::fmt::Display for Content {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{Fund={}, Ticker={}, Quantity={}, Price={}}}",
            self.fund, self.ticker, self.quantity, self.price
        )
    }
}

// ============================================================
// TESTS
// ============================================================
