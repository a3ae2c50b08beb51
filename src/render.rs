//! Ad hoc human-readable rendering of generated requests.
//!
//! Console output for eyeballing batches, not a stable wire format.

use std::fmt;

use crate::models::{Destination, Request};

/// Render one request with all top-level fields and every destination.
pub fn render_request(request: &Request) -> String {
    RequestDisplay(request).to_string()
}

struct RequestDisplay<'a>(&'a Request);

impl fmt::Display for RequestDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let request = self.0;
        writeln!(f, "Request ID: {}", request.req_id)?;
        writeln!(f, "Request Type: {}", request.req_type)?;
        writeln!(f, "Request System: {}", request.req_system)?;
        writeln!(f, "Request Timestamp: {}", request.req_timestamp)?;
        writeln!(f, "Request State: {}", request.req_state)?;
        writeln!(f, "Destinations:")?;
        for dest in &request.destinations {
            writeln!(f, "  Target System: {}", dest.target_system())?;
            writeln!(f, "  Type: {}", dest.kind())?;
            if let Destination::MlClear(ml) = dest {
                writeln!(f, "  FTP Type: {}", ml.ftp_type)?;
                writeln!(f, "  File Name: {}", ml.file_name)?;
                writeln!(f, "  FTP Path: {}", ml.ftp_path)?;
                writeln!(f, "  Content: [{}]", join_display(&ml.content))?;
            }
            writeln!(f, "  Ticket IDs: [{}]", dest.ticket_ids().join(", "))?;
        }
        Ok(())
    }
}

fn join_display<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::RequestGenerator;
    use crate::models::{
        Content, FtpType, MerlinDestination, MlClearDestination, ReqState, ReqSystem, ReqType,
    };

    fn fixed_request() -> Request {
        Request {
            req_id: "00000000-0000-4000-8000-000000000000".to_string(),
            req_type: ReqType::Wf,
            req_system: ReqSystem::TradeFlow,
            req_timestamp: "20260823120000123".to_string(),
            req_state: ReqState::New,
            destinations: vec![
                Destination::MlClear(MlClearDestination {
                    ftp_type: FtpType::Sod,
                    file_name: "File_deadbeef.csv".to_string(),
                    ftp_path: "/jumpftp/outgoing".to_string(),
                    content: vec![Content {
                        fund: "JUMPTP_SWAP3".to_string(),
                        ticker: "MSFT".to_string(),
                        quantity: 500,
                        price: 99.25,
                    }],
                    ticket_ids: vec!["t-1".to_string(), "t-2".to_string()],
                }),
                Destination::Merlin(MerlinDestination { ticket_ids: vec![] }),
            ],
        }
    }

    #[test]
    fn test_render_shows_all_top_level_fields() {
        let text = render_request(&fixed_request());
        assert!(text.contains("Request ID: 00000000-0000-4000-8000-000000000000"));
        assert!(text.contains("Request Type: WF"));
        assert!(text.contains("Request System: TradeFlow"));
        assert!(text.contains("Request Timestamp: 20260823120000123"));
        assert!(text.contains("Request State: NEW"));
        assert!(text.contains("Destinations:"));
    }

    #[test]
    fn test_render_shows_variant_fields() {
        let text = render_request(&fixed_request());
        assert!(text.contains("Target System: MLClear"));
        assert!(text.contains("Type: File"));
        assert!(text.contains("FTP Type: SOD"));
        assert!(text.contains("File Name: File_deadbeef.csv"));
        assert!(text.contains("FTP Path: /jumpftp/outgoing"));
        assert!(text.contains("{Fund=JUMPTP_SWAP3, Ticker=MSFT, Quantity=500, Price=99.25}"));
        assert!(text.contains("Ticket IDs: [t-1, t-2]"));
        assert!(text.contains("Target System: Merlin"));
        assert!(text.contains("Type: Ticket"));
        assert!(text.contains("Ticket IDs: []"));
    }

    #[test]
    fn test_render_generated_request_has_destination_lines() {
        let mut generator = RequestGenerator::with_seed(29);
        let request = generator.generate_request();
        let text = render_request(&request);
        assert!(
            text.contains("Target System: "),
            "destination list must be non-empty"
        );
    }
}
