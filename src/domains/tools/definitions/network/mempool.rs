//! Mempool status tool.

use crate::api::UpstreamRequest;
use crate::domains::tools::definitions::common::NoParams;
use crate::domains::tools::{ApiTool, ToolResult};

#[derive(Debug, Clone, Default)]
pub struct MempoolTool;

impl MempoolTool {
    /// Upstream endpoint.
    pub const PATH: &'static str = "/network/mempool";
}

impl ApiTool for MempoolTool {
    const NAME: &'static str = "get_mempool";

    const DESCRIPTION: &'static str = "Get mempool status and fee estimates";

    type Params = NoParams;

    fn upstream_request(_params: NoParams) -> ToolResult<UpstreamRequest> {
        Ok(UpstreamRequest::get(Self::PATH).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mempool_request() {
        let request = MempoolTool::upstream_request(NoParams::default()).unwrap();
        assert_eq!(request.method(), "GET");
        assert_eq!(request.path(), "/network/mempool");
    }
}
