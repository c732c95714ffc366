use crate::error::Result;
use crate::request::{ApiRequest, ApiResponse};

/// Async seam between the panels and the network.
///
/// A transport only moves bytes: any response the server produced, whatever
/// its status, is `Ok`. `Err` means no response was obtained at all.
pub trait Transport {
    fn send(
        &self,
        request: &ApiRequest,
    ) -> impl std::future::Future<Output = Result<ApiResponse>>;
}
