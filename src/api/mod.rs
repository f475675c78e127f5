mod client;
mod session;
mod transport;

pub use client::{ApiClient, RecommendationResult, HOME_PATH};
pub use session::{
    ClientContext, FileTokenStore, MemoryTokenStore, Navigator, RecordingNavigator, TokenStore,
};
pub use transport::{
    ApiRequest, ApiResponse, HttpTransport, Method, MockReply, MockTransport, Transport,
};
