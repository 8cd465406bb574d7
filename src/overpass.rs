pub mod client;
pub mod query;
pub mod response;
pub use client::OverpassApi;
pub use client::OverpassClient;
pub use query::build;
pub use query::request_url;
pub use response::extract;
