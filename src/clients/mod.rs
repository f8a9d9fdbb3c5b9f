pub mod order_client;
pub mod service_client;

pub use order_client::OrderCalcClient;
pub use service_client::ServiceCalcClient;
