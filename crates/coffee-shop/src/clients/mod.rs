pub mod order_client;

pub use order_client::OrderClient;
pub use resource_actor::ActorClient;
