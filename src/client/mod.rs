pub mod plane_client;

pub use plane_client::PlaneClient;
