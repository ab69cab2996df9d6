pub mod gomematic_client;

pub use gomematic_client::GomematicClient;
