pub mod http_client;
pub mod synchronizer;
pub mod controller;

pub use http_client::{ ApiError, HttpFactCheckClient };
pub use synchronizer::{ PollingSynchronizer, SnapshotHandle };
pub use controller::{ RequestState, SubmitOutcome, VerificationController };
