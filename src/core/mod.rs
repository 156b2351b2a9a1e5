/// Decoder and encoder traits the adapters are generic over.
pub mod codec;

/// Orchestration layer owning the current session.
pub mod editor;

/// Encoding a session into a downloadable file.
pub mod export;

/// Loading raw content into a session.
pub mod ingest;

pub mod session;
