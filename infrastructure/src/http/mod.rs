//! HTTP adapter for the question-answering backend

mod backend;
mod response;

pub use backend::HttpQaBackend;
