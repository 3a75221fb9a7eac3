pub use self::service::{
    http::{HttpResponse, RequestInfo, WorkResult},
    Settings, TyrWorker,
};

pub mod service;

pub type GeneralResult = Result<(), Box<dyn std::error::Error>>;
