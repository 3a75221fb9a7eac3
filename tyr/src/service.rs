use self::{
    error::{Error, Result},
    http::{HttpResponse, RequestInfo, WorkResult},
    odin::TripDirections,
    options::ControlBlock,
};
use prost::Message;

pub mod error;
pub mod format;
pub mod http;
pub mod odin;
pub mod options;
pub mod osrm;
pub mod tables;
pub mod valhalla;

#[cfg(test)]
mod fixture;

pub const FOUND_ROUTE: &str = "Found route between points";

/// Where this worker sits in the pipeline. Fixed for the life of the worker.
#[derive(Clone, Debug, Default)]
pub struct Settings {
    /// Base endpoint of the proxy we pull jobs from.
    pub proxy: String,
    /// Endpoint finished responses are sent back through.
    pub loopback: String,
}

impl Settings {
    pub fn upstream_endpoint(&self) -> String {
        format!("{}_out", self.proxy)
    }
}

/// Turns trip directions into a response body. Built once, then asked to
/// handle one job at a time; nothing is carried over between jobs.
#[derive(Clone, Debug)]
pub struct TyrWorker {
    settings: Settings,
}

impl TyrWorker {
    pub fn with(settings: Settings) -> TyrWorker {
        log::debug!(
            "Worker reading from {} and answering through {}",
            settings.upstream_endpoint(),
            settings.loopback
        );
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Handles one job and packs the wire form of the response for the loopback.
    pub fn work(&self, job: &[Vec<u8>], info: &RequestInfo) -> WorkResult {
        WorkResult {
            intermediate: false,
            messages: vec![self.handle(job, info).to_string()],
        }
    }

    /// A job is the control block followed by the encoded trip directions.
    /// Whatever goes wrong, the caller gets a response back.
    pub fn handle(&self, job: &[Vec<u8>], info: &RequestInfo) -> HttpResponse {
        log::info!("Got Tyr Request {}", info.id);

        let mut response = match render(job) {
            Ok(body) => HttpResponse::ok_json(body),
            Err(e) => {
                log::warn!("Request {} failed: {e}", info.id);
                HttpResponse::bad_request(e.to_string())
            }
        };
        response.apply_info(info);
        response
    }
}

/// Decode both halves of the job, serialize in the requested format and
/// wrap the result in the jsonp callback, if one was given.
pub fn render(job: &[Vec<u8>]) -> Result<String> {
    let (Some(control), Some(payload)) = (job.first(), job.last()) else {
        return Err(Error::EmptyJob);
    };

    let control = ControlBlock::try_from(control.as_slice())?;
    let trip = TripDirections::decode(payload.as_slice())?;

    let body = if control.osrm() {
        log::debug!("Serializing {} maneuvers as osrm", trip.maneuver.len());
        osrm::serialize(&control.directions_options, &trip)?
    } else {
        log::debug!("Serializing {} maneuvers as valhalla", trip.maneuver.len());
        valhalla::serialize(&control.directions_options, &trip)?
    };

    Ok(match control.jsonp {
        Some(callback) => jsonp(&callback, &body),
        None => body,
    })
}

pub fn jsonp(callback: &str, body: &str) -> String {
    format!("{callback}({body})")
}
