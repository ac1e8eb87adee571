use std::time::Duration;

use bon::bon;
use serde::{Deserialize, de::DeserializeOwned};
use serde_with::serde_as;
use ureq::{Agent, RequestBuilder, typestate::WithoutBody};

use crate::{
    core::{
        event::{RawEvent, StationNames},
        fetch::Fetch,
    },
    error::{FetchError, ReportError},
    prelude::*,
};

/// OpenSprinkler controller HTTP API.
pub struct Client {
    agent: Agent,
    host: String,
    password_hash: String,
}

#[bon]
impl Client {
    /// Connect to the controller at `host`, for example: `http://10.0.0.1:8080`.
    ///
    /// The controller only accepts the MD5 hex digest of the password, see [`hash_password`].
    #[builder]
    pub fn new(
        host: &str,
        password_hash: String,
        #[builder(default = Duration::from_secs(10))] timeout: Duration,
    ) -> Self {
        let agent = Agent::config_builder().timeout_global(Some(timeout)).build().into();
        Self { agent, host: host.trim_end_matches('/').to_owned(), password_hash }
    }
}

impl Client {
    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.host)
    }

    fn request(&self, path: &str) -> RequestBuilder<WithoutBody> {
        self.agent.get(self.url(path)).query("pw", &self.password_hash)
    }

    #[instrument(skip_all, level = Level::DEBUG, fields(path = path))]
    fn call<R>(path: &'static str, request: RequestBuilder<WithoutBody>) -> Result<R, ReportError>
    where
        R: DeserializeOwned,
    {
        let into_error = |source: FetchError| ReportError::Fetch { path, source };
        request
            .call()
            .map_err(|error| into_error(error.into()))?
            .body_mut()
            .read_json::<Response<R>>()
            .map_err(|error| into_error(error.into()))?
            .into_result()
            .map_err(into_error)
    }
}

impl Fetch for Client {
    #[instrument(skip_all, fields(host = %self.host))]
    fn get_station_names(&self) -> Result<StationNames, ReportError> {
        info!("fetching station names…");
        let options: StationOptions = Self::call("jn", self.request("jn"))?;
        if options.names.is_empty() {
            warn!("the controller reports no stations");
        }
        info!(n_stations = options.names.len(), "fetched");
        Ok(options.names)
    }

    #[instrument(skip_all, fields(host = %self.host, days = days))]
    fn get_logs(&self, days: u32) -> Result<Vec<RawEvent>, ReportError> {
        info!("fetching the log…");
        let Log(events) = Self::call("jl", self.request("jl").query("hist", days.to_string()))?;
        info!(n_events = events.len(), "fetched");
        Ok(events)
    }
}

/// MD5 hex digest of the plain-text controller password.
#[must_use]
pub fn hash_password(plain: &str) -> String {
    format!("{:x}", md5::compute(plain.as_bytes()))
}

/// Either the requested payload or the controller's result code.
#[derive(Deserialize)]
#[serde(untagged)]
enum Response<R> {
    Ok(R),
    Failure { result: i64 },
}

impl<R> Response<R> {
    fn into_result(self) -> Result<R, FetchError> {
        match self {
            Self::Ok(payload) => Ok(payload),
            Self::Failure { result: 2 } => Err(FetchError::Unauthorized),
            Self::Failure { result } => Err(FetchError::Controller(result)),
        }
    }
}

#[derive(Deserialize)]
struct StationOptions {
    #[serde(rename = "snames")]
    names: StationNames,
}

/// Sensor entries (rain delay, water level, and the like) are not station runs and get skipped.
#[serde_as]
#[derive(Deserialize)]
struct Log(#[serde_as(as = "serde_with::VecSkipError<_>")] Vec<RawEvent>);
