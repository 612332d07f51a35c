use crate::error::ClashError;
use std::io::Read;
use std::time::Duration;

/// The one HTTP operation the client needs.
///
/// Implementations must hand back the body of every response they receive,
/// whatever its status code. Only failures to obtain a body at all (connect,
/// DNS, TLS, timeout, broken read) are errors.
pub trait Transport: Send + Sync {
    fn get(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        query: &[(String, String)],
        timeout: Duration,
    ) -> Result<Vec<u8>, ClashError>;
}

/// Blocking transport backed by a `ureq` agent.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::AgentBuilder::new()
            .user_agent(concat!("clash_api/", env!("CARGO_PKG_VERSION")))
            .build();
        UreqTransport { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn get(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        query: &[(String, String)],
        timeout: Duration,
    ) -> Result<Vec<u8>, ClashError> {
        let mut request = self.agent.get(url).timeout(timeout);
        for (name, value) in headers {
            request = request.set(name, value);
        }
        for (key, value) in query {
            request = request.query(key, value);
        }

        let response = match request.call() {
            Ok(resp) => resp,
            // Status codes are not interpreted; the service's error object is the body.
            Err(ureq::Error::Status(_, resp)) => resp,
            Err(e) => return Err(ClashError::NetworkError(e.to_string())),
        };

        let mut body = Vec::new();
        response
            .into_reader()
            .read_to_end(&mut body)
            .map_err(|e| ClashError::NetworkError(e.to_string()))?;

        Ok(body)
    }
}
