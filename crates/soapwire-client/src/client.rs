//! Call orchestration.

use std::sync::Arc;

use tracing::debug;

use soapwire_core::{request, response, Params, Response};

use crate::error::{CallError, Result};
use crate::transport::{HttpTransport, Transport};
use crate::wsdl::Definitions;

/// Blocking SOAP 1.1 client for one service endpoint.
///
/// Holds only read-only state, so it is safe to share across threads;
/// every call owns its own token stream.
pub struct Client {
    endpoint: String,
    definitions: Definitions,
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Client with the default blocking HTTP transport.
    pub fn new(endpoint: impl Into<String>, definitions: Definitions) -> Result<Self> {
        let transport = Arc::new(HttpTransport::new()?);
        Ok(Self::with_transport(endpoint, definitions, transport))
    }

    /// Client with a caller-supplied transport (e.g. a test double).
    pub fn with_transport(
        endpoint: impl Into<String>,
        definitions: Definitions,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            definitions,
            transport,
        }
    }

    /// Invoke `method` with `params` and block for the unwrapped reply.
    pub fn call(&self, method: &str, params: &Params) -> Result<Response> {
        self.call_path(&[], method, params)
    }

    /// Invoke `method` nested under intermediate path segments. The
    /// segments affect only the SOAPAction header.
    pub fn call_path(&self, path: &[&str], method: &str, params: &Params) -> Result<Response> {
        let namespace = self.definitions.target_namespace.as_str();
        if namespace.is_empty() {
            return Err(CallError::MissingDefinitions);
        }

        let payload = request::build(method, namespace, params)?;
        let action = soap_action(self.definitions.action_base(), path, method);
        debug!(method, endpoint = %self.endpoint, "invoking");

        let reply = self.transport.send(&self.endpoint, &action, payload)?;
        let contents = response::extract_body(&reply)?;
        Ok(Response::new(contents))
    }
}

/// `<namespace>/<segment>/...<method>`, each segment slash-terminated.
fn soap_action(base: &str, path: &[&str], method: &str) -> String {
    let mut action = String::from(base);
    action.push('/');
    for segment in path {
        action.push_str(segment);
        action.push('/');
    }
    action.push_str(method);
    action
}

#[cfg(test)]
mod tests {
    use super::soap_action;

    #[test]
    fn action_without_path() {
        assert_eq!(soap_action("urn:svc", &[], "Check"), "urn:svc/Check");
    }

    #[test]
    fn action_with_segments() {
        assert_eq!(
            soap_action("urn:svc", &["a", "b"], "Check"),
            "urn:svc/a/b/Check"
        );
    }
}
