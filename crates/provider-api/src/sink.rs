/// Receiver for the identifier lists a provider delivers to its host.
///
/// A single search request may deliver several times: the loading message
/// first, then either the result identifiers, an empty list or the error
/// message. Hosts resolve the identifiers afterwards through the provider's
/// metadata lookup.
pub trait ResultSink: Send + Sync {
	fn deliver(&self, ids: Vec<String>);
}

impl<F> ResultSink for F
where
	F: Fn(Vec<String>) + Send + Sync,
{
	fn deliver(&self, ids: Vec<String>) {
		self(ids);
	}
}
