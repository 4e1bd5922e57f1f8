//! Enable/disable lifecycle for the single provider a host keeps registered.

use tracing::debug;

use crate::coordinator::SearchCoordinator;

/// Holds at most one live [`SearchCoordinator`].
///
/// Hosts typically toggle their provider on and off at runtime. Enabling an
/// already enabled slot keeps the existing provider, and disabling tears the
/// provider down exactly once.
#[derive(Default)]
pub struct ProviderSlot {
	provider: Option<SearchCoordinator>,
}

impl ProviderSlot {
	pub fn new() -> Self {
		Self::default()
	}

	/// Create the provider with `factory` unless one is already running.
	pub fn enable<F, E>(&mut self, factory: F) -> Result<&SearchCoordinator, E>
	where
		F: FnOnce() -> Result<SearchCoordinator, E>,
	{
		let provider = match self.provider.take() {
			Some(provider) => provider,
			None => {
				let provider = factory()?;
				debug!("search provider enabled");
				provider
			}
		};
		Ok(self.provider.insert(provider))
	}

	/// Destroy the running provider. Returns `false` when nothing was enabled.
	pub fn disable(&mut self) -> bool {
		match self.provider.take() {
			Some(provider) => {
				provider.destroy();
				debug!("search provider disabled");
				true
			}
			None => false,
		}
	}

	#[must_use]
	pub fn provider(&self) -> Option<&SearchCoordinator> {
		self.provider.as_ref()
	}

	#[must_use]
	pub fn is_enabled(&self) -> bool {
		self.provider.is_some()
	}
}
