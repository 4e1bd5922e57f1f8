//! Fakes shared by the coordinator integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use parking_lot::Mutex;
use sift::{BackendClient, BackendError, ResultItem, ResultSink, UriLauncher};
use tokio::sync::Notify;

#[derive(Clone)]
enum Reply {
	Items(Vec<ResultItem>),
	Fail,
}

#[derive(Clone)]
struct Script {
	delay: Duration,
	gate: Option<Arc<Notify>>,
	reply: Reply,
}

/// Backend whose answers and latencies are scripted per query text.
#[derive(Default)]
pub struct FakeBackend {
	scripts: Mutex<HashMap<String, Script>>,
	calls: Mutex<Vec<String>>,
	destroyed: AtomicBool,
}

impl FakeBackend {
	pub fn new() -> Arc<Self> {
		Arc::new(Self::default())
	}

	pub fn answer(&self, query: &str, items: Vec<ResultItem>) {
		self.answer_after(query, Duration::ZERO, items);
	}

	pub fn answer_after(&self, query: &str, delay: Duration, items: Vec<ResultItem>) {
		self.scripts.lock().insert(
			query.to_string(),
			Script {
				delay,
				gate: None,
				reply: Reply::Items(items),
			},
		);
	}

	/// Answer `query` only once `gate` is notified.
	pub fn answer_when(&self, query: &str, gate: Arc<Notify>, items: Vec<ResultItem>) {
		self.scripts.lock().insert(
			query.to_string(),
			Script {
				delay: Duration::ZERO,
				gate: Some(gate),
				reply: Reply::Items(items),
			},
		);
	}

	pub fn fail(&self, query: &str) {
		self.scripts.lock().insert(
			query.to_string(),
			Script {
				delay: Duration::ZERO,
				gate: None,
				reply: Reply::Fail,
			},
		);
	}

	pub fn calls(&self) -> Vec<String> {
		self.calls.lock().clone()
	}

	pub fn is_destroyed(&self) -> bool {
		self.destroyed.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl BackendClient for FakeBackend {
	async fn query(&self, text: &str) -> Result<Vec<ResultItem>, BackendError> {
		self.calls.lock().push(text.to_string());
		let script = self.scripts.lock().get(text).cloned();
		let Some(script) = script else {
			return Ok(Vec::new());
		};
		if let Some(gate) = &script.gate {
			gate.notified().await;
		}
		if !script.delay.is_zero() {
			tokio::time::sleep(script.delay).await;
		}
		match script.reply {
			Reply::Items(items) => Ok(items),
			Reply::Fail => Err(BackendError::failed("scripted failure")),
		}
	}

	fn destroy(&self) {
		self.destroyed.store(true, Ordering::SeqCst);
	}
}

/// Sink that remembers every identifier list it was handed.
#[derive(Clone, Default)]
pub struct RecordingSink {
	deliveries: Arc<Mutex<Vec<Vec<String>>>>,
}

impl RecordingSink {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn deliveries(&self) -> Vec<Vec<String>> {
		self.deliveries.lock().clone()
	}

	pub fn last(&self) -> Option<Vec<String>> {
		self.deliveries.lock().last().cloned()
	}
}

impl ResultSink for RecordingSink {
	fn deliver(&self, ids: Vec<String>) {
		self.deliveries.lock().push(ids);
	}
}

/// Launcher that records URIs instead of opening them.
#[derive(Default)]
pub struct RecordingLauncher {
	opened: Mutex<Vec<String>>,
}

impl RecordingLauncher {
	pub fn new() -> Arc<Self> {
		Arc::new(Self::default())
	}

	pub fn opened(&self) -> Vec<String> {
		self.opened.lock().clone()
	}
}

impl UriLauncher for RecordingLauncher {
	fn open(&self, uri: &str) -> Result<()> {
		self.opened.lock().push(uri.to_string());
		Ok(())
	}
}

pub fn terms(text: &str) -> Vec<String> {
	text.split_whitespace().map(str::to_string).collect()
}

pub fn item(id: &str, name: &str, url: &str) -> ResultItem {
	ResultItem::new(id, name, "", url)
}

pub fn ids(list: &[&str]) -> Vec<String> {
	list.iter().map(|id| id.to_string()).collect()
}
