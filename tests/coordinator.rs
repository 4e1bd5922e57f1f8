mod support;

use std::sync::Arc;
use std::time::Duration;

use sift::{
	CoordinatorConfig, CoordinatorError, ERROR_ID, LOADING_ID, MissingMetaPolicy, PrefixFilter,
	ResultSink, SearchCoordinator, SessionPhase,
};
use support::{FakeBackend, RecordingLauncher, RecordingSink, ids, item, terms};
use tokio::sync::Notify;
use tokio::time::{advance, sleep, timeout};

const DEBOUNCE: Duration = Duration::from_millis(800);

fn coordinator(backend: &Arc<FakeBackend>) -> SearchCoordinator {
	SearchCoordinator::builder(backend.clone())
		.filter(PrefixFilter::new(["s:"]))
		.build()
		.expect("runtime is available")
}

#[tokio::test(start_paused = true)]
async fn irrelevant_terms_answer_empty_without_querying() {
	let backend = FakeBackend::new();
	let coordinator = coordinator(&backend);
	let sink = RecordingSink::new();

	coordinator.request_initial_results(&terms("hello world"), sink.clone());
	assert_eq!(sink.deliveries(), vec![Vec::<String>::new()]);

	sleep(DEBOUNCE * 3).await;
	assert!(backend.calls().is_empty());
	assert_eq!(sink.deliveries().len(), 1);
	assert_eq!(coordinator.phase(), SessionPhase::Idle);
}

#[tokio::test(start_paused = true)]
async fn prefixed_terms_reach_the_backend_verbatim() {
	let backend = FakeBackend::new();
	let coordinator = SearchCoordinator::builder(backend.clone())
		.filter(PrefixFilter::new(["d:", "s:"]))
		.build()
		.unwrap();
	let sink = RecordingSink::new();

	coordinator.request_initial_results(&terms("hello"), sink.clone());
	assert_eq!(sink.last(), Some(Vec::new()));

	coordinator.request_initial_results(&terms("s:test"), sink.clone());
	sleep(DEBOUNCE * 2).await;

	assert_eq!(backend.calls(), vec!["s:test".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn empty_term_list_is_irrelevant() {
	let backend = FakeBackend::new();
	let coordinator = SearchCoordinator::builder(backend.clone()).build().unwrap();
	let sink = RecordingSink::new();

	coordinator.request_initial_results(&[], sink.clone());
	sleep(DEBOUNCE * 2).await;

	assert_eq!(sink.deliveries(), vec![Vec::<String>::new()]);
	assert!(backend.calls().is_empty());
}

#[tokio::test(start_paused = true)]
async fn loading_message_arrives_before_the_debounce_elapses() {
	let backend = FakeBackend::new();
	let coordinator = coordinator(&backend);
	let sink = RecordingSink::new();

	coordinator.request_initial_results(&terms("s:rust"), sink.clone());

	assert_eq!(sink.deliveries(), vec![ids(&[LOADING_ID])]);
	assert_eq!(coordinator.phase(), SessionPhase::Debouncing);

	advance(DEBOUNCE - Duration::from_millis(1)).await;
	assert!(backend.calls().is_empty());
}

#[tokio::test(start_paused = true)]
async fn keystroke_burst_issues_one_query_for_the_last_terms() {
	let backend = FakeBackend::new();
	backend.answer("s:abc", vec![item("x1", "ABC", "http://abc")]);
	let coordinator = coordinator(&backend);
	let sink = RecordingSink::new();

	for text in ["s:a", "s:ab", "s:abc"] {
		coordinator.request_initial_results(&terms(text), sink.clone());
		advance(Duration::from_millis(200)).await;
	}
	sleep(DEBOUNCE * 2).await;

	assert_eq!(backend.calls(), vec!["s:abc".to_string()]);
	let deliveries = sink.deliveries();
	assert_eq!(deliveries.len(), 4);
	assert!(deliveries[..3].iter().all(|delivery| delivery == &[LOADING_ID]));
	assert_eq!(deliveries[3], ids(&["x1"]));
	assert_eq!(coordinator.phase(), SessionPhase::Idle);
}

#[tokio::test(start_paused = true)]
async fn superseded_response_is_discarded_even_when_it_lands_last() {
	let backend = FakeBackend::new();
	backend.answer_after(
		"s:slow",
		Duration::from_secs(5),
		vec![item("old", "Old", "http://old")],
	);
	backend.answer("s:fast", vec![item("new", "New", "http://new")]);
	let coordinator = coordinator(&backend);
	let sink = RecordingSink::new();

	coordinator.request_initial_results(&terms("s:slow"), sink.clone());
	sleep(DEBOUNCE + Duration::from_millis(10)).await;
	assert_eq!(coordinator.phase(), SessionPhase::Querying);

	coordinator.request_initial_results(&terms("s:fast"), sink.clone());
	sleep(Duration::from_secs(10)).await;

	assert_eq!(backend.calls(), vec!["s:slow".to_string(), "s:fast".to_string()]);
	assert_eq!(
		sink.deliveries(),
		vec![ids(&[LOADING_ID]), ids(&[LOADING_ID]), ids(&["new"])]
	);
	assert!(coordinator.result_metas(&["old"]).is_empty());
	assert_eq!(coordinator.cached_results(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn response_finishing_while_loading_is_shown_stays_stale() {
	let backend = FakeBackend::new();
	let release = Arc::new(Notify::new());
	backend.answer_when("s:old", release.clone(), vec![item("old", "Old", "http://old")]);
	backend.answer("s:new", vec![item("new", "New", "http://new")]);
	let coordinator = SearchCoordinator::builder(backend.clone())
		.config(CoordinatorConfig {
			debounce: Duration::from_millis(10),
			..CoordinatorConfig::default()
		})
		.build()
		.unwrap();

	let old_sink = RecordingSink::new();
	coordinator.request_initial_results(&terms("s:old"), old_sink.clone());
	timeout(Duration::from_secs(5), async {
		while backend.calls().is_empty() {
			sleep(Duration::from_millis(5)).await;
		}
	})
	.await
	.expect("old query reaches the backend");

	// The old query completes while the host is still busy with the loading row.
	let new_sink = RecordingSink::new();
	let recorder = new_sink.clone();
	coordinator.request_initial_results(&terms("s:new"), move |ids: Vec<String>| {
		if ids == [LOADING_ID] {
			release.notify_one();
			std::thread::sleep(Duration::from_millis(300));
		}
		recorder.deliver(ids);
	});

	timeout(Duration::from_secs(5), async {
		while new_sink.last() != Some(ids(&["new"])) {
			sleep(Duration::from_millis(5)).await;
		}
	})
	.await
	.expect("new query is delivered");

	assert_eq!(old_sink.deliveries(), vec![ids(&[LOADING_ID])]);
	assert!(coordinator.result_metas(&["old"]).is_empty());
	assert_eq!(coordinator.cached_results(), 1);
}

#[tokio::test(start_paused = true)]
async fn irrelevant_request_supersedes_a_pending_search() {
	let backend = FakeBackend::new();
	let coordinator = coordinator(&backend);
	let sink = RecordingSink::new();

	coordinator.request_initial_results(&terms("s:rust"), sink.clone());
	coordinator.request_initial_results(&terms("rust"), sink.clone());
	sleep(DEBOUNCE * 2).await;

	assert!(backend.calls().is_empty());
	assert_eq!(
		sink.deliveries(),
		vec![ids(&[LOADING_ID]), Vec::<String>::new()]
	);
}

#[tokio::test(start_paused = true)]
async fn later_results_overwrite_cached_entries() {
	let backend = FakeBackend::new();
	backend.answer("s:one", vec![item("x1", "First", "http://first")]);
	backend.answer("s:two", vec![item("x1", "Second", "http://second")]);
	let launcher = RecordingLauncher::new();
	let coordinator = SearchCoordinator::builder(backend.clone())
		.filter(PrefixFilter::new(["s:"]))
		.launcher(launcher.clone())
		.build()
		.unwrap();
	let sink = RecordingSink::new();

	coordinator.request_initial_results(&terms("s:one"), sink.clone());
	sleep(DEBOUNCE * 2).await;
	coordinator.request_initial_results(&terms("s:two"), sink.clone());
	sleep(DEBOUNCE * 2).await;

	let metas = coordinator.result_metas(&["x1"]);
	assert_eq!(metas.len(), 1);
	assert_eq!(metas[0].name, "Second");
	coordinator.activate_result("x1", &terms("s:two"), 0);
	assert_eq!(launcher.opened(), vec!["http://second".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn earlier_results_stay_resolvable() {
	let backend = FakeBackend::new();
	backend.answer("s:one", vec![item("a1", "Alpha", "http://a")]);
	backend.answer("s:two", vec![item("b1", "Beta", "http://b")]);
	let coordinator = coordinator(&backend);
	let sink = RecordingSink::new();

	coordinator.request_initial_results(&terms("s:one"), sink.clone());
	sleep(DEBOUNCE * 2).await;
	coordinator.request_initial_results(&terms("s:two"), sink.clone());
	sleep(DEBOUNCE * 2).await;

	let metas = coordinator.result_metas(&["a1", "b1"]);
	let names: Vec<_> = metas.iter().map(|meta| meta.name.as_str()).collect();
	assert_eq!(names, vec!["Alpha", "Beta"]);
}

#[tokio::test(start_paused = true)]
async fn status_messages_resolve_without_a_search() {
	let backend = FakeBackend::new();
	let config = CoordinatorConfig {
		app_name: "Recoll".into(),
		icon_name: "recoll".into(),
		..CoordinatorConfig::default()
	};
	let coordinator = SearchCoordinator::builder(backend)
		.config(config)
		.build()
		.unwrap();

	let metas = coordinator.result_metas(&[LOADING_ID, ERROR_ID]);
	assert_eq!(metas.len(), 2);
	assert_eq!(metas[0].id, LOADING_ID);
	assert_eq!(metas[0].name, "Recoll");
	assert_eq!(
		metas[0].description.as_deref(),
		Some("Loading items from Recoll, please wait...")
	);
	assert_eq!(metas[0].icon.as_deref(), Some("recoll"));
	assert_eq!(
		metas[1].description.as_deref(),
		Some("Oops, an error occurred while searching.")
	);
}

#[tokio::test(start_paused = true)]
async fn failed_query_delivers_the_error_message() {
	let backend = FakeBackend::new();
	backend.fail("s:broken");
	let launcher = RecordingLauncher::new();
	let coordinator = SearchCoordinator::builder(backend.clone())
		.launcher(launcher.clone())
		.build()
		.unwrap();
	let sink = RecordingSink::new();

	coordinator.request_initial_results(&terms("s:broken"), sink.clone());
	sleep(DEBOUNCE * 2).await;

	assert_eq!(sink.last(), Some(ids(&[ERROR_ID])));
	assert_eq!(coordinator.cached_results(), 0);

	coordinator.activate_result(ERROR_ID, &terms("s:broken"), 0);
	coordinator.activate_result(LOADING_ID, &terms("s:broken"), 0);
	assert!(launcher.opened().is_empty());
}

#[tokio::test(start_paused = true)]
async fn activating_a_result_opens_its_url() {
	let backend = FakeBackend::new();
	backend.answer("s:a", vec![item("x1", "A", "http://a")]);
	let launcher = RecordingLauncher::new();
	let coordinator = SearchCoordinator::builder(backend.clone())
		.launcher(launcher.clone())
		.build()
		.unwrap();
	let sink = RecordingSink::new();

	coordinator.request_initial_results(&terms("s:a"), sink.clone());
	sleep(DEBOUNCE * 2).await;
	assert_eq!(sink.last(), Some(ids(&["x1"])));

	let metas = coordinator.result_metas(&["x1"]);
	assert_eq!(metas[0].name, "A");
	assert_eq!(metas[0].description, None);
	assert_eq!(metas[0].icon.as_deref(), Some("system-search"));

	coordinator.activate_result("x1", &terms("s:a"), 42);
	coordinator.activate_result("unknown", &terms("s:a"), 43);
	assert_eq!(launcher.opened(), vec!["http://a".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn empty_backend_answer_delivers_an_empty_list() {
	let backend = FakeBackend::new();
	let coordinator = SearchCoordinator::builder(backend.clone()).build().unwrap();
	let sink = RecordingSink::new();

	coordinator.request_initial_results(&terms("nothing"), sink.clone());
	sleep(DEBOUNCE * 2).await;

	assert_eq!(backend.calls(), vec!["nothing".to_string()]);
	assert_eq!(sink.last(), Some(Vec::new()));
}

#[tokio::test(start_paused = true)]
async fn result_cap_truncates_before_caching() {
	let backend = FakeBackend::new();
	backend.answer(
		"many",
		(1..=5)
			.map(|n| item(&format!("r{n}"), "Row", "http://row"))
			.collect(),
	);
	let coordinator = SearchCoordinator::builder(backend.clone())
		.config(CoordinatorConfig {
			max_results: Some(2),
			..CoordinatorConfig::default()
		})
		.build()
		.unwrap();
	let sink = RecordingSink::new();

	coordinator.request_initial_results(&terms("many"), sink.clone());
	sleep(DEBOUNCE * 2).await;

	assert_eq!(sink.last(), Some(ids(&["r1", "r2"])));
	assert_eq!(coordinator.cached_results(), 2);
	assert!(coordinator.result_metas(&["r3"]).is_empty());
}

#[tokio::test(start_paused = true)]
async fn slow_backend_times_out_into_the_error_message() {
	let backend = FakeBackend::new();
	backend.answer_after(
		"s:hang",
		Duration::from_secs(60),
		vec![item("late", "Late", "http://late")],
	);
	let coordinator = SearchCoordinator::builder(backend.clone())
		.config(CoordinatorConfig {
			query_timeout: Duration::from_secs(1),
			..CoordinatorConfig::default()
		})
		.build()
		.unwrap();
	let sink = RecordingSink::new();

	coordinator.request_initial_results(&terms("s:hang"), sink.clone());
	sleep(DEBOUNCE + Duration::from_secs(2)).await;

	assert_eq!(sink.last(), Some(ids(&[ERROR_ID])));
	assert_eq!(coordinator.phase(), SessionPhase::Idle);
	assert_eq!(coordinator.cached_results(), 0);
}

#[tokio::test(start_paused = true)]
async fn destroy_releases_the_backend_and_drops_late_responses() {
	let backend = FakeBackend::new();
	backend.answer_after(
		"s:slow",
		Duration::from_secs(5),
		vec![item("x1", "Late", "http://late")],
	);
	let coordinator = coordinator(&backend);
	let sink = RecordingSink::new();

	coordinator.request_initial_results(&terms("s:slow"), sink.clone());
	sleep(DEBOUNCE + Duration::from_millis(10)).await;
	assert_eq!(backend.calls().len(), 1);

	coordinator.destroy();
	assert!(backend.is_destroyed());

	sleep(Duration::from_secs(10)).await;
	assert_eq!(sink.deliveries(), vec![ids(&[LOADING_ID])]);
}

#[tokio::test(start_paused = true)]
async fn destroy_cancels_a_pending_debounce() {
	let backend = FakeBackend::new();
	let coordinator = coordinator(&backend);
	let sink = RecordingSink::new();

	coordinator.request_initial_results(&terms("s:pending"), sink.clone());
	coordinator.destroy();
	sleep(DEBOUNCE * 2).await;

	assert!(backend.calls().is_empty());
	assert_eq!(sink.deliveries(), vec![ids(&[LOADING_ID])]);
}

#[tokio::test(start_paused = true)]
async fn subsearch_runs_a_fresh_query() {
	let backend = FakeBackend::new();
	backend.answer("s:ru", vec![item("a", "A", "http://a")]);
	backend.answer("s:rust", vec![item("b", "B", "http://b")]);
	let coordinator = coordinator(&backend);
	let sink = RecordingSink::new();

	coordinator.request_initial_results(&terms("s:ru"), sink.clone());
	sleep(DEBOUNCE * 2).await;
	let previous = sink.last().unwrap();
	coordinator.request_subsearch_results(&previous, &terms("s:rust"), sink.clone());
	sleep(DEBOUNCE * 2).await;

	assert_eq!(backend.calls(), vec!["s:ru".to_string(), "s:rust".to_string()]);
	assert_eq!(sink.last(), Some(ids(&["b"])));
}

#[tokio::test(start_paused = true)]
async fn placeholder_policy_answers_for_unknown_ids() {
	let backend = FakeBackend::new();
	let placeholder = SearchCoordinator::builder(backend.clone())
		.config(CoordinatorConfig {
			missing_results: MissingMetaPolicy::Placeholder,
			..CoordinatorConfig::default()
		})
		.build()
		.unwrap();
	let omit = SearchCoordinator::builder(backend).build().unwrap();

	let metas = placeholder.result_metas(&["ghost"]);
	assert_eq!(metas.len(), 1);
	assert_eq!(metas[0].id, "ghost");
	assert_eq!(
		metas[0].description.as_deref(),
		Some("This result is no longer available.")
	);
	assert!(omit.result_metas(&["ghost"]).is_empty());
}

#[test]
fn building_outside_a_runtime_fails() {
	let result = SearchCoordinator::builder(FakeBackend::new()).build();
	assert!(matches!(result, Err(CoordinatorError::NoRuntime)));
}

#[test]
fn explicit_runtime_handle_is_accepted() {
	let runtime = tokio::runtime::Builder::new_current_thread()
		.enable_time()
		.build()
		.unwrap();
	let coordinator = SearchCoordinator::builder(FakeBackend::new())
		.runtime(runtime.handle().clone())
		.build()
		.unwrap();
	assert_eq!(coordinator.phase(), SessionPhase::Idle);
}
