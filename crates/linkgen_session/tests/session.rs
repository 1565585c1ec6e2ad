use std::time::{Duration, Instant};

use linkgen_core::{LinkType, ParametersModel, SelectionEntry, Sorting, TimeUnit};
use linkgen_engine::{
    CatalogueHandle, FailureKind, FetchError, FetchSettings, FileBlobStore,
};
use linkgen_session::Session;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_logging() {
    linkgen_session::logging::initialize_for_tests();
}

fn store_in(temp: &TempDir) -> FileBlobStore {
    FileBlobStore::new(temp.path().to_path_buf())
}

fn remote_with_companies(entries: &[(&str, &str)]) -> ParametersModel {
    let mut remote = ParametersModel::default();
    for (id, name) in entries {
        remote.companies.insert(SelectionEntry::new(*id, *name));
    }
    remote
}

#[test]
fn restore_without_snapshot_starts_from_defaults() {
    init_logging();
    let temp = TempDir::new().unwrap();

    let session = Session::restore(store_in(&temp));

    assert_eq!(session.model().time_unit, TimeUnit::Day);
    assert_eq!(session.model().sorting, Sorting::Recent);
    assert!(session.model().parameters.companies.is_empty());
}

#[test]
fn save_then_restore_round_trips_the_model() {
    init_logging();
    let temp = TempDir::new().unwrap();

    let mut session = Session::restore(store_in(&temp));
    {
        let model = session.model_mut();
        model.search_phrase = "rust AND backend".to_string();
        model.time_unit = TimeUnit::Hour;
        model.time_amount = 3;
        model.sorting = Sorting::Relevant;
        model.link_type = LinkType::Deeplink;
        model.is_easy_apply = true;
        model.is_few_applicants = true;
        model
            .parameters
            .companies
            .insert(SelectionEntry::new("2", "Wise").selected());
        model
            .parameters
            .titles
            .insert(SelectionEntry::new("1", "Software Engineer"));
    }
    session.save();

    let restored = Session::restore(store_in(&temp));

    assert_eq!(restored.model(), session.model());
}

#[test]
fn saving_twice_overwrites_the_previous_snapshot() {
    init_logging();
    let temp = TempDir::new().unwrap();

    let mut session = Session::restore(store_in(&temp));
    session.model_mut().search_phrase = "first".to_string();
    session.save();
    session.model_mut().search_phrase = "second".to_string();
    session.save();

    let restored = Session::restore(store_in(&temp));
    assert_eq!(restored.model().search_phrase, "second");
}

#[test]
fn apply_catalogue_merges_and_preserves_selection() {
    init_logging();
    let temp = TempDir::new().unwrap();

    let mut session = Session::restore(store_in(&temp));
    session
        .model_mut()
        .parameters
        .companies
        .insert(SelectionEntry::new("1", "Revolut").selected());

    session.apply_catalogue(Ok(remote_with_companies(&[
        ("1", "Revolut Ltd"),
        ("2", "Wise"),
    ])));

    let companies = &session.model().parameters.companies;
    assert_eq!(companies.len(), 2);
    let revolut = companies.get("1").unwrap();
    assert_eq!(revolut.name, "Revolut Ltd");
    assert!(revolut.is_selected);
    assert!(!companies.get("2").unwrap().is_selected);
}

#[test]
fn apply_catalogue_drops_entries_the_catalogue_removed() {
    init_logging();
    let temp = TempDir::new().unwrap();

    let mut session = Session::restore(store_in(&temp));
    session
        .model_mut()
        .parameters
        .companies
        .insert(SelectionEntry::new("9", "Defunct Corp").selected());

    session.apply_catalogue(Ok(remote_with_companies(&[("2", "Wise")])));

    assert!(session.model().parameters.companies.get("9").is_none());
}

#[test]
fn failed_fetch_leaves_local_parameters_untouched() {
    init_logging();
    let temp = TempDir::new().unwrap();

    let mut session = Session::restore(store_in(&temp));
    session
        .model_mut()
        .parameters
        .companies
        .insert(SelectionEntry::new("1", "Revolut").selected());
    let before = session.model().clone();

    session.apply_catalogue(Err(FetchError {
        kind: FailureKind::Network,
        message: "connection refused".to_string(),
    }));

    assert_eq!(session.model(), &before);
}

#[test]
fn scalar_edits_survive_a_catalogue_refresh() {
    init_logging();
    let temp = TempDir::new().unwrap();

    let mut session = Session::restore(store_in(&temp));
    session.model_mut().search_phrase = "kotlin".to_string();
    session.model_mut().time_unit = TimeUnit::Week;

    session.apply_catalogue(Ok(remote_with_companies(&[("2", "Wise")])));

    assert_eq!(session.model().search_phrase, "kotlin");
    assert_eq!(session.model().time_unit, TimeUnit::Week);
}

#[test]
fn session_builds_link_from_current_state() {
    init_logging();
    let temp = TempDir::new().unwrap();

    let session = Session::restore(store_in(&temp));
    let link = session.build_link().expect("link must build");

    assert!(link.as_str().starts_with("https://www.linkedin.com/jobs/search/?"));
}

#[tokio::test]
async fn poll_catalogue_applies_a_background_fetch() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/parameters.json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{ "companies": [{ "name": "Wise", "search_id": 2 }] }"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let mut session = Session::restore(store_in(&temp));

    let handle = CatalogueHandle::new(FetchSettings {
        catalogue_url: format!("{}/parameters.json", server.uri()),
        ..FetchSettings::default()
    });
    handle.refresh();

    let deadline = Instant::now() + Duration::from_secs(5);
    while !session.poll_catalogue(&handle) {
        assert!(Instant::now() < deadline, "catalogue fetch never arrived");
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    assert_eq!(session.model().parameters.companies.len(), 1);
    assert_eq!(
        session.model().parameters.companies.get("2").unwrap().name,
        "Wise"
    );
}
