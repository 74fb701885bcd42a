//! Full project lifecycle against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then exercises every
//! `ProjectInterface` operation over real HTTP through `UreqTransport`.
//! Validates request building, transport and response decoding end-to-end.

use project_client::{ApiClient, ApiError, ClientConfig, Project, ProjectInterface};

/// Start the mock server on an ephemeral port and return its base URL.
fn start_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

fn names(projects: &[Project]) -> Vec<&str> {
    projects.iter().map(Project::name).collect()
}

#[test]
fn crud_lifecycle() {
    let client = ApiClient::from_config(&ClientConfig::new(&start_server()));
    let projects = client.project();

    // Step 1: list — should be empty.
    assert!(projects.list("").unwrap().is_empty(), "expected empty list");

    // Step 2: create a project.
    let input = Project::new("perses").with_display("Perses", Some("dashboards".to_string()));
    let created = projects.create(&input).unwrap();
    assert_eq!(created.name(), "perses");
    assert_eq!(created.metadata.version, Some(0));
    assert!(created.metadata.created_at.is_some());
    assert_eq!(created.spec, input.spec);

    // Step 3: get the created project.
    let fetched = projects.get("perses").unwrap();
    assert_eq!(fetched, created);

    // Step 4: creating it again conflicts.
    let err = projects.create(&input).unwrap_err();
    assert!(matches!(err, ApiError::HttpError { status: 409, .. }));

    // Step 5: update the display name.
    let mut changed = fetched.clone();
    changed.spec.display = Some(project_client::Display {
        name: "Perses 2".to_string(),
        description: None,
    });
    let updated = projects.update(&changed).unwrap();
    assert_eq!(updated.metadata.version, Some(1));
    assert_eq!(updated.metadata.created_at, created.metadata.created_at);
    assert_eq!(updated.spec.display.unwrap().name, "Perses 2");

    // Step 6: update with an empty name never reaches the server.
    let err = projects.update(&Project::new("")).unwrap_err();
    assert!(matches!(err, ApiError::InvalidRequest(_)));

    // Step 7: delete.
    projects.delete("perses").unwrap();

    // Step 8: get after delete — should be NotFound.
    let err = projects.get("perses").unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    // Step 9: delete again — should be NotFound.
    let err = projects.delete("perses").unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    // Step 10: list — should be empty again.
    assert!(projects.list("").unwrap().is_empty(), "expected empty list after delete");
}

#[test]
fn list_filters_by_prefix() {
    let client = ApiClient::from_config(&ClientConfig::new(&start_server()));
    let projects = client.project();

    for name in ["perses", "prometheus", "grafana"] {
        projects.create(&Project::new(name)).unwrap();
    }

    let all = projects.list("").unwrap();
    let filtered = projects.list("p").unwrap();
    assert_eq!(names(&filtered), ["perses", "prometheus"]);
    for project in &filtered {
        assert!(all.contains(project));
    }

    // Get is exact, never a prefix match.
    let err = projects.get("per").unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    assert!(projects.list("zzz").unwrap().is_empty());
}

#[test]
fn names_with_url_delimiters_address_only_themselves() {
    let client = ApiClient::from_config(&ClientConfig::new(&start_server()));
    let projects = client.project();
    projects.create(&Project::new("a")).unwrap();

    for name in ["a?x=1", "a#frag", "a/b"] {
        let err = projects.get(name).unwrap_err();
        assert!(matches!(err, ApiError::NotFound), "get {name:?}: {err:?}");
    }

    let err = projects.delete("a?x").unwrap_err();
    assert!(matches!(err, ApiError::NotFound));
    assert_eq!(names(&projects.list("").unwrap()), ["a"]);
}

#[test]
fn unreachable_server_is_a_transport_error() {
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let client = ApiClient::from_config(&ClientConfig::new(&format!("http://{addr}")));

    let err = client.project().list("").unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}
