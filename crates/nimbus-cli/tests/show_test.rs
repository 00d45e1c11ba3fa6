use nimbus_testing::{TestWorld, assertions, fixtures};

fn world_with_servers() -> TestWorld {
    TestWorld::new().with_file("servers.json", &fixtures::to_text(&fixtures::servers()))
}

#[test]
fn test_show_listing_with_enumeration() {
    let world = world_with_servers();
    let result = world.run(&["show", "servers.json", "--enumerate"]).unwrap();

    assertions::assert_success(&result).unwrap();
    insta::assert_snapshot!(result.stdout(), @r"
1. 11 web-1
    status: ACTIVE
    flavor:
        ram: 2048
        cpus: 2
2. 12 db-1
    status: BUILD
    flavor:
        ram: 4096
        cpus: 4
3. 13 web-2
    status: active
    flavor:
        ram: 2048
        cpus: 2
");
}

#[test]
fn test_show_filters_case_insensitive_substring() {
    let world = world_with_servers();
    let result = world
        .run(&["show", "servers.json", "--filter", "status=act", "--exclude", "flavor"])
        .unwrap();

    assertions::assert_success(&result).unwrap();
    assert_eq!(
        result.stdout(),
        "11 web-1\n    status: ACTIVE\n13 web-2\n    status: active\n"
    );
}

#[test]
fn test_show_filters_case_sensitive_and_exact() {
    let world = world_with_servers();

    let result = world
        .run(&[
            "show",
            "servers.json",
            "--filter",
            "status=act",
            "--case-sensitive",
            "--exclude",
            "flavor",
        ])
        .unwrap();
    assert_eq!(result.stdout(), "13 web-2\n    status: active\n");

    let result = world
        .run(&[
            "show",
            "servers.json",
            "--filter",
            "name=web",
            "--exact",
            "--exclude",
            "flavor",
        ])
        .unwrap();
    assertions::assert_success(&result).unwrap();
    assert_eq!(result.stdout(), "");
}

#[test]
fn test_show_custom_title_with_redundancy() {
    let world = world_with_servers();
    let result = world
        .run(&[
            "show",
            "servers.json",
            "--title",
            "status",
            "--redundant",
            "--exclude",
            "flavor",
            "--exclude",
            "id",
        ])
        .unwrap();

    insta::assert_snapshot!(result.stdout(), @r"
ACTIVE
    name: web-1
    status: ACTIVE
BUILD
    name: db-1
    status: BUILD
active
    name: web-2
    status: active
");
}

#[test]
fn test_show_reads_stdin() {
    let world = TestWorld::new();
    let input = fixtures::to_text(&fixtures::server_details());
    let result = world.run_with_stdin(&["show", "--pretty-keys"], &input).unwrap();

    assertions::assert_success(&result).unwrap();
    insta::assert_snapshot!(result.stdout(), @r"
11 web-1
    metadata:
        os: debian
        users: root
    addresses:
        10.0.0.2
        2001:db8::2
");
}

#[test]
fn test_show_json_passthrough() {
    let world = world_with_servers();
    let result = world
        .run(&["--format", "json", "show", "servers.json", "--filter", "id=12"])
        .unwrap();

    let json = result.json().unwrap();
    assert_eq!(json, serde_json::json!([fixtures::servers()[1].clone()]));
    assert!(result.stdout().contains("\n    {\n        \"id\": 12,"));
}

#[test]
fn test_show_page_size_without_terminal_never_blocks() {
    let world = world_with_servers();
    let result = world
        .run(&["show", "servers.json", "--page-size", "1", "--exclude", "flavor"])
        .unwrap();

    assertions::assert_success(&result).unwrap();
    assert!(!result.stdout().contains("listed"));
    assert_eq!(result.stdout().lines().count(), 6);
}

#[test]
fn test_show_save_writes_dump() {
    let world = TestWorld::new().with_file(
        "vm.json",
        &fixtures::to_text(&fixtures::server_details()),
    );
    let result = world.run(&["show", "vm.json", "--save", "vm.txt"]).unwrap();

    assertions::assert_success(&result).unwrap();
    assert_eq!(result.stdout(), "");
    let dump = std::fs::read_to_string(world.cwd().join("vm.txt")).unwrap();
    assert_eq!(
        dump,
        "id: 11\nname: web-1\nmetadata: \n    os: debian\n    users: root\naddresses: \n    10.0.0.2\n    2001:db8::2\n"
    );
}

#[test]
fn test_show_rejects_invalid_json() {
    let world = TestWorld::new().with_file("broken.json", "{not json");
    let result = world.run(&["show", "broken.json"]).unwrap();

    assertions::assert_cli_error(&result, "Input is not valid JSON").unwrap();
}

#[test]
fn test_show_exclude_on_scalar_list_fails() {
    let world = TestWorld::new().with_file("names.json", r#"[{"id": 1}, "loose"]"#);
    let result = world.run(&["show", "names.json", "--exclude", "id"]).unwrap();

    assertions::assert_cli_error(&result, "Item 1 is not a record").unwrap();
}
