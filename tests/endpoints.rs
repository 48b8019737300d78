use clap::{CommandFactory, Parser};
use rbxstats::api::Endpoint;
use rbxstats::cli::Args;

#[test]
fn test_endpoint_paths() {
    let cases = [
        (Endpoint::Offsets, "offsets"),
        (Endpoint::OffsetByName("Foo".to_string()), "offsets/search/Foo"),
        (Endpoint::OffsetsByPrefix("Cam".to_string()), "offsets/prefix/Cam"),
        (Endpoint::OffsetsCamera, "offsets/camera"),
        (Endpoint::Exploits, "exploits"),
        (Endpoint::ExploitsWindows, "exploits/windows"),
        (Endpoint::ExploitsMac, "exploits/mac"),
        (Endpoint::ExploitsUndetected, "exploits/undetected"),
        (Endpoint::ExploitsDetected, "exploits/detected"),
        (Endpoint::ExploitsFree, "exploits/free"),
        (Endpoint::VersionsLatest, "versions/latest"),
        (Endpoint::VersionsFuture, "versions/future"),
        (Endpoint::Game(42), "game/42"),
    ];

    for (endpoint, path) in cases {
        assert_eq!(endpoint.path(), path);
        assert_eq!(endpoint.to_string(), path);
    }
}

#[test]
fn test_cli_maps_to_endpoint() {
    let args = Args::try_parse_from(["rbxstats", "offsets", "search", "FieldOfView"]).unwrap();
    let command = args.command.unwrap();
    assert_eq!(
        command.endpoint(),
        Endpoint::OffsetByName("FieldOfView".to_string())
    );

    let args = Args::try_parse_from(["rbxstats", "--json", "game", "1818"]).unwrap();
    assert!(args.json);
    assert_eq!(args.command.unwrap().endpoint(), Endpoint::Game(1818));

    let args = Args::try_parse_from(["rbxstats", "exploits", "undetected"]).unwrap();
    assert_eq!(
        args.command.unwrap().endpoint(),
        Endpoint::ExploitsUndetected
    );
}

#[test]
fn test_cli_rejects_non_numeric_game_id() {
    assert!(Args::try_parse_from(["rbxstats", "game", "abc"]).is_err());
}

#[test]
fn test_cli_operations_have_help_text() {
    let command = Args::command();

    for (group, operations) in [
        ("offsets", &["all", "search", "prefix", "camera"][..]),
        (
            "exploits",
            &["all", "windows", "mac", "undetected", "detected", "free"][..],
        ),
        ("versions", &["latest", "future"][..]),
    ] {
        let group_command = command.find_subcommand(group).unwrap();
        for operation in operations {
            let about = group_command
                .find_subcommand(operation)
                .unwrap()
                .get_about();
            assert!(about.is_some(), "{} {} has no help text", group, operation);
        }
    }
}
