use sysreport::commands::report::{build_cli, Category, ReportOptions};

#[test]
fn test_every_flag_is_accepted() {
    let result = build_cli().try_get_matches_from([
        "sysreport",
        "--os",
        "--cpu",
        "--ram",
        "--disk",
        "--gpu",
        "--network",
        "--process",
        "--uptime",
        "--network-usage",
        "--user",
        "--temperature",
    ]);
    assert!(result.is_ok());
}

#[test]
fn test_all_is_equivalent_to_every_flag() {
    let all = ReportOptions::from_matches(
        &build_cli()
            .try_get_matches_from(["sysreport", "--all"])
            .unwrap(),
    );
    let each = ReportOptions::from_matches(
        &build_cli()
            .try_get_matches_from([
                "sysreport",
                "--os",
                "--cpu",
                "--ram",
                "--disk",
                "--gpu",
                "--network",
                "--process",
                "--uptime",
                "--network-usage",
                "--user",
                "--temperature",
            ])
            .unwrap(),
    );

    for category in Category::DISPLAY_ORDER {
        assert_eq!(all.selected(category), each.selected(category));
    }
}

#[test]
fn test_unknown_flag_is_rejected() {
    assert!(build_cli()
        .try_get_matches_from(["sysreport", "--battery"])
        .is_err());
}

#[test]
fn test_json_flag_is_orthogonal_to_selection() {
    let opts = ReportOptions::from_matches(
        &build_cli()
            .try_get_matches_from(["sysreport", "--json"])
            .unwrap(),
    );
    assert!(opts.json);
    assert!(!opts.any_selected());
}
