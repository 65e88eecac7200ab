use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["storefront-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_fetch_with_defaults() {
    let cli = Cli::try_parse_from(["storefront-cli", "fetch"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Fetch {
            url: None,
            json: false
        })
    ));
}

#[test]
fn parses_fetch_with_url_and_json() {
    let cli = Cli::try_parse_from([
        "storefront-cli",
        "fetch",
        "--url",
        "https://example.com/sheet.csv",
        "--json",
    ])
    .expect("expected valid cli args");

    match cli.command {
        Some(Commands::Fetch { url, json }) => {
            assert_eq!(url.as_deref(), Some("https://example.com/sheet.csv"));
            assert!(json);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parses_image_positional() {
    let cli = Cli::try_parse_from(["storefront-cli", "image", "https://imgur.com/abc123"])
        .expect("expected valid cli args");

    match cli.command {
        Some(Commands::Image { raw }) => assert_eq!(raw, "https://imgur.com/abc123"),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn image_requires_argument() {
    assert!(Cli::try_parse_from(["storefront-cli", "image"]).is_err());
}

#[test]
fn parses_contact_with_explicit_base_url() {
    let cli = Cli::try_parse_from([
        "storefront-cli",
        "contact",
        "--name",
        "SSD X",
        "--price",
        "R$ 99,00",
        "--base-url",
        "https://wa.me/123",
    ])
    .expect("expected valid cli args");

    match cli.command {
        Some(Commands::Contact {
            name,
            price,
            base_url,
        }) => {
            assert_eq!(name, "SSD X");
            assert_eq!(price, "R$ 99,00");
            assert_eq!(base_url, "https://wa.me/123");
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn contact_requires_name_and_price() {
    assert!(Cli::try_parse_from(["storefront-cli", "contact", "--name", "SSD X"]).is_err());
}

#[test]
fn format_entry_is_single_line_summary() {
    let entry = storefront_core::CatalogEntry {
        name: "SSD X".to_owned(),
        external_id: "4".to_owned(),
        description: "desc".to_owned(),
        image_reference: String::new(),
        stock_count: "2".to_owned(),
        price: "R$ 99,00".to_owned(),
        category: "DISCO".to_owned(),
    };
    assert_eq!(
        fetch::format_entry(&entry),
        "[4] SSD X | DISCO | R$ 99,00 | estoque 2"
    );
}

#[test]
fn summary_line_reports_fallback_reason() {
    let snapshot = storefront_core::CatalogSnapshot::defaults(0);
    let outcome = storefront_ingest::RefreshOutcome::FellBack {
        source: storefront_core::SnapshotSource::Defaults,
        reason: "connection refused".to_owned(),
    };
    assert_eq!(
        fetch::summary_line(&snapshot, &outcome),
        "6 entries from defaults (refresh failed: connection refused)"
    );
}
