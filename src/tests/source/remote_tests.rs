    use super::*;

    #[test]
    fn records_from_json_accepts_bare_array() {
        let body = serde_json::json!([
            {"StockSKU": "SKU1", "Sub Source": "EBAY0", "ChannelSKU": "E-100"},
            {"StockSKU": "SKU2", "Sub Source": "EBAY0", "ChannelSKU": 300}
        ]);
        let records = records_from_json(body, &ColumnNames::default()).expect("parse");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].central_id.as_deref(), Some("SKU1"));
        assert_eq!(records[1].channel_id.as_deref(), Some("300"));
    }

    #[test]
    fn records_from_json_accepts_rows_envelope() {
        let body = serde_json::json!({
            "rows": [{"StockSKU": "SKU1", "Sub Source": "EBAY0", "ChannelSKU": "E-100"}],
            "exported_at": "2024-01-01"
        });
        let records = records_from_json(body, &ColumnNames::default()).expect("parse");
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn null_and_missing_fields_are_unset() {
        let body = serde_json::json!([
            {"StockSKU": null, "Sub Source": "EBAY0"}
        ]);
        let records = records_from_json(body, &ColumnNames::default()).expect("parse");
        assert_eq!(records[0], LinkRecord {
            central_id: None,
            channel_name: Some("EBAY0".to_string()),
            channel_id: None,
        });
    }

    #[test]
    fn records_from_json_rejects_unexpected_shapes() {
        let err = records_from_json(serde_json::json!("rows"), &ColumnNames::default())
            .unwrap_err();
        assert!(err.to_string().contains("array or an object"), "{}", err);

        let err = records_from_json(serde_json::json!({"data": []}), &ColumnNames::default())
            .unwrap_err();
        assert!(err.to_string().contains("no `rows` array"), "{}", err);

        let err = records_from_json(serde_json::json!([1]), &ColumnNames::default()).unwrap_err();
        assert!(err.to_string().contains("row 1 is not an object"), "{}", err);
    }

    #[test]
    fn url_joins_base_and_export_path() {
        let remote = RemoteConfig {
            base_url: "http://inventory.local/".to_string(),
            token: None,
            export_path: "/api/linking-table".to_string(),
        };
        let source =
            RemoteLinkingTable::new(remote, None, ColumnNames::default()).expect("client");
        assert_eq!(source.url(), "http://inventory.local/api/linking-table");
    }

    #[test]
    fn with_retries_returns_first_success() {
        let mut calls = 0;
        let out = with_retries("flaky", || {
            calls += 1;
            if calls < 2 {
                anyhow::bail!("transient");
            }
            Ok(calls)
        })
        .expect("second attempt succeeds");
        assert_eq!(out, 2);
    }

    #[test]
    fn with_retries_gives_up_with_label() {
        let err = with_retries::<()>("fetch linking table", || anyhow::bail!("down"))
            .unwrap_err();
        assert_eq!(err.to_string(), "fetch linking table");
        assert!(format!("{:#}", err).contains("down"));
    }
