    use std::io::Cursor;

    use super::*;

    fn read(text: &str) -> Vec<LinkRecord> {
        TableFile::read_from(Cursor::new(text.as_bytes()), &ColumnNames::default())
            .expect("read csv")
    }

    #[test]
    fn reads_configured_columns_in_any_order() {
        let records = read(
            "ChannelSKU,Title,StockSKU,Sub Source\n\
             E-100,Widget,SKU1,EBAY0\n\
             A-200,Widget,SKU1,Stc Stores\n",
        );
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[1],
            LinkRecord {
                central_id: Some("SKU1".to_string()),
                channel_name: Some("Stc Stores".to_string()),
                channel_id: Some("A-200".to_string()),
            }
        );
    }

    #[test]
    fn header_match_falls_back_to_case_insensitive() {
        let records = read("\u{feff}stocksku, SUB SOURCE ,channelsku\nSKU1,EBAY0,E-100\n");
        assert_eq!(records[0].central_id.as_deref(), Some("SKU1"));
        assert_eq!(records[0].channel_name.as_deref(), Some("EBAY0"));
        assert_eq!(records[0].channel_id.as_deref(), Some("E-100"));
    }

    #[test]
    fn quoted_cells_keep_commas() {
        let records = read(
            "StockSKU,Sub Source,ChannelSKU\n\
             SKU1,\"stcstores.co.uk (shopify)\",\"S-1,blue\"\n",
        );
        assert_eq!(records[0].channel_id.as_deref(), Some("S-1,blue"));
    }

    #[test]
    fn empty_cells_and_short_rows_leave_fields_unset() {
        let records = read(
            "StockSKU,Sub Source,ChannelSKU\n\
             SKU1,,E-100\n\
             SKU2,EBAY0\n",
        );
        assert_eq!(records[0].channel_name, None);
        assert_eq!(records[1].channel_id, None);
        assert_eq!(records[1].channel_name.as_deref(), Some("EBAY0"));
    }

    #[test]
    fn missing_column_leaves_field_unset_on_every_row() {
        let records = read("StockSKU,ChannelSKU\nSKU1,E-100\n");
        assert_eq!(records[0].channel_name, None);
        let err = records[0].clone().into_row(1).unwrap_err();
        assert!(err.to_string().contains("missing channel_name"), "{}", err);
    }

    #[test]
    fn custom_column_names_are_honoured() {
        let columns = ColumnNames {
            central_id: "sku".to_string(),
            channel_name: "store".to_string(),
            channel_id: "listing".to_string(),
        };
        let records = TableFile::read_from(
            Cursor::new("store,sku,listing\nEBAY0,SKU9,E-9\n".as_bytes()),
            &columns,
        )
        .expect("read csv");
        assert_eq!(records[0].central_id.as_deref(), Some("SKU9"));
    }

    #[test]
    fn load_reports_missing_file() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let source = TableFile::new(tmp.path().join("nope.csv"), ColumnNames::default());
        let err = source.load().unwrap_err();
        assert!(format!("{:#}", err).contains("nope.csv"), "{:#}", err);
    }
