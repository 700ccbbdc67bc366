    use super::*;

    fn full() -> LinkRecord {
        LinkRecord {
            central_id: Some("SKU1".to_string()),
            channel_name: Some("EBAY0".to_string()),
            channel_id: Some("E-100".to_string()),
        }
    }

    #[test]
    fn into_row_keeps_all_fields() {
        let row = full().into_row(1).expect("valid record");
        assert_eq!(row, LinkRow::new("SKU1", "EBAY0", "E-100"));
    }

    #[test]
    fn into_row_reports_position_and_missing_field() {
        let mut record = full();
        record.channel_name = None;
        let err = record.into_row(7).unwrap_err();
        assert_eq!(
            err,
            LookupError::MalformedRow {
                position: 7,
                field: LinkField::ChannelName,
            }
        );
        assert_eq!(err.to_string(), "malformed linking row 7: missing channel_name");
    }

    #[test]
    fn into_row_checks_central_id_first() {
        let err = LinkRecord::default().into_row(2).unwrap_err();
        assert!(matches!(
            err,
            LookupError::MalformedRow {
                field: LinkField::CentralId,
                ..
            }
        ));
    }
