    use std::fs;

    use super::*;

    fn backups(dir: &std::path::Path, skip_newest: usize) -> BackupConfig {
        BackupConfig {
            dir: dir.to_path_buf(),
            file_name: "linking.csv".to_string(),
            skip_newest,
        }
    }

    fn make_backup(root: &std::path::Path, date: &str) {
        let dir = root.join(date);
        fs::create_dir_all(&dir).expect("create backup dir");
        fs::write(dir.join(format!("{}_linking.csv", date)), "StockSKU\n").expect("write export");
    }

    #[test]
    fn picks_newest_backup_after_skipping() {
        let tmp = tempfile::tempdir().expect("tempdir");
        for date in ["2024-01-01", "2024-01-03", "2024-01-02", "2024-01-04"] {
            make_backup(tmp.path(), date);
        }
        fs::write(tmp.path().join("2099-notes.txt"), "not a backup").expect("write stray file");

        let path = recent_linking_file(&backups(tmp.path(), 2)).expect("recent");
        assert_eq!(
            path,
            tmp.path().join("2024-01-02").join("2024-01-02_linking.csv")
        );

        let path = recent_linking_file(&backups(tmp.path(), 0)).expect("recent");
        assert!(path.ends_with("2024-01-04/2024-01-04_linking.csv"));
    }

    #[test]
    fn too_few_backups_is_an_error() {
        let tmp = tempfile::tempdir().expect("tempdir");
        make_backup(tmp.path(), "2024-01-01");
        let err = recent_linking_file(&backups(tmp.path(), 2)).unwrap_err();
        assert!(err.to_string().contains("not enough backups"), "{}", err);
    }

    #[test]
    fn missing_export_in_backup_is_an_error() {
        let tmp = tempfile::tempdir().expect("tempdir");
        fs::create_dir_all(tmp.path().join("2024-01-01")).expect("create backup dir");
        let err = recent_linking_file(&backups(tmp.path(), 0)).unwrap_err();
        assert!(err.to_string().contains("linking export missing"), "{}", err);
    }
