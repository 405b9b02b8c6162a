use avail_report::{
    CliConfig, LocalStorage, OutputDocument, ReportEngine, ReportPipeline,
};
use tempfile::TempDir;

fn config_for(base_path: &str) -> CliConfig {
    CliConfig {
        base_path: base_path.to_string(),
        input: "data.json".to_string(),
        output: "output.json".to_string(),
        config: None,
        csv: false,
        verbose: false,
    }
}

fn write_input(dir: &TempDir, document: &serde_json::Value) {
    std::fs::write(dir.path().join("data.json"), document.to_string()).unwrap();
}

#[tokio::test]
async fn test_end_to_end_period_report() {
    let temp_dir = TempDir::new().unwrap();
    let base_path = temp_dir.path().to_str().unwrap().to_string();

    write_input(
        &temp_dir,
        &serde_json::json!({
            "periods": [
                {"id": 1, "since": "2024-01-01", "until": "2024-01-07"},
                {"id": 2, "since": "2024-03-01", "until": "2024-03-31"}
            ],
            "developers": [],
            "local_holidays": []
        }),
    );

    let storage = LocalStorage::new(base_path.clone());
    let pipeline = ReportPipeline::new(storage, config_for(&base_path));
    let engine = ReportEngine::new(pipeline);

    let result = engine.run().await;
    assert!(result.is_ok());

    let output_file = temp_dir.path().join("output.json");
    assert!(output_file.exists());

    let text = std::fs::read_to_string(&output_file).unwrap();
    let document: OutputDocument = serde_json::from_str(&text).unwrap();
    assert_eq!(document.availabilities.len(), 2);

    // id 1: Mon..Sun week, 5 working days (Tue-Sat), allowance 10.
    let first = &document.availabilities[0];
    assert_eq!(first.period_id, Some(1));
    assert_eq!(first.total_days, 7);
    assert_eq!(first.workdays, -5);
    assert_eq!(first.weekend_days, 2);
    assert_eq!(first.holidays, 10);

    // id 2: March 2024 has 22 working days, allowance 3.
    let second = &document.availabilities[1];
    assert_eq!(second.period_id, Some(2));
    assert_eq!(second.total_days, 31);
    assert_eq!(second.workdays, 19);
    assert_eq!(second.weekend_days, 9);
    assert_eq!(second.holidays, 3);

    // Period records carry neither project nor feasibility keys.
    assert!(!text.contains("project_id"));
    assert!(!text.contains("feasibility"));

    // Serializing the parsed document again reproduces the file exactly.
    let reserialized = serde_json::to_string_pretty(&document).unwrap();
    assert_eq!(reserialized, text);
}

#[tokio::test]
async fn test_end_to_end_per_developer_report() {
    let temp_dir = TempDir::new().unwrap();
    let base_path = temp_dir.path().to_str().unwrap().to_string();

    write_input(
        &temp_dir,
        &serde_json::json!({
            "periods": [
                {"id": 3, "since": "2024-03-01", "until": "2024-03-31"}
            ],
            "developers": [
                {"id": 5, "birthday": "1990-03-20"},
                {"id": 6, "birthday": "1988-07-15"}
            ],
            "local_holidays": [
                {"day": "2024-03-08"}
            ]
        }),
    );

    let storage = LocalStorage::new(base_path.clone());
    let pipeline = ReportPipeline::new(storage, config_for(&base_path));
    let engine = ReportEngine::new(pipeline);
    engine.run().await.unwrap();

    let text = std::fs::read_to_string(temp_dir.path().join("output.json")).unwrap();
    let document: OutputDocument = serde_json::from_str(&text).unwrap();
    assert_eq!(document.availabilities.len(), 2);

    // Dev 5: birthday 2024-03-20 (Wed) and holiday 2024-03-08 (Fri) both
    // land on working days of the 22 in March 2024.
    let dev5 = &document.availabilities[0];
    assert_eq!(dev5.period_id, Some(3));
    assert_eq!(dev5.developer_id, Some(5));
    assert_eq!(dev5.holidays, 2);
    assert_eq!(dev5.workdays, 20);

    // Dev 6: only the local holiday applies.
    let dev6 = &document.availabilities[1];
    assert_eq!(dev6.developer_id, Some(6));
    assert_eq!(dev6.holidays, 1);
    assert_eq!(dev6.workdays, 21);
}

#[tokio::test]
async fn test_missing_input_file_is_graceful() {
    let temp_dir = TempDir::new().unwrap();
    let base_path = temp_dir.path().to_str().unwrap().to_string();

    let storage = LocalStorage::new(base_path.clone());
    let pipeline = ReportPipeline::new(storage, config_for(&base_path));
    let engine = ReportEngine::new(pipeline);

    let err = engine.run().await.unwrap_err();
    assert!(err.is_missing_input());
    assert_eq!(err.severity().exit_code(), 2);
    assert!(!temp_dir.path().join("output.json").exists());
}

#[tokio::test]
async fn test_invalid_period_date_aborts_without_output() {
    let temp_dir = TempDir::new().unwrap();
    let base_path = temp_dir.path().to_str().unwrap().to_string();

    write_input(
        &temp_dir,
        &serde_json::json!({
            "periods": [
                {"id": 1, "since": "2024-01-01", "until": "2024-01-07"},
                {"id": 2, "since": "2024/03/01", "until": "2024-03-31"}
            ]
        }),
    );

    let storage = LocalStorage::new(base_path.clone());
    let pipeline = ReportPipeline::new(storage, config_for(&base_path));
    let engine = ReportEngine::new(pipeline);

    let err = engine.run().await.unwrap_err();
    assert_eq!(err.to_string(), "Invalid date format in period 2");
    assert!(!temp_dir.path().join("output.json").exists());
}

#[tokio::test]
async fn test_csv_rendering_alongside_json() {
    let temp_dir = TempDir::new().unwrap();
    let base_path = temp_dir.path().to_str().unwrap().to_string();

    write_input(
        &temp_dir,
        &serde_json::json!({
            "periods": [
                {"id": 1, "since": "2024-01-01", "until": "2024-01-07"}
            ]
        }),
    );

    let mut config = config_for(&base_path);
    config.csv = true;

    let storage = LocalStorage::new(base_path.clone());
    let pipeline = ReportPipeline::new(storage, config);
    let engine = ReportEngine::new(pipeline);
    engine.run().await.unwrap();

    assert!(temp_dir.path().join("output.json").exists());
    let csv = std::fs::read_to_string(temp_dir.path().join("output.csv")).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        "period_id,project_id,developer_id,total_days,workdays,weekend_days,holidays,feasibility"
    );
    assert_eq!(lines[1], "1,,,7,-5,2,10,");
}
