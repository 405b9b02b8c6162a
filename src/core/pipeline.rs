use std::path::Path;

use crate::core::availability::AvailabilityCalculator;
use crate::core::feasibility::FeasibilityEvaluator;
use crate::core::{ConfigProvider, Pipeline, Storage};
use crate::domain::model::{
    AvailabilityRecord, InputDocument, OutputDocument, OutputFormat, ReportInput, ReportKind,
    ReportOutput,
};
use crate::utils::error::{ReportError, Result};

pub struct ReportPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ReportPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn csv_file_name(&self) -> String {
        Path::new(self.config.output_file())
            .with_extension("csv")
            .to_string_lossy()
            .into_owned()
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ReportPipeline<S, C> {
    async fn extract(&self) -> Result<ReportInput> {
        tracing::debug!("Reading input document: {}", self.config.input_file());
        let bytes = self.storage.read_file(self.config.input_file()).await?;
        let document: InputDocument = serde_json::from_slice(&bytes)?;

        // 整份文件先驗證，再開始計算
        document.into_report_input()
    }

    async fn transform(&self, input: ReportInput) -> Result<ReportOutput> {
        let allowances = self.config.allowances();

        let availabilities = match input.kind {
            ReportKind::Periods => {
                tracing::debug!(
                    "Computing availabilities for {} periods x {} developers",
                    input.entries.len(),
                    input.developers.len()
                );
                AvailabilityCalculator::new(&allowances, &input.local_holidays)
                    .records_for(&input.entries, &input.developers)?
            }
            ReportKind::Projects => {
                tracing::debug!(
                    "Evaluating feasibility for {} projects with {} developers",
                    input.entries.len(),
                    input.developers.len()
                );
                FeasibilityEvaluator::new(&allowances, &input.local_holidays, &input.developers)
                    .records_for(&input.entries)?
            }
        };

        Ok(ReportOutput { availabilities })
    }

    async fn load(&self, output: ReportOutput) -> Result<String> {
        let document = OutputDocument {
            availabilities: output.availabilities,
        };

        let json = serde_json::to_string_pretty(&document)?;
        self.storage
            .write_file(self.config.output_file(), json.as_bytes())
            .await?;

        if self.config.output_formats().contains(&OutputFormat::Csv) {
            let csv = render_csv(&document.availabilities)?;
            let csv_name = self.csv_file_name();
            tracing::debug!("Writing CSV rendering to {}", csv_name);
            self.storage.write_file(&csv_name, &csv).await?;
        }

        Ok(format!(
            "{}/{}",
            self.config.base_path(),
            self.config.output_file()
        ))
    }
}

/// CSV rendering of the record sequence: fixed header, one row per record in
/// output order, absent ids and verdicts as empty fields.
fn render_csv(records: &[AvailabilityRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "period_id",
        "project_id",
        "developer_id",
        "total_days",
        "workdays",
        "weekend_days",
        "holidays",
        "feasibility",
    ])?;

    for record in records {
        writer.write_record([
            opt_field(record.period_id),
            opt_field(record.project_id),
            opt_field(record.developer_id),
            record.total_days.to_string(),
            record.workdays.to_string(),
            record.weekend_days.to_string(),
            record.holidays.to_string(),
            record
                .feasibility
                .map(|f| f.to_string())
                .unwrap_or_default(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| ReportError::ConfigError {
            message: format!("CSV buffer error: {e}"),
        })
}

fn opt_field(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
