use std::time::Instant;

use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        let started = Instant::now();
        println!("Starting availability report...");

        // Extract
        println!("Reading input...");
        let input = self.pipeline.extract().await?;
        println!(
            "Read {} schedule entries, {} developers, {} local holidays",
            input.entries.len(),
            input.developers.len(),
            input.local_holidays.len()
        );

        // Transform
        println!("Computing availabilities...");
        let output = self.pipeline.transform(input).await?;
        println!("Computed {} availability records", output.availabilities.len());

        // Load
        println!("Writing report...");
        let output_path = self.pipeline.load(output).await?;
        println!("Report saved to: {}", output_path);

        tracing::debug!("Report run finished in {:?}", started.elapsed());
        Ok(output_path)
    }
}
