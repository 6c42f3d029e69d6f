use crate::domain::model::Curriculum;
use crate::utils::error::{CurriculumError, Result};
use std::io::Write;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub const NAMES: [&'static str; 2] = ["csv", "tsv"];

    fn delimiter(self) -> u8 {
        match self {
            Self::Csv => b',',
            Self::Tsv => b'\t',
        }
    }
}

impl FromStr for ExportFormat {
    type Err = CurriculumError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            other => Err(CurriculumError::InvalidConfigValueError {
                field: "export.format".to_string(),
                value: other.to_string(),
                reason: format!("Unsupported format. Valid formats: {}", Self::NAMES.join(", ")),
            }),
        }
    }
}

/// Flattens a curriculum into one row per entry for flashcard tooling.
pub struct CurriculumExporter {
    format: ExportFormat,
}

impl CurriculumExporter {
    pub fn new(format: ExportFormat) -> Self {
        Self { format }
    }

    /// Returns the number of rows written, header excluded.
    pub fn write<W: Write>(&self, curriculum: &Curriculum, out: W) -> Result<usize> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.format.delimiter())
            .from_writer(out);

        writer.write_record(["day", "title", "term", "reading", "translation"])?;

        let mut rows = 0;
        for day in curriculum.days() {
            let day_index = day.day_index().to_string();
            for entry in day.entries() {
                writer.write_record([
                    day_index.as_str(),
                    day.title(),
                    entry.term(),
                    entry.reading(),
                    entry.translation(),
                ])?;
                rows += 1;
            }
        }

        writer.flush()?;
        tracing::debug!("Exported {} rows as {:?}", rows, self.format);
        Ok(rows)
    }

    pub fn render(&self, curriculum: &Curriculum) -> Result<String> {
        let mut buffer = Vec::new();
        self.write(curriculum, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}
