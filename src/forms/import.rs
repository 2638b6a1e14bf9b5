//! CSV rows accepted by the bulk design import.

use std::io::Read;

use serde::Deserialize;

use crate::domain::design::{DesignStatus, NewDesign};
use crate::domain::types::{DesignTitle, Price, TaxonomyName};
use crate::forms::FormError;

/// One line of the import file. Header names match the field names; every
/// column except `title` and `price` may be omitted or left blank.
#[derive(Debug, Deserialize)]
pub struct DesignCsvRow {
    pub title: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub area_type: String,
    pub price: f64,
    #[serde(default)]
    pub style: String,
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub is_featured: String,
    /// Tag names separated by `;`.
    #[serde(default)]
    pub tags: String,
}

/// A validated design together with the taxonomy names it references.
#[derive(Debug, Clone)]
pub struct ImportedDesign {
    pub design: NewDesign,
    pub category: Option<TaxonomyName>,
    pub area_type: Option<TaxonomyName>,
    pub tags: Vec<TaxonomyName>,
}

fn optional_name(value: &str) -> Result<Option<TaxonomyName>, FormError> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    TaxonomyName::new(value)
        .map(Some)
        .map_err(|_| FormError::InvalidName)
}

fn parse_flag(value: &str) -> Result<bool, FormError> {
    match value.trim().to_lowercase().as_str() {
        "" | "0" | "false" | "no" => Ok(false),
        "1" | "true" | "yes" => Ok(true),
        other => Err(FormError::InvalidFlag(other.to_string())),
    }
}

impl TryFrom<DesignCsvRow> for ImportedDesign {
    type Error = FormError;

    fn try_from(row: DesignCsvRow) -> Result<Self, Self::Error> {
        let title = DesignTitle::new(row.title).map_err(|_| FormError::InvalidName)?;
        let price = Price::new(row.price).map_err(|_| FormError::InvalidPrice)?;
        let status = if row.status.trim().is_empty() {
            DesignStatus::Draft
        } else {
            row.status
                .parse::<DesignStatus>()
                .map_err(|_| FormError::InvalidStatus)?
        };

        let mut tags = row
            .tags
            .split(';')
            .filter(|name| !name.trim().is_empty())
            .map(|name| TaxonomyName::new(name).map_err(|_| FormError::InvalidName))
            .collect::<Result<Vec<_>, _>>()?;
        tags.sort();
        tags.dedup();

        let design = NewDesign::new(title, price)
            .short_description(row.short_description)
            .sku(row.sku)
            .status(status)
            .style(row.style)
            .level(row.level)
            .featured(parse_flag(&row.is_featured)?);

        Ok(Self {
            design,
            category: optional_name(&row.category)?,
            area_type: optional_name(&row.area_type)?,
            tags,
        })
    }
}

/// Parses a whole CSV document; the first invalid row aborts the parse.
pub fn parse_designs_csv<R: Read>(reader: R) -> Result<Vec<ImportedDesign>, FormError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    rdr.deserialize::<DesignCsvRow>()
        .enumerate()
        .map(|(index, row)| {
            let row_number = index + 1;
            let row = row.map_err(|err| FormError::InvalidRow {
                row: row_number,
                message: err.to_string(),
            })?;
            ImportedDesign::try_from(row).map_err(|err| FormError::InvalidRow {
                row: row_number,
                message: err.to_string(),
            })
        })
        .collect()
}
