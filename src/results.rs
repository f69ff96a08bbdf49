use serde::{Deserialize, Serialize};

/// Summary fields read from one card on the search results page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingSummary {
    pub region: String,
    pub title: String,
    pub company_name: String,
    pub company_url: String,
    pub location: String,
    pub benefit: String,
    pub posted: String,
    pub job_url: String,
}

/// Long-form text read from a listing's own page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingDetail {
    pub job_description: String,
    pub company_description: String,
}

/// One output row: a listing summary merged with its detail.
///
/// Field order is the column order of the results file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    pub region: String,
    pub job_title: String,
    pub company_name: String,
    pub company_url: String,
    pub location: String,
    pub benefit: String,
    pub posted: String,
    pub company_description: String,
    pub job_url: String,
    pub job_description: String,
}

impl JobRecord {
    /// Column names, in serialization order
    pub const FIELDS: [&'static str; 10] = [
        "region",
        "job_title",
        "company_name",
        "company_url",
        "location",
        "benefit",
        "posted",
        "company_description",
        "job_url",
        "job_description",
    ];

    pub fn new(summary: ListingSummary, detail: ListingDetail) -> Self {
        Self {
            region: summary.region,
            job_title: summary.title,
            company_name: summary.company_name,
            company_url: summary.company_url,
            location: summary.location,
            benefit: summary.benefit,
            posted: summary.posted,
            company_description: detail.company_description,
            job_url: summary.job_url,
            job_description: detail.job_description,
        }
    }
}
