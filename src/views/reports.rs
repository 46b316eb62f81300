// views/reports.rs
use crate::context::{ContextMap, ContextValue};
use crate::dispatch::DataView;
use crate::errors::ViewError;
use crate::i18n::{LazyText, Text};
use crate::request::ViewRequest;
use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct Report {
    pub id: i64,
    pub name: String,
    pub owner: String,
    pub status: ReportStatus,
    pub amount: f64,
    pub updated: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReportStatus {
    Draft,
    Published,
}

impl ReportStatus {
    fn badge(self) -> &'static str {
        match self {
            ReportStatus::Draft => r#"<span class="badge badge-muted">Draft</span>"#,
            ReportStatus::Published => r#"<span class="badge badge-ok">Published</span>"#,
        }
    }
}

impl Report {
    /// Table row as shown in the browser. Name and status carry markup.
    fn cells(&self) -> Vec<ContextValue> {
        vec![
            format!(r#"<a href="/reports/{}">{}</a>"#, self.id, self.name).into(),
            self.owner.as_str().into(),
            self.status.badge().into(),
            self.amount.into(),
            self.updated.into(),
        ]
    }
}

/// Demo table of monthly reports. `?owner=` narrows the rows.
pub struct ReportView {
    reports: Vec<Report>,
}

impl ReportView {
    pub fn new(reports: Vec<Report>) -> Self {
        Self { reports }
    }

    pub fn sample() -> Self {
        let day = |m, d| NaiveDate::from_ymd_opt(2024, m, d).unwrap_or_default();
        Self::new(vec![
            Report {
                id: 1,
                name: "Q1 revenue".into(),
                owner: "finance".into(),
                status: ReportStatus::Published,
                amount: 120_500.0,
                updated: day(4, 2),
            },
            Report {
                id: 2,
                name: "Q2 revenue".into(),
                owner: "finance".into(),
                status: ReportStatus::Draft,
                amount: 98_250.5,
                updated: day(7, 1),
            },
            Report {
                id: 3,
                name: "Headcount".into(),
                owner: "people".into(),
                status: ReportStatus::Published,
                amount: 42.0,
                updated: day(6, 30),
            },
        ])
    }

    fn visible(&self, req: &ViewRequest) -> Result<Vec<&Report>, ViewError> {
        let Some(owner) = req.query("owner").filter(|o| !o.is_empty()) else {
            return Ok(self.reports.iter().collect());
        };

        let rows: Vec<&Report> = self.reports.iter().filter(|r| r.owner == owner).collect();
        if rows.is_empty() {
            return Err(ViewError::Message(format!("Unknown owner: {owner}")));
        }
        Ok(rows)
    }
}

impl DataView for ReportView {
    fn get_context_data(&self, req: &ViewRequest) -> Result<ContextValue, ViewError> {
        let rows = self.get_data(req)?;
        let columns: Vec<ContextValue> = self
            .get_column_titles()
            .into_iter()
            .map(ContextValue::from)
            .collect();

        Ok(ContextMap::new()
            .with("iTotalRecords", self.reports.len())
            .with("iTotalDisplayRecords", rows.len())
            .with("aoColumns", columns)
            .with("aaData", ContextValue::List(rows.into_iter().map(ContextValue::List).collect()))
            .into())
    }

    fn get_column_titles(&self) -> Vec<Text> {
        ["Report", "Owner", "Status", "Amount", "Updated"]
            .into_iter()
            .map(|id| Text::from(LazyText::untranslated(id)))
            .collect()
    }

    fn get_data(&self, req: &ViewRequest) -> Result<Vec<Vec<ContextValue>>, ViewError> {
        Ok(self.visible(req)?.into_iter().map(Report::cells).collect())
    }

    fn title(&self) -> Option<&str> {
        Some("Reports")
    }
}
