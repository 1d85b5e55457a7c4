use crate::foundation::error::{VitrineError, VitrineResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Project category. Closed set; the filter bar exposes one button per value.
pub enum Category {
    /// Web application or site.
    Web,
    /// Minecraft server plugin.
    Plugin,
    /// Library, utility, or other developer tooling.
    Tool,
    /// Game project.
    Game,
}

impl Category {
    /// All categories in filter-bar order.
    pub const ALL: [Category; 4] = [
        Category::Web,
        Category::Plugin,
        Category::Tool,
        Category::Game,
    ];

    /// Canonical lowercase name, as used in the catalog interchange format.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Web => "web",
            Category::Plugin => "plugin",
            Category::Tool => "tool",
            Category::Game => "game",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Project lifecycle status, shown as a badge on each timeline card.
pub enum Status {
    /// Shipped and done.
    Completed,
    /// Actively being worked on.
    InProgress,
    /// Not started yet.
    Planned,
}

impl Status {
    /// Human-readable badge label (kebab-case name with the dash spaced out).
    pub fn display_label(self) -> &'static str {
        match self {
            Status::Completed => "completed",
            Status::InProgress => "in progress",
            Status::Planned => "planned",
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// A single project entry in the catalog.
///
/// Records are externally supplied, read-only display data. The interchange
/// format is a JSON array of these objects with camelCase keys.
pub struct ProjectRecord {
    /// Unique stable identifier. Never reused within a catalog.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Display description.
    pub description: String,
    /// Technology tags, in display order. Duplicates allowed but discouraged.
    pub technologies: Vec<String>,
    /// Opaque sortable date label, display only.
    pub date: String,
    /// Lifecycle status badge.
    pub status: Status,
    /// Category used by the filter bar.
    pub category: Category,
    /// Optional source repository link (opens in a new context).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    /// Optional live deployment link (opens in a new context).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    /// Key-feature bullet points, in display order.
    #[serde(default)]
    pub highlights: Vec<String>,
}

impl ProjectRecord {
    /// Validate per-record invariants.
    pub fn validate(&self) -> VitrineResult<()> {
        if self.id.trim().is_empty() {
            return Err(VitrineError::validation("record id must be non-empty"));
        }
        if self.title.trim().is_empty() {
            return Err(VitrineError::validation(format!(
                "record '{}' title must be non-empty",
                self.id
            )));
        }
        for (name, url) in [("githubUrl", &self.github_url), ("liveUrl", &self.live_url)] {
            if let Some(url) = url
                && url.trim().is_empty()
            {
                return Err(VitrineError::validation(format!(
                    "record '{}' {name} must be non-empty when set",
                    self.id
                )));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
/// The full ordered list of project records.
///
/// A catalog is immutable once loaded: the engine never mutates records, and
/// filtering projects them into borrowed views (see [`crate::filter`]).
pub struct Catalog {
    records: Vec<ProjectRecord>,
}

impl Catalog {
    /// Build a catalog from records, validating every entry and id uniqueness.
    pub fn from_records(records: Vec<ProjectRecord>) -> VitrineResult<Self> {
        let catalog = Self { records };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse a catalog from a JSON array, rejecting any malformed entry.
    pub fn from_json(json: &str) -> VitrineResult<Self> {
        let records: Vec<ProjectRecord> = serde_json::from_str(json)
            .map_err(|e| VitrineError::serde(format!("catalog parse failed: {e}")))?;
        Self::from_records(records)
    }

    /// Parse a catalog from a JSON array, skipping malformed entries.
    ///
    /// Entries that fail to deserialize (missing fields, unknown category or
    /// status), fail validation, or duplicate an earlier id are dropped with a
    /// warning diagnostic. Only a non-array payload is an error; a fully
    /// malformed array yields an empty catalog, which renders as an empty
    /// timeline rather than a crash.
    #[tracing::instrument(skip(json))]
    pub fn from_json_lenient(json: &str) -> VitrineResult<Self> {
        let raw: Vec<serde_json::Value> = serde_json::from_str(json)
            .map_err(|e| VitrineError::serde(format!("catalog must be a JSON array: {e}")))?;

        let mut records = Vec::with_capacity(raw.len());
        let mut seen = std::collections::HashSet::new();
        for (index, value) in raw.into_iter().enumerate() {
            let record: ProjectRecord = match serde_json::from_value(value) {
                Ok(r) => r,
                Err(e) => {
                    tracing::warn!(index, error = %e, "skipping malformed catalog entry");
                    continue;
                }
            };
            if let Err(e) = record.validate() {
                tracing::warn!(index, error = %e, "skipping invalid catalog entry");
                continue;
            }
            if !seen.insert(record.id.clone()) {
                tracing::warn!(index, id = %record.id, "skipping duplicate catalog id");
                continue;
            }
            records.push(record);
        }
        Ok(Self { records })
    }

    /// Validate catalog invariants: per-record checks plus id uniqueness.
    pub fn validate(&self) -> VitrineResult<()> {
        let mut seen = std::collections::HashSet::new();
        for record in &self.records {
            record.validate()?;
            if !seen.insert(record.id.as_str()) {
                return Err(VitrineError::catalog(format!(
                    "duplicate record id '{}'",
                    record.id
                )));
            }
        }
        Ok(())
    }

    /// All records, in catalog order.
    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    /// Record at `index`, if in bounds.
    pub fn get(&self, index: usize) -> Option<&ProjectRecord> {
        self.records.get(index)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/model.rs"]
mod tests;
