use super::format::format_bytes;
use super::table_view::TableRow;
use serde::{Deserialize, Serialize};

/// Ответ `GET /api/v1/databases/{name}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseInfo {
    pub name: String,
    #[serde(default)]
    pub collections: Vec<String>,
    #[serde(default)]
    pub stats: Option<DatabaseStats>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseStats {
    #[serde(default)]
    pub collections: u64,
    #[serde(default)]
    pub objects: u64,
    #[serde(default)]
    pub data_size: Option<u64>,
    #[serde(default)]
    pub indexes: Option<u64>,
    #[serde(default)]
    pub index_size: Option<u64>,
    #[serde(default)]
    pub storage_size: Option<u64>,
}

/// Column headers of the databases overview table.
pub const DATABASE_COLUMNS: [&str; 5] = ["Name", "Collections", "Objects", "Data size", "Storage size"];

impl DatabaseInfo {
    /// Placeholder used when the per-database request fails; the name is
    /// still known from the database list.
    pub fn unavailable(name: &str) -> Self {
        Self {
            name: name.to_string(),
            collections: Vec::new(),
            stats: None,
        }
    }

    pub fn to_table_row(&self) -> TableRow {
        let stats = self.stats.clone().unwrap_or_default();
        let collections = if self.stats.is_some() {
            stats.collections.max(self.collections.len() as u64)
        } else {
            self.collections.len() as u64
        };
        let size = |v: Option<u64>| v.map(|b| format_bytes(b as f64)).unwrap_or_else(|| "-".to_string());

        TableRow::new(
            self.name.clone(),
            vec![
                self.name.clone(),
                collections.to_string(),
                stats.objects.to_string(),
                size(stats.data_size),
                size(stats.storage_size),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_database_info() {
        let body = r#"{
            "name": "shop",
            "collections": ["orders", "users"],
            "stats": { "collections": 2, "objects": 1500, "dataSize": 2048, "indexes": 3 }
        }"#;
        let info: DatabaseInfo = serde_json::from_str(body).unwrap();
        assert_eq!(info.collections.len(), 2);

        let row = info.to_table_row();
        assert_eq!(row.key, "shop");
        assert_eq!(row.cells, vec!["shop", "2", "1500", "2 KB", "-"]);
        assert_eq!(row.cells.len(), DATABASE_COLUMNS.len());
        assert!(row.visible);
    }

    #[test]
    fn test_unavailable_row() {
        let row = DatabaseInfo::unavailable("admin").to_table_row();
        assert_eq!(row.cells, vec!["admin", "0", "0", "-", "-"]);
    }
}
