use super::api::parse_api_response;
use super::format::{format_bytes, format_uptime_hours, megabytes_to_bytes};
use serde::{Deserialize, Serialize};

/// Ответ `GET /api/v1/stats`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerStats {
    pub version: String,
    /// Seconds since the server started.
    pub uptime: f64,
    #[serde(default)]
    pub database_count: u64,
    pub connections: ConnectionStats,
    /// Some server builds emit this object as `mem`.
    #[serde(alias = "mem")]
    pub memory: MemoryStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionStats {
    pub current: u64,
    pub available: u64,
    pub total_created: u64,
}

/// Memory figures in megabytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryStats {
    pub resident: f64,
    #[serde(rename = "virtual")]
    pub virtual_mb: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapped: Option<f64>,
}

/// Parses a stats response body, treating an error-flagged body as a failure.
pub fn parse_stats_response(body: &str) -> Result<ServerStats, String> {
    parse_api_response(body)
}

// ---------------------------------------------------------------------------
// View-model
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct StatsLine {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatsCard {
    pub title: &'static str,
    pub icon: &'static str,
    pub lines: Vec<StatsLine>,
    /// Full-width cards span both columns of the panel.
    pub full_width: bool,
}

/// Cards shown in the server statistics modal.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsPanel {
    pub cards: Vec<StatsCard>,
}

impl StatsPanel {
    pub fn from_stats(stats: &ServerStats) -> Self {
        let line = |label, value: String| StatsLine { label, value };

        let server = StatsCard {
            title: "Server",
            icon: "server",
            lines: vec![
                line("Version", stats.version.clone()),
                line(
                    "Uptime",
                    format!("{} hours", format_uptime_hours(stats.uptime)),
                ),
                line("Databases", stats.database_count.to_string()),
            ],
            full_width: false,
        };

        let connections = StatsCard {
            title: "Connections",
            icon: "link",
            lines: vec![
                line("Current", stats.connections.current.to_string()),
                line("Available", stats.connections.available.to_string()),
                line("Total created", stats.connections.total_created.to_string()),
            ],
            full_width: false,
        };

        let mut memory_lines = vec![
            line("Resident", mb(stats.memory.resident)),
            line("Virtual", mb(stats.memory.virtual_mb)),
        ];
        // mapped == 0 означает "не сообщается"
        if let Some(mapped) = stats.memory.mapped.filter(|m| *m != 0.0) {
            memory_lines.push(line("Mapped", mb(mapped)));
        }

        let memory = StatsCard {
            title: "Memory",
            icon: "cpu",
            lines: memory_lines,
            full_width: true,
        };

        Self {
            cards: vec![server, connections, memory],
        }
    }
}

fn mb(megabytes: f64) -> String {
    format_bytes(megabytes_to_bytes(megabytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "version": "7.0.4",
        "uptime": 93600,
        "databaseCount": 4,
        "connections": { "current": 5, "available": 838855, "totalCreated": 42 },
        "memory": { "resident": 128, "virtual": 2048 }
    }"#;

    #[test]
    fn test_parse_stats() {
        let stats = parse_stats_response(BODY).unwrap();
        assert_eq!(stats.version, "7.0.4");
        assert_eq!(stats.database_count, 4);
        assert_eq!(stats.connections.total_created, 42);
        assert_eq!(stats.memory.mapped, None);
    }

    #[test]
    fn test_parse_mem_alias() {
        let body = BODY.replace("\"memory\"", "\"mem\"");
        let stats = parse_stats_response(&body).unwrap();
        assert_eq!(stats.memory.resident, 128.0);
    }

    #[test]
    fn test_error_flagged_response() {
        let err = parse_stats_response(r#"{"error":"not authorized on admin"}"#).unwrap_err();
        assert_eq!(err, "not authorized on admin");
    }

    #[test]
    fn test_malformed_response() {
        let err = parse_stats_response(r#"{"version": 1}"#).unwrap_err();
        assert!(err.starts_with("Malformed response"));
        assert!(parse_stats_response("<html>").is_err());
    }

    #[test]
    fn test_panel_without_mapped() {
        let stats = parse_stats_response(BODY).unwrap();
        let panel = StatsPanel::from_stats(&stats);
        assert_eq!(panel.cards.len(), 3);
        assert_eq!(panel.cards[0].lines[1].value, "26 hours");

        let memory = &panel.cards[2];
        assert!(memory.full_width);
        assert_eq!(memory.lines.len(), 2);
        assert_eq!(memory.lines[0].value, "128 MB");
        assert_eq!(memory.lines[1].value, "2 GB");
    }

    #[test]
    fn test_panel_with_mapped() {
        let mut stats = parse_stats_response(BODY).unwrap();
        stats.memory.mapped = Some(64.0);
        let panel = StatsPanel::from_stats(&stats);
        let memory = &panel.cards[2];
        assert_eq!(memory.lines.len(), 3);
        assert_eq!(memory.lines[2].label, "Mapped");
        assert_eq!(memory.lines[2].value, "64 MB");
    }
}
