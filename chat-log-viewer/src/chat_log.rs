//! Chat log entries shown below the filter panel.
//!
//! # CSV Format
//!
//! Has headers: `PROJECT_ID,DATE(YYYY-MM-DD),AUTHOR,MESSAGE`

use chat_filter_core::{dates, ChatFilters};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatLogEntry {
    pub project_id: String,
    pub date: NaiveDate,
    pub author: String,
    pub message: String,
}

/// Parse the chat log CSV. Rows without a valid date are skipped.
pub fn parse_chat_log(csv_data: &str) -> anyhow::Result<Vec<ChatLogEntry>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes());

    let mut entries = Vec::new();
    let mut skipped = 0u32;
    for result in rdr.records() {
        let r = result?;
        let project_id = r.get(0).unwrap_or("").trim();
        let date = match dates::parse_date(r.get(1).unwrap_or("").trim()) {
            Ok(d) => d,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };
        entries.push(ChatLogEntry {
            project_id: project_id.to_string(),
            date,
            author: r.get(2).unwrap_or("").trim().to_string(),
            message: r.get(3).unwrap_or("").trim().to_string(),
        });
    }
    log::info!("Loaded {} chat log entries, skipped {}", entries.len(), skipped);
    Ok(entries)
}

/// Entries passing `filters`, in log order.
pub fn visible_entries<'a>(entries: &'a [ChatLogEntry], filters: &ChatFilters) -> Vec<&'a ChatLogEntry> {
    entries
        .iter()
        .filter(|e| filters.matches(&e.project_id, e.date))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOG: &str = "PROJECT_ID,DATE,AUTHOR,MESSAGE
A,2024-01-01,user,Erste Frage
B,2024-01-15,assistant,Antwort
A,kein-datum,user,Kaputt
A,2024-02-01,user,Zweite Frage
";

    #[test]
    fn test_parse_chat_log_skips_bad_dates() {
        let entries = parse_chat_log(LOG).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].project_id, "A");
        assert_eq!(entries[0].date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(entries[1].author, "assistant");
        assert_eq!(entries[2].message, "Zweite Frage");
    }

    #[test]
    fn test_visible_entries() {
        let entries = parse_chat_log(LOG).unwrap();

        let all = visible_entries(&entries, &ChatFilters::default());
        assert_eq!(all.len(), 3);

        let project_a = ChatFilters {
            project_id: "A".to_string(),
            ..Default::default()
        };
        assert_eq!(visible_entries(&entries, &project_a).len(), 2);

        let january = ChatFilters {
            project_id: String::new(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 31),
        };
        let shown: Vec<&str> = visible_entries(&entries, &january)
            .iter()
            .map(|e| e.message.as_str())
            .collect();
        assert_eq!(shown, vec!["Erste Frage", "Antwort"]);
    }

    #[test]
    fn test_bundled_chat_log_parses() {
        let entries = parse_chat_log(include_str!("../../fixtures/chat_log.csv")).unwrap();
        assert_eq!(entries.len(), 8);
    }
}
