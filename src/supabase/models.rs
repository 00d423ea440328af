use std::fmt;

use serde::Deserialize;
use uuid::Uuid;

/// Identifier of a remote game row.
///
/// The hosted table keys rows by UUID, but the probe treats the service as a
/// black box, so plain integer or string identifiers decode as well.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum GameId {
    /// UUID primary key, the shape the hosted schema actually uses.
    Uuid(Uuid),
    /// Integer key.
    Number(i64),
    /// Any other string key.
    Text(String),
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameId::Uuid(id) => id.fmt(f),
            GameId::Number(n) => n.fmt(f),
            GameId::Text(s) => f.write_str(s),
        }
    }
}

/// One row of the remote `games` table, read-only from our side.
#[derive(Debug, Clone, Deserialize)]
pub struct GameRecord {
    /// Row identifier.
    pub id: GameId,
    /// Human-readable game title.
    pub title: String,
    /// Lifecycle status, `in_progress` or `finished` in the hosted schema.
    pub status: String,
    /// Winning side, present once a game is finished.
    #[serde(default)]
    pub winner: Option<String>,
    /// Creation timestamp as reported by the service.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Ordered result of one read query, in the order the service returned rows.
#[derive(Debug, Clone)]
pub struct QueryResult<T> {
    /// Decoded rows.
    pub data: Vec<T>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{from_value, json};

    #[test]
    fn record_with_uuid_id_decodes() {
        let record: GameRecord = from_value(json!({
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "title": "Partita di test",
            "status": "in_progress",
            "winner": null,
            "created_at": "2026-01-12T09:30:00Z",
        }))
        .expect("decode record");

        assert_eq!(
            record.id,
            GameId::Uuid("550e8400-e29b-41d4-a716-446655440000".parse().unwrap())
        );
        assert_eq!(record.id.to_string(), "550e8400-e29b-41d4-a716-446655440000");
        assert_eq!(record.status, "in_progress");
        assert_eq!(record.winner, None);
        assert_eq!(record.created_at.as_deref(), Some("2026-01-12T09:30:00Z"));
    }

    #[test]
    fn record_with_integer_id_decodes() {
        let record: GameRecord = from_value(json!({
            "id": 1,
            "title": "A",
            "status": "done",
        }))
        .expect("decode record");

        assert_eq!(record.id, GameId::Number(1));
        assert_eq!(record.id.to_string(), "1");
        assert_eq!(record.winner, None);
        assert_eq!(record.created_at, None);
    }

    #[test]
    fn non_uuid_string_id_falls_back_to_text() {
        let record: GameRecord = from_value(json!({
            "id": "game-42",
            "title": "B",
            "status": "finished",
            "winner": "white",
        }))
        .expect("decode record");

        assert_eq!(record.id, GameId::Text("game-42".into()));
        assert_eq!(record.winner.as_deref(), Some("white"));
    }

    #[test]
    fn record_missing_required_key_fails_decode() {
        let result = from_value::<GameRecord>(json!({
            "id": 1,
            "title": "A",
        }));
        assert!(result.is_err());

        let result = from_value::<GameRecord>(json!({
            "id": 1,
            "status": "done",
        }));
        assert!(result.is_err());
    }
}
