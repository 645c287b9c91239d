//! SQLite persistence: the `matches` table and the `tournament_config` singleton.

use crate::models::{PadelMatch, Player, Result, TournamentConfig, TournamentError};
use chrono::Utc;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;

impl ToSql for Player {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.name()))
    }
}

impl FromSql for Player {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

const MATCH_COLUMNS: &str = "id, cycle, round, global_round, \
     team1_player1, team1_player2, team2_player1, team2_player2, resting_player, \
     score1, score2, completed, updated_at";

fn match_from_row(row: &Row<'_>) -> rusqlite::Result<PadelMatch> {
    Ok(PadelMatch {
        id: row.get(0)?,
        cycle: row.get(1)?,
        round: row.get(2)?,
        global_round: row.get(3)?,
        team1_player1: row.get(4)?,
        team1_player2: row.get(5)?,
        team2_player1: row.get(6)?,
        team2_player2: row.get(7)?,
        resting_player: row.get(8)?,
        score1: row.get(9)?,
        score2: row.get(10)?,
        completed: row.get(11)?,
        updated_at: row.get(12)?,
    })
}

/// Database connection and operations
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create database at the given path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        let db = Database { conn };
        db.init_schema()?;
        Ok(db)
    }

    /// Create an in-memory database (for testing)
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Database { conn };
        db.init_schema()?;
        Ok(db)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS matches (
                id TEXT PRIMARY KEY,
                cycle INTEGER NOT NULL,
                round INTEGER NOT NULL,
                global_round INTEGER NOT NULL,
                team1_player1 TEXT NOT NULL,
                team1_player2 TEXT NOT NULL,
                team2_player1 TEXT NOT NULL,
                team2_player2 TEXT NOT NULL,
                resting_player TEXT NOT NULL,
                score1 INTEGER,
                score2 INTEGER,
                completed INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL,
                updated_at TEXT
            );

            CREATE TABLE IF NOT EXISTS tournament_config (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                cycles INTEGER NOT NULL DEFAULT 1,
                updated_at TEXT
            );

            INSERT OR IGNORE INTO tournament_config (id, cycles) VALUES (1, 1);

            CREATE INDEX IF NOT EXISTS idx_matches_cycle_round ON matches(cycle, round);
            "#,
        )?;
        Ok(())
    }

    // ==================== Match Operations ====================

    /// All matches, newest cycle first, rounds ascending.
    pub fn all_matches(&self) -> Result<Vec<PadelMatch>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM matches ORDER BY cycle DESC, round ASC",
            MATCH_COLUMNS
        ))?;
        let matches = stmt
            .query_map([], match_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(matches)
    }

    pub fn get_match(&self, id: &str) -> Result<Option<PadelMatch>> {
        let m = self
            .conn
            .query_row(
                &format!("SELECT {} FROM matches WHERE id = ?1", MATCH_COLUMNS),
                params![id],
                match_from_row,
            )
            .optional()?;
        Ok(m)
    }

    /// Write both scores and the completed flag; returns the stored row.
    pub fn update_match(&self, m: &PadelMatch) -> Result<PadelMatch> {
        let changed = self.conn.execute(
            "UPDATE matches SET score1 = ?1, score2 = ?2, completed = ?3, updated_at = ?4 WHERE id = ?5",
            params![m.score1, m.score2, m.completed, Utc::now(), m.id],
        )?;
        if changed == 0 {
            return Err(TournamentError::MatchNotFound(m.id.clone()));
        }
        self.get_match(&m.id)?
            .ok_or_else(|| TournamentError::MatchNotFound(m.id.clone()))
    }

    /// Insert matches one row at a time. A failure part-way leaves the
    /// earlier rows in place.
    pub fn insert_matches(&self, matches: &[PadelMatch]) -> Result<()> {
        let created_at = Utc::now();
        for m in matches {
            self.conn.execute(
                r#"
                INSERT INTO matches (id, cycle, round, global_round,
                                     team1_player1, team1_player2, team2_player1, team2_player2,
                                     resting_player, score1, score2, completed, created_at)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)
                "#,
                params![
                    m.id,
                    m.cycle,
                    m.round,
                    m.global_round,
                    m.team1_player1,
                    m.team1_player2,
                    m.team2_player1,
                    m.team2_player2,
                    m.resting_player,
                    m.score1,
                    m.score2,
                    m.completed,
                    created_at,
                ],
            )?;
        }
        Ok(())
    }

    pub fn max_cycle(&self) -> Result<Option<u32>> {
        let max = self
            .conn
            .query_row("SELECT MAX(cycle) FROM matches", [], |row| row.get(0))?;
        Ok(max)
    }

    pub fn max_global_round(&self) -> Result<Option<u32>> {
        let max = self
            .conn
            .query_row("SELECT MAX(global_round) FROM matches", [], |row| row.get(0))?;
        Ok(max)
    }

    pub fn match_count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM matches", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    // ==================== Config Operations ====================

    /// The singleton config, or the default `{id: 1, cycles: 1}` if the row is gone.
    pub fn config(&self) -> Result<TournamentConfig> {
        let config = self
            .conn
            .query_row(
                "SELECT id, cycles, updated_at FROM tournament_config WHERE id = 1",
                [],
                |row| {
                    Ok(TournamentConfig {
                        id: row.get(0)?,
                        cycles: row.get(1)?,
                        updated_at: row.get(2)?,
                    })
                },
            )
            .optional()?;
        Ok(config.unwrap_or_default())
    }

    pub fn set_cycles(&self, cycles: u32) -> Result<()> {
        self.conn.execute(
            "UPDATE tournament_config SET cycles = ?1, updated_at = ?2 WHERE id = 1",
            params![cycles, Utc::now()],
        )?;
        Ok(())
    }

    /// Delete every match and set cycles back to 1.
    pub fn reset(&self) -> Result<()> {
        self.conn.execute("DELETE FROM matches", [])?;
        self.conn.execute(
            "UPDATE tournament_config SET cycles = 1, updated_at = ?1 WHERE id = 1",
            params![Utc::now()],
        )?;
        Ok(())
    }
}
