//! The song-play warehouse tables
//!
//! Two staging tables (free-form landing zone, no keys) and the star schema:
//! fact table `songplays` referencing the `users`, `artists`, `songs`, and
//! `time` dimensions. `warehouse_tables` returns them in dependency order so
//! that rendering CREATE statements in iteration order never references a
//! table that does not exist yet.

use super::table::{Column, TableDef};
use super::types::DataType;
use indexmap::IndexMap;

/// Raw landing copy of the event logs, one row per logged action
pub fn staging_events() -> TableDef {
    TableDef::new(
        "staging_events",
        vec![
            Column::new("artist", DataType::Varchar),
            Column::new("auth", DataType::Varchar),
            Column::new("firstName", DataType::Varchar),
            Column::new("gender", DataType::Char(1)),
            Column::new("itemInSession", DataType::Integer),
            Column::new("lastName", DataType::Varchar),
            Column::new("length", DataType::Float),
            Column::new("level", DataType::Varchar),
            Column::new("location", DataType::Varchar),
            Column::new("method", DataType::Varchar),
            Column::new("page", DataType::Varchar),
            Column::new("registration", DataType::BigInt),
            Column::new("sessionId", DataType::Integer),
            Column::new("song", DataType::Varchar),
            Column::new("status", DataType::Integer),
            Column::new("ts", DataType::BigInt),
            Column::new("user_agent", DataType::Text),
            Column::new("user_id", DataType::Integer),
        ],
    )
}

/// Raw landing copy of the song metadata
pub fn staging_songs() -> TableDef {
    TableDef::new(
        "staging_songs",
        vec![
            Column::new("num_songs", DataType::Integer),
            Column::new("artist_id", DataType::Varchar),
            Column::new("artist_latitude", DataType::Float),
            Column::new("artist_longitude", DataType::Float),
            Column::new("artist_location", DataType::Varchar),
            Column::new("artist_name", DataType::Varchar),
            Column::new("song_id", DataType::Varchar),
            Column::new("title", DataType::Varchar),
            Column::new("duration", DataType::Float),
            Column::new("year", DataType::Integer),
        ],
    )
}

/// User dimension, distinct users seen in NextSong events
pub fn users() -> TableDef {
    TableDef::new(
        "users",
        vec![
            Column::new("user_id", DataType::Integer).primary_key(),
            Column::new("first_name", DataType::Varchar),
            Column::new("last_name", DataType::Varchar),
            Column::new("gender", DataType::Char(1)),
            Column::new("level", DataType::Varchar),
        ],
    )
}

/// Artist dimension, distinct artists from the song metadata
pub fn artists() -> TableDef {
    TableDef::new(
        "artists",
        vec![
            Column::new("artist_id", DataType::Varchar).primary_key(),
            Column::new("name", DataType::Varchar),
            Column::new("location", DataType::Varchar),
            Column::new("latitude", DataType::Float),
            Column::new("longitude", DataType::Float),
        ],
    )
}

/// Song dimension, distinct songs from the song metadata
pub fn songs() -> TableDef {
    TableDef::new(
        "songs",
        vec![
            Column::new("song_id", DataType::Varchar).primary_key(),
            Column::new("title", DataType::Varchar),
            Column::new("artist_id", DataType::Varchar).references("artists", "artist_id"),
            Column::new("year", DataType::Integer),
            Column::new("duration", DataType::Float),
        ],
    )
}

/// Time dimension, calendar breakdown of every NextSong timestamp
pub fn time() -> TableDef {
    TableDef::new(
        "time",
        vec![
            Column::new("start_time", DataType::Timestamp).primary_key(),
            Column::new("hour", DataType::Integer),
            Column::new("day", DataType::Integer),
            Column::new("week", DataType::Integer),
            Column::new("month", DataType::Integer),
            Column::new("year", DataType::Integer),
            Column::new("weekday", DataType::Integer),
        ],
    )
}

/// Fact table, one row per NextSong event matched to a known song
pub fn songplays() -> TableDef {
    TableDef::new(
        "songplays",
        vec![
            Column::new("songplay_id", DataType::Integer)
                .identity(0, 1)
                .primary_key(),
            Column::new("start_time", DataType::Timestamp).references("time", "start_time"),
            Column::new("user_id", DataType::Integer).references("users", "user_id"),
            Column::new("level", DataType::Varchar),
            Column::new("song_id", DataType::Varchar).references("songs", "song_id"),
            Column::new("artist_id", DataType::Varchar).references("artists", "artist_id"),
            Column::new("session_id", DataType::Integer),
            Column::new("location", DataType::Varchar),
            Column::new("user_agent", DataType::Text),
        ],
    )
}

/// All seven tables keyed by name, in dependency order: staging first, then
/// dimensions with referenced tables before referencing ones, fact last.
pub fn warehouse_tables() -> IndexMap<String, TableDef> {
    let tables = [
        staging_events(),
        staging_songs(),
        users(),
        artists(),
        songs(),
        time(),
        songplays(),
    ];
    tables.into_iter().map(|t| (t.name.clone(), t)).collect()
}
