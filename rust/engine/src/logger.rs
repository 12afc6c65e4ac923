use serde::{Deserialize, Serialize};

/// Record of one completed turn.
/// Serialized to JSONL, one line per turn, for game history.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Game identifier (format: YYYYMMDD-NNNNNN)
    pub game_id: String,
    /// Turn number within the game, starting at 1
    pub turn: usize,
    /// Faces after every roll of the turn
    pub rolls: Vec<Vec<u8>>,
    /// Rule the turn was scored on
    pub rule: String,
    /// Points committed
    pub points: u32,
    /// Running total after this turn
    pub total: u32,
    /// Seed of the hand's generator (enables deterministic replay)
    #[serde(default)]
    pub seed: Option<u64>,
    /// Timestamp when the turn was logged (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl TurnRecord {
    /// Faces the turn was scored with.
    pub fn final_faces(&self) -> &[u8] {
        self.rolls.last().map(Vec::as_slice).unwrap_or(&[])
    }
}

pub fn format_game_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

pub struct GameLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl GameLogger {
    /// Opens `path` for appending, creating it and its parent directories.
    ///
    /// Game ids continue after the highest id of today already in the file.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        Self::create_dated(path, &Utc::now().format("%Y%m%d").to_string())
    }

    /// Like [`GameLogger::create`] with an explicit `YYYYMMDD` date for ids.
    pub fn create_dated<P: AsRef<Path>>(path: P, date: &str) -> std::io::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let seq = if path.exists() {
            last_seq(BufReader::new(File::open(path)?), date)
        } else {
            0
        };
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: date.to_string(),
            seq,
        })
    }

    /// A logger that only hands out ids and discards records.
    pub fn in_memory(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_game_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &TurnRecord) -> std::io::Result<()> {
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}

/// Highest sequence number among `date` game ids; unparseable lines are skipped.
fn last_seq<R: BufRead>(reader: R, date: &str) -> u32 {
    let prefix = format!("{}-", date);
    reader
        .lines()
        .map_while(Result::ok)
        .filter_map(|line| serde_json::from_str::<TurnRecord>(&line).ok())
        .filter_map(|rec| {
            rec.game_id
                .strip_prefix(&prefix)
                .and_then(|n| n.parse::<u32>().ok())
        })
        .max()
        .unwrap_or(0)
}

impl std::fmt::Debug for GameLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameLogger")
            .field("file_backed", &self.writer.is_some())
            .field("date", &self.date)
            .field("seq", &self.seq)
            .finish()
    }
}
