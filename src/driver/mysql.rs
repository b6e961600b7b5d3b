//! MySQL driver adapter
//!
//! Implements [`Driver`] over a `mysql_async` connection pool. Each
//! execution borrows a pooled connection, drains every result set of the
//! reply, and classifies the observed shape into a [`RawReply`] variant.

use async_trait::async_trait;
use mysql_async::prelude::Queryable;
use mysql_async::{Opts, Pool};

use super::reply::{OperationMetadata, RawReply};
use super::row::{Row, Value};
use super::{Driver, DriverError, DriverResult};

/// mysql_async-backed driver
pub struct MySqlDriver {
    /// Connection pool, owns all connection lifecycle
    pool: Pool,
}

impl MySqlDriver {
    /// Create a driver over an existing pool
    pub fn new(pool: Pool) -> Self {
        MySqlDriver { pool }
    }

    /// Create a driver from a connection URL
    pub fn from_url(url: &str) -> DriverResult<Self> {
        let opts = Opts::from_url(url).map_err(|e| DriverError::Connection(e.to_string()))?;
        Ok(MySqlDriver {
            pool: Pool::new(opts),
        })
    }
}

#[async_trait]
impl Driver for MySqlDriver {
    async fn execute(&self, query: &str) -> DriverResult<RawReply> {
        let mut conn = self.pool.get_conn().await?;
        let mut result = conn.query_iter(query).await?;

        let mut sets: Vec<Vec<Row>> = Vec::new();
        while !result.is_empty() {
            let raw: Vec<mysql_async::Row> = result.collect().await?;
            sets.push(raw.iter().map(convert_row).collect());
        }

        let info = result.info().to_string();
        let meta = OperationMetadata {
            field_count: sets
                .first()
                .and_then(|set| set.first())
                .map(|row| row.len() as u32)
                .unwrap_or(0),
            affected_rows: result.affected_rows(),
            insert_id: result.last_insert_id().unwrap_or(0),
            changed_rows: parse_changed_rows(&info),
            server_status: 0,
            warning_status: result.warnings(),
            info,
        };

        Ok(classify(sets, meta))
    }
}

impl From<mysql_async::Error> for DriverError {
    fn from(e: mysql_async::Error) -> Self {
        match e {
            mysql_async::Error::Server(s) => DriverError::Sql {
                code: s.code,
                message: s.message,
            },
            mysql_async::Error::Io(io) => DriverError::Connection(io.to_string()),
            other => DriverError::Protocol(other.to_string()),
        }
    }
}

/// Tag the drained reply by the shape the server produced: two or more
/// row sets make a three-part procedure reply, one makes a flat row set,
/// none leaves metadata alone. Row sets past the second are dropped.
fn classify(mut sets: Vec<Vec<Row>>, meta: OperationMetadata) -> RawReply {
    match sets.len() {
        0 => RawReply::Metadata(meta),
        1 => RawReply::RowSet(sets.remove(0)),
        _ => {
            let data = sets.remove(0);
            let feedback = sets.remove(0);
            RawReply::ThreePart {
                data,
                feedback,
                meta,
            }
        }
    }
}

fn convert_row(raw: &mysql_async::Row) -> Row {
    let columns = raw
        .columns_ref()
        .iter()
        .map(|c| c.name_str().into_owned())
        .collect();
    let values = (0..raw.len())
        .map(|i| raw.as_ref(i).map(convert_value).unwrap_or(Value::Null))
        .collect();
    Row::new(columns, values)
}

fn convert_value(v: &mysql_async::Value) -> Value {
    use mysql_async::Value as SqlValue;

    match v {
        SqlValue::NULL => Value::Null,
        SqlValue::Int(i) => Value::Int(*i),
        SqlValue::UInt(u) => Value::UInt(*u),
        SqlValue::Float(f) => Value::Float(f64::from(*f)),
        SqlValue::Double(d) => Value::Float(*d),
        SqlValue::Bytes(b) => match std::str::from_utf8(b) {
            Ok(s) => Value::Text(s.to_string()),
            Err(_) => Value::Bytes(b.clone()),
        },
        SqlValue::Date(y, m, d, hh, mm, ss, us) => {
            if (*hh, *mm, *ss, *us) == (0, 0, 0, 0) {
                Value::Text(format!("{:04}-{:02}-{:02}", y, m, d))
            } else {
                Value::Text(format!(
                    "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
                    y, m, d, hh, mm, ss
                ))
            }
        }
        SqlValue::Time(neg, days, h, m, s, _us) => {
            let hours = u32::from(*h) + days * 24;
            Value::Text(format!(
                "{}{:02}:{:02}:{:02}",
                if *neg { "-" } else { "" },
                hours,
                m,
                s
            ))
        }
    }
}

/// Pull the changed-row count out of the server's info string
/// (`Rows matched: N  Changed: N  Warnings: N`).
fn parse_changed_rows(info: &str) -> u64 {
    info.split("Changed: ")
        .nth(1)
        .and_then(|rest| rest.split_whitespace().next())
        .and_then(|n| n.parse().ok())
        .unwrap_or(0)
}
