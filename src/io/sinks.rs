use async_trait::async_trait;
use futures::io::{AsyncWrite, AsyncWriteExt};
use serde::Serialize;

use super::error::IoError;

/// Destination of one branch of a pipeline
#[async_trait]
pub trait RecordSink<K, V>: Send
where
    K: Send + 'static,
    V: Send + 'static,
{
    /// Emit one keyed record
    async fn send(&mut self, key: K, value: V) -> Result<(), IoError>;

    /// Push buffered records to the underlying writer
    async fn flush(&mut self) -> Result<(), IoError> {
        Ok(())
    }
}

#[async_trait]
impl<K, V, S> RecordSink<K, V> for &mut S
where
    K: Send + 'static,
    V: Send + 'static,
    S: RecordSink<K, V> + ?Sized,
{
    async fn send(&mut self, key: K, value: V) -> Result<(), IoError> {
        (**self).send(key, value).await
    }

    async fn flush(&mut self) -> Result<(), IoError> {
        (**self).flush().await
    }
}

/// Collects records in memory, in emission order
#[derive(Debug, Clone)]
pub struct MemorySink<K, V> {
    records: Vec<(K, V)>,
}

impl<K, V> MemorySink<K, V> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn records(&self) -> &[(K, V)] {
        &self.records
    }

    pub fn into_records(self) -> Vec<(K, V)> {
        self.records
    }
}

impl<K, V> Default for MemorySink<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<K, V> RecordSink<K, V> for MemorySink<K, V>
where
    K: Send + 'static,
    V: Send + 'static,
{
    async fn send(&mut self, key: K, value: V) -> Result<(), IoError> {
        self.records.push((key, value));
        Ok(())
    }
}

/// Drops every record; the error sink of a pipeline that only logs failures
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardSink;

#[async_trait]
impl<K, V> RecordSink<K, V> for DiscardSink
where
    K: Send + 'static,
    V: Send + 'static,
{
    async fn send(&mut self, _key: K, _value: V) -> Result<(), IoError> {
        Ok(())
    }
}

/// Writes records as `key,value` CSV rows, `None` fields stay empty
pub struct CsvSink<W> {
    writer: W,
    header_written: bool,
}

impl<W> CsvSink<W>
where
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            header_written: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn encode<K: Serialize, V: Serialize>(
        &mut self,
        record: Option<(&K, &V)>,
    ) -> Result<Vec<u8>, IoError> {
        let mut row = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        if !self.header_written {
            row.write_record(["key", "value"])?;
            self.header_written = true;
        }
        if let Some(record) = record {
            row.serialize(record)?;
        }
        row.into_inner().map_err(|e| IoError::Io(e.into_error()))
    }
}

#[async_trait]
impl<K, V, W> RecordSink<K, V> for CsvSink<W>
where
    K: Serialize + Send + 'static,
    V: Serialize + Send + 'static,
    W: AsyncWrite + Unpin + Send,
{
    async fn send(&mut self, key: K, value: V) -> Result<(), IoError> {
        let bytes = self.encode(Some((&key, &value)))?;
        self.writer.write_all(&bytes).await?;
        Ok(())
    }

    async fn flush(&mut self) -> Result<(), IoError> {
        if !self.header_written {
            let bytes = self.encode::<(), ()>(None)?;
            self.writer.write_all(&bytes).await?;
        }
        self.writer.flush().await?;
        Ok(())
    }
}

#[derive(Serialize)]
struct JsonRecord<'a, K, V> {
    key: &'a K,
    value: &'a V,
}

/// Writes records as JSON lines: `{"key":...,"value":...}`
pub struct JsonLinesSink<W> {
    writer: W,
}

impl<W> JsonLinesSink<W>
where
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[async_trait]
impl<K, V, W> RecordSink<K, V> for JsonLinesSink<W>
where
    K: Serialize + Send + 'static,
    V: Serialize + Send + 'static,
    W: AsyncWrite + Unpin + Send,
{
    async fn send(&mut self, key: K, value: V) -> Result<(), IoError> {
        let mut line = serde_json::to_vec(&JsonRecord {
            key: &key,
            value: &value,
        })?;
        line.push(b'\n');
        self.writer.write_all(&line).await?;
        Ok(())
    }

    async fn flush(&mut self) -> Result<(), IoError> {
        self.writer.flush().await?;
        Ok(())
    }
}
