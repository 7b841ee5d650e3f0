//! History sub-client — fetch a bundle and run it through the pipeline.

use super::pipeline;
use super::wire::RawSeriesBundle;
use super::{DisplayTz, HistoryRecord};
use crate::client::CoincapClient;
use crate::error::SdkError;
use crate::shared::HistoryKey;

/// Sub-client for history operations.
pub struct HistoryClient<'a> {
    pub(crate) client: &'a CoincapClient,
}

impl<'a> HistoryClient<'a> {
    /// The raw three-series bundle for `key`.
    pub async fn raw(&self, key: &HistoryKey) -> Result<RawSeriesBundle, SdkError> {
        Ok(self.client.http.get_history(key).await?)
    }

    /// Merged records in the order the backend sent them.
    pub async fn records(&self, key: &HistoryKey) -> Result<Vec<HistoryRecord>, SdkError> {
        let bundle = self.raw(key).await?;
        Ok(pipeline::merge(&bundle)?)
    }

    /// The `count` most recent records, newest first.
    pub async fn latest(
        &self,
        key: &HistoryKey,
        count: usize,
    ) -> Result<Vec<HistoryRecord>, SdkError> {
        let records = self.records(key).await?;
        Ok(pipeline::pick_top(
            count,
            &pipeline::sort_by_time_desc(&records),
        ))
    }

    /// Display lines for the `top_n` most recent records, dates in UTC.
    pub async fn process(&self, key: &HistoryKey, top_n: usize) -> Result<Vec<String>, SdkError> {
        self.process_in(key, top_n, DisplayTz::Utc).await
    }

    /// Display lines for the `top_n` most recent records, dates rendered under `tz`.
    pub async fn process_in(
        &self,
        key: &HistoryKey,
        top_n: usize,
        tz: DisplayTz,
    ) -> Result<Vec<String>, SdkError> {
        let bundle = self.raw(key).await?;
        Ok(pipeline::process(&bundle, top_n, tz)?)
    }
}
