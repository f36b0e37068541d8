use crate::repositories::LocationStore;
use anyhow::bail;
use async_trait::async_trait;
use entities::locations::{
    ClinicLocation, ClinicLocationId, Coordinate, NewClinicLocation, SearchRadius,
};
use std::sync::Mutex;

#[derive(Debug, Clone)]
pub enum StoreCall {
    Insert(NewClinicLocation),
    FindNear(Coordinate, SearchRadius),
    FindAll,
}

/// Records every call it receives and answers with canned data.
#[derive(Default)]
pub struct RecordingStore {
    calls: Mutex<Vec<StoreCall>>,
    fail: bool,
}

impl RecordingStore {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: StoreCall) -> anyhow::Result<()> {
        self.calls.lock().unwrap().push(call);
        if self.fail {
            bail!("connection refused");
        }
        Ok(())
    }
}

#[async_trait]
impl LocationStore for RecordingStore {
    async fn insert(&self, location: NewClinicLocation) -> anyhow::Result<ClinicLocation> {
        self.record(StoreCall::Insert(location.clone()))?;
        Ok(ClinicLocation::from_new(ClinicLocationId::new(), location))
    }

    async fn find_near(
        &self,
        point: Coordinate,
        radius: SearchRadius,
    ) -> anyhow::Result<Vec<ClinicLocation>> {
        self.record(StoreCall::FindNear(point, radius))?;
        Ok(vec![])
    }

    async fn find_all(&self) -> anyhow::Result<Vec<ClinicLocation>> {
        self.record(StoreCall::FindAll)?;
        Ok(vec![])
    }
}
