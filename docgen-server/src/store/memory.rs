use parking_lot::RwLock;
use shared::models::ContractRecord;

use super::ContractStore;

/// 进程内合同存储，重启后丢失
#[derive(Debug, Default)]
pub struct InMemoryContractStore {
    current: RwLock<Option<ContractRecord>>,
}

impl InMemoryContractStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContractStore for InMemoryContractStore {
    fn current(&self) -> Option<ContractRecord> {
        self.current.read().clone()
    }

    fn save(&self, record: ContractRecord) -> ContractRecord {
        *self.current.write() = Some(record.clone());
        tracing::debug!(id = %record.id, "Current contract saved");
        record
    }
}
