//! Contract map helpers

use cfgreg_domain::value_objects::{ContractMap, TypeKey};

/// Build a contract map binding every contract to the same priority
pub fn init_contracts_map(priority: i32, contracts: &[TypeKey]) -> ContractMap {
    contracts
        .iter()
        .map(|contract| (*contract, priority))
        .collect()
}
