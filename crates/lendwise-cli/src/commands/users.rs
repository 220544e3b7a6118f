use serde_json::Value;

use lendwise_core::store::OriginationStore;

pub fn run_users() -> Result<Value, Box<dyn std::error::Error>> {
    let store = OriginationStore::seeded();
    Ok(serde_json::to_value(store.users())?)
}
