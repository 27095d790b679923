// Linkboard state managers
// Managers own all reads and writes against the persistent store.

pub mod link_store;
