mod clients;
mod storage;

pub use clients::edupath::EdupathClient;
pub use storage::fs_store::FileSystemStore;
