use rand::{distributions::Alphanumeric, Rng};

pub const DOCUMENT_ID_LEN: usize = 20;

/// Random alphanumeric id in the auto-id format of hosted document stores.
pub fn generate_document_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(DOCUMENT_ID_LEN)
        .map(char::from)
        .collect()
}
