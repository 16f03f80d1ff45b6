use uuid::Uuid;

/// Source of raw random numbers used when minting board ids.
///
/// A plain function pointer keeps [`crate::core::Board`] `Send + Sync` so it
/// can live inside a signal.
pub type IdSource = fn() -> u32;

/// Draws a random `u32` from the v4 UUID generator.
pub fn random_u32() -> u32 {
    let bytes = Uuid::new_v4().into_bytes();
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}
