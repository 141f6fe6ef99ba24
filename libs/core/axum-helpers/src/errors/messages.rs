//! Public messages for failures not owned by a specific route.

pub const INVALID_BODY: &str = "Format data tidak valid.";
pub const PAYLOAD_TOO_LARGE: &str = "Ukuran data terlalu besar.";
pub const NOT_FOUND: &str = "Endpoint tidak ditemukan.";
pub const INTERNAL_ERROR: &str = "Terjadi kesalahan server.";
