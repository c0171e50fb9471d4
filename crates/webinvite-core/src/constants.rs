/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const WEDDINGS_ROUTE_COMPONENT: &str = "weddings";
pub const WEDDINGS_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", WEDDINGS_ROUTE_COMPONENT);

pub const PREVIEW_ROUTE_COMPONENT: &str = "preview";
pub const PREVIEW_ROUTE_PREFIX: &str = const_str::concat!("/", PREVIEW_ROUTE_COMPONENT);

pub const INVITATION_ROUTE_COMPONENT: &str = "invitation";
pub const INVITATION_ROUTE_PREFIX: &str = const_str::concat!("/", INVITATION_ROUTE_COMPONENT);

/// Prefix of the local storage key holding a preview snapshot.
pub const PREVIEW_STORAGE_KEY_PREFIX: &str = "wedding-preview-";

/// Length of a guest invitation code.
pub const INVITATION_CODE_LEN: usize = 8;

/// Alphabet guest invitation codes are drawn from.
pub const INVITATION_CODE_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
