/// Storage keys, unchanged from the browser build so a file store dropped
/// into an old data directory keeps working.

/// Wallet singleton record
pub const WALLET: &str = "demo.wallet";

/// Ordered collection of connected demo banks
pub const CONNECTED_BANKS: &str = "demo.connectedBanks";

/// Opaque bearer token for the backend session
pub const ACCESS_TOKEN: &str = "accessToken";

/// Cached profile of the signed-in user
pub const USER_PROFILE: &str = "user";
