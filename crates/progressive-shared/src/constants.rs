/// Application name
pub const APP_NAME: &str = "Progressive";

/// Storage key holding the serialized workout collection
pub const KEY_WORKOUTS: &str = "workouts";

/// Storage keys for the discrete profile / credential fields
pub const KEY_REGISTERED_USER: &str = "registered_user";
pub const KEY_REGISTERED_PASS: &str = "registered_pass";
pub const KEY_USER_EMAIL: &str = "user_email";
pub const KEY_USER_WEIGHT: &str = "user_weight";
pub const KEY_USER_HEIGHT: &str = "user_height";

/// Storage key for the session token (presence-checked only)
pub const KEY_USER_TOKEN: &str = "user_token";

/// Profile values shown before the user ever saves a profile
pub const DEFAULT_DISPLAY_NAME: &str = "Usuário Padrão";
pub const DEFAULT_EMAIL: &str = "usuario@exemplo.com";
pub const DEFAULT_WEIGHT_KG: f64 = 75.0;
pub const DEFAULT_HEIGHT_CM: f64 = 175.0;

/// Token handed out by the placeholder credential issuer
pub const PLACEHOLDER_TOKEN: &str = "dummy-auth-token";
