//! Profile fields stored as discrete string values.

use tracing::{info, warn};

use progressive_shared::constants::{
    DEFAULT_HEIGHT_CM, DEFAULT_WEIGHT_KG, KEY_REGISTERED_USER, KEY_USER_EMAIL, KEY_USER_HEIGHT,
    KEY_USER_WEIGHT,
};
use progressive_shared::schema::validate_profile;
use progressive_shared::Profile;
use progressive_store::{Gateway, KeyValueStore};

use crate::error::Result;

pub struct ProfileService<S: ?Sized> {
    gateway: Gateway<S>,
}

impl<S: KeyValueStore + ?Sized + 'static> ProfileService<S> {
    pub fn new(gateway: Gateway<S>) -> Self {
        Self { gateway }
    }

    /// Current profile.  Fields never saved fall back to the defaults; an
    /// unreadable measurement is logged and replaced by its default.
    pub async fn load(&self) -> Result<Profile> {
        let defaults = Profile::default();

        let display_name = self
            .gateway
            .read_field(KEY_REGISTERED_USER)
            .await?
            .unwrap_or(defaults.display_name);
        let email = self
            .gateway
            .read_field(KEY_USER_EMAIL)
            .await?
            .unwrap_or(defaults.email);
        let weight_kg = self.read_measurement(KEY_USER_WEIGHT, DEFAULT_WEIGHT_KG).await?;
        let height_cm = self.read_measurement(KEY_USER_HEIGHT, DEFAULT_HEIGHT_CM).await?;

        Ok(Profile {
            display_name,
            email,
            weight_kg,
            height_cm,
        })
    }

    /// Validate and store every profile field.
    pub async fn save(&self, profile: &Profile) -> Result<()> {
        validate_profile(profile)?;

        self.gateway
            .write_field(KEY_REGISTERED_USER, profile.display_name.trim().to_string())
            .await?;
        self.gateway
            .write_field(KEY_USER_EMAIL, profile.email.trim().to_string())
            .await?;
        self.gateway
            .write_field(KEY_USER_WEIGHT, profile.weight_kg.to_string())
            .await?;
        self.gateway
            .write_field(KEY_USER_HEIGHT, profile.height_cm.to_string())
            .await?;

        info!(display_name = %profile.display_name, "profile saved");
        Ok(())
    }

    async fn read_measurement(&self, key: &'static str, default: f64) -> Result<f64> {
        let Some(raw) = self.gateway.read_field(key).await? else {
            return Ok(default);
        };

        match raw.trim().replace(',', ".").parse::<f64>() {
            Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
            _ => {
                warn!(key, value = %raw, "stored measurement is unreadable, using default");
                Ok(default)
            }
        }
    }
}
