//! Administrative commands. Values are passed through as-is; the server is
//! the only judge of whether an amount or id is valid.

use tracing::info;

use super::paths;
use super::types::{AddItemRequest, AddUserWeaponPresetRequest, UpdateTraderRequest};
use super::SptClient;
use crate::types::Result;

impl SptClient {
    /// Give `amount` of an item to the profile behind `session_id`
    pub async fn give_item(&self, session_id: &str, item_id: &str, amount: i64) -> Result<()> {
        info!("Giving {} x {} to {}", amount, item_id, session_id);

        let request = AddItemRequest {
            item_id: item_id.to_string(),
            amount,
        };
        self.post_json(paths::GIVE_ITEM, session_id, &request).await?;
        Ok(())
    }

    /// Give a weapon built from a global preset
    pub async fn give_weapon_preset(&self, session_id: &str, preset_id: &str) -> Result<()> {
        info!("Giving preset {} to {}", preset_id, session_id);

        let request = AddUserWeaponPresetRequest {
            item_id: preset_id.to_string(),
        };
        self.post_json(paths::GIVE_USER_PRESET, session_id, &request)
            .await?;
        Ok(())
    }

    /// Overwrite a trader's sales sum and reputation for a profile
    pub async fn update_trader(
        &self,
        session_id: &str,
        nickname: &str,
        spend: &str,
        rep: &str,
    ) -> Result<()> {
        info!(
            "Updating trader {} for {} (spend: {}, rep: {})",
            nickname, session_id, spend, rep
        );

        let request = UpdateTraderRequest {
            nickname: nickname.to_string(),
            spend: spend.to_string(),
            rep: rep.to_string(),
        };
        self.post_json(paths::UPDATE_TRADER, session_id, &request)
            .await?;
        Ok(())
    }
}
