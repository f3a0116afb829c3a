//! Read-only endpoints and the loaders that feed the view-model builders.

use std::collections::HashMap;

use tracing::debug;

use super::paths;
use super::transport::parse_response;
use super::types::{ItemsResponse, Profile, TraderSettings, TradersResponse};
use super::SptClient;
use crate::catalog::{build_all_items, build_traders, sort_profiles};
use crate::locale::LocaleTable;
use crate::types::{AllItems, Result, ServerInfo, Trader};

impl SptClient {
    /// Server identity/version; used as the connection check
    pub async fn server_info(&self) -> Result<ServerInfo> {
        self.get_json(paths::SERVER_INFO, "").await
    }

    /// All profiles on the server, ordered by username
    pub async fn load_profiles(&self) -> Result<Vec<Profile>> {
        let body = self.get_raw_bytes(paths::PROFILES, "").await?;
        let sessions: HashMap<String, Profile> =
            parse_response(&self.url(paths::PROFILES), &body)?;

        debug!("Loaded {} profiles", sessions.len());
        Ok(sort_profiles(sessions))
    }

    /// Localization table for a locale code such as `en` or `es-mx`
    pub async fn fetch_locale(&self, code: &str) -> Result<LocaleTable> {
        let path = paths::locale(code);
        let body = self.get_raw_bytes(&path, "").await?;
        let table: LocaleTable = parse_response(&self.url(&path), &body)?;

        debug!("Loaded {} locale entries for '{}'", table.len(), code);
        Ok(table)
    }

    /// Raw item catalog and global presets
    pub async fn fetch_catalog(&self) -> Result<ItemsResponse> {
        let body = self.get_raw_bytes(paths::ITEMS, "").await?;
        let catalog: ItemsResponse = parse_response(&self.url(paths::ITEMS), &body)?;

        debug!(
            "Loaded {} item templates and {} presets",
            catalog.items.len(),
            catalog.global_presets.len()
        );
        Ok(catalog)
    }

    /// Catalog joined with the locale table
    pub async fn load_items(&self, locale_code: &str) -> Result<AllItems> {
        let catalog = self.fetch_catalog().await?;
        let locale = self.fetch_locale(locale_code).await?;

        Ok(build_all_items(
            &catalog.items,
            &catalog.global_presets,
            &locale,
        ))
    }

    /// Trader settings as seen by a player session
    pub async fn fetch_trader_settings(&self, session_id: &str) -> Result<Vec<TraderSettings>> {
        let response: TradersResponse = self.get_json(paths::TRADER_SETTINGS, session_id).await?;
        Ok(response.data)
    }

    /// Traders available to `profile`
    pub async fn load_traders(
        &self,
        profile: &Profile,
        session_id: &str,
        locale_code: &str,
    ) -> Result<Vec<Trader>> {
        let settings = self.fetch_trader_settings(session_id).await?;
        let locale = self.fetch_locale(locale_code).await?;

        Ok(build_traders(&settings, profile, &locale, &self.base_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_load_items_joins_catalog_and_locale() {
        let mut server = mockito::Server::new_async().await;
        let items = server
            .mock("GET", "/give-ui/items")
            .with_status(200)
            .with_body(
                json!({
                    "items": {
                        "A": {"_id": "A", "_parent": "P", "_type": "Item",
                              "_props": {"StackMaxSize": 60, "IsUnbuyable": false}},
                        "P": {"_id": "P", "_parent": "", "_type": "Node", "_props": {}},
                        "X": {"_id": "X", "_parent": "P", "_type": "Item",
                              "_props": {"IsUnbuyable": true}}
                    },
                    "globalPresets": [{"_id": "preset1", "_encyclopedia": "A"}]
                })
                .to_string(),
            )
            .expect(1)
            .create_async()
            .await;
        let locale = server
            .mock("GET", "/client/locale/en")
            .with_status(200)
            .with_body(
                json!({"err": 0, "errmsg": null,
                       "data": {"P Name": "Ammo", "A Name": "Bullet", "X Name": "Nope"}})
                .to_string(),
            )
            .expect(1)
            .create_async()
            .await;

        let client = SptClient::new(&server.url());
        let all = client.load_items("en").await.unwrap();

        assert_eq!(all.categories, vec!["Ammo".to_string()]);
        assert_eq!(all.items.len(), 1);
        assert_eq!(all.items["A"].name, "Bullet");
        assert_eq!(all.items["A"].max_stock, 60);
        assert_eq!(all.global_presets.len(), 1);
        assert!(all.global_presets[0].encyclopedia);

        items.assert_async().await;
        locale.assert_async().await;
    }

    #[tokio::test]
    async fn test_load_items_propagates_locale_failure() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/give-ui/items")
            .with_status(200)
            .with_body(r#"{"items":{},"globalPresets":[]}"#)
            .create_async()
            .await;
        server
            .mock("GET", "/client/locale/xx")
            .with_status(200)
            .with_body("null")
            .create_async()
            .await;

        let client = SptClient::new(&server.url());
        let err = client.load_items("xx").await.unwrap_err();
        assert!(err.is_decode());
    }

    #[tokio::test]
    async fn test_load_profiles_sorted() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/give-ui/profiles")
            .with_status(200)
            .with_body(
                json!({
                    "s2": {"info": {"id": "s2", "username": "bob"}, "characters": {"pmc": {}}},
                    "s1": {"info": {"id": "s1", "username": "alice"}, "characters": {"pmc": {}}}
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = SptClient::new(&server.url());
        let profiles = client.load_profiles().await.unwrap();
        let ids: Vec<&str> = profiles.iter().map(|p| p.session_id()).collect();
        assert_eq!(ids, vec!["s1", "s2"]);
    }

    #[tokio::test]
    async fn test_load_traders_uses_session_and_base_url() {
        let mut server = mockito::Server::new_async().await;
        let settings = server
            .mock("GET", "/client/trading/api/traderSettings")
            .match_header("cookie", "PHPSESSID=s1")
            .with_status(200)
            .with_body(
                json!({"err": 0, "errmsg": null, "data": [
                    {"_id": "t2", "nickname": "Therapist", "avatar": "/files/t2.png", "availableInRaid": false},
                    {"_id": "t1", "nickname": "Prapor", "avatar": "/files/t1.png", "availableInRaid": false},
                    {"_id": "t3", "nickname": "Fence", "avatar": "/files/t3.png", "availableInRaid": true}
                ]})
                .to_string(),
            )
            .expect(1)
            .create_async()
            .await;
        server
            .mock("GET", "/client/locale/en")
            .with_status(200)
            .with_body(r#"{"t1 Nickname":"Prapor"}"#)
            .create_async()
            .await;

        let profile: Profile = serde_json::from_value(json!({
            "info": {"id": "s1", "username": "alice"},
            "characters": {"pmc": {"TradersInfo": {
                "t1": {"standing": 0.5, "salesSum": 100, "loyaltyLevel": 1},
                "t2": {"standing": 1.25, "salesSum": 2000, "loyaltyLevel": 2},
                "t3": {"standing": 0.0, "salesSum": 0, "loyaltyLevel": 1}
            }}}
        }))
        .unwrap();

        let client = SptClient::new(&server.url());
        let traders = client.load_traders(&profile, "s1", "en").await.unwrap();

        assert_eq!(traders.len(), 2);
        assert_eq!(traders[0].id, "t1");
        assert_eq!(traders[0].nickname_locale, "Prapor");
        assert_eq!(traders[0].image, format!("{}/files/t1.png", server.url()));
        assert_eq!(traders[1].reputation, "1.25");
        assert_eq!(traders[1].sales_sum, "2000");
        assert_eq!(traders[1].nickname_locale, "");
        settings.assert_async().await;
    }

    #[tokio::test]
    async fn test_server_info() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/give-ui/server")
            .with_status(200)
            .with_body(r#"{"version":"3.10.0","path":"C:/spt"}"#)
            .create_async()
            .await;

        let client = SptClient::new(&server.url());
        let info = client.server_info().await.unwrap();
        assert_eq!(info.version.as_deref(), Some("3.10.0"));
        assert_eq!(info.path.as_deref(), Some("C:/spt"));
    }
}
