use common::{AppConfiguration, Response};

use crate::state::Settings;

/// App version, reported to the client.
pub const VERSION_MAJOR: u8 = 0;
pub const VERSION_MINOR: u8 = 1;
pub const VERSION_PATCH: u8 = 0;

/// Handles the GetAppConfiguration request.
pub fn handle_get_app_configuration(settings: &Settings) -> Response {
    Response::AppConfiguration(AppConfiguration {
        version_major: VERSION_MAJOR,
        version_minor: VERSION_MINOR,
        version_patch: VERSION_PATCH,
        blind_signing_enabled: settings.blind_signing_enabled,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_app_configuration() {
        let response = handle_get_app_configuration(&Settings::default());

        if let Response::AppConfiguration(config) = response {
            assert_eq!(config.version_major, VERSION_MAJOR);
            assert_eq!(config.version_minor, VERSION_MINOR);
            assert_eq!(config.version_patch, VERSION_PATCH);
            assert!(!config.blind_signing_enabled);
        } else {
            panic!("expected AppConfiguration response");
        }
    }

    #[test]
    fn test_blind_signing_flag_reported() {
        let settings = Settings {
            blind_signing_enabled: true,
        };
        let response = handle_get_app_configuration(&settings);

        if let Response::AppConfiguration(config) = response {
            assert!(config.blind_signing_enabled);
        } else {
            panic!("expected AppConfiguration response");
        }
    }
}
