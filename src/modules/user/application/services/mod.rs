mod deactivate_user_service;
mod get_public_profile_service;
mod get_reference_data_service;
mod get_user_settings_service;
mod update_user_settings_service;

pub use deactivate_user_service::DeactivateUserService;
pub use get_public_profile_service::GetPublicProfileService;
pub use get_reference_data_service::GetReferenceDataService;
pub use get_user_settings_service::GetUserSettingsService;
pub use update_user_settings_service::UpdateUserSettingsService;
