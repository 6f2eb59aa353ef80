mod deactivate_user_use_case;
mod get_public_profile_use_case;
mod get_reference_data_use_case;
mod get_user_settings_use_case;
mod update_user_settings_use_case;

pub use deactivate_user_use_case::{DeactivateUserError, DeactivateUserUseCase};
pub use get_public_profile_use_case::{GetPublicProfileError, GetPublicProfileUseCase};
pub use get_reference_data_use_case::{GetReferenceDataError, GetReferenceDataUseCase};
pub use get_user_settings_use_case::{GetUserSettingsError, GetUserSettingsUseCase};
pub use update_user_settings_use_case::{UpdateUserSettingsError, UpdateUserSettingsUseCase};
