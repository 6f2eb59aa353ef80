mod profile;
mod reference;
mod settings;
mod user_id;

pub use profile::{full_name, LocaleNames, PublicProfile};
pub use reference::{City, Country, Language, ReferenceData};
pub use settings::{PartialSettings, Settings};
pub use user_id::UserId;
