use crate::auth::AuthenticatedUser;
use crate::forms::settings::ViewModeForm;
use crate::roles::Action;
use crate::services::{ServiceResult, ensure_allowed};
use crate::settings::{Preferences, SettingsStore, UiSettings};

pub fn get_ui_settings<S: SettingsStore>(
    preferences: &Preferences<S>,
    user: &AuthenticatedUser,
) -> ServiceResult<UiSettings> {
    ensure_allowed(user, Action::ViewRecords)?;

    Ok(UiSettings {
        view_mode: preferences.view_mode()?,
    })
}

/// Persist the layout preference. It applies to every user of the server.
pub fn set_view_mode<S: SettingsStore>(
    preferences: &Preferences<S>,
    user: &AuthenticatedUser,
    form: ViewModeForm,
) -> ServiceResult<UiSettings> {
    ensure_allowed(user, Action::ViewRecords)?;

    Ok(UiSettings {
        view_mode: preferences.set_view_mode(form.view_mode)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::assistant;
    use crate::settings::{MemorySettingsStore, ViewMode};

    #[test]
    fn view_mode_round_trips_through_preferences() {
        let preferences = Preferences::init(MemorySettingsStore::default()).expect("init");
        let user = assistant();

        assert_eq!(
            get_ui_settings(&preferences, &user).expect("read").view_mode,
            ViewMode::Table
        );

        set_view_mode(
            &preferences,
            &user,
            ViewModeForm {
                view_mode: ViewMode::Cards,
            },
        )
        .expect("save");

        assert_eq!(
            get_ui_settings(&preferences, &user).expect("read").view_mode,
            ViewMode::Cards
        );
    }
}
