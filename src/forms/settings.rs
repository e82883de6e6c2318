use serde::Deserialize;

use crate::settings::ViewMode;

#[derive(Debug, Deserialize)]
pub struct ViewModeForm {
    pub view_mode: ViewMode,
}
