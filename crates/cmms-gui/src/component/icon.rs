//! Lucide glyph mapping for row action icons.

use cmms_core::ActionIcon;
use iced_fonts::lucide;

/// Resolve an action icon to its Lucide glyph.
pub fn action_glyph(icon: ActionIcon) -> iced::widget::Text<'static> {
    match icon {
        ActionIcon::Eye => lucide::eye(),
        ActionIcon::Pencil => lucide::pencil(),
        ActionIcon::Trash => lucide::trash_two(),
        ActionIcon::Play => lucide::play(),
        ActionIcon::Check => lucide::check(),
        ActionIcon::Download => lucide::download(),
    }
}
