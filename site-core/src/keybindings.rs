use egui::{Context, Key, Modifiers};
use folio::{ScrollDirection, SectionId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    NavigateTo(SectionId),
    ScrollCarousel(ScrollDirection),
    ToggleTheme,
    ToggleLanguage,
    CloseModal,
    ToggleDebug,
}

impl Command {
    /// Whether the command may run while the project details modal is open.
    pub fn passes_modal(self) -> bool {
        matches!(self, Command::CloseModal)
    }
}

/// Shortcut table shown in the debug overlay.
pub const KEYBINDINGS: [(&str, &str); 6] = [
    ("1..6", "go to section"),
    ("Left / Right", "scroll projects"),
    ("t", "toggle theme"),
    ("l", "toggle language"),
    ("Esc", "close project details"),
    ("d", "toggle debug overlay"),
];

pub fn command_for_key(key: Key, modifiers: Modifiers) -> Option<Command> {
    if key == Key::Escape {
        return Some(Command::CloseModal);
    }
    // Everything else is plain keys only, so browser and OS shortcuts pass through.
    if modifiers.any() {
        return None;
    }
    let section = |index| SectionId::from_index(index).map(Command::NavigateTo);
    match key {
        Key::Num1 => section(0),
        Key::Num2 => section(1),
        Key::Num3 => section(2),
        Key::Num4 => section(3),
        Key::Num5 => section(4),
        Key::Num6 => section(5),
        Key::ArrowLeft => Some(Command::ScrollCarousel(ScrollDirection::Left)),
        Key::ArrowRight => Some(Command::ScrollCarousel(ScrollDirection::Right)),
        Key::T => Some(Command::ToggleTheme),
        Key::L => Some(Command::ToggleLanguage),
        Key::D => Some(Command::ToggleDebug),
        _ => None,
    }
}

/// Commands for this frame's key presses. With a modal open only the ones
/// that [`Command::passes_modal`] are kept.
pub fn dispatch(ctx: &Context, modal_open: bool) -> Vec<Command> {
    ctx.input(|i| {
        i.events
            .iter()
            .filter_map(|ev| match ev {
                egui::Event::Key {
                    key,
                    pressed: true,
                    repeat: false,
                    modifiers,
                    ..
                } => command_for_key(*key, *modifiers),
                _ => None,
            })
            .filter(|cmd| !modal_open || cmd.passes_modal())
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_map_to_sections_in_nav_order() {
        assert_eq!(
            command_for_key(Key::Num1, Modifiers::NONE),
            Some(Command::NavigateTo(SectionId::About))
        );
        assert_eq!(
            command_for_key(Key::Num6, Modifiers::NONE),
            Some(Command::NavigateTo(SectionId::Contact))
        );
        assert_eq!(command_for_key(Key::Num7, Modifiers::NONE), None);
    }

    #[test]
    fn modifiers_disable_plain_shortcuts() {
        assert_eq!(command_for_key(Key::T, Modifiers::CTRL), None);
        assert_eq!(
            command_for_key(Key::Escape, Modifiers::SHIFT),
            Some(Command::CloseModal)
        );
    }

    #[test]
    fn arrows_scroll_the_carousel() {
        assert_eq!(
            command_for_key(Key::ArrowRight, Modifiers::NONE),
            Some(Command::ScrollCarousel(ScrollDirection::Right))
        );
    }

    fn press(keys: &[Key]) -> egui::RawInput {
        let mut input = egui::RawInput::default();
        for key in keys {
            input.events.push(egui::Event::Key {
                key: *key,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers: Modifiers::NONE,
            });
        }
        input
    }

    #[test]
    fn dispatch_reads_key_presses() {
        let ctx = Context::default();
        let mut commands = Vec::new();
        let _ = ctx.run(press(&[Key::L]), |ctx| commands = dispatch(ctx, false));
        assert_eq!(commands, vec![Command::ToggleLanguage]);
    }

    #[test]
    fn open_modal_only_lets_escape_through() {
        let ctx = Context::default();
        let keys = [Key::Num3, Key::ArrowRight, Key::T, Key::L, Key::D, Key::Escape];
        let mut commands = Vec::new();
        let _ = ctx.run(press(&keys), |ctx| commands = dispatch(ctx, true));
        assert_eq!(commands, vec![Command::CloseModal]);
    }
}
