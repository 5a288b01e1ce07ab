/// Open state of a single popup menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Interactions that move a menu between states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// The icon or avatar the menu hangs off was clicked
    TriggerClicked,
    ItemSelected,
    OutsideClicked,
    EscapePressed,
}

impl MenuState {
    pub fn on(self, event: MenuEvent) -> Self {
        match event {
            MenuEvent::TriggerClicked => Self::Open,
            MenuEvent::ItemSelected | MenuEvent::OutsideClicked | MenuEvent::EscapePressed => {
                Self::Closed
            }
        }
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}
