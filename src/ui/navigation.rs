/// Logical screens exposed by the terminal front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiRoute {
    MainMenu,
    SourcePicker,
    CustomerPrompt,
    BuildQuote,
    Notice,
}

impl UiRoute {
    /// Human readable label used by headers and logs.
    pub fn title(self) -> &'static str {
        match self {
            UiRoute::MainMenu => "Main Menu",
            UiRoute::SourcePicker => "Pick Source",
            UiRoute::CustomerPrompt => "Customer",
            UiRoute::BuildQuote => "Build Quote",
            UiRoute::Notice => "Notice",
        }
    }
}

/// Navigation outcomes from the main menu screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    PickSource,
    EditCustomer,
    BuildQuote,
    Exit,
}
