pub mod components;
pub mod flows;
pub mod navigation;
pub mod styles;

pub use components::TerminalGuard;
pub use flows::{
    run_customer_prompt, run_main_menu, run_notice, run_source_picker, MenuSummary, NoticeKind,
};
pub use navigation::{MenuAction, UiRoute};
