pub mod customer_prompt;
pub mod main_menu;
pub mod notice;
pub mod source_picker;

pub use customer_prompt::run_customer_prompt;
pub use main_menu::{run_main_menu, MenuSummary};
pub use notice::{run_notice, NoticeKind};
pub use source_picker::run_source_picker;
