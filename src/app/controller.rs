use std::fs;

use log::{info, warn};

use crate::app::state::SessionState;
use crate::config::AppConfig;
use crate::error::{AppError, Context, Result};
use crate::quote::{QuoteBuilder, QuoteRequest};
use crate::ui::{
    run_customer_prompt, run_main_menu, run_notice, run_source_picker, MenuAction, MenuSummary,
    NoticeKind,
};
use crate::utils::{current_human_timestamp, quote_date_stamp};
use crate::workbook::{read_source_rows, WorkbookWriter};

/// Coordinates configuration, session state, and TUI flows.
pub struct AppController<W: WorkbookWriter> {
    config: AppConfig,
    builder: QuoteBuilder<W>,
    session: SessionState,
}

impl<W: WorkbookWriter> AppController<W> {
    pub fn new(config: AppConfig, writer: W) -> Result<Self> {
        let input_dir = config.input_dir();
        fs::create_dir_all(&input_dir).with_context(|| {
            format!("Failed to create input directory {}", input_dir.display())
        })?;

        let builder = QuoteBuilder::new(
            config.output_dir(),
            config.output_extension.trim(),
            writer,
        );
        Ok(Self {
            config,
            builder,
            session: SessionState::new(),
        })
    }

    pub fn run(mut self) -> Result<()> {
        info!(
            "reading sources from {}, writing quotes to {}",
            self.config.input_dir().display(),
            self.builder.output_dir().display()
        );

        loop {
            let action = run_main_menu(self.summary())?;
            match action {
                MenuAction::PickSource => self.handle_pick_source()?,
                MenuAction::EditCustomer => {
                    if let Some(customer) = run_customer_prompt(self.session.customer())? {
                        self.session.set_customer(customer);
                    }
                }
                MenuAction::BuildQuote => self.handle_build()?,
                MenuAction::Exit => return Ok(()),
            }
        }
    }

    fn summary(&self) -> MenuSummary<'_> {
        let source = self.session.source();
        MenuSummary {
            source: source.map(|s| s.name.as_str()),
            descriptor: source.map(|s| &s.descriptor),
            customer: self.session.customer(),
            last_output: self.session.last_output(),
        }
    }

    fn handle_pick_source(&mut self) -> Result<()> {
        let Some(path) = run_source_picker(&self.config.input_dir())? else {
            return Ok(());
        };

        let display = path.display().to_string();
        if self.session.select_source(path).is_none() {
            warn!("{} does not follow the quote naming convention", display);
            run_notice(
                NoticeKind::Warning,
                &format!(
                    "{}\n\ndoes not follow DATE_LOT_LINE_PROC_INV(TOOL).xlsx.\nThe previous selection was kept.",
                    display
                ),
            )?;
        }
        Ok(())
    }

    fn handle_build(&mut self) -> Result<()> {
        match self.build_quote() {
            Ok(path) => {
                let message = format!("Quote written to\n{}", path.display());
                self.session.set_last_output(path);
                run_notice(NoticeKind::Info, &message)
            }
            Err(err) => {
                warn!("quote build failed: {}", err);
                run_notice(NoticeKind::Warning, &format!("Quote not written:\n{}", err))
            }
        }
    }

    fn build_quote(&mut self) -> Result<std::path::PathBuf> {
        let Some(source) = self.session.source() else {
            return Err(AppError::message(
                "Pick a source workbook named DATE_LOT_LINE_PROC_INV(TOOL).xlsx first.",
            ));
        };

        let rows = read_source_rows(&source.path, self.config.sheet_name())?;
        let date_stamp = quote_date_stamp(&self.config.date_format);
        let created = current_human_timestamp();
        let request = QuoteRequest {
            source_name: &source.name,
            descriptor: &source.descriptor,
            customer: self.session.customer(),
            date_stamp: &date_stamp,
            created: &created,
            rows,
        };
        self.builder.build(request)
    }
}
