use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use signup::{FormRecord, WizardManager, WizardState};

use crate::commands::{Command, HELP};
use crate::render::render_panel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Drives a [`WizardManager`] from lines of text and renders every state
/// change to `out`.
pub struct Session<W: Write> {
    manager: WizardManager,
    out: W,
    prompt: bool,

    // Filled by the store listener and the notifier, drained after each line
    pending_render: Rc<RefCell<Option<WizardState>>>,
    submissions: Rc<RefCell<Vec<FormRecord>>>,
}

impl<W: Write> Session<W> {
    pub fn new(manager: WizardManager, out: W) -> Self {
        let pending_render = Rc::new(RefCell::new(None));
        let submissions = Rc::new(RefCell::new(Vec::new()));

        let submitted = Rc::clone(&submissions);
        let mut manager =
            manager.with_notifier(move |record: FormRecord| submitted.borrow_mut().push(record));

        let latest = Rc::clone(&pending_render);
        manager.subscribe(move |state: &WizardState| *latest.borrow_mut() = Some(state.clone()));

        Self {
            manager,
            out,
            prompt: false,
            pending_render,
            submissions,
        }
    }

    /// Print a `> ` prompt before each line, for interactive terminals.
    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    /// Read commands until `quit` or end of input.
    pub fn run<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        self.show()?;
        self.print_prompt()?;

        for line in input.lines() {
            let line = line?;
            if self.handle_line(&line)? == Flow::Quit {
                break;
            }
            self.print_prompt()?;
        }
        self.out.flush()
    }

    pub fn handle_line(&mut self, line: &str) -> io::Result<Flow> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(Flow::Continue);
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(self.out, "{}", err)?;
                return Ok(Flow::Continue);
            }
        };

        match command {
            Command::Quit => return Ok(Flow::Quit),
            Command::Help => writeln!(self.out, "{}", HELP)?,
            Command::Show => self.show()?,
            Command::Next => {
                if let Err(err) = self.manager.advance() {
                    self.report_unchanged(&err.message)?;
                } else if self.manager.current_step().is_last() {
                    self.report_unchanged("already on the last step")?;
                }
            }
            Command::Prev => {
                self.manager.retreat();
                if self.manager.current_step().is_first() {
                    self.report_unchanged("already on the first step")?;
                }
            }
            Command::Submit => {
                if let Err(errors) = self.manager.submit() {
                    self.report_unchanged(&errors.to_string())?;
                }
            }
            other => {
                if let Some(action) = other.action() {
                    self.manager.apply(action);
                }
            }
        }

        self.flush_render()?;
        self.flush_submissions()?;
        Ok(Flow::Continue)
    }

    fn show(&mut self) -> io::Result<()> {
        write!(self.out, "{}", render_panel(self.manager.state()))
    }

    /// Only mention a blocked operation if it produced no new snapshot;
    /// otherwise the re-rendered panel already shows it.
    fn report_unchanged(&mut self, message: &str) -> io::Result<()> {
        if self.pending_render.borrow().is_none() {
            writeln!(self.out, "  ! {}", message)?;
        }
        Ok(())
    }

    fn flush_render(&mut self) -> io::Result<()> {
        let latest = self.pending_render.borrow_mut().take();
        if let Some(state) = latest {
            write!(self.out, "{}", render_panel(&state))?;
        }
        Ok(())
    }

    fn flush_submissions(&mut self) -> io::Result<()> {
        let records: Vec<FormRecord> = self.submissions.borrow_mut().drain(..).collect();
        for record in records {
            let json = serde_json::to_string_pretty(&record).map_err(io::Error::other)?;
            writeln!(self.out, "submitted:\n{}", json)?;
        }
        Ok(())
    }

    fn print_prompt(&mut self) -> io::Result<()> {
        if self.prompt {
            write!(self.out, "> ")?;
            self.out.flush()?;
        }
        Ok(())
    }
}
